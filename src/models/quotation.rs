use serde::{Deserialize, Serialize};

/// 供应商报价明细 (QuoteItem)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteItem {
    pub material_name: String,
    pub unit: String,
    pub quantity: f64,
    pub quoted_unit_rate: f64,
}

/// 计税后的报价明细: 原始字段 + 派生金额
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedItem {
    #[serde(flatten)]
    pub item: QuoteItem,
    pub gross: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub round_off: f64,
    pub net_amount: f64,
}

/// 单个供应商的汇总行
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorTotals {
    pub gross: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub round_off: f64,
    pub net: f64,
}

impl VendorTotals {
    /// 累加一行 (普通浮点加法)
    pub fn add(&mut self, item: &CalculatedItem) {
        self.gross += item.gross;
        self.cgst += item.cgst;
        self.sgst += item.sgst;
        self.round_off += item.round_off;
        self.net += item.net_amount;
    }
}

/// 计算结果: 明细 + 汇总
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuotationCalculation {
    pub calculated: Vec<CalculatedItem>,
    pub totals: VendorTotals,
}

/// 审批状态徽标 (决定显示颜色)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Approved,
    Pending,
    /// 其余任何状态 (含缺失)
    Other,
}

impl ApprovalStatus {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("Approved") => Self::Approved,
            Some("Pending") => Self::Pending,
            _ => Self::Other,
        }
    }
}

/// 供应商报价 (vendorQuotations 元素)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VendorQuotation {
    pub vendor_id: String,
    pub vendor_name: String,
    pub quotation_id: String,
    pub quotation_date: Option<String>,
    pub delivery_period: Option<String>,
    pub address: String,
    pub approval_status: Option<String>,
    pub quote_items: Vec<QuoteItem>,
}

/// 工单申请 (Work Order Request)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkOrderRequest {
    pub title: String,
    pub description: String,
    pub vendor_quotations: Vec<VendorQuotation>,
}

/// 单个供应商的计算视图
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorCalculation {
    pub vendor_id: String,
    pub vendor_name: String,
    pub quotation_id: String,
    /// dd/mm/yyyy 或 "—"
    pub quotation_date: String,
    pub delivery_period: String,
    pub address: String,
    /// 原始审批状态文本, 缺失时为 "—"
    pub approval_status: String,
    pub approval_badge: ApprovalStatus,
    pub calculated: Vec<CalculatedItem>,
    pub totals: VendorTotals,
}
