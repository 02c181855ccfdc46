use serde::{Deserialize, Serialize};

fn default_work() -> String {
    "Work".to_string()
}

/// 报价录入行
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntryRow {
    #[serde(default)]
    pub sno: u32,
    #[serde(default = "default_work")]
    pub work: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub enter_price: Option<f64>,
    #[serde(default)]
    pub material_id: Option<String>,
}

/// 录入行 + 行合计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedRow {
    pub sno: u32,
    pub work: String,
    pub unit: String,
    pub quantity: f64,
    pub enter_price: Option<f64>,
    pub material_id: Option<String>,
    /// 未录入单价时为 None
    pub total: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntrySummary {
    pub rows: Vec<PricedRow>,
    pub grand_total: f64,
}
