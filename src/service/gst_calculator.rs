use crate::models::{CalculatedItem, QuotationCalculation, QuoteItem, VendorTotals};

/// CGST 税率 (9%)
pub const CGST_RATE: f64 = 0.09;
/// SGST 税率 (9%)
pub const SGST_RATE: f64 = 0.09;

/// 单行计税: 毛额 -> CGST/SGST -> 取整 -> 尾差
pub fn calculate_item(item: &QuoteItem) -> CalculatedItem {
    let gross = item.quantity * item.quoted_unit_rate;
    let cgst = gross * CGST_RATE;
    let sgst = gross * SGST_RATE;
    let total = gross + cgst + sgst;
    // 四舍五入, .5 远离零
    let net_amount = total.round();
    let round_off = net_amount - total;

    CalculatedItem {
        item: item.clone(),
        gross,
        cgst,
        sgst,
        round_off,
        net_amount,
    }
}

/// 计算一个供应商的全部报价行及汇总, 输出顺序与输入一致
pub fn calculate(items: &[QuoteItem]) -> QuotationCalculation {
    let calculated: Vec<CalculatedItem> = items.iter().map(calculate_item).collect();

    let mut totals = VendorTotals::default();
    for item in &calculated {
        totals.add(item);
    }

    QuotationCalculation { calculated, totals }
}
