use crate::error::AppError;
use crate::models::VendorCalculation;
use crate::report::format::{format_amount, format_currency};

const HEADER: [&str; 10] = [
    "S.No",
    "Work",
    "Quantity",
    "Unit",
    "Rate",
    "Gross",
    "CGST (9%)",
    "SGST (9%)",
    "Round Off",
    "Net",
];

/// 导出单个供应商的报价计算表 (含合计行)
pub fn export_vendor_csv(vendor: &VendorCalculation, currency_symbol: &str) -> Result<String, AppError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(HEADER)?;

    for (idx, c) in vendor.calculated.iter().enumerate() {
        wtr.write_record([
            (idx + 1).to_string(),
            c.item.material_name.clone(),
            c.item.quantity.to_string(),
            c.item.unit.clone(),
            format_amount(c.item.quoted_unit_rate),
            format_amount(c.gross),
            format_amount(c.cgst),
            format_amount(c.sgst),
            format_amount(c.round_off),
            format_currency(currency_symbol, c.net_amount),
        ])?;
    }

    let t = &vendor.totals;
    wtr.write_record([
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        "Total".to_string(),
        format_currency(currency_symbol, t.gross),
        format_currency(currency_symbol, t.cgst),
        format_currency(currency_symbol, t.sgst),
        format_currency(currency_symbol, t.round_off),
        format_currency(currency_symbol, t.net),
    ])?;

    wtr.flush()?;
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
