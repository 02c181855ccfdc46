use crate::error::ValidationError;
use crate::models::{PriceEntryRow, PriceEntrySummary, PricedRow};

/// 计算每行合计 (单价 x 数量), 未录入单价的行合计为空
pub fn price_rows(rows: &[PriceEntryRow]) -> Vec<PricedRow> {
    rows.iter()
        .map(|row| {
            let price = row.enter_price.filter(|p| *p != 0.0);
            PricedRow {
                sno: row.sno,
                work: row.work.clone(),
                unit: row.unit.clone(),
                quantity: row.quantity,
                enter_price: row.enter_price,
                material_id: row.material_id.clone(),
                total: price.map(|p| p * row.quantity),
            }
        })
        .collect()
}

/// 提交报价: 所有行必须录入单价
pub fn submit_price_rows(rows: &[PriceEntryRow]) -> Result<PriceEntrySummary, ValidationError> {
    if let Some(missing) = rows
        .iter()
        .find(|r| r.enter_price.map_or(true, |p| p == 0.0 || p.is_nan()))
    {
        return Err(ValidationError::MissingPrice { sno: missing.sno });
    }

    let rows = price_rows(rows);
    let grand_total = rows.iter().filter_map(|r| r.total).sum();
    Ok(PriceEntrySummary { rows, grand_total })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sno: u32, quantity: f64, price: Option<f64>) -> PriceEntryRow {
        PriceEntryRow {
            sno,
            work: "Excavation".to_string(),
            unit: "Cum".to_string(),
            quantity,
            enter_price: price,
            material_id: Some(format!("m{}", sno)),
        }
    }

    #[test]
    fn test_row_totals() {
        let priced = price_rows(&[row(1, 4.0, Some(12.5)), row(2, 3.0, None)]);
        assert_eq!(priced[0].total, Some(50.0));
        assert_eq!(priced[1].total, None);
    }

    #[test]
    fn test_submit_rejects_missing_price() {
        let err = submit_price_rows(&[row(1, 4.0, Some(12.5)), row(2, 3.0, Some(0.0))]).unwrap_err();
        assert_eq!(err, ValidationError::MissingPrice { sno: 2 });
    }

    #[test]
    fn test_submit_grand_total() {
        let summary = submit_price_rows(&[row(1, 4.0, Some(12.5)), row(2, 3.0, Some(10.0))]).unwrap();
        assert_eq!(summary.rows.len(), 2);
        assert!((summary.grand_total - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_row_defaults_from_json() {
        let r: PriceEntryRow = serde_json::from_str(r#"{"sno":1}"#).unwrap();
        assert_eq!(r.work, "Work");
        assert_eq!(r.quantity, 0.0);
        assert!(r.enter_price.is_none());
    }
}
