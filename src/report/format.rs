use chrono::{DateTime, NaiveDate};

/// 缺失值占位符
pub const PLACEHOLDER: &str = "—";

/// 金额保留两位小数, 恰好落在 .xx5 的值向远离零方向进位 (与 toFixed(2) 一致)
pub fn format_amount(value: f64) -> String {
    // 两位小数的精确中点必为 1/8 的奇数倍, 此时 value * 100 精确可表示
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths.abs() < 1e14 && eighths % 2.0 != 0.0 {
        let cents = value * 100.0 + 0.5f64.copysign(value);
        return format!("{:.2}", cents / 100.0);
    }
    format!("{:.2}", value)
}

/// 带货币符号的金额, 如 ₹20650.00
pub fn format_currency(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, format_amount(value))
}

/// 日期格式化为 dd/mm/yyyy, 无法解析时返回占位符
pub fn format_date_en_gb(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return PLACEHOLDER.to_string();
    };

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_two_decimals() {
        assert_eq!(format_amount(20650.0), "20650.00");
        assert_eq!(format_amount(0.0118), "0.01");
        assert_eq!(format_amount(-0.39), "-0.39");
    }

    #[test]
    fn test_amount_ties_round_away_from_zero() {
        assert_eq!(format_amount(12.125), "12.13");
        assert_eq!(format_amount(10.625), "10.63");
        assert_eq!(format_amount(0.375), "0.38");
        assert_eq!(format_amount(-12.125), "-12.13");
        // 0.5 不是中点
        assert_eq!(format_amount(0.5), "0.50");
        // 1.005 的二进制值略小于中点
        assert_eq!(format_amount(1.005), "1.00");
        assert_eq!(format_currency("₹", 2.875), "₹2.88");
    }

    #[test]
    fn test_currency_prefix() {
        assert_eq!(format_currency("₹", 118.0), "₹118.00");
    }

    #[test]
    fn test_dates() {
        assert_eq!(format_date_en_gb(Some("2025-01-05")), "05/01/2025");
        assert_eq!(format_date_en_gb(Some("2025-11-30T10:15:00+05:30")), "30/11/2025");
        assert_eq!(format_date_en_gb(Some("not a date")), PLACEHOLDER);
        assert_eq!(format_date_en_gb(Some("")), PLACEHOLDER);
        assert_eq!(format_date_en_gb(None), PLACEHOLDER);
    }
}
