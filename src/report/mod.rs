pub mod csv_export;
pub mod format;

pub use csv_export::export_vendor_csv;
pub use format::{format_amount, format_currency, format_date_en_gb, PLACEHOLDER};
