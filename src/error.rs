use thiserror::Error;

/// 表单校验错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter price for all items (row {sno})")]
    MissingPrice { sno: u32 },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid Priority Level: {0}")]
    InvalidPriority(String),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Issued quantity must be at least 1")]
    QuantityTooSmall,

    #[error("Issued quantity cannot exceed received quantity ({balance} available)")]
    ExceedsBalance { balance: f64 },
}

/// 服务层错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Vendor quotation {0} not found")]
    VendorNotFound(usize),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("CSV writer flush failed: {0}")]
    Io(#[from] std::io::Error),
}
