pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod service;

pub use self::config::AppConfig;
pub use self::error::{AppError, ValidationError};
pub use self::service::calculate;
