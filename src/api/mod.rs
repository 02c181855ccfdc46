pub mod handlers;

pub use handlers::*;

use crate::config::ReportConfig;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// 构建全部路由
pub fn router(report: Arc<ReportConfig>) -> Router {
    let export_routes = Router::new()
        .route("/api/wor/export/:vendor_index", post(export_vendor))
        .with_state(report);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/quotation/calculate", post(calculate_quotation))
        .route("/api/wor/calculate", post(calculate_work_order))
        .route("/api/wor/price-entry", post(submit_price_entry))
        .route("/api/material/usable", post(list_usable_materials))
        .route("/api/material/issue/validate", post(validate_material_issue))
        .merge(export_routes)
}
