use crate::config::ReportConfig;
use crate::error::AppError;
use crate::models::{
    MaterialBalance, MaterialIssueRequest, MaterialStock, PriceEntryRow, PriceEntrySummary,
    QuotationCalculation, QuoteItem, VendorCalculation, WorkOrderRequest,
};
use crate::report::export_vendor_csv;
use crate::service::{
    calculate, calculate_vendor, calculate_work_order_request, submit_price_rows,
    usable_materials, validate_issue,
};
use axum::{
    extract::{Json, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 请求体: 单个供应商的报价行
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationRequest {
    #[serde(default)]
    pub quote_items: Vec<QuoteItem>,
}

/// 工单申请计算响应
#[derive(Debug, Serialize)]
pub struct WorkOrderResponse {
    pub success: bool,
    pub message: String,
    pub vendors: Vec<VendorCalculation>,
}

#[derive(Debug, Deserialize)]
pub struct PriceEntryRequest {
    #[serde(default)]
    pub rows: Vec<PriceEntryRow>,
}

#[derive(Debug, Deserialize)]
pub struct UsableMaterialsRequest {
    #[serde(default)]
    pub materials: Vec<MaterialStock>,
}

#[derive(Debug, Deserialize)]
pub struct IssueValidationRequest {
    #[serde(default)]
    pub materials: Vec<MaterialStock>,
    pub issue: MaterialIssueRequest,
}

/// 通用响应体
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::VendorNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!("Request failed ({}): {}", status, self);
        let body = ApiResponse::<()> {
            success: false,
            message: format!("Error: {}", self),
            data: None,
        };
        (status, Json(body)).into_response()
    }
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 单供应商报价计税
pub async fn calculate_quotation(Json(req): Json<QuotationRequest>) -> Json<QuotationCalculation> {
    Json(calculate(&req.quote_items))
}

/// 工单申请: 全部供应商计税
pub async fn calculate_work_order(Json(req): Json<WorkOrderRequest>) -> Response {
    let vendors = calculate_work_order_request(&req);
    let item_count: usize = vendors.iter().map(|v| v.calculated.len()).sum();
    tracing::info!("WOR '{}': {} vendors, {} items", req.title, vendors.len(), item_count);

    let response = WorkOrderResponse {
        success: true,
        message: format!(
            "Calculated {} vendor quotations, {} items",
            vendors.len(),
            item_count
        ),
        vendors,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// 导出指定供应商的计税表 (CSV)
pub async fn export_vendor(
    State(report): State<Arc<ReportConfig>>,
    Path(vendor_index): Path<usize>,
    Json(req): Json<WorkOrderRequest>,
) -> Result<Response, AppError> {
    let vendor = req
        .vendor_quotations
        .get(vendor_index)
        .ok_or(AppError::VendorNotFound(vendor_index))?;

    let calculation = calculate_vendor(vendor);
    let body = export_vendor_csv(&calculation, &report.currency_symbol)?;
    tracing::info!("Exported vendor {} ({} rows)", calculation.vendor_id, calculation.calculated.len());

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        body,
    )
        .into_response())
}

/// 报价录入提交
pub async fn submit_price_entry(
    Json(req): Json<PriceEntryRequest>,
) -> Result<Json<ApiResponse<PriceEntrySummary>>, AppError> {
    let summary = submit_price_rows(&req.rows)?;
    Ok(Json(ApiResponse {
        success: true,
        message: format!("Accepted {} priced rows", summary.rows.len()),
        data: Some(summary),
    }))
}

/// 可发料物料 (结余 > 0)
pub async fn list_usable_materials(
    Json(req): Json<UsableMaterialsRequest>,
) -> Json<ApiResponse<Vec<MaterialBalance>>> {
    let usable = usable_materials(&req.materials);
    Json(ApiResponse {
        success: true,
        message: format!("{} of {} materials have balance", usable.len(), req.materials.len()),
        data: Some(usable),
    })
}

/// 发料申请校验
pub async fn validate_material_issue(
    Json(req): Json<IssueValidationRequest>,
) -> Result<Json<ApiResponse<MaterialBalance>>, AppError> {
    let stock = validate_issue(&req.materials, &req.issue)?;
    Ok(Json(ApiResponse {
        success: true,
        message: format!("Issue of {} {} is valid", req.issue.issued_quantity, stock.unit),
        data: Some(stock),
    }))
}
