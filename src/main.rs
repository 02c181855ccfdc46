use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;
use wor_gst_rust::{api, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env()?;
    info!("Starting server with config: {:?}", config);

    let app = api::router(Arc::new(config.report.clone())).layer(ServiceBuilder::new());

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /api/quotation/calculate       - GST for one vendor's quote items");
    info!("  POST /api/wor/calculate             - GST for every vendor of a work order request");
    info!("  POST /api/wor/export/:vendor_index  - CSV of one vendor's calculated table");
    info!("  POST /api/wor/price-entry           - quotation price entry submit");
    info!("  POST /api/material/usable           - materials with remaining balance");
    info!("  POST /api/material/issue/validate   - material issue validation");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
