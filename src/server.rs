//! 路由组装与服务启动

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::app::product::{
    handler::{self, AppState},
    service::ProductService,
};
use crate::core::middleware::request_logging_middleware;
use crate::infrastructure::config::{Config, ConfigError, CorsConfig};

/// 跨域策略；携带凭证时方法和请求头按预检请求回显
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    if config.allow_any {
        return Ok(CorsLayer::permissive());
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.origin_values()?))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route(
            "/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/products/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(cors),
        )
        .with_state(state)
}

/// 按配置创建产品服务和完整路由
pub fn build_app(config: &Config) -> Result<Router, ConfigError> {
    let product_service = if config.api.seed {
        ProductService::new()
    } else {
        ProductService::empty()
    }
    .with_duplicate_ids(config.api.duplicate_ids);

    info!("✅ 已初始化 {} 个产品", product_service.len());

    let state = AppState {
        product_service,
        not_found: config.api.not_found_status,
    };

    Ok(router(state, cors_layer(&config.cors)?))
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let app = build_app(&config)?;

    let addr = config.server.listen_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 产品 API 服务器运行在 http://{}", listener.local_addr()?);
    info!("   GET    /products      - 获取所有产品");
    info!("   POST   /products      - 创建产品");
    info!("   GET    /products/:id  - 获取特定产品");
    info!("   PUT    /products/:id  - 更新产品");
    info!("   DELETE /products/:id  - 删除产品");
    if config.cors.allow_any {
        warn!("跨域策略已放开: 允许任意来源");
    } else {
        info!("允许的跨域来源: {:?}", config.cors.allowed_origins);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("无法监听退出信号: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到退出信号，正在关闭服务器...");
}
