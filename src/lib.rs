//! # 产品 API
//!
//! 基于 Axum 的内存产品管理服务，按分层架构组织：
//! - `app`: 产品模型、服务与处理器
//! - `core`: 错误处理、响应结构、提取器与中间件
//! - `infrastructure`: 配置与日志
//! - `server`: 路由组装与启动

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod server;

pub use app::product::model::Product;
pub use app::product::service::{DuplicateIds, ProductService, ServiceError};
pub use infrastructure::config::Config;
