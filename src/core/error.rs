//! 核心错误处理模块

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::response::ErrorBody;
use crate::app::product::service::ServiceError;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const PRODUCT_EXISTS: &str = "Product already exists";

/// 找不到产品时使用的 HTTP 状态码
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundStatus {
    /// 200，与现有客户端保持兼容
    #[default]
    Ok,
    /// 404
    NotFound,
}

impl NotFoundStatus {
    pub fn status_code(self) -> StatusCode {
        match self {
            NotFoundStatus::Ok => StatusCode::OK,
            NotFoundStatus::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    NotFound { status: StatusCode },
    Conflict,
    /// 请求在到达服务层之前被提取器拒绝
    Rejected { status: StatusCode, message: String },
}

impl CoreError {
    pub fn from_service(err: ServiceError, not_found: NotFoundStatus) -> Self {
        match err {
            ServiceError::NotFound(_) => CoreError::NotFound {
                status: not_found.status_code(),
            },
            ServiceError::Conflict(_) => CoreError::Conflict,
        }
    }
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl ErrorResponse {
    fn new(status: StatusCode, message: String) -> Self {
        let error = status
            .canonical_reason()
            .unwrap_or("UNKNOWN")
            .to_uppercase()
            .replace(' ', "_");
        Self {
            error,
            message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            CoreError::NotFound { status } => {
                (status, axum::Json(ErrorBody::new(PRODUCT_NOT_FOUND))).into_response()
            }
            CoreError::Conflict => (
                StatusCode::CONFLICT,
                axum::Json(ErrorBody::new(PRODUCT_EXISTS)),
            )
                .into_response(),
            CoreError::Rejected { status, message } => {
                (status, axum::Json(ErrorResponse::new(status, message))).into_response()
            }
        }
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for CoreError {
    fn from(rejection: PathRejection) -> Self {
        // 路径参数无法解析时与请求体校验失败一致，返回 422
        let status = match rejection {
            PathRejection::FailedToDeserializePathParams(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => rejection.status(),
        };
        CoreError::Rejected {
            status,
            message: rejection.body_text(),
        }
    }
}
