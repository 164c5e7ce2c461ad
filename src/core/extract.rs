//! 请求提取器，拒绝时统一返回 [`CoreError`]

use axum::extract::{FromRequest, FromRequestParts};

use super::error::CoreError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(CoreError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(CoreError))]
pub struct AppPath<T>(pub T);
