//! 产品处理器

use axum::{extract::State, response::Json};

use super::{
    model::Product,
    service::{ProductService, ServiceError},
};
use crate::core::{
    error::{CoreError, NotFoundStatus},
    extract::{AppJson, AppPath},
    response::{MessageBody, PRODUCT_DELETED},
};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    pub not_found: NotFoundStatus,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self {
            product_service,
            not_found: NotFoundStatus::default(),
        }
    }

    fn reject(&self, err: ServiceError) -> CoreError {
        CoreError::from_service(err, self.not_found)
    }
}

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.product_service.list_products())
}

pub async fn get_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Product>, CoreError> {
    let product = state
        .product_service
        .get_product(id)
        .map_err(|e| state.reject(e))?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Product>,
) -> Result<Json<Product>, CoreError> {
    let product = state
        .product_service
        .create_product(payload)
        .map_err(|e| state.reject(e))?;
    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<Product>,
) -> Result<Json<Product>, CoreError> {
    let product = state
        .product_service
        .update_product(id, payload)
        .map_err(|e| state.reject(e))?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageBody>, CoreError> {
    state
        .product_service
        .delete_product(id)
        .map_err(|e| state.reject(e))?;
    Ok(Json(MessageBody::new(PRODUCT_DELETED)))
}
