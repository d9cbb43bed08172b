use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_product::aggregate::{MessageResponse, Product, ProductDto, ProductId};
use sea_orm::DatabaseConnection;

use crate::domain::a001_product::service::{self, ProductError};

fn status_for(error: &ProductError) -> StatusCode {
    match error {
        ProductError::Validation(_) => StatusCode::BAD_REQUEST,
        ProductError::NotFound(_) => StatusCode::NOT_FOUND,
        ProductError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_and_map(operation: &str, error: ProductError) -> StatusCode {
    let status = status_for(&error);
    if status.is_server_error() {
        tracing::error!("{} failed: {}", operation, error);
    } else {
        tracing::warn!("{} rejected: {}", operation, error);
    }
    status
}

fn parse_id(raw: &str) -> Result<ProductId, StatusCode> {
    ProductId::from_string(raw).map_err(|e| {
        tracing::warn!("{}", e);
        StatusCode::BAD_REQUEST
    })
}

/// GET /api/products
pub async fn list_all(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<Product>>, StatusCode> {
    service::list_all(&db)
        .await
        .map(Json)
        .map_err(|e| log_and_map("list products", e))
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> Result<Json<Product>, StatusCode> {
    let id = parse_id(&id)?;
    service::get_by_id(&db, id)
        .await
        .map(Json)
        .map_err(|e| log_and_map("get product", e))
}

/// POST /api/products
pub async fn create(
    State(db): State<DatabaseConnection>,
    Json(dto): Json<ProductDto>,
) -> Result<(StatusCode, Json<MessageResponse>), StatusCode> {
    match service::create(&db, dto).await {
        Ok(_) => Ok((
            StatusCode::CREATED,
            Json(MessageResponse::new("Товар добавлен.")),
        )),
        Err(e) => Err(log_and_map("create product", e)),
    }
}

/// PUT /api/products/:id
pub async fn update(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    Json(dto): Json<ProductDto>,
) -> Result<Json<MessageResponse>, StatusCode> {
    let id = parse_id(&id)?;
    match service::update(&db, id, dto).await {
        Ok(()) => Ok(Json(MessageResponse::new("Товар обновлён."))),
        Err(e) => Err(log_and_map("update product", e)),
    }
}

/// DELETE /api/products/:id
pub async fn delete(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, StatusCode> {
    let id = parse_id(&id)?;
    match service::delete(&db, id).await {
        Ok(()) => Ok(Json(MessageResponse::new("Товар удалён."))),
        Err(e) => Err(log_and_map("delete product", e)),
    }
}
