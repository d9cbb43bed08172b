use super::repository;
use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId};
use sea_orm::DatabaseConnection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Product {0} not found")]
    NotFound(ProductId),

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

/// Создание нового товара
pub async fn create(db: &DatabaseConnection, dto: ProductDto) -> Result<ProductId, ProductError> {
    dto.validate().map_err(ProductError::Validation)?;
    let id = repository::insert(db, &dto).await?;
    tracing::info!("Product {} created: {} / {}", id, dto.company, dto.product_name);
    Ok(id)
}

/// Обновление существующего товара (все поля перезаписываются)
pub async fn update(
    db: &DatabaseConnection,
    id: ProductId,
    dto: ProductDto,
) -> Result<(), ProductError> {
    dto.validate().map_err(ProductError::Validation)?;
    if !repository::update(db, id, &dto).await? {
        return Err(ProductError::NotFound(id));
    }
    tracing::info!("Product {} updated", id);
    Ok(())
}

/// Удаление товара
pub async fn delete(db: &DatabaseConnection, id: ProductId) -> Result<(), ProductError> {
    if !repository::delete(db, id).await? {
        return Err(ProductError::NotFound(id));
    }
    tracing::info!("Product {} deleted", id);
    Ok(())
}

/// Получение товара по ID
pub async fn get_by_id(db: &DatabaseConnection, id: ProductId) -> Result<Product, ProductError> {
    repository::get_by_id(db, id)
        .await?
        .ok_or(ProductError::NotFound(id))
}

/// Получение списка всех товаров
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Product>, ProductError> {
    Ok(repository::list_all(db).await?)
}
