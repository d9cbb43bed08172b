use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;

use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub company: String,
    pub product_name: String,
    pub package_unit: String,
    pub contact: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: ProductId(m.id),
            company: m.company,
            product_name: m.product_name,
            package_unit: m.package_unit,
            contact: m.contact,
        }
    }
}

/// Все товары, отсортированные по компании, затем по наименованию
pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Product>> {
    let items = Entity::find()
        .order_by_asc(Column::Company)
        .order_by_asc(Column::ProductName)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: ProductId) -> anyhow::Result<Option<Product>> {
    let result = Entity::find_by_id(id.value()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, dto: &ProductDto) -> anyhow::Result<ProductId> {
    let active = ActiveModel {
        id: NotSet,
        company: Set(dto.company.clone()),
        product_name: Set(dto.product_name.clone()),
        package_unit: Set(dto.package_unit.clone()),
        contact: Set(Some(dto.contact.clone().unwrap_or_default())),
    };
    let model = active.insert(db).await?;
    Ok(ProductId(model.id))
}

/// Returns `false` when no row has this id.
pub async fn update(db: &DatabaseConnection, id: ProductId, dto: &ProductDto) -> anyhow::Result<bool> {
    let result = Entity::update_many()
        .col_expr(Column::Company, Expr::value(dto.company.clone()))
        .col_expr(Column::ProductName, Expr::value(dto.product_name.clone()))
        .col_expr(Column::PackageUnit, Expr::value(dto.package_unit.clone()))
        .col_expr(
            Column::Contact,
            Expr::value(dto.contact.clone().unwrap_or_default()),
        )
        .filter(Column::Id.eq(id.value()))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete(db: &DatabaseConnection, id: ProductId) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.value()).exec(db).await?;
    Ok(result.rows_affected > 0)
}
