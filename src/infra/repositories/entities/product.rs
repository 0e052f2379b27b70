//! Product database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Product;

/// `seq` is a storage-only insertion counter used as the listing order key;
/// `id` is the public identifier.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seq: i32,
    #[sea_orm(unique)]
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Product {
            id: model.id.into(),
            name: model.name,
            price: model.price,
            created_at: model.created_at,
        }
    }
}
