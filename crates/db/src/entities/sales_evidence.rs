//! `SeaORM` Entity for sales_evidence table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "sales_evidence")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub mime_type: String,
    pub size: i64,
    pub filename: String,
    pub storage_object_name: String,
    pub is_removed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
