use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// External party. Contractors are divided into clients and suppliers.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contractors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// "client" or "supplier"
    pub kind: String,
    pub company_name: Option<String>,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
