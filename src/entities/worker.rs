use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Company employee allowed to issue billing documents.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub email: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::invoice::Entity")]
    Invoices,
    #[sea_orm(has_many = "super::advance_invoice::Entity")]
    AdvanceInvoices,
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoices.def()
    }
}

impl Related<super::advance_invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdvanceInvoices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
