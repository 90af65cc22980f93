use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Line item of a delivery note. Price, tax rate and discount are
/// snapshotted at creation time, the value columns are derived server
/// side from them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "note_positions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub note_id: i64,
    pub product_id: i64,
    pub quantity: Decimal,
    pub price_net: Decimal,
    pub tax_rate: i32,
    pub discount_value: Decimal,
    pub value_net: Decimal,
    pub tax_value: Decimal,
    pub value_gross: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::note::Entity",
        from = "Column::NoteId",
        to = "super::note::Column::Id"
    )]
    Note,
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Note.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
