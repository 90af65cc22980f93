use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product master record. Prices are net, tax rate is a whole percent.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// ABC classification: "a", "b" or "c"
    pub group: String,
    pub code: String,
    pub batch_number: String,
    pub unit: String,
    pub purchase_price: Decimal,
    pub sales_price_net: Decimal,
    pub tax_rate: i32,
    pub best_before_date: Date,
    pub description: String,
    pub manufacturer_id: i64,
    pub category_id: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::manufacturer::Entity",
        from = "Column::ManufacturerId",
        to = "super::manufacturer::Column::Id"
    )]
    Manufacturer,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::note_position::Entity")]
    NotePositions,
    #[sea_orm(has_many = "super::stock_position::Entity")]
    StockPositions,
}

impl Related<super::manufacturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manufacturer.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::note_position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NotePositions.def()
    }
}

impl Related<super::stock_position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StockPositions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
