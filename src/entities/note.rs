use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Delivery note. Confirms an order, supply, dispatch or return of
/// products between two parties and is the basis for invoicing.
/// Totals are denormalized and updated whenever a position is added,
/// inside the same transaction.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// "order", "supply", "dispatch" or "return"
    pub kind: String,
    /// "internal" or "external"
    pub handover: String,
    #[sea_orm(unique)]
    pub number: String,
    pub from_store_id: Option<i64>,
    pub from_shop_id: Option<i64>,
    pub from_contractor_id: Option<i64>,
    pub to_store_id: Option<i64>,
    pub to_shop_id: Option<i64>,
    pub to_contractor_id: Option<i64>,
    pub worker_id: Option<i64>,
    pub value_net: Decimal,
    pub tax_value: Decimal,
    pub value_gross: Decimal,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::store::Entity",
        from = "Column::FromStoreId",
        to = "super::store::Column::Id"
    )]
    FromStore,
    #[sea_orm(
        belongs_to = "super::shop::Entity",
        from = "Column::FromShopId",
        to = "super::shop::Column::Id"
    )]
    FromShop,
    #[sea_orm(
        belongs_to = "super::contractor::Entity",
        from = "Column::FromContractorId",
        to = "super::contractor::Column::Id"
    )]
    FromContractor,
    #[sea_orm(
        belongs_to = "super::store::Entity",
        from = "Column::ToStoreId",
        to = "super::store::Column::Id"
    )]
    ToStore,
    #[sea_orm(
        belongs_to = "super::shop::Entity",
        from = "Column::ToShopId",
        to = "super::shop::Column::Id"
    )]
    ToShop,
    #[sea_orm(
        belongs_to = "super::contractor::Entity",
        from = "Column::ToContractorId",
        to = "super::contractor::Column::Id"
    )]
    ToContractor,
    #[sea_orm(
        belongs_to = "super::worker::Entity",
        from = "Column::WorkerId",
        to = "super::worker::Column::Id"
    )]
    Worker,
    #[sea_orm(has_many = "super::note_position::Entity")]
    Positions,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,
}

impl Related<super::note_position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Positions.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
