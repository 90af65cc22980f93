use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Advance (prepayment) invoice for an external dispatch note. The
/// paid gross amount is split into net and tax proportionally to the
/// note totals; the rest columns hold what remains to invoice.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "advance_invoices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub note_id: i64,
    pub worker_id: i64,
    /// "in_progress", "executed", "delayed" or "cancelled"
    pub state: String,
    pub supply_date: Date,
    pub maturity: Date,
    pub advance_value: Decimal,
    pub value_net: Decimal,
    pub tax_value: Decimal,
    pub value_gross: Decimal,
    pub rest_value_net: Option<Decimal>,
    pub rest_tax_value: Option<Decimal>,
    pub rest_value_gross: Option<Decimal>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
        belongs_to = "super::worker::Entity",
        from = "Column::WorkerId",
        to = "super::worker::Column::Id"
    )]
    Worker,
}

impl Related<super::note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Note.def()
    }
}

impl Related<super::worker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
