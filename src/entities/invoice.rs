use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// VAT invoice for an external dispatch note. When an advance invoice
/// exists for the note, the invoice carries the remaining (rest)
/// values, otherwise it copies the note totals.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
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
    pub value_net: Decimal,
    pub tax_value: Decimal,
    pub value_gross: Decimal,
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
