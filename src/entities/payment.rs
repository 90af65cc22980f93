use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Settlement record for a note. A receipt or invoice attaches to the
/// note's existing payment; an advance invoice always opens its own
/// row with `advance` set.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub note_id: i64,
    #[sea_orm(unique)]
    pub receipt_id: Option<i64>,
    #[sea_orm(unique)]
    pub invoice_id: Option<i64>,
    #[sea_orm(unique)]
    pub advance_invoice_id: Option<i64>,
    /// "cash" or "transfer"
    pub method: Option<String>,
    pub advance: bool,
    pub paid: bool,
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
        belongs_to = "super::receipt::Entity",
        from = "Column::ReceiptId",
        to = "super::receipt::Column::Id"
    )]
    Receipt,
    #[sea_orm(
        belongs_to = "super::invoice::Entity",
        from = "Column::InvoiceId",
        to = "super::invoice::Column::Id"
    )]
    Invoice,
    #[sea_orm(
        belongs_to = "super::advance_invoice::Entity",
        from = "Column::AdvanceInvoiceId",
        to = "super::advance_invoice::Column::Id"
    )]
    AdvanceInvoice,
}

impl Related<super::note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Note.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
