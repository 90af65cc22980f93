use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::Serialize;
use tracing::{info, instrument};

use crate::domain::{Handover, NoteKind};
use crate::entities::{
    advance_invoice, contractor, invoice, note, note_position, payment, product, receipt, shop,
    store, worker,
};
use crate::errors::ServiceError;
use crate::services::values::{self, DocumentValues};

/// Header of a new note. Exactly one `from_*` and one `to_*` reference
/// must be set.
#[derive(Debug, Clone)]
pub struct NoteInput {
    pub kind: NoteKind,
    pub handover: Handover,
    pub number: String,
    pub from_store_id: Option<i64>,
    pub from_shop_id: Option<i64>,
    pub from_contractor_id: Option<i64>,
    pub to_store_id: Option<i64>,
    pub to_shop_id: Option<i64>,
    pub to_contractor_id: Option<i64>,
    pub worker_id: Option<i64>,
}

/// New line item. Price and tax rate default to the product's catalog
/// values when omitted.
#[derive(Debug, Clone)]
pub struct PositionInput {
    pub product_id: i64,
    pub quantity: Decimal,
    pub price_net: Option<Decimal>,
    pub tax_rate: Option<i32>,
    pub discount_value: Decimal,
}

#[derive(Debug, Serialize)]
pub struct NoteDetail {
    #[serde(flatten)]
    pub note: note::Model,
    pub positions: Vec<note_position::Model>,
}

pub(crate) fn note_totals(note: &note::Model) -> DocumentValues {
    DocumentValues {
        value_net: note.value_net,
        tax_value: note.tax_value,
        value_gross: note.value_gross,
    }
}

/// Service for delivery notes and their positions.
#[derive(Clone)]
pub struct NoteService {
    db: Arc<DatabaseConnection>,
}

impl NoteService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    #[instrument(skip(self, input), fields(number = %input.number))]
    pub async fn create_note(&self, input: NoteInput) -> Result<note::Model, ServiceError> {
        let from_refs = [
            input.from_store_id,
            input.from_shop_id,
            input.from_contractor_id,
        ];
        let to_refs = [input.to_store_id, input.to_shop_id, input.to_contractor_id];
        if from_refs.iter().flatten().count() != 1 || to_refs.iter().flatten().count() != 1 {
            return Err(ServiceError::ValidationError(
                "Note requires exactly one 'from' and one 'to' reference".to_string(),
            ));
        }

        let duplicate = note::Entity::find()
            .filter(note::Column::Number.eq(input.number.clone()))
            .one(&*self.db)
            .await?;
        if duplicate.is_some() {
            return Err(ServiceError::Conflict(format!(
                "Note {} already exists",
                input.number
            )));
        }

        self.check_references(&input).await?;

        let now = Utc::now();
        let model = note::ActiveModel {
            kind: Set(input.kind.to_string()),
            handover: Set(input.handover.to_string()),
            number: Set(input.number),
            from_store_id: Set(input.from_store_id),
            from_shop_id: Set(input.from_shop_id),
            from_contractor_id: Set(input.from_contractor_id),
            to_store_id: Set(input.to_store_id),
            to_shop_id: Set(input.to_shop_id),
            to_contractor_id: Set(input.to_contractor_id),
            worker_id: Set(input.worker_id),
            value_net: Set(Decimal::ZERO),
            tax_value: Set(Decimal::ZERO),
            value_gross: Set(Decimal::ZERO),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!(note_id = model.id, number = %model.number, "created note");
        Ok(model)
    }

    async fn check_references(&self, input: &NoteInput) -> Result<(), ServiceError> {
        for store_id in [input.from_store_id, input.to_store_id].into_iter().flatten() {
            store::Entity::find_by_id(store_id)
                .one(&*self.db)
                .await?
                .ok_or_else(|| ServiceError::NotFound(format!("Store {} not found", store_id)))?;
        }
        for shop_id in [input.from_shop_id, input.to_shop_id].into_iter().flatten() {
            shop::Entity::find_by_id(shop_id)
                .one(&*self.db)
                .await?
                .ok_or_else(|| ServiceError::NotFound(format!("Shop {} not found", shop_id)))?;
        }
        for contractor_id in [input.from_contractor_id, input.to_contractor_id]
            .into_iter()
            .flatten()
        {
            contractor::Entity::find_by_id(contractor_id)
                .one(&*self.db)
                .await?
                .ok_or_else(|| {
                    ServiceError::NotFound(format!("Contractor {} not found", contractor_id))
                })?;
        }
        if let Some(worker_id) = input.worker_id {
            worker::Entity::find_by_id(worker_id)
                .one(&*self.db)
                .await?
                .ok_or_else(|| ServiceError::NotFound(format!("Worker {} not found", worker_id)))?;
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_note(&self, number: &str) -> Result<NoteDetail, ServiceError> {
        let note = note::Entity::find()
            .filter(note::Column::Number.eq(number))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Note {} not found", number)))?;

        let positions = note_position::Entity::find()
            .filter(note_position::Column::NoteId.eq(note.id))
            .order_by_asc(note_position::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(NoteDetail { note, positions })
    }

    #[instrument(skip(self))]
    pub async fn list_notes(
        &self,
        kind: Option<NoteKind>,
        handover: Option<Handover>,
    ) -> Result<Vec<note::Model>, ServiceError> {
        let mut query = note::Entity::find();
        if let Some(kind) = kind {
            query = query.filter(note::Column::Kind.eq(kind.to_string()));
        }
        if let Some(handover) = handover {
            query = query.filter(note::Column::Handover.eq(handover.to_string()));
        }
        Ok(query.order_by_asc(note::Column::Id).all(&*self.db).await?)
    }

    /// Adds a position to a note and folds its values into the note
    /// totals. Runs in one transaction so a failed save cannot leave
    /// half-applied totals.
    #[instrument(skip(self, input), fields(product_id = input.product_id))]
    pub async fn add_position(
        &self,
        number: &str,
        input: PositionInput,
    ) -> Result<note_position::Model, ServiceError> {
        if input.quantity <= Decimal::ZERO {
            return Err(ServiceError::ValidationError(
                "Quantity must be positive".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let note = note::Entity::find()
            .filter(note::Column::Number.eq(number))
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Note {} not found", number)))?;

        let product = product::Entity::find_by_id(input.product_id)
            .one(&txn)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Product {} not found", input.product_id))
            })?;

        let price_net = input.price_net.unwrap_or(product.sales_price_net);
        let tax_rate = input.tax_rate.unwrap_or(product.tax_rate);
        if input.discount_value > price_net {
            return Err(ServiceError::ValidationError(
                "Discount cannot exceed the net price".to_string(),
            ));
        }

        let position_values =
            values::position_values(price_net, input.discount_value, input.quantity, tax_rate);

        let position = note_position::ActiveModel {
            note_id: Set(note.id),
            product_id: Set(input.product_id),
            quantity: Set(input.quantity),
            price_net: Set(price_net),
            tax_rate: Set(tax_rate),
            discount_value: Set(input.discount_value),
            value_net: Set(position_values.value_net),
            tax_value: Set(position_values.tax_value),
            value_gross: Set(position_values.value_gross),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let totals = values::accumulate(note_totals(&note), position_values);
        let mut note: note::ActiveModel = note.into();
        note.value_net = Set(totals.value_net);
        note.tax_value = Set(totals.tax_value);
        note.value_gross = Set(totals.value_gross);
        note.updated_at = Set(Utc::now());
        note.update(&txn).await?;

        txn.commit().await?;

        info!(position_id = position.id, number, "added note position");
        Ok(position)
    }

    /// Deletes a note with its positions and payments. Notes carrying a
    /// financial document are protected.
    #[instrument(skip(self))]
    pub async fn delete_note(&self, number: &str) -> Result<(), ServiceError> {
        let note = note::Entity::find()
            .filter(note::Column::Number.eq(number))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Note {} not found", number)))?;

        let has_receipt = receipt::Entity::find()
            .filter(receipt::Column::NoteId.eq(note.id))
            .one(&*self.db)
            .await?
            .is_some();
        let has_invoice = invoice::Entity::find()
            .filter(invoice::Column::NoteId.eq(note.id))
            .one(&*self.db)
            .await?
            .is_some();
        let has_advance = advance_invoice::Entity::find()
            .filter(advance_invoice::Column::NoteId.eq(note.id))
            .one(&*self.db)
            .await?
            .is_some();
        if has_receipt || has_invoice || has_advance {
            return Err(ServiceError::Conflict(
                "Note has financial documents".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        payment::Entity::delete_many()
            .filter(payment::Column::NoteId.eq(note.id))
            .exec(&txn)
            .await?;
        note_position::Entity::delete_many()
            .filter(note_position::Column::NoteId.eq(note.id))
            .exec(&txn)
            .await?;
        note::Entity::delete_by_id(note.id).exec(&txn).await?;
        txn.commit().await?;

        info!(number, "deleted note");
        Ok(())
    }
}
