use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::Serialize;
use tracing::{info, instrument};

use crate::domain::DocumentState;
use crate::entities::{
    advance_invoice, contractor, invoice, note, note_position, payment, product, receipt, worker,
};
use crate::errors::ServiceError;
use crate::services::notes::note_totals;
use crate::services::values::{self, DocumentValues};

const MATURITY_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub struct InvoiceInput {
    pub worker_id: i64,
    pub supply_days: i64,
}

#[derive(Debug, Clone)]
pub struct InvoiceUpdate {
    pub worker_id: i64,
    pub supply_days: i64,
    pub state: DocumentState,
}

#[derive(Debug, Clone)]
pub struct AdvanceInvoiceInput {
    pub worker_id: i64,
    pub supply_days: i64,
    pub advance_value: Decimal,
}

#[derive(Debug, Clone)]
pub struct AdvanceInvoiceUpdate {
    pub worker_id: i64,
    pub supply_days: i64,
    pub state: DocumentState,
    pub advance_value: Decimal,
}

/// Position line as embedded in document detail responses.
#[derive(Debug, Serialize)]
pub struct PositionLine {
    pub product_name: String,
    pub unit: String,
    pub quantity: Decimal,
    pub price_net: Decimal,
    pub tax_rate: i32,
    pub discount_value: Decimal,
    pub value_net: Decimal,
    pub tax_value: Decimal,
    pub value_gross: Decimal,
}

/// Note header embedded in document detail responses.
#[derive(Debug, Serialize)]
pub struct NoteSummary {
    pub number: String,
    pub to_contractor: Option<contractor::Model>,
    pub positions: Vec<PositionLine>,
    pub value_net: Decimal,
    pub tax_value: Decimal,
    pub value_gross: Decimal,
}

#[derive(Debug, Serialize)]
pub struct ReceiptDetail {
    pub value_net: Decimal,
    pub tax_value: Decimal,
    pub value_gross: Decimal,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
    pub note: NoteSummary,
}

#[derive(Debug, Serialize)]
pub struct InvoiceDetail {
    pub state: String,
    pub supply_date: NaiveDate,
    pub maturity: NaiveDate,
    pub value_net: Decimal,
    pub tax_value: Decimal,
    pub value_gross: Decimal,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
    pub worker: Option<worker::Model>,
    pub note: NoteSummary,
}

/// Service for the financial documents derived from notes: receipts,
/// invoices and advance invoices, with their payments.
#[derive(Clone)]
pub struct BillingService {
    db: Arc<DatabaseConnection>,
}

impl BillingService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Looks up the external dispatch note a billing document may be
    /// issued for.
    async fn dispatch_note<C: ConnectionTrait>(
        &self,
        db: &C,
        number: &str,
    ) -> Result<note::Model, ServiceError> {
        note::Entity::find()
            .filter(note::Column::Number.eq(number))
            .filter(note::Column::Kind.eq("dispatch"))
            .filter(note::Column::Handover.eq("external"))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Note {} not found", number)))
    }

    async fn note_by_number<C: ConnectionTrait>(
        &self,
        db: &C,
        number: &str,
    ) -> Result<note::Model, ServiceError> {
        note::Entity::find()
            .filter(note::Column::Number.eq(number))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Note {} not found", number)))
    }

    async fn worker_by_id<C: ConnectionTrait>(
        &self,
        db: &C,
        worker_id: i64,
    ) -> Result<worker::Model, ServiceError> {
        worker::Entity::find_by_id(worker_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Worker {} not found", worker_id)))
    }

    async fn receipt_for_note<C: ConnectionTrait>(
        &self,
        db: &C,
        note_id: i64,
    ) -> Result<Option<receipt::Model>, ServiceError> {
        Ok(receipt::Entity::find()
            .filter(receipt::Column::NoteId.eq(note_id))
            .one(db)
            .await?)
    }

    async fn invoice_for_note<C: ConnectionTrait>(
        &self,
        db: &C,
        note_id: i64,
    ) -> Result<Option<invoice::Model>, ServiceError> {
        Ok(invoice::Entity::find()
            .filter(invoice::Column::NoteId.eq(note_id))
            .one(db)
            .await?)
    }

    async fn advance_for_note<C: ConnectionTrait>(
        &self,
        db: &C,
        note_id: i64,
    ) -> Result<Option<advance_invoice::Model>, ServiceError> {
        Ok(advance_invoice::Entity::find()
            .filter(advance_invoice::Column::NoteId.eq(note_id))
            .one(db)
            .await?)
    }

    /// Values an invoice carries: the advance invoice's rest values
    /// when one exists, the note totals otherwise.
    async fn invoice_values<C: ConnectionTrait>(
        &self,
        db: &C,
        note: &note::Model,
    ) -> Result<DocumentValues, ServiceError> {
        if let Some(advance) = self.advance_for_note(db, note.id).await? {
            if let (Some(value_net), Some(tax_value), Some(value_gross)) = (
                advance.rest_value_net,
                advance.rest_tax_value,
                advance.rest_value_gross,
            ) {
                return Ok(DocumentValues {
                    value_net,
                    tax_value,
                    value_gross,
                });
            }
        }
        Ok(note_totals(note))
    }

    /// Attaches a settlement document to the note's payment, creating
    /// the payment when missing.
    async fn attach_payment(
        &self,
        txn: &DatabaseTransaction,
        note_id: i64,
        receipt_id: Option<i64>,
        invoice_id: Option<i64>,
    ) -> Result<(), ServiceError> {
        let existing = payment::Entity::find()
            .filter(payment::Column::NoteId.eq(note_id))
            .filter(payment::Column::Advance.eq(false))
            .one(txn)
            .await?;

        let now = Utc::now();
        match existing {
            Some(existing) => {
                let mut model: payment::ActiveModel = existing.into();
                if receipt_id.is_some() {
                    model.receipt_id = Set(receipt_id);
                }
                if invoice_id.is_some() {
                    model.invoice_id = Set(invoice_id);
                }
                model.updated_at = Set(now);
                model.update(txn).await?;
            }
            None => {
                payment::ActiveModel {
                    note_id: Set(note_id),
                    receipt_id: Set(receipt_id),
                    invoice_id: Set(invoice_id),
                    advance_invoice_id: Set(None),
                    method: Set(None),
                    advance: Set(false),
                    paid: Set(false),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(txn)
                .await?;
            }
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn create_receipt(&self, note_number: &str) -> Result<receipt::Model, ServiceError> {
        let txn = self.db.begin().await?;

        let note = self.dispatch_note(&txn, note_number).await?;
        if self.receipt_for_note(&txn, note.id).await?.is_some() {
            return Err(ServiceError::Conflict(
                "Receipt has been already created".to_string(),
            ));
        }
        if self.advance_for_note(&txn, note.id).await?.is_some() {
            return Err(ServiceError::Conflict(
                "Advance invoice has been already created".to_string(),
            ));
        }

        let now = Utc::now();
        let model = receipt::ActiveModel {
            note_id: Set(note.id),
            value_net: Set(note.value_net),
            tax_value: Set(note.tax_value),
            value_gross: Set(note.value_gross),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        self.attach_payment(&txn, note.id, Some(model.id), None).await?;
        txn.commit().await?;

        info!(receipt_id = model.id, note_number, "created receipt");
        Ok(model)
    }

    #[instrument(skip(self, input))]
    pub async fn create_invoice(
        &self,
        note_number: &str,
        input: InvoiceInput,
    ) -> Result<invoice::Model, ServiceError> {
        let txn = self.db.begin().await?;

        let note = self.dispatch_note(&txn, note_number).await?;
        if self.invoice_for_note(&txn, note.id).await?.is_some() {
            return Err(ServiceError::Conflict(
                "Invoice for given note has been already created".to_string(),
            ));
        }
        let worker = self.worker_by_id(&txn, input.worker_id).await?;

        let values = self.invoice_values(&txn, &note).await?;
        let today = Utc::now().date_naive();
        let now = Utc::now();

        let model = invoice::ActiveModel {
            note_id: Set(note.id),
            worker_id: Set(worker.id),
            state: Set(DocumentState::InProgress.to_string()),
            supply_date: Set(today + Duration::days(input.supply_days)),
            maturity: Set(today + Duration::days(MATURITY_DAYS)),
            value_net: Set(values.value_net),
            tax_value: Set(values.tax_value),
            value_gross: Set(values.value_gross),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        self.attach_payment(&txn, note.id, None, Some(model.id)).await?;
        txn.commit().await?;

        info!(invoice_id = model.id, note_number, "created invoice");
        Ok(model)
    }

    #[instrument(skip(self, input))]
    pub async fn create_advance_invoice(
        &self,
        note_number: &str,
        input: AdvanceInvoiceInput,
    ) -> Result<advance_invoice::Model, ServiceError> {
        if input.advance_value <= Decimal::ZERO {
            return Err(ServiceError::ValidationError(
                "Advance value must be positive".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let note = self.dispatch_note(&txn, note_number).await?;
        if self.receipt_for_note(&txn, note.id).await?.is_some() {
            return Err(ServiceError::Conflict(
                "Receipt for given note has been already created".to_string(),
            ));
        }
        if self.invoice_for_note(&txn, note.id).await?.is_some() {
            return Err(ServiceError::Conflict(
                "Invoice for given note has been already created".to_string(),
            ));
        }
        if self.advance_for_note(&txn, note.id).await?.is_some() {
            return Err(ServiceError::Conflict(
                "Advance invoice for given note has been already created".to_string(),
            ));
        }
        let worker = self.worker_by_id(&txn, input.worker_id).await?;

        let split = values::advance_values(input.advance_value, note_totals(&note));
        let (advance, rest) = match split {
            Some(split) => (split.advance, Some(split.rest)),
            None => (DocumentValues::default(), None),
        };

        let today = Utc::now().date_naive();
        let now = Utc::now();
        let model = advance_invoice::ActiveModel {
            note_id: Set(note.id),
            worker_id: Set(worker.id),
            state: Set(DocumentState::InProgress.to_string()),
            supply_date: Set(today + Duration::days(input.supply_days)),
            maturity: Set(today + Duration::days(MATURITY_DAYS)),
            advance_value: Set(input.advance_value),
            value_net: Set(advance.value_net),
            tax_value: Set(advance.tax_value),
            value_gross: Set(advance.value_gross),
            rest_value_net: Set(rest.map(|r| r.value_net)),
            rest_tax_value: Set(rest.map(|r| r.tax_value)),
            rest_value_gross: Set(rest.map(|r| r.value_gross)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        // An advance always opens its own payment row.
        payment::ActiveModel {
            note_id: Set(note.id),
            receipt_id: Set(None),
            invoice_id: Set(None),
            advance_invoice_id: Set(Some(model.id)),
            method: Set(None),
            advance: Set(true),
            paid: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(advance_invoice_id = model.id, note_number, "created advance invoice");
        Ok(model)
    }

    #[instrument(skip(self, input))]
    pub async fn update_invoice(
        &self,
        note_number: &str,
        input: InvoiceUpdate,
    ) -> Result<invoice::Model, ServiceError> {
        let txn = self.db.begin().await?;

        let note = self.note_by_number(&txn, note_number).await?;
        let existing = self
            .invoice_for_note(&txn, note.id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Invoice for note {} not found", note_number))
            })?;
        let worker = self.worker_by_id(&txn, input.worker_id).await?;

        let values = self.invoice_values(&txn, &note).await?;
        let today = Utc::now().date_naive();

        let mut model: invoice::ActiveModel = existing.into();
        model.worker_id = Set(worker.id);
        model.state = Set(input.state.to_string());
        model.supply_date = Set(today + Duration::days(input.supply_days));
        model.value_net = Set(values.value_net);
        model.tax_value = Set(values.tax_value);
        model.value_gross = Set(values.value_gross);
        model.updated_at = Set(Utc::now());
        let model = model.update(&txn).await?;

        txn.commit().await?;
        info!(invoice_id = model.id, note_number, "updated invoice");
        Ok(model)
    }

    #[instrument(skip(self, input))]
    pub async fn update_advance_invoice(
        &self,
        note_number: &str,
        input: AdvanceInvoiceUpdate,
    ) -> Result<advance_invoice::Model, ServiceError> {
        if input.advance_value <= Decimal::ZERO {
            return Err(ServiceError::ValidationError(
                "Advance value must be positive".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let note = self.note_by_number(&txn, note_number).await?;
        let existing = self.advance_for_note(&txn, note.id).await?.ok_or_else(|| {
            ServiceError::NotFound(format!(
                "Advance invoice for note {} not found",
                note_number
            ))
        })?;
        let worker = self.worker_by_id(&txn, input.worker_id).await?;

        let split = values::advance_values(input.advance_value, note_totals(&note));
        let (advance, rest) = match split {
            Some(split) => (split.advance, Some(split.rest)),
            None => (DocumentValues::default(), None),
        };
        let today = Utc::now().date_naive();

        let mut model: advance_invoice::ActiveModel = existing.into();
        model.worker_id = Set(worker.id);
        model.state = Set(input.state.to_string());
        model.supply_date = Set(today + Duration::days(input.supply_days));
        model.advance_value = Set(input.advance_value);
        model.value_net = Set(advance.value_net);
        model.tax_value = Set(advance.tax_value);
        model.value_gross = Set(advance.value_gross);
        model.rest_value_net = Set(rest.map(|r| r.value_net));
        model.rest_tax_value = Set(rest.map(|r| r.tax_value));
        model.rest_value_gross = Set(rest.map(|r| r.value_gross));
        model.updated_at = Set(Utc::now());
        let model = model.update(&txn).await?;

        txn.commit().await?;
        info!(advance_invoice_id = model.id, note_number, "updated advance invoice");
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn delete_receipt(&self, note_number: &str) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;

        let note = self.note_by_number(&txn, note_number).await?;
        let existing = self
            .receipt_for_note(&txn, note.id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Receipt for note {} not found", note_number))
            })?;

        payment::Entity::delete_many()
            .filter(payment::Column::ReceiptId.eq(existing.id))
            .exec(&txn)
            .await?;
        receipt::Entity::delete_by_id(existing.id).exec(&txn).await?;

        txn.commit().await?;
        info!(note_number, "deleted receipt");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_invoice(&self, note_number: &str) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;

        let note = self.note_by_number(&txn, note_number).await?;
        let existing = self
            .invoice_for_note(&txn, note.id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Invoice for note {} not found", note_number))
            })?;

        payment::Entity::delete_many()
            .filter(payment::Column::InvoiceId.eq(existing.id))
            .exec(&txn)
            .await?;
        invoice::Entity::delete_by_id(existing.id).exec(&txn).await?;

        txn.commit().await?;
        info!(note_number, "deleted invoice");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_advance_invoice(&self, note_number: &str) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;

        let note = self.note_by_number(&txn, note_number).await?;
        let existing = self.advance_for_note(&txn, note.id).await?.ok_or_else(|| {
            ServiceError::NotFound(format!(
                "Advance invoice for note {} not found",
                note_number
            ))
        })?;

        payment::Entity::delete_many()
            .filter(payment::Column::AdvanceInvoiceId.eq(existing.id))
            .exec(&txn)
            .await?;
        advance_invoice::Entity::delete_by_id(existing.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;
        info!(note_number, "deleted advance invoice");
        Ok(())
    }

    async fn note_summary(&self, note: &note::Model) -> Result<NoteSummary, ServiceError> {
        let positions = note_position::Entity::find()
            .filter(note_position::Column::NoteId.eq(note.id))
            .order_by_asc(note_position::Column::Id)
            .all(&*self.db)
            .await?;

        let mut lines = Vec::with_capacity(positions.len());
        for position in positions {
            let product = product::Entity::find_by_id(position.product_id)
                .one(&*self.db)
                .await?
                .ok_or_else(|| {
                    ServiceError::InternalError(format!(
                        "Product {} referenced by position {} is missing",
                        position.product_id, position.id
                    ))
                })?;
            lines.push(PositionLine {
                product_name: product.name,
                unit: product.unit,
                quantity: position.quantity,
                price_net: position.price_net,
                tax_rate: position.tax_rate,
                discount_value: position.discount_value,
                value_net: position.value_net,
                tax_value: position.tax_value,
                value_gross: position.value_gross,
            });
        }

        let to_contractor = match note.to_contractor_id {
            Some(id) => contractor::Entity::find_by_id(id).one(&*self.db).await?,
            None => None,
        };

        Ok(NoteSummary {
            number: note.number.clone(),
            to_contractor,
            positions: lines,
            value_net: note.value_net,
            tax_value: note.tax_value,
            value_gross: note.value_gross,
        })
    }

    async fn receipt_detail(&self, model: receipt::Model) -> Result<ReceiptDetail, ServiceError> {
        let note = note::Entity::find_by_id(model.note_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::InternalError(format!("Note {} for receipt is missing", model.note_id))
            })?;
        Ok(ReceiptDetail {
            value_net: model.value_net,
            tax_value: model.tax_value,
            value_gross: model.value_gross,
            created_at: model.created_at,
            updated_at: model.updated_at,
            note: self.note_summary(&note).await?,
        })
    }

    async fn invoice_detail(
        &self,
        note_id: i64,
        worker_id: i64,
        state: String,
        supply_date: NaiveDate,
        maturity: NaiveDate,
        values: DocumentValues,
        created_at: chrono::DateTime<Utc>,
        updated_at: chrono::DateTime<Utc>,
    ) -> Result<InvoiceDetail, ServiceError> {
        let note = note::Entity::find_by_id(note_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::InternalError(format!("Note {} for invoice is missing", note_id))
            })?;
        let worker = worker::Entity::find_by_id(worker_id).one(&*self.db).await?;

        Ok(InvoiceDetail {
            state,
            supply_date,
            maturity,
            value_net: values.value_net,
            tax_value: values.tax_value,
            value_gross: values.value_gross,
            created_at,
            updated_at,
            worker,
            note: self.note_summary(&note).await?,
        })
    }

    #[instrument(skip(self))]
    pub async fn get_receipt(&self, note_number: &str) -> Result<ReceiptDetail, ServiceError> {
        let note = self.note_by_number(&*self.db, note_number).await?;
        let model = self
            .receipt_for_note(&*self.db, note.id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Receipt for note {} not found", note_number))
            })?;
        self.receipt_detail(model).await
    }

    #[instrument(skip(self))]
    pub async fn list_receipts(&self) -> Result<Vec<ReceiptDetail>, ServiceError> {
        let models = receipt::Entity::find()
            .order_by_asc(receipt::Column::Id)
            .all(&*self.db)
            .await?;
        let mut details = Vec::with_capacity(models.len());
        for model in models {
            details.push(self.receipt_detail(model).await?);
        }
        Ok(details)
    }

    #[instrument(skip(self))]
    pub async fn get_invoice(&self, note_number: &str) -> Result<InvoiceDetail, ServiceError> {
        let note = self.note_by_number(&*self.db, note_number).await?;
        let model = self
            .invoice_for_note(&*self.db, note.id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Invoice for note {} not found", note_number))
            })?;
        self.invoice_detail(
            model.note_id,
            model.worker_id,
            model.state,
            model.supply_date,
            model.maturity,
            DocumentValues {
                value_net: model.value_net,
                tax_value: model.tax_value,
                value_gross: model.value_gross,
            },
            model.created_at,
            model.updated_at,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn list_invoices(&self) -> Result<Vec<InvoiceDetail>, ServiceError> {
        let models = invoice::Entity::find()
            .order_by_asc(invoice::Column::Id)
            .all(&*self.db)
            .await?;
        let mut details = Vec::with_capacity(models.len());
        for model in models {
            details.push(
                self.invoice_detail(
                    model.note_id,
                    model.worker_id,
                    model.state,
                    model.supply_date,
                    model.maturity,
                    DocumentValues {
                        value_net: model.value_net,
                        tax_value: model.tax_value,
                        value_gross: model.value_gross,
                    },
                    model.created_at,
                    model.updated_at,
                )
                .await?,
            );
        }
        Ok(details)
    }

    #[instrument(skip(self))]
    pub async fn get_advance_invoice(
        &self,
        note_number: &str,
    ) -> Result<InvoiceDetail, ServiceError> {
        let note = self.note_by_number(&*self.db, note_number).await?;
        let model = self
            .advance_for_note(&*self.db, note.id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "Advance invoice for note {} not found",
                    note_number
                ))
            })?;
        self.invoice_detail(
            model.note_id,
            model.worker_id,
            model.state,
            model.supply_date,
            model.maturity,
            DocumentValues {
                value_net: model.value_net,
                tax_value: model.tax_value,
                value_gross: model.value_gross,
            },
            model.created_at,
            model.updated_at,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn list_advance_invoices(&self) -> Result<Vec<InvoiceDetail>, ServiceError> {
        let models = advance_invoice::Entity::find()
            .order_by_asc(advance_invoice::Column::Id)
            .all(&*self.db)
            .await?;
        let mut details = Vec::with_capacity(models.len());
        for model in models {
            details.push(
                self.invoice_detail(
                    model.note_id,
                    model.worker_id,
                    model.state,
                    model.supply_date,
                    model.maturity,
                    DocumentValues {
                        value_net: model.value_net,
                        tax_value: model.tax_value,
                        value_gross: model.value_gross,
                    },
                    model.created_at,
                    model.updated_at,
                )
                .await?,
            );
        }
        Ok(details)
    }
}
