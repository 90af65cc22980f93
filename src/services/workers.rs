use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::{info, instrument};

use crate::entities::{advance_invoice, invoice, note, worker};
use crate::errors::ServiceError;

#[derive(Debug, Clone)]
pub struct WorkerInput {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub email: String,
    pub active: bool,
}

/// Service for company staff records.
#[derive(Clone)]
pub struct WorkerService {
    db: Arc<DatabaseConnection>,
}

impl WorkerService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    #[instrument(skip(self, input))]
    pub async fn create_worker(&self, input: WorkerInput) -> Result<worker::Model, ServiceError> {
        let model = worker::ActiveModel {
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            position: Set(input.position),
            email: Set(input.email),
            active: Set(input.active),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!(worker_id = model.id, "created worker");
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn list_workers(&self) -> Result<Vec<worker::Model>, ServiceError> {
        Ok(worker::Entity::find()
            .order_by_asc(worker::Column::Id)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn get_worker(&self, id: i64) -> Result<worker::Model, ServiceError> {
        worker::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Worker {} not found", id)))
    }

    #[instrument(skip(self, input))]
    pub async fn update_worker(
        &self,
        id: i64,
        input: WorkerInput,
    ) -> Result<worker::Model, ServiceError> {
        let existing = self.get_worker(id).await?;

        let mut model: worker::ActiveModel = existing.into();
        model.first_name = Set(input.first_name);
        model.last_name = Set(input.last_name);
        model.position = Set(input.position);
        model.email = Set(input.email);
        model.active = Set(input.active);

        Ok(model.update(&*self.db).await?)
    }

    /// Deletes a worker. Workers named on notes or invoices are
    /// protected.
    #[instrument(skip(self))]
    pub async fn delete_worker(&self, id: i64) -> Result<(), ServiceError> {
        self.get_worker(id).await?;

        let invoices = invoice::Entity::find()
            .filter(invoice::Column::WorkerId.eq(id))
            .count(&*self.db)
            .await?;
        let advance_invoices = advance_invoice::Entity::find()
            .filter(advance_invoice::Column::WorkerId.eq(id))
            .count(&*self.db)
            .await?;
        let notes = note::Entity::find()
            .filter(note::Column::WorkerId.eq(id))
            .count(&*self.db)
            .await?;
        if invoices + advance_invoices + notes > 0 {
            return Err(ServiceError::Conflict(
                "Worker is referenced by notes or invoices".to_string(),
            ));
        }

        worker::Entity::delete_by_id(id).exec(&*self.db).await?;
        info!(worker_id = id, "deleted worker");
        Ok(())
    }
}
