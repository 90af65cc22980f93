use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument};

use crate::domain::ContractorKind;
use crate::entities::{contractor, note, shop, stock, stock_position, store};
use crate::errors::ServiceError;

#[derive(Debug, Clone)]
pub struct UnitInput {
    pub name: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
}

#[derive(Debug, Clone)]
pub struct ContractorInput {
    pub kind: ContractorKind,
    pub company_name: Option<String>,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Service for the parties notes move goods between: own stores and
/// shops (each owning a stock ledger) and external contractors.
#[derive(Clone)]
pub struct PartyService {
    db: Arc<DatabaseConnection>,
}

impl PartyService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Creates a store together with its own stock ledger.
    #[instrument(skip(self, input))]
    pub async fn create_store(&self, input: UnitInput) -> Result<store::Model, ServiceError> {
        let txn = self.db.begin().await?;

        let ledger = stock::ActiveModel {
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        let model = store::ActiveModel {
            name: Set(input.name),
            address: Set(input.address),
            postal_code: Set(input.postal_code),
            city: Set(input.city),
            stock_id: Set(ledger.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        info!(store_id = model.id, stock_id = model.stock_id, "created store");
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn list_stores(&self) -> Result<Vec<store::Model>, ServiceError> {
        Ok(store::Entity::find()
            .order_by_asc(store::Column::Id)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn get_store(&self, id: i64) -> Result<store::Model, ServiceError> {
        store::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Store {} not found", id)))
    }

    #[instrument(skip(self, input))]
    pub async fn update_store(
        &self,
        id: i64,
        input: UnitInput,
    ) -> Result<store::Model, ServiceError> {
        let existing = self.get_store(id).await?;

        let mut model: store::ActiveModel = existing.into();
        model.name = Set(input.name);
        model.address = Set(input.address);
        model.postal_code = Set(input.postal_code);
        model.city = Set(input.city);
        Ok(model.update(&*self.db).await?)
    }

    /// Deletes a store and its stock ledger. Stores referenced by notes
    /// are protected.
    #[instrument(skip(self))]
    pub async fn delete_store(&self, id: i64) -> Result<(), ServiceError> {
        let existing = self.get_store(id).await?;

        let referenced = note::Entity::find()
            .filter(
                Condition::any()
                    .add(note::Column::FromStoreId.eq(id))
                    .add(note::Column::ToStoreId.eq(id)),
            )
            .count(&*self.db)
            .await?;
        if referenced > 0 {
            return Err(ServiceError::Conflict(
                "Store is referenced by notes".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        store::Entity::delete_by_id(id).exec(&txn).await?;
        stock_position::Entity::delete_many()
            .filter(stock_position::Column::StockId.eq(existing.stock_id))
            .exec(&txn)
            .await?;
        stock::Entity::delete_by_id(existing.stock_id).exec(&txn).await?;
        txn.commit().await?;

        info!(store_id = id, "deleted store");
        Ok(())
    }

    /// Creates a shop together with its own stock ledger.
    #[instrument(skip(self, input))]
    pub async fn create_shop(&self, input: UnitInput) -> Result<shop::Model, ServiceError> {
        let txn = self.db.begin().await?;

        let ledger = stock::ActiveModel {
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        let model = shop::ActiveModel {
            name: Set(input.name),
            address: Set(input.address),
            postal_code: Set(input.postal_code),
            city: Set(input.city),
            stock_id: Set(ledger.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        info!(shop_id = model.id, stock_id = model.stock_id, "created shop");
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn list_shops(&self) -> Result<Vec<shop::Model>, ServiceError> {
        Ok(shop::Entity::find()
            .order_by_asc(shop::Column::Id)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn get_shop(&self, id: i64) -> Result<shop::Model, ServiceError> {
        shop::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Shop {} not found", id)))
    }

    #[instrument(skip(self, input))]
    pub async fn update_shop(
        &self,
        id: i64,
        input: UnitInput,
    ) -> Result<shop::Model, ServiceError> {
        let existing = self.get_shop(id).await?;

        let mut model: shop::ActiveModel = existing.into();
        model.name = Set(input.name);
        model.address = Set(input.address);
        model.postal_code = Set(input.postal_code);
        model.city = Set(input.city);
        Ok(model.update(&*self.db).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_shop(&self, id: i64) -> Result<(), ServiceError> {
        let existing = self.get_shop(id).await?;

        let referenced = note::Entity::find()
            .filter(
                Condition::any()
                    .add(note::Column::FromShopId.eq(id))
                    .add(note::Column::ToShopId.eq(id)),
            )
            .count(&*self.db)
            .await?;
        if referenced > 0 {
            return Err(ServiceError::Conflict(
                "Shop is referenced by notes".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        shop::Entity::delete_by_id(id).exec(&txn).await?;
        stock_position::Entity::delete_many()
            .filter(stock_position::Column::StockId.eq(existing.stock_id))
            .exec(&txn)
            .await?;
        stock::Entity::delete_by_id(existing.stock_id).exec(&txn).await?;
        txn.commit().await?;

        info!(shop_id = id, "deleted shop");
        Ok(())
    }

    #[instrument(skip(self, input))]
    pub async fn create_contractor(
        &self,
        input: ContractorInput,
    ) -> Result<contractor::Model, ServiceError> {
        let model = contractor::ActiveModel {
            kind: Set(input.kind.to_string()),
            company_name: Set(input.company_name),
            address: Set(input.address),
            postal_code: Set(input.postal_code),
            city: Set(input.city),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            email: Set(input.email),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!(contractor_id = model.id, kind = %model.kind, "created contractor");
        Ok(model)
    }

    /// Lists contractors, optionally narrowed to clients or suppliers.
    #[instrument(skip(self))]
    pub async fn list_contractors(
        &self,
        kind: Option<ContractorKind>,
    ) -> Result<Vec<contractor::Model>, ServiceError> {
        let mut query = contractor::Entity::find();
        if let Some(kind) = kind {
            query = query.filter(contractor::Column::Kind.eq(kind.to_string()));
        }
        Ok(query
            .order_by_asc(contractor::Column::Id)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn get_contractor(&self, id: i64) -> Result<contractor::Model, ServiceError> {
        contractor::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Contractor {} not found", id)))
    }

    #[instrument(skip(self, input))]
    pub async fn update_contractor(
        &self,
        id: i64,
        input: ContractorInput,
    ) -> Result<contractor::Model, ServiceError> {
        let existing = self.get_contractor(id).await?;

        let mut model: contractor::ActiveModel = existing.into();
        model.kind = Set(input.kind.to_string());
        model.company_name = Set(input.company_name);
        model.address = Set(input.address);
        model.postal_code = Set(input.postal_code);
        model.city = Set(input.city);
        model.first_name = Set(input.first_name);
        model.last_name = Set(input.last_name);
        model.email = Set(input.email);
        Ok(model.update(&*self.db).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_contractor(&self, id: i64) -> Result<(), ServiceError> {
        self.get_contractor(id).await?;

        let referenced = note::Entity::find()
            .filter(
                Condition::any()
                    .add(note::Column::FromContractorId.eq(id))
                    .add(note::Column::ToContractorId.eq(id)),
            )
            .count(&*self.db)
            .await?;
        if referenced > 0 {
            return Err(ServiceError::Conflict(
                "Contractor is referenced by notes".to_string(),
            ));
        }

        contractor::Entity::delete_by_id(id).exec(&*self.db).await?;
        info!(contractor_id = id, "deleted contractor");
        Ok(())
    }
}
