use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{info, instrument};

use crate::entities::{product, stock, stock_position};
use crate::errors::ServiceError;

#[derive(Debug, Clone)]
pub struct StockPositionInput {
    pub product_id: i64,
    pub quantity: Decimal,
    pub minimal_quantity: Option<Decimal>,
    pub average_supply_time: Option<Decimal>,
}

/// Service for stock ledgers and their per-product positions.
#[derive(Clone)]
pub struct StockService {
    db: Arc<DatabaseConnection>,
}

impl StockService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn list_stocks(&self) -> Result<Vec<stock::Model>, ServiceError> {
        Ok(stock::Entity::find()
            .order_by_asc(stock::Column::Id)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn get_stock(&self, id: i64) -> Result<stock::Model, ServiceError> {
        stock::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Stock {} not found", id)))
    }

    #[instrument(skip(self))]
    pub async fn list_positions(
        &self,
        stock_id: i64,
    ) -> Result<Vec<stock_position::Model>, ServiceError> {
        self.get_stock(stock_id).await?;
        Ok(stock_position::Entity::find()
            .filter(stock_position::Column::StockId.eq(stock_id))
            .order_by_asc(stock_position::Column::Id)
            .all(&*self.db)
            .await?)
    }

    /// Adds a product to a stock ledger. Each product appears at most
    /// once per stock.
    #[instrument(skip(self, input))]
    pub async fn add_position(
        &self,
        stock_id: i64,
        input: StockPositionInput,
    ) -> Result<stock_position::Model, ServiceError> {
        self.get_stock(stock_id).await?;
        product::Entity::find_by_id(input.product_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Product {} not found", input.product_id))
            })?;

        let existing = stock_position::Entity::find()
            .filter(stock_position::Column::StockId.eq(stock_id))
            .filter(stock_position::Column::ProductId.eq(input.product_id))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Conflict(
                "Product is already tracked in this stock".to_string(),
            ));
        }

        let now = Utc::now();
        let model = stock_position::ActiveModel {
            stock_id: Set(stock_id),
            product_id: Set(input.product_id),
            quantity: Set(input.quantity),
            minimal_quantity: Set(input.minimal_quantity),
            average_supply_time: Set(input.average_supply_time),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!(
            stock_id,
            product_id = model.product_id,
            "added stock position"
        );
        Ok(model)
    }

    #[instrument(skip(self, input))]
    pub async fn update_position(
        &self,
        position_id: i64,
        input: StockPositionInput,
    ) -> Result<stock_position::Model, ServiceError> {
        let existing = stock_position::Entity::find_by_id(position_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Stock position {} not found", position_id))
            })?;

        let mut model: stock_position::ActiveModel = existing.into();
        model.quantity = Set(input.quantity);
        model.minimal_quantity = Set(input.minimal_quantity);
        model.average_supply_time = Set(input.average_supply_time);
        model.updated_at = Set(Utc::now());

        Ok(model.update(&*self.db).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_position(&self, position_id: i64) -> Result<(), ServiceError> {
        let result = stock_position::Entity::delete_by_id(position_id)
            .exec(&*self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Stock position {} not found",
                position_id
            )));
        }
        Ok(())
    }
}
