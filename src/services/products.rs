use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::{info, instrument};

use crate::domain::ProductGroup;
use crate::entities::{category, manufacturer, note_position, product, stock_position};
use crate::errors::ServiceError;

/// Catalog data for a new or updated product.
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub name: String,
    pub group: ProductGroup,
    pub code: String,
    pub batch_number: String,
    pub unit: String,
    pub purchase_price: Decimal,
    pub sales_price_net: Decimal,
    pub tax_rate: i32,
    pub best_before_date: chrono::NaiveDate,
    pub description: String,
    pub manufacturer_id: i64,
    pub category_id: i64,
}

/// Service for the product catalog: products, manufacturers, categories.
#[derive(Clone)]
pub struct ProductService {
    db: Arc<DatabaseConnection>,
}

impl ProductService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn create_manufacturer(&self, name: String) -> Result<manufacturer::Model, ServiceError> {
        let model = manufacturer::ActiveModel {
            name: Set(name),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!(manufacturer_id = model.id, "created manufacturer");
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn list_manufacturers(&self) -> Result<Vec<manufacturer::Model>, ServiceError> {
        Ok(manufacturer::Entity::find()
            .order_by_asc(manufacturer::Column::Id)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn update_manufacturer(
        &self,
        id: i64,
        name: String,
    ) -> Result<manufacturer::Model, ServiceError> {
        let existing = manufacturer::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Manufacturer {} not found", id))
            })?;

        let mut model: manufacturer::ActiveModel = existing.into();
        model.name = Set(name);
        Ok(model.update(&*self.db).await?)
    }

    /// Deletes a manufacturer. Manufacturers with products are protected.
    #[instrument(skip(self))]
    pub async fn delete_manufacturer(&self, id: i64) -> Result<(), ServiceError> {
        let referenced = product::Entity::find()
            .filter(product::Column::ManufacturerId.eq(id))
            .count(&*self.db)
            .await?;
        if referenced > 0 {
            return Err(ServiceError::Conflict(
                "Manufacturer is referenced by products".to_string(),
            ));
        }

        let result = manufacturer::Entity::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Manufacturer {} not found",
                id
            )));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn create_category(&self, name: String) -> Result<category::Model, ServiceError> {
        let model = category::ActiveModel {
            name: Set(name),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!(category_id = model.id, "created category");
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<category::Model>, ServiceError> {
        Ok(category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn update_category(
        &self,
        id: i64,
        name: String,
    ) -> Result<category::Model, ServiceError> {
        let existing = category::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Category {} not found", id)))?;

        let mut model: category::ActiveModel = existing.into();
        model.name = Set(name);
        Ok(model.update(&*self.db).await?)
    }

    /// Deletes a category. Categories with products are protected.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: i64) -> Result<(), ServiceError> {
        let referenced = product::Entity::find()
            .filter(product::Column::CategoryId.eq(id))
            .count(&*self.db)
            .await?;
        if referenced > 0 {
            return Err(ServiceError::Conflict(
                "Category is referenced by products".to_string(),
            ));
        }

        let result = category::Entity::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!("Category {} not found", id)));
        }
        Ok(())
    }

    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductInput) -> Result<product::Model, ServiceError> {
        manufacturer::Entity::find_by_id(input.manufacturer_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Manufacturer {} not found", input.manufacturer_id))
            })?;
        category::Entity::find_by_id(input.category_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Category {} not found", input.category_id))
            })?;

        let now = Utc::now();
        let model = product::ActiveModel {
            name: Set(input.name),
            group: Set(input.group.to_string()),
            code: Set(input.code),
            batch_number: Set(input.batch_number),
            unit: Set(input.unit),
            purchase_price: Set(input.purchase_price),
            sales_price_net: Set(input.sales_price_net),
            tax_rate: Set(input.tax_rate),
            best_before_date: Set(input.best_before_date),
            description: Set(input.description),
            manufacturer_id: Set(input.manufacturer_id),
            category_id: Set(input.category_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!(product_id = model.id, code = %model.code, "created product");
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> Result<product::Model, ServiceError> {
        product::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product {} not found", id)))
    }

    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<product::Model>, u64), ServiceError> {
        let paginator = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .paginate(&*self.db, per_page);
        let total = paginator.num_items().await?;
        let products = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok((products, total))
    }

    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        id: i64,
        input: ProductInput,
    ) -> Result<product::Model, ServiceError> {
        let existing = self.get_product(id).await?;

        let mut model: product::ActiveModel = existing.into();
        model.name = Set(input.name);
        model.group = Set(input.group.to_string());
        model.code = Set(input.code);
        model.batch_number = Set(input.batch_number);
        model.unit = Set(input.unit);
        model.purchase_price = Set(input.purchase_price);
        model.sales_price_net = Set(input.sales_price_net);
        model.tax_rate = Set(input.tax_rate);
        model.best_before_date = Set(input.best_before_date);
        model.description = Set(input.description);
        model.manufacturer_id = Set(input.manufacturer_id);
        model.category_id = Set(input.category_id);
        model.updated_at = Set(Utc::now());

        Ok(model.update(&*self.db).await?)
    }

    /// Deletes a product. Products referenced by note positions are
    /// protected; stock positions referencing the product go with it.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> Result<(), ServiceError> {
        self.get_product(id).await?;

        let referenced = note_position::Entity::find()
            .filter(note_position::Column::ProductId.eq(id))
            .count(&*self.db)
            .await?;
        if referenced > 0 {
            return Err(ServiceError::Conflict(
                "Product is referenced by note positions".to_string(),
            ));
        }

        stock_position::Entity::delete_many()
            .filter(stock_position::Column::ProductId.eq(id))
            .exec(&*self.db)
            .await?;
        product::Entity::delete_by_id(id).exec(&*self.db).await?;

        info!(product_id = id, "deleted product");
        Ok(())
    }
}
