use std::sync::Arc;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{info, instrument};

use crate::entities::{
    category, invoice, note, note_position, product, receipt, shop, store,
};
use crate::errors::ServiceError;

/// Fixed column set of the transaction report.
const EXPORT_FIELDS: [&str; 14] = [
    "marketplace",
    "country",
    "invoice_id",
    "transaction_id",
    "transaction_time",
    "transaction_type",
    "item_name",
    "item_type",
    "units",
    "marketplace_currency",
    "sales_price",
    "estimated_earnings",
    "client_id",
    "receipt_id",
];

/// Service building the CSV transaction report over external dispatch
/// notes.
#[derive(Clone)]
pub struct ExportService {
    db: Arc<DatabaseConnection>,
    country: String,
    currency: String,
}

impl ExportService {
    pub fn new(db: Arc<DatabaseConnection>, country: String, currency: String) -> Self {
        Self {
            db,
            country,
            currency,
        }
    }

    /// Renders the report as CSV text. With a note number only that
    /// note is exported, otherwise every external dispatch note is.
    #[instrument(skip(self))]
    pub async fn build_csv(&self, note_number: Option<&str>) -> Result<String, ServiceError> {
        let mut query = note::Entity::find();
        match note_number {
            Some(number) => {
                query = query.filter(note::Column::Number.eq(number));
            }
            None => {
                query = query
                    .filter(note::Column::Kind.eq("dispatch"))
                    .filter(note::Column::Handover.eq("external"));
            }
        }
        let notes = query.order_by_asc(note::Column::Id).all(&*self.db).await?;

        let mut lines = Vec::new();
        lines.push(
            EXPORT_FIELDS
                .iter()
                .map(|field| escape_field(field))
                .collect::<Vec<_>>()
                .join(","),
        );

        for note in &notes {
            let marketplace = self.dispatching_city(note).await?;
            let client_id = note
                .to_contractor_id
                .map(|id| id.to_string())
                .unwrap_or_default();
            let invoice_id = invoice::Entity::find()
                .filter(invoice::Column::NoteId.eq(note.id))
                .one(&*self.db)
                .await?
                .map(|model| model.id.to_string())
                .unwrap_or_default();
            let receipt_id = receipt::Entity::find()
                .filter(receipt::Column::NoteId.eq(note.id))
                .one(&*self.db)
                .await?
                .map(|model| model.id.to_string())
                .unwrap_or_default();

            let positions = note_position::Entity::find()
                .filter(note_position::Column::NoteId.eq(note.id))
                .order_by_asc(note_position::Column::Id)
                .all(&*self.db)
                .await?;

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
                let item_type = category::Entity::find_by_id(product.category_id)
                    .one(&*self.db)
                    .await?
                    .map(|model| model.name)
                    .unwrap_or_default();
                let estimated_earnings = position.price_net - product.purchase_price;

                let row = [
                    marketplace.clone(),
                    self.country.clone(),
                    invoice_id.clone(),
                    note.number.clone(),
                    note.updated_at.to_rfc3339(),
                    note.kind.clone(),
                    product.name,
                    item_type,
                    product.unit,
                    self.currency.clone(),
                    position.price_net.to_string(),
                    estimated_earnings.to_string(),
                    client_id.clone(),
                    receipt_id.clone(),
                ];
                lines.push(
                    row.iter()
                        .map(|field| escape_field(field))
                        .collect::<Vec<_>>()
                        .join(","),
                );
            }
        }

        info!(notes = notes.len(), rows = lines.len() - 1, "built export");
        Ok(lines.join("\n") + "\n")
    }

    /// City of the dispatching store or shop, empty when the note was
    /// issued by a contractor.
    async fn dispatching_city(&self, note: &note::Model) -> Result<String, ServiceError> {
        if let Some(store_id) = note.from_store_id {
            return Ok(store::Entity::find_by_id(store_id)
                .one(&*self.db)
                .await?
                .map(|model| model.city)
                .unwrap_or_default());
        }
        if let Some(shop_id) = note.from_shop_id {
            return Ok(shop::Entity::find_by_id(shop_id)
                .one(&*self.db)
                .await?
                .map(|model| model.city)
                .unwrap_or_default());
        }
        Ok(String::new())
    }
}

fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_field_quotes_only_when_needed() {
        assert_eq!(escape_field("Warsaw"), "Warsaw");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn header_has_fourteen_columns() {
        assert_eq!(EXPORT_FIELDS.len(), 14);
        assert_eq!(EXPORT_FIELDS[0], "marketplace");
        assert_eq!(EXPORT_FIELDS[13], "receipt_id");
    }
}
