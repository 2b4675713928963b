use uuid::Uuid;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, Set};
use tracing::info;

use models::dates::day_prefix;
use models::pond_entry::{self, validate_products, PondEntryInput, ProductGroupInput};
use crate::errors::{db_err, ServiceError};

/// Validate every entry, then insert the batch in one statement.
pub async fn create_entries(db: &DatabaseConnection, rows: Vec<PondEntryInput>) -> Result<Vec<pond_entry::Model>, ServiceError> {
    let mut models = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let m = row
            .into_model()
            .map_err(|e| ServiceError::Validation(format!("entry[{i}]: {e}")))?;
        models.push(m);
    }
    if models.is_empty() {
        return Ok(models);
    }
    let rows = models.iter().cloned().map(|m| m.into_active_model().reset_all()).collect();
    super::insert_in_chunks(db, rows).await?;
    info!(event = "pond_entries_created", count = models.len(), "pond entry batch saved");
    Ok(models)
}

pub async fn create_entry(db: &DatabaseConnection, input: PondEntryInput) -> Result<pond_entry::Model, ServiceError> {
    let model = input.into_model()?;
    let saved = model.into_active_model().reset_all().insert(db).await.map_err(db_err)?;
    info!(event = "pond_entry_created", id = %saved.id, pond = %saved.pond_name, "pond entry saved");
    Ok(saved)
}

pub async fn list_entries(db: &DatabaseConnection) -> Result<Vec<pond_entry::Model>, ServiceError> {
    pond_entry::Entity::find().all(db).await.map_err(db_err)
}

/// Entries for one pond whose stored date equals the calendar day of `raw_date`.
pub async fn find_by_pond_and_day(
    db: &DatabaseConnection,
    pond_name: &str,
    raw_date: &str,
) -> Result<Vec<pond_entry::Model>, ServiceError> {
    let day = day_prefix(raw_date)?;
    pond_entry::Entity::find()
        .filter(pond_entry::Column::PondName.eq(pond_name))
        .filter(pond_entry::Column::Date.eq(day))
        .all(db)
        .await
        .map_err(db_err)
}

pub async fn get_entry(db: &DatabaseConnection, id: Uuid) -> Result<Option<pond_entry::Model>, ServiceError> {
    pond_entry::Entity::find_by_id(id).one(db).await.map_err(db_err)
}

/// Replace the product list only; pond name, date and entry time stay.
pub async fn update_products(
    db: &DatabaseConnection,
    id: Uuid,
    groups: Vec<ProductGroupInput>,
) -> Result<pond_entry::Model, ServiceError> {
    let existing = get_entry(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Pond entry"))?;
    let products = validate_products(groups)?;
    let mut am: pond_entry::ActiveModel = existing.into();
    am.products = Set(products);
    let saved = am.update(db).await.map_err(db_err)?;
    info!(event = "pond_entry_updated", %id, groups = saved.products.0.len(), "pond entry products replaced");
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use serde_json::json;

    fn entry(pond: &str, date: &str) -> PondEntryInput {
        serde_json::from_value(json!({
            "pondName": pond,
            "date": date,
            "products": [
                {"category": "Feed", "productEntries": [{"productName": "Mega 2mm", "quantity": 25}]},
                {"category": "Medicine", "productEntries": [{"productName": "Lime", "quantity": "3.5"}]}
            ]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn filtered_read_matches_pond_and_day() -> anyhow::Result<()> {
        let db = get_db().await?;
        create_entries(&db, vec![entry("A1", "2024-05-01"), entry("A1", "2024-05-02"), entry("B2", "2024-05-01")]).await?;

        let hits = find_by_pond_and_day(&db, "A1", "2024-05-01T10:00:00Z").await?;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].date, "2024-05-01");
        assert_eq!(hits[0].products.0[1].product_entries[0].quantity, 3.5);

        assert!(find_by_pond_and_day(&db, "C3", "2024-05-01").await?.is_empty());
        assert_eq!(list_entries(&db).await?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn batch_rejects_incomplete_lines() -> anyhow::Result<()> {
        let db = get_db().await?;
        let mut bad = entry("A1", "2024-05-01");
        bad.products[0].product_entries[0].quantity = None;
        let err = create_entries(&db, vec![entry("A1", "2024-05-01"), bad]).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(list_entries(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn large_batch_is_saved_whole() -> anyhow::Result<()> {
        let db = get_db().await?;
        let rows: Vec<PondEntryInput> = (0..1200).map(|i| entry(&format!("P{i}"), "2024-05-01")).collect();
        assert_eq!(create_entries(&db, rows).await?.len(), 1200);
        assert_eq!(list_entries(&db).await?.len(), 1200);
        Ok(())
    }

    #[tokio::test]
    async fn products_update_keeps_other_fields() -> anyhow::Result<()> {
        let db = get_db().await?;
        let saved = create_entry(&db, entry("A1", "2024-05-01")).await?;
        let groups: Vec<ProductGroupInput> = serde_json::from_value(json!([
            {"category": "Feed", "productEntries": [{"productName": "Mega 3mm", "quantity": 40}]}
        ]))?;

        let updated = update_products(&db, saved.id, groups).await?;
        assert_eq!(updated.pond_name, "A1");
        assert_eq!(updated.date, "2024-05-01");
        assert_eq!(updated.entry_time.timestamp(), saved.entry_time.timestamp());
        assert_eq!(updated.products.0.len(), 1);
        assert_eq!(get_entry(&db, saved.id).await?.unwrap().products, updated.products);

        assert!(matches!(update_products(&db, Uuid::new_v4(), vec![]).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
