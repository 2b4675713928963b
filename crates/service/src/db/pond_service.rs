use uuid::Uuid;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel};
use tracing::info;

use models::pond::{self, PondInput};
use crate::errors::{db_err, ServiceError};

pub async fn create_pond(db: &DatabaseConnection, input: PondInput) -> Result<pond::Model, ServiceError> {
    let model = input.into_model()?;
    let saved = model.into_active_model().reset_all().insert(db).await.map_err(db_err)?;
    info!(event = "pond_created", id = %saved.id, name = %saved.name, "pond saved");
    Ok(saved)
}

pub async fn list_ponds(db: &DatabaseConnection) -> Result<Vec<pond::Model>, ServiceError> {
    pond::Entity::find().all(db).await.map_err(db_err)
}

pub async fn get_pond(db: &DatabaseConnection, id: Uuid) -> Result<Option<pond::Model>, ServiceError> {
    pond::Entity::find_by_id(id).one(db).await.map_err(db_err)
}

pub async fn update_pond(db: &DatabaseConnection, id: Uuid, input: PondInput) -> Result<pond::Model, ServiceError> {
    let mut am: pond::ActiveModel = get_pond(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Pond"))?
        .into();
    input.replace_into(&mut am)?;
    am.update(db).await.map_err(db_err)
}

pub async fn delete_pond(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = pond::Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Pond"));
    }
    info!(event = "pond_deleted", %id, "pond deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::pond::PondStatus;
    use serde_json::json;

    fn input(status: Option<&str>) -> PondInput {
        let mut v = json!({
            "name": "North-3",
            "area": "1.5",
            "boxQuantity": 12,
            "employ": "Karim",
            "pondStart": "2024-02-10"
        });
        if let Some(s) = status {
            v["status"] = json!(s);
        }
        serde_json::from_value(v).unwrap()
    }

    #[tokio::test]
    async fn status_defaults_to_active() -> anyhow::Result<()> {
        let db = get_db().await?;
        let saved = create_pond(&db, input(None)).await?;
        assert_eq!(saved.status, PondStatus::Active);
        assert_eq!(saved.area, 1.5);
        let found = get_pond(&db, saved.id).await?.unwrap();
        assert_eq!(found, saved);
        Ok(())
    }

    #[tokio::test]
    async fn rejects_unknown_status_and_missing_fields() -> anyhow::Result<()> {
        let db = get_db().await?;
        assert!(matches!(create_pond(&db, input(Some("Drained"))).await, Err(ServiceError::Validation(_))));
        let mut missing = input(None);
        missing.pond_start = None;
        assert!(matches!(create_pond(&db, missing).await, Err(ServiceError::Validation(_))));
        assert!(list_ponds(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_without_status_keeps_stored_status() -> anyhow::Result<()> {
        let db = get_db().await?;
        let saved = create_pond(&db, input(Some("Inactive"))).await?;
        let mut rename = input(None);
        rename.name = Some("North-3 (east)".into());

        let updated = update_pond(&db, saved.id, rename).await?;
        assert_eq!(updated.name, "North-3 (east)");
        assert_eq!(updated.status, PondStatus::Inactive);
        assert_eq!(get_pond(&db, saved.id).await?.unwrap().status, PondStatus::Inactive);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_and_delete_removes() -> anyhow::Result<()> {
        let db = get_db().await?;
        let saved = create_pond(&db, input(None)).await?;
        let mut next = input(Some("Inactive"));
        next.box_quantity = Some(20);
        let updated = update_pond(&db, saved.id, next).await?;
        assert_eq!(updated.status, PondStatus::Inactive);
        assert_eq!(updated.box_quantity, 20);

        delete_pond(&db, saved.id).await?;
        assert!(matches!(delete_pond(&db, saved.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(update_pond(&db, saved.id, input(None)).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
