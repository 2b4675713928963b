use uuid::Uuid;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel};
use tracing::info;

use models::product::{self, ProductInput};
use crate::errors::{db_err, ServiceError};

pub async fn create_product(db: &DatabaseConnection, input: ProductInput) -> Result<product::Model, ServiceError> {
    let saved = input.into_model().into_active_model().reset_all().insert(db).await.map_err(db_err)?;
    info!(event = "product_created", id = %saved.id, "product saved");
    Ok(saved)
}

pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>, ServiceError> {
    product::Entity::find().all(db).await.map_err(db_err)
}

pub async fn get_product(db: &DatabaseConnection, id: Uuid) -> Result<Option<product::Model>, ServiceError> {
    product::Entity::find_by_id(id).one(db).await.map_err(db_err)
}

/// Partial merge of the provided fields.
pub async fn update_product(db: &DatabaseConnection, id: Uuid, input: ProductInput) -> Result<product::Model, ServiceError> {
    let mut am: product::ActiveModel = get_product(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Product"))?
        .into();
    input.merge_into(&mut am);
    am.update(db).await.map_err(db_err)
}

pub async fn delete_product(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = product::Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Product"));
    }
    info!(event = "product_deleted", %id, "product deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn empty_product_is_accepted() -> anyhow::Result<()> {
        let db = get_db().await?;
        let saved = create_product(&db, ProductInput::default()).await?;
        assert!(saved.product_name.is_none());
        assert_eq!(list_products(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_merges_only_provided_fields() -> anyhow::Result<()> {
        let db = get_db().await?;
        let saved = create_product(
            &db,
            ProductInput {
                product_name: Some("Feed 25kg".into()),
                cost_price: Some(1200.0),
                ..Default::default()
            },
        )
        .await?;
        let updated = update_product(&db, saved.id, ProductInput { sale_price: Some(1350.0), ..Default::default() }).await?;
        assert_eq!(updated.product_name.as_deref(), Some("Feed 25kg"));
        assert_eq!(updated.cost_price, Some(1200.0));
        assert_eq!(updated.sale_price, Some(1350.0));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() -> anyhow::Result<()> {
        let db = get_db().await?;
        let id = Uuid::new_v4();
        assert!(get_product(&db, id).await?.is_none());
        assert!(matches!(update_product(&db, id, ProductInput::default()).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(delete_product(&db, id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
