use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::storage::FileStore;

/// Shared by every handler: the pool and where attachments go.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub files: Arc<dyn FileStore>,
}
