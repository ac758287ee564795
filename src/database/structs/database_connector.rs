use std::sync::Arc;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::traits::database_backend::DatabaseBackend;

/// The backend selected by configuration, behind the storage trait.
#[derive(Clone)]
pub struct DatabaseConnector {
    pub(crate) backend: Arc<dyn DatabaseBackend>,
    pub(crate) engine: DatabaseDrivers,
}
