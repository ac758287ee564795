use std::sync::Arc;
use log::info;
use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::StorageError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_memory::DatabaseConnectorMemory;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::database_backend::DatabaseBackend;

impl DatabaseConnector {
    /// Opens the configured backend. With `create_database` the SQL backends
    /// create any missing tables before returning.
    pub async fn new(config: Arc<Configuration>, create_database: bool) -> Result<DatabaseConnector, StorageError>
    {
        let engine = config.database.engine;
        let backend: Arc<dyn DatabaseBackend> = match engine {
            DatabaseDrivers::memory => {
                info!("[BOOT] Using in-memory storage, nothing survives a restart");
                Arc::new(DatabaseConnectorMemory::new())
            }
            DatabaseDrivers::sqlite3 => {
                Arc::new(DatabaseConnectorSQLite::database_connector(config.clone(), create_database).await?)
            }
            DatabaseDrivers::pgsql => {
                Arc::new(DatabaseConnectorPgSQL::database_connector(config.clone(), create_database).await?)
            }
        };
        Ok(DatabaseConnector { backend, engine })
    }

    pub fn backend(&self) -> Arc<dyn DatabaseBackend> {
        self.backend.clone()
    }

    pub fn engine(&self) -> DatabaseDrivers {
        self.engine
    }
}
