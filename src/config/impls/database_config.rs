use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            engine: DatabaseDrivers::sqlite3,
            path: String::from("sqlite://data.db"),
            max_connections: 16,
        }
    }
}
