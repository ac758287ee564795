use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Error, Pool, Row, Sqlite};
use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::StorageError;
use crate::database::helpers::{build_create_tables_queries, build_delete_stale_peers_query, build_increment_completed_query, build_insert_torrent_query, build_list_torrents_query, build_select_peers_query, build_select_torrent_query, build_torrent, build_torrent_peer, build_update_peer_by_key_query, build_upsert_peer_query, encode_key, stale_cutoff};
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::common::common::current_time;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_announcement::PeerAnnouncement;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_id::TorrentId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

const ENGINE: DatabaseDrivers = DatabaseDrivers::sqlite3;
const LOG_PREFIX: &str = "[SQLite]";

impl DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug")]
    pub async fn create(dsl: &str, max_connections: u32) -> Result<Pool<Sqlite>, Error> {
        let options = SqliteConnectOptions::from_str(dsl)?
            .foreign_keys(true)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options.create_if_missing(true))
            .await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn database_connector(config: Arc<Configuration>, create_database: bool) -> Result<DatabaseConnectorSQLite, StorageError> {
        let pool = DatabaseConnectorSQLite::create(config.database.path.as_str(), config.database.max_connections).await
            .map_err(|e| {
                error!("{} Unable to connect to SQLite on DSL {}", LOG_PREFIX, config.database.path);
                error!("{} Message: {:#?}", LOG_PREFIX, e);
                StorageError::from(e)
            })?;
        let structure = DatabaseConnectorSQLite { pool };
        if create_database {
            info!("[BOOT] Database creation triggered for SQLite.");
            structure.create_tables().await?;
        }
        Ok(structure)
    }

    pub async fn create_tables(&self) -> Result<(), StorageError> {
        for query in build_create_tables_queries(ENGINE) {
            sqlx::query(&query).execute(&self.pool).await.map_err(|e| {
                error!("{} Error: {}", LOG_PREFIX, e);
                StorageError::from(e)
            })?;
        }
        info!("[BOOT SQLite] Tables are in place");
        Ok(())
    }

    fn torrent_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Torrent, StorageError> {
        let id: String = row.try_get("id")?;
        let info_hash: Vec<u8> = row.try_get("info_hash")?;
        build_torrent(
            &id,
            &info_hash,
            row.try_get("completed")?,
            row.try_get("created_at")?,
            row.try_get("seeders")?,
            row.try_get("leechers")?,
        )
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn create_torrent(&self, info_hash: InfoHash) -> Result<Torrent, StorageError> {
        let torrent = Torrent {
            id: TorrentId::new_v4(),
            info_hash,
            completed: 0,
            created_at: current_time(),
            seeders: 0,
            leechers: 0,
        };
        sqlx::query(&build_insert_torrent_query(ENGINE))
            .bind(torrent.id.to_string())
            .bind(&info_hash.0[..])
            .bind(torrent.created_at)
            .execute(&self.pool)
            .await?;
        Ok(torrent)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn get_torrent(&self, info_hash: InfoHash) -> Result<Option<Torrent>, StorageError> {
        let row = sqlx::query(&build_select_torrent_query(ENGINE))
            .bind(&info_hash.0[..])
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(Self::torrent_from_row).transpose()
    }

    async fn list_torrents(&self) -> Result<Vec<Torrent>, StorageError> {
        let rows = sqlx::query(&build_list_torrents_query())
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(Self::torrent_from_row).collect()
    }

    async fn increment_completed(&self, torrent_id: TorrentId) -> Result<(), StorageError> {
        sqlx::query(&build_increment_completed_query(ENGINE))
            .bind(torrent_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_peers(&self, torrent_id: TorrentId, limit: u64) -> Result<Vec<TorrentPeer>, StorageError> {
        let rows = sqlx::query(&build_select_peers_query(ENGINE))
            .bind(torrent_id.to_string())
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(|row| {
            let peer_id: Vec<u8> = row.try_get("peer_id")?;
            let ip: String = row.try_get("ip")?;
            let event: String = row.try_get("event")?;
            build_torrent_peer(
                torrent_id,
                &peer_id,
                &ip,
                row.try_get("port")?,
                row.try_get("uploaded")?,
                row.try_get("downloaded")?,
                row.try_get("left")?,
                &event,
                row.try_get("key")?,
                row.try_get("updated_at")?,
            )
        }).collect()
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn update_peer_by_key(&self, torrent_id: TorrentId, key: &str, fields: &PeerAnnouncement) -> Result<u64, StorageError> {
        let result = sqlx::query(&build_update_peer_by_key_query(ENGINE))
            .bind(&fields.peer_id.0[..])
            .bind(fields.peer_addr.ip().to_string())
            .bind(i64::from(fields.peer_addr.port()))
            .bind(fields.uploaded)
            .bind(fields.downloaded)
            .bind(fields.left)
            .bind(fields.event.as_str())
            .bind(fields.updated_at)
            .bind(torrent_id.to_string())
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn upsert_peer(&self, torrent_id: TorrentId, fields: &PeerAnnouncement) -> Result<u64, StorageError> {
        let result = sqlx::query(&build_upsert_peer_query(ENGINE))
            .bind(torrent_id.to_string())
            .bind(&fields.peer_id.0[..])
            .bind(fields.peer_addr.ip().to_string())
            .bind(i64::from(fields.peer_addr.port()))
            .bind(fields.uploaded)
            .bind(fields.downloaded)
            .bind(fields.left)
            .bind(fields.event.as_str())
            .bind(encode_key(&fields.key))
            .bind(fields.updated_at)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_stale_peers(&self, threshold: Duration) -> Result<u64, StorageError> {
        let result = sqlx::query(&build_delete_stale_peers_query(ENGINE))
            .bind(stale_cutoff(threshold))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<bool, StorageError> {
        let row = sqlx::query("SELECT 1 AS alive").fetch_one(&self.pool).await?;
        let alive: i64 = row.try_get("alive")?;
        Ok(alive == 1)
    }
}
