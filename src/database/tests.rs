#[cfg(test)]
mod database_tests {
    use std::net::{Ipv4Addr, SocketAddrV4};
    use crate::common::common::current_time;
    use crate::database::enums::database_drivers::DatabaseDrivers;
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::structs::peer_announcement::PeerAnnouncement;
    use crate::tracker::structs::peer_id::PeerId;

    fn announcement(peer_id: u8, left: i64, key: Option<&str>, updated_at: i64) -> PeerAnnouncement {
        PeerAnnouncement {
            peer_id: PeerId([peer_id; 20]),
            peer_addr: SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, peer_id), 6881),
            uploaded: 0,
            downloaded: 0,
            left,
            event: AnnounceEvent::Started,
            key: key.map(String::from),
            updated_at,
        }
    }

    mod helpers_tests {
        use super::*;
        use crate::database::helpers;

        #[test]
        fn test_placeholder() {
            assert_eq!(helpers::placeholder(DatabaseDrivers::sqlite3, 3), "?3");
            assert_eq!(helpers::placeholder(DatabaseDrivers::pgsql, 3), "$3");
        }

        #[test]
        fn test_create_tables_types() {
            let sqlite = helpers::build_create_tables_queries(DatabaseDrivers::sqlite3);
            assert!(sqlite[0].contains("info_hash BLOB NOT NULL UNIQUE"));
            assert!(sqlite[1].contains("PRIMARY KEY (torrent_id, peer_id)"));
            let pgsql = helpers::build_create_tables_queries(DatabaseDrivers::pgsql);
            assert!(pgsql[0].contains("info_hash BYTEA NOT NULL UNIQUE"));
            assert!(pgsql[1].contains("\"left\" BIGINT"));
            assert_eq!(pgsql.len(), 4);
        }

        #[test]
        fn test_upsert_guards_keyed_peers() {
            let query = helpers::build_upsert_peer_query(DatabaseDrivers::pgsql);
            assert!(query.contains("ON CONFLICT (torrent_id, peer_id) DO UPDATE SET"));
            assert!(query.ends_with("WHERE peers.\"key\" = '' OR peers.\"key\" = excluded.\"key\""));
            assert!(query.contains("$10"));
        }

        #[test]
        fn test_stale_cutoff() {
            let cutoff = helpers::stale_cutoff(std::time::Duration::from_secs(3600));
            let expected = current_time() - 3600;
            assert!((cutoff - expected).abs() <= 1);
        }

        #[test]
        fn test_key_encoding() {
            assert_eq!(helpers::encode_key(&None), "");
            assert_eq!(helpers::encode_key(&Some(String::from("abc"))), "abc");
            assert_eq!(helpers::decode_key(String::new()), None);
            assert_eq!(helpers::decode_key(String::from("abc")), Some(String::from("abc")));
        }

        #[test]
        fn test_build_torrent_peer_rejects_corrupt_rows() {
            let torrent_id = crate::tracker::structs::torrent_id::TorrentId::new_v4();
            assert!(helpers::build_torrent_peer(torrent_id, &[1u8; 19], "10.0.0.1", 6881, 0, 0, 0, "", String::new(), 0).is_err());
            assert!(helpers::build_torrent_peer(torrent_id, &[1u8; 20], "not-an-ip", 6881, 0, 0, 0, "", String::new(), 0).is_err());
            assert!(helpers::build_torrent_peer(torrent_id, &[1u8; 20], "10.0.0.1", 70000, 0, 0, 0, "", String::new(), 0).is_err());
            assert!(helpers::build_torrent_peer(torrent_id, &[1u8; 20], "10.0.0.1", 6881, 0, 0, 0, "paused", String::new(), 0).is_err());
            let peer = helpers::build_torrent_peer(torrent_id, &[1u8; 20], "10.0.0.1", 6881, 1, 2, 3, "completed", String::from("k"), 9).unwrap();
            assert_eq!(peer.event, AnnounceEvent::Completed);
            assert_eq!(peer.key.as_deref(), Some("k"));
            assert_eq!(peer.peer_addr.port(), 6881);
        }
    }

    mod memory_tests {
        use super::*;
        use std::time::Duration;
        use crate::database::errors::StorageError;
        use crate::database::structs::database_connector_memory::DatabaseConnectorMemory;
        use crate::database::traits::database_backend::DatabaseBackend;
        use crate::tracker::structs::info_hash::InfoHash;

        #[tokio::test]
        async fn test_create_torrent_conflict() {
            let storage = DatabaseConnectorMemory::new();
            let created = storage.create_torrent(InfoHash([1u8; 20])).await.unwrap();
            assert_eq!(created.completed, 0);
            assert!(matches!(storage.create_torrent(InfoHash([1u8; 20])).await, Err(StorageError::Conflict(_))));
            let found = storage.get_torrent(InfoHash([1u8; 20])).await.unwrap().unwrap();
            assert_eq!(found.id, created.id);
            assert!(storage.get_torrent(InfoHash([2u8; 20])).await.unwrap().is_none());
        }

        #[tokio::test]
        async fn test_seeders_and_leechers_are_derived() {
            let storage = DatabaseConnectorMemory::new();
            let torrent = storage.create_torrent(InfoHash([1u8; 20])).await.unwrap();
            let now = current_time();
            storage.upsert_peer(torrent.id, &announcement(1, 0, None, now)).await.unwrap();
            storage.upsert_peer(torrent.id, &announcement(2, 0, None, now)).await.unwrap();
            storage.upsert_peer(torrent.id, &announcement(3, 500, None, now)).await.unwrap();
            let torrent = storage.get_torrent(InfoHash([1u8; 20])).await.unwrap().unwrap();
            assert_eq!((torrent.seeders, torrent.leechers), (2, 1));
            assert_eq!(storage.list_torrents().await.unwrap().len(), 1);
        }

        #[tokio::test]
        async fn test_upsert_respects_stored_key() {
            let storage = DatabaseConnectorMemory::new();
            let torrent = storage.create_torrent(InfoHash([1u8; 20])).await.unwrap();
            let now = current_time();
            assert_eq!(storage.upsert_peer(torrent.id, &announcement(1, 10, Some("secret"), now)).await.unwrap(), 1);
            assert_eq!(storage.upsert_peer(torrent.id, &announcement(1, 0, None, now)).await.unwrap(), 0);
            assert_eq!(storage.upsert_peer(torrent.id, &announcement(1, 0, Some("other"), now)).await.unwrap(), 0);
            let peers = storage.list_peers(torrent.id, 10).await.unwrap();
            assert_eq!(peers[0].left, 10);
            assert_eq!(storage.upsert_peer(torrent.id, &announcement(1, 0, Some("secret"), now)).await.unwrap(), 1);
            assert_eq!(storage.list_peers(torrent.id, 10).await.unwrap()[0].left, 0);
        }

        #[tokio::test]
        async fn test_update_peer_by_key_moves_peer_id() {
            let storage = DatabaseConnectorMemory::new();
            let torrent = storage.create_torrent(InfoHash([1u8; 20])).await.unwrap();
            let now = current_time();
            storage.upsert_peer(torrent.id, &announcement(1, 10, Some("secret"), now)).await.unwrap();
            assert_eq!(storage.update_peer_by_key(torrent.id, "unknown", &announcement(2, 10, Some("unknown"), now)).await.unwrap(), 0);
            assert_eq!(storage.update_peer_by_key(torrent.id, "secret", &announcement(2, 5, Some("secret"), now)).await.unwrap(), 1);
            let peers = storage.list_peers(torrent.id, 10).await.unwrap();
            assert_eq!(peers.len(), 1);
            assert_eq!(peers[0].peer_id, PeerId([2u8; 20]));
            assert_eq!(peers[0].key.as_deref(), Some("secret"));
        }

        #[tokio::test]
        async fn test_update_peer_by_key_conflict() {
            let storage = DatabaseConnectorMemory::new();
            let torrent = storage.create_torrent(InfoHash([1u8; 20])).await.unwrap();
            let now = current_time();
            storage.upsert_peer(torrent.id, &announcement(1, 10, Some("secret"), now)).await.unwrap();
            storage.upsert_peer(torrent.id, &announcement(2, 10, None, now)).await.unwrap();
            assert!(matches!(
                storage.update_peer_by_key(torrent.id, "secret", &announcement(2, 5, Some("secret"), now)).await,
                Err(StorageError::Conflict(_))
            ));
        }

        #[tokio::test]
        async fn test_update_peer_by_key_shared_key_conflict() {
            let storage = DatabaseConnectorMemory::new();
            let torrent = storage.create_torrent(InfoHash([1u8; 20])).await.unwrap();
            let now = current_time();
            storage.upsert_peer(torrent.id, &announcement(1, 10, Some("shared"), now)).await.unwrap();
            storage.upsert_peer(torrent.id, &announcement(2, 10, Some("shared"), now)).await.unwrap();
            assert!(matches!(
                storage.update_peer_by_key(torrent.id, "shared", &announcement(3, 5, Some("shared"), now)).await,
                Err(StorageError::Conflict(_))
            ));
            assert_eq!(storage.list_peers(torrent.id, 10).await.unwrap().len(), 2);
        }

        #[tokio::test]
        async fn test_list_peers_limit_prefers_recent() {
            let storage = DatabaseConnectorMemory::new();
            let torrent = storage.create_torrent(InfoHash([1u8; 20])).await.unwrap();
            for peer in 1..=5u8 {
                storage.upsert_peer(torrent.id, &announcement(peer, 1, None, 1000 + peer as i64)).await.unwrap();
            }
            let peers = storage.list_peers(torrent.id, 2).await.unwrap();
            assert_eq!(peers.len(), 2);
            assert_eq!(peers[0].peer_id, PeerId([5u8; 20]));
            assert_eq!(peers[1].peer_id, PeerId([4u8; 20]));
        }

        #[tokio::test]
        async fn test_delete_stale_peers() {
            let storage = DatabaseConnectorMemory::new();
            let torrent = storage.create_torrent(InfoHash([1u8; 20])).await.unwrap();
            let now = current_time();
            storage.upsert_peer(torrent.id, &announcement(1, 1, None, now - 7200)).await.unwrap();
            storage.upsert_peer(torrent.id, &announcement(2, 1, None, now - 60)).await.unwrap();
            assert_eq!(storage.delete_stale_peers(Duration::from_secs(3600)).await.unwrap(), 1);
            let peers = storage.list_peers(torrent.id, 10).await.unwrap();
            assert_eq!(peers.len(), 1);
            assert_eq!(peers[0].peer_id, PeerId([2u8; 20]));
            assert!(storage.get_torrent(InfoHash([1u8; 20])).await.unwrap().is_some());
        }

        #[tokio::test]
        async fn test_increment_completed() {
            let storage = DatabaseConnectorMemory::new();
            let torrent = storage.create_torrent(InfoHash([1u8; 20])).await.unwrap();
            storage.increment_completed(torrent.id).await.unwrap();
            storage.increment_completed(torrent.id).await.unwrap();
            assert_eq!(storage.get_torrent(InfoHash([1u8; 20])).await.unwrap().unwrap().completed, 2);
            assert!(storage.ping().await.unwrap());
        }
    }
}
