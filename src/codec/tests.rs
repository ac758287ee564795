#[cfg(test)]
mod codec_tests {
    use std::collections::BTreeMap;
    use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
    use proptest::prelude::*;
    use crate::codec::codec::{announce_response, compact_peer, compact_peers, decode_announce_response, decode_compact_peers, decode_failure_reason, decode_scrape_response, failure_response, scrape_response};
    use crate::codec::errors::CodecError;
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::tracker::structs::scrape_entry::ScrapeEntry;
    use crate::tracker::structs::torrent_id::TorrentId;
    use crate::tracker::structs::torrent_peer::TorrentPeer;

    fn peer(addr: &str, left: i64) -> TorrentPeer {
        TorrentPeer {
            torrent_id: TorrentId::new_v4(),
            peer_id: PeerId([1u8; 20]),
            peer_addr: addr.parse().unwrap(),
            uploaded: 0,
            downloaded: 0,
            left,
            event: AnnounceEvent::Started,
            key: None,
            updated_at: 0,
        }
    }

    #[test]
    fn test_compact_peer_exact_bytes() {
        assert_eq!(compact_peer(Ipv4Addr::new(127, 0, 0, 1), 9999), [0x7F, 0x00, 0x00, 0x01, 0x27, 0x0F]);
        assert_eq!(compact_peer(Ipv4Addr::new(10, 20, 30, 40), 1), [10, 20, 30, 40, 0x00, 0x01]);
    }

    #[test]
    fn test_compact_peers_concatenates_in_order() {
        let peers = vec![peer("127.0.0.1:9999", 0), peer("192.168.1.2:6881", 10)];
        let encoded = compact_peers(&peers).unwrap();
        assert_eq!(encoded.len(), 12);
        assert_eq!(&encoded[0..6], &[0x7F, 0x00, 0x00, 0x01, 0x27, 0x0F]);
        assert_eq!(&encoded[6..12], &[192, 168, 1, 2, 0x1A, 0xE1]);
    }

    #[test]
    fn test_compact_peers_empty() {
        assert!(compact_peers(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_compact_peers_rejects_ipv6() {
        let peers = vec![peer("[2001:db8::1]:6881", 0)];
        assert!(matches!(compact_peers(&peers), Err(CodecError::UnsupportedAddress(SocketAddr::V6(_)))));
    }

    #[test]
    fn test_decode_compact_peers_rejects_partial_entry() {
        assert_eq!(decode_compact_peers(&[1, 2, 3, 4, 5, 6, 7]), Err(CodecError::InvalidLength(7)));
    }

    #[test]
    fn test_announce_response_layout() {
        let peers = vec![peer("127.0.0.1:9999", 0)];
        let encoded = announce_response(60, 120, 1, 0, &peers).unwrap();
        assert_eq!(
            encoded,
            b"d8:completei1e10:incompletei0e8:intervali60e12:min intervali120e5:peers6:\x7F\x00\x00\x01\x27\x0Fe".to_vec()
        );
        let decoded = decode_announce_response(&encoded).unwrap();
        assert_eq!(decoded.interval, 60);
        assert_eq!(decoded.min_interval, 120);
        assert_eq!(decoded.complete, 1);
        assert_eq!(decoded.incomplete, 0);
        assert_eq!(decoded.peers, vec![SocketAddrV4::new(Ipv4Addr::new(127, 0, 0, 1), 9999)]);
    }

    #[test]
    fn test_announce_response_without_peers() {
        let encoded = announce_response(60, 120, 0, 0, &[]).unwrap();
        assert!(encoded.ends_with(b"5:peers0:e"));
    }

    #[test]
    fn test_scrape_response_keys_are_raw_hashes() {
        let mut files = BTreeMap::new();
        files.insert(InfoHash([0xAA; 20]), ScrapeEntry { complete: 2, incomplete: 3, downloaded: 7 });
        let encoded = scrape_response(&files);
        let mut expected = b"d5:filesd20:".to_vec();
        expected.extend_from_slice(&[0xAA; 20]);
        expected.extend_from_slice(b"d8:completei2e10:downloadedi7e10:incompletei3eeee");
        assert_eq!(encoded, expected);
        assert_eq!(decode_scrape_response(&encoded).unwrap(), files);
    }

    #[test]
    fn test_scrape_response_empty_files() {
        assert_eq!(scrape_response(&BTreeMap::new()), b"d5:filesdee".to_vec());
    }

    #[test]
    fn test_failure_response() {
        let encoded = failure_response("port is not valid");
        assert_eq!(encoded, b"d14:failure reason17:port is not valide".to_vec());
        assert_eq!(decode_failure_reason(&encoded).unwrap(), "port is not valid");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode_announce_response(b"not bencode"), Err(CodecError::Malformed(_))));
        assert!(matches!(decode_failure_reason(b"d8:intervali60ee"), Err(CodecError::MissingField("failure reason"))));
    }

    proptest! {
        #[test]
        fn prop_compact_peers_decode_back(addrs in proptest::collection::vec((any::<u32>(), any::<u16>()), 0..50)) {
            let peers: Vec<TorrentPeer> = addrs.iter()
                .map(|(ip, port)| peer(&SocketAddrV4::new(Ipv4Addr::from(*ip), *port).to_string(), 0))
                .collect();
            let encoded = compact_peers(&peers).unwrap();
            prop_assert_eq!(encoded.len(), peers.len() * 6);
            let decoded = decode_compact_peers(&encoded).unwrap();
            let expected: Vec<SocketAddrV4> = addrs.iter().map(|(ip, port)| SocketAddrV4::new(Ipv4Addr::from(*ip), *port)).collect();
            prop_assert_eq!(decoded, expected);
        }
    }
}
