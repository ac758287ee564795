use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use futures_util::future::try_join_all;
use log::debug;
use crate::common::types::QueryMap;
use crate::database::errors::StorageError;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::announce_result::AnnounceResult;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_announcement::PeerAnnouncement;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::scrape_entry::ScrapeEntry;
use crate::tracker::structs::scrape_query_request::ScrapeQueryRequest;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

fn first_value<'a>(query: &'a QueryMap, field: &str) -> Option<&'a [u8]> {
    query.get(field).and_then(|values| values.first()).map(Vec::as_slice)
}

fn parse_integer<T: std::str::FromStr>(query: &QueryMap, field: &'static str) -> Result<T, TrackerError> {
    first_value(query, field)
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
        .and_then(|value| value.parse::<T>().ok())
        .ok_or(TrackerError::InvalidField(field))
}

fn parse_counter(query: &QueryMap, field: &'static str) -> Result<i64, TrackerError> {
    i64::try_from(parse_integer::<u64>(query, field)?).map_err(|_| TrackerError::InvalidField(field))
}

impl TorrentTracker {
    /// Picks the announcing address: the first entry of the forwarding header
    /// when present and not blank, the connection address otherwise.
    ///
    /// Only IPv4 survives, since the compact peer format has no room for
    /// anything else. `::1` and IPv4-mapped addresses are folded to IPv4.
    pub fn resolve_remote_ip(connection: Option<IpAddr>, forwarded: Option<&str>) -> Result<Ipv4Addr, TrackerError>
    {
        let connection = connection.ok_or(TrackerError::UnknownOriginIp)?;
        let ip = match forwarded.filter(|header| !header.trim().is_empty()) {
            None => connection,
            Some(header) => header.split(',')
                .next()
                .map(str::trim)
                .and_then(|entry| entry.parse::<IpAddr>().ok())
                .ok_or(TrackerError::InvalidField("ip"))?,
        };
        match ip {
            IpAddr::V4(ip) => Ok(ip),
            IpAddr::V6(ip) if ip == Ipv6Addr::LOCALHOST => Ok(Ipv4Addr::LOCALHOST),
            IpAddr::V6(ip) => ip.to_ipv4_mapped().ok_or(TrackerError::InvalidField("ip")),
        }
    }

    /// Turns a parsed announce query into a typed request.
    ///
    /// Checks run in a fixed order and the first failure is returned; nothing
    /// here touches storage.
    #[tracing::instrument(level = "debug", skip(self, query))]
    pub fn validate_announce(&self, remote_addr: Ipv4Addr, query: &QueryMap) -> Result<AnnounceQueryRequest, TrackerError>
    {
        let port = parse_integer::<u16>(query, "port")?;
        if port == 0 {
            return Err(TrackerError::InvalidField("port"));
        }
        let uploaded = parse_counter(query, "uploaded")?;
        let downloaded = parse_counter(query, "downloaded")?;

        let left = match parse_integer::<u64>(query, "left")? {
            u64::MAX => 1,
            left if left == i64::MAX as u64 => 1,
            left => i64::try_from(left).map_err(|_| TrackerError::InvalidField("left"))?,
        };

        let event = match first_value(query, "event") {
            None => AnnounceEvent::None,
            Some(value) => AnnounceEvent::parse(value).ok_or(TrackerError::InvalidField("event"))?,
        };

        let info_hash = first_value(query, "info_hash")
            .and_then(|value| InfoHash::try_from(value).ok())
            .ok_or(TrackerError::InvalidField("info_hash"))?;
        let peer_id = first_value(query, "peer_id")
            .and_then(|value| PeerId::try_from(value).ok())
            .ok_or(TrackerError::InvalidField("peer_id"))?;

        let key = match first_value(query, "key") {
            None | Some(b"") => None,
            Some(value) if value.is_ascii() => Some(String::from_utf8_lossy(value).into_owned()),
            Some(_) => return Err(TrackerError::InvalidField("key")),
        };

        Ok(AnnounceQueryRequest {
            info_hash,
            peer_id,
            remote_addr,
            port,
            uploaded,
            downloaded,
            left,
            event,
            key,
        })
    }

    #[tracing::instrument(level = "debug", skip(self, query))]
    pub fn validate_scrape(&self, query: &QueryMap) -> Result<ScrapeQueryRequest, TrackerError>
    {
        let values = match query.get("info_hash") {
            Some(values) if !values.is_empty() => values,
            _ => return Err(TrackerError::MissingInfoHash),
        };
        let info_hash = values.iter()
            .map(|value| InfoHash::try_from(value.as_slice()).map_err(|_| TrackerError::InvalidField("info_hash")))
            .collect::<Result<Vec<InfoHash>, TrackerError>>()?;
        Ok(ScrapeQueryRequest { info_hash })
    }

    /// Reads the torrent, creating it on first sight.
    ///
    /// Two first announces racing on the same info hash both end up with the
    /// single stored torrent: the loser's `Conflict` is answered by a re-read.
    pub async fn get_or_create_torrent(&self, info_hash: InfoHash) -> Result<Torrent, TrackerError>
    {
        if let Some(torrent) = self.storage.get_torrent(info_hash).await? {
            return Ok(torrent);
        }
        match self.storage.create_torrent(info_hash).await {
            Ok(torrent) => {
                self.update_stats(StatsEvent::TorrentsCreated, 1);
                debug!("[ANNOUNCE] New torrent {}", info_hash);
                Ok(torrent)
            }
            Err(StorageError::Conflict(_)) => {
                self.storage.get_torrent(info_hash).await?
                    .ok_or_else(|| StorageError::Corrupt(format!("torrent {info_hash} conflicted on create but cannot be read")).into())
            }
            Err(error) => Err(error.into()),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn handle_announce(&self, request: AnnounceQueryRequest) -> Result<AnnounceResult, TrackerError>
    {
        let mut torrent = self.get_or_create_torrent(request.info_hash).await?;
        let fields = PeerAnnouncement::from_request(&request);
        debug!(
            "[ANNOUNCE] {} peer {} at {} ({})",
            request.info_hash,
            request.peer_id,
            fields.peer_addr,
            request.peer_id.get_client_name().unwrap_or("unknown client")
        );

        let mut written = 0;
        if let Some(key) = request.key.as_deref() {
            written = match self.storage.update_peer_by_key(torrent.id, key, &fields).await {
                Ok(rows) => rows,
                Err(StorageError::Conflict(_)) => return Err(TrackerError::Unauthorized),
                Err(error) => return Err(error.into()),
            };
        }
        if written == 0 && self.storage.upsert_peer(torrent.id, &fields).await? == 0 {
            return Err(TrackerError::Unauthorized);
        }

        if request.event == AnnounceEvent::Completed {
            self.storage.increment_completed(torrent.id).await?;
            torrent.completed += 1;
        }

        let peers = self.storage.list_peers(torrent.id, self.config.tracker_config.peers_returned).await?;
        let complete = peers.iter().filter(|peer| peer.is_seeder()).count() as u64;
        let incomplete = peers.len() as u64 - complete;
        Ok(AnnounceResult {
            torrent,
            peers,
            complete,
            incomplete,
        })
    }

    /// Looks up every requested torrent once; unknown info hashes are left out.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn handle_scrape(&self, request: ScrapeQueryRequest) -> Result<BTreeMap<InfoHash, ScrapeEntry>, TrackerError>
    {
        let mut info_hashes = request.info_hash;
        info_hashes.sort();
        info_hashes.dedup();

        let torrents = try_join_all(info_hashes.into_iter().map(|info_hash| self.storage.get_torrent(info_hash))).await?;
        Ok(torrents.into_iter()
            .flatten()
            .map(|torrent| (torrent.info_hash, ScrapeEntry {
                complete: torrent.seeders,
                incomplete: torrent.leechers,
                downloaded: torrent.completed,
            }))
            .collect())
    }
}
