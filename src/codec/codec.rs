use std::borrow::Cow;
use std::collections::BTreeMap;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use bip_bencode::{ben_bytes, ben_int, ben_map, BDecodeOpt, BDictAccess, BMutAccess, BRefAccess, BencodeRef};
use byteorder::{BigEndian, ByteOrder};
use crate::codec::errors::CodecError;
use crate::codec::structs::announce_response::AnnounceResponse;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::scrape_entry::ScrapeEntry;
use crate::tracker::structs::torrent_peer::TorrentPeer;

pub const COMPACT_PEER_SIZE: usize = 6;

pub fn compact_peer(ip: Ipv4Addr, port: u16) -> [u8; COMPACT_PEER_SIZE] {
    let mut buffer = [0u8; COMPACT_PEER_SIZE];
    BigEndian::write_u32(&mut buffer[0..4], u32::from(ip));
    BigEndian::write_u16(&mut buffer[4..6], port);
    buffer
}

/// Concatenates the compact form of every peer, in order.
pub fn compact_peers(peers: &[TorrentPeer]) -> Result<Vec<u8>, CodecError> {
    let mut buffer = Vec::with_capacity(peers.len() * COMPACT_PEER_SIZE);
    for peer in peers {
        match peer.peer_addr {
            SocketAddr::V4(addr) => buffer.extend_from_slice(&compact_peer(*addr.ip(), addr.port())),
            SocketAddr::V6(_) => return Err(CodecError::UnsupportedAddress(peer.peer_addr)),
        }
    }
    Ok(buffer)
}

pub fn decode_compact_peers(data: &[u8]) -> Result<Vec<SocketAddrV4>, CodecError> {
    if data.len() % COMPACT_PEER_SIZE != 0 {
        return Err(CodecError::InvalidLength(data.len()));
    }
    Ok(data.chunks_exact(COMPACT_PEER_SIZE).map(|chunk| {
        SocketAddrV4::new(Ipv4Addr::from(BigEndian::read_u32(&chunk[0..4])), BigEndian::read_u16(&chunk[4..6]))
    }).collect())
}

pub fn announce_response(interval: u64, min_interval: u64, complete: u64, incomplete: u64, peers: &[TorrentPeer]) -> Result<Vec<u8>, CodecError> {
    let peers = compact_peers(peers)?;
    Ok(ben_map! {
        "interval" => ben_int!(interval as i64),
        "min interval" => ben_int!(min_interval as i64),
        "complete" => ben_int!(complete as i64),
        "incomplete" => ben_int!(incomplete as i64),
        "peers" => ben_bytes!(peers)
    }.encode())
}

/// Encodes `{files: {<raw hash>: {complete, downloaded, incomplete}}}`.
pub fn scrape_response(files: &BTreeMap<InfoHash, ScrapeEntry>) -> Vec<u8> {
    let mut scrape_list = ben_map!();
    if let Some(scrape_list_mut) = scrape_list.dict_mut() {
        for (info_hash, entry) in files.iter() {
            scrape_list_mut.insert(Cow::from(info_hash.0.to_vec()), ben_map! {
                "complete" => ben_int!(entry.complete as i64),
                "downloaded" => ben_int!(entry.downloaded as i64),
                "incomplete" => ben_int!(entry.incomplete as i64)
            });
        }
    }
    ben_map! {
        "files" => scrape_list
    }.encode()
}

pub fn failure_response(reason: &str) -> Vec<u8> {
    ben_map! {
        "failure reason" => ben_bytes!(reason)
    }.encode()
}

fn decode(data: &[u8]) -> Result<BencodeRef<'_>, CodecError> {
    BencodeRef::decode(data, BDecodeOpt::default()).map_err(|e| CodecError::Malformed(e.to_string()))
}

fn lookup_int(dict: &dyn BDictAccess<&[u8], BencodeRef<'_>>, name: &'static str) -> Result<i64, CodecError> {
    dict.lookup(name.as_bytes()).and_then(|value| value.int()).ok_or(CodecError::MissingField(name))
}

pub fn decode_announce_response(data: &[u8]) -> Result<AnnounceResponse, CodecError> {
    let bencode = decode(data)?;
    let dict = bencode.dict().ok_or(CodecError::MissingField("dictionary"))?;
    let peers = dict.lookup(b"peers").and_then(|value| value.bytes()).ok_or(CodecError::MissingField("peers"))?;
    Ok(AnnounceResponse {
        interval: lookup_int(dict, "interval")?,
        min_interval: lookup_int(dict, "min interval")?,
        complete: lookup_int(dict, "complete")?,
        incomplete: lookup_int(dict, "incomplete")?,
        peers: decode_compact_peers(peers)?,
    })
}

pub fn decode_scrape_response(data: &[u8]) -> Result<BTreeMap<InfoHash, ScrapeEntry>, CodecError> {
    let bencode = decode(data)?;
    let dict = bencode.dict().ok_or(CodecError::MissingField("dictionary"))?;
    let files = dict.lookup(b"files").and_then(|value| value.dict()).ok_or(CodecError::MissingField("files"))?;
    let mut result = BTreeMap::new();
    for (key, value) in files.to_list() {
        let info_hash = InfoHash::try_from(*key).map_err(|_| CodecError::MissingField("info_hash"))?;
        let entry = value.dict().ok_or(CodecError::MissingField("files"))?;
        result.insert(info_hash, ScrapeEntry {
            complete: lookup_int(entry, "complete")? as u64,
            incomplete: lookup_int(entry, "incomplete")? as u64,
            downloaded: lookup_int(entry, "downloaded")? as u64,
        });
    }
    Ok(result)
}

pub fn decode_failure_reason(data: &[u8]) -> Result<String, CodecError> {
    let bencode = decode(data)?;
    let dict = bencode.dict().ok_or(CodecError::MissingField("dictionary"))?;
    dict.lookup(b"failure reason")
        .and_then(|value| value.bytes())
        .map(|reason| String::from_utf8_lossy(reason).into_owned())
        .ok_or(CodecError::MissingField("failure reason"))
}
