//! Scrape request query parameters.

use crate::tracker::structs::info_hash::InfoHash;

/// Parsed scrape request parameters.
///
/// Scrape requests allow clients to query torrent statistics without
/// performing a full announce (BEP 48).
///
/// ```text
/// GET /scrape?info_hash=%xx...&info_hash=%yy...
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeQueryRequest {
    /// Requested info hashes in request order, duplicates included.
    pub info_hash: Vec<InfoHash>,
}
