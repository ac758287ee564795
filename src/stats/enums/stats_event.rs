//! Statistics event types.

use serde::{Deserialize, Serialize};

/// Everything the engine and transport report.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatsEvent {
    Announces,
    AnnounceReplies,
    Scrapes,
    ScrapeReplies,
    TorrentsCreated,
    PeersEvicted,
    BadRequests,
    Unauthorized,
    InternalErrors,
    SweepsFailed,
    NotFound,
}
