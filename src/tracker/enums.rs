/// Event reported by a peer in its announce.
pub mod announce_event;
