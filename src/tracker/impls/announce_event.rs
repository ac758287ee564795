use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// Wire and storage spelling of the event; `None` is the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnounceEvent::None => "",
            AnnounceEvent::Completed => "completed",
            AnnounceEvent::Started => "started",
            AnnounceEvent::Stopped => "stopped",
        }
    }

    /// Case-sensitive inverse of [`AnnounceEvent::as_str`].
    pub fn parse(value: &[u8]) -> Option<AnnounceEvent> {
        match value {
            b"" => Some(AnnounceEvent::None),
            b"completed" => Some(AnnounceEvent::Completed),
            b"started" => Some(AnnounceEvent::Started),
            b"stopped" => Some(AnnounceEvent::Stopped),
            _ => None,
        }
    }
}
