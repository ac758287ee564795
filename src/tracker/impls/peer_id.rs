use std::fmt;
use std::fmt::Formatter;
use crate::common::common::bin2hex;
use crate::tracker::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}

impl PeerId {
    /// Best-effort client name from an Azureus-style (`-XX1234-`) or
    /// Mainline-style (`M`) peer id prefix.
    pub fn get_client_name(&self) -> Option<&'static str> {
        if self.0[0] == b'M' {
            return Some("BitTorrent");
        }
        if self.0[0] != b'-' {
            return None;
        }
        let name = match &self.0[1..3] {
            b"AZ" => "Azureus",
            b"BC" => "BitComet",
            b"DE" => "Deluge",
            b"KT" => "KTorrent",
            b"LT" => "libtorrent",
            b"lt" => "libTorrent",
            b"PI" => "PicoTorrent",
            b"qB" => "qBittorrent",
            b"TR" => "Transmission",
            b"UT" => "µTorrent",
            b"UW" => "µTorrent Web",
            b"WW" => "WebTorrent",
            _ => return None,
        };
        Some(name)
    }
}

impl TryFrom<&[u8]> for PeerId {
    type Error = std::array::TryFromSliceError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Ok(PeerId(<[u8; 20]>::try_from(data)?))
    }
}

impl From<[u8; 20]> for PeerId {
    fn from(data: [u8; 20]) -> Self {
        PeerId(data)
    }
}
