use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Unsupported address: {0} has no compact IPv4 form")]
    UnsupportedAddress(SocketAddr),

    #[error("Invalid length: {0} bytes is not a multiple of 6")]
    InvalidLength(usize),

    #[error("Malformed bencode: {0}")]
    Malformed(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),
}
