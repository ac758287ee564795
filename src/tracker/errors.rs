use actix_web::http::StatusCode;
use thiserror::Error;
use crate::codec::errors::CodecError;
use crate::database::errors::StorageError;

/// Every way an announce or scrape can fail.
///
/// The `Display` text is exactly the `failure reason` sent to the client, so
/// internal causes never leak over the wire; use `{:?}` or `source()` to log them.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("unknown origin ip")]
    UnknownOriginIp,

    #[error("{0} is not valid")]
    InvalidField(&'static str),

    #[error("info_hash is not present")]
    MissingInfoHash,

    #[error("key is not valid")]
    Unauthorized,

    #[error("internal server error")]
    Storage(#[from] StorageError),

    #[error("internal server error")]
    Codec(#[from] CodecError),
}

impl TrackerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TrackerError::UnknownOriginIp
            | TrackerError::InvalidField(_)
            | TrackerError::MissingInfoHash => StatusCode::BAD_REQUEST,
            TrackerError::Unauthorized => StatusCode::UNAUTHORIZED,
            TrackerError::Storage(_)
            | TrackerError::Codec(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }
}
