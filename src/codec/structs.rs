/// A decoded announce response.
pub mod announce_response;
