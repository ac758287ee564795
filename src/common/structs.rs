/// Generic error carrying a message, used for boot-time failures.
pub mod custom_error;
