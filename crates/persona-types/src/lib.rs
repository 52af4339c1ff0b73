pub mod config;
pub mod defaults;
pub mod error;
pub mod message;
pub mod personality;
pub mod prompt;
pub mod transcript;


pub use error::ChatError;
pub type Result<T> = std::result::Result<T, ChatError>;

/// Current time in epoch milliseconds — the timestamp unit of all records.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
