use chrono::{DateTime, Utc};

/// Generate a new random ID (UUIDv4, no dashes).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string().replace('-', "")
}

/// Get the current time as a UTC timestamp.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
