// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of submission timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
