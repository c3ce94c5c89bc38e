use chrono::{DateTime, Local};

/// Source of wall-clock time for handlers and cache freshness checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}
