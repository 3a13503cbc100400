// src/domain/clock.rs
use chrono::{DateTime, SecondsFormat, Utc};

/// Source of "now" for note ids and timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }

    /// ISO-8601 with millisecond precision and a `Z` suffix
    fn now_iso8601(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant, for tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn from_millis(millis: i64) -> Self {
        Self(DateTime::from_timestamp_millis(millis).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_fixed_clock_when_formatting_then_matches_js_iso_string() {
        let clock = FixedClock::from_millis(1_714_564_800_123);

        assert_eq!(clock.now_millis(), 1_714_564_800_123);
        assert_eq!(clock.now_iso8601(), "2024-05-01T12:00:00.123Z");
    }
}
