//! Shared utility functions for WQD crates.

/// Timestamp utility functions
pub mod timestamps {
    use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
    use std::fmt;

    /// Naive date-time layouts accepted when no offset is given.
    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    /// Parse a user or backend supplied timestamp.
    ///
    /// Accepts RFC 3339 (`2024-05-01T08:30:00Z`, `2024-05-01T10:30:00+02:00`),
    /// naive date-times (`2024-05-01T08:30`, treated as UTC) and bare dates
    /// (`2024-05-01`, UTC midnight).
    pub fn parse_timestamp(s: &str) -> anyhow::Result<DateTime<Utc>> {
        let s = s.trim();
        if s.is_empty() {
            anyhow::bail!("Invalid time value: empty timestamp");
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(naive.and_utc());
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(midnight.and_utc());
            }
        }
        anyhow::bail!("Invalid time value: {}", s)
    }

    /// Format as ISO-8601 in UTC with millisecond precision,
    /// e.g. `2024-05-01T08:30:00.000Z`.
    pub fn to_iso(dt: &DateTime<Utc>) -> String {
        dt.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Format a timestamp for table display in the given zone,
    /// e.g. `5/1/2024, 8:30:00 AM`.
    pub fn format_display<Tz: TimeZone>(dt: &DateTime<Utc>, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        dt.with_timezone(tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string()
    }

    /// Format a timestamp for table display in the local time zone, using the
    /// offset in force at that instant.
    pub fn format_local(dt: &DateTime<Utc>) -> String {
        format_display(dt, &Local)
    }

}

/// Clock capability
pub mod clock {
    use chrono::{DateTime, Utc};

    /// Source of the current time, injectable so forms can be tested.
    pub trait Clock {
        fn now(&self) -> DateTime<Utc>;
    }

    /// Wall clock backed by the platform (`Date.now()` under WASM).
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// A clock frozen at a fixed instant.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct FixedClock(pub DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }
}
