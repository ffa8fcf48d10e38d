//! Scheduling value objects

use std::fmt;
use std::str::FromStr;
use std::time::{Duration as StdDuration, SystemTime};

use crate::domain::error::DelayParseError;

/// Offset applied when a requested delivery time is not strictly in the
/// future, so the OS scheduler still accepts the submission (100 ms)
pub const SCHEDULE_CLAMP_MS: u64 = 100;

/// Effective delivery time for a scheduled notification.
/// Immutable and validated on creation: a requested time at or before "now"
/// is clamped forward to now + 100 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryTime {
    effective: SystemTime,
    clamped: bool,
}

impl DeliveryTime {
    /// Resolve a requested delivery time against the current clock
    pub fn at(requested: SystemTime) -> Self {
        Self::resolve(requested, SystemTime::now())
    }

    /// Resolve a requested delivery time against an explicit "now"
    pub fn resolve(requested: SystemTime, now: SystemTime) -> Self {
        if requested <= now {
            Self {
                effective: now + StdDuration::from_millis(SCHEDULE_CLAMP_MS),
                clamped: true,
            }
        } else {
            Self {
                effective: requested,
                clamped: false,
            }
        }
    }

    /// Get the effective submission time
    pub fn as_system_time(&self) -> SystemTime {
        self.effective
    }

    /// Whether the requested time was moved forward
    pub fn was_clamped(&self) -> bool {
        self.clamped
    }
}

/// Value object representing a relative delay until delivery.
/// Parsed from strings like "30s", "5m", "1h30m".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Delay {
    seconds: u64,
}

impl Delay {
    /// Create a Delay from seconds
    pub const fn from_secs(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Get the delay in seconds
    pub const fn as_secs(&self) -> u64 {
        self.seconds
    }

    /// Convert to std::time::Duration
    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_secs(self.seconds)
    }

    /// Delivery time this delay resolves to, measured from "now".
    /// A zero delay lands on the clamp path.
    pub fn delivery_time(&self) -> DeliveryTime {
        DeliveryTime::at(SystemTime::now() + self.as_std())
    }
}

impl FromStr for Delay {
    type Err = DelayParseError;

    /// Parse a delay string.
    /// Supported formats: "30s", "5m", "1h", "1h30m", "2m30s"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();

        let mut hours: u64 = 0;
        let mut minutes: u64 = 0;
        let mut seconds: u64 = 0;
        let mut current_num = String::new();
        let mut found_any = false;

        for ch in input.chars() {
            if ch.is_ascii_digit() {
                current_num.push(ch);
            } else if ch == 'h' && !current_num.is_empty() {
                hours = current_num
                    .parse()
                    .map_err(|_| DelayParseError { input: s.to_string() })?;
                current_num.clear();
                found_any = true;
            } else if ch == 'm' && !current_num.is_empty() {
                minutes = current_num
                    .parse()
                    .map_err(|_| DelayParseError { input: s.to_string() })?;
                current_num.clear();
                found_any = true;
            } else if ch == 's' && !current_num.is_empty() {
                seconds = current_num
                    .parse()
                    .map_err(|_| DelayParseError { input: s.to_string() })?;
                current_num.clear();
                found_any = true;
            } else {
                return Err(DelayParseError { input: s.to_string() });
            }
        }

        // Trailing bare number (e.g. "30") is an invalid format
        if !current_num.is_empty() || !found_any {
            return Err(DelayParseError { input: s.to_string() });
        }

        // Zero is allowed: delivery "now" is meaningful and resolves
        // through the clamp.
        Ok(Self {
            seconds: hours
                .saturating_mul(3600)
                .saturating_add(minutes.saturating_mul(60))
                .saturating_add(seconds),
        })
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.seconds / 3600;
        let minutes = (self.seconds % 3600) / 60;
        let seconds = self.seconds % 60;

        if hours > 0 {
            write!(f, "{}h", hours)?;
        }
        if minutes > 0 {
            write!(f, "{}m", minutes)?;
        }
        if seconds > 0 || (hours == 0 && minutes == 0) {
            write!(f, "{}s", seconds)?;
        }
        Ok(())
    }
}
