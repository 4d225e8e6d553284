// crates/clear-attribute-core/src/core/clock.rs
// ============================================================================
// Module: Clock Sources
// Description: Wall-clock and fixed clocks plus GMT date formatting.
// Purpose: Stamp status lines and log events with an injectable time source.
// Dependencies: time
// ============================================================================

//! ## Overview
//! Status lines are stamped with the current GMT time in the
//! `YYYY-MM-DD HH:MM:SS` layout used by the host platform. The orchestrator
//! never reads the system clock directly; it asks a [`Clock`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::OffsetDateTime;
use time::UtcOffset;
use time::macros::format_description;

use crate::interfaces::Clock;

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Formats an instant as a GMT date string.
///
/// # Errors
///
/// Returns [`time::error::Format`] when the instant cannot be rendered.
pub fn gmt_date(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.to_offset(UtcOffset::UTC)
        .format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
}

// ============================================================================
// SECTION: Clocks
// ============================================================================

/// Clock backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Clock that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(OffsetDateTime);

impl FixedClock {
    /// Creates a clock pinned to `at`.
    #[must_use]
    pub const fn new(at: OffsetDateTime) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> OffsetDateTime {
        self.0
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only assertions.")]

    use time::macros::datetime;

    use super::*;

    #[test]
    fn gmt_date_normalizes_offsets() {
        let at = datetime!(2024-03-01 01:30:05 +02:00);
        assert_eq!(gmt_date(at).unwrap(), "2024-02-29 23:30:05");
    }

    #[test]
    fn fixed_clock_is_stable() {
        let at = datetime!(2024-01-02 03:04:05 UTC);
        let clock = FixedClock::new(at);
        assert_eq!(clock.now_utc(), clock.now_utc());
        assert_eq!(gmt_date(clock.now_utc()).unwrap(), "2024-01-02 03:04:05");
    }
}
