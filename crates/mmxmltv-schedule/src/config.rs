//! `ScheduleConfig` - explicit parse context.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

/// Parse context shared by the resolver and the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Zone the schedule page is published in.
    pub tz: Tz,
    /// Reference date used to infer month and year of section headers.
    pub today: NaiveDate,
}

impl ScheduleConfig {
    /// Creates a config with an explicit reference date.
    #[must_use]
    pub const fn new(tz: Tz, today: NaiveDate) -> Self {
        Self { tz, today }
    }

    /// Creates a config whose reference date is the current date in `tz`.
    #[must_use]
    pub fn now(tz: Tz) -> Self {
        let today = Utc::now().with_timezone(&tz).date_naive();
        Self { tz, today }
    }

    /// Attaches the configured zone to a local date-time.
    ///
    /// Ambiguous times resolve to the earlier instant. Times inside a DST
    /// gap are moved one hour forward.
    #[must_use]
    pub fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
        localize_in(self.tz, naive)
    }
}

/// Zone-explicit form of [`ScheduleConfig::localize`].
pub(crate) fn localize_in(tz: Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&naive).earliest().or_else(|| {
        let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
        tracing::debug!(%naive, %shifted, "local time falls in a DST gap");
        tz.from_local_datetime(&shifted).earliest()
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::{NaiveTime, Offset};
    use chrono_tz::America::{Mexico_City, Monterrey, New_York};

    use super::*;

    fn naive(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(hh, mm, 0).unwrap())
    }

    #[test]
    fn test_localize_fixed_offset_zone() {
        // Arrange
        let config = ScheduleConfig::new(Monterrey, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());

        // Act
        let dt = config.localize(naive(2024, 2, 1, 8, 0)).unwrap();

        // Assert
        assert_eq!(dt.offset().fix().local_minus_utc(), -6 * 3600);
        assert_eq!(dt.naive_local(), naive(2024, 2, 1, 8, 0));
    }

    #[test]
    fn test_localize_dst_gap_moves_forward() {
        // Arrange: 2024-03-10 02:30 does not exist in New York
        let config = ScheduleConfig::new(New_York, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());

        // Act
        let dt = config.localize(naive(2024, 3, 10, 2, 30)).unwrap();

        // Assert
        assert_eq!(dt.naive_local(), naive(2024, 3, 10, 3, 30));
    }

    #[test]
    fn test_localize_ambiguous_takes_earliest() {
        // Arrange: 2024-11-03 01:30 occurs twice in New York
        let config = ScheduleConfig::new(New_York, NaiveDate::from_ymd_opt(2024, 11, 3).unwrap());

        // Act
        let dt = config.localize(naive(2024, 11, 3, 1, 30)).unwrap();

        // Assert: EDT (-4) comes first
        assert_eq!(dt.offset().fix().local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn test_now_uses_zone() {
        // Arrange & Act
        let config = ScheduleConfig::now(Mexico_City);

        // Assert
        assert_eq!(config.tz, Mexico_City);
        assert_eq!(config.today, Utc::now().with_timezone(&Mexico_City).date_naive());
    }
}
