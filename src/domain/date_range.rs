// SPDX-License-Identifier: MPL-2.0
//! Date range selection and validation.
//!
//! The APOD archive starts on [`API_EPOCH`] and ends today. Both date
//! controls are clamped to that window, and a [`DateRange`] can only be
//! obtained by validating a [`DateSelection`], so any range that reaches
//! the network layer is ordered and in bounds.

use crate::error::ValidationError;
use chrono::{Days, NaiveDate};

/// First day served by the APOD archive.
pub const API_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1995, 6, 16) {
    Some(date) => date,
    None => panic!("invalid APOD epoch"),
};

/// Number of days between the default start date and today.
pub const DEFAULT_WINDOW_DAYS: u64 = 9;

/// Wire and display format of every date (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` string, ignoring surrounding whitespace.
///
/// Only the zero-padded four-digit-year shape is accepted, so partial input
/// such as `202-03-01` or `2024-3-1` does not parse.
#[must_use]
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    let well_formed = trimmed.len() == 10
        && trimmed.bytes().enumerate().all(|(i, byte)| match i {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// =============================================================================
// DateBounds
// =============================================================================

/// Inclusive window of selectable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    min: NaiveDate,
    max: NaiveDate,
}

impl DateBounds {
    /// Bounds of the archive as seen on `today`.
    #[must_use]
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            min: API_EPOCH,
            max: today.max(API_EPOCH),
        }
    }

    #[must_use]
    pub fn min(self) -> NaiveDate {
        self.min
    }

    #[must_use]
    pub fn max(self) -> NaiveDate {
        self.max
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date >= self.min && date <= self.max
    }

    /// Moves `date` into the window.
    #[must_use]
    pub fn clamp(self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min, self.max)
    }

    /// Shifts `date` by `delta` days and clamps the result.
    #[must_use]
    pub fn step(self, date: NaiveDate, delta: i64) -> NaiveDate {
        let shifted = if delta >= 0 {
            date.checked_add_days(Days::new(delta.unsigned_abs()))
        } else {
            date.checked_sub_days(Days::new(delta.unsigned_abs()))
        };
        match shifted {
            Some(date) => self.clamp(date),
            None if delta >= 0 => self.max,
            None => self.min,
        }
    }

    /// The range shown when the window opens: the last
    /// [`DEFAULT_WINDOW_DAYS`] days up to the upper bound.
    #[must_use]
    pub fn default_range(self) -> DateRange {
        let start = self
            .max
            .checked_sub_days(Days::new(DEFAULT_WINDOW_DAYS))
            .map_or(self.min, |date| self.clamp(date));
        DateRange {
            start,
            end: self.max,
        }
    }
}

// =============================================================================
// DateRange
// =============================================================================

/// A validated, ordered, in-bounds pair of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub fn start(self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, both ends included.
    #[must_use]
    pub fn day_count(self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

// =============================================================================
// DateSelection
// =============================================================================

/// Raw content of the two date controls. `None` means the field is empty
/// or does not hold a parsable date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateSelection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateSelection {
    #[must_use]
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Checks the selection against `bounds`.
    ///
    /// Missing fields are reported before ordering, start before end.
    pub fn validate(self, bounds: DateBounds) -> Result<DateRange, ValidationError> {
        let start = self.start.ok_or(ValidationError::MissingStart)?;
        let end = self.end.ok_or(ValidationError::MissingEnd)?;

        if start > end {
            return Err(ValidationError::StartAfterEnd { start, end });
        }

        for date in [start, end] {
            if !bounds.contains(date) {
                return Err(ValidationError::OutOfRange {
                    date,
                    min: bounds.min(),
                    max: bounds.max(),
                });
            }
        }

        Ok(DateRange { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn bounds() -> DateBounds {
        DateBounds::for_today(date(2024, 3, 10))
    }

    #[test]
    fn default_range_spans_nine_days_back_from_today() {
        let range = bounds().default_range();
        assert_eq!(range.start(), date(2024, 3, 1));
        assert_eq!(range.end(), date(2024, 3, 10));
        assert_eq!(range.day_count(), 10);
    }

    #[test]
    fn default_range_never_starts_before_epoch() {
        let range = DateBounds::for_today(date(1995, 6, 20)).default_range();
        assert_eq!(range.start(), API_EPOCH);
        assert_eq!(range.end(), date(1995, 6, 20));
    }

    #[test]
    fn bounds_run_from_epoch_to_today() {
        let bounds = bounds();
        assert_eq!(bounds.min(), date(1995, 6, 16));
        assert_eq!(bounds.max(), date(2024, 3, 10));
        assert!(bounds.contains(API_EPOCH));
        assert!(!bounds.contains(date(1995, 6, 15)));
        assert!(!bounds.contains(date(2024, 3, 11)));
    }

    #[test]
    fn clamp_pulls_dates_into_window() {
        let bounds = bounds();
        assert_eq!(bounds.clamp(date(1990, 1, 1)), API_EPOCH);
        assert_eq!(bounds.clamp(date(2030, 1, 1)), date(2024, 3, 10));
        assert_eq!(bounds.clamp(date(2000, 1, 1)), date(2000, 1, 1));
    }

    #[test]
    fn step_stops_at_bounds() {
        let bounds = bounds();
        assert_eq!(bounds.step(date(2024, 3, 10), 1), date(2024, 3, 10));
        assert_eq!(bounds.step(API_EPOCH, -1), API_EPOCH);
        assert_eq!(bounds.step(date(2024, 3, 1), -1), date(2024, 2, 29));
    }

    #[test]
    fn validate_accepts_ordered_in_bounds_range() {
        let selection = DateSelection::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 3)));
        let range = selection.validate(bounds()).expect("valid range");
        assert_eq!(range.start(), date(2024, 1, 1));
        assert_eq!(range.end(), date(2024, 1, 3));
    }

    #[test]
    fn validate_accepts_single_day() {
        let day = date(2024, 1, 1);
        let range = DateSelection::new(Some(day), Some(day))
            .validate(bounds())
            .expect("single day is valid");
        assert_eq!(range.day_count(), 1);
    }

    #[test]
    fn validate_rejects_missing_dates() {
        let missing_start = DateSelection::new(None, Some(date(2024, 1, 3)));
        assert_eq!(
            missing_start.validate(bounds()),
            Err(ValidationError::MissingStart)
        );

        let missing_end = DateSelection::new(Some(date(2024, 1, 1)), None);
        assert_eq!(
            missing_end.validate(bounds()),
            Err(ValidationError::MissingEnd)
        );

        assert_eq!(
            DateSelection::default().validate(bounds()),
            Err(ValidationError::MissingStart)
        );
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let selection = DateSelection::new(Some(date(2024, 1, 3)), Some(date(2024, 1, 1)));
        assert!(matches!(
            selection.validate(bounds()),
            Err(ValidationError::StartAfterEnd { .. })
        ));
    }

    #[test]
    fn validate_rejects_dates_outside_archive() {
        let selection = DateSelection::new(Some(date(1990, 1, 1)), Some(date(2024, 1, 1)));
        assert!(matches!(
            selection.validate(bounds()),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn parse_date_accepts_iso_format_only() {
        assert_eq!(parse_date(" 2024-01-05 "), Some(date(2024, 1, 5)));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("05/01/2024"), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }

    #[test]
    fn parse_date_rejects_partial_or_unpadded_input() {
        assert_eq!(parse_date("202-03-01"), None);
        assert_eq!(parse_date("2024-3-1"), None);
        assert_eq!(parse_date("2024-03-1"), None);
        assert_eq!(parse_date("+2024-03-01"), None);
    }

    #[test]
    fn format_date_pads_month_and_day() {
        assert_eq!(format_date(date(2024, 1, 5)), "2024-01-05");
    }
}
