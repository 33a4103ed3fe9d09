//! Alignment of a selection against the daily and hourly series.
//!
//! Both resolvers are permissive: a selection that cannot be matched falls
//! back to the start of the series instead of erroring, so the view always
//! has something to show at the edges of the forecast range.

use chrono::{NaiveDate, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::domain::forecast::{DayRecord, HourRecord};

/// Fixed length of the hourly window. The window is always up to this many
/// consecutive samples from the resolved start, clamped to the end of the
/// series; it is never filtered to the selected calendar day.
pub const WINDOW_HOURS: usize = 24;

/// The user's day choice: implicit "today" or an explicit calendar date.
/// Resets to `Today` whenever the location changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Today,
    Date(NaiveDate),
}

impl Selection {
    #[must_use]
    pub fn resolved_date(self, today: NaiveDate) -> NaiveDate {
        match self {
            Selection::Today => today,
            Selection::Date(date) => date,
        }
    }
}

/// Injected clock so "now" can be pinned in tests.
pub trait Clock {
    /// Wall-clock time expressed as a naive local timestamp in `tz`.
    fn local_now(&self, tz: Tz) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_now(&self, tz: Tz) -> NaiveDateTime {
        Utc::now().with_timezone(&tz).naive_local()
    }
}

/// Clock pinned to one instant, regardless of timezone. Test fixture.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn local_now(&self, _tz: Tz) -> NaiveDateTime {
        self.0
    }
}

/// Find the index of the selected date in the daily series.
///
/// A date outside the forecast range resolves to index 0. That keeps the
/// view renderable but can silently show the wrong day, so the miss is
/// logged as a warning.
#[must_use]
pub fn resolve_day_index(daily: &[DayRecord], selection: Selection, today: NaiveDate) -> usize {
    let wanted = selection.resolved_date(today);
    match daily.iter().position(|day| day.date == wanted) {
        Some(index) => index,
        None => {
            tracing::warn!(
                date = %wanted,
                "selected date not in the daily series, falling back to day 0"
            );
            0
        }
    }
}

/// Find where the hourly window starts for the selection.
///
/// A selection resolving to today anchors at the hour-truncated local now;
/// any other date anchors at its first hour. Either way a miss falls back
/// to index 0.
#[must_use]
pub fn resolve_hourly_window_start(
    hourly: &[HourRecord],
    selection: Selection,
    local_now: NaiveDateTime,
) -> usize {
    let today = local_now.date();
    let wanted = selection.resolved_date(today);

    let found = if wanted == today {
        let anchor = truncate_to_hour(local_now);
        hourly.iter().position(|hour| hour.time == anchor)
    } else {
        hourly.iter().position(|hour| hour.time.date() == wanted)
    };

    if found.is_none() && !hourly.is_empty() {
        tracing::debug!(date = %wanted, "no hourly anchor for selection, starting at 0");
    }
    found.unwrap_or(0)
}

/// Slice the window out of the hourly series without reading past its end.
/// A short final window near the end of the range is returned as-is.
#[must_use]
pub fn hourly_window(hourly: &[HourRecord], start: usize) -> &[HourRecord] {
    let start = start.min(hourly.len());
    let end = (start + WINDOW_HOURS).min(hourly.len());
    &hourly[start..end]
}

fn truncate_to_hour(time: NaiveDateTime) -> NaiveDateTime {
    time.date()
        .and_hms_opt(time.hour(), 0, 0)
        .unwrap_or(time)
}
