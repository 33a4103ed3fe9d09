//! The orchestrating value object: one payload plus one selection in, one
//! fully derived view model out. No state survives between builds, so a
//! build may run concurrently with any other and a stale model is simply
//! dropped by its owner.

use chrono::{NaiveDate, Timelike};
use thiserror::Error;

use crate::domain::{
    forecast::{ForecastPayload, HourRecord},
    precip::{self, DailyPrecipitation},
    sky::{self, Mood},
    timeline::{self, Clock, Selection},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    /// The payload has no daily series at all; there is no day to derive a
    /// view for. The only hard failure of a build.
    #[error("forecast payload has no daily series")]
    MissingSeries,
}

/// UV and humidity read at the window's first sample. `None` means the
/// display shows a placeholder, not that something went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurrentSnapshot {
    pub uv_index: Option<f32>,
    pub relative_humidity: Option<f32>,
}

/// Everything the presentation layer needs for one payload + selection.
/// Borrows the payload's hour records; rebuilt from scratch whenever the
/// payload or the selection changes.
#[derive(Debug, Clone)]
pub struct ForecastViewModel<'a> {
    pub active_day_index: usize,
    /// Absolute index of `hourly_window[0]` in the payload's hourly series.
    pub window_start: usize,
    pub hourly_window: &'a [HourRecord],
    /// Mean precipitation for the active day, re-derived from the hourly
    /// series rather than taken from the provider's daily sum.
    pub precipitation_mm: f32,
    pub daily_precipitation: Vec<DailyPrecipitation>,
    pub mood: Mood,
    pub snapshot: CurrentSnapshot,
}

impl<'a> ForecastViewModel<'a> {
    /// Derive the complete view model.
    ///
    /// Malformed-but-well-typed input degrades through the documented
    /// fallbacks (day 0, window start 0, 0 mm); only a payload with no
    /// daily series is rejected.
    pub fn build(
        payload: &'a ForecastPayload,
        selection: Selection,
        clock: &dyn Clock,
    ) -> Result<Self, ViewError> {
        if payload.daily.is_empty() {
            return Err(ViewError::MissingSeries);
        }

        let local_now = clock.local_now(payload.timezone);
        let active_day_index =
            timeline::resolve_day_index(&payload.daily, selection, local_now.date());
        let window_start =
            timeline::resolve_hourly_window_start(&payload.hourly, selection, local_now);
        let hourly_window = timeline::hourly_window(&payload.hourly, window_start);

        let daily_precipitation = precip::daily_averages(&payload.hourly);
        let active_day = &payload.daily[active_day_index];
        let precipitation_mm = precip::average_for(&daily_precipitation, active_day.date);

        let mood = sky::classify(
            active_day.weather_code.unwrap_or(0),
            precipitation_mm,
            local_now.hour(),
        );

        let snapshot = CurrentSnapshot {
            uv_index: hourly_window.first().and_then(|hour| hour.uv_index),
            relative_humidity: hourly_window
                .first()
                .and_then(|hour| hour.relative_humidity),
        };

        Ok(Self {
            active_day_index,
            window_start,
            hourly_window,
            precipitation_mm,
            daily_precipitation,
            mood,
            snapshot,
        })
    }

    /// Recomputed mean precipitation for any forecast date, 0 when the date
    /// has no hourly coverage.
    #[must_use]
    pub fn precipitation_for(&self, date: NaiveDate) -> f32 {
        precip::average_for(&self.daily_precipitation, date)
    }
}
