//! Per-day precipitation means re-derived from the hourly series.
//!
//! The provider also ships a daily `precipitation_sum`, but the view never
//! trusts it: recomputing from the hours is a cross-check against a
//! misaligned or stale daily aggregate.

#![allow(clippy::cast_precision_loss)]

use chrono::NaiveDate;

use crate::domain::forecast::HourRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct DailyPrecipitation {
    pub date: NaiveDate,
    pub mean_mm: f32,
}

/// Group the hourly samples by calendar date (first-seen order) and average
/// each group, rounded half-up to two decimals. Hours without a
/// precipitation sample count as 0 mm but still widen the group.
#[must_use]
pub fn daily_averages(hourly: &[HourRecord]) -> Vec<DailyPrecipitation> {
    let mut groups: Vec<(NaiveDate, f32, u32)> = Vec::new();

    for hour in hourly {
        let date = hour.time.date();
        let sample = hour.precipitation_mm.unwrap_or(0.0);
        match groups.iter_mut().find(|(d, _, _)| *d == date) {
            Some((_, sum, count)) => {
                *sum += sample;
                *count += 1;
            }
            None => groups.push((date, sample, 1)),
        }
    }

    groups
        .into_iter()
        .map(|(date, sum, count)| DailyPrecipitation {
            date,
            mean_mm: round_mm(sum / count as f32),
        })
        .collect()
}

/// Mean for one date, defaulting to 0 when the date has no hourly data.
#[must_use]
pub fn average_for(averages: &[DailyPrecipitation], date: NaiveDate) -> f32 {
    averages
        .iter()
        .find(|entry| entry.date == date)
        .map_or(0.0, |entry| entry.mean_mm)
}

fn round_mm(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
