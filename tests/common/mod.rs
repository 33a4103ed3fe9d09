#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use skycast::domain::forecast::{DayRecord, ForecastPayload, HourRecord};
use skycast::domain::timeline::FixedClock;

pub fn time(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").expect("valid fixture time")
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid fixture date")
}

pub fn clock_at(value: &str) -> FixedClock {
    FixedClock(time(value))
}

pub fn fixture_day(d: &str, weather_code: u8) -> DayRecord {
    DayRecord {
        date: date(d),
        temperature_min_c: Some(3.0),
        temperature_max_c: Some(9.0),
        weather_code: Some(weather_code),
        precipitation_sum_mm: Some(3.2),
        wind_speed_max_kmh: Some(18.0),
    }
}

pub fn fixture_hour(t: NaiveDateTime, precip_mm: f32) -> HourRecord {
    HourRecord {
        time: t,
        temperature_c: Some(7.0),
        precipitation_mm: Some(precip_mm),
        relative_humidity: Some(70.0),
        uv_index: Some(2.0),
        wind_speed_kmh: Some(12.0),
        weather_code: Some(61),
    }
}

/// A week of daily records starting at `from`, with flat hourly coverage.
pub fn fixture_payload(from: &str, weather_code: u8, precip_mm: f32) -> ForecastPayload {
    let start = date(from);
    let daily: Vec<DayRecord> = (0..7)
        .map(|offset| {
            fixture_day(
                &(start + chrono::Duration::days(offset)).to_string(),
                weather_code,
            )
        })
        .collect();
    let hourly: Vec<HourRecord> = (0..7 * 24)
        .map(|h| {
            fixture_hour(
                start.and_hms_opt(0, 0, 0).expect("valid fixture midnight")
                    + chrono::Duration::hours(h),
                precip_mm,
            )
        })
        .collect();

    ForecastPayload {
        timezone: Tz::Europe__Rome,
        daily,
        hourly,
    }
}
