use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
    pub population: Option<u64>,
}

impl Location {
    #[must_use]
    pub fn from_coords(lat: f64, lon: f64) -> Self {
        Self {
            name: format!("{lat:.4}, {lon:.4}"),
            latitude: lat,
            longitude: lon,
            country: None,
            admin1: None,
            population: None,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.admin1, &self.country) {
            (Some(admin), Some(country)) => format!("{}, {}, {}", self.name, admin, country),
            (None, Some(country)) => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }
}

/// One entry of the daily series. Position in the series is the day index.
#[derive(Debug, Clone)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub temperature_min_c: Option<f32>,
    pub temperature_max_c: Option<f32>,
    pub weather_code: Option<u8>,
    pub precipitation_sum_mm: Option<f32>,
    pub wind_speed_max_kmh: Option<f32>,
}

/// One entry of the hourly series. Timestamps carry no offset and are
/// interpreted in the payload's timezone.
#[derive(Debug, Clone)]
pub struct HourRecord {
    pub time: NaiveDateTime,
    pub temperature_c: Option<f32>,
    pub precipitation_mm: Option<f32>,
    pub relative_humidity: Option<f32>,
    pub uv_index: Option<f32>,
    pub wind_speed_kmh: Option<f32>,
    pub weather_code: Option<u8>,
}

/// One provider response for one location: a daily series and an hourly
/// series, both ordered ascending, plus the IANA zone that makes the naive
/// timestamps meaningful. Immutable once fetched.
#[derive(Debug, Clone)]
pub struct ForecastPayload {
    pub timezone: Tz,
    pub daily: Vec<DayRecord>,
    pub hourly: Vec<HourRecord>,
}

pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
