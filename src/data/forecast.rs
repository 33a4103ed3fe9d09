use anyhow::{Context, Result};
use chrono_tz::Tz;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::forecast::{
    DayRecord, ForecastPayload, HourRecord, parse_date, parse_datetime,
};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider answered without one of the two series; nothing can be
    /// derived from such a payload.
    #[error("forecast response is missing its {0} series")]
    MissingSeries(&'static str),
    #[error("forecast response carries unknown timezone {0:?}")]
    UnknownTimezone(String),
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(FORECAST_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<ForecastPayload> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                (
                    "hourly",
                    "temperature_2m,precipitation,relative_humidity_2m,uv_index,wind_speed_10m,weathercode"
                        .to_string(),
                ),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,precipitation_sum,weathercode,windspeed_10m_max"
                        .to_string(),
                ),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .context("forecast request failed")?
            .error_for_status()
            .context("forecast request returned non-success status")?;

        let payload: ForecastResponse = response
            .json()
            .await
            .context("failed to parse forecast payload")?;

        let timezone: Tz = payload
            .timezone
            .parse()
            .map_err(|_| FetchError::UnknownTimezone(payload.timezone.clone()))?;
        let daily_block = payload.daily.ok_or(FetchError::MissingSeries("daily"))?;
        let hourly_block = payload.hourly.ok_or(FetchError::MissingSeries("hourly"))?;

        let parsed = ForecastPayload {
            timezone,
            daily: parse_daily(&daily_block),
            hourly: parse_hourly(&hourly_block),
        };
        tracing::debug!(
            days = parsed.daily.len(),
            hours = parsed.hourly.len(),
            timezone = %parsed.timezone,
            "forecast payload parsed"
        );
        Ok(parsed)
    }
}

fn parse_hourly(hourly: &HourlyBlock) -> Vec<HourRecord> {
    let mut out = Vec::new();
    for idx in 0..hourly.time.len() {
        let Some(time) = parse_datetime(&hourly.time[idx]) else {
            continue;
        };

        out.push(HourRecord {
            time,
            temperature_c: hourly.temperature_2m.get(idx).copied().flatten(),
            precipitation_mm: hourly.precipitation.get(idx).copied().flatten(),
            relative_humidity: hourly.relative_humidity_2m.get(idx).copied().flatten(),
            uv_index: hourly.uv_index.get(idx).copied().flatten(),
            wind_speed_kmh: hourly.wind_speed_10m.get(idx).copied().flatten(),
            weather_code: hourly.weathercode.get(idx).copied().flatten(),
        });
    }
    out
}

fn parse_daily(daily: &DailyBlock) -> Vec<DayRecord> {
    let mut out = Vec::new();
    for idx in 0..daily.time.len() {
        let Some(date) = parse_date(&daily.time[idx]) else {
            continue;
        };

        out.push(DayRecord {
            date,
            temperature_min_c: daily.temperature_2m_min.get(idx).copied().flatten(),
            temperature_max_c: daily.temperature_2m_max.get(idx).copied().flatten(),
            weather_code: daily.weathercode.get(idx).copied().flatten(),
            precipitation_sum_mm: daily.precipitation_sum.get(idx).copied().flatten(),
            wind_speed_max_kmh: daily.windspeed_10m_max.get(idx).copied().flatten(),
        });
    }
    out
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    timezone: String,
    hourly: Option<HourlyBlock>,
    daily: Option<DailyBlock>,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    #[serde(default)]
    temperature_2m: Vec<Option<f32>>,
    #[serde(default)]
    precipitation: Vec<Option<f32>>,
    #[serde(default)]
    relative_humidity_2m: Vec<Option<f32>>,
    #[serde(default)]
    uv_index: Vec<Option<f32>>,
    #[serde(default)]
    wind_speed_10m: Vec<Option<f32>>,
    #[serde(default)]
    weathercode: Vec<Option<u8>>,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f32>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f32>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f32>>,
    #[serde(default)]
    weathercode: Vec<Option<u8>>,
    #[serde(default)]
    windspeed_10m_max: Vec<Option<f32>>,
}
