//! Plain-text rendering of the derived view model. Deliberately thin: the
//! engine produces semantic values, this module only formats them.

use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate};

use crate::domain::{
    forecast::{ForecastPayload, Location},
    sky::icon_class,
    view::ForecastViewModel,
};

/// Locale for date headings, carried as an explicit value rather than
/// process-global state. The engine itself never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayLocale {
    #[default]
    English,
    Italian,
}

impl DisplayLocale {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("it") {
            DisplayLocale::Italian
        } else {
            DisplayLocale::English
        }
    }

    #[must_use]
    pub fn format_day(self, date: NaiveDate) -> String {
        let weekday = self.weekday_names()[date.weekday().num_days_from_monday() as usize];
        let month = self.month_names()[date.month0() as usize];
        format!("{weekday} {} {month}", date.day())
    }

    fn weekday_names(self) -> [&'static str; 7] {
        match self {
            DisplayLocale::English => [
                "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
            ],
            DisplayLocale::Italian => [
                "lunedì", "martedì", "mercoledì", "giovedì", "venerdì", "sabato", "domenica",
            ],
        }
    }

    fn month_names(self) -> [&'static str; 12] {
        match self {
            DisplayLocale::English => [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            DisplayLocale::Italian => [
                "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
            ],
        }
    }
}

#[must_use]
pub fn render(
    location: &Location,
    payload: &ForecastPayload,
    view: &ForecastViewModel<'_>,
    locale: DisplayLocale,
) -> String {
    let mut out = String::new();
    let active_day = &payload.daily[view.active_day_index];

    let _ = writeln!(out, "{}", location.display_name());
    let _ = writeln!(
        out,
        "{}  {} {}  [{}]",
        locale.format_day(active_day.date),
        icon_class(active_day.weather_code.unwrap_or(0)).emoji(),
        format_temp(active_day.temperature_max_c),
        view.mood.as_str(),
    );
    let _ = writeln!(
        out,
        "uv {}   humidity {}   rain {} mm   wind {} km/h",
        format_value(view.snapshot.uv_index),
        format_pct(view.snapshot.relative_humidity),
        view.precipitation_mm,
        format_value(active_day.wind_speed_max_kmh),
    );

    if !view.hourly_window.is_empty() {
        let _ = writeln!(out);
        for hour in view.hourly_window {
            let _ = writeln!(
                out,
                "  {}  {:>4}  {}",
                hour.time.format("%H:%M"),
                format_temp(hour.temperature_c),
                icon_class(hour.weather_code.unwrap_or(0)).emoji(),
            );
        }
    }

    let _ = writeln!(out);
    for (idx, day) in payload.daily.iter().enumerate() {
        let marker = if idx == view.active_day_index { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:<22} {:>5} / {:<5} {}",
            locale.format_day(day.date),
            format_temp(day.temperature_min_c),
            format_temp(day.temperature_max_c),
            icon_class(day.weather_code.unwrap_or(0)).emoji(),
        );
    }

    out
}

fn format_temp(value: Option<f32>) -> String {
    match value {
        Some(t) => format!("{}°", t.round() as i32),
        None => "-".to_string(),
    }
}

fn format_value(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "-".to_string(),
    }
}

fn format_pct(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{}%", v.round() as i32),
        None => "-".to_string(),
    }
}
