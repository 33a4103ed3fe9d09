mod common;

use common::{clock_at, date, fixture_day, fixture_hour, fixture_payload, time};
use skycast::domain::{
    forecast::ForecastPayload,
    sky::Mood,
    timeline::Selection,
    view::{ForecastViewModel, ViewError},
};

#[test]
fn default_selection_shows_today_from_the_current_hour() {
    let payload = fixture_payload("2024-01-10", 0, 0.0);
    let view = ForecastViewModel::build(&payload, Selection::Today, &clock_at("2024-01-12T09:30"))
        .expect("view");

    assert_eq!(view.active_day_index, 2);
    assert_eq!(view.window_start, 2 * 24 + 9);
    assert_eq!(view.hourly_window.len(), 24);
    assert_eq!(view.hourly_window[0].time, time("2024-01-12T09:00"));
}

#[test]
fn picking_a_day_moves_the_window_to_its_first_hour() {
    let payload = fixture_payload("2024-01-10", 0, 0.0);
    let selection = Selection::Date(date("2024-01-14"));
    let view =
        ForecastViewModel::build(&payload, selection, &clock_at("2024-01-10T15:00")).expect("view");

    assert_eq!(view.active_day_index, 4);
    assert_eq!(view.hourly_window[0].time, time("2024-01-14T00:00"));
    assert_eq!(view.hourly_window.len(), 24);
}

#[test]
fn date_outside_the_range_falls_back_to_the_first_day() {
    let payload = fixture_payload("2024-01-10", 0, 0.0);
    let selection = Selection::Date(date("2024-06-01"));
    let view =
        ForecastViewModel::build(&payload, selection, &clock_at("2024-01-10T15:00")).expect("view");

    assert_eq!(view.active_day_index, 0);
    assert_eq!(view.window_start, 0);
}

#[test]
fn last_day_selection_keeps_a_full_window_until_the_series_ends() {
    let payload = fixture_payload("2024-01-10", 0, 0.0);
    let selection = Selection::Date(date("2024-01-16"));
    let view =
        ForecastViewModel::build(&payload, selection, &clock_at("2024-01-10T15:00")).expect("view");

    // The last day starts 24 hours before the series end, so the window is
    // still complete; it just cannot extend past it.
    assert_eq!(view.active_day_index, 6);
    assert_eq!(view.hourly_window.len(), 24);
    assert_eq!(
        view.hourly_window.last().map(|h| h.time),
        Some(time("2024-01-16T23:00"))
    );
}

#[test]
fn rainy_payload_at_noon_classifies_rain_from_recomputed_precipitation() {
    let payload = fixture_payload("2024-01-10", 3, 0.5);
    let view = ForecastViewModel::build(&payload, Selection::Today, &clock_at("2024-01-10T12:00"))
        .expect("view");

    assert_eq!(view.precipitation_mm, 0.5);
    assert_eq!(view.mood, Mood::Rain);
}

#[test]
fn dry_overcast_payload_at_noon_is_cloudy_and_night_after_dark() {
    let payload = fixture_payload("2024-01-10", 3, 0.0);

    let noon = ForecastViewModel::build(&payload, Selection::Today, &clock_at("2024-01-10T12:00"))
        .expect("view");
    assert_eq!(noon.mood, Mood::Cloudy);

    let night = ForecastViewModel::build(&payload, Selection::Today, &clock_at("2024-01-10T21:00"))
        .expect("view");
    assert_eq!(night.mood, Mood::Night);
}

#[test]
fn empty_hourly_series_still_produces_a_view() {
    let payload = ForecastPayload {
        hourly: Vec::new(),
        ..fixture_payload("2024-01-10", 61, 0.0)
    };
    let view = ForecastViewModel::build(&payload, Selection::Today, &clock_at("2024-01-10T12:00"))
        .expect("view");

    assert!(view.hourly_window.is_empty());
    assert_eq!(view.precipitation_mm, 0.0);
    assert_eq!(view.snapshot.uv_index, None);
    // Dry day, drizzle code 61, midday: the code ladder still fires.
    assert_eq!(view.mood, Mood::Rain);
}

#[test]
fn empty_daily_series_is_rejected() {
    let payload = ForecastPayload {
        daily: Vec::new(),
        ..fixture_payload("2024-01-10", 0, 0.0)
    };
    let err = ForecastViewModel::build(&payload, Selection::Today, &clock_at("2024-01-10T12:00"))
        .expect_err("no daily series");
    assert_eq!(err, ViewError::MissingSeries);
}

#[test]
fn rebuilding_with_a_new_selection_shares_the_same_payload() {
    let payload = fixture_payload("2024-01-10", 0, 0.0);
    let clock = clock_at("2024-01-10T08:00");

    let today = ForecastViewModel::build(&payload, Selection::Today, &clock).expect("view");
    let friday =
        ForecastViewModel::build(&payload, Selection::Date(date("2024-01-12")), &clock)
            .expect("view");

    assert_eq!(today.active_day_index, 0);
    assert_eq!(friday.active_day_index, 2);
    // Both windows borrow from the same hourly series.
    assert_eq!(payload.hourly.len(), 7 * 24);
}

#[test]
fn uneven_hourly_coverage_averages_each_date_over_its_own_hours() {
    let daily = vec![fixture_day("2024-01-10", 61), fixture_day("2024-01-11", 61)];
    let mut hourly = Vec::new();
    // Full first day at 1 mm, a two-hour stub of the second day at 4 mm.
    for h in 0..24 {
        hourly.push(fixture_hour(
            time("2024-01-10T00:00") + chrono::Duration::hours(h),
            1.0,
        ));
    }
    hourly.push(fixture_hour(time("2024-01-11T00:00"), 4.0));
    hourly.push(fixture_hour(time("2024-01-11T01:00"), 4.0));

    let payload = ForecastPayload {
        daily,
        hourly,
        ..fixture_payload("2024-01-10", 61, 0.0)
    };

    let view = ForecastViewModel::build(
        &payload,
        Selection::Date(date("2024-01-11")),
        &clock_at("2024-01-10T12:00"),
    )
    .expect("view");

    assert_eq!(view.precipitation_mm, 4.0);
    assert_eq!(view.precipitation_for(date("2024-01-10")), 1.0);
}
