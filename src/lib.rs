pub mod cli;
pub mod data;
pub mod domain;
pub mod report;

use anyhow::Result;

use crate::{
    cli::Cli,
    data::{forecast::ForecastClient, geocode::GeocodeClient},
    domain::{
        forecast::Location,
        timeline::{Selection, SystemClock},
        view::ForecastViewModel,
    },
    report::DisplayLocale,
};

/// One-shot flow: resolve the place, fetch its forecast, derive the view
/// for the selected day and print it.
pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;

    let location = resolve_location(&cli).await?;
    tracing::info!(place = %location.display_name(), "location resolved");

    let client = match cli.forecast_url.as_deref() {
        Some(url) => ForecastClient::with_base_url(url),
        None => ForecastClient::new(),
    };
    let payload = client.fetch(location.latitude, location.longitude).await?;

    // A fresh location always starts from "today"; an explicit --date is
    // the one way to select another day.
    let selection = cli.date.map_or(Selection::Today, Selection::Date);
    let view = ForecastViewModel::build(&payload, selection, &SystemClock)?;

    let locale = DisplayLocale::from_tag(&cli.locale);
    print!("{}", report::render(&location, &payload, &view, locale));
    Ok(())
}

async fn resolve_location(cli: &Cli) -> Result<Location> {
    if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        return Ok(Location::from_coords(lat, lon));
    }

    let query = cli.default_place();
    let client = match cli.geocode_url.as_deref() {
        Some(url) => GeocodeClient::with_base_url(url),
        None => GeocodeClient::new(),
    };

    let mut candidates = client.search(&query).await?;
    if candidates.is_empty() {
        anyhow::bail!("no location found for {query:?}");
    }
    Ok(candidates.remove(0))
}
