use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skycast",
    version,
    about = "Forecast cards for a place and day, straight from Open-Meteo"
)]
pub struct Cli {
    /// Place to look up (default: Firenze)
    pub place: Option<String>,

    /// Show a specific forecast day instead of today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_cli_date)]
    pub date: Option<NaiveDate>,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Locale for date headings (e.g. en, it)
    #[arg(long, default_value = "en")]
    pub locale: String,

    /// Override the forecast endpoint (testing)
    #[arg(long, hide = true)]
    pub forecast_url: Option<String>,

    /// Override the geocoding endpoint (testing)
    #[arg(long, hide = true)]
    pub geocode_url: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn default_place(&self) -> String {
        self.place.clone().unwrap_or_else(|| "Firenze".to_string())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            (Some(lat), Some(lon)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    anyhow::bail!("--lat must be within -90..=90");
                }
                if !(-180.0..=180.0).contains(&lon) {
                    anyhow::bail!("--lon must be within -180..=180");
                }
                Ok(())
            }
            (None, None) => Ok(()),
        }
    }
}

fn parse_cli_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("{value:?} is not a YYYY-MM-DD date"))
}
