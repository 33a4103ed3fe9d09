use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::forecast::Location;

const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(GEOCODE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(8))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    /// Ranked candidate locations for a free-text query, best match first.
    /// An unknown place yields an empty list rather than an error.
    pub async fn search(&self, query: &str) -> Result<Vec<Location>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", query),
                ("count", "5"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .context("geocoding request failed")?
            .error_for_status()
            .context("geocoding request returned non-success status")?;

        let payload: GeocodeResponse = response
            .json()
            .await
            .context("failed to decode geocoding response")?;

        let results = payload.results.unwrap_or_default();
        tracing::debug!(query, candidates = results.len(), "geocoding resolved");
        Ok(rank_candidates(results, query))
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    admin1: Option<String>,
    population: Option<u64>,
}

fn rank_candidates(results: Vec<GeocodeResult>, query: &str) -> Vec<Location> {
    let normalized_query = normalize(query);

    let mut scored: Vec<(bool, u64, usize, Location)> = results
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let exact_name_match = normalize(&entry.name) == normalized_query;
            let population = entry.population.unwrap_or_default();
            (
                exact_name_match,
                population,
                idx,
                Location {
                    name: entry.name,
                    latitude: entry.latitude,
                    longitude: entry.longitude,
                    country: entry.country,
                    admin1: entry.admin1,
                    population: entry.population,
                },
            )
        })
        .collect();

    scored.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| b.1.cmp(&a.1))
            .then_with(|| a.2.cmp(&b.2))
    });

    scored.into_iter().map(|(_, _, _, location)| location).collect()
}

fn normalize(value: &str) -> String {
    value
        .trim()
        .to_ascii_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, population: Option<u64>) -> GeocodeResult {
        GeocodeResult {
            name: name.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            country: None,
            admin1: None,
            population,
        }
    }

    #[test]
    fn ranking_prefers_exact_name_then_population() {
        let results = vec![
            result("Parish", Some(10_000_000)),
            result("Paris", Some(2_000_000)),
        ];

        let ranked = rank_candidates(results, "Paris");
        assert_eq!(ranked[0].name, "Paris");
        assert_eq!(ranked[1].name, "Parish");
    }

    #[test]
    fn ranking_falls_back_to_api_order_when_tied() {
        let results = vec![result("Springfield", None), result("Springfield", None)];

        let ranked = rank_candidates(results, "springfield");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "Springfield");
    }

    #[test]
    fn normalization_collapses_separators_and_case() {
        assert_eq!(normalize("  New-York_City "), "new york city");
    }
}
