//! HTTP API Client
//!
//! Functions for fetching country metadata and homicide-rate observations
//! from the two upstream REST APIs. Responses are decoded and merged by the
//! `crimescope` pipeline; these functions only move bytes.

use gloo_net::http::Request;

use crimescope::error::{FetchError, FetchResult};
use crimescope::pipeline::merge;
use crimescope::sources::countries::{
    parse_country, parse_country_list, DETAIL_FIELDS, LIST_FIELDS,
};
use crimescope::sources::indicator::{first_rate, parse_observations, rate_lookup};
use crimescope::types::{CountryDetail, CountryRecord, Year};

/// REST Countries v3.1 base URL
pub const COUNTRIES_API_BASE: &str = "https://restcountries.com/v3.1";

/// World Bank v2 base URL
pub const INDICATOR_API_BASE: &str = "https://api.worldbank.org/v2";

/// World Bank code for intentional homicides per 100,000 people
pub const HOMICIDE_INDICATOR: &str = "VC.IHR.PSRC.P5";

/// Fetch a URL and return the response body as text
async fn fetch_text(url: &str) -> FetchResult<String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))
}

/// Fetch and merge everything the dashboard table needs for one year
///
/// The two requests run sequentially; the indicator response is the smaller
/// of the two and the table cannot render until both have arrived anyway.
pub async fn fetch_dashboard(year: Year) -> Result<Vec<CountryRecord>, String> {
    let countries_url = format!("{}/all?fields={}", COUNTRIES_API_BASE, LIST_FIELDS);
    let indicator_url = format!(
        "{}/country/all/indicator/{}?format=json&per_page=300&date={}",
        INDICATOR_API_BASE, HOMICIDE_INDICATOR, year
    );

    let countries_body = fetch_text(&countries_url).await.map_err(|e| e.to_string())?;
    let countries = parse_country_list(&countries_body).map_err(|e| e.to_string())?;

    let indicator_body = fetch_text(&indicator_url).await.map_err(|e| e.to_string())?;
    let observations = parse_observations(&indicator_body).map_err(|e| e.to_string())?;

    Ok(merge(&countries, &rate_lookup(&observations)))
}

/// Fetch one country's profile and its homicide rate for one year
pub async fn fetch_country_detail(code: &str, year: Year) -> Result<CountryDetail, String> {
    let country_url = format!(
        "{}/alpha/{}?fields={}",
        COUNTRIES_API_BASE, code, DETAIL_FIELDS
    );
    let indicator_url = format!(
        "{}/country/{}/indicator/{}?format=json&per_page=10&date={}",
        INDICATOR_API_BASE, code, HOMICIDE_INDICATOR, year
    );

    let country_body = fetch_text(&country_url).await.map_err(|e| e.to_string())?;
    let country = parse_country(&country_body).map_err(|e| e.to_string())?;

    let indicator_body = fetch_text(&indicator_url).await.map_err(|e| e.to_string())?;
    let observations = parse_observations(&indicator_body).map_err(|e| e.to_string())?;

    Ok(country.into_detail(first_rate(&observations)))
}
