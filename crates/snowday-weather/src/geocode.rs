//! Forward geocoding: convert a postal code to coordinates and a place name.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use reqwest::Client;
use serde::Deserialize;
use snowday_core::{GeocoderConfig, NetworkError};
use tracing::instrument;

use crate::error::SnowDayError;
use crate::postal::PostalCode;
use crate::types::{Country, GeoLocation};

const SEARCH_PATH: &str = "/search";
const UNKNOWN_PLACE: &str = "Unknown";

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    address: Option<NominatimAddress>,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
    province: Option<String>,
}

/// Resolves postal codes against the address-search service.
///
/// Every call goes to the network; nothing is cached and nothing is retried.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    client: Client,
    search_url: String,
}

impl LocationResolver {
    pub fn new(client: Client, config: &GeocoderConfig) -> Self {
        Self {
            client,
            search_url: format!("{}{}", config.base_url.trim_end_matches('/'), SEARCH_PATH),
        }
    }

    /// Look up `code` and return the first match.
    ///
    /// # Errors
    /// `NotFound` when the service has no match, `Network` when the request
    /// fails or the answer cannot be read.
    #[instrument(skip(self), fields(code = %code), level = "info")]
    pub async fn resolve(&self, code: &PostalCode) -> Result<GeoLocation, SnowDayError> {
        let country = code.country();
        let request = self.client.get(&self.search_url).query(&[
            ("format", "json"),
            ("q", code.as_str()),
            ("countrycodes", country.filter_code()),
            ("limit", "1"),
            ("addressdetails", "1"),
        ]);

        let places: Vec<NominatimPlace> = crate::http::get_json(request, "geocoder").await?;
        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| SnowDayError::NotFound {
                query: code.to_string(),
            })?;

        let location = GeoLocation {
            latitude: parse_coordinate(&place.lat, "lat")?,
            longitude: parse_coordinate(&place.lon, "lon")?,
            display_name: display_name(place.address.unwrap_or_default(), country),
        };

        tracing::info!(
            "Resolved {} to {} ({})",
            code,
            location.display_name,
            location.coordinates()
        );
        Ok(location)
    }
}

fn parse_coordinate(raw: &str, field: &str) -> Result<f64, SnowDayError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            NetworkError::InvalidResponse(format!("geocoder: bad {field} value {raw:?}")).into()
        })
}

/// "City, Region": first of city/town/village (else "Unknown"), then
/// state/province (else the country code).
fn display_name(addr: NominatimAddress, country: Country) -> String {
    let present = |s: Option<String>| s.filter(|v| !v.trim().is_empty());

    let place = present(addr.city)
        .or_else(|| present(addr.town))
        .or_else(|| present(addr.village))
        .unwrap_or_else(|| UNKNOWN_PLACE.to_string());

    // Only Canadian addresses fall back to the province
    let province = match country {
        Country::Canada => present(addr.province),
        Country::UnitedStates => None,
    };
    let region = present(addr.state)
        .or(province)
        .unwrap_or_else(|| country.code().to_string());

    format!("{}, {}", place, region)
}
