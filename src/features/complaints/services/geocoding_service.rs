use serde::Deserialize;

use crate::core::config::GeocodingConfig;
use crate::core::error::{AppError, Result};
use crate::features::complaints::models::ResolvedLocation;

/// Nominatim API response structure
#[derive(Debug, Deserialize)]
pub struct NominatimResponse {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

/// Best-effort forward geocoding of complaint addresses using Nominatim.
///
/// Geocoding is an enrichment only: every failure path (disabled, HTTP
/// error, timeout, empty result) degrades to `None` and filing proceeds
/// with the manually entered address.
pub struct GeocodingService {
    client: reqwest::Client,
    config: GeocodingConfig,
}

impl GeocodingService {
    pub fn new(config: GeocodingConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("CivicTrackCore/1.0 (municipal-complaint-portal)")
                .build()
                .expect("Failed to build HTTP client"),
            config,
        }
    }

    /// Resolve an address, swallowing every failure. Bounded by the
    /// configured timeout so a slow Nominatim never delays filing past it.
    pub async fn resolve_best_effort(&self, address: &str) -> Option<ResolvedLocation> {
        if !self.config.enabled || address.trim().is_empty() {
            return None;
        }

        match tokio::time::timeout(self.config.timeout, self.geocode(address)).await {
            Ok(Ok(response)) => response.map(to_resolved_location),
            Ok(Err(e)) => {
                tracing::warn!("Geocoding failed for address, continuing without: {}", e);
                None
            }
            Err(_) => {
                tracing::warn!(
                    "Geocoding timed out after {:?}, continuing without",
                    self.config.timeout
                );
                None
            }
        }
    }

    /// Geocode a raw address using Nominatim free-form query
    async fn geocode(&self, raw_input: &str) -> Result<Option<NominatimResponse>> {
        let url = format!(
            "{}/search?q={}&format=json&addressdetails=0&limit=1&countrycodes={}",
            self.config.base_url,
            urlencoding::encode(raw_input),
            self.config.country_codes
        );

        tracing::debug!("Geocoding (free-form): {} -> {}", raw_input, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Nominatim request failed: {}", e))
        })?;

        if !response.status().is_success() {
            tracing::warn!("Nominatim returned status: {}", response.status());
            return Ok(None);
        }

        let results: Vec<NominatimResponse> = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to parse Nominatim response: {}", e))
        })?;

        Ok(results.into_iter().next())
    }
}

fn to_resolved_location(r: NominatimResponse) -> ResolvedLocation {
    ResolvedLocation {
        display_name: r.display_name,
        lat: r.lat.parse().ok(),
        lon: r.lon.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_to_resolved_location_parses_coordinates() {
        let loc = to_resolved_location(NominatimResponse {
            lat: "25.3176".to_string(),
            lon: "82.9739".to_string(),
            display_name: "MG Road, Varanasi".to_string(),
        });
        assert_eq!(loc.display_name, "MG Road, Varanasi");
        assert_eq!(loc.lat, Some(25.3176));
        assert_eq!(loc.lon, Some(82.9739));
    }

    #[test]
    fn test_to_resolved_location_tolerates_bad_coordinates() {
        let loc = to_resolved_location(NominatimResponse {
            lat: "not-a-number".to_string(),
            lon: "".to_string(),
            display_name: "Somewhere".to_string(),
        });
        assert!(loc.lat.is_none());
        assert!(loc.lon.is_none());
    }

    #[tokio::test]
    async fn test_disabled_geocoding_resolves_nothing() {
        let service = GeocodingService::new(GeocodingConfig {
            enabled: false,
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            timeout: Duration::from_secs(2),
            country_codes: "in".to_string(),
        });
        assert!(service.resolve_best_effort("MG Road").await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_degrades_to_none() {
        let service = GeocodingService::new(GeocodingConfig {
            enabled: true,
            // Reserved TEST-NET address; connection fails fast or times out
            base_url: "http://192.0.2.1:9".to_string(),
            timeout: Duration::from_millis(200),
            country_codes: "in".to_string(),
        });
        assert!(service.resolve_best_effort("MG Road").await.is_none());
    }
}
