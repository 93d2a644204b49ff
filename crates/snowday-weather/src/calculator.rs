//! End-to-end pipeline: validate, geocode, fetch, score, report.

use reqwest::Client;
use serde::Serialize;
use snowday_core::{Config, RequestSequence, RequestTicket};
use tracing::instrument;

use crate::error::SnowDayError;
use crate::geocode::LocationResolver;
use crate::http::build_client;
use crate::model::{score, ProbabilityResult};
use crate::postal::PostalCode;
use crate::provider::WeatherProvider;
use crate::report::SnowDayReport;
use crate::types::{Country, GeoLocation, SchoolType, WeatherSnapshot};

/// Everything produced by one successful run.
#[derive(Debug, Clone, Serialize)]
pub struct SnowDayOutcome {
    pub postal_code: PostalCode,
    pub location: GeoLocation,
    pub snapshot: WeatherSnapshot,
    pub result: ProbabilityResult,
    pub report: SnowDayReport,
}

/// Runs the three stages in order. Stages share one HTTP client and nothing
/// else; a failure at any stage ends the run with no partial result.
#[derive(Debug)]
pub struct SnowDayCalculator {
    resolver: LocationResolver,
    provider: WeatherProvider,
    sequence: RequestSequence,
}

impl SnowDayCalculator {
    /// Build from configuration.
    ///
    /// # Errors
    /// Fails if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, SnowDayError> {
        let client = build_client(&config.http)?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            resolver: LocationResolver::new(client.clone(), &config.geocoder),
            provider: WeatherProvider::new(client, &config.forecast),
            sequence: RequestSequence::new(),
        }
    }

    pub fn resolver(&self) -> &LocationResolver {
        &self.resolver
    }

    pub fn provider(&self) -> &WeatherProvider {
        &self.provider
    }

    /// True if no run has started since `ticket` was issued.
    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.sequence.is_latest(ticket)
    }

    /// Estimate today's closure probability for a raw postal code.
    ///
    /// The ticket is issued before anything else and comes back with both
    /// outcomes, so a caller can drop a stale failure the same way it drops
    /// a stale success. The run itself fails with `Validation` before any
    /// network call for malformed input, then with whatever the geocoding
    /// or forecast stage reports.
    #[instrument(skip(self), level = "info")]
    pub async fn calculate(
        &self,
        raw_code: &str,
        country: Country,
        school: SchoolType,
    ) -> (RequestTicket, Result<SnowDayOutcome, SnowDayError>) {
        let ticket = self.sequence.next_ticket();
        let outcome = self.run(ticket, raw_code, country, school).await;

        if let Err(e) = &outcome {
            tracing::warn!("Request #{} failed: {}", ticket.value(), e);
        }
        (ticket, outcome)
    }

    async fn run(
        &self,
        ticket: RequestTicket,
        raw_code: &str,
        country: Country,
        school: SchoolType,
    ) -> Result<SnowDayOutcome, SnowDayError> {
        let postal_code = PostalCode::parse(raw_code, country)?;
        tracing::debug!("Request #{} for {}", ticket.value(), postal_code);

        let location = self.resolver.resolve(&postal_code).await?;
        let snapshot = self
            .provider
            .fetch(location.latitude, location.longitude)
            .await?;
        let result = score(&snapshot, country, school);
        let report = SnowDayReport::build(&location, &snapshot, &result, country, school);

        tracing::info!(
            "Request #{}: {} -> {}% ({})",
            ticket.value(),
            location.display_name,
            result.score,
            result.risk_level().label()
        );

        Ok(SnowDayOutcome {
            postal_code,
            location,
            snapshot,
            result,
            report,
        })
    }
}
