//! Shared HTTP plumbing for the geocoder and forecast clients.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use snowday_core::{HttpConfig, NetworkError};

use crate::error::SnowDayError;

/// Longest slice of an error body kept in `ServerError` messages
const MAX_ERROR_BODY: usize = 200;

/// Build the process-wide client. Settings are fixed once built.
pub fn build_client(config: &HttpConfig) -> Result<Client, SnowDayError> {
    let client = Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Send `request` and decode a JSON body.
///
/// Non-success statuses and undecodable bodies both surface as
/// [`NetworkError`]s; `service` names the upstream in log lines.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    service: &str,
) -> Result<T, SnowDayError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!("{} returned status {}", service, status);
        return Err(NetworkError::ServerError {
            status: status.as_u16(),
            message: truncate(&body, MAX_ERROR_BODY),
        }
        .into());
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        tracing::debug!("{} parse error: {}", service, e);
        NetworkError::InvalidResponse(format!("{service}: {e}")).into()
    })
}

fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
