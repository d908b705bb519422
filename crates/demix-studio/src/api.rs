//! Blocking client for the separation service
//!
//! Uses ureq; calls run inside background tasks (`Task::perform`), never on
//! the UI thread. The creation call maps every failure mode onto a list of
//! display strings so the modal can render them without caring whether the
//! server produced a structured rejection or the transport fell over.

use std::time::Duration;

use thiserror::Error;

use demix_core::api::{CreateMixRequest, ErrorBody, MixCreated, TrackRef};

use crate::config::ApiConfig;

/// Shown when an HTTP error response carries no decodable `errors` array
const UNEXPECTED_RESPONSE_MSG: &str = "The server returned an unexpected response.";

/// Errors from non-submission endpoints
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// A rejected or failed mix creation attempt
///
/// `errors` is never empty; transport faults and undecodable bodies are
/// folded into a single generic entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitFailure {
    /// Messages for verbatim display, in server order
    pub errors: Vec<String>,
}

impl SubmitFailure {
    fn unexpected() -> Self {
        Self {
            errors: vec![UNEXPECTED_RESPONSE_MSG.to_string()],
        }
    }

    fn transport(detail: impl std::fmt::Display) -> Self {
        Self {
            errors: vec![format!("Failed to create mix: {}", detail)],
        }
    }
}

/// Client for the separation service REST API
pub struct MixClient {
    agent: ureq::Agent,
    base_url: String,
}

impl MixClient {
    pub fn new(config: &ApiConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the source track list
    pub fn list_tracks(&self) -> Result<Vec<TrackRef>> {
        let url = format!("{}/api/track/", self.base_url);
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        response
            .into_json()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Submit a dynamic mix creation request
    ///
    /// Exactly one HTTP request per call; no retries. A 2xx response with an
    /// undecodable body counts as a failure (the mix may exist server-side,
    /// but we cannot tell the caller which one).
    pub fn create_dynamic_mix(
        &self,
        request: &CreateMixRequest,
    ) -> std::result::Result<MixCreated, SubmitFailure> {
        let url = format!("{}/api/mix/dynamic/", self.base_url);
        log::info!(
            "POST {} (track={}, separator={})",
            url,
            request.source_track,
            request.separator
        );

        match self.agent.post(&url).send_json(request) {
            Ok(response) => response.into_json::<MixCreated>().map_err(|e| {
                log::warn!("Mix created but response body undecodable: {}", e);
                SubmitFailure::unexpected()
            }),
            Err(ureq::Error::Status(code, response)) => {
                match response.into_json::<ErrorBody>() {
                    Ok(body) if !body.errors.is_empty() => Err(SubmitFailure { errors: body.errors }),
                    _ => {
                        log::warn!("Mix creation rejected with status {} and no error list", code);
                        Err(SubmitFailure::unexpected())
                    }
                }
            }
            Err(err) => {
                log::warn!("Mix creation transport failure: {}", err);
                Err(SubmitFailure::transport(err))
            }
        }
    }
}
