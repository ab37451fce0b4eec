//! HTTP transport for the prediction endpoint (blocking reqwest client).

use std::error::Error as _;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use crate::infrastructure::traits::{HttpResponse, PredictionTransport, TransportError};
use crate::infrastructure::{InfraError, InfraResult};

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a client; `timeout: None` waits as long as the server takes
    /// (the blocking client would otherwise default to 30s).
    pub fn new(timeout: Option<Duration>) -> InfraResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InfraError::Http {
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl PredictionTransport for ReqwestTransport {
    #[instrument(skip(self, body), fields(bytes = body.len()))]
    fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_owned())
            .send()
            .map_err(|e| TransportError::new(error_chain(&e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError::new(error_chain(&e)))?;
        debug!("post_json: status={} body_len={}", status, body.len());

        Ok(HttpResponse { status, body })
    }
}

/// reqwest's top-level message hides the cause ("error sending request").
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
