//! Submission pipeline
//!
//! Form state → payload → POST → outcome → rendered result.
//! Every terminal path hides the loading indicator and shows the result once.

use std::sync::Arc;

use tracing::{debug, error, instrument, warn};

use crate::domain::{build_payload, interpret_response, FormState, PayloadSchema, SubmitOutcome};
use crate::infrastructure::traits::{PredictionTransport, ResultSurface};

/// Where a submission stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPhase {
    Idle,
    Loading,
    Done(SubmitOutcome),
}

pub struct SubmitPipeline {
    transport: Arc<dyn PredictionTransport>,
    endpoint: String,
    schema: PayloadSchema,
    phase: SubmitPhase,
}

impl SubmitPipeline {
    pub fn new(
        transport: Arc<dyn PredictionTransport>,
        endpoint: impl Into<String>,
        schema: PayloadSchema,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            schema,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn schema(&self) -> PayloadSchema {
        self.schema
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    /// Submit the form and render the outcome on `surface`.
    #[instrument(skip_all, fields(endpoint = %self.endpoint, schema = %self.schema))]
    pub fn submit(&mut self, state: &FormState, surface: &mut dyn ResultSurface) -> SubmitOutcome {
        self.phase = SubmitPhase::Loading;
        surface.clear_result();
        surface.show_loading();

        let outcome = self.request(state);

        surface.hide_loading();
        surface.show_result(&outcome.render(self.schema));
        self.phase = SubmitPhase::Done(outcome.clone());
        outcome
    }

    fn request(&self, state: &FormState) -> SubmitOutcome {
        let body = match build_payload(state, self.schema).to_json() {
            Ok(body) => body,
            // nothing was sent
            Err(e) => {
                error!("payload serialization failed: {}", e);
                return SubmitOutcome::UnexpectedResponse {
                    body: e.to_string(),
                };
            }
        };
        debug!("request: {} bytes", body.len());

        match self.transport.post_json(&self.endpoint, &body) {
            Ok(response) => {
                let outcome = interpret_response(self.schema, response.status, &response.body);
                match &outcome {
                    SubmitOutcome::ApiError { status, message } => {
                        warn!("prediction API error: status={} detail={}", status, message)
                    }
                    SubmitOutcome::UnexpectedResponse { body } => {
                        warn!("unexpected prediction response: {}", body)
                    }
                    _ => debug!("prediction succeeded: {:?}", outcome),
                }
                outcome
            }
            Err(e) => {
                warn!("prediction request failed: {}", e);
                SubmitOutcome::NetworkError { message: e.message }
            }
        }
    }
}
