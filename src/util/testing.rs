//! Test support: logging setup and in-memory doubles for the I/O traits.

use std::collections::VecDeque;
use std::env;
use std::sync::{Mutex, Once};

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::RenderedResult;
use crate::infrastructure::traits::{
    HttpResponse, PredictionTransport, ResultSurface, TransportError,
};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub body: String,
}

/// Transport answering from a queue of canned replies and recording requests.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.push(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }))
    }

    /// Queue a transport failure.
    pub fn fail(self, message: &str) -> Self {
        self.push(Err(TransportError::new(message)))
    }

    fn push(self, reply: Result<HttpResponse, TransportError>) -> Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl PredictionTransport for MockTransport {
    fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                url: url.to_string(),
                body: body.to_string(),
            });
        }
        self.replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front())
            .unwrap_or_else(|| Err(TransportError::new("no reply queued")))
    }
}

/// What happened on a [`RecordingSurface`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    ShowLoading,
    HideLoading,
    ClearResult,
    ShowResult(RenderedResult),
}

/// Result surface that only records calls and tracks visibility.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
    pub loading_visible: bool,
    pub result: Option<RenderedResult>,
}

impl RecordingSurface {
    pub fn results_shown(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SurfaceEvent::ShowResult(_)))
            .count()
    }
}

impl ResultSurface for RecordingSurface {
    fn show_loading(&mut self) {
        self.loading_visible = true;
        self.events.push(SurfaceEvent::ShowLoading);
    }

    fn hide_loading(&mut self) {
        self.loading_visible = false;
        self.events.push(SurfaceEvent::HideLoading);
    }

    fn clear_result(&mut self) {
        self.result = None;
        self.events.push(SurfaceEvent::ClearResult);
    }

    fn show_result(&mut self, result: &RenderedResult) {
        self.result = Some(result.clone());
        self.events.push(SurfaceEvent::ShowResult(result.clone()));
    }
}
