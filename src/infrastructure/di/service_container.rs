//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{FormService, RandomProfileGenerator, SubmitPipeline};
use crate::config::Settings;
use crate::domain::PayloadSchema;
use crate::infrastructure::traits::{FileSystem, PredictionTransport, RealFileSystem};
use crate::infrastructure::{InfraResult, ReqwestTransport};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Prediction endpoint transport
    pub transport: Arc<dyn PredictionTransport>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let transport = ReqwestTransport::new(settings.timeout())?;
        Ok(Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(transport),
        ))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        transport: Arc<dyn PredictionTransport>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            transport,
        }
    }

    pub fn form_service(&self) -> FormService {
        FormService::new(Arc::clone(&self.fs))
    }

    pub fn generator(&self) -> RandomProfileGenerator {
        RandomProfileGenerator::new()
    }

    /// Pipeline for the configured endpoint; `schema`/`url` override settings.
    pub fn submit_pipeline(&self, schema: Option<PayloadSchema>, url: Option<&str>) -> SubmitPipeline {
        let endpoint = url
            .map(str::to_string)
            .unwrap_or_else(|| self.settings.endpoint_url());
        SubmitPipeline::new(
            Arc::clone(&self.transport),
            endpoint,
            schema.unwrap_or(self.settings.schema),
        )
    }
}
