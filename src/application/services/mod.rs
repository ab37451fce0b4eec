//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, PredictionTransport, ...)
//! but are themselves concrete structs, not traits.

mod form;
mod generator;
mod submit;

pub use form::{parse_form, render_form, FormService};
pub use generator::{
    random_stars, Correlation, GeneratedProfile, GenerationReport, RandomProfileGenerator,
    MAX_GENERATED_STARS, MIN_GENERATED_STARS,
};
pub use submit::{SubmitPhase, SubmitPipeline};
