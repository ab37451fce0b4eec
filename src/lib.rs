//! Teacher profile form client.
//!
//! Builds the form state for a teacher profile and a course to predict,
//! fills it with random demo data on request, and submits it to a score
//! prediction endpoint.
//!
//! Layers, innermost first: [`domain`] (form state, commands, payloads,
//! response interpretation), [`application`] (services), [`infrastructure`]
//! (filesystem, HTTP, wiring) and [`cli`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
