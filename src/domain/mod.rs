//! Domain layer: form entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod catalog;
pub mod commands;
pub mod entities;
pub mod entry_list;
pub mod error;
pub mod outcome;
pub mod payload;

pub use catalog::{find_domain, SubjectDomain, DOMAINS};
pub use commands::{CommandEffect, FormCommand, FormField, NewEntry};
pub use entities::*;
pub use entry_list::{EntryId, EntryList};
pub use error::DomainError;
pub use outcome::{interpret_response, RenderedResult, ScoreTier, SubmitOutcome, Tone};
pub use payload::{build_payload, Payload, PayloadSchema};
