//! Form file service
//!
//! Loads and saves form state as TOML so successive CLI invocations act on
//! the same form, and runs commands against it.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{CommandEffect, EntryKind, FormCommand, FormState};
use crate::infrastructure::traits::FileSystem;

/// Service for reading, writing and editing form files.
pub struct FormService {
    fs: Arc<dyn FileSystem>,
}

impl FormService {
    /// Create a new form service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Write a fresh form (one default entry per list).
    pub fn init(&self, path: &Path, force: bool) -> ApplicationResult<FormState> {
        let state = FormState::with_defaults();
        self.create(path, &state, force)?;
        Ok(state)
    }

    /// Write `state` to a new form file.
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    #[instrument(skip(self, state))]
    pub fn create(&self, path: &Path, state: &FormState, force: bool) -> ApplicationResult<()> {
        if !force && self.fs.exists(path) {
            return Err(ApplicationError::FormExists(path.to_path_buf()));
        }
        self.save(path, state)
    }

    pub fn load(&self, path: &Path) -> ApplicationResult<FormState> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::FormNotFound(path.to_path_buf()));
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read form", path)?;
        let state = parse_form(&content).map_err(|message| ApplicationError::InvalidForm {
            path: path.to_path_buf(),
            message,
        })?;
        debug!(
            "load: {} diplomas={} experiences={} past_courses={}",
            path.display(),
            state.diplomas.len(),
            state.experiences.len(),
            state.past_courses.len()
        );
        Ok(state)
    }

    pub fn save(&self, path: &Path, state: &FormState) -> ApplicationResult<()> {
        let content = render_form(state)?;
        self.fs
            .ensure_parent(path)
            .with_path_context("create parent directory", path)?;
        self.fs
            .write(path, &content)
            .with_path_context("write form", path)?;
        debug!("save: wrote {}", path.display());
        Ok(())
    }

    /// Load the form, apply one command, save it back.
    #[instrument(skip(self))]
    pub fn apply(&self, path: &Path, command: FormCommand) -> ApplicationResult<CommandEffect> {
        let mut state = self.load(path)?;
        let effect = state.apply(command)?;
        self.save(path, &state)?;
        Ok(effect)
    }

    /// Load the form, apply the commands in order, save it back.
    ///
    /// Nothing is written if any command fails.
    #[instrument(skip(self))]
    pub fn apply_all(
        &self,
        path: &Path,
        commands: Vec<FormCommand>,
    ) -> ApplicationResult<Vec<CommandEffect>> {
        let mut state = self.load(path)?;
        let effects = commands
            .into_iter()
            .map(|command| state.apply(command))
            .collect::<Result<Vec<_>, _>>()?;
        self.save(path, &state)?;
        Ok(effects)
    }

    /// Remove the entry shown at a 1-based position.
    #[instrument(skip(self))]
    pub fn remove_at(
        &self,
        path: &Path,
        kind: EntryKind,
        position: usize,
    ) -> ApplicationResult<CommandEffect> {
        let mut state = self.load(path)?;
        let id = state.entry_id_at(kind, position)?;
        let effect = state.apply(FormCommand::RemoveEntry { kind, id })?;
        self.save(path, &state)?;
        Ok(effect)
    }
}

/// Parse a TOML form and check its star ratings.
pub fn parse_form(content: &str) -> Result<FormState, String> {
    let state: FormState = toml::from_str(content).map_err(|e| e.to_string())?;
    state.validate().map_err(|e| e.to_string())?;
    Ok(state)
}

pub fn render_form(state: &FormState) -> ApplicationResult<String> {
    toml::to_string_pretty(state).map_err(|e| ApplicationError::OperationFailed {
        context: "serialize form".to_string(),
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_rating_above_five_when_parsing_then_rejected() {
        let content = r#"
city = "Lyon"

[[past_courses]]
title = "Python"
number_of_stars = 7.0
"#;

        let err = parse_form(content).unwrap_err();

        assert!(err.contains("between 1 and 5"), "{err}");
    }

    #[test]
    fn given_partial_form_when_parsing_then_missing_fields_default() {
        let state = parse_form("city = \"Nantes\"\n").unwrap();

        assert_eq!(state.city, "Nantes");
        assert!(state.diplomas.is_empty());
        assert_eq!(state.course.title, "");
    }
}
