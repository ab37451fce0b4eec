//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        ApplicationError::Domain(e).into()
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Http { .. } => crate::exitcode::SOFTWARE,
                InfraError::Application(e) => match e {
                    ApplicationError::Domain(DomainError::EntryNotFound { .. })
                    | ApplicationError::Domain(DomainError::UnknownDomain(_))
                    | ApplicationError::Domain(DomainError::UnknownSchema(_)) => {
                        crate::exitcode::USAGE
                    }
                    ApplicationError::Domain(DomainError::InvalidStarRating(_))
                    | ApplicationError::InvalidForm { .. } => crate::exitcode::DATAERR,
                    ApplicationError::FormNotFound(_) => crate::exitcode::NOINPUT,
                    ApplicationError::FormExists(_) => crate::exitcode::CANTCREAT,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_form_maps_to_noinput() {
        let err: CliError = ApplicationError::FormNotFound(PathBuf::from("x.toml")).into();

        assert_eq!(err.exit_code(), crate::exitcode::NOINPUT);
    }

    #[test]
    fn bad_rating_maps_to_dataerr() {
        let err: CliError = DomainError::InvalidStarRating(9.0).into();

        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }
}
