//! Moist-air property errors.

use hg_core::HgError;
use hg_core::solve::SolveError;
use thiserror::Error;

/// Result type for moist-air property calculations.
pub type AirResult<T> = Result<T, AirError>;

/// Errors that can occur during moist-air property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AirError {
    /// Non-physical values (vapor pressure above total pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Iterative property solve did not converge.
    #[error("Convergence failed for {what}: {source}")]
    Convergence {
        what: &'static str,
        source: SolveError,
    },
}

impl From<AirError> for HgError {
    fn from(err: AirError) -> Self {
        match err {
            AirError::NonPhysical { what } => HgError::Invariant { what },
            AirError::InvalidArg { what } => HgError::InvalidArg { what },
            AirError::Convergence { what, .. } => HgError::Invariant { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AirError::NonPhysical {
            what: "vapor pressure",
        };
        assert!(err.to_string().contains("vapor pressure"));
    }

    #[test]
    fn error_to_hg_error() {
        let air_err = AirError::InvalidArg { what: "pressure" };
        let hg_err: HgError = air_err.into();
        assert!(matches!(hg_err, HgError::InvalidArg { .. }));
    }
}
