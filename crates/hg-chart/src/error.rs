//! Error types and per-pass diagnostics for chart generation.

use crate::curve::CurveKind;
use hg_air::AirError;
use hg_config::ConfigError;
use thiserror::Error;

/// Result type for chart generation.
pub type ChartResult<T> = Result<T, ChartError>;

/// Hard failures: the whole generation pass is abandoned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Invalid configuration, reported before any curve work begins.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Property evaluation failed while building the chart baseline.
    #[error("Property evaluation failed: {0}")]
    Air(#[from] AirError),

    /// The configured limits leave no valid chart area.
    #[error("Invalid chart limits: {what}")]
    InvalidLimits { what: &'static str },
}

/// Recoverable per-curve / per-zone failures collected during a pass.
///
/// Diagnostics never abort the pass: the affected curve or zone is simply
/// absent from the generated collections.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A numeric solve for one family member did not converge.
    CurveSolveFailed {
        kind: CurveKind,
        trigger: f64,
        detail: String,
    },
    /// A zone could not be composed from its bounding curves.
    ZoneSkipped { name: String, detail: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CurveSolveFailed {
                kind,
                trigger,
                detail,
            } => {
                write!(f, "curve {kind:?} at {trigger} skipped: {detail}")
            }
            Self::ZoneSkipped { name, detail } => {
                write!(f, "zone '{name}' skipped: {detail}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_display_names_the_subject() {
        let diag = Diagnostic::ZoneSkipped {
            name: "Summer comfort".to_string(),
            detail: "outside chart limits".to_string(),
        };
        let msg = diag.to_string();
        assert!(msg.contains("Summer comfort"));
        assert!(msg.contains("outside chart limits"));
    }

    #[test]
    fn config_error_converts() {
        let err: ChartError = ConfigError::NonFinite { what: "altitude" }.into();
        assert!(matches!(err, ChartError::Config(_)));
    }
}
