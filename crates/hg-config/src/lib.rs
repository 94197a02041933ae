//! hg-config: chart configuration model for hygrochart.
//!
//! Provides:
//! - The serde configuration schema with chart defaults
//! - Validation (fail-fast configuration errors)
//! - The geometry fingerprint used for mutation-aware regeneration
//!
//! A `ChartConfig` is an immutable value from the engine's point of view:
//! callers build a new value for every change, and the engine compares
//! values structurally through [`fingerprint::fingerprint`] instead of
//! tracking in-place mutation. Style fields never enter the fingerprint,
//! so restyling a chart cannot invalidate its generated geometry.

pub mod fingerprint;
pub mod schema;
pub mod styles;
pub mod validate;

// Re-exports for ergonomics
pub use fingerprint::{Fingerprint, fingerprint};
pub use schema::{
    ChartConfig, ChartLimits, ConstantEnthalpyParams, ConstantRhParams, ConstantVolumeParams,
    ConstantWetBulbParams, CurveFamilies, DryBulbGridParams, HumidityGridParams, ZoneSpec,
    ZoneSpecKind,
};
pub use styles::{ChartStyles, CurveStyle, LineStyle, ZoneStyle};
pub use validate::{ConfigError, validate_config};
