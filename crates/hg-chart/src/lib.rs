//! hg-chart: psychrometric chart data generation for hygrochart.
//!
//! Provides:
//! - Curve generation for every chart family (saturation, constant RH,
//!   enthalpy, specific volume, wet-bulb, grid lines), clipped to the
//!   valid sub-saturation region
//! - Zone composition from bounding curves or explicit vertices
//! - A fingerprint-keyed cache so regeneration happens at most once per
//!   effective configuration state
//!
//! # Architecture
//!
//! Curves and zones are plain data records (kind + trigger value +
//! points); rendering styles stay in the configuration, keyed by curve
//! kind. Generation is a single synchronous CPU-bound pass; the cache
//! wraps it behind one mutex-guarded critical section.
//!
//! # Example
//!
//! ```
//! use hg_chart::{ChartDataCache, CurveKind};
//! use hg_config::ChartConfig;
//!
//! let cache = ChartDataCache::new();
//! let config = ChartConfig::default();
//!
//! let data = cache.ensure_fresh(&config).unwrap();
//! assert_eq!(data.saturation.points.len(), 51);
//! assert!(data.curves_of(CurveKind::ConstantRh).count() > 0);
//!
//! // same configuration: served from cache, no recomputation
//! let again = cache.ensure_fresh(&config).unwrap();
//! assert_eq!(cache.recompute_count(), 1);
//! assert!(std::sync::Arc::ptr_eq(&data, &again));
//! ```

pub mod cache;
pub mod curve;
pub mod curves;
pub mod error;
pub mod generate;
pub mod zones;

// Re-exports for ergonomics
pub use cache::ChartDataCache;
pub use curve::{Curve, CurveKind, PlotPoint};
pub use error::{ChartError, ChartResult, Diagnostic};
pub use generate::{ChartData, chart_pressure_kpa, generate_chart_data};
pub use zones::{Zone, ZoneKind, over_saturated_zone};
