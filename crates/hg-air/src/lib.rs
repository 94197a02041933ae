//! hg-air: moist-air property calculations for hygrochart.
//!
//! Provides:
//! - Saturation pressure and humidity-ratio relations
//! - Enthalpy, specific volume and their closed-form inverses
//! - Wet-bulb and dew-point temperatures
//! - `StatePoint`: one (T, w) state with all derived properties
//!
//! All correlations are the 2009 ASHRAE Handbook—Fundamentals (SI) forms.
//! Quantities are `f64` in fixed SI units: °C, kPa, kg water per kg dry
//! air, kJ/kg dry air, m³/kg dry air. Functions are pure: pressure and
//! every state variable arrive as explicit arguments, never from ambient
//! mode state.
//!
//! # Example
//!
//! ```
//! use hg_air::moist_air;
//! use hg_core::units::constants::STD_ATM_KPA;
//!
//! let w = moist_air::saturation_humidity_ratio(25.0, STD_ATM_KPA).unwrap();
//! assert!((w - 0.0201).abs() < 5e-4);
//! ```

pub mod error;
pub mod moist_air;
pub mod state;

// Re-exports for ergonomics
pub use error::{AirError, AirResult};
pub use moist_air::{
    dew_point_temperature, dry_bulb_from_enthalpy, dry_bulb_from_specific_volume, enthalpy,
    humidity_ratio_from_enthalpy, humidity_ratio_from_rh, humidity_ratio_from_specific_volume,
    humidity_ratio_from_vapor_pressure, humidity_ratio_from_wet_bulb, pressure_by_altitude,
    relative_humidity_from_w, saturation_humidity_ratio, saturation_pressure, specific_volume,
    vapor_pressure_from_humidity_ratio, wet_bulb_temperature,
};
pub use state::StatePoint;
