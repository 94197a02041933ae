//! Moist-air state points.

use crate::error::{AirError, AirResult};
use crate::moist_air;

/// One moist-air state at a fixed total pressure, with all derived
/// properties computed once.
///
/// The independent pair is (dry-bulb temperature, humidity ratio); relative
/// humidity, enthalpy, specific volume and wet-bulb temperature are derived
/// through the property correlations at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct StatePoint {
    /// Dry-bulb temperature [°C].
    pub t_c: f64,
    /// Humidity ratio [kg water / kg dry air].
    pub w_kg_kg: f64,
    /// Total pressure [kPa].
    pub pressure_kpa: f64,
    /// Relative humidity [%].
    pub rh_percent: f64,
    /// Specific enthalpy [kJ/kg dry air].
    pub enthalpy_kj_kg: f64,
    /// Specific volume [m³/kg dry air].
    pub specific_volume_m3_kg: f64,
    /// Wet-bulb temperature [°C].
    pub wet_bulb_c: f64,
}

impl StatePoint {
    /// Resolve a state from dry-bulb temperature and humidity ratio.
    ///
    /// Validates that inputs are finite and physical; the pressure must be
    /// positive.
    pub fn resolve(t_c: f64, w_kg_kg: f64, pressure_kpa: f64) -> AirResult<Self> {
        if !t_c.is_finite() {
            return Err(AirError::InvalidArg {
                what: "dry-bulb temperature must be finite",
            });
        }
        if !w_kg_kg.is_finite() || w_kg_kg < 0.0 {
            return Err(AirError::InvalidArg {
                what: "humidity ratio must be finite and non-negative",
            });
        }
        if !pressure_kpa.is_finite() || pressure_kpa <= 0.0 {
            return Err(AirError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }

        let rh = moist_air::relative_humidity_from_w(t_c, w_kg_kg, pressure_kpa)?;
        Ok(Self {
            t_c,
            w_kg_kg,
            pressure_kpa,
            rh_percent: rh * 100.0,
            enthalpy_kj_kg: moist_air::enthalpy(t_c, w_kg_kg),
            specific_volume_m3_kg: moist_air::specific_volume(t_c, w_kg_kg, pressure_kpa),
            wet_bulb_c: moist_air::wet_bulb_temperature(t_c, w_kg_kg, pressure_kpa)?,
        })
    }

    /// Resolve a state from dry-bulb temperature and relative humidity in
    /// percent.
    pub fn from_t_rh(t_c: f64, rh_percent: f64, pressure_kpa: f64) -> AirResult<Self> {
        let w = moist_air::humidity_ratio_from_rh(t_c, rh_percent, pressure_kpa)?;
        Self::resolve(t_c, w, pressure_kpa)
    }
}
