//! ASHRAE moist-air property correlations (SI).
//!
//! Units throughout: temperature °C, pressure kPa, humidity ratio
//! kg water / kg dry air, enthalpy kJ/kg dry air, specific volume
//! m³/kg dry air.

use crate::error::{AirError, AirResult};
use hg_core::solve::{SolveConfig, bisect};
use hg_core::units::constants::{CELSIUS_TO_KELVIN, R_DA_KJ_KG_K, STD_ATM_KPA};

/// Ratio of molecular masses of water vapor and dry air, eq. (22)/(38).
const HUMIDITY_RATIO_VAP_PRES: f64 = 0.621945;

/// Latent heat of evaporation of water at 0 °C [kJ/kg], eq. (32).
const WATER_EVAPORATION_HEAT: f64 = 2501.0;

/// Specific heat of dry air [kJ/(kg·°C)].
const CP_DRY_AIR: f64 = 1.006;

/// Specific heat of water vapor [kJ/(kg·°C)].
const CP_WATER_VAPOR: f64 = 1.86;

/// Standard atmospheric pressure at a given altitude [kPa].
///
/// Eq. (3) 2009 ASHRAE Handbook—Fundamentals (SI).
pub fn pressure_by_altitude(altitude_m: f64) -> f64 {
    STD_ATM_KPA * (1.0 - 2.25577e-5 * altitude_m).powf(5.2559)
}

/// Saturation pressure of water vapor over liquid water or ice [kPa].
///
/// Eqs. (5) and (6) 2009 ASHRAE Handbook—Fundamentals (SI), branch at 0 °C.
pub fn saturation_pressure(t_c: f64) -> f64 {
    let abs_temp = t_c + CELSIUS_TO_KELVIN;
    let ln_p_ws_pa = if t_c > 0.0 {
        // Eq. (6), over liquid water
        let c1 = -5.800_220_6e3;
        let c2 = 1.391_499_3;
        let c3 = -4.864_023_9e-2;
        let c4 = 4.176_476_8e-5;
        let c5 = -1.445_209_3e-8;
        let c6 = 6.545_967_3;
        c1 / abs_temp
            + c2
            + c3 * abs_temp
            + c4 * abs_temp.powi(2)
            + c5 * abs_temp.powi(3)
            + c6 * abs_temp.ln()
    } else {
        // Eq. (5), over ice
        let c7 = -5.674_535_9e3;
        let c8 = 6.392_524_7;
        let c9 = -9.677_843_0e-3;
        let c10 = 6.221_570_1e-7;
        let c11 = 2.074_782_5e-9;
        let c12 = -9.484_024_0e-13;
        let c13 = 4.163_501_9;
        c7 / abs_temp
            + c8
            + c9 * abs_temp
            + c10 * abs_temp.powi(2)
            + c11 * abs_temp.powi(3)
            + c12 * abs_temp.powi(4)
            + c13 * abs_temp.ln()
    };
    ln_p_ws_pa.exp() / 1000.0
}

/// Partial pressure of water vapor from the humidity ratio [kPa].
///
/// Eq. (38) 2009 ASHRAE Handbook—Fundamentals (SI).
pub fn vapor_pressure_from_humidity_ratio(w_kg_kg: f64, p_kpa: f64) -> f64 {
    p_kpa * w_kg_kg / (HUMIDITY_RATIO_VAP_PRES + w_kg_kg)
}

/// Humidity ratio from the partial pressure of water vapor [kg/kg].
///
/// Eq. (22) 2009 ASHRAE Handbook—Fundamentals (SI).
pub fn humidity_ratio_from_vapor_pressure(pv_kpa: f64, p_kpa: f64) -> AirResult<f64> {
    if !pv_kpa.is_finite() || pv_kpa < 0.0 {
        return Err(AirError::InvalidArg {
            what: "vapor pressure must be finite and non-negative",
        });
    }
    if pv_kpa >= p_kpa {
        return Err(AirError::NonPhysical {
            what: "vapor pressure at or above total pressure",
        });
    }
    Ok(HUMIDITY_RATIO_VAP_PRES * pv_kpa / (p_kpa - pv_kpa))
}

/// Humidity ratio of saturated air [kg/kg].
pub fn saturation_humidity_ratio(t_c: f64, p_kpa: f64) -> AirResult<f64> {
    humidity_ratio_from_vapor_pressure(saturation_pressure(t_c), p_kpa)
}

/// Humidity ratio at a relative humidity given in percent [kg/kg].
///
/// The RH percentage is clamped to [0, 100].
pub fn humidity_ratio_from_rh(t_c: f64, rh_percent: f64, p_kpa: f64) -> AirResult<f64> {
    let rh = rh_percent.clamp(0.0, 100.0) / 100.0;
    humidity_ratio_from_vapor_pressure(saturation_pressure(t_c) * rh, p_kpa)
}

/// Relative humidity (fraction, capped at 1) from the humidity ratio.
///
/// Eq. (24) 2009 ASHRAE Handbook—Fundamentals (SI).
pub fn relative_humidity_from_w(t_c: f64, w_kg_kg: f64, p_kpa: f64) -> AirResult<f64> {
    if !w_kg_kg.is_finite() || w_kg_kg < 0.0 {
        return Err(AirError::InvalidArg {
            what: "humidity ratio must be finite and non-negative",
        });
    }
    let pv = vapor_pressure_from_humidity_ratio(w_kg_kg, p_kpa);
    let p_sat = saturation_pressure(t_c);
    Ok((pv / p_sat).min(1.0))
}

/// Specific enthalpy of moist air [kJ/kg dry air].
///
/// Eqs. (30)–(32) 2009 ASHRAE Handbook—Fundamentals (SI).
pub fn enthalpy(t_c: f64, w_kg_kg: f64) -> f64 {
    CP_DRY_AIR * t_c + w_kg_kg * (WATER_EVAPORATION_HEAT + CP_WATER_VAPOR * t_c)
}

/// Dry-bulb temperature at a given humidity ratio and enthalpy [°C].
///
/// Closed-form inverse of eq. (32).
pub fn dry_bulb_from_enthalpy(w_kg_kg: f64, h_kj_kg: f64) -> f64 {
    (h_kj_kg - WATER_EVAPORATION_HEAT * w_kg_kg) / (CP_DRY_AIR + CP_WATER_VAPOR * w_kg_kg)
}

/// Humidity ratio on a constant-enthalpy line at a given dry-bulb
/// temperature [kg/kg].
///
/// Closed-form inverse of eq. (32) in `w`.
pub fn humidity_ratio_from_enthalpy(t_c: f64, h_kj_kg: f64) -> f64 {
    (h_kj_kg - CP_DRY_AIR * t_c) / (WATER_EVAPORATION_HEAT + CP_WATER_VAPOR * t_c)
}

/// Specific volume of moist air [m³/kg dry air].
///
/// Eq. (28) 2009 ASHRAE Handbook—Fundamentals (SI).
pub fn specific_volume(t_c: f64, w_kg_kg: f64, p_kpa: f64) -> f64 {
    R_DA_KJ_KG_K * (t_c + CELSIUS_TO_KELVIN) * (1.0 + 1.607858 * w_kg_kg) / p_kpa
}

/// Dry-bulb temperature at a given humidity ratio and specific volume [°C].
///
/// Closed-form inverse of eq. (28).
pub fn dry_bulb_from_specific_volume(w_kg_kg: f64, v_m3_kg: f64, p_kpa: f64) -> f64 {
    v_m3_kg * p_kpa / (R_DA_KJ_KG_K * (1.0 + 1.607858 * w_kg_kg)) - CELSIUS_TO_KELVIN
}

/// Humidity ratio on a constant-specific-volume line at a given dry-bulb
/// temperature [kg/kg].
///
/// Closed-form inverse of eq. (28) in `w`.
pub fn humidity_ratio_from_specific_volume(t_c: f64, v_m3_kg: f64, p_kpa: f64) -> f64 {
    (v_m3_kg * p_kpa / (R_DA_KJ_KG_K * (t_c + CELSIUS_TO_KELVIN)) - 1.0) / 1.607858
}

/// Humidity ratio from dry-bulb and wet-bulb temperatures [kg/kg].
///
/// Eqs. (35) and (37) 2009 ASHRAE Handbook—Fundamentals (SI), branch at
/// 0 °C dry-bulb.
pub fn humidity_ratio_from_wet_bulb(t_c: f64, t_wb_c: f64, p_kpa: f64) -> AirResult<f64> {
    let w_sat_wb = saturation_humidity_ratio(t_wb_c, p_kpa)?;
    let factor_delta = CP_DRY_AIR * (t_c - t_wb_c);
    let w = if t_c > 0.0 {
        let num = (2501.0 - 2.326 * t_wb_c) * w_sat_wb - factor_delta;
        let denom = 2501.0 + 1.86 * t_c - 4.186 * t_wb_c;
        num / denom
    } else {
        let num = (2830.0 - 0.24 * t_wb_c) * w_sat_wb - factor_delta;
        let denom = 2830.0 + 1.86 * t_c - 2.1 * t_wb_c;
        num / denom
    };
    Ok(w)
}

/// Wet-bulb temperature from dry-bulb and humidity ratio [°C].
///
/// Solved by bounded bisection of eqs. (35)/(37) for the wet-bulb value
/// whose implied humidity ratio matches `w_kg_kg`. Saturated (or
/// supersaturated) input collapses to the dry-bulb temperature.
pub fn wet_bulb_temperature(t_c: f64, w_kg_kg: f64, p_kpa: f64) -> AirResult<f64> {
    if !w_kg_kg.is_finite() || w_kg_kg < 0.0 {
        return Err(AirError::InvalidArg {
            what: "humidity ratio must be finite and non-negative",
        });
    }
    let w_sat = saturation_humidity_ratio(t_c, p_kpa)?;
    if w_kg_kg >= w_sat {
        // wet bulb equals dry bulb at saturation
        return Ok(t_c);
    }

    let config = SolveConfig {
        max_iterations: 64,
        abs_tol: 1e-5,
    };
    let lo = t_c - 80.0;
    let objective = |t_wb: f64| match humidity_ratio_from_wet_bulb(t_c, t_wb, p_kpa) {
        Ok(w) => w - w_kg_kg,
        Err(_) => f64::NAN,
    };
    let outcome = bisect(objective, lo, t_c, &config).map_err(|source| AirError::Convergence {
        what: "wet-bulb temperature",
        source,
    })?;
    Ok(outcome.root.min(t_c))
}

/// Dew-point temperature from the partial pressure of water vapor [°C].
///
/// Eqs. (39) and (40) (Peppers 1988), 2009 ASHRAE Handbook—Fundamentals
/// (SI), with the below-zero fallback polynomial.
pub fn dew_point_temperature(pv_kpa: f64) -> AirResult<f64> {
    if !pv_kpa.is_finite() || pv_kpa <= 0.0 {
        return Err(AirError::NonPhysical {
            what: "vapor pressure for dew point must be positive",
        });
    }
    let alpha = pv_kpa.ln();
    let c14 = 6.54;
    let c15 = 14.526;
    let c16 = 0.7389;
    let c17 = 0.009486;
    let c18 = 0.4569;
    let dew_point = c14
        + c15 * alpha
        + c16 * alpha.powi(2)
        + c17 * alpha.powi(3)
        + c18 * pv_kpa.powf(0.1984);
    if dew_point < 0.0 {
        Ok(6.09 + 12.608 * alpha + 0.4959 * alpha.powi(2))
    } else {
        Ok(dew_point)
    }
}
