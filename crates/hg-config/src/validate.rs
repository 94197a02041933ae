//! Chart configuration validation logic.
//!
//! Validation fails the whole generation pass before any curve work
//! begins; nothing is silently clamped.

use crate::schema::{ChartConfig, ZoneSpec, ZoneSpecKind};
use thiserror::Error;

/// Pressure bounds considered physically sane for a chart [kPa].
///
/// Covers roughly -1500 m to 9000 m of standard atmosphere.
pub const PRESSURE_MIN_KPA: f64 = 30.0;
pub const PRESSURE_MAX_KPA: f64 = 150.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Non-finite value: {what}")]
    NonFinite { what: &'static str },

    #[error("Invalid range for {what}: [{min}, {max}]")]
    InvalidRange { what: &'static str, min: f64, max: f64 },

    #[error("Non-positive step for {what}: {value}")]
    NonPositiveStep { what: &'static str, value: f64 },

    #[error("Pressure out of sane bounds: {value_kpa} kPa")]
    PressureOutOfBounds { value_kpa: f64 },

    #[error("Trigger value out of range for {what}: {value}")]
    TriggerOutOfRange { what: &'static str, value: f64 },

    #[error("Invalid zone '{name}': {reason}")]
    InvalidZone { name: String, reason: &'static str },
}

pub fn validate_config(config: &ChartConfig) -> Result<(), ConfigError> {
    validate_limits(config)?;
    validate_families(config)?;
    for zone in &config.zones {
        validate_zone(zone)?;
    }
    Ok(())
}

fn ordered_range(
    what: &'static str,
    (min, max): (f64, f64),
    strict: bool,
) -> Result<(), ConfigError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ConfigError::NonFinite { what });
    }
    if (strict && min >= max) || (!strict && min > max) {
        return Err(ConfigError::InvalidRange { what, min, max });
    }
    Ok(())
}

fn positive_step(what: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::NonPositiveStep { what, value });
    }
    Ok(())
}

fn validate_limits(config: &ChartConfig) -> Result<(), ConfigError> {
    let limits = &config.limits;
    ordered_range("temperature range", limits.range_temp_c, true)?;
    ordered_range("humidity ratio range", limits.range_humidity_g_kg, true)?;
    if limits.range_humidity_g_kg.0 < 0.0 {
        return Err(ConfigError::InvalidRange {
            what: "humidity ratio range",
            min: limits.range_humidity_g_kg.0,
            max: limits.range_humidity_g_kg.1,
        });
    }
    positive_step("temperature step", limits.step_temp)?;

    if !limits.altitude_m.is_finite() {
        return Err(ConfigError::NonFinite { what: "altitude" });
    }
    if let Some(p) = limits.pressure_kpa {
        if !p.is_finite() {
            return Err(ConfigError::NonFinite { what: "pressure" });
        }
        if !(PRESSURE_MIN_KPA..=PRESSURE_MAX_KPA).contains(&p) {
            return Err(ConfigError::PressureOutOfBounds { value_kpa: p });
        }
    }
    Ok(())
}

fn validate_families(config: &ChartConfig) -> Result<(), ConfigError> {
    let families = &config.families;

    for &rh in &families.constant_rh.values {
        if !(0.0..=100.0).contains(&rh) {
            return Err(ConfigError::TriggerOutOfRange {
                what: "relative humidity",
                value: rh,
            });
        }
    }

    ordered_range("specific volume range", families.constant_volume.range, true)?;
    positive_step("specific volume step", families.constant_volume.step)?;

    ordered_range("enthalpy range", families.constant_enthalpy.range, true)?;
    positive_step("enthalpy step", families.constant_enthalpy.step)?;

    ordered_range("wet-bulb range", families.constant_wet_bulb.range, true)?;
    positive_step("wet-bulb step", families.constant_wet_bulb.step)?;

    positive_step("dry-bulb grid step", families.dry_bulb_grid.step)?;
    positive_step("humidity grid step", families.humidity_grid.step)?;
    Ok(())
}

fn validate_zone(zone: &ZoneSpec) -> Result<(), ConfigError> {
    let bad = |reason| {
        Err(ConfigError::InvalidZone {
            name: zone.name.clone(),
            reason,
        })
    };
    // equal bounds are allowed: degenerate zones collapse to a rectangle
    // or line downstream instead of failing validation
    match &zone.kind {
        ZoneSpecKind::DbtRh {
            t_min,
            t_max,
            rh_min,
            rh_max,
        } => {
            if t_min > t_max {
                return bad("inverted temperature bounds");
            }
            if rh_min > rh_max {
                return bad("inverted relative humidity bounds");
            }
            if *rh_min < 0.0 || *rh_max > 100.0 {
                return bad("relative humidity bounds outside [0, 100]");
            }
        }
        ZoneSpecKind::EnthalpyRh {
            h_min,
            h_max,
            rh_min,
            rh_max,
        } => {
            if h_min > h_max {
                return bad("inverted enthalpy bounds");
            }
            if rh_min > rh_max || *rh_min < 0.0 || *rh_max > 100.0 {
                return bad("invalid relative humidity bounds");
            }
        }
        ZoneSpecKind::VolumeRh {
            v_min,
            v_max,
            rh_min,
            rh_max,
        } => {
            if v_min > v_max || *v_min <= 0.0 {
                return bad("invalid specific volume bounds");
            }
            if rh_min > rh_max || *rh_min < 0.0 || *rh_max > 100.0 {
                return bad("invalid relative humidity bounds");
            }
        }
        ZoneSpecKind::DbtWmax {
            t_min,
            t_max,
            w_min,
            w_max,
        } => {
            if t_min > t_max {
                return bad("inverted temperature bounds");
            }
            if w_min > w_max || *w_min < 0.0 {
                return bad("invalid humidity ratio bounds");
            }
        }
        ZoneSpecKind::XyPoints { points } => {
            if points.len() < 3 {
                return bad("explicit zone needs at least three vertices");
            }
            if points.iter().any(|(t, w)| !t.is_finite() || !w.is_finite()) {
                return bad("explicit zone has non-finite vertices");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ChartConfig;

    #[test]
    fn default_config_is_valid() {
        validate_config(&ChartConfig::default()).unwrap();
    }

    #[test]
    fn inverted_temperature_range_rejected() {
        let mut config = ChartConfig::default();
        config.limits.range_temp_c = (50.0, 0.0);
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange { .. }));
    }

    #[test]
    fn zero_step_rejected() {
        let mut config = ChartConfig::default();
        config.limits.step_temp = 0.0;
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveStep { .. }));
    }

    #[test]
    fn insane_pressure_rejected() {
        let mut config = ChartConfig::default();
        config.limits.pressure_kpa = Some(500.0);
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::PressureOutOfBounds { .. }));
    }

    #[test]
    fn rh_trigger_above_100_rejected() {
        let mut config = ChartConfig::default();
        config.families.constant_rh.values.push(110.0);
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::TriggerOutOfRange { .. }));
    }

    #[test]
    fn degenerate_zone_bounds_allowed() {
        let mut config = ChartConfig::default();
        config.zones.push(ZoneSpec {
            name: "line".to_string(),
            kind: ZoneSpecKind::DbtRh {
                t_min: 20.0,
                t_max: 20.0,
                rh_min: 40.0,
                rh_max: 40.0,
            },
        });
        validate_config(&config).unwrap();
    }

    #[test]
    fn inverted_zone_bounds_rejected() {
        let mut config = ChartConfig::default();
        config.zones.push(ZoneSpec {
            name: "bad".to_string(),
            kind: ZoneSpecKind::DbtRh {
                t_min: 28.0,
                t_max: 23.0,
                rh_min: 40.0,
                rh_max: 60.0,
            },
        });
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidZone { .. }));
    }

    #[test]
    fn tiny_explicit_zone_rejected() {
        let mut config = ChartConfig::default();
        config.zones.push(ZoneSpec {
            name: "two points".to_string(),
            kind: ZoneSpecKind::XyPoints {
                points: vec![(20.0, 10.0), (25.0, 10.0)],
            },
        });
        assert!(validate_config(&config).is_err());
    }
}
