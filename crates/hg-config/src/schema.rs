//! Chart configuration schema definitions.
//!
//! Configuration values are always expressed in SI units (°C, kPa, g/kg)
//! regardless of the selected display unit system. Defaults reproduce the
//! standard 0–50 °C sea-level chart.

use hg_core::units::UnitSystem;
use serde::{Deserialize, Serialize};

use crate::styles::ChartStyles;

/// Temperature, humidity and pressure limits of the chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartLimits {
    /// Dry-bulb temperature range [°C].
    #[serde(default = "default_range_temp")]
    pub range_temp_c: (f64, f64),
    /// Humidity ratio range in plot units [g water / kg dry air].
    #[serde(default = "default_range_humidity")]
    pub range_humidity_g_kg: (f64, f64),
    /// Altitude used to derive the chart pressure when no explicit
    /// pressure is given [m].
    #[serde(default)]
    pub altitude_m: f64,
    /// Explicit chart pressure [kPa]; overrides `altitude_m` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_kpa: Option<f64>,
    /// Base dry-bulb sampling step [°C].
    #[serde(default = "default_step_temp")]
    pub step_temp: f64,
}

impl Default for ChartLimits {
    fn default() -> Self {
        Self {
            range_temp_c: default_range_temp(),
            range_humidity_g_kg: default_range_humidity(),
            altitude_m: 0.0,
            pressure_kpa: None,
            step_temp: default_step_temp(),
        }
    }
}

fn default_range_temp() -> (f64, f64) {
    (0.0, 50.0)
}

fn default_range_humidity() -> (f64, f64) {
    (0.0, 40.0)
}

fn default_step_temp() -> f64 {
    1.0
}

/// Constant relative humidity curve family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstantRhParams {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// RH percentages to draw, one curve each.
    #[serde(default = "default_rh_values")]
    pub values: Vec<f64>,
    /// Subset of `values` that gets an annotation label.
    #[serde(default = "default_rh_labels")]
    pub label_values: Vec<f64>,
    /// Label position along the curve, fraction of the temperature span.
    #[serde(default = "default_rh_label_loc")]
    pub label_loc: f64,
}

impl Default for ConstantRhParams {
    fn default() -> Self {
        Self {
            enabled: true,
            values: default_rh_values(),
            label_values: default_rh_labels(),
            label_loc: default_rh_label_loc(),
        }
    }
}

fn default_rh_values() -> Vec<f64> {
    vec![
        10.0, 20.0, 30.0, 40.0, 45.0, 50.0, 55.0, 60.0, 70.0, 80.0, 90.0,
    ]
}

fn default_rh_labels() -> Vec<f64> {
    vec![20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]
}

fn default_rh_label_loc() -> f64 {
    0.85
}

/// Constant specific volume curve family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstantVolumeParams {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Specific volume range to cover [m³/kg dry air].
    #[serde(default = "default_volume_range")]
    pub range: (f64, f64),
    /// Step between curves [m³/kg dry air].
    #[serde(default = "default_volume_step")]
    pub step: f64,
    #[serde(default = "default_volume_labels")]
    pub label_values: Vec<f64>,
    #[serde(default = "default_one")]
    pub label_loc: f64,
}

impl Default for ConstantVolumeParams {
    fn default() -> Self {
        Self {
            enabled: true,
            range: default_volume_range(),
            step: default_volume_step(),
            label_values: default_volume_labels(),
            label_loc: default_one(),
        }
    }
}

fn default_volume_range() -> (f64, f64) {
    (0.78, 0.98)
}

fn default_volume_step() -> f64 {
    0.02
}

fn default_volume_labels() -> Vec<f64> {
    vec![0.8, 0.9, 0.96]
}

/// Constant enthalpy curve family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstantEnthalpyParams {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Enthalpy range to cover [kJ/kg dry air].
    #[serde(default = "default_enthalpy_range")]
    pub range: (f64, f64),
    /// Step between curves [kJ/kg dry air].
    #[serde(default = "default_enthalpy_step")]
    pub step: f64,
    #[serde(default = "default_enthalpy_labels")]
    pub label_values: Vec<f64>,
    #[serde(default = "default_one")]
    pub label_loc: f64,
}

impl Default for ConstantEnthalpyParams {
    fn default() -> Self {
        Self {
            enabled: true,
            range: default_enthalpy_range(),
            step: default_enthalpy_step(),
            label_values: default_enthalpy_labels(),
            label_loc: default_one(),
        }
    }
}

fn default_enthalpy_range() -> (f64, f64) {
    (5.0, 155.0)
}

fn default_enthalpy_step() -> f64 {
    5.0
}

fn default_enthalpy_labels() -> Vec<f64> {
    vec![5.0, 25.0, 50.0, 75.0, 100.0, 125.0]
}

/// Constant wet-bulb temperature curve family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstantWetBulbParams {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Wet-bulb temperature range to cover [°C].
    #[serde(default = "default_wet_bulb_range")]
    pub range: (f64, f64),
    /// Step between curves [°C].
    #[serde(default = "default_wet_bulb_step")]
    pub step: f64,
    #[serde(default = "default_wet_bulb_labels")]
    pub label_values: Vec<f64>,
    #[serde(default = "default_wet_bulb_label_loc")]
    pub label_loc: f64,
}

impl Default for ConstantWetBulbParams {
    fn default() -> Self {
        Self {
            enabled: true,
            range: default_wet_bulb_range(),
            step: default_wet_bulb_step(),
            label_values: default_wet_bulb_labels(),
            label_loc: default_wet_bulb_label_loc(),
        }
    }
}

fn default_wet_bulb_range() -> (f64, f64) {
    (-10.0, 40.0)
}

fn default_wet_bulb_step() -> f64 {
    5.0
}

fn default_wet_bulb_labels() -> Vec<f64> {
    vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0]
}

fn default_wet_bulb_label_loc() -> f64 {
    0.05
}

/// Vertical dry-bulb grid lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DryBulbGridParams {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Step between lines [°C].
    #[serde(default = "default_one")]
    pub step: f64,
    /// Stop grid lines at the saturation curve instead of the humidity
    /// plot limit.
    #[serde(default = "default_true")]
    pub hide_above_saturation: bool,
}

impl Default for DryBulbGridParams {
    fn default() -> Self {
        Self {
            enabled: true,
            step: default_one(),
            hide_above_saturation: true,
        }
    }
}

/// Horizontal humidity-ratio grid lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HumidityGridParams {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Step between lines [g/kg].
    #[serde(default = "default_one")]
    pub step: f64,
}

impl Default for HumidityGridParams {
    fn default() -> Self {
        Self {
            enabled: true,
            step: default_one(),
        }
    }
}

/// Enable flags and discretization for every curve family.
///
/// The saturation curve is not listed: it defines the validity boundary
/// every family is clipped against and is always generated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CurveFamilies {
    #[serde(default)]
    pub constant_rh: ConstantRhParams,
    #[serde(default)]
    pub constant_volume: ConstantVolumeParams,
    #[serde(default)]
    pub constant_enthalpy: ConstantEnthalpyParams,
    #[serde(default)]
    pub constant_wet_bulb: ConstantWetBulbParams,
    #[serde(default)]
    pub dry_bulb_grid: DryBulbGridParams,
    #[serde(default)]
    pub humidity_grid: HumidityGridParams,
}

/// Geometry of one chart zone.
///
/// Bounds are in SI config units: °C, % RH, kJ/kg, m³/kg, g/kg.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ZoneSpecKind {
    /// Region between two dry-bulb temperatures and two RH curves.
    DbtRh {
        t_min: f64,
        t_max: f64,
        rh_min: f64,
        rh_max: f64,
    },
    /// Region between two constant-enthalpy lines and two RH curves.
    EnthalpyRh {
        h_min: f64,
        h_max: f64,
        rh_min: f64,
        rh_max: f64,
    },
    /// Region between two constant-volume lines and two RH curves.
    VolumeRh {
        v_min: f64,
        v_max: f64,
        rh_min: f64,
        rh_max: f64,
    },
    /// Rectangle in (T, w), clipped by the saturation curve.
    DbtWmax {
        t_min: f64,
        t_max: f64,
        w_min: f64,
        w_max: f64,
    },
    /// Explicit polygon in plot coordinates.
    XyPoints { points: Vec<(f64, f64)> },
}

/// One named zone of the chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneSpec {
    pub name: String,
    #[serde(flatten)]
    pub kind: ZoneSpecKind,
}

/// Complete chart configuration.
///
/// An immutable value during one generation pass; the engine never mutates
/// it and detects change by structural fingerprint, not identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(default)]
    pub limits: ChartLimits,
    #[serde(default)]
    pub families: CurveFamilies,
    #[serde(default)]
    pub zones: Vec<ZoneSpec>,
    #[serde(default)]
    pub styles: ChartStyles,
    #[serde(default)]
    pub units: UnitSystem,
}

fn default_true() -> bool {
    true
}

fn default_one() -> f64 {
    1.0
}
