//! Render styling for curves and zones.
//!
//! Styles are carried by the configuration and resolved by renderers per
//! curve kind; they never participate in the geometry fingerprint.

use serde::{Deserialize, Serialize};

/// Line pattern for curve rendering.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    DashDot,
    Dotted,
    None,
}

/// Stroke styling for one curve family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurveStyle {
    /// RGBA, components in [0, 1].
    #[serde(default = "default_color")]
    pub color: [f64; 4],
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default)]
    pub line_style: LineStyle,
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self {
            color: default_color(),
            line_width: default_line_width(),
            line_style: LineStyle::Solid,
        }
    }
}

fn default_color() -> [f64; 4] {
    [0.2, 0.2, 0.2, 1.0]
}

fn default_line_width() -> f64 {
    2.0
}

impl CurveStyle {
    fn new(color: [f64; 4], line_width: f64, line_style: LineStyle) -> Self {
        Self {
            color,
            line_width,
            line_style,
        }
    }
}

/// Fill + edge styling for zones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneStyle {
    #[serde(default = "default_zone_edge")]
    pub edge_color: [f64; 4],
    #[serde(default = "default_zone_fill")]
    pub fill_color: [f64; 4],
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_zone_line_style")]
    pub line_style: LineStyle,
}

impl Default for ZoneStyle {
    fn default() -> Self {
        Self {
            edge_color: default_zone_edge(),
            fill_color: default_zone_fill(),
            line_width: default_line_width(),
            line_style: default_zone_line_style(),
        }
    }
}

fn default_zone_edge() -> [f64; 4] {
    [0.498, 0.624, 0.8, 0.9]
}

fn default_zone_fill() -> [f64; 4] {
    [0.498, 0.624, 1.0, 0.2]
}

fn default_zone_line_style() -> LineStyle {
    LineStyle::Dashed
}

/// Style set for every curve family plus the zone default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartStyles {
    #[serde(default = "default_saturation_style")]
    pub saturation: CurveStyle,
    #[serde(default = "default_rh_style")]
    pub constant_rh: CurveStyle,
    #[serde(default = "default_volume_style")]
    pub constant_volume: CurveStyle,
    #[serde(default = "default_enthalpy_style")]
    pub constant_enthalpy: CurveStyle,
    #[serde(default = "default_wet_bulb_style")]
    pub constant_wet_bulb: CurveStyle,
    #[serde(default = "default_dry_bulb_grid_style")]
    pub dry_bulb_grid: CurveStyle,
    #[serde(default = "default_humidity_grid_style")]
    pub humidity_grid: CurveStyle,
    #[serde(default)]
    pub zones: ZoneStyle,
}

impl Default for ChartStyles {
    fn default() -> Self {
        Self {
            saturation: default_saturation_style(),
            constant_rh: default_rh_style(),
            constant_volume: default_volume_style(),
            constant_enthalpy: default_enthalpy_style(),
            constant_wet_bulb: default_wet_bulb_style(),
            dry_bulb_grid: default_dry_bulb_grid_style(),
            humidity_grid: default_humidity_grid_style(),
            zones: ZoneStyle::default(),
        }
    }
}

fn default_saturation_style() -> CurveStyle {
    CurveStyle::new([0.855, 0.004, 0.278, 1.0], 3.0, LineStyle::Solid)
}

fn default_rh_style() -> CurveStyle {
    CurveStyle::new([0.0, 0.498, 1.0, 1.0], 2.0, LineStyle::DashDot)
}

fn default_volume_style() -> CurveStyle {
    CurveStyle::new([0.0, 0.502, 0.337, 1.0], 2.0, LineStyle::Dashed)
}

fn default_enthalpy_style() -> CurveStyle {
    CurveStyle::new([0.251, 0.0, 0.502, 1.0], 2.0, LineStyle::Dashed)
}

fn default_wet_bulb_style() -> CurveStyle {
    CurveStyle::new([0.498, 0.875, 1.0, 1.0], 2.0, LineStyle::DashDot)
}

fn default_dry_bulb_grid_style() -> CurveStyle {
    CurveStyle::new([0.855, 0.145, 0.114, 1.0], 0.75, LineStyle::Dotted)
}

fn default_humidity_grid_style() -> CurveStyle {
    CurveStyle::new([0.0, 0.125, 0.376, 1.0], 0.75, LineStyle::Dotted)
}
