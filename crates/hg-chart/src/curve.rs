//! Plain curve data records.
//!
//! A curve is geometry only: kind, trigger value, ordered plot points.
//! Rendering styles live in the configuration, keyed by [`CurveKind`], so
//! restyling never touches generated data.

/// One plot coordinate: dry-bulb temperature on x, humidity ratio on y.
///
/// Units follow the chart's unit system: °C and g/kg for SI, °F and gr/lb
/// for IP.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub t: f64,
    pub w: f64,
}

impl PlotPoint {
    pub fn new(t: f64, w: f64) -> Self {
        Self { t, w }
    }
}

/// Curve family tag, doubling as the style key for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Saturation,
    ConstantRh,
    ConstantVolume,
    ConstantEnthalpy,
    ConstantWetBulb,
    DryBulbGrid,
    HumidityGrid,
}

/// One generated curve of a family.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub kind: CurveKind,
    /// Which member of the family this is (RH %, kJ/kg, m³/kg, °C, g/kg).
    /// Always expressed in SI units; it identifies the curve, it is not a
    /// plot coordinate.
    pub value: f64,
    pub points: Vec<PlotPoint>,
}

impl Curve {
    pub fn new(kind: CurveKind, value: f64, points: Vec<PlotPoint>) -> Self {
        Self { kind, value, points }
    }

    /// An empty curve: the trigger value lies wholly outside the valid
    /// region. Kept in the output so callers can tell "requested but
    /// empty" apart from "not requested".
    pub fn empty(kind: CurveKind, value: f64) -> Self {
        Self {
            kind,
            value,
            points: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when no point of the curve lies inside the given box.
    pub fn outside_limits(&self, t_min: f64, t_max: f64, w_min: f64, w_max: f64) -> bool {
        !self.points.iter().any(|p| {
            p.t >= t_min && p.t <= t_max && p.w >= w_min && p.w <= w_max
        })
    }
}
