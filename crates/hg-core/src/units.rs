// hg-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Unit system for the plot coordinates handed to renderers.
///
/// Generation always runs internally in SI (°C, kPa, kg/kg); the selector
/// only controls how plot coordinates are expressed at the pass boundary.
/// An explicit value threaded through the configuration — there is no
/// process-wide unit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnitSystem {
    /// °C on the temperature axis, g water / kg dry air on the humidity axis.
    #[default]
    Si,
    /// °F on the temperature axis, grains of water / lb dry air on the
    /// humidity axis.
    Ip,
}

impl UnitSystem {
    /// Factor from internal humidity ratio [kg/kg] to plot units.
    ///
    /// SI plots in g/kg, IP in gr/lb (7000 grains per pound).
    #[inline]
    pub fn humidity_plot_factor(self) -> f64 {
        match self {
            Self::Si => 1000.0,
            Self::Ip => 7000.0,
        }
    }

    /// Convert a dry-bulb temperature in °C to the plot temperature axis.
    #[inline]
    pub fn temperature_plot(self, t_c: f64) -> f64 {
        use uom::si::thermodynamic_temperature::degree_fahrenheit;
        match self {
            Self::Si => t_c,
            Self::Ip => celsius(t_c).get::<degree_fahrenheit>(),
        }
    }

    /// Convert a specific enthalpy in kJ/kg(da) to display units.
    ///
    /// IP displays Btu/lb(da).
    #[inline]
    pub fn enthalpy_display(self, h_kj_kg: f64) -> f64 {
        const BTU_LB_PER_KJ_KG: f64 = 1.0 / 2.326;
        match self {
            Self::Si => h_kj_kg,
            Self::Ip => h_kj_kg * BTU_LB_PER_KJ_KG,
        }
    }
}

pub mod constants {
    /// Standard sea-level atmospheric pressure [kPa].
    pub const STD_ATM_KPA: f64 = 101.325;

    /// Offset between °C and K.
    pub const CELSIUS_TO_KELVIN: f64 = 273.15;

    /// Gas constant for dry air [kJ/(kg·K)], 2009 ASHRAE Handbook eq. (1).
    pub const R_DA_KJ_KG_K: f64 = 0.287042;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::pressure::kilopascal;
    use uom::si::thermodynamic_temperature::kelvin;

    #[test]
    fn constructors_smoke() {
        let p = kpa(constants::STD_ATM_KPA);
        assert!((p.get::<kilopascal>() - 101.325).abs() < 1e-12);
        let t = celsius(25.0);
        assert!((t.get::<kelvin>() - 298.15).abs() < 1e-9);
        let _r = unitless(0.5);
        let _p2 = pa(101_325.0);
        let _t2 = k(300.0);
    }

    #[test]
    fn ip_temperature_axis() {
        assert!((UnitSystem::Ip.temperature_plot(0.0) - 32.0).abs() < 1e-9);
        assert!((UnitSystem::Ip.temperature_plot(100.0) - 212.0).abs() < 1e-9);
        assert_eq!(UnitSystem::Si.temperature_plot(21.5), 21.5);
    }

    #[test]
    fn humidity_factors() {
        assert_eq!(UnitSystem::Si.humidity_plot_factor(), 1000.0);
        assert_eq!(UnitSystem::Ip.humidity_plot_factor(), 7000.0);
    }

    #[test]
    fn enthalpy_display_ip() {
        // 2.326 kJ/kg per Btu/lb
        assert!((UnitSystem::Ip.enthalpy_display(2.326) - 1.0).abs() < 1e-12);
    }
}
