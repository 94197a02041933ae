//! Cross-checks of the moist-air correlations against published
//! psychrometric reference states.

use hg_air::{StatePoint, moist_air};
use hg_core::units::constants::STD_ATM_KPA;

#[test]
fn comfort_state_25c_50rh() {
    // Classic textbook state: 25 °C, 50 % RH at sea level.
    let state = StatePoint::from_t_rh(25.0, 50.0, STD_ATM_KPA).unwrap();
    assert!((state.w_kg_kg - 0.00985).abs() < 2e-4, "w = {}", state.w_kg_kg);
    assert!(
        (state.enthalpy_kj_kg - 50.3).abs() < 0.5,
        "h = {}",
        state.enthalpy_kj_kg
    );
    assert!(
        (state.wet_bulb_c - 17.9).abs() < 0.3,
        "t_wb = {}",
        state.wet_bulb_c
    );
    assert!(
        (state.specific_volume_m3_kg - 0.858).abs() < 0.005,
        "v = {}",
        state.specific_volume_m3_kg
    );
}

#[test]
fn cold_state_below_freezing() {
    let state = StatePoint::from_t_rh(-5.0, 80.0, STD_ATM_KPA).unwrap();
    assert!(state.w_kg_kg > 0.0 && state.w_kg_kg < 0.004);
    assert!(state.wet_bulb_c <= -5.0 + 1e-9);
    assert!(state.enthalpy_kj_kg < 5.0);
}

#[test]
fn altitude_shifts_humidity_ratio_up() {
    // Lower pressure means more water per kg of dry air at the same T/RH.
    let p_high = moist_air::pressure_by_altitude(2000.0);
    let w_sea = moist_air::humidity_ratio_from_rh(25.0, 60.0, STD_ATM_KPA).unwrap();
    let w_alt = moist_air::humidity_ratio_from_rh(25.0, 60.0, p_high).unwrap();
    assert!(w_alt > w_sea);
}

#[test]
fn dew_point_tracks_vapor_pressure() {
    let w = moist_air::humidity_ratio_from_rh(30.0, 50.0, STD_ATM_KPA).unwrap();
    let pv = moist_air::vapor_pressure_from_humidity_ratio(w, STD_ATM_KPA);
    let t_dp = moist_air::dew_point_temperature(pv).unwrap();
    // Published dew point for 30 °C / 50 % RH is ~18.4 °C.
    assert!((t_dp - 18.4).abs() < 0.5, "t_dp = {t_dp}");
    assert!(t_dp < 30.0);
}

#[test]
fn saturation_line_consistency() {
    // Along the saturation line, RH from w must read back 100 %.
    for t in [-10.0, 0.0, 15.0, 35.0, 50.0] {
        let w_sat = moist_air::saturation_humidity_ratio(t, STD_ATM_KPA).unwrap();
        let rh = moist_air::relative_humidity_from_w(t, w_sat, STD_ATM_KPA).unwrap();
        assert!((rh - 1.0).abs() < 1e-9, "rh at {t} °C = {rh}");
    }
}
