use hg_config::{ChartConfig, ZoneSpec, ZoneSpecKind, fingerprint, validate_config};
use hg_core::units::UnitSystem;

fn comfort_config() -> ChartConfig {
    let mut config = ChartConfig::default();
    config.limits.range_temp_c = (5.0, 40.0);
    config.limits.altitude_m = 650.0;
    config.families.constant_rh.values = vec![20.0, 40.0, 60.0, 80.0];
    config.zones.push(ZoneSpec {
        name: "Summer comfort".to_string(),
        kind: ZoneSpecKind::DbtRh {
            t_min: 23.0,
            t_max: 28.0,
            rh_min: 40.0,
            rh_max: 60.0,
        },
    });
    config.zones.push(ZoneSpec {
        name: "Winter comfort".to_string(),
        kind: ZoneSpecKind::DbtRh {
            t_min: 19.0,
            t_max: 23.5,
            rh_min: 35.0,
            rh_max: 55.0,
        },
    });
    config
}

#[test]
fn roundtrip_json_default_config() {
    let config = ChartConfig::default();
    validate_config(&config).unwrap();

    let json = serde_json::to_string_pretty(&config).unwrap();
    let loaded: ChartConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(config, loaded);
    assert_eq!(fingerprint(&config), fingerprint(&loaded));
}

#[test]
fn roundtrip_json_comfort_config() {
    let config = comfort_config();
    validate_config(&config).unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let loaded: ChartConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(config, loaded);
    assert_eq!(fingerprint(&config), fingerprint(&loaded));
}

#[test]
fn ip_units_selector_roundtrips() {
    let mut config = ChartConfig::default();
    config.units = UnitSystem::Ip;

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""units":"ip""#));
    let loaded: ChartConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded.units, UnitSystem::Ip);
    // unit system is a geometry field: it changes the emitted coordinates
    assert_ne!(fingerprint(&config), fingerprint(&ChartConfig::default()));
}

#[test]
fn empty_json_object_is_the_default_chart() {
    let loaded: ChartConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(loaded, ChartConfig::default());
}
