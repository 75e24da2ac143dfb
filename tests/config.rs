//! 설정 파일 로드/저장과 값 검증 테스트.
use rankine_cycle_toolbox::config::{
    load_or_default, Config, ConfigError, CycleConfig, InvalidConfiguration, SweepConfig,
};
use rankine_cycle_toolbox::cycle::ReheatCount;

#[test]
fn default_config_is_valid() {
    let cfg = Config::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.cycle.boiler_pressure_bar, 90.0);
    assert_eq!(cfg.cycle.reheat_count, ReheatCount::None);
}

#[test]
fn sweep_temperatures_include_both_ends() {
    let sweep = SweepConfig {
        start_k: 673.0,
        end_k: 873.0,
        step_k: 10.0,
        parallel: false,
    };
    let t = sweep.temperatures();
    assert_eq!(t.len(), 21);
    assert_eq!(t[0], 673.0);
    assert_eq!(t[20], 873.0);

    let uneven = SweepConfig {
        step_k: 30.0,
        ..sweep
    };
    assert_eq!(uneven.temperatures().last(), Some(&853.0));
}

#[test]
fn partial_toml_falls_back_to_defaults() {
    let cfg: Config = toml::from_str(
        r#"
        [cycle]
        reheat_count = 3
        turbine_efficiency = 0.9
        "#,
    )
    .unwrap();
    assert_eq!(cfg.cycle.reheat_count, ReheatCount::Triple);
    assert_eq!(cfg.cycle.turbine_efficiency, 0.9);
    assert_eq!(cfg.cycle.pump_efficiency, 0.8);
    assert_eq!(cfg.sweep, SweepConfig::default());
}

#[test]
fn unsupported_reheat_count_fails_to_parse() {
    let parsed: Result<Config, _> = toml::from_str("[cycle]\nreheat_count = 2\n");
    assert!(parsed.is_err());
}

#[test]
fn invalid_values_are_rejected() {
    let cycle = CycleConfig {
        pump_efficiency: 0.0,
        ..CycleConfig::default()
    };
    assert!(matches!(
        cycle.validate(),
        Err(InvalidConfiguration::Efficiency { value, .. }) if value == 0.0
    ));

    let cycle = CycleConfig {
        net_power_kw: -1.0,
        ..CycleConfig::default()
    };
    assert!(matches!(
        cycle.validate(),
        Err(InvalidConfiguration::NonPositive { .. })
    ));

    let sweep = SweepConfig {
        start_k: 900.0,
        end_k: 800.0,
        ..SweepConfig::default()
    };
    assert!(matches!(
        sweep.validate(),
        Err(InvalidConfiguration::SweepRange { .. })
    ));
}

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = load_or_default(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let reloaded = load_or_default(&path).unwrap();
    assert_eq!(reloaded, cfg);
}

#[test]
fn saved_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    let mut cfg = Config::default();
    cfg.cycle.reheat_count = ReheatCount::Single;
    cfg.cycle.boiler_pressure_bar = 120.0;
    cfg.sweep.parallel = true;
    cfg.save(&path).unwrap();
    assert_eq!(load_or_default(&path).unwrap(), cfg);
}

#[test]
fn malformed_file_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[cycle\nboiler_pressure_bar = ").unwrap();
    assert!(matches!(load_or_default(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn loaded_file_with_invalid_values_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invalid.toml");
    std::fs::write(&path, "[cycle]\nturbine_efficiency = 1.5\n").unwrap();
    assert!(matches!(
        load_or_default(&path),
        Err(ConfigError::Invalid(InvalidConfiguration::Efficiency { .. }))
    ));

    std::fs::write(&path, "[sweep]\nstart_k = 900.0\nend_k = 800.0\n").unwrap();
    assert!(matches!(
        load_or_default(&path),
        Err(ConfigError::Invalid(InvalidConfiguration::SweepRange { .. }))
    ));
}
