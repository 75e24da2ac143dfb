//! 재열 횟수별 상태 배치 테스트.
use rankine_cycle_toolbox::cycle::{
    Heater, PressureLevel, ReheatCount, SaturationFix, Stage, Topology,
};

#[test]
fn state_counts_per_reheat_configuration() {
    assert_eq!(Topology::new(ReheatCount::None).state_count(), 16);
    assert_eq!(Topology::new(ReheatCount::Single).state_count(), 17);
    assert_eq!(Topology::new(ReheatCount::Triple).state_count(), 19);
}

#[test]
fn no_reheat_ports() {
    let topology = Topology::new(ReheatCount::None);
    let ports = topology.ports();
    assert_eq!(ports.extractions, [2, 3, 4]);
    assert_eq!(ports.exhaust, 5);
    assert_eq!(ports.condensate, 6);
    assert_eq!(ports.condensate_pump, 7);
    assert_eq!(ports.low_heater_outlet, 8);
    assert_eq!(ports.booster_pump, 9);
    assert_eq!(ports.open_heater_outlet, 10);
    assert_eq!(ports.feed_pump, 11);
    assert_eq!(ports.high_heater_outlet, 12);
    assert_eq!(ports.high_heater_drain, 13);
    assert_eq!(ports.high_drain_trap, 14);
    assert_eq!(ports.low_heater_drain, 15);
    assert_eq!(ports.low_drain_trap, 16);
}

#[test]
fn single_reheat_follows_high_pressure_extraction() {
    let topology = Topology::new(ReheatCount::Single);
    let stages = topology.stages();
    assert_eq!(
        stages[2],
        Stage::Reheat {
            from: 2,
            at: PressureLevel::High
        }
    );
    // 재열 후 팽창은 재열기 출구에서 시작한다.
    assert_eq!(
        stages[3],
        Stage::Expand {
            from: 3,
            to: PressureLevel::Intermediate,
            extraction: Some(Heater::Open)
        }
    );
    assert_eq!(topology.ports().extractions, [2, 4, 5]);
    assert_eq!(topology.ports().exhaust, 6);
}

#[test]
fn triple_reheat_reheats_at_every_extraction_level() {
    let topology = Topology::new(ReheatCount::Triple);
    let reheats: Vec<_> = topology
        .stages()
        .iter()
        .filter_map(|s| match s {
            Stage::Reheat { from, at } => Some((*from, *at)),
            _ => None,
        })
        .collect();
    assert_eq!(
        reheats,
        vec![
            (2, PressureLevel::High),
            (4, PressureLevel::Intermediate),
            (6, PressureLevel::Low)
        ]
    );
    assert_eq!(topology.ports().extractions, [2, 4, 6]);
    assert_eq!(topology.ports().exhaust, 8);
    assert_eq!(topology.ports().low_drain_trap, 19);
}

#[test]
fn feedwater_side_is_shared_by_all_configurations() {
    for reheats in ReheatCount::ALL {
        let topology = Topology::new(reheats);
        let stages = topology.stages();
        let ports = topology.ports();
        assert_eq!(stages[0], Stage::Boiler);
        assert_eq!(
            stages[ports.condensate - 1],
            Stage::SaturatedLiquid(SaturationFix::CondenserTemperature)
        );
        assert_eq!(
            stages[ports.high_heater_outlet - 1],
            Stage::SaturatedLiquid(SaturationFix::Pressure(PressureLevel::Boiler))
        );
        assert_eq!(
            stages[ports.low_drain_trap - 1],
            Stage::Trap {
                from: ports.low_heater_drain,
                to: PressureLevel::Condenser
            }
        );
        assert_eq!(ports.low_drain_trap, topology.state_count());
    }
}

#[test]
fn reheat_count_parsing() {
    assert_eq!(ReheatCount::try_from(0u8), Ok(ReheatCount::None));
    assert_eq!(ReheatCount::try_from(1u8), Ok(ReheatCount::Single));
    assert_eq!(ReheatCount::try_from(3u8), Ok(ReheatCount::Triple));
    assert!(ReheatCount::try_from(2u8).is_err());
    assert_eq!(ReheatCount::Triple.file_prefix(), "threereheat");
}
