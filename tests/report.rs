//! CSV 출력 테스트.
mod common;

use std::fs;

use common::ColdHighHeaterSteam;
use rankine_cycle_toolbox::config::CycleConfig;
use rankine_cycle_toolbox::cycle::{CycleSolver, ReheatCount};
use rankine_cycle_toolbox::report::write_report;
use rankine_cycle_toolbox::steam::If97Steam;
use rankine_cycle_toolbox::sweep::run_sweep;

fn lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn columns(line: &str) -> usize {
    line.split(',').count()
}

#[test]
fn writes_six_tables_named_after_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let solver = CycleSolver::new(CycleConfig::default(), If97Steam::new()).unwrap();
    let report = run_sweep(&solver, &[673.0, 500.0, 773.0], false);
    let files = write_report(dir.path(), solver.topology(), &report).unwrap();

    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "noreheat_pressures_90.csv",
            "noreheat_enthalpies_90.csv",
            "noreheat_mass_90.csv",
            "noreheat_data_90.csv",
            "noreheat_graph_90.csv",
            "noreheat_failures_90.csv",
        ]
    );

    let data = lines(&dir.path().join("noreheat_data_90.csv"));
    // 12개 지표 + h1..h16 + 냉각수 2점 + 분율 3개
    assert_eq!(columns(&data[0]), 33);
    assert!(data[0].starts_with("Th,P1,m.,m.cw,W_net"));
    assert_eq!(data.len(), 3);
    assert!(data[1..].iter().all(|row| columns(row) == 33));
    assert!(data[1].starts_with("673,90,"));

    let enthalpies = lines(&dir.path().join("noreheat_enthalpies_90.csv"));
    assert_eq!(columns(&enthalpies[0]), 17);
    assert!(enthalpies[0].ends_with(",h16"));

    let mass = lines(&dir.path().join("noreheat_mass_90.csv"));
    assert_eq!(mass[0], "Th,y',y'',y''',anomalies");
    assert_eq!(mass.len(), 3);
    // 정상 운전점은 이상 열이 비어 있다.
    assert!(mass[1..].iter().all(|row| row.ends_with(',')));

    let graph = lines(&dir.path().join("noreheat_graph_90.csv"));
    assert_eq!(graph[0], "Th,p1,m_dot,W_net,Q_out_unitmass,thermal_eff");

    let pressures = lines(&dir.path().join("noreheat_pressures_90.csv"));
    assert_eq!(columns(&pressures[1]), 6);

    let failures = lines(&dir.path().join("noreheat_failures_90.csv"));
    assert_eq!(failures.len(), 2);
    assert!(failures[1].starts_with("500,not_superheated,\""));
}

#[test]
fn triple_reheat_tables_have_nineteen_states() {
    let dir = tempfile::tempdir().unwrap();
    let config = CycleConfig {
        reheat_count: ReheatCount::Triple,
        boiler_pressure_bar: 100.0,
        ..CycleConfig::default()
    };
    let solver = CycleSolver::new(config, If97Steam::new()).unwrap();
    let report = run_sweep(&solver, &[823.0], false);
    write_report(dir.path(), solver.topology(), &report).unwrap();

    let enthalpies = lines(&dir.path().join("threereheat_enthalpies_100.csv"));
    assert_eq!(columns(&enthalpies[0]), 20);
    let data = lines(&dir.path().join("threereheat_data_100.csv"));
    assert_eq!(columns(&data[0]), 12 + 21 + 3);
}

#[test]
fn anomalous_point_is_marked_in_mass_table() {
    let dir = tempfile::tempdir().unwrap();
    let solver =
        CycleSolver::new(CycleConfig::default(), ColdHighHeaterSteam::new(90.0)).unwrap();
    let report = run_sweep(&solver, &[673.0], false);
    assert_eq!(report.anomalous_points(), 1);
    write_report(dir.path(), solver.topology(), &report).unwrap();

    let mass = lines(&dir.path().join("noreheat_mass_90.csv"));
    assert_eq!(mass.len(), 2);
    let row = &mass[1];
    assert!(row.starts_with("673,"));
    assert!(row.ends_with('"'), "{row}");
    assert!(row.contains("y' "), "{row}");
    // 이상이 있어도 성공한 점이므로 실패 표에는 없다.
    assert_eq!(lines(&dir.path().join("noreheat_failures_90.csv")).len(), 1);
}

#[test]
fn infeasible_point_goes_to_failures_table() {
    let dir = tempfile::tempdir().unwrap();
    let config = CycleConfig {
        turbine_efficiency: 0.001,
        ..CycleConfig::default()
    };
    let solver = CycleSolver::new(config, If97Steam::new()).unwrap();
    let report = run_sweep(&solver, &[673.0], false);
    write_report(dir.path(), solver.topology(), &report).unwrap();

    let failures = lines(&dir.path().join("noreheat_failures_90.csv"));
    assert_eq!(failures.len(), 2);
    assert!(failures[1].starts_with("673,infeasible,\""), "{}", failures[1]);
    assert_eq!(lines(&dir.path().join("noreheat_data_90.csv")).len(), 1);
}
