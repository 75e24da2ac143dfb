use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError, InvalidConfiguration};
use crate::cycle::{CycleError, CycleSolver, ReheatCount};
use crate::report::{self, ReportError};
use crate::steam::If97Steam;
use crate::sweep::{self, SweepReport};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 잘못된 설정값
    #[error("설정 오류: {0}")]
    Invalid(#[from] InvalidConfiguration),
    /// 해석기 생성 오류
    #[error("사이클 오류: {0}")]
    Cycle(#[from] CycleError),
    /// CSV 기록 오류
    #[error("출력 오류: {0}")]
    Report(#[from] ReportError),
}

/// 재열 구성 하나의 실행 결과.
#[derive(Debug)]
pub struct RunSummary {
    pub report: SweepReport,
    pub files: Vec<PathBuf>,
}

/// 재열 구성마다 스윕을 실행하고 CSV를 기록한다.
pub fn run(config: &Config, reheats: &[ReheatCount]) -> Result<Vec<RunSummary>, AppError> {
    config.validate()?;
    let temperatures = config.sweep.temperatures();
    let mut summaries = Vec::with_capacity(reheats.len());

    for &reheat_count in reheats {
        let mut cycle = config.cycle.clone();
        cycle.reheat_count = reheat_count;
        let solver = CycleSolver::new(cycle, If97Steam::new())?;
        let outcome = sweep::run_sweep(&solver, &temperatures, config.sweep.parallel);
        let files = report::write_report(&config.output.directory, solver.topology(), &outcome)?;
        print_report(&outcome);
        info!(reheats = %reheat_count, files = files.len(), "CSV 기록 완료");
        summaries.push(RunSummary {
            report: outcome,
            files,
        });
    }
    Ok(summaries)
}

fn print_report(report: &SweepReport) {
    println!(
        "\n=== {} (보일러 압력 {} bar) ===",
        report.reheats, report.boiler_pressure_bar
    );
    println!("Th [K]   효율     CO2 [kg/h]     CO2 [kg/day]");
    for outcome in &report.outcomes {
        match outcome {
            Ok(point) => println!(
                "{:<8.2} {:<8.4} {:<14.2} {:<14.2}",
                point.boiler_temperature_k,
                point.metrics.thermal_efficiency,
                point.metrics.co2_kg_per_hour,
                point.metrics.co2_kg_per_day,
            ),
            Err(failure) => println!("{:<8.2} 실패: {}", failure.boiler_temperature_k, failure.error),
        }
    }
    println!(
        "성공 {}점, 실패 {}점, 질량 수지 이상 {}점",
        report.points().count(),
        report.failures().count(),
        report.anomalous_points()
    );
}
