//! 보일러 출구 온도 스윕 구동기.
//!
//! 스윕 점끼리는 상태를 공유하지 않으므로 순서와 무관하게 병렬로 계산할 수 있다.
//! 실패한 점은 온도와 함께 결과에 남기고 나머지 점은 계속 계산한다.

use rayon::prelude::*;
use tracing::{info, warn};

use crate::cycle::{CycleError, CyclePoint, CycleSolver, ReheatCount};
use crate::steam::SteamProperties;

/// 한 스윕 점의 실패. 어떤 온도에서 실패했는지 함께 기록한다.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Th={boiler_temperature_k} K: {error}")]
pub struct PointFailure {
    pub boiler_temperature_k: f64,
    pub error: CycleError,
}

pub type SweepOutcome = Result<CyclePoint, PointFailure>;

/// 스윕 전체 결과. `outcomes`는 입력 온도 순서를 유지한다.
#[derive(Debug, Clone)]
pub struct SweepReport {
    pub reheats: ReheatCount,
    pub boiler_pressure_bar: f64,
    pub outcomes: Vec<SweepOutcome>,
}

impl SweepReport {
    pub fn points(&self) -> impl Iterator<Item = &CyclePoint> {
        self.outcomes.iter().filter_map(|o| o.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &PointFailure> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err())
    }

    /// 질량 수지 이상이 보고된 성공 점 개수.
    pub fn anomalous_points(&self) -> usize {
        self.points().filter(|p| !p.balance.is_physical()).count()
    }
}

fn solve_point<P: SteamProperties>(solver: &CycleSolver<P>, th: f64) -> SweepOutcome {
    solver.solve(th).map_err(|error| {
        warn!(th, reheats = %solver.topology().reheats(), "스윕 점 실패: {error}");
        PointFailure {
            boiler_temperature_k: th,
            error,
        }
    })
}

/// 주어진 온도 목록을 차례로(또는 병렬로) 해석한다.
pub fn run_sweep<P: SteamProperties>(
    solver: &CycleSolver<P>,
    temperatures: &[f64],
    parallel: bool,
) -> SweepReport {
    let outcomes: Vec<SweepOutcome> = if parallel {
        temperatures
            .par_iter()
            .map(|&th| solve_point(solver, th))
            .collect()
    } else {
        temperatures
            .iter()
            .map(|&th| solve_point(solver, th))
            .collect()
    };

    let report = SweepReport {
        reheats: solver.topology().reheats(),
        boiler_pressure_bar: solver.config().boiler_pressure_bar,
        outcomes,
    };
    info!(
        reheats = %report.reheats,
        points = report.points().count(),
        failures = report.failures().count(),
        anomalies = report.anomalous_points(),
        "스윕 완료"
    );
    report
}
