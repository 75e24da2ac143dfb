use thiserror::Error;

use super::fractions::MassBalanceAnomaly;
use crate::config::InvalidConfiguration;
use crate::steam::PropertyError;

/// 한 스윕 점을 계산하는 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CycleError {
    /// 물성 공급자 오류(유효 범위 밖)
    #[error(transparent)]
    Property(#[from] PropertyError),
    /// 설정값이 물리적으로 맞지 않음
    #[error(transparent)]
    InvalidConfiguration(#[from] InvalidConfiguration),
    /// 보일러 출구 온도가 포화온도 이하
    #[error("보일러 출구가 과열 상태가 아닙니다: Th={temperature_k} K ≤ Tsat={saturation_k} K")]
    NotSuperheated {
        temperature_k: f64,
        saturation_k: f64,
    },
    /// 과정 계산에 필요한 입구 성질이 없음
    #[error("상태 {index}에 {what} 값이 없습니다")]
    MissingProperty { index: usize, what: &'static str },
    /// 추기 분율 분모가 0이어서 수지를 풀 수 없음
    #[error("추기 분율 {heater}을(를) 계산할 수 없습니다(분모 0)")]
    SingularBalance { heater: super::Heater },
    /// 엄격 모드에서 질량 수지 이상
    #[error("질량 수지 이상: {}", describe(.0))]
    MassBalance(Vec<MassBalanceAnomaly>),
    /// 순일이 0 이하
    #[error("실현 불가능한 사이클: 순일 {net_work} kJ/kg ≤ 0")]
    NonPositiveNetWork { net_work: f64 },
    /// 열효율이 (0, 1) 밖
    #[error("열효율 {efficiency}이(가) (0, 1) 범위를 벗어났습니다")]
    EfficiencyOutOfRange { efficiency: f64 },
}

impl CycleError {
    /// 실패 표에 기록하는 짧은 분류명.
    pub fn kind(&self) -> &'static str {
        match self {
            CycleError::Property(_) => "property",
            CycleError::InvalidConfiguration(_) => "configuration",
            CycleError::NotSuperheated { .. } => "not_superheated",
            CycleError::MissingProperty { .. } => "missing_property",
            CycleError::SingularBalance { .. } => "singular_balance",
            CycleError::MassBalance(_) => "mass_balance",
            CycleError::NonPositiveNetWork { .. } => "infeasible",
            CycleError::EfficiencyOutOfRange { .. } => "infeasible",
        }
    }
}

fn describe(anomalies: &[MassBalanceAnomaly]) -> String {
    anomalies
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
