//! 재생 랭킨 사이클 상태 해석기.
//!
//! 계산 순서: 압력 구간 → 상태 전파(과열 → 터빈 → 포화수 → 펌프, 재열 단마다 반복)
//! → 추기 분율 수지 → 성능 지표.

pub mod error;
pub mod fractions;
pub mod metrics;
pub mod pressure;
pub mod process;
pub mod solver;
pub mod state;
pub mod topology;

pub use error::CycleError;
pub use fractions::{ExtractionFractions, FractionBalance, MassBalanceAnomaly};
pub use metrics::{CoolingWater, PerformanceMetrics};
pub use pressure::{PressureLevel, PressureLevels};
pub use solver::{CyclePoint, CycleSolver};
pub use state::{State, StateChain, StateKind};
pub use topology::{Heater, HeaterPorts, PumpFlow, ReheatCount, SaturationFix, Stage, Topology};
