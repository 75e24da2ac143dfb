//! 급수가열기 추기 분율의 질량·에너지 수지.
//!
//! 가열기가 단순 직렬 연쇄이므로 y′ → y″ → y‴ 순서의 전진 대입으로 푼다.
//! 되먹임이 있는 가열기 망으로 확장할 때는 연립 선형계로 바꿔야 한다.

use std::fmt;

use super::error::CycleError;
use super::state::StateChain;
use super::topology::{Heater, HeaterPorts};

/// 합이 1을 넘었다고 판정하는 허용오차.
pub const FRACTION_SUM_TOLERANCE: f64 = 1e-9;

/// 세 추기 분율(y′, y″, y‴).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExtractionFractions {
    pub y_prime: f64,
    pub y_double_prime: f64,
    pub y_triple_prime: f64,
}

impl ExtractionFractions {
    pub fn get(&self, heater: Heater) -> f64 {
        match heater {
            Heater::ClosedHigh => self.y_prime,
            Heater::Open => self.y_double_prime,
            Heater::ClosedLow => self.y_triple_prime,
        }
    }

    pub fn sum(&self) -> f64 {
        self.y_prime + self.y_double_prime + self.y_triple_prime
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.y_prime, self.y_double_prime, self.y_triple_prime]
    }

    fn magnitudes(&self) -> Self {
        Self {
            y_prime: self.y_prime.abs(),
            y_double_prime: self.y_double_prime.abs(),
            y_triple_prime: self.y_triple_prime.abs(),
        }
    }
}

/// 물리적으로 맞지 않는 운전점을 나타내는 수지 이상.
#[derive(Debug, Clone, PartialEq)]
pub enum MassBalanceAnomaly {
    /// 절댓값을 취하기 전 분율이 음수
    NegativeFraction { heater: Heater, raw: f64 },
    /// 분율 크기가 1 초과
    FractionAboveOne { heater: Heater, value: f64 },
    /// 분율 합이 1 초과
    SumExceedsUnity { sum: f64 },
}

impl fmt::Display for MassBalanceAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MassBalanceAnomaly::NegativeFraction { heater, raw } => {
                write!(f, "{heater} 원래 값이 음수({raw:.6})")
            }
            MassBalanceAnomaly::FractionAboveOne { heater, value } => {
                write!(f, "{heater} = {value:.6} > 1")
            }
            MassBalanceAnomaly::SumExceedsUnity { sum } => {
                write!(f, "분율 합 {sum:.6} > 1")
            }
        }
    }
}

/// 수지 계산 결과. `fractions`는 보고용 크기, `raw`는 부호를 보존한 값이다.
#[derive(Debug, Clone, PartialEq)]
pub struct FractionBalance {
    pub fractions: ExtractionFractions,
    pub raw: ExtractionFractions,
    pub anomalies: Vec<MassBalanceAnomaly>,
}

impl FractionBalance {
    pub fn is_physical(&self) -> bool {
        self.anomalies.is_empty()
    }
}

fn ratio(numerator: f64, denominator: f64, heater: Heater) -> Result<f64, CycleError> {
    let y = numerator / denominator;
    if y.is_finite() {
        Ok(y)
    } else {
        Err(CycleError::SingularBalance { heater })
    }
}

/// 세 가열기의 수지를 순서대로 푼다.
///
/// - 고압 폐쇄 가열기: y′(h_ext1 − h_drain) = h_fw,out − h_fw,in
/// - 개방 가열기: y″ = (h_out − h_in − y′(h_trap − h_in)) / (h_ext2 − h_in)
/// - 저압 폐쇄 가열기: y‴(h_ext3 − h_drain) = (1 − y′ − y″)(h_fw,out − h_fw,in)
pub fn solve(chain: &StateChain, ports: &HeaterPorts) -> Result<FractionBalance, CycleError> {
    let [ext_high, ext_open, ext_low] = ports.extractions;

    let y_prime = ratio(
        chain.h(ports.high_heater_outlet) - chain.h(ports.feed_pump),
        chain.h(ext_high) - chain.h(ports.high_heater_drain),
        Heater::ClosedHigh,
    )?;
    // 원래 부호는 검증용으로만 남기고 이후 대입에는 크기를 쓴다.
    let y1 = y_prime.abs();

    let y_double_prime = ratio(
        chain.h(ports.open_heater_outlet)
            - chain.h(ports.booster_pump)
            - y1 * (chain.h(ports.high_drain_trap) - chain.h(ports.booster_pump)),
        chain.h(ext_open) - chain.h(ports.booster_pump),
        Heater::Open,
    )?;
    let y2 = y_double_prime.abs();

    let y_triple_prime = ratio(
        (1.0 - y1 - y2) * (chain.h(ports.low_heater_outlet) - chain.h(ports.condensate_pump)),
        chain.h(ext_low) - chain.h(ports.low_heater_drain),
        Heater::ClosedLow,
    )?;

    let raw = ExtractionFractions {
        y_prime,
        y_double_prime,
        y_triple_prime,
    };
    let fractions = raw.magnitudes();
    let anomalies = inspect(&raw, &fractions);
    Ok(FractionBalance {
        fractions,
        raw,
        anomalies,
    })
}

fn inspect(raw: &ExtractionFractions, fractions: &ExtractionFractions) -> Vec<MassBalanceAnomaly> {
    let mut anomalies = Vec::new();
    for heater in [Heater::ClosedHigh, Heater::Open, Heater::ClosedLow] {
        let signed = raw.get(heater);
        if signed < 0.0 {
            anomalies.push(MassBalanceAnomaly::NegativeFraction {
                heater,
                raw: signed,
            });
        }
        let value = fractions.get(heater);
        if value > 1.0 {
            anomalies.push(MassBalanceAnomaly::FractionAboveOne { heater, value });
        }
    }
    let sum = fractions.sum();
    if sum > 1.0 + FRACTION_SUM_TOLERANCE {
        anomalies.push(MassBalanceAnomaly::SumExceedsUnity { sum });
    }
    anomalies
}
