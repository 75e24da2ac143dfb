//! 재열 횟수별 사이클 배치를 상태 단계 목록으로 선언한다.
//!
//! 터빈 측: 보일러 출구 → p2 팽창(고압 폐쇄 급수가열기 추기 y′) → [p2 재열] →
//! p3 팽창(개방 급수가열기 추기 y″) → [p3 재열] → p4 팽창(저압 폐쇄 급수가열기
//! 추기 y‴) → [p4 재열] → p5 팽창(복수기 입구).
//! 급수 측: 복수 → 복수펌프 → 저압 가열기 출구 → 중간펌프 → 개방 가열기 출구 →
//! 급수펌프 → 고압 가열기 출구, 그리고 두 폐쇄 가열기의 드레인과 트랩.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pressure::PressureLevel;

/// 지원하는 재열 횟수(0, 1, 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ReheatCount {
    None,
    Single,
    Triple,
}

impl ReheatCount {
    pub const ALL: [ReheatCount; 3] = [ReheatCount::None, ReheatCount::Single, ReheatCount::Triple];

    pub fn count(self) -> u8 {
        match self {
            ReheatCount::None => 0,
            ReheatCount::Single => 1,
            ReheatCount::Triple => 3,
        }
    }

    /// 출력 파일 이름 접두어.
    pub fn file_prefix(self) -> &'static str {
        match self {
            ReheatCount::None => "noreheat",
            ReheatCount::Single => "onereheat",
            ReheatCount::Triple => "threereheat",
        }
    }
}

/// 지원하지 않는 재열 횟수.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("재열 횟수는 0, 1, 3 중 하나여야 합니다: {0}")]
pub struct UnsupportedReheatCount(pub u8);

impl TryFrom<u8> for ReheatCount {
    type Error = UnsupportedReheatCount;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ReheatCount::None),
            1 => Ok(ReheatCount::Single),
            3 => Ok(ReheatCount::Triple),
            other => Err(UnsupportedReheatCount(other)),
        }
    }
}

impl From<ReheatCount> for u8 {
    fn from(value: ReheatCount) -> Self {
        value.count()
    }
}

impl fmt::Display for ReheatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}회 재열", self.count())
    }
}

/// 추기를 받는 급수가열기.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heater {
    /// 고압 폐쇄 급수가열기(p2, y′)
    ClosedHigh,
    /// 개방 급수가열기(p3, y″)
    Open,
    /// 저압 폐쇄 급수가열기(p4, y‴)
    ClosedLow,
}

impl fmt::Display for Heater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heater::ClosedHigh => "y'",
            Heater::Open => "y''",
            Heater::ClosedLow => "y'''",
        };
        f.write_str(name)
    }
}

/// 펌프를 지나는 유량 비율.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpFlow {
    /// 전체 유량(1)
    Full,
    /// 개방 가열기 이전 복수 유량(1 − y′ − y″)
    Condensate,
}

/// 포화수 상태를 고정하는 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaturationFix {
    /// 복수기 온도(T_cond) 기준, 압력은 p5
    CondenserTemperature,
    /// 해당 압력 단계의 포화수
    Pressure(PressureLevel),
}

/// 상태 하나를 만드는 단계. `from`은 입구 상태 번호(1부터)다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// 보일러 출구: (p1, Th) 과열 증기
    Boiler,
    /// 터빈 팽창. `extraction`이 있으면 출구에서 해당 가열기로 추기한다.
    Expand {
        from: usize,
        to: PressureLevel,
        extraction: Option<Heater>,
    },
    /// 입구 상태의 압력에서 Th까지 재가열
    Reheat { from: usize, at: PressureLevel },
    SaturatedLiquid(SaturationFix),
    Pump {
        from: usize,
        to: PressureLevel,
        flow: PumpFlow,
    },
    /// 등엔탈피 교축
    Trap { from: usize, to: PressureLevel },
}

/// 질량 수지와 성능 계산이 참조하는 상태 번호.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaterPorts {
    /// y′, y″, y‴ 추기 상태
    pub extractions: [usize; 3],
    /// 터빈 배기(복수기 입구)
    pub exhaust: usize,
    pub condensate: usize,
    pub condensate_pump: usize,
    pub low_heater_outlet: usize,
    pub booster_pump: usize,
    pub open_heater_outlet: usize,
    pub feed_pump: usize,
    pub high_heater_outlet: usize,
    pub high_heater_drain: usize,
    pub high_drain_trap: usize,
    pub low_heater_drain: usize,
    pub low_drain_trap: usize,
}

/// 재열 횟수에 따라 만들어진 사이클 배치.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    reheats: ReheatCount,
    stages: Vec<Stage>,
    ports: HeaterPorts,
}

struct Builder {
    stages: Vec<Stage>,
}

impl Builder {
    fn push(&mut self, stage: Stage) -> usize {
        self.stages.push(stage);
        self.stages.len()
    }
}

impl Topology {
    pub fn new(reheats: ReheatCount) -> Self {
        let mut b = Builder { stages: Vec::new() };
        let reheat_high = reheats != ReheatCount::None;
        let reheat_lower = reheats == ReheatCount::Triple;

        let boiler = b.push(Stage::Boiler);
        let ext_high = b.push(Stage::Expand {
            from: boiler,
            to: PressureLevel::High,
            extraction: Some(Heater::ClosedHigh),
        });
        let inlet = if reheat_high {
            b.push(Stage::Reheat {
                from: ext_high,
                at: PressureLevel::High,
            })
        } else {
            ext_high
        };
        let ext_open = b.push(Stage::Expand {
            from: inlet,
            to: PressureLevel::Intermediate,
            extraction: Some(Heater::Open),
        });
        let inlet = if reheat_lower {
            b.push(Stage::Reheat {
                from: ext_open,
                at: PressureLevel::Intermediate,
            })
        } else {
            ext_open
        };
        let ext_low = b.push(Stage::Expand {
            from: inlet,
            to: PressureLevel::Low,
            extraction: Some(Heater::ClosedLow),
        });
        let inlet = if reheat_lower {
            b.push(Stage::Reheat {
                from: ext_low,
                at: PressureLevel::Low,
            })
        } else {
            ext_low
        };
        let exhaust = b.push(Stage::Expand {
            from: inlet,
            to: PressureLevel::Condenser,
            extraction: None,
        });

        let condensate = b.push(Stage::SaturatedLiquid(SaturationFix::CondenserTemperature));
        let condensate_pump = b.push(Stage::Pump {
            from: condensate,
            to: PressureLevel::Low,
            flow: PumpFlow::Condensate,
        });
        let low_heater_outlet = b.push(Stage::SaturatedLiquid(SaturationFix::Pressure(
            PressureLevel::Low,
        )));
        let booster_pump = b.push(Stage::Pump {
            from: low_heater_outlet,
            to: PressureLevel::Intermediate,
            flow: PumpFlow::Condensate,
        });
        let open_heater_outlet = b.push(Stage::SaturatedLiquid(SaturationFix::Pressure(
            PressureLevel::Intermediate,
        )));
        let feed_pump = b.push(Stage::Pump {
            from: open_heater_outlet,
            to: PressureLevel::Boiler,
            flow: PumpFlow::Full,
        });
        let high_heater_outlet = b.push(Stage::SaturatedLiquid(SaturationFix::Pressure(
            PressureLevel::Boiler,
        )));
        let high_heater_drain = b.push(Stage::SaturatedLiquid(SaturationFix::Pressure(
            PressureLevel::High,
        )));
        let high_drain_trap = b.push(Stage::Trap {
            from: high_heater_drain,
            to: PressureLevel::Intermediate,
        });
        let low_heater_drain = b.push(Stage::SaturatedLiquid(SaturationFix::Pressure(
            PressureLevel::Low,
        )));
        let low_drain_trap = b.push(Stage::Trap {
            from: low_heater_drain,
            to: PressureLevel::Condenser,
        });

        Self {
            reheats,
            stages: b.stages,
            ports: HeaterPorts {
                extractions: [ext_high, ext_open, ext_low],
                exhaust,
                condensate,
                condensate_pump,
                low_heater_outlet,
                booster_pump,
                open_heater_outlet,
                feed_pump,
                high_heater_outlet,
                high_heater_drain,
                high_drain_trap,
                low_heater_drain,
                low_drain_trap,
            },
        }
    }

    pub fn reheats(&self) -> ReheatCount {
        self.reheats
    }

    /// 모든 단계. 첫 단계는 항상 `Stage::Boiler`다.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn ports(&self) -> &HeaterPorts {
        &self.ports
    }

    /// 사이클 상태 개수(냉각수 기준점 제외). 0/1/3회 재열에서 16/17/19.
    pub fn state_count(&self) -> usize {
        self.stages.len()
    }
}
