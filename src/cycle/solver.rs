//! 보일러 출구 온도 하나에 대한 사이클 상태 해석.

use tracing::{debug, warn};

use super::error::CycleError;
use super::fractions::{self, ExtractionFractions, FractionBalance};
use super::metrics::{self, CoolingWater, PerformanceMetrics};
use super::pressure::PressureLevels;
use super::process;
use super::state::{State, StateChain, StateKind};
use super::topology::{SaturationFix, Stage, Topology};
use crate::config::{CycleConfig, InvalidConfiguration};
use crate::steam::{PropertyInput, SteamProperties};

/// 한 스윕 점의 계산 결과. 다른 스윕 점과 공유하는 상태는 없다.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclePoint {
    pub boiler_temperature_k: f64,
    pub pressures: PressureLevels,
    pub states: StateChain,
    pub cooling_water: CoolingWater,
    pub balance: FractionBalance,
    pub metrics: PerformanceMetrics,
}

impl CyclePoint {
    pub fn fractions(&self) -> &ExtractionFractions {
        &self.balance.fractions
    }
}

/// 설정 하나로 고정된 사이클 해석기.
#[derive(Debug, Clone)]
pub struct CycleSolver<P> {
    config: CycleConfig,
    topology: Topology,
    props: P,
}

impl<P: SteamProperties> CycleSolver<P> {
    /// 설정을 검증하고 재열 횟수에 맞는 배치를 만든다.
    pub fn new(config: CycleConfig, props: P) -> Result<Self, CycleError> {
        config.validate()?;
        // 보일러 압력은 복수기 온도의 포화압력보다 높아야 한다.
        let condensate = PropertyInput::TX {
            t: config.condenser_temperature_k,
            x: 0.0,
        };
        let condenser_bar = props.pressure(
            config.condenser_temperature_k,
            props.entropy(condensate)?,
        )?;
        if config.boiler_pressure_bar <= condenser_bar {
            return Err(InvalidConfiguration::PressureOrder {
                boiler_bar: config.boiler_pressure_bar,
                condenser_bar,
            }
            .into());
        }
        let topology = Topology::new(config.reheat_count);
        Ok(Self {
            config,
            topology,
            props,
        })
    }

    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// 보일러 출구 온도 `th`[K]에서 상태, 추기 분율, 성능 지표를 구한다.
    pub fn solve(&self, th: f64) -> Result<CyclePoint, CycleError> {
        let boiler = self.fix_boiler_outlet(th)?;
        let s1 = boiler
            .entropy_kj_per_kgk
            .ok_or(CycleError::MissingProperty {
                index: 1,
                what: "엔트로피",
            })?;
        // 복수기 압력은 매 스윕 점마다 (T_cond, s1)에서 다시 구한다.
        let p5 = self
            .props
            .pressure(self.config.condenser_temperature_k, s1)?;
        let pressures = PressureLevels::from_bounds(self.config.boiler_pressure_bar, p5);

        let states = self.propagate(th, &pressures, boiler)?;
        let cooling_water = CoolingWater::resolve(&self.props, states.len() + 1)?;

        let balance = fractions::solve(&states, self.topology.ports())?;
        for anomaly in &balance.anomalies {
            warn!(th, reheats = %self.topology.reheats(), "질량 수지 이상: {anomaly}");
        }
        if self.config.strict_mass_balance && !balance.is_physical() {
            return Err(CycleError::MassBalance(balance.anomalies));
        }

        let metrics = metrics::evaluate(
            &self.topology,
            &states,
            &balance.fractions,
            &cooling_water,
            &self.config,
        )?;
        debug!(
            th,
            p5,
            efficiency = metrics.thermal_efficiency,
            net_work = metrics.net_work,
            "사이클 해석 완료"
        );

        Ok(CyclePoint {
            boiler_temperature_k: th,
            pressures,
            states,
            cooling_water,
            balance,
            metrics,
        })
    }

    fn fix_boiler_outlet(&self, th: f64) -> Result<State, CycleError> {
        let p1 = self.config.boiler_pressure_bar;
        let saturation_k = self
            .props
            .temperature(PropertyInput::PX { p: p1, x: 0.0 })?;
        if th <= saturation_k {
            return Err(CycleError::NotSuperheated {
                temperature_k: th,
                saturation_k,
            });
        }
        process::superheat(&self.props, 1, StateKind::BoilerOutlet, p1, th)
    }

    /// 보일러 출구 다음 단계부터 배치 순서대로 상태를 고정한다.
    fn propagate(
        &self,
        th: f64,
        pressures: &PressureLevels,
        boiler: State,
    ) -> Result<StateChain, CycleError> {
        let cfg = &self.config;
        let mut chain = StateChain::with_capacity(self.topology.state_count());
        chain.push(boiler);
        for (offset, stage) in self.topology.stages().iter().enumerate() {
            let index = offset + 1;
            let inlet = |from: usize| {
                chain.get(from).ok_or(CycleError::MissingProperty {
                    index: from,
                    what: "입구 상태",
                })
            };
            let state = match *stage {
                // 보일러 출구는 압력 단계를 정하기 전에 이미 고정했다.
                Stage::Boiler => continue,
                Stage::Expand { from, to, .. } => process::expand(
                    &self.props,
                    index,
                    inlet(from)?,
                    pressures.get(to),
                    cfg.turbine_efficiency,
                )?,
                Stage::Reheat { at, .. } => process::superheat(
                    &self.props,
                    index,
                    StateKind::Reheat,
                    pressures.get(at),
                    th,
                )?,
                Stage::SaturatedLiquid(SaturationFix::CondenserTemperature) => {
                    process::saturated_liquid(
                        &self.props,
                        index,
                        PropertyInput::TX {
                            t: cfg.condenser_temperature_k,
                            x: 0.0,
                        },
                        pressures.p5,
                    )?
                }
                Stage::SaturatedLiquid(SaturationFix::Pressure(level)) => {
                    let p = pressures.get(level);
                    process::saturated_liquid(
                        &self.props,
                        index,
                        PropertyInput::PX { p, x: 0.0 },
                        p,
                    )?
                }
                Stage::Pump { from, to, .. } => process::pump(
                    index,
                    inlet(from)?,
                    pressures.get(to),
                    cfg.pump_efficiency,
                )?,
                Stage::Trap { from, to } => process::trap(index, inlet(from)?, pressures.get(to)),
            };
            chain.push(state);
        }
        Ok(chain)
    }
}
