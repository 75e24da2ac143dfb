//! 한 스윕 점의 일·열 수지와 효율, 유량, CO2 배출량.

use super::error::CycleError;
use super::fractions::ExtractionFractions;
use super::process;
use super::state::{State, StateChain};
use super::topology::{PumpFlow, Stage, Topology};
use crate::config::CycleConfig;
use crate::steam::{PropertyInput, SteamProperties};
use crate::units::{convert_energy, EnergyUnit};

/// 천연가스 연소 CO2 배출계수 [kg/mmBtu]
pub const CO2_KG_PER_MMBTU: f64 = 52.91;
/// 냉각수 입구 기준 온도 [K] (80 °C 포화수)
pub const COOLING_WATER_INLET_K: f64 = 353.15;
/// 냉각수 출구 기준 온도 [K] (125 °C 포화수)
pub const COOLING_WATER_OUTLET_K: f64 = 398.15;

/// 냉각수 유량 계산에 쓰는 두 포화수 기준점.
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingWater {
    pub inlet: State,
    pub outlet: State,
}

impl CoolingWater {
    /// 기준점 번호는 사이클 상태 다음 번호(n+1, n+2)를 쓴다.
    pub fn resolve<P: SteamProperties + ?Sized>(
        props: &P,
        first_index: usize,
    ) -> Result<Self, CycleError> {
        let fix = |index: usize, t: f64| -> Result<State, CycleError> {
            let input = PropertyInput::TX { t, x: 0.0 };
            let p = props.pressure(t, props.entropy(input)?)?;
            process::saturated_liquid(props, index, input, p)
        };
        Ok(Self {
            inlet: fix(first_index, COOLING_WATER_INLET_K)?,
            outlet: fix(first_index + 1, COOLING_WATER_OUTLET_K)?,
        })
    }

    /// 냉각수 단위 질량당 흡열량 [kJ/kg]
    pub fn enthalpy_rise(&self) -> f64 {
        (self.outlet.enthalpy_kj_per_kg - self.inlet.enthalpy_kj_per_kg).abs()
    }
}

/// 성능 지표. 비일·비열은 kJ/kg(보일러 유량 기준), 동력·열량은 kW.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetrics {
    pub turbine_work: f64,
    pub pump_work: f64,
    pub net_work: f64,
    /// 보일러 + 재열기 흡열량
    pub heat_input: f64,
    /// 복수기 방열량
    pub heat_rejected: f64,
    pub thermal_efficiency: f64,
    pub back_work_ratio: f64,
    /// 사이클 질량유량 [kg/s]
    pub mass_flow: f64,
    /// 냉각수 질량유량 [kg/s]
    pub cooling_water_flow: f64,
    /// 투입 열량 [kW]
    pub heat_input_rate: f64,
    /// 증기 측 방열량 [kW]
    pub heat_rejected_rate: f64,
    /// (순동력 + 방열) / 투입열. 수지가 맞으면 1에 가깝다.
    pub energy_balance_ratio: f64,
    pub co2_kg_per_hour: f64,
    pub co2_kg_per_day: f64,
}

/// 상태점과 추기 분율로 성능 지표를 계산한다.
///
/// 각 추기는 그 하류의 모든 터빈 단과 재열기에서 해당 분율만큼 유량을 영구히 줄인다.
pub fn evaluate(
    topology: &Topology,
    chain: &StateChain,
    y: &ExtractionFractions,
    cooling_water: &CoolingWater,
    config: &CycleConfig,
) -> Result<PerformanceMetrics, CycleError> {
    let ports = topology.ports();
    let condensate_flow = 1.0 - y.y_prime - y.y_double_prime;

    let mut turbine_work = 0.0;
    let mut pump_work = 0.0;
    let mut reheat = 0.0;
    let mut extracted = 0.0;
    for (offset, stage) in topology.stages().iter().enumerate() {
        let index = offset + 1;
        match *stage {
            Stage::Expand {
                from, extraction, ..
            } => {
                turbine_work += (1.0 - extracted) * (chain.h(from) - chain.h(index));
                if let Some(heater) = extraction {
                    extracted += y.get(heater);
                }
            }
            Stage::Reheat { from, .. } => {
                reheat += (1.0 - extracted) * (chain.h(index) - chain.h(from));
            }
            Stage::Pump { from, flow, .. } => {
                let weight = match flow {
                    PumpFlow::Full => 1.0,
                    PumpFlow::Condensate => condensate_flow,
                };
                pump_work += weight * (chain.h(index) - chain.h(from));
            }
            Stage::Boiler | Stage::SaturatedLiquid(_) | Stage::Trap { .. } => {}
        }
    }

    let net_work = turbine_work - pump_work;
    if net_work <= 0.0 {
        return Err(CycleError::NonPositiveNetWork { net_work });
    }
    let heat_input = chain.h(1) - chain.h(ports.high_heater_outlet) + reheat;
    let thermal_efficiency = net_work / heat_input;
    if !(thermal_efficiency > 0.0 && thermal_efficiency < 1.0) {
        return Err(CycleError::EfficiencyOutOfRange {
            efficiency: thermal_efficiency,
        });
    }
    let back_work_ratio = pump_work / turbine_work;

    let heat_rejected = (1.0 - y.sum()) * chain.h(ports.exhaust)
        + y.y_triple_prime * chain.h(ports.low_drain_trap)
        - condensate_flow * chain.h(ports.condensate);

    let mass_flow = config.net_power_kw / net_work;
    let cooling_water_flow = config.thermal_output_kw / cooling_water.enthalpy_rise();
    let heat_input_rate = mass_flow * heat_input;
    let heat_rejected_rate = mass_flow * heat_rejected;
    let energy_balance_ratio = (mass_flow * net_work + heat_rejected_rate) / heat_input_rate;

    // 1시간 동안의 투입열(kWh)을 mmBtu로 환산해 배출계수를 곱한다.
    let heat_per_hour_mmbtu =
        convert_energy(heat_input_rate, EnergyUnit::KilowattHour, EnergyUnit::MmBtu);
    let co2_kg_per_hour = heat_per_hour_mmbtu * CO2_KG_PER_MMBTU;

    Ok(PerformanceMetrics {
        turbine_work,
        pump_work,
        net_work,
        heat_input,
        heat_rejected,
        thermal_efficiency,
        back_work_ratio,
        mass_flow,
        cooling_water_flow,
        heat_input_rate,
        heat_rejected_rate,
        energy_balance_ratio,
        co2_kg_per_hour,
        co2_kg_per_day: co2_kg_per_hour * 24.0,
    })
}
