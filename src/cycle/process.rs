//! 상태점을 고정하는 개별 열역학 과정.

use super::error::CycleError;
use super::state::{State, StateKind};
use crate::steam::{PropertyInput, SteamProperties};
use crate::units::{convert_pressure, PressureUnit};

/// (p, T)로 과열 증기 상태를 고정한다. 보일러 출구와 재열기 출구에 쓴다.
pub fn superheat<P: SteamProperties + ?Sized>(
    props: &P,
    index: usize,
    kind: StateKind,
    pressure_bar: f64,
    temperature_k: f64,
) -> Result<State, CycleError> {
    let input = PropertyInput::PT {
        p: pressure_bar,
        t: temperature_k,
    };
    let density = props.density(input)?;
    Ok(State {
        index,
        kind,
        pressure_bar,
        temperature_k: Some(temperature_k),
        enthalpy_kj_per_kg: props.enthalpy(input)?,
        entropy_kj_per_kgk: Some(props.entropy(input)?),
        specific_volume: Some(1.0 / density),
    })
}

/// 등엔트로피 효율을 적용한 터빈 팽창.
///
/// h_s = h(p_out, s_in), h = h_in − η(h_in − h_s), s = s(p_out, h)
pub fn expand<P: SteamProperties + ?Sized>(
    props: &P,
    index: usize,
    inlet: &State,
    outlet_pressure_bar: f64,
    efficiency: f64,
) -> Result<State, CycleError> {
    let s_in = inlet
        .entropy_kj_per_kgk
        .ok_or(CycleError::MissingProperty {
            index: inlet.index,
            what: "엔트로피",
        })?;
    let h_in = inlet.enthalpy_kj_per_kg;
    let h_isentropic = props.enthalpy(PropertyInput::PS {
        p: outlet_pressure_bar,
        s: s_in,
    })?;
    let h = h_in - efficiency * (h_in - h_isentropic);
    let actual = PropertyInput::PH {
        p: outlet_pressure_bar,
        h,
    };
    let density = props.density(actual)?;
    Ok(State {
        index,
        kind: StateKind::Expansion,
        pressure_bar: outlet_pressure_bar,
        temperature_k: Some(props.temperature(actual)?),
        enthalpy_kj_per_kg: h,
        entropy_kj_per_kgk: Some(props.entropy(actual)?),
        specific_volume: Some(1.0 / density),
    })
}

/// 포화수(x = 0) 상태. `input`은 `PX` 또는 `TX`이며 `pressure_bar`는 기록용 압력이다.
pub fn saturated_liquid<P: SteamProperties + ?Sized>(
    props: &P,
    index: usize,
    input: PropertyInput,
    pressure_bar: f64,
) -> Result<State, CycleError> {
    let density = props.density(input)?;
    Ok(State {
        index,
        kind: StateKind::SaturatedLiquid,
        pressure_bar,
        temperature_k: Some(props.temperature(input)?),
        enthalpy_kj_per_kg: props.enthalpy(input)?,
        entropy_kj_per_kgk: Some(props.entropy(input)?),
        specific_volume: Some(1.0 / density),
    })
}

/// 비압축성 근사 펌프: h = h_in + v_in·Δp / η. Δp는 bar에서 kPa로 환산한다.
/// 출구 엔트로피와 비체적은 입구 값을 그대로 넘긴다.
pub fn pump(
    index: usize,
    inlet: &State,
    outlet_pressure_bar: f64,
    efficiency: f64,
) -> Result<State, CycleError> {
    let v_in = inlet.specific_volume.ok_or(CycleError::MissingProperty {
        index: inlet.index,
        what: "비체적",
    })?;
    let dp_kpa = convert_pressure(
        outlet_pressure_bar - inlet.pressure_bar,
        PressureUnit::Bar,
        PressureUnit::KiloPascal,
    );
    let h_isentropic_rise = v_in * dp_kpa;
    Ok(State {
        index,
        kind: StateKind::PumpOutlet,
        pressure_bar: outlet_pressure_bar,
        temperature_k: None,
        enthalpy_kj_per_kg: inlet.enthalpy_kj_per_kg + h_isentropic_rise / efficiency,
        entropy_kj_per_kgk: inlet.entropy_kj_per_kgk,
        specific_volume: Some(v_in),
    })
}

/// 트랩: 엔탈피는 그대로, 압력만 낮춘다.
pub fn trap(index: usize, inlet: &State, outlet_pressure_bar: f64) -> State {
    State {
        index,
        kind: StateKind::TrapOutlet,
        pressure_bar: outlet_pressure_bar,
        temperature_k: None,
        enthalpy_kj_per_kg: inlet.enthalpy_kj_per_kg,
        entropy_kj_per_kgk: None,
        specific_volume: None,
    }
}
