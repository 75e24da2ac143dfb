//! 통합 테스트 공용 물성 공급자.
#![allow(dead_code)]

use rankine_cycle_toolbox::steam::{If97Steam, PropertyInput, PropertyResult, SteamProperties};

/// 보일러 압력 포화수 엔탈피만 낮춘 IF97 공급자.
/// 고압 가열기 출구가 급수펌프 출구보다 차가워져 y′의 원래 부호가 음수가 된다.
#[derive(Debug, Clone, Copy)]
pub struct ColdHighHeaterSteam {
    pub boiler_pressure_bar: f64,
    pub enthalpy_drop: f64,
}

impl ColdHighHeaterSteam {
    pub fn new(boiler_pressure_bar: f64) -> Self {
        Self {
            boiler_pressure_bar,
            enthalpy_drop: 300.0,
        }
    }
}

impl SteamProperties for ColdHighHeaterSteam {
    fn enthalpy(&self, input: PropertyInput) -> PropertyResult<f64> {
        let h = If97Steam.enthalpy(input)?;
        match input {
            PropertyInput::PX { p, x } if p == self.boiler_pressure_bar && x == 0.0 => {
                Ok(h - self.enthalpy_drop)
            }
            _ => Ok(h),
        }
    }

    fn entropy(&self, input: PropertyInput) -> PropertyResult<f64> {
        If97Steam.entropy(input)
    }

    fn density(&self, input: PropertyInput) -> PropertyResult<f64> {
        If97Steam.density(input)
    }

    fn temperature(&self, input: PropertyInput) -> PropertyResult<f64> {
        If97Steam.temperature(input)
    }

    fn pressure(&self, temperature: f64, entropy: f64) -> PropertyResult<f64> {
        If97Steam.pressure(temperature, entropy)
    }
}
