//! IAPWS-IF97 계산을 seuif97 크레이트로 위임한 물성 공급자.
//! 경계 밖 단위: 압력(bar abs), 온도(K), h(kJ/kg), s(kJ/kg·K)
//! seuif97 단위: 압력(MPa), 온도(°C), h(kJ/kg), s(kJ/kg·K)

use seuif97::{ph, ps, pt, px, ts, tx, OH, OP, OS, OT, OV};

use super::properties::{
    Property, PropertyError, PropertyInput, PropertyResult, SteamProperties,
};
use crate::units::{convert_pressure, convert_temperature, PressureUnit, TemperatureUnit};

// Region 4(포화선) 유효 온도 범위
const T4_STAR_K: f64 = 647.096;
const T_TRIPLE_K: f64 = 273.16;

fn mpa(p_bar: f64) -> f64 {
    convert_pressure(p_bar, PressureUnit::Bar, PressureUnit::MegaPascal)
}

fn celsius(t_k: f64) -> f64 {
    convert_temperature(t_k, TemperatureUnit::Kelvin, TemperatureUnit::Celsius)
}

/// 포화압력(bar abs). 입력 온도는 K이며 삼중점~임계점 사이에서만 유효하다.
pub fn saturation_pressure_bar(t_k: f64) -> PropertyResult<f64> {
    let input = PropertyInput::TX { t: t_k, x: 0.0 };
    if !(T_TRIPLE_K..=T4_STAR_K).contains(&t_k) {
        return Err(PropertyError::OutOfRange {
            property: Property::Pressure,
            input,
        });
    }
    let p_mpa = If97Steam::checked(Property::Pressure, input, tx(celsius(t_k), 0.0, OP))?;
    Ok(convert_pressure(p_mpa, PressureUnit::MegaPascal, PressureUnit::Bar))
}

/// seuif97 기반 물성 공급자. 상태가 없으므로 스레드 간 공유가 자유롭다.
#[derive(Debug, Clone, Copy, Default)]
pub struct If97Steam;

impl If97Steam {
    pub fn new() -> Self {
        Self
    }

    fn raw(input: PropertyInput, o_id: i32) -> f64 {
        match input {
            PropertyInput::PT { p, t } => pt(mpa(p), celsius(t), o_id),
            PropertyInput::PS { p, s } => ps(mpa(p), s, o_id),
            PropertyInput::PH { p, h } => ph(mpa(p), h, o_id),
            PropertyInput::PX { p, x } => px(mpa(p), x, o_id),
            PropertyInput::TX { t, x } => tx(celsius(t), x, o_id),
        }
    }

    fn checked(property: Property, input: PropertyInput, value: f64) -> PropertyResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(PropertyError::OutOfRange { property, input })
        }
    }
}

impl SteamProperties for If97Steam {
    fn enthalpy(&self, input: PropertyInput) -> PropertyResult<f64> {
        Self::checked(Property::Enthalpy, input, Self::raw(input, OH))
    }

    fn entropy(&self, input: PropertyInput) -> PropertyResult<f64> {
        Self::checked(Property::Entropy, input, Self::raw(input, OS))
    }

    fn density(&self, input: PropertyInput) -> PropertyResult<f64> {
        let v = Self::checked(Property::Density, input, Self::raw(input, OV))?;
        if v <= 0.0 {
            return Err(PropertyError::OutOfRange {
                property: Property::Density,
                input,
            });
        }
        Ok(1.0 / v)
    }

    fn temperature(&self, input: PropertyInput) -> PropertyResult<f64> {
        let t_c = Self::checked(Property::Temperature, input, Self::raw(input, OT))?;
        Ok(convert_temperature(
            t_c,
            TemperatureUnit::Celsius,
            TemperatureUnit::Kelvin,
        ))
    }

    fn pressure(&self, temperature: f64, entropy: f64) -> PropertyResult<f64> {
        if temperature < T4_STAR_K {
            let s_liquid = self.entropy(PropertyInput::TX {
                t: temperature,
                x: 0.0,
            })?;
            let s_vapour = self.entropy(PropertyInput::TX {
                t: temperature,
                x: 1.0,
            })?;
            if (s_liquid..=s_vapour).contains(&entropy) {
                return saturation_pressure_bar(temperature);
            }
        }
        let p_mpa = ts(celsius(temperature), entropy, OP);
        if !p_mpa.is_finite() || p_mpa <= 0.0 {
            return Err(PropertyError::PressureLookup {
                temperature,
                entropy,
            });
        }
        Ok(convert_pressure(p_mpa, PressureUnit::MegaPascal, PressureUnit::Bar))
    }
}
