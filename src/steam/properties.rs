//! 물/증기 물성 조회 인터페이스.
//!
//! 사이클 계산기는 물성 공급자를 블랙박스로 취급한다. 두 개의 독립 강도 성질을
//! 넣으면 비엔탈피·엔트로피·밀도·온도 중 하나를 스칼라로 돌려준다. 배열 래핑이나
//! 단위 변환은 구현체 경계 안에서만 처리한다.

use std::fmt;

use thiserror::Error;

/// 물성 조회 입력 쌍. 단위는 압력=bar(abs), 온도=K, 엔트로피=kJ/kg·K,
/// 비엔탈피=kJ/kg, 건도=0~1이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyInput {
    /// 압력과 온도
    PT { p: f64, t: f64 },
    /// 압력과 엔트로피
    PS { p: f64, s: f64 },
    /// 압력과 비엔탈피
    PH { p: f64, h: f64 },
    /// 압력과 건도
    PX { p: f64, x: f64 },
    /// 온도와 건도
    TX { t: f64, x: f64 },
}

impl fmt::Display for PropertyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyInput::PT { p, t } => write!(f, "p={p} bar, T={t} K"),
            PropertyInput::PS { p, s } => write!(f, "p={p} bar, s={s} kJ/kg·K"),
            PropertyInput::PH { p, h } => write!(f, "p={p} bar, h={h} kJ/kg"),
            PropertyInput::PX { p, x } => write!(f, "p={p} bar, x={x}"),
            PropertyInput::TX { t, x } => write!(f, "T={t} K, x={x}"),
        }
    }
}

/// 조회 대상 물성.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Enthalpy,
    Entropy,
    Density,
    Temperature,
    Pressure,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Property::Enthalpy => "비엔탈피",
            Property::Entropy => "엔트로피",
            Property::Density => "밀도",
            Property::Temperature => "온도",
            Property::Pressure => "압력",
        };
        f.write_str(name)
    }
}

/// 물성 조회 실패. 기본값으로 대체하지 않고 항상 호출자에게 전파한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// 상관식 유효 범위 밖이거나 백엔드가 NaN을 반환함
    #[error("물성 계산 실패: {property} ({input}) - 유효 범위 밖")]
    OutOfRange {
        property: Property,
        input: PropertyInput,
    },
    /// (T, s)로 압력을 구할 수 없음
    #[error("압력 역계산 실패: T={temperature} K, s={entropy} kJ/kg·K")]
    PressureLookup { temperature: f64, entropy: f64 },
}

pub type PropertyResult<T> = Result<T, PropertyError>;

/// 물/증기 물성 공급자.
///
/// 병렬 스윕에서 공유되므로 `Send + Sync`여야 한다.
pub trait SteamProperties: Send + Sync {
    /// 비엔탈피 [kJ/kg]
    fn enthalpy(&self, input: PropertyInput) -> PropertyResult<f64>;

    /// 엔트로피 [kJ/kg·K]
    fn entropy(&self, input: PropertyInput) -> PropertyResult<f64>;

    /// 밀도 [kg/m³]
    fn density(&self, input: PropertyInput) -> PropertyResult<f64>;

    /// 온도 [K]
    fn temperature(&self, input: PropertyInput) -> PropertyResult<f64>;

    /// 온도[K]와 엔트로피로 압력[bar abs]을 구한다.
    /// 포화 돔 안이면 해당 온도의 포화압력이다.
    fn pressure(&self, temperature: f64, entropy: f64) -> PropertyResult<f64>;
}
