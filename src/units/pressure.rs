/// 절대압 단위. 사이클 내부 기준은 bar(abs)이며 게이지 압력은 다루지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureUnit {
    Bar,
    KiloPascal,
    MegaPascal,
}

fn to_bar(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value,
        PressureUnit::KiloPascal => value / 100.0,
        PressureUnit::MegaPascal => value * 10.0,
    }
}

fn from_bar(value_bar: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value_bar,
        PressureUnit::KiloPascal => value_bar * 100.0,
        PressureUnit::MegaPascal => value_bar / 10.0,
    }
}

/// 압력(또는 압력차)을 원하는 단위로 변환한다.
/// 펌프 일 계산에서는 bar 차이를 kPa로 바꿔 v·Δp가 kJ/kg이 되도록 쓴다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_bar(to_bar(value, from), to)
}
