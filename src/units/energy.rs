/// 에너지 단위. 내부 기준은 킬로줄(kJ)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyUnit {
    Kilojoule,
    KilowattHour,
    Btu,
    /// 백만 Btu. 배출계수(kg/mmBtu)의 분모 단위.
    MmBtu,
}

const KJ_PER_BTU: f64 = 1.055_056;

fn to_kilojoule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Kilojoule => value,
        EnergyUnit::KilowattHour => value * 3600.0,
        EnergyUnit::Btu => value * KJ_PER_BTU,
        EnergyUnit::MmBtu => value * KJ_PER_BTU * 1.0e6,
    }
}

fn from_kilojoule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Kilojoule => value,
        EnergyUnit::KilowattHour => value / 3600.0,
        EnergyUnit::Btu => value / KJ_PER_BTU,
        EnergyUnit::MmBtu => value / (KJ_PER_BTU * 1.0e6),
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    from_kilojoule(to_kilojoule(value, from), to)
}
