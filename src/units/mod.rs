//! 사이클 계산 경계에서 쓰는 단위 환산 모음.
//! 내부 기준은 압력=bar(abs), 온도=K, 비엔탈피=kJ/kg, 동력=kW이다.

pub mod energy;
pub mod pressure;
pub mod temperature;

pub use energy::{convert_energy, EnergyUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
