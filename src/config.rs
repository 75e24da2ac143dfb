use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cycle::ReheatCount;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 사이클 설정. 해석기 생성 시 한 번 검증하고 이후에는 바꾸지 않는다.
/// 파일에서 빠진 항목은 기본값을 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    /// 보일러 운전 압력(bar abs)
    pub boiler_pressure_bar: f64,
    /// 복수기 온도(K)
    pub condenser_temperature_k: f64,
    /// 터빈 등엔트로피 효율(0~1)
    pub turbine_efficiency: f64,
    /// 펌프 등엔트로피 효율(0~1)
    pub pump_efficiency: f64,
    /// 재열 횟수(0, 1, 3)
    pub reheat_count: ReheatCount,
    /// 목표 순발전 출력(kWe)
    pub net_power_kw: f64,
    /// 목표 열 출력(kWth)
    pub thermal_output_kw: f64,
    /// true면 질량 수지 이상을 경고가 아닌 실패로 처리한다.
    pub strict_mass_balance: bool,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            boiler_pressure_bar: 90.0,
            condenser_temperature_k: 303.15,
            turbine_efficiency: 0.87,
            pump_efficiency: 0.8,
            reheat_count: ReheatCount::None,
            net_power_kw: 80_000.0,
            thermal_output_kw: 25_000.0,
            strict_mass_balance: false,
        }
    }
}

/// 보일러 출구 온도 스윕 범위(양 끝 포함).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub start_k: f64,
    pub end_k: f64,
    pub step_k: f64,
    /// true면 스윕 점을 rayon으로 병렬 계산한다.
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_k: 673.0,
            end_k: 873.0,
            step_k: 10.0,
            parallel: false,
        }
    }
}

impl SweepConfig {
    /// 스윕할 온도 목록. 부동소수 누적 오차를 피하려고 정수 배로 계산한다.
    pub fn temperatures(&self) -> Vec<f64> {
        let span = (self.end_k - self.start_k) / self.step_k;
        let count = (span + 1e-9).floor() as usize + 1;
        (0..count)
            .map(|i| self.start_k + i as f64 * self.step_k)
            .collect()
    }
}

/// CSV 출력 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cycle: CycleConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// 물리적으로 맞지 않는 설정값. 스윕을 시작하기 전에 거부한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfiguration {
    #[error("{name} 효율은 (0, 1] 범위여야 합니다: {value}")]
    Efficiency { name: &'static str, value: f64 },
    #[error("{name} 값은 유한한 양수여야 합니다: {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error(
        "보일러 압력 {boiler_bar} bar가 복수기 포화압력 {condenser_bar} bar보다 높아야 합니다"
    )]
    PressureOrder { boiler_bar: f64, condenser_bar: f64 },
    #[error(transparent)]
    ReheatCount(#[from] crate::cycle::topology::UnsupportedReheatCount),
    #[error("스윕 범위가 잘못되었습니다: start={start} K, end={end} K, step={step} K")]
    SweepRange { start: f64, end: f64, step: f64 },
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 값 검증 실패
    #[error("설정 오류: {0}")]
    Invalid(#[from] InvalidConfiguration),
}

fn efficiency(name: &'static str, value: f64) -> Result<(), InvalidConfiguration> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(InvalidConfiguration::Efficiency { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), InvalidConfiguration> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvalidConfiguration::NonPositive { name, value })
    }
}

impl CycleConfig {
    /// 물성 조회 없이 확인 가능한 값을 검증한다.
    /// 압력 순서(p_boiler > p_sat(T_cond))는 해석기 생성 시 물성 공급자로 확인한다.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        efficiency("터빈", self.turbine_efficiency)?;
        efficiency("펌프", self.pump_efficiency)?;
        positive("보일러 압력", self.boiler_pressure_bar)?;
        positive("복수기 온도", self.condenser_temperature_k)?;
        positive("목표 순발전 출력", self.net_power_kw)?;
        positive("목표 열 출력", self.thermal_output_kw)?;
        Ok(())
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        let valid = self.start_k.is_finite()
            && self.end_k.is_finite()
            && self.start_k > 0.0
            && self.step_k > 0.0
            && self.end_k >= self.start_k;
        if valid {
            Ok(())
        } else {
            Err(InvalidConfiguration::SweepRange {
                start: self.start_k,
                end: self.end_k,
                step: self.step_k,
            })
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        self.cycle.validate()?;
        self.sweep.validate()
    }

    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
/// 읽은 값은 물성 조회 없이 확인 가능한 범위까지 검증한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}
