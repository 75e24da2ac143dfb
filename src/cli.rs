use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, InvalidConfiguration, DEFAULT_CONFIG_PATH};
use crate::cycle::ReheatCount;

/// 명령행 인자. 지정한 값은 설정 파일 값을 덮어쓴다.
#[derive(Debug, Parser)]
#[command(name = "rankine_cycle_toolbox")]
#[command(about = "재생 랭킨 사이클 보일러 출구 온도 스윕", long_about = None)]
pub struct Cli {
    /// 설정 파일 경로(없으면 기본값으로 생성)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 재열 횟수(0, 1, 3)
    #[arg(short, long)]
    pub reheats: Option<u8>,
    /// 0, 1, 3회 재열 구성을 모두 계산
    #[arg(long, conflicts_with = "reheats")]
    pub all_reheats: bool,
    /// 보일러 압력(bar abs)
    #[arg(long)]
    pub boiler_pressure: Option<f64>,
    /// CSV 출력 디렉터리
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// 스윕 점 병렬 계산
    #[arg(long)]
    pub parallel: bool,
    /// 스윕 점마다 디버그 로그 출력
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 명령행 값을 설정에 반영한다.
    pub fn apply(&self, config: &mut Config) -> Result<(), InvalidConfiguration> {
        if let Some(n) = self.reheats {
            config.cycle.reheat_count = ReheatCount::try_from(n)?;
        }
        if let Some(p) = self.boiler_pressure {
            config.cycle.boiler_pressure_bar = p;
        }
        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
        if self.parallel {
            config.sweep.parallel = true;
        }
        Ok(())
    }

    /// 계산할 재열 구성 목록.
    pub fn reheat_configurations(&self, config: &Config) -> Vec<ReheatCount> {
        if self.all_reheats {
            ReheatCount::ALL.to_vec()
        } else {
            vec![config.cycle.reheat_count]
        }
    }
}
