//! 재생 랭킨 사이클 해석 로직을 라이브러리로 분리하여 CLI와 테스트에서 함께 쓴다.

pub mod app;
pub mod cli;
pub mod config;
pub mod cycle;
pub mod report;
pub mod steam;
pub mod sweep;
pub mod units;
