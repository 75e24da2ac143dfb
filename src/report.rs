//! 스윕 결과를 CSV 표로 기록한다.
//!
//! 파일 이름은 `{접두어}_{종류}_{보일러 압력}.csv` 형식이다(예: `noreheat_data_90.csv`).
//! 한 스윕 점의 모든 값이 계산된 뒤에만 행을 쓰므로, 실패한 점이 부분 행을 남기지 않는다.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cycle::{CyclePoint, Topology};
use crate::sweep::{PointFailure, SweepReport};

/// CSV 기록 오류.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{path} 기록 실패: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

struct Table {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl Table {
    fn create(path: PathBuf, header: &[String]) -> Result<Self, ReportError> {
        let file = File::create(&path).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        let mut table = Self {
            path,
            writer: BufWriter::new(file),
        };
        table.row(header)?;
        Ok(table)
    }

    fn row<T: ToString>(&mut self, cells: &[T]) -> Result<(), ReportError> {
        let line = cells
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        writeln!(self.writer, "{line}").map_err(|source| self.io_error(source))
    }

    fn finish(mut self) -> Result<PathBuf, ReportError> {
        self.writer.flush().map_err(|source| self.io_error(source))?;
        Ok(self.path)
    }

    fn io_error(&self, source: std::io::Error) -> ReportError {
        ReportError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn enthalpy_labels(range: std::ops::RangeInclusive<usize>) -> impl Iterator<Item = String> {
    range.map(|i| format!("h{i}"))
}

/// 문장 안의 쉼표가 열을 나누지 않도록 따옴표로 감싼다.
fn quoted(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

const FRACTION_LABELS: [&str; 3] = ["y'", "y''", "y'''"];

/// 재열 구성 하나의 CSV 표 묶음.
pub struct SweepWriter {
    pressures: Table,
    enthalpies: Table,
    mass: Table,
    data: Table,
    graph: Table,
    failures: Table,
}

impl SweepWriter {
    /// 출력 디렉터리에 표 파일을 만들고 머리행을 쓴다.
    pub fn create(
        directory: &Path,
        topology: &Topology,
        boiler_pressure_bar: f64,
    ) -> Result<Self, ReportError> {
        fs::create_dir_all(directory).map_err(|source| ReportError::Io {
            path: directory.to_path_buf(),
            source,
        })?;
        let n = topology.state_count();
        let prefix = topology.reheats().file_prefix();
        let path = |kind: &str| directory.join(format!("{prefix}_{kind}_{boiler_pressure_bar}.csv"));

        let mut enthalpy_header = labels(&["Th"]);
        enthalpy_header.extend(enthalpy_labels(1..=n));

        let mut mass_header = labels(&["Th"]);
        mass_header.extend(labels(&FRACTION_LABELS));
        mass_header.push("anomalies".to_string());

        let mut data_header = labels(&[
            "Th",
            "P1",
            "m.",
            "m.cw",
            "W_net",
            "Q_in",
            "Q_out per unit mass",
            "Q_out_steam",
            "thermal eff",
            "BWR",
            "CO2 per hour",
            "CO2 per day",
        ]);
        // 사이클 상태 h1..hn 뒤에 냉각수 기준점 두 개가 이어진다.
        data_header.extend(enthalpy_labels(1..=n + 2));
        data_header.extend(labels(&FRACTION_LABELS));

        Ok(Self {
            pressures: Table::create(
                path("pressures"),
                &labels(&["Th", "P1", "P2", "P3", "P4", "P5"]),
            )?,
            enthalpies: Table::create(path("enthalpies"), &enthalpy_header)?,
            mass: Table::create(path("mass"), &mass_header)?,
            data: Table::create(path("data"), &data_header)?,
            graph: Table::create(
                path("graph"),
                &labels(&["Th", "p1", "m_dot", "W_net", "Q_out_unitmass", "thermal_eff"]),
            )?,
            failures: Table::create(path("failures"), &labels(&["Th", "kind", "message"]))?,
        })
    }

    /// 성공한 스윕 점 하나를 모든 표에 기록한다.
    pub fn write_point(&mut self, point: &CyclePoint) -> Result<(), ReportError> {
        let th = point.boiler_temperature_k;
        let m = &point.metrics;
        let y = point.fractions().as_array();
        let h = point.states.enthalpies();

        let mut pressure_row = vec![th];
        pressure_row.extend(point.pressures.as_array());

        let mut enthalpy_row = vec![th];
        enthalpy_row.extend(&h);

        let mut mass_row: Vec<String> = std::iter::once(th)
            .chain(y)
            .map(|v| v.to_string())
            .collect();
        // 비물리적 운전점은 이상 내용을, 정상 점은 빈 칸을 남긴다.
        mass_row.push(if point.balance.is_physical() {
            String::new()
        } else {
            quoted(
                &point
                    .balance
                    .anomalies
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        });

        let mut data_row = vec![
            th,
            point.pressures.p1,
            m.mass_flow,
            m.cooling_water_flow,
            m.net_work,
            m.heat_input,
            m.heat_rejected,
            m.heat_rejected_rate,
            m.thermal_efficiency,
            m.back_work_ratio,
            m.co2_kg_per_hour,
            m.co2_kg_per_day,
        ];
        data_row.extend(&h);
        data_row.push(point.cooling_water.inlet.enthalpy_kj_per_kg);
        data_row.push(point.cooling_water.outlet.enthalpy_kj_per_kg);
        data_row.extend(y);

        let graph_row = [
            th,
            point.pressures.p1,
            m.mass_flow,
            m.net_work,
            m.heat_rejected,
            m.thermal_efficiency,
        ];

        self.pressures.row(&pressure_row)?;
        self.enthalpies.row(&enthalpy_row)?;
        self.mass.row(&mass_row)?;
        self.data.row(&data_row)?;
        self.graph.row(&graph_row)
    }

    /// 실패한 스윕 점을 실패 표에 기록한다.
    pub fn write_failure(&mut self, failure: &PointFailure) -> Result<(), ReportError> {
        self.failures.row(&[
            failure.boiler_temperature_k.to_string(),
            failure.error.kind().to_string(),
            quoted(&failure.error.to_string()),
        ])
    }

    /// 버퍼를 비우고 기록한 파일 경로를 돌려준다.
    pub fn finish(self) -> Result<Vec<PathBuf>, ReportError> {
        [
            self.pressures,
            self.enthalpies,
            self.mass,
            self.data,
            self.graph,
            self.failures,
        ]
        .into_iter()
        .map(Table::finish)
        .collect()
    }
}

/// 스윕 결과 전체를 표로 기록한다.
pub fn write_report(
    directory: &Path,
    topology: &Topology,
    report: &SweepReport,
) -> Result<Vec<PathBuf>, ReportError> {
    let mut writer = SweepWriter::create(directory, topology, report.boiler_pressure_bar)?;
    for outcome in &report.outcomes {
        match outcome {
            Ok(point) => writer.write_point(point)?,
            Err(failure) => writer.write_failure(failure)?,
        }
    }
    writer.finish()
}
