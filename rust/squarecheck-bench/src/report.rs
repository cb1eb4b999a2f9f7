//! Measurement records and report rendering.

use crate::error::BenchError;
use serde::Serialize;
use squarecheck_core::MoonTable;
use strum_macros::{Display, IntoStaticStr};

/// Group a measurement belongs to. Text output separates groups with a
/// blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Suite {
    SmallList,
    LargeList,
    Growth,
}

/// One timed workload.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    /// Human-readable label, e.g. `naive checker on small list`.
    pub name: String,
    pub suite: Suite,
    pub input_len: usize,
    pub iterations: u32,
    /// Mean wall-clock seconds per call.
    pub avg_secs: f64,
    /// Checker answer, absent for workloads that are not checkers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holds: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub measurements: Vec<Measurement>,
    pub moons: MoonTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> Result<String, BenchError> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(self)?)),
            OutputFormat::Csv => Ok(self.to_csv()),
        }
    }

    /// One `<name> takes: <secs> s` line per measurement, a blank line
    /// between suites, then the moon table.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let mut prev: Option<Suite> = None;
        for m in &self.measurements {
            if prev.is_some_and(|p| p != m.suite) {
                out.push('\n');
            }
            out.push_str(&format!("{} takes: {} s\n", m.name, m.avg_secs));
            prev = Some(m.suite);
        }
        out.push_str(&format!("{}\n", self.moons));
        out
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::from("name,suite,input_len,iterations,avg_secs,holds\n");
        for m in &self.measurements {
            out.push_str(&format!(
                "{},{},{},{},{:e},{}\n",
                m.name,
                m.suite,
                m.input_len,
                m.iterations,
                m.avg_secs,
                m.holds.map_or("N/A".to_string(), |h| h.to_string()),
            ));
        }
        out
    }
}
