//! Output surface for model runs: console prose, a JSON summary, and the
//! percent-change bar chart.

use std::io::{self, Write};

use biomag_core::{BmfReading, ConcentrationShift, WasteEstimate};
use serde::Serialize;
use thiserror::Error;

pub mod chart;

// --- Error Type ---
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    #[error("chart rendering failed: {0}")]
    Chart(String),
}

/// Percentage change from `old` to `new`.
pub fn percent_change(old: f64, new: f64) -> f64 {
    (new - old) / old * 100.0
}

/// Everything one run produces, assembled for rendering.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub waste: WasteEstimate,
    pub concentration: ConcentrationShift,
    pub organisms: Vec<OrganismChange>,
}

#[derive(Debug, Serialize)]
pub struct OrganismChange {
    pub name: String,
    pub baseline_bmf: f64,
    pub perturbed_bmf: f64,
    pub percent_change: f64,
}

impl RunReport {
    pub fn new(
        waste: WasteEstimate,
        concentration: ConcentrationShift,
        readings: Vec<BmfReading>,
    ) -> Self {
        let organisms = readings
            .into_iter()
            .map(|reading| OrganismChange {
                percent_change: percent_change(reading.baseline, reading.perturbed),
                name: reading.organism,
                baseline_bmf: reading.baseline,
                perturbed_bmf: reading.perturbed,
            })
            .collect();

        Self {
            waste,
            concentration,
            organisms,
        }
    }
}

// --- Traits ---
/// Renders a run report into a text representation.
pub trait Render {
    fn render(&self, report: &RunReport) -> Result<String, ReportError>;
}

/// Sends rendered output to a destination.
pub trait Sink {
    fn write(&mut self, data: &[u8]) -> Result<(), ReportError>;
}

// --- Implementations ---

/// The console prose from the presentation: waste volumes as sentences,
/// then old/new factor lines per organism.
pub struct ProseRender;

impl Render for ProseRender {
    fn render(&self, report: &RunReport) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(format!(
            "Our population produces {:.0} liters of plastic straw waste per year.",
            report.waste.annual_volume_l
        ));
        lines.push(format!(
            "{:.0} liters of that reach the open ocean, and {:.1} liters settle into the garbage patch.",
            report.waste.ocean_volume_l, report.waste.patch_volume_l
        ));
        lines.push(format!(
            "Patch concentration shifts from {} to {} L/km^2.",
            report.concentration.before_l_per_km2, report.concentration.after_l_per_km2
        ));

        for organism in &report.organisms {
            lines.push(format!(
                "Old {} BMF Value: {}",
                organism.name, organism.baseline_bmf
            ));
            lines.push(format!(
                "New {} BMF Value: {}",
                organism.name, organism.perturbed_bmf
            ));
            lines.push(format!(
                "{} BMF change: {:+.2}%",
                organism.name, organism.percent_change
            ));
        }

        Ok(lines.join("\n"))
    }
}

/// Machine-readable summary of the whole run.
pub struct JsonRender;

impl Render for JsonRender {
    fn render(&self, report: &RunReport) -> Result<String, ReportError> {
        let json = serde_json::to_string_pretty(report)?;
        Ok(json)
    }
}

/// Sends rendered text to standard output.
pub struct StdioSink {
    stdout: io::Stdout,
}

impl StdioSink {
    pub fn new() -> Self {
        StdioSink {
            stdout: io::stdout(),
        }
    }
}

impl Default for StdioSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StdioSink {
    fn write(&mut self, data: &[u8]) -> Result<(), ReportError> {
        self.stdout.write_all(data)?;
        self.stdout.write_all(b"\n")?; // Add newline for readability
        self.stdout.flush()?; // Ensure it's written immediately
        Ok(())
    }
}
