//! SVG bar chart of per-organism BMF percent change.

use std::fmt::Display;
use std::path::Path;

use plotters::prelude::*;

use crate::{OrganismChange, ReportError};

fn to_chart_err<E: Display>(err: E) -> ReportError {
    ReportError::Chart(err.to_string())
}

/// Renders one bar per organism, organism names on the category axis and
/// percent change on the value axis.
pub fn render_bar_chart(path: &Path, organisms: &[OrganismChange]) -> Result<(), ReportError> {
    if organisms.is_empty() {
        return Err(ReportError::Chart("no organisms to chart".to_string()));
    }

    let root = SVGBackend::new(path, (640, 480)).into_drawing_area();
    root.fill(&WHITE).map_err(to_chart_err)?;

    let y_min = organisms
        .iter()
        .map(|o| o.percent_change)
        .fold(0.0_f64, f64::min);
    let mut y_max = organisms
        .iter()
        .map(|o| o.percent_change)
        .fold(0.0_f64, f64::max);
    if y_min == y_max {
        // All-zero changes still need a drawable range.
        y_max = y_min + 1.0;
    }
    let headroom = (y_max - y_min) * 0.1;

    let labels: Vec<&str> = organisms.iter().map(|o| o.name.as_str()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption("Change in biomagnification factor (%)", ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d(
            (0u32..organisms.len() as u32).into_segmented(),
            (y_min - headroom)..(y_max + headroom),
        )
        .map_err(to_chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(index) => labels
                .get(*index as usize)
                .copied()
                .unwrap_or("")
                .to_string(),
            _ => String::new(),
        })
        .y_desc("percent change")
        .draw()
        .map_err(to_chart_err)?;

    chart
        .draw_series(organisms.iter().enumerate().map(|(index, organism)| {
            let left = SegmentValue::Exact(index as u32);
            let right = SegmentValue::Exact(index as u32 + 1);
            Rectangle::new([(left, 0.0), (right, organism.percent_change)], BLUE.filled())
        }))
        .map_err(to_chart_err)?;

    root.present().map_err(to_chart_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_svg_with_the_organism_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let organisms = vec![
            OrganismChange {
                name: "Dugong".to_string(),
                baseline_bmf: 20.0,
                perturbed_bmf: 26.0,
                percent_change: 30.0,
            },
            OrganismChange {
                name: "Tiger Shark".to_string(),
                baseline_bmf: 12.2,
                perturbed_bmf: 14.2,
                percent_change: 16.5,
            },
        ];

        render_bar_chart(&path, &organisms).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Dugong"));
        assert!(svg.contains("Tiger Shark"));
    }

    #[test]
    fn empty_organism_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let result = render_bar_chart(&path, &[]);
        assert!(matches!(result, Err(ReportError::Chart(_))));
    }
}
