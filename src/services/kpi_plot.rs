use plotters::prelude::*;
use thiserror::Error;

use crate::domain::history::KpiHistory;
use crate::domain::sample::OeeFactors;

#[derive(Error, Debug)]
pub enum KpiPlotError {
    #[error("history is empty")]
    EmptyHistory,
    #[error("failed to render kpi plot: {0}")]
    Plot(String),
}

const MTTR_COLOR: RGBColor = RGBColor(204, 85, 30);
const MTBF_COLOR: RGBColor = RGBColor(30, 122, 204);
const COMPONENT_COLORS: [RGBColor; 3] = [
    RGBColor(90, 97, 189),
    RGBColor(113, 120, 223),
    RGBColor(156, 162, 239),
];

/// MTTR and MTBF lines over the whole history, labelled by time of day.
pub fn write_trend_png(output_path: &str, history: &KpiHistory) -> Result<(), KpiPlotError> {
    if history.is_empty() {
        return Err(KpiPlotError::EmptyHistory);
    }

    let labels: Vec<String> = history
        .timestamps()
        .map(|timestamp| timestamp.format("%H:%M:%S").to_string())
        .collect();
    let mttr: Vec<u32> = history.mttr().copied().collect();
    let mtbf: Vec<u32> = history.mtbf().copied().collect();

    let max_y = mttr
        .iter()
        .chain(mtbf.iter())
        .copied()
        .max()
        .unwrap_or(0)
        .saturating_add(2) as i32;
    let max_x = (labels.len() as i32 - 1).max(1);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| KpiPlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Maintenance KPIs", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0..max_y)
        .map_err(|e| KpiPlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Time")
        .y_desc("Hours")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(labels.len().clamp(1, 10))
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            labels.get(*index as usize).cloned().unwrap_or_default()
        })
        .draw()
        .map_err(|e| KpiPlotError::Plot(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            mttr.iter().enumerate().map(|(idx, hours)| (idx as i32, *hours as i32)),
            MTTR_COLOR.stroke_width(2),
        ))
        .map_err(|e| KpiPlotError::Plot(e.to_string()))?
        .label("MTTR")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MTTR_COLOR));

    chart
        .draw_series(LineSeries::new(
            mtbf.iter().enumerate().map(|(idx, hours)| (idx as i32, *hours as i32)),
            MTBF_COLOR.stroke_width(2),
        ))
        .map_err(|e| KpiPlotError::Plot(e.to_string()))?
        .label("MTBF")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MTBF_COLOR));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| KpiPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| KpiPlotError::Plot(e.to_string()))?;
    Ok(())
}

/// One bar per OEE factor, on a 0..100 percent axis.
pub fn write_oee_components_png(
    output_path: &str,
    factors: &OeeFactors,
) -> Result<(), KpiPlotError> {
    let components = [
        ("Quality", factors.quality),
        ("Performance", factors.performance),
        ("Availability", factors.availability),
    ];

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| KpiPlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("OEE Components (OEE {:.2}%)", factors.oee()),
            ("sans-serif", 30),
        )
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..components.len() as i32, 0.0..100.0)
        .map_err(|e| KpiPlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Component")
        .y_desc("Percent")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(components.len())
        .x_label_formatter(&|index| {
            components
                .get(*index as usize)
                .map(|(name, _)| name.to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| KpiPlotError::Plot(e.to_string()))?;

    chart
        .draw_series(components.iter().enumerate().map(|(idx, (_, value))| {
            let color = COMPONENT_COLORS[idx % COMPONENT_COLORS.len()];
            Rectangle::new(
                [(idx as i32, 0.0), (idx as i32 + 1, *value)],
                color.filled(),
            )
        }))
        .map_err(|e| KpiPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| KpiPlotError::Plot(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::at_time;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn write_trend_png_writes_file() {
        let history = KpiHistory::seeded(at_time(10, 0, 0), None);
        let output_file = assert_fs::NamedTempFile::new("trend.png").unwrap();

        write_trend_png(output_file.path().to_str().unwrap(), &history).unwrap();

        output_file.assert(predicate::path::exists());
        let metadata = std::fs::metadata(output_file.path()).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn write_trend_png_rejects_empty_history() {
        let output_file = assert_fs::NamedTempFile::new("empty.png").unwrap();

        let error = write_trend_png(output_file.path().to_str().unwrap(), &KpiHistory::new())
            .expect_err("expected empty history error");

        assert!(matches!(error, KpiPlotError::EmptyHistory));
    }

    #[test]
    fn write_oee_components_png_writes_file() {
        let factors = OeeFactors {
            quality: 91.0,
            performance: 88.5,
            availability: 79.0,
        };
        let output_file = assert_fs::NamedTempFile::new("oee.png").unwrap();

        write_oee_components_png(output_file.path().to_str().unwrap(), &factors).unwrap();

        output_file.assert(predicate::path::exists());
    }
}
