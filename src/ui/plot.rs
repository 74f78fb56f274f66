use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::data::filter::ChartSeries;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GDP line chart (central panel)
// ---------------------------------------------------------------------------

/// Render the line chart for the current filter state.
pub fn gdp_plot(ui: &mut Ui, state: &AppState) {
    ui.heading("GDP per Capita Over Time");

    let (range_start, _) = state.filter.year_range;

    Plot::new("gdp_plot")
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("GDP per Capita")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &state.series {
                let color = state.color_map.color_for(&series.country);
                for segment in segments(series, range_start) {
                    let line = Line::new(PlotPoints::from(segment))
                        .name(&series.country)
                        .color(color)
                        .width(1.5);
                    plot_ui.line(line);
                }
            }
        });
}

/// Split a series into contiguous non-null runs; null values become
/// visual gaps between line segments.
///
/// X is the year label parsed as a number, with the axis position as a
/// fallback for non-numeric labels.
fn segments(series: &ChartSeries, range_start: usize) -> Vec<Vec<[f64; 2]>> {
    let mut runs: Vec<Vec<[f64; 2]>> = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();

    for (i, point) in series.points.iter().enumerate() {
        match point.value {
            Some(value) => {
                let x = point
                    .year
                    .parse::<f64>()
                    .unwrap_or((range_start + i) as f64);
                current.push([x, value]);
            }
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::SeriesPoint;

    fn series(values: &[Option<f64>]) -> ChartSeries {
        ChartSeries {
            country: "A".to_string(),
            points: values
                .iter()
                .enumerate()
                .map(|(i, &value)| SeriesPoint {
                    year: (2000 + i).to_string(),
                    value,
                })
                .collect(),
        }
    }

    #[test]
    fn nulls_split_the_line_into_segments() {
        let s = series(&[Some(1.0), None, Some(3.0), Some(4.0)]);
        let runs = segments(&s, 0);
        assert_eq!(
            runs,
            vec![
                vec![[2000.0, 1.0]],
                vec![[2002.0, 3.0], [2003.0, 4.0]],
            ]
        );
    }

    #[test]
    fn all_null_series_draws_nothing() {
        let s = series(&[None, None]);
        assert!(segments(&s, 0).is_empty());
    }

    #[test]
    fn non_numeric_year_labels_fall_back_to_axis_position() {
        let s = ChartSeries {
            country: "A".to_string(),
            points: vec![
                SeriesPoint {
                    year: "Q1".to_string(),
                    value: Some(5.0),
                },
                SeriesPoint {
                    year: "Q2".to_string(),
                    value: Some(6.0),
                },
            ],
        };
        assert_eq!(segments(&s, 3), vec![vec![[3.0, 5.0], [4.0, 6.0]]]);
    }
}
