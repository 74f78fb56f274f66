use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::error::InvalidRangeError;
use super::model::GdpDataset;

// ---------------------------------------------------------------------------
// Filter state: country selection + year-index range
// ---------------------------------------------------------------------------

/// Current user selection.
///
/// An empty country set means "no restriction": the picker starts empty
/// and the chart shows every country.  Unknown names in the set simply
/// match nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub countries: BTreeSet<String>,
    /// Inclusive index pair into the year axis.  The range control keeps
    /// `low <= high`.
    pub year_range: (usize, usize),
}

impl FilterState {
    /// Full year range, no country restriction.
    pub fn full(dataset: &GdpDataset) -> Self {
        FilterState {
            countries: BTreeSet::new(),
            year_range: (0, dataset.years.len().saturating_sub(1)),
        }
    }
}

// ---------------------------------------------------------------------------
// Chart series construction
// ---------------------------------------------------------------------------

/// One line of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub country: String,
    /// One entry per year inside the selected range, in axis order.
    /// Null values are kept and render as gaps.
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub year: String,
    pub value: Option<f64>,
}

/// Apply the country and year-range filters and group the survivors into
/// one series per country, ordered alphabetically.
///
/// * An empty country set passes every country.
/// * `low == high` selects exactly that one year.
/// * Indices past the end of the year axis are an [`InvalidRangeError`];
///   a well-behaved range control never produces them.
pub fn chart_series(
    dataset: &GdpDataset,
    filter: &FilterState,
) -> Result<Vec<ChartSeries>, InvalidRangeError> {
    let (low, high) = filter.year_range;
    let axis_len = dataset.years.len();
    if low >= axis_len || high >= axis_len {
        return Err(InvalidRangeError {
            low,
            high,
            axis_len,
        });
    }

    let year_pos: HashMap<&str, usize> = dataset
        .years
        .iter()
        .enumerate()
        .map(|(pos, year)| (year.as_str(), pos))
        .collect();

    // country → year position → value
    let mut grouped: BTreeMap<&str, BTreeMap<usize, Option<f64>>> = BTreeMap::new();
    for obs in &dataset.observations {
        if !filter.countries.is_empty() && !filter.countries.contains(&obs.country) {
            continue;
        }
        let Some(&pos) = year_pos.get(obs.year.as_str()) else {
            continue;
        };
        if pos < low || pos > high {
            continue;
        }
        grouped
            .entry(obs.country.as_str())
            .or_default()
            .insert(pos, obs.value);
    }

    Ok(grouped
        .into_iter()
        .map(|(country, points)| ChartSeries {
            country: country.to_string(),
            points: points
                .into_iter()
                .map(|(pos, value)| SeriesPoint {
                    year: dataset.years[pos].clone(),
                    value,
                })
                .collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> GdpDataset {
        GdpDataset::from_wide(
            vec!["2000".to_string(), "2001".to_string(), "2002".to_string()],
            vec![
                ("A".to_string(), vec![Some(100.0), None, Some(300.0)]),
                ("B".to_string(), vec![Some(50.0), Some(60.0), Some(70.0)]),
            ],
        )
    }

    fn select(countries: &[&str], range: (usize, usize)) -> FilterState {
        FilterState {
            countries: countries.iter().map(|c| c.to_string()).collect(),
            year_range: range,
        }
    }

    #[test]
    fn empty_selection_means_all_countries() {
        let ds = dataset();
        let series = chart_series(&ds, &FilterState::full(&ds)).unwrap();
        let names: Vec<&str> = series.iter().map(|s| s.country.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        for s in &series {
            assert_eq!(s.points.len(), 3);
        }
    }

    #[test]
    fn single_year_range_yields_one_point_per_country() {
        let ds = dataset();
        let series = chart_series(&ds, &select(&[], (1, 1))).unwrap();
        assert_eq!(series.len(), 2);
        for s in &series {
            assert_eq!(s.points.len(), 1);
            assert_eq!(s.points[0].year, "2001");
        }
    }

    #[test]
    fn unknown_country_matches_nothing() {
        let ds = dataset();
        let series = chart_series(&ds, &select(&["Nonexistent"], (0, 2))).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn country_and_range_filters_compose() {
        let ds = dataset();
        let series = chart_series(&ds, &select(&["A"], (0, 1))).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].country, "A");
        assert_eq!(
            series[0].points,
            vec![
                SeriesPoint {
                    year: "2000".to_string(),
                    value: Some(100.0)
                },
                SeriesPoint {
                    year: "2001".to_string(),
                    value: None
                },
            ]
        );
    }

    #[test]
    fn null_values_stay_in_the_series() {
        let ds = dataset();
        let series = chart_series(&ds, &select(&["A"], (0, 2))).unwrap();
        let values: Vec<Option<f64>> = series[0].points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![Some(100.0), None, Some(300.0)]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let ds = dataset();
        let filter = select(&["A", "B"], (0, 2));
        let first = chart_series(&ds, &filter).unwrap();
        let second = chart_series(&ds, &filter).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_bounds_range_is_an_error() {
        let ds = dataset();
        let err = chart_series(&ds, &select(&[], (0, 3))).unwrap_err();
        assert_eq!(
            err,
            InvalidRangeError {
                low: 0,
                high: 3,
                axis_len: 3
            }
        );
    }
}
