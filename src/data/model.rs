use std::cmp::Ordering;
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Observation – one row of the long-form table
// ---------------------------------------------------------------------------

/// A single (country, year) measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub country: String,
    /// Year label exactly as it appears in the source header, e.g. "1985".
    pub year: String,
    /// `None` when the source cell was blank or not numeric.
    pub value: Option<f64>,
}

// ---------------------------------------------------------------------------
// GdpDataset – the complete reshaped dataset
// ---------------------------------------------------------------------------

/// The full reshaped dataset. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct GdpDataset {
    /// Ordered year labels from the source header (country column excluded).
    pub years: Vec<String>,
    /// Long-form table, sorted by value ascending with nulls last.
    /// Always `countries.len() * years.len()` entries.
    pub observations: Vec<Observation>,
    /// Distinct country names, alphabetical.
    pub countries: Vec<String>,
}

impl GdpDataset {
    /// Reshape wide rows into the long-form dataset.
    ///
    /// `rows` holds one `(country, cells)` pair per source row with
    /// `cells.len() == years.len()`; the loader validates both before
    /// calling this.
    pub fn from_wide(years: Vec<String>, rows: Vec<(String, Vec<Option<f64>>)>) -> Self {
        let mut observations = Vec::with_capacity(rows.len() * years.len());
        let mut countries: BTreeSet<String> = BTreeSet::new();

        for (country, cells) in rows {
            for (year, value) in years.iter().zip(cells) {
                observations.push(Observation {
                    country: country.clone(),
                    year: year.clone(),
                    value,
                });
            }
            countries.insert(country);
        }

        // Value-ascending order keeps line layering reproducible between
        // runs. `sort_by` is stable, so ties keep row-major order.
        observations.sort_by(|a, b| cmp_value(a.value, b.value));

        GdpDataset {
            years,
            observations,
            countries: countries.into_iter().collect(),
        }
    }
}

/// Ascending order with nulls last, matching how the source data treats
/// missing measurements.
fn cmp_value(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reshape_emits_one_observation_per_cell() {
        let ds = GdpDataset::from_wide(
            years(&["2000", "2001", "2002"]),
            vec![
                ("B".to_string(), vec![Some(50.0), Some(60.0), Some(70.0)]),
                ("A".to_string(), vec![Some(100.0), None, Some(300.0)]),
            ],
        );
        assert_eq!(ds.observations.len(), 2 * 3);
        assert_eq!(ds.years, years(&["2000", "2001", "2002"]));
        // Countries come out alphabetical regardless of row order.
        assert_eq!(ds.countries, vec!["A", "B"]);
    }

    #[test]
    fn null_cells_are_kept_not_dropped() {
        let ds = GdpDataset::from_wide(
            years(&["2000", "2001"]),
            vec![("A".to_string(), vec![None, Some(1.0)])],
        );
        let gap = ds.observations.iter().find(|o| o.year == "2000").unwrap();
        assert_eq!(gap.value, None);
    }

    #[test]
    fn observations_sorted_by_value_with_nulls_last() {
        let ds = GdpDataset::from_wide(
            years(&["2000", "2001", "2002"]),
            vec![
                ("A".to_string(), vec![Some(300.0), None, Some(100.0)]),
                ("B".to_string(), vec![Some(70.0), Some(50.0), Some(60.0)]),
            ],
        );
        let values: Vec<Option<f64>> = ds.observations.iter().map(|o| o.value).collect();
        assert_eq!(
            values,
            vec![
                Some(50.0),
                Some(60.0),
                Some(70.0),
                Some(100.0),
                Some(300.0),
                None
            ]
        );
    }
}
