use crate::color::ColorMap;
use crate::data::filter::{chart_series, ChartSeries, FilterState};
use crate::data::model::GdpDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Dataset loaded at startup; never mutated afterwards.
    pub dataset: GdpDataset,

    /// Current country selection and year range.
    pub filter: FilterState,

    /// Series for the current filter (cached between interactions).
    pub series: Vec<ChartSeries>,

    /// One colour per country, stable across filter changes.
    pub color_map: ColorMap,

    /// Search text for the country picker.
    pub search: String,

    /// Error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state for a freshly loaded dataset: full year range, no
    /// country restriction.
    pub fn new(dataset: GdpDataset) -> Self {
        let filter = FilterState::full(&dataset);
        let color_map = ColorMap::new(&dataset.countries);
        let mut state = AppState {
            dataset,
            filter,
            series: Vec::new(),
            color_map,
            search: String::new(),
            status_message: None,
        };
        state.refilter();
        state
    }

    /// Recompute the cached series after a filter change.
    ///
    /// A range error means the control layer handed over a malformed
    /// filter; the previous series stays on screen and the failure is
    /// surfaced instead of masked.
    pub fn refilter(&mut self) {
        match chart_series(&self.dataset, &self.filter) {
            Ok(series) => {
                self.series = series;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("filter evaluation failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Toggle one country in the selection.
    pub fn toggle_country(&mut self, country: &str) {
        if !self.filter.countries.remove(country) {
            self.filter.countries.insert(country.to_string());
        }
        self.refilter();
    }

    /// Select every country explicitly.
    pub fn select_all(&mut self) {
        self.filter.countries = self.dataset.countries.iter().cloned().collect();
        self.refilter();
    }

    /// Empty the selection (empty set = show all countries).
    pub fn clear_selection(&mut self) {
        self.filter.countries.clear();
        self.refilter();
    }

    /// Move the year range.  Indices are clamped to the axis and ordered,
    /// so a stored range is always valid.
    pub fn set_year_range(&mut self, low: usize, high: usize) {
        let max = self.dataset.years.len().saturating_sub(1);
        let low = low.min(max);
        let high = high.min(max);
        self.filter.year_range = (low.min(high), low.max(high));
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(GdpDataset::from_wide(
            vec!["2000".to_string(), "2001".to_string(), "2002".to_string()],
            vec![
                ("A".to_string(), vec![Some(100.0), None, Some(300.0)]),
                ("B".to_string(), vec![Some(50.0), Some(60.0), Some(70.0)]),
            ],
        ))
    }

    #[test]
    fn fresh_state_shows_every_country_over_the_full_range() {
        let state = state();
        assert_eq!(state.filter.year_range, (0, 2));
        assert!(state.filter.countries.is_empty());
        assert_eq!(state.series.len(), 2);
    }

    #[test]
    fn toggling_a_country_recomputes_the_series() {
        let mut state = state();
        state.toggle_country("A");
        assert_eq!(state.series.len(), 1);
        assert_eq!(state.series[0].country, "A");

        state.toggle_country("A");
        assert_eq!(state.series.len(), 2);
    }

    #[test]
    fn year_range_is_clamped_and_ordered() {
        let mut state = state();
        state.set_year_range(2, 0);
        assert_eq!(state.filter.year_range, (0, 2));

        state.set_year_range(1, 99);
        assert_eq!(state.filter.year_range, (1, 2));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn select_all_then_clear_show_the_same_chart() {
        let mut state = state();
        state.select_all();
        let explicit = state.series.clone();
        state.clear_selection();
        assert_eq!(state.series, explicit);
    }
}
