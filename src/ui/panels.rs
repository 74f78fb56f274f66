use eframe::egui::{self, Align2, Color32, FontId, RichText, ScrollArea, Sense, Slider, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – year range + country picker
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    year_range_control(ui, state);
    ui.separator();
    country_picker(ui, state);
}

/// Low/high sliders over year-axis positions.  The moved handle is
/// clamped against the other, so `low <= high` always holds.
fn year_range_control(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Years");

    let max_idx = state.dataset.years.len().saturating_sub(1);
    let (mut low, mut high) = state.filter.year_range;

    let years = &state.dataset.years;
    let low_response = ui.add(
        Slider::new(&mut low, 0..=max_idx)
            .custom_formatter(|v, _| years[(v as usize).min(max_idx)].clone())
            .text("from"),
    );
    if low_response.changed() {
        low = low.min(high);
    }

    let high_response = ui.add(
        Slider::new(&mut high, 0..=max_idx)
            .custom_formatter(|v, _| years[(v as usize).min(max_idx)].clone())
            .text("to"),
    );
    if high_response.changed() {
        high = high.max(low);
    }

    mark_row(ui, years);

    if low_response.changed() || high_response.changed() {
        state.set_year_range(low, high);
    }
}

/// Axis marks under the sliders: every 100th year position is labelled.
fn mark_row(ui: &mut Ui, years: &[String]) {
    if years.len() < 2 {
        return;
    }
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 14.0), Sense::hover());
    let span = (years.len() - 1) as f32;
    for (idx, year) in years.iter().enumerate().step_by(100) {
        let x = rect.left() + rect.width() * idx as f32 / span;
        ui.painter().text(
            egui::pos2(x, rect.top()),
            Align2::CENTER_TOP,
            year,
            FontId::proportional(10.0),
            ui.visuals().weak_text_color(),
        );
    }
}

/// Scrollable multi-select over the country list.
fn country_picker(ui: &mut Ui, state: &mut AppState) {
    let n_selected = state.filter.countries.len();
    let n_total = state.dataset.countries.len();
    ui.strong(format!("Countries  ({n_selected}/{n_total})"));
    ui.label(RichText::new("empty selection = all countries").weak().small());

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("Clear").clicked() {
            state.clear_selection();
        }
        ui.add(egui::TextEdit::singleline(&mut state.search).hint_text("search"));
    });

    // Clone what we need so we can mutate state inside the loop.
    let countries = state.dataset.countries.clone();
    let query = state.search.to_lowercase();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for country in &countries {
                if !query.is_empty() && !country.to_lowercase().contains(&query) {
                    continue;
                }
                let mut checked = state.filter.countries.contains(country);
                let text = RichText::new(country).color(state.color_map.color_for(country));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_country(country);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: dataset summary and status line.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("GDP Viewer").strong());
        ui.separator();
        ui.label(format!(
            "{} countries × {} years loaded, {} lines shown",
            state.dataset.countries.len(),
            state.dataset.years.len(),
            state.series.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
