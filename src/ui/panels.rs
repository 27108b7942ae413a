use eframe::egui::{self, Slider, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::outcome_color;
use crate::data::filter::{SiteSelection, filtered_indices};
use crate::state::{AppState, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP};

// ---------------------------------------------------------------------------
// Top bar – title and dataset summary
// ---------------------------------------------------------------------------

/// Render the top bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("SpaceX Launch Records Dashboard");
        ui.separator();
        ui.label(format!(
            "{} launches loaded, {} matching the current selection",
            state.dataset.len(),
            matching_indices(state).len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the controls panel: site dropdown and payload range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ui.strong("Launch Site");

    // Clone the options so we can mutate the selection inside the loop.
    let options = state.site_options.clone();
    let selected_label = options
        .iter()
        .find(|opt| opt.value == state.selected_site)
        .map(|opt| opt.label.clone())
        .unwrap_or_else(|| state.selected_site.clone());

    egui::ComboBox::from_id_salt("site_dropdown")
        .width(ui.available_width() * 0.9)
        .selected_text(selected_label)
        .show_ui(ui, |ui: &mut Ui| {
            for opt in &options {
                if ui
                    .selectable_label(state.selected_site == opt.value, &opt.label)
                    .clicked()
                {
                    state.selected_site = opt.value.clone();
                }
            }
        });

    ui.add_space(12.0);
    ui.strong("Payload range (Kg):");

    let [lo, hi] = &mut state.payload_range;
    ui.add(
        Slider::new(lo, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
            .step_by(PAYLOAD_SLIDER_STEP)
            .text("min"),
    );
    ui.add(
        Slider::new(hi, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
            .step_by(PAYLOAD_SLIDER_STEP)
            .text("max"),
    );
}

// ---------------------------------------------------------------------------
// Bottom panel – filtered launch records table
// ---------------------------------------------------------------------------

/// Render the table of launches matching the current site and payload
/// selection.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    let indices = matching_indices(state);

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Launch Site");
            });
            header.col(|ui| {
                ui.strong("Payload Mass (kg)");
            });
            header.col(|ui| {
                ui.strong("Booster");
            });
            header.col(|ui| {
                ui.strong("Outcome");
            });
        })
        .body(|body| {
            body.rows(18.0, indices.len(), |mut row| {
                let rec = &state.dataset.records[indices[row.index()]];
                row.col(|ui| {
                    ui.label(&rec.site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.0}", rec.payload_mass_kg));
                });
                row.col(|ui| {
                    ui.label(&rec.booster_category);
                });
                row.col(|ui| {
                    ui.colored_label(outcome_color(rec.outcome), rec.outcome.label());
                });
            });
        });
}

/// Row indices matching the current dropdown and slider values.
fn matching_indices(state: &AppState) -> Vec<usize> {
    let selection = SiteSelection::from_value(&state.selected_site);
    filtered_indices(&state.dataset, &selection, Some(state.payload_range))
}
