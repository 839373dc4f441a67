use std::collections::BTreeSet;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::config::{ERROR_HINT, PAGE_HEADING};
use crate::state::AppState;

/// Combo-box entry meaning "no restriction".
const ALL_LABEL: &str = "All";

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel. Any widget change recomputes the view once.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = state.dataset.clone() else {
        ui.label("No dataset loaded.");
        return;
    };
    if dataset.is_empty() {
        ui.label("The file has no transactions.");
        return;
    }

    let mut changed = false;

    ui.strong("Select Date Range");
    egui::Grid::new("date_range").num_columns(2).show(ui, |ui: &mut Ui| {
        ui.label("From");
        changed |= ui
            .add(DatePickerButton::new(&mut state.criteria.start).id_salt("date_start"))
            .changed();
        ui.end_row();

        ui.label("To");
        changed |= ui
            .add(DatePickerButton::new(&mut state.criteria.end).id_salt("date_end"))
            .changed();
        ui.end_row();
    });
    if state.criteria.start > state.criteria.end {
        ui.label(RichText::new("Start date is after end date.").color(Color32::YELLOW));
    }
    ui.add_space(8.0);

    ui.strong("Select Category");
    changed |= label_selector(ui, "category", &mut state.criteria.category, &dataset.categories);
    ui.add_space(8.0);

    ui.strong("Select Payment Mode");
    changed |= label_selector(
        ui,
        "payment_mode",
        &mut state.criteria.payment_mode,
        &dataset.payment_modes,
    );
    ui.add_space(8.0);

    ui.separator();
    if ui.button("Reset").clicked() {
        state.reset_filters();
    } else if changed {
        state.refilter();
    }
}

/// Combo box offering "All" followed by every label; returns whether the
/// selection changed.
fn label_selector(
    ui: &mut Ui,
    id: &str,
    selected: &mut Option<String>,
    labels: &BTreeSet<String>,
) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.as_deref().unwrap_or(ALL_LABEL))
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            changed |= ui.selectable_value(selected, None, ALL_LABEL).changed();
            for label in labels {
                changed |= ui
                    .selectable_value(selected, Some(label.clone()), label.as_str())
                    .changed();
            }
        });
    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title row with load / match counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(PAGE_HEADING);
        ui.separator();
        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} transactions loaded, {} shown",
                ds.len(),
                state.view.len()
            ));
        }
    });
}

// ---------------------------------------------------------------------------
// Error banner
// ---------------------------------------------------------------------------

/// Red message plus the static location/format hint. Returns `true` when
/// the user asked to retry the load.
pub fn error_banner(ui: &mut Ui, message: &str) -> bool {
    let mut retry = false;
    egui::Frame::group(ui.style())
        .fill(Color32::from_rgb(60, 20, 20))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(message).color(Color32::RED).strong());
            ui.label(RichText::new(ERROR_HINT).color(Color32::RED));
            ui.add_space(4.0);
            retry = ui.button("Retry").clicked();
        });
    retry
}
