use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::summary::Summary;
use crate::fmt::currency;
use crate::state::AppState;
use crate::ui::{charts, table};

/// Shown in place of the mean when nothing matches.
const NO_DATA: &str = "No data";

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Metrics, charts and the transaction table for the current view.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let symbol = state.config.currency_symbol;
    let summary = &state.summary;

    metrics_row(ui, summary, symbol);
    ui.add_space(12.0);

    if summary.is_empty() {
        ui.label(
            RichText::new("No transactions match the selected filters.")
                .color(Color32::YELLOW),
        );
        return;
    }

    ui.columns(2, |cols: &mut [Ui]| {
        cols[0].heading("Spending by Category");
        cols[0].label("Category-wise Spending Distribution");
        charts::category_pie(&mut cols[0], summary, &state.category_colors, symbol);

        cols[1].heading("Payment Mode Analysis");
        cols[1].label("Spending by Payment Mode");
        charts::payment_bar(&mut cols[1], summary, &state.payment_colors);
    });
    ui.add_space(12.0);

    ui.heading("Monthly Spending Trend");
    ui.label("Daily Spending Trend");
    charts::daily_trend(ui, summary, symbol);
    ui.add_space(12.0);

    ui.heading("Transaction Details");
    table::transaction_table(ui, &state.view, symbol);
}

/// Four metric cards across the top.
fn metrics_row(ui: &mut Ui, summary: &Summary, symbol: &str) {
    let average = summary
        .average_amount
        .map(|avg| currency(avg, symbol))
        .unwrap_or_else(|| NO_DATA.to_string());

    let cards = [
        ("Total Expenses", currency(summary.total_amount, symbol)),
        ("Total Cashback", currency(summary.total_cashback, symbol)),
        ("Average Expense", average),
        ("Number of Transactions", summary.transaction_count.to_string()),
    ];

    ui.columns(cards.len(), |cols: &mut [Ui]| {
        for (col, (title, value)) in cols.iter_mut().zip(cards) {
            egui::Frame::group(col.style()).show(col, |ui: &mut Ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(title).weak());
                ui.label(RichText::new(value).size(24.0).strong());
            });
        }
    });
}
