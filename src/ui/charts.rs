use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use chrono::{Datelike, NaiveDate};
use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{
    uniform_grid_spacer, Bar, BarChart, Legend, Line, Plot, PlotPoints, Points, Polygon,
};

use crate::color::ColorMap;
use crate::data::summary::Summary;
use crate::fmt::currency;

const CHART_HEIGHT: f32 = 320.0;

/// Vertices per full turn of the pie outline.
const ARC_STEPS: usize = 120;

/// Longest arc drawn as one polygon; keeps each piece convex for the fill.
const MAX_PIECE_SWEEP: f64 = FRAC_PI_2;

// ---------------------------------------------------------------------------
// Pie geometry
// ---------------------------------------------------------------------------

/// One category's wedge of the unit-circle pie.
#[derive(Debug, Clone)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Fraction of the positive total, in `(0, 1]`.
    pub share: f64,
    /// Convex polygons (centre plus arc) that together cover the wedge.
    pub pieces: Vec<Vec<[f64; 2]>>,
}

/// Lay out wedges clockwise from twelve o'clock in map order.
///
/// Only positive totals get a wedge; a map with no positive value yields no
/// slices.
pub fn pie_slices(totals: &BTreeMap<String, f64>) -> Vec<PieSlice> {
    let total: f64 = totals.values().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = FRAC_PI_2;
    let mut slices = Vec::new();
    for (label, &value) in totals {
        if value <= 0.0 {
            continue;
        }
        let share = value / total;
        let sweep = share * TAU;
        let n_pieces = (sweep / MAX_PIECE_SWEEP).ceil().max(1.0) as usize;
        let piece_sweep = sweep / n_pieces as f64;
        let steps = ((ARC_STEPS as f64 * share / n_pieces as f64).ceil() as usize).max(1);

        let pieces = (0..n_pieces)
            .map(|p| {
                let from = angle - piece_sweep * p as f64;
                let mut pts = Vec::with_capacity(steps + 2);
                pts.push([0.0, 0.0]);
                for k in 0..=steps {
                    let a = from - piece_sweep * k as f64 / steps as f64;
                    pts.push([a.cos(), a.sin()]);
                }
                pts
            })
            .collect();

        slices.push(PieSlice {
            label: label.clone(),
            value,
            share,
            pieces,
        });
        angle -= sweep;
    }
    slices
}

/// "Category-wise Spending Distribution".
pub fn category_pie(ui: &mut Ui, summary: &Summary, colors: &ColorMap, symbol: &str) {
    let slices = pie_slices(&summary.spending_by_category);
    if slices.is_empty() {
        ui.label("No positive spending to chart.");
        return;
    }

    Plot::new("category_pie")
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for slice in &slices {
                let color = colors.color_for(&slice.label);
                let name = format!(
                    "{}  {}  ({:.1}%)",
                    slice.label,
                    currency(slice.value, symbol),
                    slice.share * 100.0
                );
                for piece in &slice.pieces {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(piece.clone()))
                            .name(&name)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, color)),
                    );
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Payment mode bar chart
// ---------------------------------------------------------------------------

/// Label for a categorical axis tick; empty between bars and outside the range.
pub fn axis_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

/// "Spending by Payment Mode".
pub fn payment_bar(ui: &mut Ui, summary: &Summary, colors: &ColorMap) {
    let labels: Vec<String> = summary.spending_by_payment_mode.keys().cloned().collect();
    let bars: Vec<Bar> = summary
        .spending_by_payment_mode
        .iter()
        .enumerate()
        .map(|(i, (mode, &amount))| {
            Bar::new(i as f64, amount)
                .name(mode)
                .fill(colors.color_for(mode))
                .width(0.6)
        })
        .collect();

    Plot::new("payment_bar")
        .height(CHART_HEIGHT)
        .x_axis_label("Payment Mode")
        .y_axis_label("Amount Paid")
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark, _range| axis_label(&labels, mark.value))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Amount Paid"));
        });
}

// ---------------------------------------------------------------------------
// Daily trend line
// ---------------------------------------------------------------------------

pub fn day_to_x(day: NaiveDate) -> f64 {
    day.num_days_from_ce() as f64
}

/// Inverse of [`day_to_x`] for axis ticks; empty for non-integral positions.
pub fn x_to_day_label(x: f64) -> String {
    if (x - x.round()).abs() > 1e-6 {
        return String::new();
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// "Daily Spending Trend".
pub fn daily_trend(ui: &mut Ui, summary: &Summary, symbol: &str) {
    let points: Vec<[f64; 2]> = summary
        .spending_by_date
        .iter()
        .map(|(&day, &amount)| [day_to_x(day), amount])
        .collect();
    let symbol = symbol.to_string();

    Plot::new("daily_trend")
        .height(CHART_HEIGHT)
        .x_axis_label("Date")
        .y_axis_label("Amount Paid")
        .x_axis_formatter(|mark, _range| x_to_day_label(mark.value))
        .label_formatter(move |_name, point| {
            format!("{}\n{}", x_to_day_label(point.x.round()), currency(point.y, &symbol))
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::new(points.clone()))
                    .name("Amount Paid")
                    .color(Color32::LIGHT_BLUE)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::new(points))
                    .color(Color32::LIGHT_BLUE)
                    .radius(3.0),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn shares_cover_the_whole_pie() {
        let slices = pie_slices(&totals(&[("Food", 100.0), ("Rent", 300.0), ("Travel", 100.0)]));
        let shares: Vec<f64> = slices.iter().map(|s| s.share).collect();
        assert_eq!(shares, [0.2, 0.6, 0.2]);
        assert!((shares.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn non_positive_totals_get_no_wedge() {
        let slices = pie_slices(&totals(&[("Food", 50.0), ("Refund", -20.0), ("Zero", 0.0)]));
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, "Food");
        assert_eq!(slices[0].share, 1.0);

        assert!(pie_slices(&totals(&[("Refund", -5.0)])).is_empty());
        assert!(pie_slices(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn large_wedges_are_split_into_convex_pieces() {
        let whole = pie_slices(&totals(&[("Only", 10.0)]));
        assert_eq!(whole[0].pieces.len(), 4);

        let small = pie_slices(&totals(&[("A", 1.0), ("B", 9.0)]));
        assert_eq!(small[0].pieces.len(), 1);
        assert_eq!(small[1].pieces.len(), 4);
    }

    #[test]
    fn wedges_start_at_centre_and_stay_on_unit_circle() {
        for slice in pie_slices(&totals(&[("A", 3.0), ("B", 5.0), ("C", 2.0)])) {
            for piece in &slice.pieces {
                assert_eq!(piece[0], [0.0, 0.0]);
                for p in &piece[1..] {
                    let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
                    assert!((r - 1.0).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn first_wedge_starts_at_twelve_o_clock() {
        let slices = pie_slices(&totals(&[("A", 1.0), ("B", 1.0)]));
        let first = slices[0].pieces[0][1];
        assert!(first[0].abs() < 1e-9 && (first[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn axis_labels_only_on_bar_positions() {
        let labels = vec!["Card".to_string(), "Cash".to_string()];
        assert_eq!(axis_label(&labels, 0.0), "Card");
        assert_eq!(axis_label(&labels, 1.0), "Cash");
        assert_eq!(axis_label(&labels, 0.5), "");
        assert_eq!(axis_label(&labels, 2.0), "");
        assert_eq!(axis_label(&labels, -1.0), "");
    }

    #[test]
    fn day_axis_round_trips() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        assert_eq!(x_to_day_label(day_to_x(day)), "2024-03-12");
        assert_eq!(x_to_day_label(day_to_x(day) + 0.5), "");
    }
}
