use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::model::Dataset;

/// Scalar metrics and grouped totals over one filtered view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub total_amount: f64,
    pub total_cashback: f64,
    /// Mean of `amount_paid`; `None` when the view has no rows.
    pub average_amount: Option<f64>,
    pub transaction_count: usize,
    pub spending_by_category: BTreeMap<String, f64>,
    pub spending_by_payment_mode: BTreeMap<String, f64>,
    /// Daily totals, ascending by date.
    pub spending_by_date: BTreeMap<NaiveDate, f64>,
}

impl Summary {
    pub fn from_view(view: &Dataset) -> Self {
        let mut summary = Summary {
            transaction_count: view.len(),
            ..Summary::default()
        };

        for tx in &view.transactions {
            summary.total_amount += tx.amount_paid;
            summary.total_cashback += tx.cashback;
            *summary
                .spending_by_category
                .entry(tx.category.clone())
                .or_insert(0.0) += tx.amount_paid;
            *summary
                .spending_by_payment_mode
                .entry(tx.payment_mode.clone())
                .or_insert(0.0) += tx.amount_paid;
            *summary.spending_by_date.entry(tx.day()).or_insert(0.0) += tx.amount_paid;
        }

        if summary.transaction_count > 0 {
            summary.average_amount = Some(summary.total_amount / summary.transaction_count as f64);
        }
        summary
    }

    /// No rows matched; the UI shows a notice instead of charts.
    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }
}
