use super::model::{Dataset, FilterCriteria, Transaction};

// ---------------------------------------------------------------------------
// Row predicate
// ---------------------------------------------------------------------------

/// Whether a transaction passes every restriction in `criteria`.
///
/// * day within `start..=end` (an inverted range matches nothing)
/// * `category` is `None` or equal to the transaction's category
/// * `payment_mode` is `None` or equal to the transaction's payment mode
pub fn matches(tx: &Transaction, criteria: &FilterCriteria) -> bool {
    let day = tx.day();
    if day < criteria.start || day > criteria.end {
        return false;
    }
    if let Some(category) = &criteria.category {
        if tx.category != *category {
            return false;
        }
    }
    if let Some(mode) = &criteria.payment_mode {
        if tx.payment_mode != *mode {
            return false;
        }
    }
    true
}

/// Return a new dataset holding the rows of `dataset` that match, in their
/// original order. The input is left untouched.
pub fn filter(dataset: &Dataset, criteria: &FilterCriteria) -> Dataset {
    let rows = dataset
        .transactions
        .iter()
        .filter(|tx| matches(tx, criteria))
        .cloned()
        .collect();
    Dataset::from_transactions(rows, dataset.extra_columns.clone())
        .with_fields(dataset.fields.clone())
}
