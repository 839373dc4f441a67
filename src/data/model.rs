use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};

pub const DATE_COLUMN: &str = "Date";
pub const CATEGORY_COLUMN: &str = "Category";
pub const PAYMENT_MODE_COLUMN: &str = "Payment Mode";
pub const AMOUNT_COLUMN: &str = "Amount Paid";
pub const CASHBACK_COLUMN: &str = "Cashback";

// ---------------------------------------------------------------------------
// Field – one source column
// ---------------------------------------------------------------------------

/// A column of the source file. `Extra(i)` indexes [`Dataset::extra_columns`]
/// and [`Transaction::extra`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Category,
    PaymentMode,
    AmountPaid,
    Cashback,
    Extra(usize),
}

// ---------------------------------------------------------------------------
// Transaction – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single expense (one row of the source file).
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// When the expense happened. Date-only sources land on midnight.
    pub date: NaiveDateTime,
    pub category: String,
    pub payment_mode: String,
    pub amount_paid: f64,
    pub cashback: f64,
    /// Values of the non-required columns, aligned with [`Dataset::extra_columns`].
    pub extra: Vec<String>,
}

impl Transaction {
    /// Calendar day of the transaction, used for range filters and daily totals.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}

// ---------------------------------------------------------------------------
// Dataset – a loaded file or a filtered view of one
// ---------------------------------------------------------------------------

/// An ordered collection of transactions plus the label sets the filter
/// widgets offer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub transactions: Vec<Transaction>,
    /// Names of the source columns kept verbatim in [`Transaction::extra`].
    pub extra_columns: Vec<String>,
    /// Every column in source order.
    pub fields: Vec<Field>,
    /// Sorted distinct categories present in `transactions`.
    pub categories: BTreeSet<String>,
    /// Sorted distinct payment modes present in `transactions`.
    pub payment_modes: BTreeSet<String>,
}

impl Dataset {
    /// Build the label indices from the given rows. Columns are laid out as
    /// the five required ones followed by the extras; see [`Dataset::with_fields`].
    pub fn from_transactions(transactions: Vec<Transaction>, extra_columns: Vec<String>) -> Self {
        let mut categories = BTreeSet::new();
        let mut payment_modes = BTreeSet::new();
        for tx in &transactions {
            categories.insert(tx.category.clone());
            payment_modes.insert(tx.payment_mode.clone());
        }
        let fields = [
            Field::Date,
            Field::Category,
            Field::PaymentMode,
            Field::AmountPaid,
            Field::Cashback,
        ]
        .into_iter()
        .chain((0..extra_columns.len()).map(Field::Extra))
        .collect();
        Dataset {
            transactions,
            extra_columns,
            fields,
            categories,
            payment_modes,
        }
    }

    /// Replace the column order, e.g. with the header order of the source file.
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// Header text for a column.
    pub fn field_title(&self, field: Field) -> &str {
        match field {
            Field::Date => DATE_COLUMN,
            Field::Category => CATEGORY_COLUMN,
            Field::PaymentMode => PAYMENT_MODE_COLUMN,
            Field::AmountPaid => AMOUNT_COLUMN,
            Field::Cashback => CASHBACK_COLUMN,
            Field::Extra(i) => self.extra_columns.get(i).map_or("", String::as_str),
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Earliest and latest calendar day, or `None` for an empty dataset.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.transactions.first()?.day();
        Some(
            self.transactions
                .iter()
                .map(Transaction::day)
                .fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))),
        )
    }
}

// ---------------------------------------------------------------------------
// FilterCriteria – what the user selected
// ---------------------------------------------------------------------------

/// User-selected restrictions. `None` on a label field means "All".
/// Both date bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub category: Option<String>,
    pub payment_mode: Option<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
            category: None,
            payment_mode: None,
        }
    }
}

impl FilterCriteria {
    /// No label restriction, dates spanning everything observed in `dataset`.
    pub fn spanning(dataset: &Dataset) -> Self {
        match dataset.date_bounds() {
            Some((start, end)) => Self {
                start,
                end,
                ..Self::default()
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn tx(date: &str, category: &str, mode: &str, amount: f64, cashback: f64) -> Transaction {
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        Transaction {
            date: day.and_hms_opt(0, 0, 0).unwrap(),
            category: category.to_string(),
            payment_mode: mode.to_string(),
            amount_paid: amount,
            cashback,
            extra: Vec::new(),
        }
    }

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Food/Card on Jan 1 and Travel/Cash on Jan 2.
    pub fn two_rows() -> Dataset {
        Dataset::from_transactions(
            vec![
                tx("2024-01-01", "Food", "Card", 100.0, 5.0),
                tx("2024-01-02", "Travel", "Cash", 200.0, 0.0),
            ],
            Vec::new(),
        )
    }

    pub fn month() -> Dataset {
        Dataset::from_transactions(
            vec![
                tx("2024-03-05", "Groceries", "UPI", 420.5, 4.0),
                tx("2024-03-01", "Food", "Card", 150.0, 7.5),
                tx("2024-03-05", "Food", "Cash", 80.0, 0.0),
                tx("2024-03-12", "Travel", "Card", 1200.0, 60.0),
                tx("2024-03-12", "Groceries", "Card", 310.25, 0.0),
                tx("2024-03-20", "Bills", "Net Banking", 2250.0, 25.0),
                tx("2024-03-28", "Food", "UPI", 95.75, 1.0),
            ],
            Vec::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn indices_collect_distinct_labels() {
        let ds = month();
        let cats: Vec<&str> = ds.categories.iter().map(String::as_str).collect();
        assert_eq!(cats, ["Bills", "Food", "Groceries", "Travel"]);
        assert_eq!(ds.payment_modes.len(), 4);
    }

    #[test]
    fn default_layout_puts_extras_last() {
        let ds = Dataset::from_transactions(Vec::new(), vec!["Note".into()]);
        assert_eq!(ds.fields.len(), 6);
        assert_eq!(ds.fields[0], Field::Date);
        assert_eq!(ds.fields[5], Field::Extra(0));
        assert_eq!(ds.field_title(Field::Extra(0)), "Note");
        assert_eq!(ds.field_title(Field::PaymentMode), "Payment Mode");
        assert_eq!(ds.field_title(Field::Extra(3)), "");
    }

    #[test]
    fn date_bounds_ignore_row_order() {
        assert_eq!(month().date_bounds(), Some((date("2024-03-01"), date("2024-03-28"))));
        assert_eq!(Dataset::default().date_bounds(), None);
    }

    #[test]
    fn spanning_criteria_cover_observed_range() {
        let c = FilterCriteria::spanning(&two_rows());
        assert_eq!(c.start, date("2024-01-01"));
        assert_eq!(c.end, date("2024-01-02"));
        assert_eq!(c.category, None);
        assert_eq!(c.payment_mode, None);

        assert_eq!(FilterCriteria::spanning(&Dataset::default()), FilterCriteria::default());
    }
}
