use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::error::DataSourceError;
use super::model::{
    Dataset, Field, Transaction, AMOUNT_COLUMN, CASHBACK_COLUMN, CATEGORY_COLUMN, DATE_COLUMN,
    PAYMENT_MODE_COLUMN,
};

const REQUIRED_COLUMNS: [(&str, Field); 5] = [
    (DATE_COLUMN, Field::Date),
    (CATEGORY_COLUMN, Field::Category),
    (PAYMENT_MODE_COLUMN, Field::PaymentMode),
    (AMOUNT_COLUMN, Field::AmountPaid),
    (CASHBACK_COLUMN, Field::Cashback),
];

const YEAR_FIRST_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const MONTH_FIRST_FORMATS: [&str; 2] = ["%m/%d/%Y", "%m-%d-%Y"];
const DAY_FIRST_FORMATS: [&str; 2] = ["%d/%m/%Y", "%d-%m-%Y"];
const TIME_FORMATS: [&str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

/// Process-lifetime memo for the source file.
///
/// The first successful [`DatasetCache::get`] reads the file; every later call
/// hands back the same `Arc` without touching the disk. Failures are not
/// remembered, so a later call tries the file again.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    dataset: Option<Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dataset: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&mut self) -> Result<Arc<Dataset>, DataSourceError> {
        if let Some(ds) = &self.dataset {
            log::debug!("dataset cache hit for {}", self.path.display());
            return Ok(Arc::clone(ds));
        }
        let ds = Arc::new(load_csv(&self.path)?);
        log::info!(
            "Loaded {} transactions from {} (extra columns {:?})",
            ds.len(),
            self.path.display(),
            ds.extra_columns
        );
        self.dataset = Some(Arc::clone(&ds));
        Ok(ds)
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with at least `Date`, `Category`, `Payment Mode`,
/// `Amount Paid` and `Cashback`, in any order. Other columns are kept as text.
pub fn load_csv(path: &Path) -> Result<Dataset, DataSourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| DataSourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let read_err = |source: csv::Error| DataSourceError::Read {
        path: path.to_path_buf(),
        source,
    };

    let headers: Vec<String> = reader
        .headers()
        .map_err(read_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut required = [0usize; 5];
    for (slot, (name, _)) in required.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataSourceError::MissingColumn(name))?;
    }
    let [date_idx, category_idx, mode_idx, amount_idx, cashback_idx] = required;

    let mut extra_idx = Vec::new();
    let mut fields = Vec::with_capacity(headers.len());
    for i in 0..headers.len() {
        match required.iter().position(|&r| r == i) {
            Some(k) => fields.push(REQUIRED_COLUMNS[k].1),
            None => {
                fields.push(Field::Extra(extra_idx.len()));
                extra_idx.push(i);
            }
        }
    }
    let extra_columns: Vec<String> = extra_idx.iter().map(|&i| headers[i].clone()).collect();

    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_err)?;
    let order = DateOrder::infer(records.iter().map(|r| r.get(date_idx).unwrap_or("")));
    log::debug!("{}: reading slash/dash dates as {order:?}", path.display());

    let mut transactions = Vec::with_capacity(records.len());

    for (i, record) in records.iter().enumerate() {
        let row = i + 1;
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let raw_date = field(date_idx);
        let date = parse_date(raw_date, order).ok_or_else(|| DataSourceError::InvalidDate {
            row,
            value: raw_date.to_string(),
        })?;

        transactions.push(Transaction {
            date,
            category: field(category_idx).to_string(),
            payment_mode: field(mode_idx).to_string(),
            amount_paid: parse_amount(field(amount_idx), row, AMOUNT_COLUMN)?,
            cashback: parse_amount(field(cashback_idx), row, CASHBACK_COLUMN)?,
            extra: extra_idx.iter().map(|&idx| field(idx).to_string()).collect(),
        });
    }

    Ok(Dataset::from_transactions(transactions, extra_columns).with_fields(fields))
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// How to read dates whose year comes last (`01/02/2024`, `01-02-2024`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateOrder {
    MonthFirst,
    DayFirst,
}

impl DateOrder {
    /// Decided once per file: day-first as soon as one year-last value leads
    /// with a number above 12, month-first otherwise.
    fn infer<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let day_first = values.into_iter().any(|v| {
            let lead = v.split(['/', '-']).next().unwrap_or("");
            lead.len() <= 2 && lead.parse::<u32>().is_ok_and(|n| n > 12)
        });
        if day_first {
            DateOrder::DayFirst
        } else {
            DateOrder::MonthFirst
        }
    }

    fn formats(self) -> [&'static str; 2] {
        match self {
            DateOrder::MonthFirst => MONTH_FIRST_FORMATS,
            DateOrder::DayFirst => DAY_FIRST_FORMATS,
        }
    }
}

/// A date in one of the accepted layouts, optionally followed by a time
/// separated by a space or `T`. A bare date is midnight.
fn parse_date(s: &str, order: DateOrder) -> Option<NaiveDateTime> {
    let (date_part, time_part) = match s.split_once([' ', 'T']) {
        Some((d, t)) => (d, Some(t.trim_start())),
        None => (s, None),
    };

    let date = YEAR_FIRST_FORMATS
        .into_iter()
        .chain(order.formats())
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())?;

    let time = match time_part {
        None => NaiveTime::MIN,
        Some(t) => TIME_FORMATS
            .into_iter()
            .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())?,
    };
    Some(date.and_time(time))
}

fn parse_amount(s: &str, row: usize, column: &'static str) -> Result<f64, DataSourceError> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DataSourceError::InvalidAmount {
            row,
            column,
            value: s.to_string(),
        })
}
