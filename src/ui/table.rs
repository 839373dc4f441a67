use chrono::{NaiveDateTime, NaiveTime};
use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Dataset, Field, Transaction};
use crate::fmt::currency;

const ROW_HEIGHT: f32 = 20.0;

/// Midnight timestamps (date-only sources) print as a bare date.
pub fn display_date(date: NaiveDateTime) -> String {
    if date.time() == NaiveTime::MIN {
        date.format("%Y-%m-%d").to_string()
    } else {
        date.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Display text of one cell; amounts get the currency format.
pub fn cell_text(tx: &Transaction, field: Field, symbol: &str) -> String {
    match field {
        Field::Date => display_date(tx.date),
        Field::Category => tx.category.clone(),
        Field::PaymentMode => tx.payment_mode.clone(),
        Field::AmountPaid => currency(tx.amount_paid, symbol),
        Field::Cashback => currency(tx.cashback, symbol),
        Field::Extra(i) => tx.extra.get(i).cloned().unwrap_or_default(),
    }
}

/// "Transaction Details": every row of the view, columns in source order.
pub fn transaction_table(ui: &mut Ui, view: &Dataset, symbol: &str) {
    let fields = &view.fields;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(420.0)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(80.0).clip(true), fields.len())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for &field in fields {
                header.col(|ui| {
                    ui.strong(view.field_title(field));
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, view.len(), |mut row| {
                let tx = &view.transactions[row.index()];
                for &field in fields {
                    row.col(|ui| {
                        ui.label(cell_text(tx, field, symbol));
                    });
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn date_only_rows_hide_the_time() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(display_date(day.and_hms_opt(0, 0, 0).unwrap()), "2024-05-01");
        assert_eq!(display_date(day.and_hms_opt(9, 5, 0).unwrap()), "2024-05-01 09:05:00");
    }

    #[test]
    fn cells_follow_field_kind() {
        let tx = Transaction {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
            category: "Food".into(),
            payment_mode: "UPI".into(),
            amount_paid: 1234.5,
            cashback: 12.0,
            extra: vec!["lunch".into()],
        };
        let cells: Vec<String> = [
            Field::Extra(0),
            Field::Date,
            Field::AmountPaid,
            Field::Category,
            Field::Cashback,
            Field::PaymentMode,
            Field::Extra(7),
        ]
        .into_iter()
        .map(|f| cell_text(&tx, f, "₹"))
        .collect();
        assert_eq!(
            cells,
            ["lunch", "2024-05-01", "₹1,234.50", "Food", "₹12.00", "UPI", ""]
        );
    }
}
