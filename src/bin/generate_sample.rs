use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// One row of the generated file, in the column layout the dashboard reads.
#[derive(Serialize)]
struct ExpenseRow<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Payment Mode")]
    payment_mode: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount Paid")]
    amount_paid: f64,
    #[serde(rename = "Cashback")]
    cashback: f64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// (category, typical low, typical high, descriptions)
const CATEGORIES: [(&str, f64, f64, &[&str]); 7] = [
    ("Food", 80.0, 900.0, &["Lunch", "Dinner out", "Coffee", "Snacks"]),
    ("Groceries", 300.0, 3500.0, &["Supermarket", "Vegetables", "Dairy"]),
    ("Transportation", 40.0, 600.0, &["Cab", "Metro card", "Fuel"]),
    ("Bills", 500.0, 4000.0, &["Electricity", "Internet", "Mobile recharge"]),
    ("Entertainment", 150.0, 2000.0, &["Movie", "Concert", "Streaming"]),
    ("Investment", 1000.0, 10000.0, &["Mutual fund SIP", "Stocks"]),
    ("Subscriptions", 99.0, 999.0, &["Music", "Cloud storage", "News"]),
];

const PAYMENT_MODES: [&str; 4] = ["Cash", "Debit Card", "Credit Card", "UPI"];

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "monthly_expenses.csv";
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).context("invalid start date")?;

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut rows = 0usize;
    for day in 0..366u64 {
        let date = start
            .checked_add_days(Days::new(day))
            .context("date out of range")?;

        // 0-3 expenses per day
        let n = (rng.next_u64() % 4) as usize;
        for _ in 0..n {
            let (category, lo, hi, descriptions) = *rng.pick(&CATEGORIES);
            let payment_mode = *rng.pick(&PAYMENT_MODES);
            let amount_paid = round2(rng.range(lo, hi));

            // Card and UPI payments sometimes earn 1-5% back
            let cashback = if payment_mode != "Cash" && rng.next_f64() < 0.3 {
                round2(amount_paid * rng.range(0.01, 0.05))
            } else {
                0.0
            };

            writer
                .serialize(ExpenseRow {
                    date: date.format("%Y-%m-%d").to_string(),
                    category,
                    payment_mode,
                    description: *rng.pick(descriptions),
                    amount_paid,
                    cashback,
                })
                .context("writing CSV row")?;
            rows += 1;
        }
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {rows} expenses to {output_path}");
    Ok(())
}
