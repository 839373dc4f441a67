use std::path::PathBuf;

/// Source file read at startup, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "monthly_expenses.csv";

pub const CURRENCY_SYMBOL: &str = "₹";

pub const WINDOW_TITLE: &str = "Expense Tracker";

pub const PAGE_HEADING: &str = "Analyzing Personal Expenses";

/// Shown under every load or processing error.
pub const ERROR_HINT: &str = "Please make sure your CSV file is in the correct location and format.";

/// Fixed process configuration. There are no flags or config files; tests
/// build their own value pointing at a temporary CSV.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub currency_symbol: &'static str,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            currency_symbol: CURRENCY_SYMBOL,
            window_size: [1280.0, 860.0],
            min_window_size: [720.0, 480.0],
        }
    }
}
