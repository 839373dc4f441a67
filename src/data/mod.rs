//! Data layer: core types, loading, filtering and aggregation.
//!
//! Architecture:
//! ```text
//!  monthly_expenses.csv
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ DatasetCache  │  load once → Arc<Dataset>
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  date range ∧ category ∧ payment mode → new Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ summary   │  totals, mean, count, grouped sums
//!   └──────────┘
//! ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
