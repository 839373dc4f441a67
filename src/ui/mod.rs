//! Presentation layer: egui panels, charts and the transaction table.

pub mod charts;
pub mod dashboard;
pub mod panels;
pub mod table;
