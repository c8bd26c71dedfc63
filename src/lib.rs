//! Price-list catalog aggregator.
//!
//! Loads every `price*.csv` file from a directory into one in-memory
//! catalog, normalizes rows to a price-per-kilogram model, answers
//! substring searches over product names, and exports the whole catalog as
//! a sorted HTML table. Column semantics are recovered per file from a
//! configurable header-synonym table.

pub mod cli;
pub mod data;
pub mod error;
pub mod export;
pub mod session;
