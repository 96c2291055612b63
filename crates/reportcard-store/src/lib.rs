//! JSON persistence and configuration for reportcard.

pub mod config;
pub mod store;

pub use config::{load_config_from, ReportCardConfig};
pub use store::ReportStore;
