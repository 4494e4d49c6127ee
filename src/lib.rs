pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{batch_config::BatchConfig, csv_source::CsvScenarioSource, storage::LocalStorage};
pub use crate::core::{
    batch::BatchEngine,
    margin::{calculate_profit_margin, MarginCalculator},
};
pub use crate::utils::error::{AppError, MarginError, Result};
