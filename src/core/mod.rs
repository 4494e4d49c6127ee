pub mod batch;
pub mod margin;
pub mod report;

pub use crate::domain::model::{BatchReport, BatchSummary, MarginRecord, Scenario};
pub use crate::domain::ports::{ScenarioSource, Storage};
pub use crate::utils::error::Result;
