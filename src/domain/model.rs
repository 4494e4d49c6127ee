use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named revenue/cost pair to evaluate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub revenue: f64,
    pub cost: f64,
}

impl Scenario {
    pub fn new(name: impl Into<String>, revenue: f64, cost: f64) -> Self {
        Self {
            name: name.into(),
            revenue,
            cost,
        }
    }
}

/// Outcome of one scenario. Exactly one of `margin` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginRecord {
    pub name: String,
    pub revenue: f64,
    pub cost: f64,
    pub margin: Option<f64>,
    pub error: Option<String>,
}

impl MarginRecord {
    pub fn is_success(&self) -> bool {
        self.margin.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub average_margin: Option<f64>,
    pub min_margin: Option<f64>,
    pub max_margin: Option<f64>,
}

impl BatchSummary {
    /// Statistics cover successful records only.
    pub fn from_records(records: &[MarginRecord]) -> Self {
        let margins: Vec<f64> = records.iter().filter_map(|r| r.margin).collect();
        let succeeded = margins.len();

        let average_margin = if succeeded > 0 {
            Some(margins.iter().sum::<f64>() / succeeded as f64)
        } else {
            None
        };

        Self {
            total: records.len(),
            succeeded,
            failed: records.len() - succeeded,
            average_margin,
            min_margin: margins.iter().copied().reduce(f64::min),
            max_margin: margins.iter().copied().reduce(f64::max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub name: String,
    pub generated_at: DateTime<Utc>,
    pub records: Vec<MarginRecord>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn new(name: impl Into<String>, records: Vec<MarginRecord>) -> Self {
        let summary = BatchSummary::from_records(&records);
        Self {
            name: name.into(),
            generated_at: Utc::now(),
            records,
            summary,
        }
    }
}
