use crate::core::margin::MarginCalculator;
use crate::domain::model::BatchReport;
use crate::domain::ports::ScenarioSource;
use crate::utils::error::{AppError, Result};

pub struct BatchEngine<S: ScenarioSource> {
    source: S,
    calculator: MarginCalculator,
    fail_fast: bool,
}

impl<S: ScenarioSource> BatchEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            calculator: MarginCalculator::new(),
            fail_fast: false,
        }
    }

    /// Abort on the first rejected scenario instead of recording it.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn run(&self, name: &str) -> Result<BatchReport> {
        let scenarios = self.source.scenarios()?;
        tracing::info!("Evaluating {} scenarios for batch '{}'", scenarios.len(), name);

        let mut records = Vec::with_capacity(scenarios.len());
        for scenario in &scenarios {
            if self.fail_fast {
                if let Err(source) = self.calculator.calculate(scenario.revenue, scenario.cost) {
                    tracing::error!("Scenario '{}' rejected: {}", scenario.name, source);
                    return Err(AppError::Scenario {
                        name: scenario.name.clone(),
                        source,
                    });
                }
            }

            let record = self.calculator.evaluate(scenario);
            match (&record.margin, &record.error) {
                (Some(margin), _) => {
                    tracing::debug!("Scenario '{}': margin {:.4}%", record.name, margin)
                }
                (None, Some(error)) => {
                    tracing::warn!("Scenario '{}' rejected: {}", record.name, error)
                }
                (None, None) => {}
            }
            records.push(record);
        }

        let report = BatchReport::new(name, records);
        tracing::info!(
            "Batch '{}' finished: {} succeeded, {} failed",
            name,
            report.summary.succeeded,
            report.summary.failed
        );
        Ok(report)
    }
}
