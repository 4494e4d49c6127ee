//! Profit margin formula and its input checks.
//!
//! Profit margin is the share of revenue kept as profit once costs are paid:
//! `((revenue - cost) / revenue) * 100`.

use crate::domain::model::{MarginRecord, Scenario};
use crate::utils::error::MarginError;

/// Calculate the profit margin as a percentage in `[0, 100]`.
///
/// Inputs are checked in order and the first violation is returned:
/// revenue must be finite and above zero, cost must be finite and at least
/// zero, and cost must not exceed revenue.
///
/// # Examples
/// ```
/// use profit_margin::calculate_profit_margin;
///
/// assert_eq!(calculate_profit_margin(1000.0, 600.0).unwrap(), 40.0);
/// assert_eq!(calculate_profit_margin(800.0, 800.0).unwrap(), 0.0);
/// assert!(calculate_profit_margin(0.0, 100.0).is_err());
/// ```
pub fn calculate_profit_margin(revenue: f64, cost: f64) -> Result<f64, MarginError> {
    if !revenue.is_finite() || revenue <= 0.0 {
        return Err(MarginError::InvalidRevenue);
    }

    if !cost.is_finite() || cost < 0.0 {
        return Err(MarginError::InvalidCost);
    }

    if cost > revenue {
        return Err(MarginError::CostExceedsRevenue);
    }

    let profit = revenue - cost;
    Ok((profit / revenue) * 100.0)
}

/// Stateless handle over [`calculate_profit_margin`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MarginCalculator;

impl MarginCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, revenue: f64, cost: f64) -> Result<f64, MarginError> {
        calculate_profit_margin(revenue, cost)
    }

    pub fn evaluate(&self, scenario: &Scenario) -> MarginRecord {
        let outcome = self.calculate(scenario.revenue, scenario.cost);
        MarginRecord {
            name: scenario.name.clone(),
            revenue: scenario.revenue,
            cost: scenario.cost,
            margin: outcome.ok(),
            error: outcome.err().map(|e| e.to_string()),
        }
    }
}
