pub mod batch_config;
pub mod csv_source;
pub mod storage;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_paired, validate_range, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "profit-margin")]
#[command(about = "Calculate the profit margin for a revenue and cost")]
pub struct CliConfig {
    /// Total revenue; must be greater than zero
    #[arg(long, allow_negative_numbers = true)]
    pub revenue: Option<f64>,

    /// Total cost; must be non-negative and not exceed revenue
    #[arg(long, allow_negative_numbers = true)]
    pub cost: Option<f64>,

    /// Decimal places in the printed margin
    #[arg(long, default_value = "2")]
    pub precision: usize,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Without revenue and cost the tool prints the demo.
    pub fn is_demo(&self) -> bool {
        self.revenue.is_none() && self.cost.is_none()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_paired(("revenue", &self.revenue), ("cost", &self.cost))?;
        validate_range("precision", self.precision, 0, 10)
    }
}
