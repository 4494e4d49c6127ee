use clap::Parser;
use profit_margin::core::report::{format_margin, render_demo};
use profit_margin::domain::model::Scenario;
use profit_margin::utils::{logger, validation::Validate};
use profit_margin::{AppError, CliConfig, MarginCalculator};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), AppError> {
    config.validate()?;

    let (revenue, cost) = match (config.revenue, config.cost) {
        (Some(revenue), Some(cost)) => (revenue, cost),
        _ => {
            print!("{}", render_demo()?);
            return Ok(());
        }
    };

    let calculator = MarginCalculator::new();
    let outcome = calculator.calculate(revenue, cost);

    if config.json {
        let record = calculator.evaluate(&Scenario::new("cli", revenue, cost));
        println!("{}", serde_json::to_string_pretty(&record)?);
        outcome?;
        return Ok(());
    }

    let margin = outcome?;
    tracing::debug!("Revenue {} and cost {} give margin {}", revenue, cost, margin);
    println!("Revenue: ${}, Cost: ${}", revenue, cost);
    println!("Profit Margin: {}", format_margin(margin, config.precision));
    Ok(())
}
