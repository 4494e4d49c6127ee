use anyhow::Context;
use clap::Parser;
use profit_margin::config::batch_config::OutputConfig;
use profit_margin::core::report::{render, ReportFormat};
use profit_margin::domain::model::Scenario;
use profit_margin::domain::ports::{ScenarioSource, Storage};
use profit_margin::utils::{logger, validation::Validate};
use profit_margin::{AppError, BatchConfig, BatchEngine, CsvScenarioSource, LocalStorage};
use std::path::Path;

#[derive(Parser)]
#[command(name = "margin-batch")]
#[command(about = "Evaluate profit margins for a batch of scenarios")]
struct Args {
    /// Path to TOML batch file
    #[arg(short, long, default_value = "margin-batch.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Override fail_fast from the batch file
    #[arg(long)]
    fail_fast: Option<bool>,

    /// Override output.format from the batch file (text, csv, json)
    #[arg(long)]
    format: Option<String>,

    /// Validate and list scenarios without evaluating them
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting margin batch");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args, &config) {
        tracing::error!(
            "❌ Batch failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }
}

fn load_config(args: &Args) -> anyhow::Result<BatchConfig> {
    let mut config = BatchConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    if let Some(fail_fast) = args.fail_fast {
        config.batch.fail_fast = Some(fail_fast);
        tracing::info!("🔧 fail_fast overridden to: {}", fail_fast);
    }

    if let Some(format) = &args.format {
        let output = config.output.get_or_insert_with(OutputConfig::default);
        output.format = Some(format.clone());
        tracing::info!("🔧 Output format overridden to: {}", format);
    }

    Ok(config)
}

/// Relative CSV paths resolve against the directory holding the batch file.
fn config_dir(config_path: &str) -> String {
    Path::new(config_path)
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn collect_scenarios(args: &Args, config: &BatchConfig) -> Result<Vec<Scenario>, AppError> {
    let mut scenarios = config.scenarios()?;

    if let Some(input) = &config.input {
        let storage = LocalStorage::new(config_dir(&args.config));
        let csv = CsvScenarioSource::from_storage(&storage, &input.csv_path, config.has_headers())?;
        let rows = csv.scenarios()?;
        tracing::info!("📥 Loaded {} scenarios from {}", rows.len(), input.csv_path);
        scenarios.extend(rows);
    }

    Ok(scenarios)
}

fn run(args: &Args, config: &BatchConfig) -> Result<(), AppError> {
    config.validate()?;
    let format: ReportFormat = config.format()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    let scenarios = collect_scenarios(args, config)?;

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No margins will be calculated");
        println!("Batch '{}' with {} scenarios:", config.name(), scenarios.len());
        for scenario in &scenarios {
            println!(
                "  {}: revenue {}, cost {}",
                scenario.name, scenario.revenue, scenario.cost
            );
        }
        return Ok(());
    }

    let report = BatchEngine::new(scenarios)
        .with_fail_fast(config.fail_fast())
        .run(config.name())?;
    let rendered = render(&report, format, config.precision())?;

    match config.output_path() {
        Some(path) => {
            let storage = LocalStorage::new(path);
            let written = storage.write_file(&config.output_filename()?, rendered.as_bytes())?;
            tracing::info!("📁 Report saved to: {}", written);
            println!("📁 Report saved to: {}", written);
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
