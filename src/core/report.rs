use crate::core::margin::calculate_profit_margin;
use crate::domain::model::{BatchReport, MarginRecord};
use crate::utils::error::{AppError, Result};
use serde::Serialize;
use std::fmt::Write as _;

pub const DEFAULT_PRECISION: usize = 2;

/// Revenue/cost pairs shown by the demo.
pub const DEMO_SCENARIOS: [(f64, f64); 3] = [(1000.0, 600.0), (5000.0, 2000.0), (800.0, 800.0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Csv,
    Json,
}

impl ReportFormat {
    pub const NAMES: [&'static str; 3] = ["text", "csv", "json"];

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "text" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(AppError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Supported values: {}", Self::NAMES.join(", ")),
            }),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

pub fn format_margin(margin: f64, precision: usize) -> String {
    format!("{:.*}%", precision, margin)
}

pub fn render(report: &BatchReport, format: ReportFormat, precision: usize) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report, precision)),
        ReportFormat::Csv => render_csv(report, precision),
        ReportFormat::Json => render_json(report),
    }
}

fn describe(record: &MarginRecord, precision: usize) -> String {
    let outcome = match (&record.margin, &record.error) {
        (Some(margin), _) => format!("Profit Margin: {}", format_margin(*margin, precision)),
        (None, Some(error)) => format!("error: {}", error),
        (None, None) => "no result".to_string(),
    };
    format!(
        "{}: Revenue: ${}, Cost: ${} -> {}",
        record.name, record.revenue, record.cost, outcome
    )
}

pub fn render_text(report: &BatchReport, precision: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Batch: {}", report.name);
    for record in &report.records {
        let _ = writeln!(out, "{}", describe(record, precision));
    }

    let summary = &report.summary;
    let average = summary
        .average_margin
        .map(|m| format_margin(m, precision))
        .unwrap_or_else(|| "n/a".to_string());
    let _ = writeln!(
        out,
        "Summary: {} succeeded, {} failed, average margin {}",
        summary.succeeded, summary.failed, average
    );
    out
}

#[derive(Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    revenue: f64,
    cost: f64,
    margin: Option<String>,
    error: Option<&'a str>,
}

pub fn render_csv(report: &BatchReport, precision: usize) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in &report.records {
        writer.serialize(CsvRow {
            name: &record.name,
            revenue: record.revenue,
            cost: record.cost,
            margin: record.margin.map(|m| format!("{:.*}", precision, m)),
            error: record.error.as_deref(),
        })?;
    }

    if report.records.is_empty() {
        writer.write_record(["name", "revenue", "cost", "margin", "error"])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn render_json(report: &BatchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// The reference demonstration: three fixed calculations at two decimals.
pub fn render_demo() -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(out, "Profit Margin Calculator");
    let _ = writeln!(out, "{}", "=".repeat(50));

    for (i, (revenue, cost)) in DEMO_SCENARIOS.iter().enumerate() {
        let margin = calculate_profit_margin(*revenue, *cost)?;
        if i > 0 {
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "Revenue: ${}, Cost: ${}", revenue, cost);
        let _ = writeln!(out, "Profit Margin: {}", format_margin(margin, DEFAULT_PRECISION));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::margin::MarginCalculator;
    use crate::domain::model::Scenario;

    fn sample_report() -> BatchReport {
        let calculator = MarginCalculator::new();
        let records = vec![
            calculator.evaluate(&Scenario::new("retail", 100.0, 70.0)),
            calculator.evaluate(&Scenario::new("loss", 100.0, 150.0)),
        ];
        BatchReport::new("sample", records)
    }

    #[test]
    fn test_format_margin() {
        assert_eq!(format_margin(40.0, 2), "40.00%");
        assert_eq!(format_margin(33.3333, 1), "33.3%");
        assert_eq!(format_margin(5.0, 0), "5%");
    }

    #[test]
    fn test_demo_output() {
        let expected = "Profit Margin Calculator\n\
            ==================================================\n\
            Revenue: $1000, Cost: $600\n\
            Profit Margin: 40.00%\n\
            \n\
            Revenue: $5000, Cost: $2000\n\
            Profit Margin: 60.00%\n\
            \n\
            Revenue: $800, Cost: $800\n\
            Profit Margin: 0.00%\n";
        assert_eq!(render_demo().unwrap(), expected);
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample_report(), 2);
        assert!(text.contains("retail: Revenue: $100, Cost: $70 -> Profit Margin: 30.00%"));
        assert!(text.contains("loss: Revenue: $100, Cost: $150 -> error: Cost cannot exceed revenue"));
        assert!(text.contains("Summary: 1 succeeded, 1 failed, average margin 30.00%"));
    }

    #[test]
    fn test_render_csv() {
        let csv = render_csv(&sample_report(), 2).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "name,revenue,cost,margin,error");
        assert!(lines[1].starts_with("retail,"));
        assert!(lines[1].contains(",30.00,"));
        assert!(lines[2].ends_with(",,Cost cannot exceed revenue"));
    }

    #[test]
    fn test_render_csv_empty_report_has_header() {
        let csv = render_csv(&BatchReport::new("empty", Vec::new()), 2).unwrap();
        assert_eq!(csv.trim_end(), "name,revenue,cost,margin,error");
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "sample");
        assert_eq!(value["records"][0]["margin"], 30.0);
        assert_eq!(value["records"][1]["margin"], serde_json::Value::Null);
        assert_eq!(value["summary"]["failed"], 1);
    }

    #[test]
    fn test_report_format_parse() {
        assert_eq!(ReportFormat::parse("csv").unwrap(), ReportFormat::Csv);
        assert_eq!(ReportFormat::Json.extension(), "json");
        assert!(ReportFormat::parse("xml").is_err());
    }
}
