use crate::core::report::{ReportFormat, DEFAULT_PRECISION};
use crate::domain::model::Scenario;
use crate::domain::ports::ScenarioSource;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_path, validate_range,
    validate_unique_names, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const MAX_PRECISION: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: BatchSection,
    #[serde(default)]
    pub scenarios: Vec<ScenarioConfig>,
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSection {
    pub name: String,
    pub description: Option<String>,
    pub fail_fast: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    pub revenue: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub csv_path: String,
    pub has_headers: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub format: Option<String>,
    pub precision: Option<usize>,
    pub filename: Option<String>,
}

impl BatchConfig {
    /// Load a batch definition from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a batch definition, expanding `${VAR}` from the environment first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    // Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn name(&self) -> &str {
        &self.batch.name
    }

    pub fn fail_fast(&self) -> bool {
        self.batch.fail_fast.unwrap_or(false)
    }

    pub fn format(&self) -> Result<ReportFormat> {
        match self.output.as_ref().and_then(|o| o.format.as_deref()) {
            Some(format) => ReportFormat::parse(format),
            None => Ok(ReportFormat::Text),
        }
    }

    pub fn precision(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|o| o.precision)
            .unwrap_or(DEFAULT_PRECISION)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn output_filename(&self) -> Result<String> {
        match self.output.as_ref().and_then(|o| o.filename.clone()) {
            Some(filename) => Ok(filename),
            None => Ok(format!("margin_report.{}", self.format()?.extension())),
        }
    }

    pub fn has_headers(&self) -> bool {
        self.input
            .as_ref()
            .and_then(|i| i.has_headers)
            .unwrap_or(true)
    }
}

impl ScenarioSource for BatchConfig {
    fn scenarios(&self) -> Result<Vec<Scenario>> {
        Ok(self
            .scenarios
            .iter()
            .map(|s| Scenario::new(s.name.clone(), s.revenue, s.cost))
            .collect())
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("batch.name", &self.batch.name)?;

        if self.scenarios.is_empty() && self.input.is_none() {
            return Err(AppError::MissingConfigError {
                field: "scenarios or input.csv_path".to_string(),
            });
        }

        for scenario in &self.scenarios {
            validate_non_empty_string("scenarios.name", &scenario.name)?;
        }
        validate_unique_names("scenarios.name", self.scenarios.iter().map(|s| s.name.as_str()))?;

        if let Some(input) = &self.input {
            validate_path("input.csv_path", &input.csv_path)?;
        }

        if let Some(output) = &self.output {
            if let Some(path) = &output.path {
                validate_path("output.path", path)?;
            }
            if let Some(format) = &output.format {
                validate_one_of("output.format", format, &ReportFormat::NAMES)?;
            }
            if let Some(precision) = output.precision {
                validate_range("output.precision", precision, 0, MAX_PRECISION)?;
            }
            if let Some(filename) = &output.filename {
                validate_path("output.filename", filename)?;
            }
        }

        Ok(())
    }
}
