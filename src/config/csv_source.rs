use crate::domain::model::Scenario;
use crate::domain::ports::{ScenarioSource, Storage};
use crate::utils::error::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ScenarioRow {
    #[serde(default)]
    name: Option<String>,
    revenue: f64,
    cost: f64,
}

/// Scenarios read from CSV.
///
/// With headers the columns are `revenue`, `cost` and an optional `name`.
/// Without headers a row is either `revenue,cost` or `name,revenue,cost`.
/// Unnamed rows are called `row-<n>`, counting data rows from 1.
#[derive(Debug, Clone)]
pub struct CsvScenarioSource {
    data: Vec<u8>,
    has_headers: bool,
}

impl CsvScenarioSource {
    pub fn from_bytes(data: impl Into<Vec<u8>>, has_headers: bool) -> Self {
        Self {
            data: data.into(),
            has_headers,
        }
    }

    pub fn from_storage<S: Storage>(storage: &S, path: &str, has_headers: bool) -> Result<Self> {
        let data = storage.read_file(path)?;
        Ok(Self::from_bytes(data, has_headers))
    }

    fn row_name(name: Option<String>, index: usize) -> String {
        match name {
            Some(name) if !name.trim().is_empty() => name,
            _ => format!("row-{}", index + 1),
        }
    }
}

impl ScenarioSource for CsvScenarioSource {
    fn scenarios(&self) -> Result<Vec<Scenario>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .trim(csv::Trim::All)
            .flexible(!self.has_headers)
            .from_reader(self.data.as_slice());

        let mut scenarios = Vec::new();
        if self.has_headers {
            for (index, row) in reader.deserialize::<ScenarioRow>().enumerate() {
                let row = row?;
                scenarios.push(Scenario::new(
                    Self::row_name(row.name, index),
                    row.revenue,
                    row.cost,
                ));
            }
        } else {
            for (index, record) in reader.records().enumerate() {
                let record = record?;
                let (name, revenue, cost) = if record.len() >= 3 {
                    record.deserialize::<(String, f64, f64)>(None)?
                } else {
                    let (revenue, cost) = record.deserialize::<(f64, f64)>(None)?;
                    (String::new(), revenue, cost)
                };
                scenarios.push(Scenario::new(Self::row_name(Some(name), index), revenue, cost));
            }
        }

        tracing::debug!("Read {} scenarios from CSV", scenarios.len());
        Ok(scenarios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::storage::LocalStorage;
    use crate::utils::error::AppError;
    use tempfile::TempDir;

    #[test]
    fn test_headers_with_names() {
        let source = CsvScenarioSource::from_bytes("name,revenue,cost\nretail,100,70\ngrocery,100,98\n", true);
        let scenarios = source.scenarios().unwrap();

        assert_eq!(
            scenarios,
            vec![
                Scenario::new("retail", 100.0, 70.0),
                Scenario::new("grocery", 100.0, 98.0),
            ]
        );
    }

    #[test]
    fn test_headers_without_name_column() {
        let source = CsvScenarioSource::from_bytes("revenue,cost\n1000,600\n 10 , 5 \n", true);
        let scenarios = source.scenarios().unwrap();

        assert_eq!(scenarios[0], Scenario::new("row-1", 1000.0, 600.0));
        assert_eq!(scenarios[1], Scenario::new("row-2", 10.0, 5.0));
    }

    #[test]
    fn test_headerless_rows() {
        let source = CsvScenarioSource::from_bytes("1000,600\nbreak-even,800,800\n", false);
        let scenarios = source.scenarios().unwrap();

        assert_eq!(scenarios[0], Scenario::new("row-1", 1000.0, 600.0));
        assert_eq!(scenarios[1], Scenario::new("break-even", 800.0, 800.0));
    }

    #[test]
    fn test_invalid_values_are_still_read() {
        // rejection happens when the margin is calculated, not when reading
        let source = CsvScenarioSource::from_bytes("revenue,cost\n0,100\n", true);
        assert_eq!(source.scenarios().unwrap()[0].revenue, 0.0);
    }

    #[test]
    fn test_non_numeric_cell() {
        let source = CsvScenarioSource::from_bytes("revenue,cost\nlots,100\n", true);
        let err = source.scenarios().unwrap_err();
        assert!(matches!(err, AppError::CsvError(_)));
    }

    #[test]
    fn test_from_storage() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("rows.csv"), "revenue,cost\n1000,950\n").unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_string_lossy());

        let source = CsvScenarioSource::from_storage(&storage, "rows.csv", true).unwrap();
        assert_eq!(source.scenarios().unwrap(), vec![Scenario::new("row-1", 1000.0, 950.0)]);

        let err = CsvScenarioSource::from_storage(&storage, "missing.csv", true).unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }
}
