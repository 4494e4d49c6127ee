use crate::domain::model::Scenario;
use crate::utils::error::Result;

/// Anything that can hand the batch engine a list of scenarios.
pub trait ScenarioSource {
    fn scenarios(&self) -> Result<Vec<Scenario>>;
}

impl ScenarioSource for Vec<Scenario> {
    fn scenarios(&self) -> Result<Vec<Scenario>> {
        Ok(self.clone())
    }
}

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    /// Writes `data` and returns the location it was written to.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}
