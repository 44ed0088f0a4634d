use crate::domain::model::{HumanName, Record, Table, TransformResult};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Splits a free-text full name into components.
pub trait NameParser: Send + Sync {
    fn parse(&self, full_name: &str) -> HumanName;
}

pub trait TableStorage: Send + Sync {
    fn read_table(&self, path: &Path) -> Result<Table>;
    fn write_table(&self, path: &Path, headers: &[String], records: &[Record]) -> Result<()>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Table>;
    fn transform(&self, table: Table) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<PathBuf>;
}
