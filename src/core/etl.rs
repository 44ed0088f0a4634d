use crate::core::Pipeline;
use crate::utils::error::Result;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract, transform, load. The first failure ends the run; nothing is retried.
    pub fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();

        tracing::debug!("Extracting data...");
        let table = self.pipeline.extract()?;
        let input_rows = table.records.len();
        tracing::debug!("Extracted {} records", input_rows);

        tracing::debug!("Transforming data...");
        let result = self.pipeline.transform(table)?;
        let rows = result.records.len();
        let columns = result.headers.len();
        debug_assert_eq!(rows, input_rows);
        tracing::debug!("Transformed {} records", rows);

        tracing::debug!("Loading data...");
        let output_path = self.pipeline.load(result)?;

        tracing::info!(
            "wrote {} rows x {} columns to {} in {:?}",
            rows,
            columns,
            output_path.display(),
            started.elapsed()
        );
        Ok(RunSummary {
            output_path,
            rows,
            columns,
        })
    }
}
