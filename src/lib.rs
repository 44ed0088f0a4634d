pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod parser;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::LocalCsvStorage;
pub use config::{derive_output_path, ParseConfig};
pub use crate::core::{
    etl::{EtlEngine, RunSummary},
    headers::compose_output_headers,
    pipeline::{run, NameCsvPipeline},
    transformer::RowTransformer,
};
pub use domain::model::{HumanName, NameComponent, Record};
pub use domain::ports::NameParser;
pub use parser::{HeuristicNameParser, NameConstants};
pub use utils::error::{PipelineError, Result};
