pub mod etl;
pub mod headers;
pub mod pipeline;
pub mod transformer;

pub use crate::domain::model::{Record, Table, TransformResult};
pub use crate::domain::ports::{NameParser, Pipeline, TableStorage};
pub use crate::utils::error::Result;
