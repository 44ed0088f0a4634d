use crate::domain::model::Record;
use crate::domain::ports::NameParser;
use crate::utils::error::{PipelineError, Result};

/// Adds `parsed_<component>` columns to a record.
pub struct RowTransformer<P: NameParser> {
    parser: P,
}

impl<P: NameParser> RowTransformer<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Copy of `record` with every parsed component added, in canonical order.
    /// `row` is only used for error reporting.
    pub fn transform(&self, record: &Record, field_name: &str, row: usize) -> Result<Record> {
        let full_name = record
            .get(field_name)
            .ok_or_else(|| PipelineError::MissingField {
                field: field_name.to_string(),
                row: Some(row),
            })?;

        let parsed = self.parser.parse(full_name);
        let mut new_record = record.clone();
        for (component, value) in parsed.components() {
            new_record.insert(component.column_name(), value);
        }
        Ok(new_record)
    }
}
