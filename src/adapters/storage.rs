use crate::domain::model::{Record, Table};
use crate::domain::ports::TableStorage;
use crate::utils::error::{PipelineError, Result};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::collections::HashSet;
use std::path::Path;

/// CSV files on the local file system.
#[derive(Debug, Clone, Default)]
pub struct LocalCsvStorage;

impl LocalCsvStorage {
    pub fn new() -> Self {
        Self
    }
}

fn check_distinct(path: &Path, headers: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for header in headers {
        if !seen.insert(header.as_str()) {
            return Err(PipelineError::InvalidInput {
                path: path.to_path_buf(),
                reason: format!("Duplicate column '{}' in header", header),
            });
        }
    }
    Ok(())
}

/// Values of `record` in `headers` order. Row numbers in errors are 1-based data rows.
pub fn project_row<'r>(index: usize, record: &'r Record, headers: &[String]) -> Result<Vec<&'r str>> {
    headers
        .iter()
        .map(|column| {
            record
                .get(column)
                .ok_or_else(|| PipelineError::WriteConsistency {
                    row: index + 1,
                    column: column.clone(),
                })
        })
        .collect()
}

/// Mode the output file is created with: the mode of the file being replaced, or
/// what a plain create would give. The process umask still applies on open.
#[cfg(unix)]
fn output_permissions(path: &Path) -> std::fs::Permissions {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.permissions())
        .unwrap_or_else(|_| std::fs::Permissions::from_mode(0o666))
}

impl TableStorage for LocalCsvStorage {
    fn read_table(&self, path: &Path) -> Result<Table> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(idx, h)| {
                if idx == 0 {
                    h.trim_start_matches('\u{feff}').to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();
        check_distinct(path, &headers)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(Record::from_row(&headers, row.iter()));
        }

        tracing::debug!(
            "read {} rows with {} columns from {}",
            records.len(),
            headers.len(),
            path.display()
        );
        Ok(Table { headers, records })
    }

    /// Writes to a temp file next to `path` and renames it over `path` once every row is out,
    /// so a failed run leaves no partial file behind.
    fn write_table(&self, path: &Path, headers: &[String], records: &[Record]) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        builder.permissions(output_permissions(path));
        let mut temp_file = builder.tempfile_in(dir)?;

        {
            let mut writer = WriterBuilder::new()
                .terminator(Terminator::Any(b'\n'))
                .from_writer(&mut temp_file);

            writer.write_record(headers)?;
            for (index, record) in records.iter().enumerate() {
                writer.write_record(project_row(index, record, headers)?)?;
            }
            writer.flush()?;
        }

        temp_file.as_file().sync_all()?;
        temp_file
            .persist(path)
            .map_err(|e| PipelineError::IoError(e.error))?;

        tracing::debug!("wrote {} rows to {}", records.len(), path.display());
        Ok(())
    }
}
