use crate::adapters::LocalCsvStorage;
use crate::config::ParseConfig;
use crate::core::etl::{EtlEngine, RunSummary};
use crate::core::headers::{colliding_headers, compose_output_headers};
use crate::core::transformer::RowTransformer;
use crate::core::{NameParser, Pipeline, Record, Table, TableStorage, TransformResult};
use crate::parser::{HeuristicNameParser, NameConstants};
use crate::utils::error::{PipelineError, Result};
use std::path::PathBuf;

/// Reads the input CSV, parses the name column of every row and writes the augmented CSV.
pub struct NameCsvPipeline<S: TableStorage, P: NameParser> {
    pub(crate) storage: S,
    pub(crate) transformer: RowTransformer<P>,
    pub(crate) config: ParseConfig,
}

impl<S: TableStorage, P: NameParser> NameCsvPipeline<S, P> {
    pub fn new(storage: S, parser: P, config: ParseConfig) -> Self {
        Self {
            storage,
            transformer: RowTransformer::new(parser),
            config,
        }
    }

    /// Every record must carry exactly the output columns when all columns are kept.
    fn check_consistency(&self, result: &TransformResult) -> Result<()> {
        if self.config.save_names_only() {
            return Ok(());
        }
        for (index, record) in result.records.iter().enumerate() {
            if let Some(column) = result.headers.iter().find(|h| !record.contains_key(h)) {
                return Err(PipelineError::WriteConsistency {
                    row: index + 1,
                    column: column.clone(),
                });
            }
            if let Some(extra) = record.keys().find(|k| !result.headers.iter().any(|h| h == k)) {
                return Err(PipelineError::WriteConsistency {
                    row: index + 1,
                    column: extra.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<S: TableStorage, P: NameParser> Pipeline for NameCsvPipeline<S, P> {
    fn extract(&self) -> Result<Table> {
        let input_file = self.config.input_file();
        tracing::info!("processing input file: input={}", input_file.display());

        let table = self.storage.read_table(input_file)?;
        tracing::debug!(
            "finished reading input file: rows={} headers={}",
            table.records.len(),
            table.headers.len()
        );

        let field_name = self.config.field_name();
        if !table.headers.iter().any(|h| h == field_name) {
            return Err(PipelineError::MissingField {
                field: field_name.to_string(),
                row: None,
            });
        }

        // Names-only output keeps just the name column next to the parsed ones,
        // so only that column can clash.
        let name_column = [field_name.to_string()];
        let kept: &[String] = if self.config.save_names_only() {
            &name_column
        } else {
            &table.headers
        };
        let clashes = colliding_headers(kept);
        if !clashes.is_empty() {
            return Err(PipelineError::InvalidInput {
                path: input_file.to_path_buf(),
                reason: format!("Columns already present: {}", clashes.join(", ")),
            });
        }

        Ok(table)
    }

    fn transform(&self, table: Table) -> Result<TransformResult> {
        let field_name = self.config.field_name();
        let records = table
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| self.transformer.transform(record, field_name, index + 1))
            .collect::<Result<Vec<Record>>>()?;

        let headers =
            compose_output_headers(&table.headers, field_name, self.config.save_names_only());

        tracing::debug!(
            "preparing to write output file: rows={} headers={}",
            records.len(),
            headers.len()
        );
        Ok(TransformResult { headers, records })
    }

    fn load(&self, result: TransformResult) -> Result<PathBuf> {
        self.check_consistency(&result)?;

        let output_file = self.config.output_file();
        self.storage
            .write_table(output_file, &result.headers, &result.records)?;

        tracing::info!("finished processing file: output={}", output_file.display());
        Ok(output_file.to_path_buf())
    }
}

/// Runs the whole file pipeline for `config` with the local CSV storage and the
/// heuristic name parser.
pub fn run(config: &ParseConfig) -> Result<RunSummary> {
    let span = tracing::info_span!(
        "parse_full_name_csv",
        input = %config.input_file().display(),
        field = config.field_name()
    );
    let _guard = span.enter();

    let constants = match config.name_constants() {
        Some(path) => {
            tracing::debug!("loading name constants from {}", path.display());
            NameConstants::from_file(path)?
        }
        None => NameConstants::default(),
    };

    let pipeline = NameCsvPipeline::new(
        LocalCsvStorage::new(),
        HeuristicNameParser::new(constants),
        config.clone(),
    );
    EtlEngine::new(pipeline).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::HumanName;
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    type Written = (Vec<String>, Vec<Record>);

    #[derive(Clone, Default)]
    struct MockStorage {
        tables: Arc<Mutex<HashMap<PathBuf, Table>>>,
        written: Arc<Mutex<HashMap<PathBuf, Written>>>,
    }

    impl MockStorage {
        fn with_table(path: &Path, headers: &[&str], rows: &[&[&str]]) -> Self {
            let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
            let records = rows
                .iter()
                .map(|row| Record::from_row(&headers, row.iter().copied()))
                .collect();
            let storage = Self::default();
            storage
                .tables
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), Table { headers, records });
            storage
        }

        fn get_written(&self, path: &Path) -> Option<Written> {
            self.written.lock().unwrap().get(path).cloned()
        }
    }

    impl TableStorage for MockStorage {
        fn read_table(&self, path: &Path) -> Result<Table> {
            self.tables.lock().unwrap().get(path).cloned().ok_or_else(|| {
                PipelineError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path.display()),
                ))
            })
        }

        fn write_table(&self, path: &Path, headers: &[String], records: &[Record]) -> Result<()> {
            self.written
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), (headers.to_vec(), records.to_vec()));
            Ok(())
        }
    }

    /// Uppercases the whole name into `first`.
    struct UpperParser;

    impl NameParser for UpperParser {
        fn parse(&self, full_name: &str) -> HumanName {
            HumanName {
                first: full_name.to_uppercase(),
                original: full_name.to_string(),
                ..Default::default()
            }
        }
    }

    /// ParseConfig validates the input path, so a real (empty) file backs it.
    fn config(dir: &TempDir, field_name: &str, save_names_only: bool) -> ParseConfig {
        let input = dir.path().join("people.csv");
        std::fs::write(&input, "").unwrap();
        ParseConfig::new(input, None, Some(field_name.to_string()), save_names_only).unwrap()
    }

    #[test]
    fn test_full_run_keeps_rows_and_order() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, "name", false);
        let storage = MockStorage::with_table(
            config.input_file(),
            &["id", "name"],
            &[&["1", "ann lee"], &["2", "bob ray"], &["3", "cy young"]],
        );
        let pipeline = NameCsvPipeline::new(storage.clone(), UpperParser, config.clone());

        let summary = EtlEngine::new(pipeline).run().unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.output_path, dir.path().join("people_parsedName.csv"));

        let (headers, records) = storage.get_written(config.output_file()).unwrap();
        assert_eq!(headers.len(), 7 + 2);
        assert_eq!(&headers[7..], &["id".to_string(), "name".to_string()]);
        let ids: Vec<&str> = records.iter().map(|r| r.get("id").unwrap()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(records[1].get("parsed_first"), Some("BOB RAY"));
    }

    #[test]
    fn test_names_only_headers() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, "full_name", true);
        let storage = MockStorage::with_table(
            config.input_file(),
            &["id", "full_name", "city"],
            &[&["1", "ann lee", "Oslo"]],
        );
        let pipeline = NameCsvPipeline::new(storage.clone(), UpperParser, config.clone());

        EtlEngine::new(pipeline).run().unwrap();

        let (headers, _) = storage.get_written(config.output_file()).unwrap();
        assert_eq!(headers.len(), 8);
        assert_eq!(headers.last().unwrap(), "full_name");
    }

    #[test]
    fn test_missing_field_in_header_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, "name", false);
        let storage = MockStorage::with_table(config.input_file(), &["id"], &[]);
        let pipeline = NameCsvPipeline::new(storage.clone(), UpperParser, config.clone());

        let result = EtlEngine::new(pipeline).run();
        assert!(matches!(
            result,
            Err(PipelineError::MissingField { row: None, .. })
        ));
        assert!(storage.get_written(config.output_file()).is_none());
    }

    #[test]
    fn test_colliding_column_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, "name", false);
        let storage = MockStorage::with_table(
            config.input_file(),
            &["name", "parsed_last"],
            &[&["ann lee", "lee"]],
        );
        let pipeline = NameCsvPipeline::new(storage, UpperParser, config);

        assert!(matches!(
            pipeline.extract(),
            Err(PipelineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_colliding_column_allowed_when_names_only() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, "name", true);
        let storage = MockStorage::with_table(
            config.input_file(),
            &["name", "parsed_last"],
            &[&["ann lee", "lee"]],
        );
        let pipeline = NameCsvPipeline::new(storage, UpperParser, config);

        assert!(pipeline.extract().is_ok());
    }

    #[test]
    fn test_names_only_rejects_parsed_column_as_field() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, "parsed_first", true);
        let storage = MockStorage::with_table(
            config.input_file(),
            &["parsed_first", "age"],
            &[&["ann lee", "34"]],
        );
        let pipeline = NameCsvPipeline::new(storage.clone(), UpperParser, config.clone());

        let result = EtlEngine::new(pipeline).run();
        assert!(matches!(
            result,
            Err(PipelineError::InvalidInput { ref reason, .. }) if reason.contains("parsed_first")
        ));
        assert!(storage.get_written(config.output_file()).is_none());
    }

    #[test]
    fn test_load_rejects_inconsistent_records() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, "name", false);
        let storage = MockStorage::default();
        let pipeline = NameCsvPipeline::new(storage.clone(), UpperParser, config.clone());

        let result = TransformResult {
            headers: vec!["name".to_string(), "age".to_string()],
            records: vec![[("name", "Jane")].into_iter().collect()],
        };
        assert!(matches!(
            pipeline.load(result),
            Err(PipelineError::WriteConsistency { row: 1, .. })
        ));

        let extra = TransformResult {
            headers: vec!["name".to_string()],
            records: vec![[("name", "Jane"), ("age", "3")].into_iter().collect()],
        };
        assert!(matches!(
            pipeline.load(extra),
            Err(PipelineError::WriteConsistency { ref column, .. }) if column == "age"
        ));
        assert!(storage.get_written(config.output_file()).is_none());
    }

    #[test]
    fn test_run_with_local_storage() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("people.csv");
        std::fs::write(&input, "name,age\nJohn Doe,40\n").unwrap();
        let config = ParseConfig::new(&input, None, None, false).unwrap();

        let summary = run(&config).unwrap();
        let content = std::fs::read_to_string(summary.output_path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("parsed_title,parsed_first,parsed_middle,parsed_last,parsed_suffix,parsed_nickname,parsed_original,name,age")
        );
        assert_eq!(lines.next(), Some(",John,,Doe,,,John Doe,John Doe,40"));
        assert_eq!(lines.next(), None);
    }
}
