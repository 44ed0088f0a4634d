#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_existing_file, validate_file_extension, validate_non_empty_string, validate_path,
    Validate,
};
use std::path::{Path, PathBuf};

pub const OUTPUT_POSTFIX: &str = "_parsedName";
pub const OUTPUT_EXTENSION: &str = "csv";
pub const DEFAULT_FIELD_NAME: &str = "name";

/// `/tmp/data.csv` becomes `/tmp/data_parsedName.csv`.
pub fn derive_output_path(input_file: &Path) -> PathBuf {
    let stem = input_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input_file.with_file_name(format!("{}{}.{}", stem, OUTPUT_POSTFIX, OUTPUT_EXTENSION))
}

/// Settings for one run. Built through [`ParseConfig::new`], which checks the input
/// file and fills in defaults; fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    input_file: PathBuf,
    output_file: PathBuf,
    field_name: String,
    save_names_only: bool,
    name_constants: Option<PathBuf>,
}

impl ParseConfig {
    pub fn new(
        input_file: impl Into<PathBuf>,
        output_file: Option<PathBuf>,
        field_name: Option<String>,
        save_names_only: bool,
    ) -> Result<Self> {
        let input_file = input_file.into();
        let output_file = output_file.unwrap_or_else(|| derive_output_path(&input_file));
        let config = Self {
            input_file,
            output_file,
            field_name: field_name.unwrap_or_else(|| DEFAULT_FIELD_NAME.to_string()),
            save_names_only,
            name_constants: None,
        };
        config.validate()?;

        tracing::debug!(
            "ParseConfig created: input={} output={} field_name={} save_names_only={}",
            config.input_file.display(),
            config.output_file.display(),
            config.field_name,
            config.save_names_only
        );
        Ok(config)
    }

    /// Extends the parser vocabulary with a TOML file.
    pub fn with_name_constants(mut self, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        validate_existing_file(&path)?;
        self.name_constants = Some(path);
        Ok(self)
    }

    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn save_names_only(&self) -> bool {
        self.save_names_only
    }

    pub fn name_constants(&self) -> Option<&Path> {
        self.name_constants.as_deref()
    }
}

impl Validate for ParseConfig {
    fn validate(&self) -> Result<()> {
        validate_existing_file(&self.input_file)?;
        validate_file_extension(&self.input_file, &[OUTPUT_EXTENSION])?;
        validate_path(&self.output_file)?;
        validate_non_empty_string("field_name", &self.field_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PipelineError;
    use tempfile::TempDir;

    #[test]
    fn test_derive_output_path() {
        assert_eq!(
            derive_output_path(Path::new("/tmp/data.csv")),
            PathBuf::from("/tmp/data_parsedName.csv")
        );
        assert_eq!(
            derive_output_path(Path::new("people.v2.csv")),
            PathBuf::from("people.v2_parsedName.csv")
        );
    }

    #[test]
    fn test_defaults() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("people.csv");
        std::fs::write(&input, "name\nJane Doe\n").unwrap();

        let config = ParseConfig::new(&input, None, None, false).unwrap();
        assert_eq!(config.field_name(), "name");
        assert_eq!(config.output_file(), dir.path().join("people_parsedName.csv"));
        assert!(!config.save_names_only());
        assert!(config.name_constants().is_none());
    }

    #[test]
    fn test_explicit_values_win() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("people.csv");
        std::fs::write(&input, "full_name\n").unwrap();
        let output = dir.path().join("out.csv");

        let config = ParseConfig::new(
            &input,
            Some(output.clone()),
            Some("full_name".to_string()),
            true,
        )
        .unwrap();
        assert_eq!(config.output_file(), output.as_path());
        assert_eq!(config.field_name(), "full_name");
        assert!(config.save_names_only());
    }

    #[test]
    fn test_rejects_missing_and_non_csv_input() {
        let dir = TempDir::new().unwrap();

        let missing = ParseConfig::new(dir.path().join("nope.csv"), None, None, false);
        assert!(matches!(missing, Err(PipelineError::InvalidInput { .. })));

        let txt = dir.path().join("people.txt");
        std::fs::write(&txt, "name\n").unwrap();
        let wrong_ext = ParseConfig::new(&txt, None, None, false);
        assert!(matches!(wrong_ext, Err(PipelineError::InvalidInput { .. })));
    }

    #[test]
    fn test_rejects_blank_field_name() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("people.csv");
        std::fs::write(&input, "name\n").unwrap();

        let result = ParseConfig::new(&input, None, Some(" ".to_string()), false);
        assert!(matches!(result, Err(PipelineError::ConfigError { .. })));
    }
}
