use crate::utils::error::{PipelineError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(path: &Path, reason: impl Into<String>) -> PipelineError {
    PipelineError::InvalidInput {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

pub fn validate_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(invalid(path, "Path cannot be empty"));
    }

    if path.to_string_lossy().contains('\0') {
        return Err(invalid(path, "Path contains null bytes"));
    }

    Ok(())
}

/// The path must exist and be a regular file.
pub fn validate_existing_file(path: &Path) -> Result<()> {
    validate_path(path)?;

    if !path.exists() {
        return Err(invalid(path, "File does not exist"));
    }
    if !path.is_file() {
        return Err(invalid(path, "Not a regular file"));
    }
    Ok(())
}

/// Extension check is case-sensitive: `data.CSV` is rejected.
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(invalid(
            path,
            format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        )),
        None => Err(invalid(path, "File has no extension or invalid filename")),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PipelineError::ConfigError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_path() {
        assert!(validate_path(Path::new("data.csv")).is_ok());
        assert!(validate_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_existing_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("people.csv");
        std::fs::write(&file, "name\n").unwrap();

        assert!(validate_existing_file(&file).is_ok());
        assert!(validate_existing_file(&dir.path().join("missing.csv")).is_err());
        assert!(matches!(
            validate_existing_file(dir.path()),
            Err(PipelineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("data.csv"), &["csv"]).is_ok());
        assert!(validate_file_extension(Path::new("data.txt"), &["csv"]).is_err());
        assert!(validate_file_extension(Path::new("data.CSV"), &["csv"]).is_err());
        assert!(validate_file_extension(Path::new("data"), &["csv"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("field_name", "name").is_ok());
        assert!(validate_non_empty_string("field_name", "  ").is_err());
    }
}
