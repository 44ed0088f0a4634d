use crate::config::{ParseConfig, DEFAULT_FIELD_NAME};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "parse-full-name-csv")]
#[command(about = "Split a full-name column of a CSV file into title, first, middle, last, suffix and nickname")]
pub struct CliArgs {
    /// Input file (.csv); same as --input-file
    #[arg(value_name = "INPUT_FILE", conflicts_with = "input_file", required_unless_present = "input_file")]
    pub input: Option<PathBuf>,

    /// Read from input file (.csv) instead of first arg
    #[arg(short = 'i', long)]
    pub input_file: Option<PathBuf>,

    /// Write to output file (.csv) instead of default (adjacent copy)
    #[arg(short = 'o', long)]
    pub output_file: Option<PathBuf>,

    /// Column holding the full name
    #[arg(short = 'f', long, default_value = DEFAULT_FIELD_NAME)]
    pub field_name: String,

    /// Save only the names in the output, ignoring all other data
    #[arg(long)]
    pub save_names_only: bool,

    /// Log level (0=info, 1=debug, 2=trace)
    #[arg(long, visible_alias = "ll", default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub log_level: u8,

    /// Log file, appended to in addition to stderr
    #[arg(long, visible_alias = "lf")]
    pub log_file: Option<PathBuf>,

    /// TOML file with extra titles, suffixes, prefixes and first-name titles
    #[arg(long)]
    pub constants: Option<PathBuf>,
}

impl CliArgs {
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input_file.as_ref().or(self.input.as_ref())
    }

    pub fn into_config(self) -> Result<ParseConfig> {
        let input = self
            .input_file
            .or(self.input)
            .unwrap_or_default();
        let config = ParseConfig::new(
            input,
            self.output_file,
            Some(self.field_name),
            self.save_names_only,
        )?;
        match self.constants {
            Some(path) => config.with_name_constants(path),
            None => Ok(config),
        }
    }
}
