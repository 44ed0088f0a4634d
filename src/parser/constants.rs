use crate::utils::error::{PipelineError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "miss", "mx", "dr", "doctor", "prof", "professor", "rev", "reverend",
    "fr", "father", "sir", "dame", "lord", "lady", "hon", "honorable", "judge", "justice",
    "capt", "captain", "col", "colonel", "gen", "general", "lt", "sgt", "sergeant", "adm",
    "admiral", "cmdr", "commander", "president", "senator", "sen", "rep", "gov", "governor",
    "mayor", "rabbi", "imam", "pastor", "bishop", "sister", "brother", "chancellor", "king",
    "queen", "prince", "princess", "duke", "duchess", "countess", "baron", "baroness", "pope",
    "uncle", "aunt",
];

/// Titles after which a lone name is a first name ("Sir Elton"), not a surname ("Mr. Johnson").
const FIRST_NAME_TITLES: &[&str] = &[
    "sir", "dame", "king", "queen", "prince", "princess", "father", "brother", "sister", "pope",
    "uncle", "aunt", "lord", "lady",
];

const SUFFIXES: &[&str] = &[
    "jr", "sr", "ii", "iii", "iv", "v", "esq", "esquire", "phd", "md", "dds", "dmd", "jd", "cpa",
    "rn", "mba", "dvm", "cfa", "pe", "ret", "od", "lpn", "np", "pa", "qc", "kc", "obe", "mbe",
    "cbe",
];

const PREFIXES: &[&str] = &[
    "abu", "al", "bin", "bon", "da", "dal", "de", "degli", "dei", "del", "dela", "della",
    "delle", "delli", "dello", "der", "di", "dos", "du", "ibn", "la", "le", "san", "santa",
    "st", "ste", "ten", "ter", "van", "vander", "vel", "von",
];

/// Lowercase and drop periods, so `Ph.D.` and `phd` compare equal.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| *c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Extra vocabulary, as read from a TOML file. Every list is added to the built-in one.
///
/// ```toml
/// titles = ["Archdeacon"]
/// suffixes = ["FRCS"]
/// prefixes = ["bint"]
/// first_name_titles = ["Archdeacon"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstantsOverrides {
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub first_name_titles: Vec<String>,
}

/// Word lists the heuristic parser classifies name pieces with.
#[derive(Debug, Clone)]
pub struct NameConstants {
    titles: HashSet<String>,
    first_name_titles: HashSet<String>,
    suffixes: HashSet<String>,
    prefixes: HashSet<String>,
}

fn word_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| normalize_word(w)).collect()
}

impl Default for NameConstants {
    fn default() -> Self {
        Self {
            titles: word_set(TITLES),
            first_name_titles: word_set(FIRST_NAME_TITLES),
            suffixes: word_set(SUFFIXES),
            prefixes: word_set(PREFIXES),
        }
    }
}

impl NameConstants {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let overrides: ConstantsOverrides =
            toml::from_str(content).map_err(|e| PipelineError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;
        Ok(Self::default().with_overrides(&overrides))
    }

    pub fn with_overrides(mut self, overrides: &ConstantsOverrides) -> Self {
        let normalized = |words: &[String]| -> Vec<String> {
            words
                .iter()
                .map(|w| normalize_word(w.trim()))
                .filter(|w| !w.is_empty())
                .collect()
        };
        self.titles.extend(normalized(&overrides.titles));
        self.suffixes.extend(normalized(&overrides.suffixes));
        self.prefixes.extend(normalized(&overrides.prefixes));
        self.first_name_titles
            .extend(normalized(&overrides.first_name_titles));
        self
    }

    pub fn is_title(&self, word: &str) -> bool {
        self.titles.contains(&normalize_word(word))
    }

    pub fn is_first_name_title(&self, word: &str) -> bool {
        self.first_name_titles.contains(&normalize_word(word))
    }

    pub fn is_suffix(&self, word: &str) -> bool {
        self.suffixes.contains(&normalize_word(word))
    }

    pub fn is_prefix(&self, word: &str) -> bool {
        self.prefixes.contains(&normalize_word(word))
    }
}
