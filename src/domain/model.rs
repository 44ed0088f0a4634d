use std::fmt;

/// Prefix put in front of every name component column.
pub const PARSED_PREFIX: &str = "parsed_";

/// One CSV row: column name to value, in column order.
///
/// Inserting an existing key overwrites the value where it stands; new keys are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zips a header row with a value row. Surplus values without a header are dropped.
    pub fn from_row<H, V>(headers: &[H], values: V) -> Self
    where
        H: AsRef<str>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        headers
            .iter()
            .zip(values)
            .map(|(h, v)| (h.as_ref().to_string(), v.into()))
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// Header row plus every data row of an input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

/// Records ready to be written, with the column order they are written in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformResult {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

/// The fixed set of components a full name is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameComponent {
    Title,
    First,
    Middle,
    Last,
    Suffix,
    Nickname,
    Original,
}

impl NameComponent {
    /// Canonical order. Output columns follow it.
    pub const ALL: [NameComponent; 7] = [
        NameComponent::Title,
        NameComponent::First,
        NameComponent::Middle,
        NameComponent::Last,
        NameComponent::Suffix,
        NameComponent::Nickname,
        NameComponent::Original,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NameComponent::Title => "title",
            NameComponent::First => "first",
            NameComponent::Middle => "middle",
            NameComponent::Last => "last",
            NameComponent::Suffix => "suffix",
            NameComponent::Nickname => "nickname",
            NameComponent::Original => "original",
        }
    }

    /// Column name, e.g. `parsed_first`.
    pub fn column_name(self) -> String {
        format!("{}{}", PARSED_PREFIX, self.as_str())
    }
}

impl fmt::Display for NameComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A full name split into components. Absent components are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HumanName {
    pub title: String,
    pub first: String,
    pub middle: String,
    pub last: String,
    pub suffix: String,
    pub nickname: String,
    pub original: String,
}

impl HumanName {
    pub fn get(&self, component: NameComponent) -> &str {
        match component {
            NameComponent::Title => &self.title,
            NameComponent::First => &self.first,
            NameComponent::Middle => &self.middle,
            NameComponent::Last => &self.last,
            NameComponent::Suffix => &self.suffix,
            NameComponent::Nickname => &self.nickname,
            NameComponent::Original => &self.original,
        }
    }

    /// Components in canonical order.
    pub fn components(&self) -> impl Iterator<Item = (NameComponent, &str)> {
        NameComponent::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}
