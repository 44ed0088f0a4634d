//! Heuristic human-name parser.
//!
//! Handles the three common shapes of a name field:
//!
//! - `Title First Middle Last Suffix`
//! - `First Last, Suffix[, Suffix]`
//! - `Last, Title First Middle Suffix[, Suffix]`
//!
//! Nicknames in double quotes, parentheses or whole-word single quotes are
//! pulled out first. Words are classified against [`NameConstants`].

pub mod constants;

pub use constants::{ConstantsOverrides, NameConstants};

use crate::domain::model::HumanName;
use crate::domain::ports::NameParser;
use regex::Regex;
use std::sync::LazyLock;

static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["“]([^"”]*)["”]"#).expect("valid nickname regex"));
static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*)\)").expect("valid nickname regex"));

#[derive(Debug, Default)]
struct Pieces<'a> {
    title: Vec<&'a str>,
    first: Vec<&'a str>,
    middle: Vec<&'a str>,
    last: Vec<&'a str>,
    suffix: Vec<&'a str>,
}

fn extract_nicknames(input: &str) -> (String, Vec<String>) {
    let mut nicknames = Vec::new();
    let mut remaining = input.to_string();
    for re in [&*DOUBLE_QUOTED, &*PARENTHESIZED] {
        for caps in re.captures_iter(&remaining) {
            let nickname = caps[1].trim();
            if !nickname.is_empty() {
                nicknames.push(nickname.to_string());
            }
        }
        remaining = re.replace_all(&remaining, " ").into_owned();
    }
    let remaining = take_single_quoted(&remaining, &mut nicknames);
    (remaining, nicknames)
}

fn is_word_boundary(c: Option<char>) -> bool {
    c.map_or(true, char::is_whitespace)
}

/// Moves `'...'` spans into `nicknames`. Quotes only count at word boundaries, so
/// O'Brien is left alone, and the whitespace around a span is kept so adjacent
/// spans (`'Al' 'Bo'`) are both found.
fn take_single_quoted(input: &str, nicknames: &mut Vec<String>) -> String {
    let mut output = String::with_capacity(input.len());
    let mut copied = 0;
    let mut search = 0;
    while let Some(offset) = input[search..].find('\'') {
        let open = search + offset;
        search = open + 1;
        if !is_word_boundary(input[..open].chars().next_back()) {
            continue;
        }
        let close = input[open + 1..]
            .match_indices('\'')
            .map(|(i, _)| open + 1 + i)
            .find(|&i| i > open + 1 && is_word_boundary(input[i + 1..].chars().next()));
        if let Some(close) = close {
            let nickname = input[open + 1..close].trim();
            if !nickname.is_empty() {
                nicknames.push(nickname.to_string());
            }
            output.push_str(&input[copied..open]);
            output.push(' ');
            copied = close + 1;
            search = close + 1;
        }
    }
    output.push_str(&input[copied..]);
    output
}

fn is_single_letter(word: &str) -> bool {
    word.trim_end_matches('.').chars().count() == 1
}

#[derive(Debug, Clone, Default)]
pub struct HeuristicNameParser {
    constants: NameConstants,
}

impl HeuristicNameParser {
    pub fn new(constants: NameConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &NameConstants {
        &self.constants
    }

    fn all_suffixes(&self, part: &str) -> bool {
        let mut words = part.split_whitespace().peekable();
        words.peek().is_some() && words.all(|w| self.constants.is_suffix(w))
    }

    /// Index where trailing suffixes start. At least one name word stays in front
    /// of them, two when the suffix is a single letter ("Mary V" keeps V as a name).
    fn suffix_start(&self, words: &[&str], start: usize) -> usize {
        let mut end = words.len();
        while end > start {
            let word = words[end - 1];
            let needed = if is_single_letter(word) { 2 } else { 1 };
            if end - start > needed && self.constants.is_suffix(word) {
                end -= 1;
            } else {
                break;
            }
        }
        end
    }

    fn parse_in_order<'a>(&self, words: &[&'a str], pieces: &mut Pieces<'a>) {
        let mut start = 0;
        while start < words.len()
            && self.constants.is_title(words[start])
            && (start + 1 < words.len() || words.len() == 1)
        {
            start += 1;
        }
        pieces.title.extend_from_slice(&words[..start]);

        let end = self.suffix_start(words, start);
        let names = &words[start..end];
        pieces.suffix.extend_from_slice(&words[end..]);

        match names {
            [] => {}
            [only] => {
                let swap_to_last = pieces
                    .title
                    .last()
                    .is_some_and(|t| !self.constants.is_first_name_title(t));
                if swap_to_last {
                    pieces.last.push(*only);
                } else {
                    pieces.first.push(*only);
                }
            }
            [first, rest @ ..] => {
                // Surname starts at the first inner prefix ("van der Waals"), else the final word.
                let last_start = rest[..rest.len() - 1]
                    .iter()
                    .position(|w| self.constants.is_prefix(w))
                    .unwrap_or(rest.len() - 1);
                pieces.first.push(*first);
                pieces.middle.extend_from_slice(&rest[..last_start]);
                pieces.last.extend_from_slice(&rest[last_start..]);
            }
        }
    }

    fn parse_last_first<'a>(&self, last: &'a str, given: &'a str, pieces: &mut Pieces<'a>) {
        pieces.last.extend(last.split_whitespace());

        let words: Vec<&str> = given.split_whitespace().collect();
        let mut start = 0;
        while start < words.len() && self.constants.is_title(words[start]) {
            start += 1;
        }
        pieces.title.extend_from_slice(&words[..start]);

        let end = self.suffix_start(&words, start);
        if let Some((first, middle)) = words[start..end].split_first() {
            pieces.first.push(*first);
            pieces.middle.extend_from_slice(middle);
        }
        pieces.suffix.extend_from_slice(&words[end..]);
    }
}

impl NameParser for HeuristicNameParser {
    fn parse(&self, full_name: &str) -> HumanName {
        let (remaining, nicknames) = extract_nicknames(full_name);
        let parts: Vec<&str> = remaining
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let mut pieces = Pieces::default();
        match parts.as_slice() {
            [] => {}
            [single] => {
                let words: Vec<&str> = single.split_whitespace().collect();
                self.parse_in_order(&words, &mut pieces);
            }
            [head, rest @ ..] if rest.iter().all(|p| self.all_suffixes(p)) => {
                let words: Vec<&str> = head.split_whitespace().collect();
                self.parse_in_order(&words, &mut pieces);
                for part in rest {
                    pieces.suffix.extend(part.split_whitespace());
                }
            }
            [last, given, rest @ ..] => {
                self.parse_last_first(last, given, &mut pieces);
                for part in rest {
                    pieces.suffix.extend(part.split_whitespace());
                }
            }
        }

        tracing::trace!(
            "parsed '{}': title={:?} first={:?} middle={:?} last={:?} suffix={:?}",
            full_name,
            pieces.title,
            pieces.first,
            pieces.middle,
            pieces.last,
            pieces.suffix
        );

        HumanName {
            title: pieces.title.join(" "),
            first: pieces.first.join(" "),
            middle: pieces.middle.join(" "),
            last: pieces.last.join(" "),
            suffix: pieces.suffix.join(", "),
            nickname: nicknames.join(" "),
            original: full_name.to_string(),
        }
    }
}
