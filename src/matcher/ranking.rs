use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Match quality between a candidate string and a query, best first.
///
/// `Fuzzy` carries a closeness sub-score in `(1.0, 2.0]`; fixed tiers always
/// outrank it, `NoMatch` never does.
#[derive(Debug, Clone, Copy)]
pub enum Ranking {
    CaseSensitiveEqual,
    Equal,
    StartsWith,
    WordStartsWith,
    Contains,
    Acronym,
    Fuzzy(f64),
    NoMatch,
}

impl Ranking {
    fn tier_value(self) -> u8 {
        match self {
            Ranking::CaseSensitiveEqual => 7,
            Ranking::Equal => 6,
            Ranking::StartsWith => 5,
            Ranking::WordStartsWith => 4,
            Ranking::Contains => 3,
            Ranking::Acronym => 2,
            Ranking::Fuzzy(_) => 1,
            Ranking::NoMatch => 0,
        }
    }

    pub fn is_match(self) -> bool {
        !matches!(self, Ranking::NoMatch)
    }
}

// f64 sub-scores rule out Eq; two Fuzzy ranks are equal iff their sub-scores
// are.
impl PartialEq for Ranking {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Ranking::Fuzzy(a), Ranking::Fuzzy(b)) => a == b,
            _ => self.tier_value() == other.tier_value(),
        }
    }
}

impl PartialOrd for Ranking {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (Ranking::Fuzzy(a), Ranking::Fuzzy(b)) => a.partial_cmp(b),
            _ => self.tier_value().partial_cmp(&other.tier_value()),
        }
    }
}

/// Strip diacritics via NFD decomposition, dropping combining marks.
///
/// Borrows when nothing changes (ASCII fast path included) so the hot loop
/// over catalog entries stays allocation-free for plain labels.
pub fn strip_diacritics(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }
    let stripped: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();
    if stripped == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(stripped)
    }
}

fn is_word_delimiter(c: char) -> bool {
    c == ' ' || c == '-'
}

/// First character of each space/hyphen separated word.
fn acronym_of(s: &str) -> String {
    let mut acronym = String::new();
    let mut prev_was_delimiter = true;
    for c in s.chars() {
        if is_word_delimiter(c) {
            prev_was_delimiter = true;
        } else {
            if prev_was_delimiter {
                acronym.push(c);
            }
            prev_was_delimiter = false;
        }
    }
    acronym
}

/// Greedy in-order character scan; score shrinks as matched characters
/// spread apart. Expects both sides already lowercased.
fn closeness_ranking(candidate: &str, query: &str) -> Ranking {
    let mut candidate_chars = candidate.chars().enumerate();
    let mut first_match: Option<usize> = None;
    let mut last_match = 0usize;

    for query_char in query.chars() {
        match candidate_chars.find(|&(_, c)| c == query_char) {
            Some((pos, _)) => {
                first_match.get_or_insert(pos);
                last_match = pos;
            }
            None => return Ranking::NoMatch,
        }
    }

    let spread = last_match - first_match.unwrap_or(0);
    if spread == 0 {
        Ranking::Fuzzy(2.0)
    } else {
        Ranking::Fuzzy(1.0 + 1.0 / spread as f64)
    }
}

/// Classify how well `candidate` matches `query`, diacritic-insensitively.
///
/// Tier checks run from most to least specific; the first hit wins. A
/// single-character query that is not a substring never reaches the acronym
/// or fuzzy tiers.
pub fn match_ranking(candidate: &str, query: &str) -> Ranking {
    let candidate = strip_diacritics(candidate);
    let query = strip_diacritics(query);

    let query_chars = query.chars().count();
    if query_chars > candidate.chars().count() {
        return Ranking::NoMatch;
    }

    if *candidate == *query {
        return Ranking::CaseSensitiveEqual;
    }

    let candidate_lower = candidate.to_lowercase();
    let query_lower = query.to_lowercase();

    if let Some(first) = candidate_lower.find(&query_lower) {
        if first == 0 {
            if candidate_lower.len() == query_lower.len() {
                return Ranking::Equal;
            }
            return Ranking::StartsWith;
        }
        let bytes = candidate_lower.as_bytes();
        for (pos, _) in candidate_lower.match_indices(&query_lower) {
            if pos > 0 && bytes[pos - 1] == b' ' {
                return Ranking::WordStartsWith;
            }
        }
        return Ranking::Contains;
    }

    if query_chars == 1 {
        return Ranking::NoMatch;
    }

    if acronym_of(&candidate_lower).contains(&query_lower) {
        return Ranking::Acronym;
    }

    closeness_ranking(&candidate_lower, &query_lower)
}
