//! Verse selector parsing.
//!
//! A selector is a comma-separated list of single verses and inclusive ranges
//! (`"16"`, `"16-18"`, `"5, 7-9"`). The whole value `-1` selects the entire chapter.

use crate::error::BibleError;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Selector value meaning "every verse of the chapter".
pub const ALL_VERSES: &str = lectio_domain::constants::ALL_VERSES;

/// Highest verse number a selector may name. Keeps ranges like `1-4000000000` bounded.
pub const MAX_VERSE_NUMBER: u32 = 1000;

/// Deduplicated verse numbers in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VerseSet(BTreeSet<u32>);

impl VerseSet {
    #[must_use]
    pub fn single(number: u32) -> Self {
        Self(BTreeSet::from([number]))
    }

    /// Inclusive range; empty when `start > end`.
    #[must_use]
    pub fn range(start: u32, end: u32) -> Self {
        Self((start..=end).collect())
    }

    #[must_use]
    pub fn list(numbers: impl IntoIterator<Item = u32>) -> Self {
        Self(numbers.into_iter().collect())
    }

    #[must_use]
    pub fn contains(&self, number: u32) -> bool {
        self.0.contains(&number)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u32> for VerseSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::list(iter)
    }
}

/// Compact form: consecutive runs fold into ranges, `5,7-9`.
impl fmt::Display for VerseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut numbers = self.iter().peekable();
        let mut first = true;

        while let Some(start) = numbers.next() {
            let mut end = start;
            while numbers.next_if(|&next| end.checked_add(1) == Some(next)).is_some() {
                end += 1;
            }

            if !first {
                f.write_str(",")?;
            }
            first = false;

            if start == end {
                write!(f, "{start}")?;
            } else {
                write!(f, "{start}-{end}")?;
            }
        }
        Ok(())
    }
}

/// Which verses of a chapter a request wants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VerseSelector {
    All,
    Specific(VerseSet),
}

impl VerseSelector {
    #[must_use]
    pub fn single(number: u32) -> Self {
        Self::Specific(VerseSet::single(number))
    }

    #[must_use]
    pub fn range(start: u32, end: u32) -> Self {
        Self::Specific(VerseSet::range(start, end))
    }

    #[must_use]
    pub fn list(numbers: impl IntoIterator<Item = u32>) -> Self {
        Self::Specific(VerseSet::list(numbers))
    }

    #[must_use]
    pub fn includes(&self, number: u32) -> bool {
        match self {
            Self::All => true,
            Self::Specific(set) => set.contains(number),
        }
    }
}

impl FromStr for VerseSelector {
    type Err = BibleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_selector(raw)
    }
}

/// Parses a raw `verses` value.
///
/// Exactly `-1` yields [`VerseSelector::All`]. Otherwise every
/// comma-separated token must be a verse number in `1..=MAX_VERSE_NUMBER` or a range
/// `start-end` of such numbers with `start <= end`.
///
/// # Errors
/// Returns [`BibleError::InvalidSelector`] naming the first offending token.
pub fn parse_selector(raw: &str) -> Result<VerseSelector, BibleError> {
    let raw = raw.trim();
    if raw == ALL_VERSES {
        return Ok(VerseSelector::All);
    }

    let mut numbers = BTreeSet::new();
    for token in raw.split(',').map(str::trim) {
        match token.split_once('-') {
            // A leading dash is a sign, not a range.
            Some((start, end)) if !start.trim().is_empty() => {
                let start = parse_verse_number(start, token)?;
                let end = parse_verse_number(end, token)?;
                if start > end {
                    return Err(BibleError::invalid_selector(token, "range start exceeds its end"));
                }
                numbers.extend(start..=end);
            },
            _ => {
                numbers.insert(parse_verse_number(token, token)?);
            },
        }
    }

    Ok(VerseSelector::Specific(VerseSet(numbers)))
}

fn parse_verse_number(part: &str, token: &str) -> Result<u32, BibleError> {
    let value: i64 = part
        .trim()
        .parse()
        .map_err(|_| BibleError::invalid_selector(token, "not a verse number"))?;

    if value <= 0 {
        return Err(BibleError::invalid_selector(token, "verse numbers start at 1"));
    }

    u32::try_from(value)
        .ok()
        .filter(|&number| number <= MAX_VERSE_NUMBER)
        .ok_or_else(|| BibleError::invalid_selector(token, "verse number is too large"))
}
