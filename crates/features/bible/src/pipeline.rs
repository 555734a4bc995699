//! Reference resolution: validate, fetch, extract, assemble.

use crate::Bible;
use crate::assembler::assemble;
use crate::catalog::{citation, resolve_book};
use crate::error::{BibleError, BibleErrorExt};
use crate::fetcher::PassageRequest;
use crate::models::{VerseQuery, VerseResult};
use crate::selector::{VerseSelector, parse_selector};
use lectio_domain::constants::{ALL_VERSES, DEFAULT_CHAPTER, DEFAULT_VERSION};
use reqwest::StatusCode;
use tracing::{debug, info};

/// A verse lookup with defaults applied; values are still unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRequest {
    pub book: String,
    pub chapter: String,
    pub verses: String,
    pub version: String,
}

impl VerseRequest {
    /// Whole first chapter of `book` in the default version.
    #[must_use]
    pub fn new(book: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter: DEFAULT_CHAPTER.to_owned(),
            verses: ALL_VERSES.to_owned(),
            version: DEFAULT_VERSION.to_owned(),
        }
    }

    #[must_use]
    pub fn chapter(mut self, chapter: impl Into<String>) -> Self {
        self.chapter = chapter.into();
        self
    }

    #[must_use]
    pub fn verses(mut self, verses: impl Into<String>) -> Self {
        self.verses = verses.into();
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

impl TryFrom<VerseQuery> for VerseRequest {
    type Error = BibleError;

    fn try_from(query: VerseQuery) -> Result<Self, Self::Error> {
        let book = query
            .book
            .filter(|book| !book.trim().is_empty())
            .ok_or_else(|| BibleError::invalid_input("Missing field 'book'"))?;

        Ok(Self {
            book,
            chapter: query.chapter.unwrap_or_else(|| DEFAULT_CHAPTER.to_owned()),
            verses: query.verses.unwrap_or_else(|| ALL_VERSES.to_owned()),
            version: query.version.unwrap_or_else(|| DEFAULT_VERSION.to_owned()),
        })
    }
}

/// Parses a chapter number; it must be a positive integer.
///
/// # Errors
/// Returns [`BibleError::InvalidInput`] with `Chapter must be a number` or
/// `Chapter must be greater than 0`.
pub fn parse_chapter(raw: &str) -> Result<u32, BibleError> {
    let value: i64 =
        raw.trim().parse().map_err(|_| BibleError::invalid_input("Chapter must be a number"))?;

    if value <= 0 {
        return Err(BibleError::invalid_input("Chapter must be greater than 0"));
    }
    u32::try_from(value).map_err(|_| BibleError::invalid_input("Chapter must be a number"))
}

impl Bible {
    /// Resolves one reference into its verses.
    ///
    /// # Errors
    /// * [`BibleError::InvalidInput`] for a blank book or a bad chapter.
    /// * [`BibleError::InvalidSelector`] for a malformed `verses` value.
    /// * [`BibleError::FetchFailed`] for an unknown version or an upstream failure.
    /// * [`BibleError::ExtractionFailed`] when the page holds no verses for the chapter.
    /// * [`BibleError::VerseNotFound`] when none of the requested verses exist.
    pub async fn resolve_verse(&self, request: &VerseRequest) -> Result<VerseResult, BibleError> {
        if request.book.trim().is_empty() {
            return Err(BibleError::invalid_input("Missing field 'book'"));
        }
        let chapter = parse_chapter(&request.chapter)?;
        let selector = parse_selector(&request.verses)?;

        let version = self.versions.resolve(&request.version).ok_or_else(|| {
            BibleError::fetch_failed(
                StatusCode::NOT_FOUND.as_u16(),
                format!("Unknown version '{}'", request.version.trim()),
            )
        })?;
        let book = resolve_book(&request.book);
        debug!(book = %book.usfm, chapter, version = %version.code, "Reference validated");

        let passage = self.fetcher.fetch(&PassageRequest { book, chapter, version }).await?;
        let chapter_verses = self.extractor.extract(&passage.html, chapter)?;
        debug!(count = chapter_verses.len(), "Chapter extracted");

        let PassageRequest { book, version, .. } = passage.request;
        let assembled = assemble(&selector, chapter_verses)
            .context(citation(&book.name, chapter, None))?;

        let cited = match selector {
            VerseSelector::All => None,
            VerseSelector::Specific(_) => Some(assembled.numbers()),
        };
        let citation = citation(&book.name, chapter, cited.as_ref());
        info!(%citation, version = %version.code, verses = assembled.verses.len(), "Verses resolved");

        Ok(VerseResult {
            book: book.name,
            chapter,
            version: version.code,
            citation,
            verses: assembled.verses,
            text: assembled.text,
        })
    }
}
