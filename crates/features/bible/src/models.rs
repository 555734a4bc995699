use lectio_derive::api_model;

/// One verse of a chapter.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct ExtractedVerse {
    /// Verse number as printed in the chapter
    pub number: u32,
    /// Verse text without labels or footnotes
    pub text: String,
}

/// Resolved verses of one reference.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct VerseResult {
    /// Canonical book name, or the upper-cased input for books outside the catalog
    pub book: String,
    pub chapter: u32,
    /// Upper-case translation code
    pub version: String,
    /// Reference such as `John 3:16-18`
    pub citation: String,
    /// Selected verses in ascending order
    pub verses: Vec<ExtractedVerse>,
    /// Verse texts joined by single spaces
    pub text: String,
}

/// Query parameters of `GET /api/v1/verse`; every value arrives as raw text.
#[api_model(params, deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq, Eq)]
pub struct VerseQuery {
    /// Book name, abbreviation or USFM code (`John`, `Jn`, `JHN`)
    pub book: Option<String>,
    /// Chapter number, defaults to `1`
    pub chapter: Option<String>,
    /// `16`, `16-18`, `5,7-9`; defaults to `-1` (whole chapter)
    pub verses: Option<String>,
    /// Translation code, defaults to `KJV`
    pub version: Option<String>,
}
