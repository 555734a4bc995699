//! Bible feature slice: resolves a scripture reference into verse text.
//!
//! A lookup runs selector parsing, the chapter page fetch, verse extraction and
//! assembly. The fetch and the extraction sit behind [`PassageFetcher`] and
//! [`PassageExtractor`] so either can be swapped (tests use a stub fetcher).
//!
//! ```rust,no_run
//! use lectio_bible::{VerseRequest, init};
//! use lectio_kernel::domain::config::ApiConfig;
//!
//! # async fn lookup() -> Result<(), lectio_bible::BibleError> {
//! let slice = init(&ApiConfig::default())?;
//! let bible = slice.downcast_ref::<lectio_bible::Bible>().expect("bible slice");
//! let result = bible.resolve_verse(&VerseRequest::new("John").chapter("3").verses("16")).await?;
//! println!("{}: {}", result.citation, result.text);
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod catalog;
mod error;
pub mod extractor;
pub mod fetcher;
pub mod models;
pub mod pipeline;
pub mod selector;
#[cfg(feature = "server")]
pub mod server;

pub use crate::error::{BibleError, BibleErrorExt};
pub use crate::extractor::{ChapterContentExtractor, PassageExtractor};
pub use crate::fetcher::{HttpPassageFetcher, PassageFetcher, PassageRequest, RawPassage};
pub use crate::models::{ExtractedVerse, VerseQuery, VerseResult};
pub use crate::pipeline::VerseRequest;
pub use crate::selector::{VerseSelector, VerseSet, parse_selector};

use crate::catalog::VersionTable;
use lectio_kernel::domain::config::ApiConfig;
use lectio_kernel::domain::registry::InitializedSlice;
use std::sync::Arc;

/// Bible feature state, shared by every request.
#[lectio_derive::lectio_slice]
pub struct Bible {
    pub fetcher: Arc<dyn PassageFetcher>,
    pub extractor: Arc<dyn PassageExtractor>,
    pub versions: VersionTable,
}

/// Builds the slice with the HTTP fetcher described by `config.upstream`.
///
/// # Errors
/// Returns [`BibleError::Internal`] if the upstream HTTP client cannot be built.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, BibleError> {
    let upstream = &config.upstream;
    let fetcher = HttpPassageFetcher::new(upstream)?;
    let versions = VersionTable::with_overrides(&upstream.versions);

    tracing::info!(
        base_url = %upstream.base_url,
        versions = versions.codes().count(),
        "Bible slice initialized"
    );

    let slice = Bible::from(BibleInner {
        fetcher: Arc::new(fetcher),
        extractor: Arc::new(ChapterContentExtractor),
        versions,
    });

    Ok(slice.into())
}
