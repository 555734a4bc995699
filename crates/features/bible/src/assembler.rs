//! Narrows an extracted chapter to the requested verses.

use crate::error::BibleError;
use crate::models::ExtractedVerse;
use crate::selector::{VerseSelector, VerseSet};

/// Selected verses and their combined text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPassage {
    pub verses: Vec<ExtractedVerse>,
    pub text: String,
}

impl AssembledPassage {
    /// Numbers that made it into the passage.
    #[must_use]
    pub fn numbers(&self) -> VerseSet {
        self.verses.iter().map(|verse| verse.number).collect()
    }
}

/// Keeps the chapter verses named by `selector`, in chapter order.
///
/// Requested numbers the chapter lacks are dropped as long as one requested verse exists.
///
/// # Errors
/// Returns [`BibleError::VerseNotFound`] when none of the requested verses exist.
pub fn assemble(
    selector: &VerseSelector,
    chapter_verses: Vec<ExtractedVerse>,
) -> Result<AssembledPassage, BibleError> {
    let verses: Vec<ExtractedVerse> = match selector {
        VerseSelector::All => chapter_verses,
        VerseSelector::Specific(wanted) => {
            let found: Vec<_> =
                chapter_verses.into_iter().filter(|verse| wanted.contains(verse.number)).collect();
            if found.is_empty() && !wanted.is_empty() {
                return Err(BibleError::VerseNotFound { missing: wanted.clone(), context: None });
            }
            found
        },
    };

    let text = verses.iter().map(|verse| verse.text.as_str()).collect::<Vec<_>>().join(" ");
    Ok(AssembledPassage { verses, text })
}
