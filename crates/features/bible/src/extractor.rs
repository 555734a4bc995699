//! Verse extraction from chapter markup.
//!
//! The upstream reader renders a chapter as
//!
//! ```html
//! <div class="ChapterContent_chapter__x" data-usfm="JHN.3">
//!   <div class="ChapterContent_p__x">
//!     <span class="ChapterContent_verse__x" data-usfm="JHN.3.16">
//!       <span class="ChapterContent_label__x">16</span>
//!       <span class="ChapterContent_content__x">For God so loved the world,</span>
//!       <span class="ChapterContent_note__x">..</span>
//!     </span>
//!   </div>
//! </div>
//! ```
//!
//! Class names carry a build hash suffix, so they are matched by their module prefix.

use crate::error::BibleError;
use crate::models::ExtractedVerse;
use scraper::node::Element;
use scraper::{ElementRef, Html, Node};
use std::collections::BTreeMap;
use std::fmt::Debug;

const CHAPTER_CLASS: &str = "ChapterContent_chapter";
const VERSE_CLASS: &str = "ChapterContent_verse";
/// Subtrees inside a verse that are not verse text.
const SKIPPED_CLASSES: &[&str] =
    &["ChapterContent_label", "ChapterContent_note", "ChapterContent_heading"];

/// Turns chapter markup into verses; must be pure.
pub trait PassageExtractor: Debug + Send + Sync {
    /// Extracts the verses of `chapter`, ascending by number.
    ///
    /// # Errors
    /// Returns [`BibleError::ExtractionFailed`] when the markup holds no verses for `chapter`.
    fn extract(&self, html: &str, chapter: u32) -> Result<Vec<ExtractedVerse>, BibleError>;
}

/// Extractor for the upstream `ChapterContent` reader markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChapterContentExtractor;

impl PassageExtractor for ChapterContentExtractor {
    fn extract(&self, html: &str, chapter: u32) -> Result<Vec<ExtractedVerse>, BibleError> {
        let document = Html::parse_document(html);

        let container = document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| {
                has_module_class(el.value(), CHAPTER_CLASS) && usfm_chapter(el.value()) == Some(chapter)
            })
            .ok_or_else(|| {
                BibleError::extraction_failed(format!("Chapter {chapter} not found in page"))
            })?;

        // A verse split across paragraphs appears once per paragraph.
        let mut verses: BTreeMap<u32, String> = BTreeMap::new();
        for node in container.descendants().filter_map(ElementRef::wrap) {
            if !has_module_class(node.value(), VERSE_CLASS) {
                continue;
            }
            let Some(number) = usfm_verse(node.value()) else {
                continue;
            };

            let text = verses.entry(number).or_default();
            text.push(' ');
            collect_text(node, text);
        }

        let extracted: Vec<ExtractedVerse> = verses
            .into_iter()
            .filter_map(|(number, raw)| {
                let text = collapse_whitespace(&raw);
                (!text.is_empty()).then_some(ExtractedVerse { number, text })
            })
            .collect();

        if extracted.is_empty() {
            return Err(BibleError::extraction_failed(format!(
                "No verses found for chapter {chapter}"
            )));
        }
        Ok(extracted)
    }
}

/// Appends the verse text below `element`, skipping labels, notes and headings.
fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if SKIPPED_CLASSES.iter().any(|class| has_module_class(el, class)) => {},
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text(child, out);
                }
            },
            _ => {},
        }
    }
}

/// `ChapterContent_verse` matches `ChapterContent_verse` and `ChapterContent_verse__abc`.
fn has_module_class(element: &Element, module: &str) -> bool {
    element.classes().any(|class| {
        class.strip_prefix(module).is_some_and(|rest| rest.is_empty() || rest.starts_with("__"))
    })
}

/// `JHN.3` -> 3
fn usfm_chapter(element: &Element) -> Option<u32> {
    element.attr("data-usfm")?.rsplit('.').next()?.parse().ok()
}

/// `JHN.3.16` -> 16; merged verses such as `JHN.3.16+JHN.3.17` take the first.
fn usfm_verse(element: &Element) -> Option<u32> {
    let first = element.attr("data-usfm")?.split('+').next()?;
    let mut parts = first.trim().split('.');
    let (_book, _chapter, verse) = (parts.next()?, parts.next()?, parts.next()?);
    verse.parse().ok()
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
