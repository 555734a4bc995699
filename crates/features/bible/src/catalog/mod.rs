//! Static knowledge about books and translations.

mod books;
mod versions;

pub use books::{BOOKS, Book, BookRef, find_book, resolve_book};
pub use versions::{Version, VersionTable};

/// Human-readable reference such as `John 3:16-18`, or `John 3` for a whole chapter.
#[must_use]
pub fn citation(book: &str, chapter: u32, verses: Option<&crate::selector::VerseSet>) -> String {
    match verses {
        Some(set) if !set.is_empty() => format!("{book} {chapter}:{set}"),
        _ => format!("{book} {chapter}"),
    }
}
