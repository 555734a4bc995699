mod common;

use common::{JOHN_3_16, JOHN_3_KJV};
use lectio_bible::{ChapterContentExtractor, PassageExtractor};

#[test]
fn fixture_chapter_has_twenty_one_verses() {
    let verses = ChapterContentExtractor.extract(JOHN_3_KJV, 3).unwrap();

    let numbers: Vec<u32> = verses.iter().map(|v| v.number).collect();
    assert_eq!(numbers, (1..=21).collect::<Vec<_>>());
    assert_eq!(verses[15].text, JOHN_3_16);
}

#[test]
fn footnotes_and_headings_never_leak_into_text() {
    let verses = ChapterContentExtractor.extract(JOHN_3_KJV, 3).unwrap();

    assert_eq!(
        verses[2].text,
        "Jesus answered and said unto him, Verily, verily, I say unto thee, Except a man be born again, he cannot see the kingdom of God."
    );
    for verse in &verses {
        assert!(!verse.text.contains('#'), "verse {} kept a note marker", verse.number);
        assert!(!verse.text.contains("For God So Loved the World"));
        assert!(!verse.text.contains("Gr. begotten"));
        assert_eq!(verse.text, verse.text.trim());
        assert!(!verse.text.contains("  "));
    }
}

#[test]
fn extraction_is_deterministic() {
    let first = ChapterContentExtractor.extract(JOHN_3_KJV, 3).unwrap();
    let second = ChapterContentExtractor.extract(JOHN_3_KJV, 3).unwrap();
    assert_eq!(first, second);
}

#[test]
fn wrong_chapter_is_an_extraction_failure() {
    let err = ChapterContentExtractor.extract(JOHN_3_KJV, 4).unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_string(), "Chapter 4 not found in page");
}
