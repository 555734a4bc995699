mod common;

use common::{FailingFetcher, FixtureFetcher, JOHN_3_16, JOHN_3_17, JOHN_3_18, bible_with};
use lectio_bible::{BibleError, VerseRequest, VerseSet};
use std::sync::Arc;

#[tokio::test]
async fn range_resolves_against_the_fixture() {
    let bible = bible_with(Arc::new(FixtureFetcher::default()));

    let result = bible
        .resolve_verse(&VerseRequest::new("JOHN").chapter("3").verses("16-18").version("KJV"))
        .await
        .unwrap();

    assert_eq!(result.book, "John");
    assert_eq!(result.chapter, 3);
    assert_eq!(result.version, "KJV");
    assert_eq!(result.citation, "John 3:16-18");
    assert_eq!(result.verses.iter().map(|v| v.number).collect::<Vec<_>>(), vec![16, 17, 18]);
    assert_eq!(result.text, format!("{JOHN_3_16} {JOHN_3_17} {JOHN_3_18}"));
}

#[tokio::test]
async fn aliases_and_lower_case_versions_reach_the_same_page() {
    let fetcher = Arc::new(FixtureFetcher::default());
    let bible = bible_with(fetcher.clone());

    for book in ["jn", "John", "JHN"] {
        bible
            .resolve_verse(&VerseRequest::new(book).chapter("3").verses("16").version("kjv"))
            .await
            .unwrap();
    }

    let requests = fetcher.requests.lock().unwrap();
    assert!(requests.iter().all(|path| path == "1/JHN.3.KJV"), "{requests:?}");
}

#[tokio::test]
async fn whole_chapter_by_default() {
    let bible = bible_with(Arc::new(FixtureFetcher::default()));

    let result = bible.resolve_verse(&VerseRequest::new("John").chapter("3")).await.unwrap();

    assert_eq!(result.verses.len(), 21);
    assert_eq!(result.citation, "John 3");
    assert!(result.text.starts_with("There was a man of the Pharisees"));
}

#[tokio::test]
async fn absent_verses_are_not_found() {
    let bible = bible_with(Arc::new(FixtureFetcher::default()));

    let err = bible
        .resolve_verse(&VerseRequest::new("John").chapter("3").verses("999"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert!(matches!(&err, BibleError::VerseNotFound { missing, .. } if *missing == VerseSet::single(999)));
    assert_eq!(err.to_string(), "Verses 999 not found (John 3)");
}

#[tokio::test]
async fn partial_overlap_cites_what_was_found() {
    let bible = bible_with(Arc::new(FixtureFetcher::default()));

    let result = bible
        .resolve_verse(&VerseRequest::new("John").chapter("3").verses("20-25"))
        .await
        .unwrap();

    assert_eq!(result.citation, "John 3:20-21");
}

#[tokio::test]
async fn invalid_input_never_reaches_the_upstream() {
    let fetcher = Arc::new(FixtureFetcher::default());
    let bible = bible_with(fetcher.clone());

    let cases = [
        (VerseRequest::new("John").chapter("abc"), "Chapter must be a number"),
        (VerseRequest::new("John").chapter("0"), "Chapter must be greater than 0"),
        (VerseRequest::new("John").verses("9-5"), "Invalid verses '9-5': range start exceeds its end"),
        (VerseRequest::new("John").chapter("3").verses(""), "Invalid verses '': not a verse number"),
        (VerseRequest::new("John").version("KLINGON"), "Unknown version 'KLINGON'"),
        (VerseRequest::new(" "), "Missing field 'book'"),
    ];
    for (request, message) in cases {
        let err = bible.resolve_verse(&request).await.unwrap_err();
        assert_eq!(err.to_string(), message);
    }

    assert!(fetcher.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_books_surface_the_upstream_answer() {
    let fetcher = Arc::new(FixtureFetcher::default());
    let bible = bible_with(fetcher.clone());

    let err = bible.resolve_verse(&VerseRequest::new("Enoch")).await.unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert_eq!(fetcher.requests.lock().unwrap().as_slice(), ["1/ENOCH.1.KJV"]);
}

#[tokio::test]
async fn unknown_book_codes_are_reduced_to_letters_and_digits() {
    let fetcher = Arc::new(FixtureFetcher::default());
    let bible = bible_with(fetcher.clone());

    for book in ["%2e%2e/%2e%2e/x", "JHN?x="] {
        let err = bible.resolve_verse(&VerseRequest::new(book).chapter("3")).await.unwrap_err();
        assert_eq!(err.status_code(), 404, "{book}");
    }

    assert_eq!(
        fetcher.requests.lock().unwrap().as_slice(),
        ["1/2E2E2E2EX.3.KJV", "1/JHNX.3.KJV"]
    );
}

#[tokio::test]
async fn upstream_status_is_preserved() {
    let bible = bible_with(Arc::new(FailingFetcher(504)));

    let err = bible.resolve_verse(&VerseRequest::new("John")).await.unwrap_err();

    assert_eq!(err.status_code(), 504);
}
