use crate::selector::VerseSet;
use std::borrow::Cow;

/// Failures of the verse lookup pipeline; each carries its HTTP status.
#[lectio_derive::lectio_error]
pub enum BibleError {
    /// Missing book, malformed chapter.
    #[status(400)]
    #[error("{message}")]
    InvalidInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[status(400)]
    #[error("Invalid verses '{token}': {reason}")]
    InvalidSelector { token: String, reason: &'static str, context: Option<Cow<'static, str>> },

    /// Transport failure, upstream error status or an unknown version code.
    #[status(status)]
    #[error("{message}{}", format_context(.context))]
    FetchFailed { status: u16, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The page came back but does not hold the chapter's verses.
    #[status(404)]
    #[error("{message}")]
    ExtractionFailed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[status(404)]
    #[error("Verses {missing} not found{}", format_context(.context))]
    VerseNotFound { missing: VerseSet, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl BibleError {
    pub(crate) fn invalid_input(message: &'static str) -> Self {
        Self::InvalidInput { message: message.into(), context: None }
    }

    pub(crate) fn invalid_selector(token: &str, reason: &'static str) -> Self {
        Self::InvalidSelector { token: token.to_owned(), reason, context: None }
    }

    pub(crate) fn fetch_failed(status: u16, message: impl Into<Cow<'static, str>>) -> Self {
        Self::FetchFailed { status, message: message.into(), context: None }
    }

    pub(crate) fn extraction_failed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::ExtractionFailed { message: message.into(), context: None }
    }
}

#[cfg(feature = "server")]
impl From<BibleError> for lectio_kernel::server::ApiError {
    fn from(err: BibleError) -> Self {
        Self::new(err.status_code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_the_boundary_table() {
        assert_eq!(BibleError::invalid_input("Missing field 'book'").status_code(), 400);
        assert_eq!(BibleError::invalid_selector("abc", "not a number").status_code(), 400);
        assert_eq!(BibleError::fetch_failed(504, "Upstream timed out").status_code(), 504);
        assert_eq!(BibleError::extraction_failed("no chapter").status_code(), 404);
        assert_eq!(
            BibleError::VerseNotFound { missing: VerseSet::single(999), context: None }
                .status_code(),
            404
        );
        assert_eq!(BibleError::from("boom").status_code(), 500);
    }

    #[test]
    fn boundary_messages_are_verbatim() {
        assert_eq!(
            BibleError::invalid_input("Chapter must be a number").to_string(),
            "Chapter must be a number"
        );
        assert_eq!(
            BibleError::invalid_selector("9-5", "range start exceeds its end").to_string(),
            "Invalid verses '9-5': range start exceeds its end"
        );
    }

    #[test]
    fn missing_verses_are_named_compactly() {
        let err = BibleError::VerseNotFound {
            missing: VerseSet::list([40, 41, 42, 50]),
            context: Some("John 3".into()),
        };
        assert_eq!(err.to_string(), "Verses 40-42,50 not found (John 3)");
    }
}
