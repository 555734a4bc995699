use crate::{Bible, VerseQuery, VerseRequest, VerseResult};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use lectio_derive::api_handler;
use lectio_domain::constants::BIBLE_TAG;
use lectio_kernel::prelude::{ApiError, ApiState};
use tracing::{Span, instrument};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes of the Bible slice.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(verse_handler))
}

#[api_handler(
    get,
    path = "/api/v1/verse",
    params(VerseQuery),
    responses(
        (status = OK, description = "Verses of the reference", body = VerseResult),
        (status = BAD_REQUEST, description = "Missing book, malformed chapter or verses", body = ApiError),
        (status = NOT_FOUND, description = "Unknown reference, version or verses", body = ApiError),
        (status = BAD_GATEWAY, description = "Upstream failure", body = ApiError),
        (status = GATEWAY_TIMEOUT, description = "Upstream timed out", body = ApiError),
    ),
    tag = BIBLE_TAG,
)]
#[instrument(
    name = "verse",
    skip_all,
    fields(book = tracing::field::Empty, chapter = tracing::field::Empty, verses = tracing::field::Empty, version = tracing::field::Empty)
)]
pub(crate) async fn verse_handler(
    State(state): State<ApiState>,
    query: Result<Query<VerseQuery>, QueryRejection>,
) -> Result<Json<VerseResult>, ApiError> {
    let Query(query) = query?;
    let request = VerseRequest::try_from(query)?;

    let span = Span::current();
    span.record("book", request.book.as_str());
    span.record("chapter", request.chapter.as_str());
    span.record("verses", request.verses.as_str());
    span.record("version", request.version.as_str());

    let bible = state.try_get_slice::<Bible>()?;
    let result = bible.resolve_verse(&request).await?;

    Ok(Json(result))
}
