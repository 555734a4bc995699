//! Chapter page retrieval.

use crate::catalog::{BookRef, Version};
use crate::error::BibleError;
use async_trait::async_trait;
use lectio_domain::config::UpstreamConfig;
use reqwest::{StatusCode, Url};
use std::fmt::Debug;
use std::time::Duration;
use tracing::{debug, warn};

/// One chapter of one translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageRequest {
    pub book: BookRef,
    pub chapter: u32,
    pub version: Version,
}

impl PassageRequest {
    /// Upstream page path, `1/JHN.3.KJV`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}/{}", self.version.id, self.page())
    }

    fn page(&self) -> String {
        format!("{}.{}.{}", self.book.usfm, self.chapter, self.version.code)
    }
}

/// Fetched chapter markup and the request it answers.
#[derive(Debug, Clone)]
pub struct RawPassage {
    pub request: PassageRequest,
    pub html: String,
}

/// Source of chapter markup.
#[async_trait]
pub trait PassageFetcher: Debug + Send + Sync {
    /// Retrieves the page for `request`.
    ///
    /// # Errors
    /// Returns [`BibleError::FetchFailed`] carrying the status to answer with.
    async fn fetch(&self, request: &PassageRequest) -> Result<RawPassage, BibleError>;
}

/// Fetches chapter pages over HTTP with one shared client.
#[derive(Debug, Clone)]
pub struct HttpPassageFetcher {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpPassageFetcher {
    /// Builds the client from the `[upstream]` config section.
    ///
    /// # Errors
    /// Returns [`BibleError::Internal`] if the base URL is not a hierarchical URL or
    /// the HTTP client cannot be constructed.
    pub fn new(config: &UpstreamConfig) -> Result<Self, BibleError> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| BibleError::Internal {
                message: format!("Invalid upstream base URL '{}'", config.base_url).into(),
                context: None,
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| BibleError::Internal {
                message: e.to_string().into(),
                context: Some("Failed to build upstream HTTP client".into()),
            })?;

        Ok(Self { client, base_url })
    }

    /// Page URL below the base path; each part is pushed as one encoded segment.
    #[must_use]
    pub fn url(&self, request: &PassageRequest) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&request.version.id.to_string()).push(&request.page());
        }
        url
    }
}

#[async_trait]
impl PassageFetcher for HttpPassageFetcher {
    async fn fetch(&self, request: &PassageRequest) -> Result<RawPassage, BibleError> {
        let url = self.url(request);
        debug!(%url, "Fetching chapter page");

        let response =
            self.client.get(url.clone()).send().await.map_err(|e| transport_error(&url, &e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!(%url, "Upstream does not know this chapter");
            return Err(BibleError::fetch_failed(
                StatusCode::NOT_FOUND.as_u16(),
                format!(
                    "Passage {} {} ({}) not found",
                    request.book.name, request.chapter, request.version.code
                ),
            ));
        }
        if !status.is_success() {
            warn!(%url, %status, "Upstream answered with an error status");
            return Err(BibleError::fetch_failed(
                StatusCode::BAD_GATEWAY.as_u16(),
                format!("Upstream answered {status}"),
            ));
        }

        let html = response.text().await.map_err(|e| transport_error(&url, &e))?;
        debug!(%url, bytes = html.len(), "Fetched chapter page");

        Ok(RawPassage { request: request.clone(), html })
    }
}

fn transport_error(url: &Url, err: &reqwest::Error) -> BibleError {
    if err.is_timeout() {
        warn!(%url, "Upstream request timed out");
        BibleError::fetch_failed(StatusCode::GATEWAY_TIMEOUT.as_u16(), "Upstream timed out")
    } else {
        warn!(%url, error = %err, "Upstream request failed");
        BibleError::fetch_failed(
            StatusCode::BAD_GATEWAY.as_u16(),
            format!("Upstream request failed: {err}"),
        )
    }
}
