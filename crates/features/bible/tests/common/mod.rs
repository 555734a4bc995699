#![allow(dead_code)]

use async_trait::async_trait;
use lectio_bible::catalog::VersionTable;
use lectio_bible::{
    Bible, BibleError, BibleInner, ChapterContentExtractor, PassageFetcher, PassageRequest,
    RawPassage,
};
use std::sync::{Arc, Mutex};

pub const JOHN_3_KJV: &str = include_str!("../fixtures/john3_kjv.html");

pub const JOHN_3_16: &str = "For God so loved the world, that he gave his only begotten Son, that whosoever believeth in him should not perish, but have everlasting life.";
pub const JOHN_3_17: &str = "For God sent not his Son into the world to condemn the world; but that the world through him might be saved.";
pub const JOHN_3_18: &str = "He that believeth on him is not condemned: but he that believeth not is condemned already, because he hath not believed in the name of the only begotten Son of God.";

/// Serves the John 3 fixture for `1/JHN.3.KJV` and answers 404 for anything else.
#[derive(Debug, Default)]
pub struct FixtureFetcher {
    pub requests: Mutex<Vec<String>>,
}

#[async_trait]
impl PassageFetcher for FixtureFetcher {
    async fn fetch(&self, request: &PassageRequest) -> Result<RawPassage, BibleError> {
        let path = request.path();
        self.requests.lock().unwrap().push(path.clone());

        if path == "1/JHN.3.KJV" {
            Ok(RawPassage { request: request.clone(), html: JOHN_3_KJV.to_owned() })
        } else {
            Err(BibleError::FetchFailed {
                status: 404,
                message: format!("Passage {path} not found").into(),
                context: None,
            })
        }
    }
}

/// Fails every fetch with the given status.
#[derive(Debug)]
pub struct FailingFetcher(pub u16);

#[async_trait]
impl PassageFetcher for FailingFetcher {
    async fn fetch(&self, _request: &PassageRequest) -> Result<RawPassage, BibleError> {
        Err(BibleError::FetchFailed {
            status: self.0,
            message: "Upstream timed out".into(),
            context: None,
        })
    }
}

pub fn bible_with(fetcher: Arc<dyn PassageFetcher>) -> Bible {
    Bible::new(BibleInner {
        fetcher,
        extractor: Arc::new(ChapterContentExtractor),
        versions: VersionTable::default(),
    })
}
