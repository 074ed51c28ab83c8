//! Scripted in-memory [`SearchProvider`] for aggregation tests.

use std::sync::Mutex;

use crate::error::ScraperError;
use crate::provider::{ProviderPage, ProviderQuery, SearchProvider};
use crate::types::LocalResult;

/// Replays one scripted response per call and records every query it saw.
pub(crate) struct FakeProvider {
    script: Vec<Result<ProviderPage, String>>,
    seen: Mutex<Vec<ProviderQuery>>,
}

impl FakeProvider {
    pub(crate) fn new(script: Vec<Result<ProviderPage, String>>) -> Self {
        Self {
            script,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<ProviderQuery> {
        self.seen.lock().expect("fake provider lock").clone()
    }

    pub(crate) fn starts(&self) -> Vec<Option<u32>> {
        self.requests().iter().map(|q| q.start).collect()
    }
}

impl SearchProvider for FakeProvider {
    async fn fetch_page(&self, query: &ProviderQuery) -> Result<ProviderPage, ScraperError> {
        let call = {
            let mut seen = self.seen.lock().expect("fake provider lock");
            seen.push(query.clone());
            seen.len() - 1
        };
        match self.script.get(call) {
            Some(Ok(page)) => Ok(page.clone()),
            Some(Err(message)) => Err(ScraperError::ApiError(message.clone())),
            None => Err(ScraperError::ApiError(format!("unscripted request #{call}"))),
        }
    }
}

/// A page of `count` titled results named `"<prefix> <n>"`.
pub(crate) fn page(prefix: &str, count: usize, has_next: bool) -> ProviderPage {
    ProviderPage {
        results: (1..=count)
            .map(|n| LocalResult {
                title: Some(format!("{prefix} {n}")),
                ..LocalResult::default()
            })
            .collect(),
        next_page: has_next.then(|| "https://serpapi.com/search.json?start=20".to_owned()),
    }
}
