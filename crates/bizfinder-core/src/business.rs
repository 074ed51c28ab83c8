use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum keyword length, counted in characters after trimming.
pub const MIN_KEYWORD_CHARS: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("search keyword is empty")]
    EmptyKeyword,

    #[error("search keyword must be at least {min} characters, got {len}")]
    KeywordTooShort { len: usize, min: usize },
}

/// Language and country codes sent to the search provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub language: &'static str,
    pub country: &'static str,
}

impl Region {
    /// The only region searches run against, with English result text.
    pub const ISRAEL: Region = Region {
        language: "en",
        country: "il",
    };
}

impl Default for Region {
    fn default() -> Self {
        Self::ISRAEL
    }
}

/// A validated user search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    keyword: String,
    region: Region,
}

impl SearchQuery {
    /// Builds a query for the fixed region from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyKeyword`] when the keyword is blank and
    /// [`CoreError::KeywordTooShort`] when it has fewer than
    /// [`MIN_KEYWORD_CHARS`] characters after trimming.
    pub fn new(keyword: &str) -> Result<Self, CoreError> {
        let keyword = keyword.trim();
        let len = keyword.chars().count();
        if len == 0 {
            return Err(CoreError::EmptyKeyword);
        }
        if len < MIN_KEYWORD_CHARS {
            return Err(CoreError::KeywordTooShort {
                len,
                min: MIN_KEYWORD_CHARS,
            });
        }
        Ok(Self {
            keyword: keyword.to_owned(),
            region: Region::default(),
        })
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }
}

/// A local business found by a search.
///
/// Every optional field is `None` when the provider did not supply it;
/// presentation layers decide how to render absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Business {
    /// Creates a business with only a name; every other field is unknown.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            phone: None,
            website: None,
            rating: None,
            review_count: None,
            category: None,
            hours: None,
            place_id: None,
            email: None,
        }
    }
}
