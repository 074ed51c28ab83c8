//! Best-effort pattern extraction from provider text fields.
//!
//! Both extractors are total: "no match" is `None`, never an error.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email regex")
});

static MAILTO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mailto:([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})")
        .expect("valid mailto regex")
});

static CID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]cid=([^&]+)").expect("valid cid regex"));

static DATA_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!1s([^!]+)!").expect("valid data token regex"));

static PLACE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"place/([^/]+)").expect("valid place path regex"));

static COORDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+)").expect("valid coordinates regex")
});

/// Returns the first email address found in free text.
#[must_use]
pub fn extract_email_from_text(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_owned())
}

/// Returns the address of a `mailto:` link embedded in a website field.
#[must_use]
pub fn extract_mailto(website: &str) -> Option<String> {
    if !website.contains("mailto:") {
        return None;
    }
    MAILTO_RE
        .captures(website)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Derives a contact email for a business.
///
/// The description is scanned first; when it is absent or holds no address,
/// a `mailto:` website is tried. No validation beyond syntax.
#[must_use]
pub fn extract_email(description: Option<&str>, website: Option<&str>) -> Option<String> {
    description
        .and_then(extract_email_from_text)
        .or_else(|| website.and_then(extract_mailto))
}

/// Derives a place identifier from a Google Maps URL.
///
/// Tried in priority order, first match wins:
/// 1. `cid=` query parameter value.
/// 2. `!1s<token>!` location-data token, with a leading `0x` removed.
/// 3. Path segment after `place/`.
/// 4. `@<lat>,<lon>` coordinates, returned as `"<lat>,<lon>"`.
#[must_use]
pub fn extract_place_id(url: &str) -> Option<String> {
    if let Some(cid) = CID_RE.captures(url).and_then(|c| c.get(1)) {
        return Some(cid.as_str().to_owned());
    }

    if let Some(token) = DATA_TOKEN_RE.captures(url).and_then(|c| c.get(1)) {
        let token = token.as_str();
        return Some(token.strip_prefix("0x").unwrap_or(token).to_owned());
    }

    if let Some(segment) = PLACE_PATH_RE.captures(url).and_then(|c| c.get(1)) {
        return Some(segment.as_str().to_owned());
    }

    COORDS_RE
        .captures(url)
        .map(|c| format!("{},{}", &c[1], &c[2]))
}
