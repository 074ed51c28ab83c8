//! Normalization from raw provider records to [`bizfinder_core::Business`].
//!
//! Email and place-id derivation is delegated to [`crate::extract`]; this
//! module focuses on structural conversion.

use bizfinder_core::Business;

use crate::extract::{extract_email, extract_place_id};
use crate::types::LocalResult;

/// Normalizes a raw [`LocalResult`] into a [`Business`].
///
/// Returns `None` when the record has no usable title, since a business
/// without a name cannot be listed. Every other absent or blank field maps
/// to `None`. Pure: the same input always yields an equal output.
#[must_use]
pub fn normalize_result(result: &LocalResult) -> Option<Business> {
    let name = non_blank(result.title.as_deref())?;

    let website = non_blank(result.website.as_deref());
    let description = non_blank(result.description.as_deref());
    let email = extract_email(description.as_deref(), website.as_deref());

    // Provider place ids are authoritative; the link is only a fallback.
    let place_id = non_blank(result.place_id.as_deref())
        .or_else(|| result.link.as_deref().and_then(extract_place_id));

    let category = result
        .categories
        .as_ref()
        .and_then(|c| c.first())
        .and_then(|c| non_blank(Some(c.as_str())))
        .or_else(|| non_blank(result.kind.as_deref()));

    let hours = result
        .hours
        .as_ref()
        .and_then(render_hours)
        .or_else(|| result.operating_hours.as_ref().and_then(render_hours));

    Some(Business {
        name,
        address: non_blank(result.address.as_deref()),
        phone: non_blank(result.phone.as_deref()),
        website,
        rating: result.rating,
        review_count: result.reviews,
        category,
        hours,
        place_id,
        email,
    })
}

/// Trims a field and treats the empty string as absent.
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Renders provider hours as display text.
///
/// Strings pass through. Objects become `day: hours` pairs joined by `"; "`
/// (keys in map order); arrays render each element and join the same way.
fn render_hours(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match value {
        Value::Null => None,
        Value::String(s) => non_blank(Some(s.as_str())),
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .filter_map(|(day, hours)| render_hours(hours).map(|h| format!("{day}: {h}")))
                .collect();
            join_parts(parts)
        }
        Value::Array(items) => join_parts(items.iter().filter_map(render_hours).collect()),
        other => Some(other.to_string()),
    }
}

fn join_parts(parts: Vec<String>) -> Option<String> {
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
