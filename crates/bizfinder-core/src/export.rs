//! Rendering of a business list into downloadable formats.
//!
//! Both renderers operate on an already-produced list and never fail on
//! missing fields: unknown values render as empty strings.

use serde::Serialize;

use crate::business::Business;

/// Column order of the CSV export.
pub const CSV_HEADER: [&str; 8] = [
    "name",
    "phone",
    "address",
    "website",
    "rating",
    "reviewCount",
    "category",
    "hours",
];

/// Renders businesses as CSV: a header row followed by one row per business.
///
/// Every data cell is wrapped in double quotes with embedded quotes doubled,
/// so commas and line breaks inside values survive. Rows are joined by `\n`.
#[must_use]
pub fn to_csv(businesses: &[Business]) -> String {
    let mut rows = Vec::with_capacity(businesses.len() + 1);
    rows.push(CSV_HEADER.join(","));

    for business in businesses {
        let cells = [
            business.name.clone(),
            business.phone.clone().unwrap_or_default(),
            business.address.clone().unwrap_or_default(),
            business.website.clone().unwrap_or_default(),
            business.rating.map(|r| r.to_string()).unwrap_or_default(),
            business
                .review_count
                .map(|c| c.to_string())
                .unwrap_or_default(),
            business.category.clone().unwrap_or_default(),
            business.hours.clone().unwrap_or_default(),
        ];
        let row = cells
            .iter()
            .map(|cell| quote_cell(cell))
            .collect::<Vec<_>>()
            .join(",");
        rows.push(row);
    }

    rows.join("\n")
}

fn quote_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Contact-focused projection of a [`Business`].
#[derive(Debug, Serialize)]
struct ContactRow<'a> {
    name: &'a str,
    phone: &'a str,
    area: &'a str,
    rating: RatingCell,
    email: &'a str,
}

/// A rating, or an empty string when the provider supplied none or zero.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RatingCell {
    Value(f64),
    Missing(&'static str),
}

/// Renders the contacts export: a pretty-printed JSON array of
/// `{ name, phone, area, rating, email }`, with the address as `area`.
///
/// # Errors
///
/// Propagates any `serde_json` serialization error.
pub fn to_contacts_json(businesses: &[Business]) -> Result<String, serde_json::Error> {
    let rows: Vec<ContactRow<'_>> = businesses
        .iter()
        .map(|b| ContactRow {
            name: &b.name,
            phone: b.phone.as_deref().unwrap_or_default(),
            area: b.address.as_deref().unwrap_or_default(),
            rating: b
                .rating
                .filter(|r| r.abs() > 0.0)
                .map_or(RatingCell::Missing(""), RatingCell::Value),
            email: b.email.as_deref().unwrap_or_default(),
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}
