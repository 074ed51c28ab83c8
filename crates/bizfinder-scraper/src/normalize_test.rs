use super::*;

// -----------------------------------------------------------------------
// fixtures
// -----------------------------------------------------------------------

fn titled(title: &str) -> LocalResult {
    LocalResult {
        title: Some(title.to_owned()),
        ..LocalResult::default()
    }
}

fn full_result() -> LocalResult {
    LocalResult {
        title: Some("Dira Movers".to_owned()),
        address: Some("12 Herzl St, Tel Aviv-Yafo".to_owned()),
        phone: Some("+972 3-555-0101".to_owned()),
        website: Some("https://dira-movers.example".to_owned()),
        rating: Some(4.7),
        reviews: Some(213),
        categories: Some(vec!["Moving company".to_owned(), "Storage".to_owned()]),
        kind: Some("Mover".to_owned()),
        hours: Some(serde_json::json!("Open ⋅ Closes 6 PM")),
        operating_hours: None,
        place_id: Some("ChIJ-dira".to_owned()),
        description: Some("Apartment moves. Quotes: quotes@dira-movers.example".to_owned()),
        link: Some("https://www.google.com/maps?cid=555".to_owned()),
    }
}

// -----------------------------------------------------------------------
// normalize_result
// -----------------------------------------------------------------------

#[test]
fn title_only_record_yields_name_only_business() {
    let business = normalize_result(&titled("Solo Movers")).expect("titled record");
    assert_eq!(business, Business::named("Solo Movers"));
}

#[test]
fn record_without_title_is_dropped() {
    assert!(normalize_result(&LocalResult::default()).is_none());
}

#[test]
fn record_with_blank_title_is_dropped() {
    assert!(normalize_result(&titled("   ")).is_none());
}

#[test]
fn full_record_maps_every_field() {
    let business = normalize_result(&full_result()).unwrap();
    assert_eq!(business.name, "Dira Movers");
    assert_eq!(business.address.as_deref(), Some("12 Herzl St, Tel Aviv-Yafo"));
    assert_eq!(business.phone.as_deref(), Some("+972 3-555-0101"));
    assert_eq!(
        business.website.as_deref(),
        Some("https://dira-movers.example")
    );
    assert_eq!(business.rating, Some(4.7));
    assert_eq!(business.review_count, Some(213));
    assert_eq!(business.category.as_deref(), Some("Moving company"));
    assert_eq!(business.hours.as_deref(), Some("Open ⋅ Closes 6 PM"));
    assert_eq!(business.place_id.as_deref(), Some("ChIJ-dira"));
    assert_eq!(
        business.email.as_deref(),
        Some("quotes@dira-movers.example")
    );
}

#[test]
fn normalizing_twice_yields_equal_businesses() {
    let result = full_result();
    assert_eq!(normalize_result(&result), normalize_result(&result));
}

#[test]
fn blank_optional_strings_become_unknown() {
    let result = LocalResult {
        address: Some(String::new()),
        phone: Some("  ".to_owned()),
        website: Some(String::new()),
        ..titled("Blank Fields")
    };
    let business = normalize_result(&result).unwrap();
    assert_eq!(business, Business::named("Blank Fields"));
}

// -----------------------------------------------------------------------
// email
// -----------------------------------------------------------------------

#[test]
fn email_taken_from_mailto_website() {
    let result = LocalResult {
        website: Some("mailto:info@example.com".to_owned()),
        ..titled("Mail Only")
    };
    let business = normalize_result(&result).unwrap();
    assert_eq!(business.email.as_deref(), Some("info@example.com"));
    assert_eq!(business.website.as_deref(), Some("mailto:info@example.com"));
}

#[test]
fn email_absent_when_no_pattern_matches() {
    let result = LocalResult {
        description: Some("Best movers in town".to_owned()),
        website: Some("https://movers.example".to_owned()),
        ..titled("No Mail")
    };
    assert!(normalize_result(&result).unwrap().email.is_none());
}

// -----------------------------------------------------------------------
// place id
// -----------------------------------------------------------------------

#[test]
fn place_id_falls_back_to_link() {
    let result = LocalResult {
        link: Some("https://www.google.com/maps/place/Dira/@32.08,34.78,17z".to_owned()),
        ..titled("Linked")
    };
    assert_eq!(
        normalize_result(&result).unwrap().place_id.as_deref(),
        Some("Dira")
    );
}

#[test]
fn provider_place_id_beats_link() {
    let result = LocalResult {
        place_id: Some("ChIJ-provider".to_owned()),
        link: Some("https://maps.google.com/?cid=1".to_owned()),
        ..titled("Both")
    };
    assert_eq!(
        normalize_result(&result).unwrap().place_id.as_deref(),
        Some("ChIJ-provider")
    );
}

// -----------------------------------------------------------------------
// category
// -----------------------------------------------------------------------

#[test]
fn category_is_first_of_list() {
    let result = LocalResult {
        categories: Some(vec!["First".to_owned(), "Second".to_owned()]),
        ..titled("Cats")
    };
    assert_eq!(
        normalize_result(&result).unwrap().category.as_deref(),
        Some("First")
    );
}

#[test]
fn category_unknown_for_empty_list_without_type() {
    let result = LocalResult {
        categories: Some(vec![]),
        ..titled("No Cats")
    };
    assert!(normalize_result(&result).unwrap().category.is_none());
}

#[test]
fn category_falls_back_to_type() {
    let result = LocalResult {
        kind: Some("Moving company".to_owned()),
        ..titled("Typed")
    };
    assert_eq!(
        normalize_result(&result).unwrap().category.as_deref(),
        Some("Moving company")
    );
}

// -----------------------------------------------------------------------
// hours
// -----------------------------------------------------------------------

#[test]
fn structured_operating_hours_are_rendered() {
    let result = LocalResult {
        operating_hours: Some(serde_json::json!({
            "friday": "8 AM–2 PM",
            "sunday": "8 AM–6 PM"
        })),
        ..titled("Hours")
    };
    assert_eq!(
        normalize_result(&result).unwrap().hours.as_deref(),
        Some("friday: 8 AM–2 PM; sunday: 8 AM–6 PM")
    );
}

#[test]
fn hours_array_of_objects_is_flattened() {
    let result = LocalResult {
        hours: Some(serde_json::json!([
            { "sunday": "9 AM–5 PM" },
            { "monday": "Closed" }
        ])),
        ..titled("Array Hours")
    };
    assert_eq!(
        normalize_result(&result).unwrap().hours.as_deref(),
        Some("sunday: 9 AM–5 PM; monday: Closed")
    );
}

#[test]
fn null_hours_are_unknown() {
    let result = LocalResult {
        hours: Some(serde_json::Value::Null),
        ..titled("Null Hours")
    };
    assert!(normalize_result(&result).unwrap().hours.is_none());
}
