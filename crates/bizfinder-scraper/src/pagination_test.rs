use bizfinder_core::SearchQuery;

use super::*;
use crate::fake_provider::{page, FakeProvider};

fn first_query() -> ProviderQuery {
    ProviderQuery::for_search(&SearchQuery::new("movers").unwrap(), "test-key")
}

fn names(businesses: &[Business]) -> Vec<&str> {
    businesses.iter().map(|b| b.name.as_str()).collect()
}

// -----------------------------------------------------------------------
// page_offset
// -----------------------------------------------------------------------

#[test]
fn page_offset_uses_fixed_stride() {
    assert_eq!(page_offset(1), 0);
    assert_eq!(page_offset(2), 20);
    assert_eq!(page_offset(3), 40);
    assert_eq!(page_offset(4), 60);
}

#[test]
fn page_offset_of_page_zero_is_zero() {
    assert_eq!(page_offset(0), 0);
}

// -----------------------------------------------------------------------
// fetch_all_pages
// -----------------------------------------------------------------------

#[tokio::test]
async fn empty_first_page_stops_after_one_request() {
    // A next-page signal on an empty page must not trigger more requests.
    let empty = page("x", 0, true);
    let provider = FakeProvider::new(vec![Ok(empty), Ok(page("never", 5, false))]);

    let businesses = fetch_all_pages(&provider, &first_query()).await.unwrap();

    assert!(businesses.is_empty());
    assert_eq!(provider.requests().len(), 1);
}

#[tokio::test]
async fn single_page_without_next_makes_exactly_one_request() {
    let provider = FakeProvider::new(vec![Ok(page("p1", 3, false))]);

    let businesses = fetch_all_pages(&provider, &first_query()).await.unwrap();

    assert_eq!(names(&businesses), ["p1 1", "p1 2", "p1 3"]);
    assert_eq!(provider.starts(), [None]);
}

#[tokio::test]
async fn later_page_failure_keeps_earlier_results() {
    let provider = FakeProvider::new(vec![
        Ok(page("p1", 2, true)),
        Ok(page("p2", 2, true)),
        Ok(page("p3", 2, true)),
        Err("connection reset".to_owned()),
    ]);

    let businesses = fetch_all_pages(&provider, &first_query())
        .await
        .expect("later-page failures are absorbed");

    assert_eq!(provider.requests().len(), 4);
    assert_eq!(
        names(&businesses),
        ["p1 1", "p1 2", "p2 1", "p2 2", "p3 1", "p3 2"]
    );
}

#[tokio::test]
async fn first_page_failure_is_returned() {
    let provider = FakeProvider::new(vec![Err("invalid key".to_owned())]);

    let err = fetch_all_pages(&provider, &first_query()).await.unwrap_err();

    assert!(matches!(err, ScraperError::ApiError(ref m) if m == "invalid key"));
    assert_eq!(provider.requests().len(), 1);
}

#[tokio::test]
async fn later_pages_use_stride_offsets() {
    let provider = FakeProvider::new(vec![
        Ok(page("p1", 1, true)),
        Ok(page("p2", 1, true)),
        Ok(page("p3", 1, true)),
        Ok(page("p4", 1, true)),
    ]);

    fetch_all_pages(&provider, &first_query()).await.unwrap();

    assert_eq!(provider.starts(), [None, Some(20), Some(40), Some(60)]);
}

#[tokio::test]
async fn stops_after_max_extra_pages_even_when_more_are_signalled() {
    let provider = FakeProvider::new(vec![
        Ok(page("p1", 1, true)),
        Ok(page("p2", 1, true)),
        Ok(page("p3", 1, true)),
        Ok(page("p4", 1, true)),
        Ok(page("p5", 1, true)),
    ]);

    let businesses = fetch_all_pages(&provider, &first_query()).await.unwrap();

    assert_eq!(provider.requests().len(), 1 + MAX_EXTRA_PAGES as usize);
    assert_eq!(names(&businesses), ["p1 1", "p2 1", "p3 1", "p4 1"]);
}

#[tokio::test]
async fn empty_later_page_stops_pagination() {
    let provider = FakeProvider::new(vec![
        Ok(page("p1", 2, true)),
        Ok(page("p2", 0, true)),
        Ok(page("p3", 2, true)),
    ]);

    let businesses = fetch_all_pages(&provider, &first_query()).await.unwrap();

    assert_eq!(provider.requests().len(), 2);
    assert_eq!(names(&businesses), ["p1 1", "p1 2"]);
}

#[tokio::test]
async fn later_page_without_next_is_kept_then_stops() {
    let provider = FakeProvider::new(vec![
        Ok(page("p1", 1, true)),
        Ok(page("p2", 2, false)),
        Ok(page("p3", 2, true)),
    ]);

    let businesses = fetch_all_pages(&provider, &first_query()).await.unwrap();

    assert_eq!(provider.requests().len(), 2);
    assert_eq!(names(&businesses), ["p1 1", "p2 1", "p2 2"]);
}

#[tokio::test]
async fn duplicates_across_pages_are_kept() {
    let provider = FakeProvider::new(vec![Ok(page("same", 1, true)), Ok(page("same", 1, false))]);

    let businesses = fetch_all_pages(&provider, &first_query()).await.unwrap();

    assert_eq!(names(&businesses), ["same 1", "same 1"]);
}

#[tokio::test]
async fn untitled_records_are_dropped_without_stopping() {
    let mut first = page("p1", 2, false);
    first.results[0].title = None;
    let provider = FakeProvider::new(vec![Ok(first)]);

    let businesses = fetch_all_pages(&provider, &first_query()).await.unwrap();

    assert_eq!(names(&businesses), ["p1 2"]);
}

#[tokio::test]
async fn every_page_reuses_keyword_and_credential() {
    let provider = FakeProvider::new(vec![Ok(page("p1", 1, true)), Ok(page("p2", 1, false))]);

    fetch_all_pages(&provider, &first_query()).await.unwrap();

    for query in provider.requests() {
        assert_eq!(query.keyword, "movers");
        assert_eq!(query.api_key, "test-key");
        assert_eq!(query.page_size, 100);
    }
}
