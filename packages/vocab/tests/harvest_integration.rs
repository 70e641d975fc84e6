//! End-to-end harvest over a mock feed and in-memory store.

use vocab::testing::MockFeed;
use vocab::{harvest_once, Cursor, FeedExt, MemoryCursorStore, MemoryVocabStore};
use vocab::{CursorStore, RawPost, VocabStore};

fn sample_posts() -> Vec<RawPost> {
    vec![
        RawPost::new("105", "make a shift シフトの作成"),
        RawPost::new("104", "had a great lunch with @tomo!"),
        RawPost::new("103", "cat 猫 #vocab"),
        RawPost::new("102", "check this out http://x.co/abc"),
        RawPost::new("101", "water 水"),
    ]
}

#[tokio::test]
async fn full_pass_stores_only_vocabulary_posts() {
    let feed = MockFeed::new().with_posts(sample_posts());
    let store = MemoryVocabStore::new();

    let report = harvest_once(&feed, &store, None, 20).await.unwrap();

    assert_eq!(report.fetched, 5);
    assert_eq!(report.pairs_found, 3);
    assert_eq!(report.inserted, 3);
    assert_eq!(report.duplicates, 0);
    assert_eq!(report.next_cursor.as_ref().unwrap().as_str(), "105");

    let stored = store.find_by_term("make a shift").await.unwrap().unwrap();
    assert_eq!(stored.translation, "シフトの作成");
}

#[tokio::test]
async fn repeated_posts_yield_exactly_one_document_per_term() {
    // Same announcement shows up across two polls; querying by term
    // afterwards finds exactly one match.
    let feed = MockFeed::new()
        .with_posts(vec![RawPost::new("2", "cat 猫")])
        .with_posts(vec![RawPost::new("3", "cat 猫 again today!")]);
    let store = MemoryVocabStore::new();

    harvest_once(&feed, &store, None, 20).await.unwrap();
    let second = harvest_once(&feed, &store, None, 20).await.unwrap();

    assert_eq!(second.inserted, 0);
    assert_eq!(second.duplicates, 1);
    assert_eq!(store.len(), 1);

    let stored = store.find_by_term("cat").await.unwrap().unwrap();
    assert_eq!(stored.translation, "猫");
}

#[tokio::test]
async fn cursor_flows_through_the_cursor_store_between_passes() {
    let feed = MockFeed::new()
        .with_posts(vec![RawPost::new("7", "dog 犬")])
        .with_posts(vec![RawPost::new("9", "bird 鳥")]);
    let store = MemoryVocabStore::new();
    let cursors = MemoryCursorStore::new();

    // First pass: no saved cursor yet.
    let loaded = cursors.load().await.unwrap();
    let report = harvest_once(&feed, &store, loaded.as_ref(), 20).await.unwrap();
    cursors.save(report.next_cursor.as_ref().unwrap()).await.unwrap();

    // Second pass fetches with the saved cursor.
    let loaded = cursors.load().await.unwrap();
    assert_eq!(loaded.as_ref().unwrap().as_str(), "7");
    let report = harvest_once(&feed, &store, loaded.as_ref(), 20).await.unwrap();
    cursors.save(report.next_cursor.as_ref().unwrap()).await.unwrap();

    assert_eq!(cursors.load().await.unwrap().unwrap(), Cursor::new("9"));
    assert_eq!(feed.calls()[1].cursor.as_deref(), Some("7"));
}

#[tokio::test]
async fn feed_failures_propagate_and_store_stays_untouched() {
    let feed = MockFeed::new().with_failure("rate limited");
    let store = MemoryVocabStore::new();

    let result = harvest_once(&feed, &store, None, 20).await;
    assert!(result.is_err());
    assert!(store.is_empty());
}

#[tokio::test]
async fn rate_limited_feed_composes_with_the_driver() {
    let feed = MockFeed::new()
        .with_posts(vec![RawPost::new("1", "tea お茶")])
        .rate_limited(10);
    let store = MemoryVocabStore::new();

    let report = harvest_once(&feed, &store, None, 20).await.unwrap();
    assert_eq!(report.inserted, 1);
}
