//! Rotation properties of [`RotationSelector`] against a real SQLite store.
//!
//! Covers: no repeats within a mood until the pool is exhausted, reset-and-retry after a full
//! cycle, empty scopes, payload shape for audio and text, and concurrent callers.

mod common;

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mood_jar_bot::{DeliveryPayload, RotationSelector, CAPTIONS};
use storage::{
    ContentRecord, ContentRepository, ContentStats, ContentStore, MoodFilter, NewContent,
    StorageError,
};

fn text(mood: &str, body: &str) -> NewContent {
    NewContent::Text {
        text: body.to_string(),
        mood: mood.to_string(),
    }
}

fn sad() -> MoodFilter {
    MoodFilter::Tag("sad".to_string())
}

fn body_of(payload: &DeliveryPayload) -> String {
    match payload {
        DeliveryPayload::Text { body, .. } => body.clone(),
        DeliveryPayload::Audio { content_ref, .. } => content_ref.clone(),
    }
}

async fn selector_with(items: &[NewContent]) -> (tempfile::TempDir, Arc<ContentRepository>, RotationSelector) {
    let (dir, repo) = common::temp_repo().await;
    for item in items {
        repo.insert(item).await.unwrap();
    }
    let repo = Arc::new(repo);
    let selector = RotationSelector::new(repo.clone());
    (dir, repo, selector)
}

#[tokio::test]
async fn test_no_repeat_until_mood_pool_exhausted() {
    let (_dir, _repo, selector) = selector_with(&[
        text("sad", "s1"),
        text("sad", "s2"),
        text("sad", "s3"),
        text("sad", "s4"),
        text("hope", "h1"),
    ])
    .await;

    let mut seen = HashSet::new();
    for _ in 0..4 {
        let payload = selector.select_and_mark(&sad()).await.unwrap().unwrap();
        assert!(seen.insert(body_of(&payload)), "item repeated before pool was exhausted");
    }
    let expected: HashSet<String> = ["s1", "s2", "s3", "s4"].iter().map(|s| s.to_string()).collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn test_full_cycle_resets_and_delivers_again() {
    let (_dir, repo, selector) = selector_with(&[text("sad", "a"), text("sad", "b"), text("hope", "h")]).await;

    let hope = MoodFilter::Tag("hope".to_string());
    selector.select_and_mark(&hope).await.unwrap().unwrap();

    let first = body_of(&selector.select_and_mark(&sad()).await.unwrap().unwrap());
    let second = body_of(&selector.select_and_mark(&sad()).await.unwrap().unwrap());
    assert_ne!(first, second);

    let third = selector.select_and_mark(&sad()).await.unwrap();
    assert!(third.is_some(), "exhausted pool must reset and deliver");

    let stats = repo.stats().await.unwrap();
    let sad_stats = stats.moods.iter().find(|m| m.mood == "sad").unwrap();
    assert_eq!(sad_stats.used, 1);
    // the reset is scoped: hope keeps its used flag
    let hope_stats = stats.moods.iter().find(|m| m.mood == "hope").unwrap();
    assert_eq!(hope_stats.used, 1);
}

#[tokio::test]
async fn test_empty_mood_returns_none_without_mutation() {
    let (_dir, repo, selector) = selector_with(&[text("hope", "h1"), text("hope", "h2")]).await;
    let hope = MoodFilter::Tag("hope".to_string());
    selector.select_and_mark(&hope).await.unwrap().unwrap();
    let before = repo.stats().await.unwrap();

    assert!(selector.select_and_mark(&sad()).await.unwrap().is_none());

    assert_eq!(repo.stats().await.unwrap(), before);
}

#[tokio::test]
async fn test_empty_store_any_returns_none() {
    let (_dir, _repo, selector) = selector_with(&[]).await;
    assert!(selector.select_and_mark(&MoodFilter::Any).await.unwrap().is_none());
}

#[tokio::test]
async fn test_any_filter_covers_every_mood() {
    let (_dir, _repo, selector) = selector_with(&[
        text("sad", "s"),
        text("hope", "h"),
        text("any", "untagged"),
    ])
    .await;

    let mut seen = HashSet::new();
    for _ in 0..3 {
        let payload = selector.select_and_mark(&MoodFilter::Any).await.unwrap().unwrap();
        assert!(seen.insert(body_of(&payload)));
    }
    assert!(seen.contains("untagged"));
}

#[tokio::test]
async fn test_audio_item_delivers_reference_not_text() {
    let (_dir, _repo, selector) = selector_with(&[NewContent::Audio {
        content_ref: "AwACAgIAAxkBAAIB".to_string(),
        mood: "romantic".to_string(),
    }])
    .await;

    let payload = selector
        .select_and_mark(&MoodFilter::Tag("romantic".to_string()))
        .await
        .unwrap()
        .unwrap();

    match &payload {
        DeliveryPayload::Audio { content_ref, caption } => {
            assert_eq!(content_ref, "AwACAgIAAxkBAAIB");
            assert!(CAPTIONS.contains(&caption.as_str()));
        }
        other => panic!("expected audio payload, got {:?}", other),
    }
    assert!(payload.render_html().is_none());
}

#[tokio::test]
async fn test_text_item_delivers_escaped_html() {
    let (_dir, _repo, selector) = selector_with(&[text("sad", "<3 you & the rain")]).await;

    let payload = selector.select_and_mark(&sad()).await.unwrap().unwrap();
    let html = payload.render_html().unwrap();

    assert!(html.starts_with("💌 &lt;3 you &amp; the rain\n\n<i>"));
    assert!(html.ends_with("</i>"));
    assert!(!html.contains("<3"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_callers_never_share_an_item() {
    let items: Vec<NewContent> = (0..8).map(|i| text("sad", &format!("s{}", i))).collect();
    let (_dir, _repo, selector) = selector_with(&items).await;
    let selector = Arc::new(selector);

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let selector = selector.clone();
            tokio::spawn(async move { selector.select_and_mark(&sad()).await })
        })
        .collect();

    let mut seen = HashSet::new();
    for task in tasks {
        let payload = task.await.unwrap().unwrap().unwrap();
        assert!(seen.insert(body_of(&payload)));
    }
    assert_eq!(seen.len(), 8);
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=ro", dir.path().join("missing/jar.db").display());
    let repo = Arc::new(ContentRepository::connect(&url).unwrap());
    let selector = RotationSelector::new(repo);

    assert!(selector.select_and_mark(&MoodFilter::Any).await.is_err());
}

/// Store holding one legacy row with no body; records which ids were marked used.
#[derive(Default)]
struct BodylessRowStore {
    marked: Mutex<Vec<i64>>,
}

#[async_trait]
impl ContentStore for BodylessRowStore {
    async fn insert(&self, _content: &NewContent) -> Result<i64, StorageError> {
        Ok(7)
    }

    async fn pick_random(
        &self,
        _filter: &MoodFilter,
        _only_unused: bool,
    ) -> Result<Option<ContentRecord>, StorageError> {
        Ok(Some(ContentRecord {
            id: 7,
            content_ref: None,
            mood: "sad".to_string(),
            text: None,
            used: false,
        }))
    }

    async fn reset_used(&self, _filter: &MoodFilter) -> Result<u64, StorageError> {
        Ok(0)
    }

    async fn mark_used(&self, id: i64) -> Result<(), StorageError> {
        self.marked.lock().unwrap().push(id);
        Ok(())
    }

    async fn stats(&self) -> Result<ContentStats, StorageError> {
        Ok(ContentStats::default())
    }
}

#[tokio::test]
async fn test_bodyless_row_is_marked_used_before_failing() {
    let store = Arc::new(BodylessRowStore::default());
    let selector = RotationSelector::new(store.clone());

    let result = selector.select_and_mark(&sad()).await;

    assert!(matches!(result, Err(StorageError::InvalidRecord { id: 7 })));
    assert_eq!(*store.marked.lock().unwrap(), vec![7]);
}
