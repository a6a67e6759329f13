//! Lazy page loading against an on-disk bundle directory

use std::sync::Arc;

use portal_core::{Page, PageCache, PageSource};
use tempfile::TempDir;

fn dir_cache(dir: &TempDir) -> PageCache {
    PageCache::new(PageSource::Directory(dir.path().to_path_buf()))
}

#[tokio::test]
async fn override_file_replaces_copy() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("login.json"),
        r#"{"heading": "Hello again", "blurb": "Staging build"}"#,
    )
    .unwrap();

    let bundle = dir_cache(&dir).load(Page::Login).await.unwrap();
    assert_eq!(bundle.heading, "Hello again");
    assert_eq!(bundle.blurb, "Staging build");
    // Not overridden
    assert_eq!(bundle.title, "Sign in");
}

#[tokio::test]
async fn missing_file_falls_back_to_builtin() {
    let dir = TempDir::new().unwrap();
    let bundle = dir_cache(&dir).load(Page::Register).await.unwrap();
    assert_eq!(*bundle, portal_core::PageBundle::builtin(Page::Register));
}

#[tokio::test]
async fn malformed_file_surfaces_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("home.json"), "{ not json").unwrap();

    let cache = dir_cache(&dir);
    let err = cache.load(Page::Home).await.unwrap_err();
    assert_eq!(err.page, Page::Home);
    assert!(err.reason.contains("home.json"), "{}", err.reason);
    assert!(!cache.is_loaded(Page::Home));
}

#[tokio::test]
async fn failed_slot_can_load_on_next_visit() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("home.json");
    std::fs::write(&path, "{ not json").unwrap();

    let cache = dir_cache(&dir);
    assert!(cache.load(Page::Home).await.is_err());

    std::fs::write(&path, r#"{"title": "Dashboard"}"#).unwrap();
    let bundle = cache.load(Page::Home).await.unwrap();
    assert_eq!(bundle.title, "Dashboard");
    assert_eq!(cache.fetch_count(), 2);
}

#[tokio::test]
async fn concurrent_first_visits_share_one_fetch() {
    let dir = TempDir::new().unwrap();
    let cache = dir_cache(&dir);

    let (a, b) = tokio::join!(cache.load(Page::Login), cache.load(Page::Login));
    assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
    assert_eq!(cache.fetch_count(), 1);
}
