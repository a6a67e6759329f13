//! Lazily loaded page bundles.
//!
//! A page's bundle (title and copy) is fetched the first time the page is
//! visited and cached for the life of the [`PageCache`]. Loads are one-shot:
//! concurrent first visits share one fetch, a failed fetch leaves the slot
//! empty and the error goes to the caller.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::OnceCell;

use crate::error::PageLoadError;
use crate::routes::Page;

/// What a page needs before it can render
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageBundle {
    pub page: Page,
    pub title: String,
    pub heading: String,
    pub blurb: String,
}

/// On-disk override; missing fields keep the builtin copy
#[derive(Deserialize, Default)]
#[serde(default)]
struct BundleFile {
    title: Option<String>,
    heading: Option<String>,
    blurb: Option<String>,
}

impl PageBundle {
    /// Copy compiled into the binary
    pub fn builtin(page: Page) -> Self {
        let (title, heading, blurb) = match page {
            Page::Login => ("Sign in", "Welcome back", "Sign in with your email and password."),
            Page::Register => (
                "Create account",
                "Create your account",
                "A few details and you are in.",
            ),
            Page::ForgotPassword => (
                "Forgot password",
                "Forgot your password?",
                "Enter your email and we will send you a reset link.",
            ),
            Page::ResetPassword => (
                "Reset password",
                "Choose a new password",
                "Use at least 8 characters.",
            ),
            Page::Home => ("Home", "Home", "You are signed in."),
        };
        Self {
            page,
            title: title.to_string(),
            heading: heading.to_string(),
            blurb: blurb.to_string(),
        }
    }

    fn apply(mut self, file: BundleFile) -> Self {
        if let Some(title) = file.title {
            self.title = title;
        }
        if let Some(heading) = file.heading {
            self.heading = heading;
        }
        if let Some(blurb) = file.blurb {
            self.blurb = blurb;
        }
        self
    }
}

/// Where bundles come from
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum PageSource {
    #[default]
    Builtin,
    /// `<dir>/<slug>.json` overrides, builtin copy when a file is absent
    Directory(PathBuf),
}

impl PageSource {
    pub async fn fetch(&self, page: Page) -> Result<PageBundle, PageLoadError> {
        match self {
            PageSource::Builtin => Ok(PageBundle::builtin(page)),
            PageSource::Directory(dir) => fetch_from_dir(dir, page).await,
        }
    }
}

async fn fetch_from_dir(dir: &Path, page: Page) -> Result<PageBundle, PageLoadError> {
    let path = dir.join(format!("{}.json", page.slug()));
    let fail = |reason: String| PageLoadError { page, reason };

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(page = %page, "No bundle at {:?}, using builtin", path);
            return Ok(PageBundle::builtin(page));
        }
        Err(e) => return Err(fail(format!("{}: {}", path.display(), e))),
    };

    let file: BundleFile =
        serde_json::from_slice(&bytes).map_err(|e| fail(format!("{}: {}", path.display(), e)))?;
    Ok(PageBundle::builtin(page).apply(file))
}

struct Inner {
    source: PageSource,
    slots: HashMap<Page, OnceCell<Arc<PageBundle>>>,
    fetches: AtomicUsize,
}

/// Shared, cloneable cache of loaded bundles
#[derive(Clone)]
pub struct PageCache {
    inner: Arc<Inner>,
}

impl PageCache {
    pub fn new(source: PageSource) -> Self {
        let slots = Page::ALL.into_iter().map(|p| (p, OnceCell::new())).collect();
        Self {
            inner: Arc::new(Inner {
                source,
                slots,
                fetches: AtomicUsize::new(0),
            }),
        }
    }

    /// Load the page's bundle, fetching it on first use
    pub async fn load(&self, page: Page) -> Result<Arc<PageBundle>, PageLoadError> {
        let slot = self.inner.slots.get(&page).ok_or_else(|| PageLoadError {
            page,
            reason: "page has no cache slot".to_string(),
        })?;

        let bundle = slot
            .get_or_try_init(|| async {
                self.inner.fetches.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(page = %page, "Loading page bundle");
                self.inner.source.fetch(page).await.map(Arc::new)
            })
            .await
            .inspect_err(|e| tracing::warn!("{}", e))?;

        Ok(Arc::clone(bundle))
    }

    /// Whether the page has already been loaded
    pub fn is_loaded(&self, page: Page) -> bool {
        self.inner
            .slots
            .get(&page)
            .is_some_and(|slot| slot.initialized())
    }

    /// Number of fetches started so far
    pub fn fetch_count(&self) -> usize {
        self.inner.fetches.load(Ordering::Relaxed)
    }
}

impl PartialEq for PageCache {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new(PageSource::Builtin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bundles_exist_for_every_page() {
        for page in Page::ALL {
            let bundle = PageBundle::builtin(page);
            assert_eq!(bundle.page, page);
            assert!(!bundle.title.is_empty());
        }
    }

    #[tokio::test]
    async fn first_load_fetches_then_caches() {
        let cache = PageCache::default();
        assert!(!cache.is_loaded(Page::Login));

        let first = cache.load(Page::Login).await.unwrap();
        let second = cache.load(Page::Login).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.is_loaded(Page::Login));
        assert!(!cache.is_loaded(Page::Home));
        assert_eq!(cache.fetch_count(), 1);
    }

    #[tokio::test]
    async fn clones_share_slots() {
        let cache = PageCache::default();
        let other = cache.clone();
        cache.load(Page::Home).await.unwrap();
        assert!(other.is_loaded(Page::Home));
        assert!(cache == other);
    }
}
