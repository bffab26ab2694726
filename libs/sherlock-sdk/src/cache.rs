//! Populate-once engine enumeration lists.

use std::future::Future;

use tokio::sync::OnceCell;

/// List of names fetched from the engine on first use.
///
/// A failed fetch leaves the cell empty; the next caller tries again.
#[derive(Debug, Default)]
pub struct EnumCache {
    cell: OnceCell<Vec<String>>,
}

impl EnumCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<F, Fut>(&self, fetch: F) -> Option<&[String]>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<Vec<String>>>,
    {
        self.cell
            .get_or_try_init(|| async { fetch().await.ok_or(()) })
            .await
            .ok()
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test]
    async fn filled_once() {
        let cache = EnumCache::new();
        let first = cache.load(|| async { Some(vec!["sec".to_owned()]) }).await;
        assert_eq!(first.unwrap(), ["sec".to_owned()]);

        let second = cache
            .load(|| async { Some(vec!["other".to_owned()]) })
            .await;
        assert_eq!(second.unwrap(), ["sec".to_owned()]);
    }

    #[tokio::test]
    async fn failed_fetch_is_retried() {
        let cache = EnumCache::new();
        let fetches = AtomicUsize::new(0);
        let fetch = |names: Option<Vec<String>>| {
            fetches.fetch_add(1, Ordering::SeqCst);
            async move { names }
        };

        assert!(cache.load(|| fetch(None)).await.is_none());
        let retried = cache.load(|| fetch(Some(vec!["min".to_owned()]))).await;
        assert_eq!(retried.unwrap(), ["min".to_owned()]);
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }
}
