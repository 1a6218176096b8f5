use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use begreb_client::{LookupError, LookupService};
use begreb_config::ResponseOrdering;
use begreb_config::search::SearchConfig;
use begreb_types::SearchPost;
use tokio::task::JoinHandle;

use crate::host::{ResultsContainer, SearchField};
use crate::render::render_posts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub debounce: Duration,
    pub min_query_len: usize,
    pub ordering: ResponseOrdering,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

impl From<&SearchConfig> for SearchSettings {
    fn from(config: &SearchConfig) -> Self {
        Self {
            debounce: Duration::from_millis(config.debounce_ms),
            min_query_len: config.min_query_len,
            ordering: config.ordering,
        }
    }
}

/// Debounced search bound to one input field and one results container.
///
/// Every edit clears the results and re-arms a single timer. When the timer
/// fires, the field is read and, if long enough, sent to the lookup service.
/// Requests run detached from the timer, so later edits never cancel them.
pub struct SearchWidget {
    inner: Arc<Inner>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

struct Inner {
    field: Arc<dyn SearchField>,
    container: Arc<dyn ResultsContainer>,
    service: Arc<dyn LookupService>,
    settings: SearchSettings,
    /// Sequence number of the most recently issued request
    issued: AtomicU64,
}

impl SearchWidget {
    pub fn new(
        field: Arc<dyn SearchField>,
        container: Arc<dyn ResultsContainer>,
        service: Arc<dyn LookupService>,
        settings: SearchSettings,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                field,
                container,
                service,
                settings,
                issued: AtomicU64::new(0),
            }),
            timer: Mutex::new(None),
        }
    }

    pub fn settings(&self) -> SearchSettings {
        self.inner.settings
    }

    /// Handle an edit of the bound field. Must run inside a Tokio runtime.
    pub fn on_input(&self) {
        self.inner.container.clear();

        let mut timer = self.timer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pending) = timer.take() {
            pending.abort();
        }

        let inner = Arc::clone(&self.inner);
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.settings.debounce).await;
            inner.fire();
        }));
    }

    /// Drop the pending timer, if any, without touching the results
    pub fn cancel(&self) {
        if let Some(pending) = self
            .timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            tracing::debug!("Cancelling pending search timer");
            pending.abort();
        }
    }

    pub fn has_pending_timer(&self) -> bool {
        self.timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }
}

impl Drop for SearchWidget {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl Inner {
    fn fire(self: &Arc<Self>) {
        let query = self.field.value();
        if query.encode_utf16().count() < self.settings.min_query_len {
            tracing::debug!("Query '{}' below minimum length, skipping", query);
            return;
        }

        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("Issuing lookup #{} for '{}'", seq, query);

        let inner = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(e) = inner.request(seq, &query).await {
                tracing::error!("Lookup #{} for '{}' failed: {}", seq, query, e);
            }
        });
    }

    async fn request(&self, seq: u64, query: &str) -> Result<(), LookupError> {
        let posts = self.service.lookup(query).await?;

        if self.settings.ordering == ResponseOrdering::LatestIssued {
            let latest = self.issued.load(Ordering::SeqCst);
            if seq != latest {
                tracing::debug!("Discarding stale response #{} (latest is #{})", seq, latest);
                return Ok(());
            }
        }

        self.render(&posts);
        Ok(())
    }

    fn render(&self, posts: &[SearchPost]) {
        // Re-clear: an older response may have rendered since the edit
        self.container.clear();
        for node in render_posts(posts) {
            self.container.append(node);
        }
    }
}
