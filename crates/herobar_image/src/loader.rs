//! Remote image requests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use herobar_core::ImageData;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use url::Url;

use crate::decode::decode;
use crate::error::ImageError;
use crate::fetch::ImageFetcher;

/// Final result of one request
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Arc<ImageData>),
    Failed(ImageError),
    Cancelled,
}

/// Handle to one in-flight fetch, owned by the UI thread
#[derive(Debug)]
pub struct ImageRequest {
    url: Url,
    cancelled: Arc<AtomicBool>,
    receiver: Option<oneshot::Receiver<LoadOutcome>>,
}

impl ImageRequest {
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Cancel the fetch; a result arriving later is discarded
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Non-blocking poll, returns the outcome exactly once
    pub fn try_take(&mut self) -> Option<LoadOutcome> {
        let receiver = self.receiver.as_mut()?;
        let outcome = match receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(oneshot::error::TryRecvError::Empty) => return None,
            Err(oneshot::error::TryRecvError::Closed) => {
                LoadOutcome::Failed(ImageError::Network("fetch task dropped".to_string()))
            }
        };
        self.receiver = None;
        Some(self.screen(outcome))
    }

    /// Wait for the outcome (for callers already off the UI thread)
    pub async fn wait(mut self) -> LoadOutcome {
        let Some(receiver) = self.receiver.take() else {
            return LoadOutcome::Cancelled;
        };
        let outcome = receiver.await.unwrap_or_else(|_| {
            LoadOutcome::Failed(ImageError::Network("fetch task dropped".to_string()))
        });
        self.screen(outcome)
    }

    fn screen(&self, outcome: LoadOutcome) -> LoadOutcome {
        if self.is_cancelled() {
            LoadOutcome::Cancelled
        } else {
            outcome
        }
    }
}

impl Drop for ImageRequest {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Object-safe entry point used by header controllers
pub trait ImageSource {
    fn request(&self, url: &Url) -> ImageRequest;
}

/// Runs fetches of `F` on a tokio runtime
pub struct RemoteImageLoader<F> {
    fetcher: Arc<F>,
    runtime: Handle,
}

impl<F: ImageFetcher> RemoteImageLoader<F> {
    pub fn new(fetcher: F, runtime: Handle) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            runtime,
        }
    }

    /// Loader on the runtime of the calling context
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn current(fetcher: F) -> Self {
        Self::new(fetcher, Handle::current())
    }
}

impl<F: ImageFetcher> ImageSource for RemoteImageLoader<F> {
    fn request(&self, url: &Url) -> ImageRequest {
        let (sender, receiver) = oneshot::channel();
        let cancelled = Arc::new(AtomicBool::new(false));

        let fetcher = Arc::clone(&self.fetcher);
        let flag = Arc::clone(&cancelled);
        let target = url.clone();

        self.runtime.spawn(async move {
            if flag.load(Ordering::Acquire) {
                let _ = sender.send(LoadOutcome::Cancelled);
                return;
            }

            let fetched = fetcher.fetch(&target).await;

            if flag.load(Ordering::Acquire) {
                tracing::debug!(url = %target, "image fetch finished after cancellation");
                let _ = sender.send(LoadOutcome::Cancelled);
                return;
            }

            let outcome = match fetched.and_then(|bytes| decode(&bytes)) {
                Ok(data) => LoadOutcome::Loaded(Arc::new(data)),
                Err(err) => {
                    tracing::debug!(url = %target, error = %err, "image fetch failed");
                    LoadOutcome::Failed(err)
                }
            };
            let _ = sender.send(outcome);
        });

        ImageRequest {
            url: url.clone(),
            cancelled,
            receiver: Some(receiver),
        }
    }
}
