//! Observable loading and error state
//!
//! Both flags live in `tokio::sync::watch` channels: every subscriber sees the
//! latest value, intermediate values may be skipped (last write wins).

use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::watch;

/// Loading flag and last error message of a store
#[derive(Debug)]
pub(crate) struct StoreStatus {
    loading: watch::Sender<bool>,
    last_error: watch::Sender<Option<String>>,
}

impl StoreStatus {
    pub(crate) fn new() -> Self {
        let (loading, _) = watch::channel(false);
        let (last_error, _) = watch::channel(None);
        Self {
            loading,
            last_error,
        }
    }

    /// Updates the loading flag, notifying subscribers only on change
    pub(crate) fn set_loading(&self, value: bool) {
        self.loading.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
    }

    pub(crate) fn set_error(&self, message: Option<String>) {
        self.last_error.send_replace(message);
    }

    pub(crate) fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub(crate) fn current_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }

    pub(crate) fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub(crate) fn subscribe_errors(&self) -> watch::Receiver<Option<String>> {
        self.last_error.subscribe()
    }
}

/// Turns a watch receiver into a stream
///
/// The current value is yielded first, then one item per observed change.
/// The stream ends when the sending side is dropped.
pub fn watch_stream<T>(rx: watch::Receiver<T>) -> BoxStream<'static, T>
where
    T: Clone + Send + Sync + 'static,
{
    stream::unfold((rx, true), |(mut rx, first)| async move {
        if !first && rx.changed().await.is_err() {
            return None;
        }
        let value = rx.borrow_and_update().clone();
        Some((value, (rx, false)))
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let status = StoreStatus::new();
        assert!(!status.is_loading());
        assert!(status.current_error().is_none());
    }

    #[test]
    fn test_set_loading_only_notifies_on_change() {
        let status = StoreStatus::new();
        let mut rx = status.subscribe_loading();
        rx.borrow_and_update();

        status.set_loading(false);
        assert!(!rx.has_changed().unwrap());

        status.set_loading(true);
        assert!(rx.has_changed().unwrap());
        assert!(*rx.borrow_and_update());
    }

    #[test]
    fn test_set_error_last_write_wins() {
        let status = StoreStatus::new();
        status.set_error(Some("first".to_string()));
        status.set_error(Some("second".to_string()));
        assert_eq!(status.current_error().as_deref(), Some("second"));

        status.set_error(None);
        assert!(status.current_error().is_none());
    }

    #[tokio::test]
    async fn test_watch_stream_yields_current_then_changes() {
        let (tx, rx) = watch::channel(1u32);
        let mut stream = watch_stream(rx);

        assert_eq!(stream.next().await, Some(1));
        tx.send_replace(2);
        assert_eq!(stream.next().await, Some(2));
    }

    #[tokio::test]
    async fn test_watch_stream_ends_when_sender_dropped() {
        let (tx, rx) = watch::channel(false);
        let mut stream = watch_stream(rx);

        assert_eq!(stream.next().await, Some(false));
        drop(tx);
        assert_eq!(stream.next().await, None);
    }
}
