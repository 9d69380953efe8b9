//! Watch channel for a view's displayed content.
//!
//! [`ContentState`] wraps a [`tokio::sync::watch`] channel. Every
//! accepted update publishes new content through the cell, and the
//! render loop (plus any test observer) subscribes to receive the
//! latest value.

use tokio::sync::watch;

/// Single-value content cell with change notification.
///
/// Content is replaced wholesale on every publish (last-write-wins,
/// never merged). Observers that fall behind see only the newest
/// value; intermediate values may be skipped, which matches the
/// display semantics.
#[derive(Debug)]
pub struct ContentState {
    sender: watch::Sender<String>,
}

impl ContentState {
    /// Creates a new cell seeded with the given initial content.
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        let (sender, _) = watch::channel(initial.into());
        Self { sender }
    }

    /// Replaces the displayed content, returning the previous value.
    ///
    /// Publishing succeeds even when no observer is attached.
    pub fn publish(&self, content: impl Into<String>) -> String {
        self.sender.send_replace(content.into())
    }

    /// Returns a clone of the current content.
    #[must_use]
    pub fn current(&self) -> String {
        self.sender.borrow().clone()
    }

    /// Creates a new observer that sees the current value and all
    /// future replacements.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn initial_content_is_visible() {
        let state = ContentState::new("seed");
        assert_eq!(state.current(), "seed");
    }

    #[test]
    fn publish_without_observers_succeeds() {
        let state = ContentState::new("");
        let previous = state.publish("hello");
        assert_eq!(previous, "");
        assert_eq!(state.current(), "hello");
    }

    #[test]
    fn replacement_is_wholesale() {
        let state = ContentState::new("first");
        let previous = state.publish("second");
        assert_eq!(previous, "first");
        assert_eq!(state.current(), "second");
    }

    #[tokio::test]
    async fn observer_sees_latest_value() {
        let state = ContentState::new("");
        let mut rx = state.subscribe();

        state.publish("hello");

        let changed = rx.changed().await;
        assert!(changed.is_ok());
        assert_eq!(*rx.borrow_and_update(), "hello");
    }

    #[tokio::test]
    async fn lagging_observer_skips_to_newest() {
        let state = ContentState::new("");
        let mut rx = state.subscribe();

        state.publish("one");
        state.publish("two");

        let changed = rx.changed().await;
        assert!(changed.is_ok());
        assert_eq!(*rx.borrow_and_update(), "two");
    }
}
