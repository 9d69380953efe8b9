//! Inbound update routing.
//!
//! Routing inspects an update's file discriminant against the
//! receiving view's own identity and yields an explicit disposition.
//! The connection loop matches the disposition exhaustively; a discard
//! is a defined path, not an error.

use super::messages::Update;
use crate::domain::FileId;

/// Disposition of an inbound update with respect to one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The update addresses this view: replace displayed content.
    Deliver(Update),
    /// The update addresses a different file: discard it, carrying the
    /// foreign identity for diagnostics.
    Discard(FileId),
}

/// Routes an update against the file identity of the receiving view.
#[must_use]
pub fn route(update: Update, subscribed: &FileId) -> Route {
    if update.file == *subscribed {
        Route::Deliver(update)
    } else {
        Route::Discard(update.file)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn update_for(file: &str, content: &str) -> Update {
        Update {
            file: FileId::new(file),
            content: content.to_string(),
        }
    }

    #[test]
    fn matching_update_is_delivered() {
        let subscribed = FileId::new("test");
        let disposition = route(update_for("test", "hello"), &subscribed);
        let Route::Deliver(update) = disposition else {
            panic!("expected delivery");
        };
        assert_eq!(update.content, "hello");
    }

    #[test]
    fn mismatched_update_is_discarded() {
        let subscribed = FileId::new("test");
        let disposition = route(update_for("other", "ignored"), &subscribed);
        assert_eq!(disposition, Route::Discard(FileId::new("other")));
    }

    #[test]
    fn routing_is_case_sensitive() {
        let subscribed = FileId::new("test");
        let disposition = route(update_for("Test", "ignored"), &subscribed);
        assert!(matches!(disposition, Route::Discard(_)));
    }

    #[test]
    fn delivery_preserves_empty_content() {
        let subscribed = FileId::new("test");
        let disposition = route(update_for("test", ""), &subscribed);
        let Route::Deliver(update) = disposition else {
            panic!("expected delivery");
        };
        assert_eq!(update.content, "");
    }
}
