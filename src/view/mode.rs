//! View mode selection.
//!
//! The subscribing view and the diagnostic probe are the same
//! component parameterized by [`ViewMode`]; the mode decides the
//! greeting sent on connect and how inbound frames are consumed.

use std::str::FromStr;

use crate::domain::FileId;
use crate::error::ViewError;
use crate::protocol::Request;

/// Behavior of a mounted [`super::FileView`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Subscribe to updates for the view's file and re-render on each
    /// accepted update.
    #[default]
    Subscribe,
    /// Send a single diagnostic `ping` and log inbound frames without
    /// ever touching displayed content.
    Probe,
}

impl ViewMode {
    /// Returns the request transmitted once on connect for this mode.
    #[must_use]
    pub fn greeting(self, file: &FileId) -> Request {
        match self {
            Self::Subscribe => Request::Subscribe { file: file.clone() },
            Self::Probe => Request::Ping,
        }
    }

    /// Returns the mode as a static string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subscribe => "subscribe",
            Self::Probe => "probe",
        }
    }
}

impl FromStr for ViewMode {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subscribe" => Ok(Self::Subscribe),
            "probe" => Ok(Self::Probe),
            other => Err(ViewError::InvalidMode(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_greeting_names_the_file() {
        let greeting = ViewMode::Subscribe.greeting(&FileId::new("test"));
        assert_eq!(
            greeting,
            Request::Subscribe {
                file: FileId::new("test")
            }
        );
    }

    #[test]
    fn probe_greeting_is_ping() {
        let greeting = ViewMode::Probe.greeting(&FileId::new("test"));
        assert_eq!(greeting, Request::Ping);
    }

    #[test]
    fn parse_known_modes() {
        assert_eq!("subscribe".parse::<ViewMode>().ok(), Some(ViewMode::Subscribe));
        assert_eq!("probe".parse::<ViewMode>().ok(), Some(ViewMode::Probe));
    }

    #[test]
    fn parse_unknown_mode_fails() {
        let result = "watch".parse::<ViewMode>();
        assert!(matches!(result, Err(ViewError::InvalidMode(_))));
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for mode in [ViewMode::Subscribe, ViewMode::Probe] {
            assert_eq!(mode.as_str().parse::<ViewMode>().ok(), Some(mode));
        }
    }
}
