//! Wire protocol: request and update message types plus routing.
//!
//! The protocol is a thin text-frame exchange: one outbound request on
//! connect, then zero or more inbound updates filtered by file
//! identity.

pub mod messages;
pub mod route;

pub use messages::{PING_PAYLOAD, Request, Update};
pub use route::{Route, route};
