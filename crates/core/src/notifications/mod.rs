//! Notifications module.
//!
//! Provides the notification event types and the sink trait that core
//! services use to hand committed state changes to a delivery layer
//! (push, in-app feed, etc.). Delivery is outside this crate's scope.

mod notifications_model;
mod sink;

pub use notifications_model::*;
pub use sink::*;
