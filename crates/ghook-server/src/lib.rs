//! Webhook server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod errors;
mod event_type;
pub mod server;
pub mod utils;
mod webhook;

pub use errors::{Result, ServerError};
pub use event_type::{EventType, EventTypeError};
