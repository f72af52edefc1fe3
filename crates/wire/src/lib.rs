//! Request/response transport for clipwire API facades.
//!
//! A facade turns each typed method call into a named *action* and hands it
//! to a [`Wire`]. The wire answers with an [`ActionResponse`] envelope
//! (`{ "payload": { "data": ... } }`) or a [`WireError`].
//!
//! The facades depend only on the [`Wire`] trait. [`ChannelWire`] is an
//! in-process implementation whose other end is served by an
//! [`ActionHandler`].
//!
//! # Example
//!
//! ```ignore
//! use clipwire_wire::{ChannelWire, Wire, WireConfig};
//!
//! let (wire, receiver) = ChannelWire::new(WireConfig::default());
//! tokio::spawn(async move { receiver.serve(&handler).await });
//!
//! let response = wire.send_action("clipboard-read-text", serde_json::Value::Null).await?;
//! ```

mod channel;
mod error;
mod message;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub use channel::{ActionReceiver, ActionRequest, ChannelWire, WireConfig, DEFAULT_CAPACITY};
pub use error::WireError;
pub use message::{ActionResponse, ResponsePayload};

/// A request/response channel to the runtime that owns the real state.
///
/// Implementations are responsible for matching each response to its
/// request and for any timeout or cancellation policy.
#[async_trait]
pub trait Wire: Send + Sync {
    /// Send `action` with `payload` and wait for its response.
    async fn send_action(&self, action: &str, payload: Value) -> Result<ActionResponse, WireError>;
}

/// Shared handle to a wire, as held by API facades.
pub type WireRef = Arc<dyn Wire>;

/// Answers actions on the far side of a [`ChannelWire`].
#[async_trait]
pub trait ActionHandler: Send + Sync {
    /// Handle one action. The returned value becomes `payload.data`.
    async fn handle(&self, action: &str, payload: Value) -> Result<Value, WireError>;
}
