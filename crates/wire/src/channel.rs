//! In-process wire backed by tokio channels.
//!
//! Each action travels as an [`ActionRequest`] over a bounded mpsc channel and
//! carries a oneshot sender for its response, so responses can never be
//! matched to the wrong request.

use crate::error::WireError;
use crate::message::ActionResponse;
use crate::{ActionHandler, Wire};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// Default number of requests that may queue before senders wait.
pub const DEFAULT_CAPACITY: usize = 32;

/// Configuration for a [`ChannelWire`].
#[derive(Debug, Clone)]
pub struct WireConfig {
    /// Maximum queued requests.
    pub capacity: usize,
    /// How long a caller waits for its response. `None` waits forever.
    pub request_timeout: Option<Duration>,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            request_timeout: None,
        }
    }
}

impl WireConfig {
    fn channel_capacity(&self) -> usize {
        // tokio panics on a zero-capacity channel
        self.capacity.max(1)
    }
}

/// One action waiting for a response.
#[derive(Debug)]
pub struct ActionRequest {
    pub action: String,
    pub payload: Value,
    respond_to: oneshot::Sender<Result<ActionResponse, WireError>>,
}

impl ActionRequest {
    /// Answer the caller. A caller that already gave up is ignored.
    pub fn respond(self, result: Result<ActionResponse, WireError>) {
        if self.respond_to.send(result).is_err() {
            tracing::debug!(action = %self.action, "Caller dropped before response");
        }
    }
}

/// Sending half. Cheap to clone; every clone feeds the same receiver.
#[derive(Clone)]
pub struct ChannelWire {
    tx: mpsc::Sender<ActionRequest>,
    request_timeout: Option<Duration>,
}

impl ChannelWire {
    /// Create a wire and the receiver that serves it.
    pub fn new(config: WireConfig) -> (Self, ActionReceiver) {
        let (tx, rx) = mpsc::channel(config.channel_capacity());
        let wire = Self {
            tx,
            request_timeout: config.request_timeout,
        };
        (wire, ActionReceiver { rx })
    }

    /// Whether the receiving side has gone away.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    async fn exchange(&self, action: &str, payload: Value) -> Result<ActionResponse, WireError> {
        let (respond_to, response) = oneshot::channel();
        let request = ActionRequest {
            action: action.to_string(),
            payload,
            respond_to,
        };

        self.tx
            .send(request)
            .await
            .map_err(|_| WireError::ConnectionClosed)?;

        response.await.map_err(|_| WireError::ConnectionClosed)?
    }
}

#[async_trait]
impl Wire for ChannelWire {
    async fn send_action(&self, action: &str, payload: Value) -> Result<ActionResponse, WireError> {
        match self.request_timeout {
            Some(limit) => tokio::time::timeout(limit, self.exchange(action, payload))
                .await
                .map_err(|_| {
                    tracing::warn!(action, ?limit, "Action timed out");
                    WireError::Timeout(limit)
                })?,
            None => self.exchange(action, payload).await,
        }
    }
}

/// Receiving half of a [`ChannelWire`].
pub struct ActionReceiver {
    rx: mpsc::Receiver<ActionRequest>,
}

impl ActionReceiver {
    /// Next pending request, or `None` once every wire clone is dropped.
    pub async fn recv(&mut self) -> Option<ActionRequest> {
        self.rx.recv().await
    }

    /// Answer requests with `handler` until every wire clone is dropped.
    ///
    /// The handler's `Ok` value becomes `payload.data` of the response.
    pub async fn serve<H>(mut self, handler: &H)
    where
        H: ActionHandler + ?Sized,
    {
        while let Some(mut request) = self.rx.recv().await {
            tracing::debug!(action = %request.action, "Serving action");
            let payload = std::mem::take(&mut request.payload);
            let result = handler
                .handle(&request.action, payload)
                .await
                .map(ActionResponse::new);

            if let Err(e) = &result {
                tracing::debug!(action = %request.action, error = %e, "Action failed");
            }
            request.respond(result);
        }
        tracing::debug!("All wire senders dropped, stopping");
    }
}
