//! Clipboard facade over a [`Wire`](clipwire_wire::Wire).

use crate::actions::ClipboardAction;
use crate::request::{ClipboardType, WriteAnyRequest, WriteRequest};
use clipwire_wire::{ActionResponse, WireError, WireRef};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Reads and writes the clipboard of a remote runtime.
///
/// Every method sends exactly one action and waits for its response.
/// Wire failures are returned unchanged. The client keeps no state of its
/// own, so clones may be used concurrently.
#[derive(Clone)]
pub struct ClipboardClient {
    wire: WireRef,
}

impl ClipboardClient {
    /// Create a client that talks over `wire`.
    pub fn new(wire: WireRef) -> Self {
        Self { wire }
    }

    /// Write plain text.
    pub async fn write_text(&self, request: &WriteRequest) -> Result<(), WireError> {
        self.write_action(ClipboardAction::WriteText, request).await
    }

    /// Read plain text from the default clipboard or `clipboard_type`.
    ///
    /// `None` when the response carries no data.
    pub async fn read_text(
        &self,
        clipboard_type: Option<&ClipboardType>,
    ) -> Result<Option<String>, WireError> {
        self.read_action(ClipboardAction::ReadText, clipboard_type).await
    }

    /// Write HTML.
    pub async fn write_html(&self, request: &WriteRequest) -> Result<(), WireError> {
        self.write_action(ClipboardAction::WriteHtml, request).await
    }

    /// Read HTML.
    pub async fn read_html(
        &self,
        clipboard_type: Option<&ClipboardType>,
    ) -> Result<Option<String>, WireError> {
        self.read_action(ClipboardAction::ReadHtml, clipboard_type).await
    }

    /// Write RTF.
    pub async fn write_rtf(&self, request: &WriteRequest) -> Result<(), WireError> {
        self.write_action(ClipboardAction::WriteRtf, request).await
    }

    /// Read RTF.
    pub async fn read_rtf(
        &self,
        clipboard_type: Option<&ClipboardType>,
    ) -> Result<Option<String>, WireError> {
        self.read_action(ClipboardAction::ReadRtf, clipboard_type).await
    }

    /// Write several formats in one action.
    pub async fn write(&self, request: &WriteAnyRequest) -> Result<(), WireError> {
        self.write_action(ClipboardAction::Write, request).await
    }

    /// List the formats currently held by the clipboard.
    pub async fn available_formats(
        &self,
        clipboard_type: Option<&ClipboardType>,
    ) -> Result<Option<Vec<String>>, WireError> {
        self.read_action(ClipboardAction::ReadFormats, clipboard_type).await
    }

    /// Send a write and drop whatever the response carries.
    async fn write_action<T>(&self, action: ClipboardAction, request: &T) -> Result<(), WireError>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_value(request)?;
        self.send(action, payload).await?;
        Ok(())
    }

    /// Send a read and project `payload.data`. Absent or null data is `None`.
    async fn read_action<T>(
        &self,
        action: ClipboardAction,
        clipboard_type: Option<&ClipboardType>,
    ) -> Result<Option<T>, WireError>
    where
        T: DeserializeOwned,
    {
        let payload = serde_json::to_value(clipboard_type)?;
        self.send(action, payload).await?.into_data()
    }

    async fn send(
        &self,
        action: ClipboardAction,
        payload: Value,
    ) -> Result<ActionResponse, WireError> {
        tracing::debug!(
            action = action.as_str(),
            read = action.is_read(),
            "Sending clipboard action"
        );
        self.wire.send_action(action.as_str(), payload).await
    }
}

impl fmt::Debug for ClipboardClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipboardClient").finish_non_exhaustive()
    }
}
