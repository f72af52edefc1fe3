//! Example: Serve an in-memory clipboard over a channel wire and use it.
//!
//! Run with: RUST_LOG=debug cargo run -p clipwire-clipboard --example loopback

use async_trait::async_trait;
use clipwire_clipboard::{ClipboardClient, ClipboardType, WriteAnyRequest, WriteRequest};
use clipwire_wire::{ActionHandler, ChannelWire, WireConfig, WireError};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// One clipboard, format -> data. Ignores the clipboard type.
#[derive(Default)]
struct Loopback {
    formats: Mutex<BTreeMap<String, String>>,
}

impl Loopback {
    fn replace(&self, formats: BTreeMap<String, String>) -> Value {
        if let Ok(mut current) = self.formats.lock() {
            *current = formats;
        }
        Value::Null
    }

    fn get(&self, format: &str) -> Value {
        let data = self
            .formats
            .lock()
            .ok()
            .and_then(|formats| formats.get(format).cloned())
            .unwrap_or_default();
        json!(data)
    }
}

#[async_trait]
impl ActionHandler for Loopback {
    async fn handle(&self, action: &str, payload: Value) -> Result<Value, WireError> {
        let single = |format: &str| -> Result<Value, WireError> {
            let data = payload["data"].as_str().unwrap_or_default().to_string();
            Ok(self.replace(BTreeMap::from([(format.to_string(), data)])))
        };

        match action {
            "clipboard-write-text" => single("text"),
            "clipboard-write-html" => single("html"),
            "clipboard-write-rtf" => single("rtf"),
            "clipboard-write" => serde_json::from_value(payload.clone())
                .map(|formats| self.replace(formats))
                .map_err(|e| WireError::Remote(e.to_string())),
            "clipboard-read-text" => Ok(self.get("text")),
            "clipboard-read-html" => Ok(self.get("html")),
            "clipboard-read-rtf" => Ok(self.get("rtf")),
            "clipboard-read-formats" => {
                let formats: Vec<String> = self
                    .formats
                    .lock()
                    .map(|formats| formats.keys().cloned().collect())
                    .unwrap_or_default();
                Ok(json!(formats))
            }
            other => Err(WireError::Remote(format!("unknown action: {other}"))),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), WireError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("info,clipwire_wire=debug,clipwire_clipboard=debug")
            }),
        )
        .init();

    let (wire, receiver) = ChannelWire::new(WireConfig {
        request_timeout: Some(Duration::from_secs(1)),
        ..Default::default()
    });
    let server = tokio::spawn(async move { receiver.serve(&Loopback::default()).await });

    let clipboard = ClipboardClient::new(Arc::new(wire));

    let request = WriteRequest::new("hello")
        .with_options("loopback", "00000000-0000-0000-0000-000000000000");
    clipboard.write_text(&request).await?;
    println!("text:    {:?}", clipboard.read_text(None).await?);

    clipboard
        .write(
            &WriteAnyRequest::new()
                .with_format("text", "bold")
                .with_format("html", "<b>bold</b>"),
        )
        .await?;
    println!("html:    {:?}", clipboard.read_html(None).await?);
    println!("formats: {:?}", clipboard.available_formats(None).await?);

    let selection = ClipboardType::from("selection");
    println!("rtf:     {:?}", clipboard.read_rtf(Some(&selection)).await?);

    drop(clipboard);
    if let Err(e) = server.await {
        tracing::warn!(error = %e, "Loopback server task failed");
    }

    Ok(())
}
