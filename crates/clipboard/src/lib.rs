//! Clipboard API for clipwire.
//!
//! Reads and writes the clipboard of a remote runtime in plain text, HTML,
//! RTF or several formats at once. The clipboard itself lives on the other
//! side of a [`Wire`](clipwire_wire::Wire); this crate only names the
//! actions and unwraps their responses.
//!
//! # Example
//!
//! ```ignore
//! use clipwire_clipboard::{ClipboardClient, WriteRequest};
//!
//! let clipboard = ClipboardClient::new(wire);
//!
//! clipboard.write_text(&WriteRequest::new("hello")).await?;
//! assert_eq!(clipboard.read_text(None).await?, "hello");
//! ```

mod actions;
mod client;
mod request;

pub use actions::ClipboardAction;
pub use client::ClipboardClient;
pub use request::{ClipboardType, WriteAnyRequest, WriteOptions, WriteRequest};

pub use clipwire_wire::WireError;
