//! Action names understood by the remote clipboard service.

use std::fmt;

/// A clipboard action. The string form is part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipboardAction {
    WriteText,
    ReadText,
    WriteHtml,
    ReadHtml,
    WriteRtf,
    ReadRtf,
    Write,
    ReadFormats,
}

impl ClipboardAction {
    /// Every action, writes before reads within each format.
    pub const ALL: [Self; 8] = [
        Self::WriteText,
        Self::ReadText,
        Self::WriteHtml,
        Self::ReadHtml,
        Self::WriteRtf,
        Self::ReadRtf,
        Self::Write,
        Self::ReadFormats,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WriteText => "clipboard-write-text",
            Self::ReadText => "clipboard-read-text",
            Self::WriteHtml => "clipboard-write-html",
            Self::ReadHtml => "clipboard-read-html",
            Self::WriteRtf => "clipboard-write-rtf",
            Self::ReadRtf => "clipboard-read-rtf",
            Self::Write => "clipboard-write",
            Self::ReadFormats => "clipboard-read-formats",
        }
    }

    /// Whether the action resolves with `payload.data`.
    pub const fn is_read(self) -> bool {
        matches!(
            self,
            Self::ReadText | Self::ReadHtml | Self::ReadRtf | Self::ReadFormats
        )
    }
}

impl fmt::Display for ClipboardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
