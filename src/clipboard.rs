//! Clipboard access for copy/cut/paste.
//!
//! [`SystemClipboard`] talks to the OS through arboard. A fresh handle is
//! opened per call; failures are logged and treated as an empty clipboard.
//! [`MemoryClipboard`] keeps the text in-process for tests and headless replay.

/// Source and sink for clipboard text.
pub trait Clipboard {
    /// Current clipboard text, if any
    fn get_text(&mut self) -> Option<String>;

    /// Replace the clipboard contents
    fn set_text(&mut self, text: &str);
}

/// The platform clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.get_text() {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::warn!("clipboard read failed: {}", e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("clipboard unavailable: {}", e);
                None
            }
        }
    }

    fn set_text(&mut self, text: &str) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(text) {
                    tracing::warn!("clipboard write failed: {}", e);
                }
            }
            Err(e) => tracing::warn!("clipboard unavailable: {}", e),
        }
    }
}

/// In-process clipboard.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.contents.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.contents = Some(text.to_string());
    }
}
