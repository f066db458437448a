use arboard::Clipboard;

pub trait ClipboardSink: Send + Sync {
    fn copy(&self, text: &str) -> Result<(), String>;
}

pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), String> {
        // A fresh handle per write; holding one open keeps clipboard
        // ownership on some platforms.
        let mut clipboard = Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.set_text(text).map_err(|e| e.to_string())
    }
}
