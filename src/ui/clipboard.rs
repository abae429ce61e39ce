use crate::app::LinkTarget;
use crate::engine::TextscanError;
use arboard::Clipboard;

/// Puts activated reference links on the system clipboard.
///
/// The clipboard is opened on first use, so a headless terminal only fails
/// when a link is actually activated.
#[derive(Default)]
pub struct ClipboardTarget {
    clipboard: Option<Clipboard>,
}

impl ClipboardTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkTarget for ClipboardTarget {
    fn open(&mut self, url: &str) -> Result<(), TextscanError> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| TextscanError::Clipboard(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }

        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(url.to_string())
                .map_err(|e| TextscanError::Clipboard(e.to_string())),
            None => Err(TextscanError::Clipboard("Clipboard unavailable".to_string())),
        }
    }
}
