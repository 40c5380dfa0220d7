//! System clipboard backed by `arboard`.

use gocat_demo_core::clipboard::Clipboard;
use gocat_demo_core::error::{Error, Result};
use log::debug;

/// Opens the platform clipboard on first use, so headless hosts only fail when copying.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => {
                let opened = arboard::Clipboard::new().map_err(Error::clipboard_unavailable)?;
                debug!("Opened system clipboard");
                opened
            }
        };

        self.inner
            .insert(clipboard)
            .set_text(text.to_string())
            .map_err(Error::clipboard_unavailable)
    }
}
