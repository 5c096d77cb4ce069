//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};

pub struct Clipboard {
    ctx: ClipboardContext,
}

impl Clipboard {
    pub fn open() -> Result<Self> {
        let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(Self { ctx })
    }

    pub fn copy(&mut self, text: &str) -> Result<()> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        // Some providers hand back a copy on read; scrub it.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        log::debug!("copied {} chars to clipboard", text.len());
        Ok(())
    }
}
