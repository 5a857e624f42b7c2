use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContent, ClipboardContext, ContentFormat};

use super::{FlavorSource, TextFlavor};

/// [`FlavorSource`] backed by `clipboard-rs`.
pub struct ClipboardRsSource {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl ClipboardRsSource {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, ClipboardContext>> {
        self.inner
            .lock()
            .map_err(|e| anyhow!("Failed to lock clipboard: {}", e))
    }
}

impl FlavorSource for ClipboardRsSource {
    fn read_text(&self, flavor: TextFlavor) -> Result<Option<String>> {
        let ctx = self.lock()?;
        let format = match flavor {
            TextFlavor::Plain => ContentFormat::Text,
            TextFlavor::Html => ContentFormat::Html,
            TextFlavor::Rtf => ContentFormat::Rtf,
        };
        if !ctx.has(format) {
            return Ok(None);
        }

        let text = match flavor {
            TextFlavor::Plain => ctx.get_text(),
            TextFlavor::Html => ctx.get_html(),
            TextFlavor::Rtf => ctx.get_rich_text(),
        };
        text.map(Some)
            .map_err(|e| anyhow!("{:?} text is advertised but unreadable: {}", flavor, e))
    }

    fn available_flavors(&self) -> Result<Vec<String>> {
        self.lock()?
            .available_formats()
            .map_err(|e| anyhow!("Failed to list clipboard formats: {}", e))
    }

    fn read_bytes(&self, flavor: &str) -> Result<Option<Vec<u8>>> {
        self.lock()?
            .get_buffer(flavor)
            .map(Some)
            .map_err(|e| anyhow!("Failed to read flavor {}: {}", flavor, e))
    }

    fn write_text(&self, text: &str) -> Result<()> {
        self.lock()?
            .set_text(text.to_string())
            .map_err(|e| anyhow!("Failed to write text: {}", e))
    }

    fn write_text_with_flavor(&self, text: &str, flavor: &str) -> Result<()> {
        let contents = vec![
            ClipboardContent::Text(text.to_string()),
            ClipboardContent::Other(flavor.to_string(), text.as_bytes().to_vec()),
        ];
        self.lock()?
            .set(contents)
            .map_err(|e| anyhow!("Failed to write clipboard flavors: {}", e))
    }
}
