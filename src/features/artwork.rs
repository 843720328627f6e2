//! Cover image loading

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use iced::widget::image;

/// Read a cover image into a handle the renderer can decode
pub fn load_artwork(path: &Path) -> Result<image::Handle> {
    let bytes = std::fs::read(path).with_context(|| format!("read artwork {:?}", path))?;
    if bytes.is_empty() {
        bail!("artwork {:?} is empty", path);
    }
    Ok(image::Handle::from_bytes(bytes))
}

/// Async wrapper for `Task::perform`, errors flattened for the message
pub async fn load_artwork_async(path: PathBuf) -> Result<image::Handle, String> {
    load_artwork(&path).map_err(|e| format!("{:#}", e))
}
