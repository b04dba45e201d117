//! Policy detail records saved to local JSON files.

use serde_json::Value;
use std::path::Path;

use crate::error::{PolicyError, Result};

pub fn save(path: impl AsRef<Path>, detail: &Value) -> Result<()> {
    let path = path.as_ref();
    let mut content = serde_json::to_string_pretty(detail)?;
    content.push('\n');
    std::fs::write(path, content)?;
    tracing::info!("Saved policy snapshot to {}", path.display());
    Ok(())
}

pub fn load(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(PolicyError::SnapshotNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
