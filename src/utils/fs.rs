use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    if !parent.exists() {
        tracing::info!("Output directory {} does not exist. Creating it.", parent.display());
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create parent directory: {:?}", parent))?;
    }

    Ok(())
}

/// Write through a uniquely named temp file in the target directory, then
/// rename it over `path`. The temp file is removed if any step fails.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in: {:?}", parent))?;

    file.write_all(content)
        .with_context(|| format!("Failed to write to temp file: {:?}", file.path()))?;

    file.as_file()
        .sync_all()
        .with_context(|| format!("Failed to sync temp file: {:?}", file.path()))?;

    file.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to move temp file to {:?}", path))?;

    Ok(())
}
