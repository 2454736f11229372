use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::FormiconResult;

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> FormiconResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Conventional file name for an icon of `size` pixels.
pub fn icon_file_name(size: i64) -> String {
    format!("icon{size}.png")
}

/// Write `bytes` to `path` without ever leaving a truncated file at `path`.
///
/// Data goes to a sibling `.tmp` file first and is renamed into place once fully written.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> FormiconResult<()> {
    ensure_parent_dir(path)?;
    let tmp = temp_sibling(path);
    let mut guard = TempFileGuard(Some(tmp.clone()));

    std::fs::write(&tmp, bytes)
        .with_context(|| format!("failed to write '{}'", tmp.display()))?;
    std::fs::rename(&tmp, path).with_context(|| {
        format!(
            "failed to move '{}' into place at '{}'",
            tmp.display(),
            path.display()
        )
    })?;

    guard.0 = None;
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

struct TempFileGuard(Option<PathBuf>);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/fs.rs"]
mod tests;
