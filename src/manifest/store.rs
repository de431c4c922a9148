use std::{
    collections::HashMap,
    io::Write as _,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

use anyhow::Context;

use crate::{
    assets::output::OutputAsset,
    foundation::error::{AssetError, AssetResult},
    manifest::contents::{Manifest, merge_dark_variant},
    project::layout::Project,
};

/// One lock per manifest path; updates to the same file are serialized.
#[derive(Debug, Default)]
pub struct ManifestLocks {
    by_path: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl ManifestLocks {
    /// Lock handle for `path`; hold `.lock()` on it for the whole read-modify-write.
    pub fn handle(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut map = lock_ignoring_poison(&self.by_path);
        Arc::clone(map.entry(path.to_path_buf()).or_default())
    }
}

fn lock_ignoring_poison<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Read and parse the manifest at `path`.
pub fn read_manifest(path: &Path) -> AssetResult<Manifest> {
    let text =
        std::fs::read_to_string(path).map_err(|e| AssetError::manifest_corrupt(path, e))?;
    Manifest::from_json(&text).map_err(|e| AssetError::manifest_corrupt(path, e))
}

/// Write `manifest` to `path` through a sibling temp file and an atomic rename.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> AssetResult<()> {
    let text = manifest
        .to_json_pretty()
        .context("serialize manifest json")?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp manifest in '{}'", dir.display()))?;
    tmp.write_all(text.as_bytes())
        .with_context(|| format!("write temp manifest for '{}'", path.display()))?;
    // Temp files are created 0600; keep the mode of the file being replaced.
    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .with_context(|| format!("copy permissions of '{}'", path.display()))?;
    }
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("replace manifest '{}'", path.display()))?;
    Ok(())
}

/// Register the dark-appearance splash in `output` in the project's splash manifest.
///
/// The already written image stays on disk when this fails.
#[tracing::instrument(skip_all, fields(file = %output.template().name))]
pub fn register_dark_variant(output: &OutputAsset, project: &Project) -> AssetResult<()> {
    let path = project.ios_layout()?.splash_manifest_path();

    let handle = project.manifest_locks().handle(&path);
    let _guard = lock_ignoring_poison(&handle);

    let mut manifest = read_manifest(&path)?;
    let outcome = merge_dark_variant(&mut manifest, output.template());
    if outcome.pruned > 0 {
        tracing::warn!(
            pruned = outcome.pruned,
            manifest = %path.display(),
            "dropped manifest entries without a filename"
        );
    }
    write_manifest(&path, &manifest)?;

    tracing::debug!(
        manifest = %path.display(),
        replaced = outcome.replaced,
        "registered dark variant"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/manifest/store.rs"]
mod tests;
