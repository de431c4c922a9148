use std::path::{Path, PathBuf};

use crate::{
    assets::input::InputAsset,
    catalog::template::AssetKind,
    foundation::error::{AssetError, AssetResult},
};

/// Extensions accepted for source masters, in preference order.
pub const INPUT_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "svg"];

/// File stem each input kind is looked up under.
pub fn input_stem(kind: AssetKind) -> &'static str {
    match kind {
        AssetKind::Logo => "logo",
        AssetKind::LogoDark => "logo-dark",
        AssetKind::Icon => "icon-only",
        AssetKind::IconForeground => "icon-foreground",
        AssetKind::IconBackground => "icon-background",
        AssetKind::NotificationIcon => "icon-notification",
        AssetKind::SettingsIcon => "icon-settings",
        AssetKind::SpotlightIcon => "icon-spotlight",
        AssetKind::Splash => "splash",
        AssetKind::SplashDark => "splash-dark",
    }
}

/// Find and probe the well-known source masters in `dir`, in kind order.
///
/// When one stem exists with several extensions the earliest entry of
/// [`INPUT_EXTENSIONS`] wins.
#[tracing::instrument]
pub fn discover_inputs(dir: &Path) -> AssetResult<Vec<InputAsset>> {
    if !dir.is_dir() {
        return Err(AssetError::project_configuration(format!(
            "assets directory '{}' does not exist",
            dir.display()
        )));
    }

    let mut inputs = Vec::new();
    for kind in AssetKind::ALL {
        let Some(path) = find_master(dir, input_stem(kind)) else {
            continue;
        };
        inputs.push(InputAsset::open(path, kind)?);
    }

    tracing::debug!(count = inputs.len(), "discovered inputs");
    Ok(inputs)
}

fn find_master(dir: &Path, stem: &str) -> Option<PathBuf> {
    let mut found = INPUT_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .filter(|p| p.is_file());
    let first = found.next()?;
    for ignored in found {
        tracing::warn!(
            used = %first.display(),
            ignored = %ignored.display(),
            "several masters share a stem"
        );
    }
    Some(first)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/discover.rs"]
mod tests;
