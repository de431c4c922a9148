use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{AssetError, AssetResult},
    manifest::store::ManifestLocks,
    project::config::{GenerateConfig, ProjectFile},
};

/// Project file looked up at the project root when none is given.
pub const PROJECT_FILE_NAME: &str = "iconsmith.json";
/// iOS base directory probed when the project file does not name one.
pub const DEFAULT_IOS_DIR: &str = "ios/App";
/// Input asset directory used when the project file does not name one.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Target platform of a generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS asset catalog.
    Ios,
}

/// Directory layout of an iOS asset catalog below the platform base directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IosLayout {
    root: PathBuf,
}

impl IosLayout {
    /// Layout rooted at the platform base directory (the one holding `App/`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Platform base directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `Assets.xcassets` catalog directory.
    pub fn catalog_dir(&self) -> PathBuf {
        self.root.join("App").join("Assets.xcassets")
    }

    /// Directory receiving the icon family.
    pub fn icon_set_dir(&self) -> PathBuf {
        self.catalog_dir().join("AppIcon.appiconset")
    }

    /// Directory receiving splash images.
    pub fn image_set_dir(&self) -> PathBuf {
        self.catalog_dir().join("Splash.imageset")
    }

    /// Manifest listing the splash images.
    pub fn splash_manifest_path(&self) -> PathBuf {
        self.image_set_dir().join("Contents.json")
    }
}

/// Project handle: where each platform lives and how to generate for it.
#[derive(Clone, Debug)]
pub struct Project {
    root: PathBuf,
    ios: Option<IosLayout>,
    assets_dir: PathBuf,
    config: GenerateConfig,
    manifest_locks: Arc<ManifestLocks>,
}

impl Project {
    /// Project at `root` with no platforms and default settings.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            assets_dir: root.join(DEFAULT_ASSETS_DIR),
            root,
            ios: None,
            config: GenerateConfig::default(),
            manifest_locks: Arc::new(ManifestLocks::default()),
        }
    }

    /// Load the project at `root`.
    ///
    /// `config_path` (or `<root>/iconsmith.json` when `None`) is read when it exists; an
    /// explicitly named file must exist. Without an `ios` section, `<root>/ios/App` is used
    /// if that directory exists.
    #[tracing::instrument]
    pub fn load(root: &Path, config_path: Option<&Path>) -> AssetResult<Self> {
        let file = match config_path {
            Some(path) => Some(read_project_file(path)?),
            None => {
                let default = root.join(PROJECT_FILE_NAME);
                if default.is_file() {
                    Some(read_project_file(&default)?)
                } else {
                    None
                }
            }
        };
        let file = file.unwrap_or_default();

        let mut project = Self::new(root).with_config(file.generate)?;
        if let Some(assets) = file.assets {
            project.assets_dir = root.join(assets);
        }

        match file.ios {
            Some(ios) => project = project.with_ios(root.join(ios.path)),
            None => {
                let detected = root.join(DEFAULT_IOS_DIR);
                if detected.is_dir() {
                    tracing::debug!(dir = %detected.display(), "detected ios platform");
                    project = project.with_ios(detected);
                }
            }
        }

        Ok(project)
    }

    /// Attach the iOS platform rooted at `dir`.
    pub fn with_ios(mut self, dir: impl Into<PathBuf>) -> Self {
        self.ios = Some(IosLayout::new(dir));
        self
    }

    /// Use a different input asset directory.
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Replace generator settings after validating them.
    pub fn with_config(mut self, config: GenerateConfig) -> AssetResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Input asset directory.
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Generator settings.
    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// iOS layout, if the platform is configured.
    pub fn ios(&self) -> Option<&IosLayout> {
        self.ios.as_ref()
    }

    /// iOS layout, failing when the platform is not configured.
    pub fn ios_layout(&self) -> AssetResult<&IosLayout> {
        self.ios.as_ref().ok_or_else(|| {
            AssetError::project_configuration(format!(
                "ios platform is not configured for project '{}'",
                self.root.display()
            ))
        })
    }

    /// Locks serializing manifest updates for this project.
    pub fn manifest_locks(&self) -> &ManifestLocks {
        &self.manifest_locks
    }
}

fn read_project_file(path: &Path) -> AssetResult<ProjectFile> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        AssetError::project_configuration(format!(
            "read project file '{}': {e}",
            path.display()
        ))
    })?;
    ProjectFile::from_json(&text)
}

#[cfg(test)]
#[path = "../../tests/unit/project/layout.rs"]
mod tests;
