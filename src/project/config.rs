use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::foundation::{
    color::Rgba8,
    error::{AssetError, AssetResult},
};

/// Fraction of the logo's natural width used on generated splash screens.
pub const DEFAULT_LOGO_SPLASH_SCALE: f64 = 0.2;
/// Largest accepted `logoSplashScale`; the logo is never upscaled past its own width.
pub const MAX_LOGO_SPLASH_SCALE: f64 = 1.0;
/// Light splash background when none is configured.
pub const DEFAULT_SPLASH_BACKGROUND: Rgba8 = Rgba8::rgb(0xff, 0xff, 0xff);
/// Dark splash background when none is configured.
pub const DEFAULT_SPLASH_BACKGROUND_DARK: Rgba8 = Rgba8::rgb(0x11, 0x11, 0x11);

/// Knobs consumed by the generators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateConfig {
    /// Logo width on logo-derived splashes, as a fraction of the logo's own width.
    pub logo_splash_scale: f64,
    /// Light splash background override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splash_background_color: Option<Rgba8>,
    /// Dark splash background override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splash_background_color_dark: Option<Rgba8>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            logo_splash_scale: DEFAULT_LOGO_SPLASH_SCALE,
            splash_background_color: None,
            splash_background_color_dark: None,
        }
    }
}

impl GenerateConfig {
    /// Light splash background, override or default.
    pub fn light_background(&self) -> Rgba8 {
        self.splash_background_color.unwrap_or(DEFAULT_SPLASH_BACKGROUND)
    }

    /// Dark splash background, override or default.
    pub fn dark_background(&self) -> Rgba8 {
        self.splash_background_color_dark.unwrap_or(DEFAULT_SPLASH_BACKGROUND_DARK)
    }

    /// Reject values the generators cannot use.
    pub fn validate(&self) -> AssetResult<()> {
        if !(0.0..=MAX_LOGO_SPLASH_SCALE).contains(&self.logo_splash_scale) {
            return Err(AssetError::validation(format!(
                "logoSplashScale must be between 0 and {MAX_LOGO_SPLASH_SCALE}, got {}",
                self.logo_splash_scale
            )));
        }
        Ok(())
    }
}

/// iOS section of the project file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IosSection {
    /// Platform base directory, relative to the project root.
    pub path: PathBuf,
}

/// On-disk project file (`iconsmith.json`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    /// iOS platform, absent when the project does not target iOS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<IosSection>,
    /// Directory holding the input assets, relative to the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<PathBuf>,
    /// Generator settings.
    #[serde(flatten)]
    pub generate: GenerateConfig,
}

impl ProjectFile {
    /// Parse a project file from JSON text.
    pub fn from_json(text: &str) -> AssetResult<Self> {
        let file: Self = serde_json::from_str(text).map_err(|e| {
            AssetError::project_configuration(format!("invalid project file: {e}"))
        })?;
        file.generate.validate()?;
        Ok(file)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/config.rs"]
mod tests;
