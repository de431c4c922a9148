use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{AssetError, AssetResult};

/// Role of an image, either as supplied by the user or as produced by a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetKind {
    /// Brand logo, used to derive both icons and splash screens.
    Logo,
    /// Dark-mode brand logo.
    LogoDark,
    /// Application icon master.
    Icon,
    /// Adaptive icon foreground layer (not used by the iOS catalog).
    IconForeground,
    /// Adaptive icon background layer (not used by the iOS catalog).
    IconBackground,
    /// Notification icon.
    NotificationIcon,
    /// Settings icon.
    SettingsIcon,
    /// Spotlight search icon.
    SpotlightIcon,
    /// Launch splash screen.
    Splash,
    /// Dark-mode launch splash screen.
    SplashDark,
}

impl AssetKind {
    /// Every kind, in declaration order.
    pub const ALL: [AssetKind; 10] = [
        AssetKind::Logo,
        AssetKind::LogoDark,
        AssetKind::Icon,
        AssetKind::IconForeground,
        AssetKind::IconBackground,
        AssetKind::NotificationIcon,
        AssetKind::SettingsIcon,
        AssetKind::SpotlightIcon,
        AssetKind::Splash,
        AssetKind::SplashDark,
    ];

    /// Whether this kind is a dark-appearance variant.
    pub fn is_dark(self) -> bool {
        matches!(self, AssetKind::LogoDark | AssetKind::SplashDark)
    }

    /// Stable kebab-case name, as used in file stems and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Logo => "logo",
            AssetKind::LogoDark => "logo-dark",
            AssetKind::Icon => "icon",
            AssetKind::IconForeground => "icon-foreground",
            AssetKind::IconBackground => "icon-background",
            AssetKind::NotificationIcon => "notification-icon",
            AssetKind::SettingsIcon => "settings-icon",
            AssetKind::SpotlightIcon => "spotlight-icon",
            AssetKind::Splash => "splash",
            AssetKind::SplashDark => "splash-dark",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named group a template belongs to. Each input kind is mapped onto whole groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateGroup {
    /// Home-screen app icons.
    IconFamily,
    /// Notification icons.
    NotificationFamily,
    /// Settings icons.
    SettingsFamily,
    /// Spotlight icons.
    SpotlightFamily,
    /// Light launch splash.
    SplashLight,
    /// Dark launch splash.
    SplashDark,
}

impl TemplateGroup {
    /// Groups that together make up the complete icon family of a logo.
    pub const ICONS: [TemplateGroup; 4] = [
        TemplateGroup::IconFamily,
        TemplateGroup::NotificationFamily,
        TemplateGroup::SettingsFamily,
        TemplateGroup::SpotlightFamily,
    ];
}

/// Manifest appearance a template is registered under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Appearance {
    /// Dark luminosity.
    Dark,
}

impl Appearance {
    /// `(appearance, value)` pair written into the manifest.
    pub fn manifest_pair(self) -> (&'static str, &'static str) {
        match self {
            Appearance::Dark => ("luminosity", "dark"),
        }
    }
}

/// Shape and naming of one required output variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputAssetTemplate {
    /// Role of the produced variant.
    pub kind: AssetKind,
    /// Group the template is registered under.
    pub group: TemplateGroup,
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Output file name, relative to the platform directory for its group.
    pub name: String,
    /// Display scale factor (1x, 2x, 3x).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    /// Manifest appearance tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<Appearance>,
}

impl OutputAssetTemplate {
    /// Template without scale or appearance.
    pub fn new(
        kind: AssetKind,
        group: TemplateGroup,
        width: u32,
        height: u32,
        name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            group,
            width,
            height,
            name: name.into(),
            scale: None,
            appearance: None,
        }
    }

    /// Set the scale factor.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set the manifest appearance.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    /// Target `(width, height)`, failing if either is missing (zero).
    pub fn dimensions(&self) -> AssetResult<(u32, u32)> {
        if self.width == 0 || self.height == 0 {
            return Err(AssetError::catalog(format!(
                "template '{}' has no target size ({}x{})",
                self.name, self.width, self.height
            )));
        }
        Ok((self.width, self.height))
    }

    /// Scale factor, defaulting to 1.
    pub fn scale_or_default(&self) -> u32 {
        self.scale.unwrap_or(1)
    }
}

/// Ordered, validated registration table of output templates.
#[derive(Clone, Debug)]
pub struct Catalog {
    templates: Vec<OutputAssetTemplate>,
    by_group: HashMap<TemplateGroup, Vec<usize>>,
}

impl Catalog {
    /// Validate `templates` and index them by group. Registration order is preserved.
    pub fn new(templates: Vec<OutputAssetTemplate>) -> AssetResult<Self> {
        let mut names = HashSet::with_capacity(templates.len());
        let mut by_group = HashMap::<TemplateGroup, Vec<usize>>::new();

        for (idx, template) in templates.iter().enumerate() {
            template.dimensions()?;
            if template.name.trim().is_empty() {
                return Err(AssetError::catalog(format!(
                    "template #{idx} ({}) has an empty file name",
                    template.kind
                )));
            }
            if !names.insert(template.name.as_str()) {
                return Err(AssetError::catalog(format!(
                    "duplicate template name '{}'",
                    template.name
                )));
            }
            by_group.entry(template.group).or_default().push(idx);
        }

        Ok(Self {
            templates,
            by_group,
        })
    }

    /// Built-in iOS asset catalog table.
    pub fn ios() -> AssetResult<Self> {
        Self::new(crate::catalog::ios::templates())
    }

    /// Templates of `group`, in registration order.
    pub fn group(&self, group: TemplateGroup) -> Vec<&OutputAssetTemplate> {
        self.by_group
            .get(&group)
            .map(|idxs| idxs.iter().map(|&i| &self.templates[i]).collect())
            .unwrap_or_default()
    }

    /// Templates of several groups, concatenated in the order given.
    pub fn groups(&self, groups: &[TemplateGroup]) -> Vec<&OutputAssetTemplate> {
        groups.iter().flat_map(|&g| self.group(g)).collect()
    }

    /// All templates, in registration order.
    pub fn templates(&self) -> &[OutputAssetTemplate] {
        &self.templates
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether no templates are registered.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/template.rs"]
mod tests;
