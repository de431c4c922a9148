use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::template::OutputAssetTemplate;

/// Idiom written for every entry this crate registers.
pub const UNIVERSAL_IDIOM: &str = "universal";

/// One `{appearance, value}` pair of a manifest entry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AppearanceTag {
    /// Appearance axis, e.g. `luminosity`.
    pub appearance: String,
    /// Value on that axis, e.g. `dark`.
    pub value: String,
}

/// One image record of an asset catalog `Contents.json`.
///
/// Keys this crate does not model are kept in `extra` and written back unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    /// Appearance variants this image applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearances: Option<Vec<AppearanceTag>>,
    /// Device idiom.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idiom: Option<String>,
    /// Scale such as `2x`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
    /// Image file inside the image set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Unmodelled keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImageEntry {
    /// Entry describing an appearance-tagged variant generated from `template`.
    pub fn for_template(template: &OutputAssetTemplate) -> Self {
        let appearances = template.appearance.map(|a| {
            let (appearance, value) = a.manifest_pair();
            vec![AppearanceTag {
                appearance: appearance.to_string(),
                value: value.to_string(),
            }]
        });

        Self {
            appearances,
            idiom: Some(UNIVERSAL_IDIOM.to_string()),
            scale: Some(format!("{}x", template.scale_or_default())),
            filename: Some(template.name.clone()),
            extra: Map::new(),
        }
    }

    /// Whether the entry names a file.
    pub fn has_filename(&self) -> bool {
        self.filename.as_deref().is_some_and(|f| !f.trim().is_empty())
    }

    /// Identity used for replace-or-insert: idiom, scale and the set of appearances.
    ///
    /// An absent appearance list and an empty one are the same key.
    pub fn merge_key(&self) -> (Option<String>, Option<String>, Vec<AppearanceTag>) {
        let mut appearances = self.appearances.clone().unwrap_or_default();
        appearances.sort();
        appearances.dedup();
        (self.idiom.clone(), self.scale.clone(), appearances)
    }
}

/// Parsed asset catalog `Contents.json`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Image records, in file order.
    #[serde(default)]
    pub images: Vec<ImageEntry>,
    /// Other top-level keys (usually `info`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// Parse manifest JSON.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Pretty JSON with a trailing newline.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Drop entries without a file name. Returns how many were dropped.
    pub fn prune_incomplete(&mut self) -> usize {
        let before = self.images.len();
        self.images.retain(ImageEntry::has_filename);
        before - self.images.len()
    }

    /// Replace the entry sharing `entry`'s merge key in place, or append it.
    ///
    /// Returns `true` when an existing entry was replaced.
    pub fn upsert(&mut self, entry: ImageEntry) -> bool {
        let key = entry.merge_key();
        match self.images.iter_mut().find(|e| e.merge_key() == key) {
            Some(existing) => {
                *existing = entry;
                true
            }
            None => {
                self.images.push(entry);
                false
            }
        }
    }
}

/// Result of [`merge_dark_variant`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Entries dropped for lacking a file name.
    pub pruned: usize,
    /// Whether an existing entry was replaced rather than appended.
    pub replaced: bool,
}

/// Register the image produced from `template` in `manifest`.
///
/// Filename-less entries are pruned first, then the new entry is upserted.
pub fn merge_dark_variant(
    manifest: &mut Manifest,
    template: &OutputAssetTemplate,
) -> MergeOutcome {
    let pruned = manifest.prune_incomplete();
    let replaced = manifest.upsert(ImageEntry::for_template(template));
    MergeOutcome { pruned, replaced }
}

#[cfg(test)]
#[path = "../../tests/unit/manifest/contents.rs"]
mod tests;
