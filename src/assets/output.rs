use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{
    assets::input::InputAsset,
    catalog::template::{AssetKind, OutputAssetTemplate},
    project::layout::Platform,
    transform::raster::WriteInfo,
};

/// Provenance of an output: the input asset it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SourceRef {
    /// Source file path.
    pub path: PathBuf,
    /// Source role.
    pub kind: AssetKind,
    /// Source width in pixels.
    pub width: u32,
    /// Source height in pixels.
    pub height: u32,
}

impl From<&InputAsset> for SourceRef {
    fn from(input: &InputAsset) -> Self {
        Self {
            path: input.path().to_path_buf(),
            kind: input.kind(),
            width: input.width(),
            height: input.height(),
        }
    }
}

/// One generated file plus where it came from and where it went.
#[derive(Clone, Debug, Serialize)]
pub struct OutputAsset {
    template: OutputAssetTemplate,
    source: SourceRef,
    platform: Platform,
    destinations: BTreeMap<String, PathBuf>,
    info: BTreeMap<String, WriteInfo>,
}

impl OutputAsset {
    /// Record a written file. `name` keys both the destination and its write metadata.
    pub fn new(
        template: OutputAssetTemplate,
        source: &InputAsset,
        platform: Platform,
        name: impl Into<String>,
        destination: PathBuf,
        info: WriteInfo,
    ) -> Self {
        let name = name.into();
        Self {
            template,
            source: SourceRef::from(source),
            platform,
            destinations: BTreeMap::from([(name.clone(), destination)]),
            info: BTreeMap::from([(name, info)]),
        }
    }

    /// Template the file was generated from.
    pub fn template(&self) -> &OutputAssetTemplate {
        &self.template
    }

    /// Input asset the file was derived from.
    pub fn source(&self) -> &SourceRef {
        &self.source
    }

    /// Owning platform.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Destination recorded under `name`.
    pub fn destination(&self, name: &str) -> Option<&Path> {
        self.destinations.get(name).map(PathBuf::as_path)
    }

    /// Write metadata recorded under `name`.
    pub fn info(&self, name: &str) -> Option<&WriteInfo> {
        self.info.get(name)
    }

    /// All `(name, destination)` pairs.
    pub fn destinations(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.destinations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_path()))
    }

    /// Destination of the template's own file name.
    pub fn primary_path(&self) -> Option<&Path> {
        self.destination(&self.template.name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/output.rs"]
mod tests;
