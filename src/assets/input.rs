use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use image::RgbaImage;

use crate::{
    catalog::template::AssetKind,
    foundation::error::{AssetError, AssetResult},
    transform::raster::SourceImage,
};

/// A user-supplied source image.
///
/// Width and height are zero until the asset is probed. Probing binds a decoded
/// [`SourceImage`] that every derivation of this asset then shares.
#[derive(Clone, Debug)]
pub struct InputAsset {
    path: PathBuf,
    kind: AssetKind,
    width: u32,
    height: u32,
    pipeline: Option<Arc<SourceImage>>,
}

impl InputAsset {
    /// Unprobed input asset.
    pub fn new(path: impl Into<PathBuf>, kind: AssetKind) -> Self {
        Self {
            path: path.into(),
            kind,
            width: 0,
            height: 0,
            pipeline: None,
        }
    }

    /// Create and probe in one step.
    pub fn open(path: impl Into<PathBuf>, kind: AssetKind) -> AssetResult<Self> {
        let mut asset = Self::new(path, kind);
        asset.probe()?;
        Ok(asset)
    }

    /// Bind already-decoded pixels; `path` is only recorded for provenance.
    pub fn from_image(path: impl Into<PathBuf>, kind: AssetKind, pixels: RgbaImage) -> Self {
        let source = SourceImage::from_rgba(pixels);
        Self {
            path: path.into(),
            kind,
            width: source.width(),
            height: source.height(),
            pipeline: Some(Arc::new(source)),
        }
    }

    /// Decode the file and record its size. A second call reuses the existing handle.
    #[tracing::instrument(skip(self), fields(path = %self.path.display(), kind = %self.kind))]
    pub fn probe(&mut self) -> AssetResult<()> {
        if self.pipeline.is_some() {
            return Ok(());
        }
        let source = SourceImage::load(&self.path)?;
        self.width = source.width();
        self.height = source.height();
        self.pipeline = Some(Arc::new(source));
        tracing::debug!(width = self.width, height = self.height, "probed input asset");
        Ok(())
    }

    /// Bound transform handle.
    pub fn pipeline(&self) -> AssetResult<&Arc<SourceImage>> {
        self.pipeline.as_ref().ok_or_else(|| {
            AssetError::pipeline_not_ready(format!(
                "input asset '{}' ({}) has not been probed",
                self.path.display(),
                self.kind
            ))
        })
    }

    /// Whether a transform handle is bound.
    pub fn is_probed(&self) -> bool {
        self.pipeline.is_some()
    }

    /// Source file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Role of this input.
    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Width in pixels, zero when unprobed.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels, zero when unprobed.
    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/input.rs"]
mod tests;
