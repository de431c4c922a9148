use std::{io::Cursor, path::Path, sync::Arc};

use anyhow::Context;
use image::{DynamicImage, ImageFormat, RgbaImage, imageops::FilterType};
use serde::{Deserialize, Serialize};

use crate::foundation::{
    color::Rgba8,
    error::{AssetError, AssetResult},
};

const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Decoded source image shared read-only by every derivation of one input asset.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pixels: Arc<RgbaImage>,
}

impl SourceImage {
    /// Decode the image at `path`. `.svg` files are rasterized at their intrinsic size.
    pub fn load(path: &Path) -> AssetResult<Self> {
        let is_svg = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

        let bytes =
            std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;

        if is_svg {
            let resources_dir = path.parent().map(Path::to_path_buf);
            return Ok(Self::from_rgba(crate::transform::svg::rasterize_svg(
                &bytes,
                resources_dir,
            )?));
        }

        let decoded = image::load_from_memory(&bytes)
            .with_context(|| format!("decode image '{}'", path.display()))?;
        Ok(Self::from_rgba(decoded.to_rgba8()))
    }

    /// Wrap already-decoded pixels.
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Resize to exactly `width` x `height`.
    pub fn resize(&self, width: u32, height: u32) -> Raster {
        if width == 0 || height == 0 || self.pixels.width() == 0 || self.pixels.height() == 0 {
            return Raster::empty();
        }
        Raster {
            pixels: image::imageops::resize(&*self.pixels, width, height, RESIZE_FILTER),
        }
    }

    /// Resize to `width`, scaling the height to keep the aspect ratio.
    pub fn resize_to_width(&self, width: u32) -> Raster {
        if width == 0 || self.pixels.width() == 0 {
            return Raster::empty();
        }
        let ratio = f64::from(self.pixels.height()) / f64::from(self.pixels.width());
        let height = ((f64::from(width) * ratio).round() as u32).max(1);
        self.resize(width, height)
    }
}

/// Where an overlay is placed on a canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    /// Centered on both axes.
    #[default]
    Center,
    /// Top-left corners aligned.
    TopLeft,
}

/// Blank canvas description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSpec {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// 3 (RGB, always opaque) or 4 (RGBA).
    pub channels: u8,
    /// Fill color.
    pub background: Rgba8,
}

/// Encoded file format of an output, picked from the output file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PNG.
    Png,
    /// Baseline JPEG (alpha is dropped).
    Jpeg,
    /// Lossless WebP.
    Webp,
}

impl OutputFormat {
    /// Format for `name` based on its extension.
    pub fn from_file_name(name: &str) -> AssetResult<Self> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("jpg" | "jpeg") => Ok(Self::Jpeg),
            Some("webp") => Ok(Self::Webp),
            _ => Err(AssetError::catalog(format!(
                "cannot infer an image format from output name '{name}'"
            ))),
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Webp => ImageFormat::WebP,
        }
    }
}

/// Metadata about a written file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteInfo {
    /// Encoded size in bytes.
    pub size: u64,
    /// Encoded width in pixels.
    pub width: u32,
    /// Encoded height in pixels.
    pub height: u32,
    /// Encoded format.
    pub format: OutputFormat,
}

/// Owned intermediate image produced by a transform step.
#[derive(Clone, Debug)]
pub struct Raster {
    pixels: RgbaImage,
}

impl Raster {
    fn empty() -> Self {
        Self {
            pixels: RgbaImage::new(0, 0),
        }
    }

    /// Solid canvas filled with `spec.background`.
    pub fn canvas(spec: CanvasSpec) -> AssetResult<Self> {
        let fill = match spec.channels {
            4 => spec.background.to_array(),
            3 => [spec.background.r, spec.background.g, spec.background.b, 255],
            n => {
                return Err(AssetError::validation(format!(
                    "canvas must have 3 or 4 channels, got {n}"
                )));
            }
        };
        if spec.width == 0 || spec.height == 0 {
            return Err(AssetError::validation(format!(
                "canvas size must be non-zero, got {}x{}",
                spec.width, spec.height
            )));
        }
        Ok(Self {
            pixels: RgbaImage::from_pixel(spec.width, spec.height, image::Rgba(fill)),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Pixel at `(x, y)` as `[r, g, b, a]`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.width() && y < self.height()).then(|| self.pixels.get_pixel(x, y).0)
    }

    /// Alpha-blend `overlay` on top of this raster. Parts falling outside are clipped.
    pub fn composite(&mut self, overlay: &Raster, anchor: Anchor) {
        if overlay.width() == 0 || overlay.height() == 0 {
            return;
        }
        let (x, y) = match anchor {
            Anchor::Center => (
                (i64::from(self.width()) - i64::from(overlay.width())) / 2,
                (i64::from(self.height()) - i64::from(overlay.height())) / 2,
            ),
            Anchor::TopLeft => (0, 0),
        };
        image::imageops::overlay(&mut self.pixels, &overlay.pixels, x, y);
    }

    /// Encode as `format` and write to `path`, creating parent directories.
    pub fn write(&self, path: &Path, format: OutputFormat) -> AssetResult<WriteInfo> {
        if self.width() == 0 || self.height() == 0 {
            return Err(AssetError::validation(format!(
                "refusing to write empty image to '{}'",
                path.display()
            )));
        }

        let image = match format {
            OutputFormat::Jpeg => DynamicImage::ImageRgb8(
                DynamicImage::ImageRgba8(self.pixels.clone()).to_rgb8(),
            ),
            OutputFormat::Png | OutputFormat::Webp => DynamicImage::ImageRgba8(self.pixels.clone()),
        };

        let mut buf = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buf), format.image_format())
            .with_context(|| format!("encode {format:?} for '{}'", path.display()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(path, &buf).with_context(|| format!("write '{}'", path.display()))?;

        Ok(WriteInfo {
            size: buf.len() as u64,
            width: image.width(),
            height: image.height(),
            format,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/raster.rs"]
mod tests;
