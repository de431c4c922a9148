use std::path::PathBuf;

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::error::{AssetError, AssetResult};

// Larger sources should be exported as raster images instead.
const MAX_DIM: u32 = 16_384;

/// Rasterize SVG `bytes` at the document's intrinsic size into straight-alpha RGBA8.
pub fn rasterize_svg(bytes: &[u8], resources_dir: Option<PathBuf>) -> AssetResult<RgbaImage> {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    let opts = usvg::Options {
        resources_dir,
        fontdb: std::sync::Arc::new(fontdb),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;

    let (width, height) = svg_pixel_size(&tree)?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| AssetError::validation("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let mut rgba = pixmap.take();
    unpremultiply_rgba8_in_place(&mut rgba);
    RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| AssetError::validation("svg pixmap has an unexpected buffer size"))
}

fn svg_pixel_size(tree: &usvg::Tree) -> AssetResult<(u32, u32)> {
    fn to_px(v: f32) -> AssetResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(AssetError::validation("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let size = tree.size();
    let w = to_px(size.width())?;
    let h = to_px(size.height())?;
    if w > MAX_DIM || h > MAX_DIM {
        return Err(AssetError::validation(format!(
            "svg raster size too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }
    Ok((w, h))
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/svg.rs"]
mod tests;
