use std::path::Path;

use crate::{
    assets::{input::InputAsset, output::OutputAsset},
    catalog::template::OutputAssetTemplate,
    foundation::{
        color::Rgba8,
        error::{AssetError, AssetResult},
    },
    project::layout::Platform,
    transform::raster::{Anchor, CanvasSpec, OutputFormat, Raster},
};

/// Width the logo is scaled to on a composed splash: `floor(source_width * scale)`.
pub fn logo_target_width(source_width: u32, scale: f64) -> u32 {
    // `as` saturates, so huge or negative products clamp instead of wrapping.
    (f64::from(source_width) * scale).floor() as u32
}

/// Size of the logo on a `canvas` sized splash.
///
/// The logo is `target_width` wide at its source aspect ratio, shrunk to fit inside the
/// canvas. A zero target or source yields `(0, 0)`.
pub fn logo_fit_size(source: (u32, u32), target_width: u32, canvas: (u32, u32)) -> (u32, u32) {
    let (source_w, source_h) = source;
    let (canvas_w, canvas_h) = canvas;
    if target_width == 0 || source_w == 0 || source_h == 0 || canvas_w == 0 || canvas_h == 0 {
        return (0, 0);
    }

    let ratio = f64::from(source_h) / f64::from(source_w);
    let mut width = f64::from(target_width.min(canvas_w));
    if width * ratio > f64::from(canvas_h) {
        width = f64::from(canvas_h) / ratio;
    }
    let width = (width.floor() as u32).max(1);
    let height = ((f64::from(width) * ratio).round() as u32).clamp(1, canvas_h);
    (width, height)
}

/// Fail unless the logo's width is known.
pub fn ensure_logo_width(input: &InputAsset) -> AssetResult<()> {
    if input.width() == 0 {
        return Err(AssetError::validation(format!(
            "logo '{}' has unknown width; probe it before generating splashes",
            input.path().display()
        )));
    }
    Ok(())
}

/// Center the scaled-down logo on a solid `background` canvas of the template's size.
pub fn compose_logo_splash(
    template: &OutputAssetTemplate,
    input: &InputAsset,
    dir: &Path,
    background: Rgba8,
    logo_scale: f64,
    platform: Platform,
) -> AssetResult<OutputAsset> {
    let source = input.pipeline()?;
    ensure_logo_width(input)?;
    let (width, height) = template.dimensions()?;
    let format = OutputFormat::from_file_name(&template.name)?;

    let logo_width = logo_target_width(input.width(), logo_scale);
    let (fit_w, fit_h) = logo_fit_size(
        (source.width(), source.height()),
        logo_width,
        (width, height),
    );
    let logo = source.resize(fit_w, fit_h);

    let mut canvas = Raster::canvas(CanvasSpec {
        width,
        height,
        channels: 4,
        background,
    })?;
    canvas.composite(&logo, Anchor::Center);

    let dest = dir.join(&template.name);
    let info = canvas.write(&dest, format)?;
    tracing::debug!(
        file = %dest.display(),
        logo_width = fit_w,
        background = %background,
        "wrote composed splash"
    );
    Ok(OutputAsset::new(
        template.clone(),
        input,
        platform,
        template.name.clone(),
        dest,
        info,
    ))
}

/// Resize a splash master straight to the template's size.
pub fn resize_splash(
    template: &OutputAssetTemplate,
    input: &InputAsset,
    dir: &Path,
    platform: Platform,
) -> AssetResult<OutputAsset> {
    let source = input.pipeline()?;
    let (width, height) = template.dimensions()?;
    let format = OutputFormat::from_file_name(&template.name)?;

    let dest = dir.join(&template.name);
    let info = source.resize(width, height).write(&dest, format)?;
    tracing::debug!(file = %dest.display(), bytes = info.size, "wrote splash");
    Ok(OutputAsset::new(
        template.clone(),
        input,
        platform,
        template.name.clone(),
        dest,
        info,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/generate/splash.rs"]
mod tests;
