use std::path::Path;

use rayon::prelude::*;

use crate::{
    assets::{input::InputAsset, output::OutputAsset},
    catalog::template::OutputAssetTemplate,
    foundation::error::AssetResult,
    project::layout::Platform,
    transform::raster::OutputFormat,
};

/// Resize `input` into every template and write the files into `dir`.
///
/// All templates are checked before anything is written. Writes run in parallel on the
/// current rayon pool; the first failure fails the whole batch.
pub fn generate_family(
    templates: &[&OutputAssetTemplate],
    input: &InputAsset,
    dir: &Path,
    platform: Platform,
) -> AssetResult<Vec<OutputAsset>> {
    let source = input.pipeline()?;

    let jobs = templates
        .iter()
        .map(|t| -> AssetResult<_> {
            let (width, height) = t.dimensions()?;
            let format = OutputFormat::from_file_name(&t.name)?;
            Ok((*t, width, height, format))
        })
        .collect::<AssetResult<Vec<_>>>()?;

    jobs.par_iter()
        .map(|&(template, width, height, format)| -> AssetResult<OutputAsset> {
            let dest = dir.join(&template.name);
            let info = source.resize(width, height).write(&dest, format)?;
            tracing::debug!(file = %dest.display(), bytes = info.size, "wrote icon");
            Ok(OutputAsset::new(
                template.clone(),
                input,
                platform,
                template.name.clone(),
                dest,
                info,
            ))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/generate/family.rs"]
mod tests;
