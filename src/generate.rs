pub(crate) mod family;
pub(crate) mod ios;
pub(crate) mod splash;

use crate::{
    assets::{input::InputAsset, output::OutputAsset},
    catalog::template::{AssetKind, TemplateGroup},
    foundation::error::{AssetError, AssetResult},
    project::layout::{Platform, Project},
};

/// Per-platform generator contract.
pub trait AssetGenerator: Send + Sync {
    /// Platform this generator writes for.
    fn platform(&self) -> Platform;

    /// Produce every output this platform derives from `input`.
    fn generate(&self, input: &InputAsset, project: &Project) -> AssetResult<Vec<OutputAsset>>;
}

/// How outputs are derived from one input kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Derivation {
    /// Whole icon family plus composed splashes; `light` adds the light splash.
    LogoFamily {
        /// Also compose the light splash.
        light: bool,
    },
    /// Plain resize into every template of one group.
    Family(TemplateGroup),
    /// Direct resize into the single splash template of one group.
    SplashResize(TemplateGroup),
    /// Nothing is produced for this kind.
    Unsupported,
}

/// The one handler for `kind`.
pub fn derivation_for(kind: AssetKind) -> Derivation {
    match kind {
        AssetKind::Logo => Derivation::LogoFamily { light: true },
        AssetKind::LogoDark => Derivation::LogoFamily { light: false },
        AssetKind::Icon => Derivation::Family(TemplateGroup::IconFamily),
        AssetKind::NotificationIcon => Derivation::Family(TemplateGroup::NotificationFamily),
        AssetKind::SettingsIcon => Derivation::Family(TemplateGroup::SettingsFamily),
        AssetKind::SpotlightIcon => Derivation::Family(TemplateGroup::SpotlightFamily),
        AssetKind::Splash => Derivation::SplashResize(TemplateGroup::SplashLight),
        AssetKind::SplashDark => Derivation::SplashResize(TemplateGroup::SplashDark),
        AssetKind::IconForeground | AssetKind::IconBackground => Derivation::Unsupported,
    }
}

/// Generator execution options.
#[derive(Clone, Debug, Default)]
pub struct GeneratorOpts {
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

fn build_thread_pool(threads: Option<usize>) -> AssetResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(AssetError::validation(
            "generator 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| AssetError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/generate/dispatch.rs"]
mod tests;
