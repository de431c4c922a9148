//! Iconsmith turns a handful of master images into a native app's icon and splash assets.
//!
//! A generation run looks like this:
//!
//! - Load a [`Project`] (optionally from `iconsmith.json`)
//! - Discover and probe the source masters with [`discover_inputs`]
//! - Hand each [`InputAsset`] to a platform [`AssetGenerator`] such as [`IosAssetGenerator`]
//!
//! Every written file is reported back as an [`OutputAsset`]. Dark splash variants are also
//! registered in the image set's `Contents.json` [`Manifest`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod catalog;
mod foundation;
mod generate;
mod manifest;
mod project;
mod transform;

pub use crate::foundation::color::Rgba8;
pub use crate::foundation::error::{AssetError, AssetResult};

pub use crate::catalog::ios::{
    SPLASH_DARK_NAME, SPLASH_LIGHT_NAME, SPLASH_SIZE, templates as ios_templates,
};
pub use crate::catalog::template::{
    Appearance, AssetKind, Catalog, OutputAssetTemplate, TemplateGroup,
};

pub use crate::transform::raster::{
    Anchor, CanvasSpec, OutputFormat, Raster, SourceImage, WriteInfo,
};
pub use crate::transform::svg::rasterize_svg;

pub use crate::assets::discover::{INPUT_EXTENSIONS, discover_inputs, input_stem};
pub use crate::assets::input::InputAsset;
pub use crate::assets::output::{OutputAsset, SourceRef};

pub use crate::project::config::{
    DEFAULT_LOGO_SPLASH_SCALE, DEFAULT_SPLASH_BACKGROUND, DEFAULT_SPLASH_BACKGROUND_DARK,
    GenerateConfig, IosSection, MAX_LOGO_SPLASH_SCALE, ProjectFile,
};
pub use crate::project::layout::{
    DEFAULT_ASSETS_DIR, DEFAULT_IOS_DIR, IosLayout, PROJECT_FILE_NAME, Platform, Project,
};

pub use crate::manifest::contents::{
    AppearanceTag, ImageEntry, Manifest, MergeOutcome, UNIVERSAL_IDIOM, merge_dark_variant,
};
pub use crate::manifest::store::{
    ManifestLocks, read_manifest, register_dark_variant, write_manifest,
};

pub use crate::generate::family::generate_family;
pub use crate::generate::ios::IosAssetGenerator;
pub use crate::generate::splash::{
    compose_logo_splash, ensure_logo_width, logo_fit_size, logo_target_width, resize_splash,
};
pub use crate::generate::{AssetGenerator, Derivation, GeneratorOpts, derivation_for};
