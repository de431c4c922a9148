use std::path::Path;

use crate::{
    assets::{input::InputAsset, output::OutputAsset},
    catalog::template::{Catalog, OutputAssetTemplate, TemplateGroup},
    foundation::error::{AssetError, AssetResult},
    generate::{
        AssetGenerator, Derivation, GeneratorOpts, build_thread_pool, derivation_for, family,
        splash,
    },
    manifest::store::register_dark_variant,
    project::layout::{IosLayout, Platform, Project},
};

/// Generator for the iOS asset catalog.
pub struct IosAssetGenerator {
    catalog: Catalog,
    pool: rayon::ThreadPool,
}

impl std::fmt::Debug for IosAssetGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IosAssetGenerator")
            .field("templates", &self.catalog.len())
            .field("threads", &self.pool.current_num_threads())
            .finish()
    }
}

impl IosAssetGenerator {
    /// Generator over `catalog`, running fan-out on its own thread pool.
    pub fn new(catalog: Catalog, opts: GeneratorOpts) -> AssetResult<Self> {
        Ok(Self {
            catalog,
            pool: build_thread_pool(opts.threads)?,
        })
    }

    /// Generator over the built-in iOS catalog with default options.
    pub fn with_defaults() -> AssetResult<Self> {
        Self::new(Catalog::ios()?, GeneratorOpts::default())
    }

    /// Catalog this generator draws templates from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn single_template(&self, group: TemplateGroup) -> AssetResult<&OutputAssetTemplate> {
        self.catalog
            .group(group)
            .into_iter()
            .next()
            .ok_or_else(|| AssetError::catalog(format!("no template registered for {group:?}")))
    }

    fn generate_group(
        &self,
        group: TemplateGroup,
        input: &InputAsset,
        layout: &IosLayout,
    ) -> AssetResult<Vec<OutputAsset>> {
        let templates = self.catalog.group(group);
        let dir = layout.icon_set_dir();
        self.pool
            .install(|| family::generate_family(&templates, input, &dir, Platform::Ios))
    }

    fn generate_splash(
        &self,
        group: TemplateGroup,
        input: &InputAsset,
        project: &Project,
        layout: &IosLayout,
    ) -> AssetResult<Vec<OutputAsset>> {
        let template = self.single_template(group)?;
        let out = splash::resize_splash(template, input, &layout.image_set_dir(), Platform::Ios)?;
        if template.appearance.is_some() {
            register_dark_variant(&out, project)?;
        }
        Ok(vec![out])
    }

    fn generate_from_logo(
        &self,
        light: bool,
        input: &InputAsset,
        project: &Project,
        layout: &IosLayout,
    ) -> AssetResult<Vec<OutputAsset>> {
        splash::ensure_logo_width(input)?;

        let icon_templates = self.catalog.groups(&TemplateGroup::ICONS);
        let dark_template = self.single_template(TemplateGroup::SplashDark)?;
        let light_template = if light {
            Some(self.single_template(TemplateGroup::SplashLight)?)
        } else {
            None
        };
        let icon_dir = layout.icon_set_dir();
        let image_dir = layout.image_set_dir();

        let (icons, splashes) = self.pool.install(|| {
            rayon::join(
                || family::generate_family(&icon_templates, input, &icon_dir, Platform::Ios),
                || logo_splashes(light_template, dark_template, input, project, &image_dir),
            )
        });

        let mut out = icons?;
        out.extend(splashes?);
        Ok(out)
    }
}

fn logo_splashes(
    light_template: Option<&OutputAssetTemplate>,
    dark_template: &OutputAssetTemplate,
    input: &InputAsset,
    project: &Project,
    image_dir: &Path,
) -> AssetResult<Vec<OutputAsset>> {
    let config = project.config();

    let dark = || -> AssetResult<OutputAsset> {
        let out = splash::compose_logo_splash(
            dark_template,
            input,
            image_dir,
            config.dark_background(),
            config.logo_splash_scale,
            Platform::Ios,
        )?;
        register_dark_variant(&out, project)?;
        Ok(out)
    };

    match light_template {
        Some(template) => {
            let (light, dark) = rayon::join(
                || {
                    splash::compose_logo_splash(
                        template,
                        input,
                        image_dir,
                        config.light_background(),
                        config.logo_splash_scale,
                        Platform::Ios,
                    )
                },
                dark,
            );
            Ok(vec![light?, dark?])
        }
        None => Ok(vec![dark()?]),
    }
}

impl AssetGenerator for IosAssetGenerator {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    #[tracing::instrument(
        skip_all,
        fields(path = %input.path().display(), kind = %input.kind())
    )]
    fn generate(&self, input: &InputAsset, project: &Project) -> AssetResult<Vec<OutputAsset>> {
        let layout = project.ios_layout()?;

        let derivation = derivation_for(input.kind());
        if derivation == Derivation::Unsupported {
            tracing::debug!("no ios outputs for this kind");
            return Ok(Vec::new());
        }
        input.pipeline()?;

        let outputs = match derivation {
            Derivation::LogoFamily { light } => {
                self.generate_from_logo(light, input, project, layout)?
            }
            Derivation::Family(group) => self.generate_group(group, input, layout)?,
            Derivation::SplashResize(group) => {
                self.generate_splash(group, input, project, layout)?
            }
            Derivation::Unsupported => Vec::new(),
        };

        tracing::info!(count = outputs.len(), "generated ios assets");
        Ok(outputs)
    }
}
