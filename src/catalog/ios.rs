use crate::catalog::template::{Appearance, AssetKind, OutputAssetTemplate, TemplateGroup};

/// Edge of the universal "any/any" launch image.
pub const SPLASH_SIZE: u32 = 2732;

/// Light launch image file name.
pub const SPLASH_LIGHT_NAME: &str = "Default@2x~universal~anyany.png";
/// Dark launch image file name.
pub const SPLASH_DARK_NAME: &str = "Default@2x~universal~anyany-dark.png";

/// `(label, points, scale, file-name suffix)` rows of one square icon family.
type IconRow = (&'static str, f32, u32, &'static str);

const NOTIFICATION: &[IconRow] = &[
    ("20x20", 20.0, 1, "@1x"),
    ("20x20", 20.0, 2, "@2x"),
    ("20x20", 20.0, 2, "@2x-1"),
    ("20x20", 20.0, 3, "@3x"),
];

const SETTINGS: &[IconRow] = &[
    ("29x29", 29.0, 1, "@1x"),
    ("29x29", 29.0, 2, "@2x"),
    ("29x29", 29.0, 2, "@2x-1"),
    ("29x29", 29.0, 3, "@3x"),
];

const SPOTLIGHT: &[IconRow] = &[
    ("40x40", 40.0, 1, "@1x"),
    ("40x40", 40.0, 2, "@2x"),
    ("40x40", 40.0, 2, "@2x-1"),
    ("40x40", 40.0, 3, "@3x"),
];

const APP: &[IconRow] = &[
    ("60x60", 60.0, 2, "@2x"),
    ("60x60", 60.0, 3, "@3x"),
    ("76x76", 76.0, 1, "@1x"),
    ("76x76", 76.0, 2, "@2x"),
    ("83.5x83.5", 83.5, 2, "@2x"),
    ("512", 512.0, 2, "@2x"),
];

fn family(kind: AssetKind, group: TemplateGroup, rows: &[IconRow]) -> Vec<OutputAssetTemplate> {
    rows.iter()
        .map(|&(label, points, scale, suffix)| {
            let px = (points * scale as f32).round() as u32;
            OutputAssetTemplate::new(kind, group, px, px, format!("AppIcon-{label}{suffix}.png"))
                .with_scale(scale)
        })
        .collect()
}

/// Registration table for the iOS asset catalog, in a fixed order.
pub fn templates() -> Vec<OutputAssetTemplate> {
    let mut out = Vec::new();
    out.extend(family(
        AssetKind::NotificationIcon,
        TemplateGroup::NotificationFamily,
        NOTIFICATION,
    ));
    out.extend(family(
        AssetKind::SettingsIcon,
        TemplateGroup::SettingsFamily,
        SETTINGS,
    ));
    out.extend(family(
        AssetKind::SpotlightIcon,
        TemplateGroup::SpotlightFamily,
        SPOTLIGHT,
    ));
    out.extend(family(AssetKind::Icon, TemplateGroup::IconFamily, APP));
    out.push(
        OutputAssetTemplate::new(
            AssetKind::Splash,
            TemplateGroup::SplashLight,
            SPLASH_SIZE,
            SPLASH_SIZE,
            SPLASH_LIGHT_NAME,
        )
        .with_scale(2),
    );
    out.push(
        OutputAssetTemplate::new(
            AssetKind::SplashDark,
            TemplateGroup::SplashDark,
            SPLASH_SIZE,
            SPLASH_SIZE,
            SPLASH_DARK_NAME,
        )
        .with_scale(2)
        .with_appearance(Appearance::Dark),
    );
    out
}
