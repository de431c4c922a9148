use super::*;
use crate::{
    catalog::template::{AssetKind, Catalog, TemplateGroup},
    foundation::error::AssetError,
};
use image::RgbaImage;

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "iconsmith_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn icon_input() -> InputAsset {
    InputAsset::from_image(
        "icon.png",
        AssetKind::Icon,
        RgbaImage::from_pixel(64, 64, image::Rgba([20, 40, 60, 255])),
    )
}

#[test]
fn one_output_per_template_with_exact_sizes() {
    let tmp = temp_dir("family_sizes");
    let catalog = Catalog::ios().unwrap();
    let templates = catalog.group(TemplateGroup::SettingsFamily);

    let outputs = generate_family(&templates, &icon_input(), &tmp, Platform::Ios).unwrap();
    assert_eq!(outputs.len(), templates.len());

    for out in &outputs {
        let name = &out.template().name;
        let info = out.info(name).unwrap();
        assert_eq!((info.width, info.height), (out.template().width, out.template().height));
        assert_eq!(out.primary_path().unwrap(), tmp.join(name));
        assert!(tmp.join(name).is_file());
        assert_eq!(out.source().kind, AssetKind::Icon);
    }

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn malformed_template_fails_before_any_write() {
    let tmp = temp_dir("family_malformed");
    let good = OutputAssetTemplate::new(
        AssetKind::Icon,
        TemplateGroup::IconFamily,
        8,
        8,
        "good.png",
    );
    let bad = OutputAssetTemplate::new(AssetKind::Icon, TemplateGroup::IconFamily, 8, 0, "bad.png");

    let err = generate_family(&[&good, &bad], &icon_input(), &tmp, Platform::Ios).unwrap_err();
    assert!(matches!(err, AssetError::Catalog(_)));
    assert!(!tmp.join("good.png").exists());
}

#[test]
fn unknown_extension_is_a_catalog_error() {
    let tmp = temp_dir("family_ext");
    let t = OutputAssetTemplate::new(
        AssetKind::Icon,
        TemplateGroup::IconFamily,
        8,
        8,
        "icon.tiffany",
    );
    assert!(matches!(
        generate_family(&[&t], &icon_input(), &tmp, Platform::Ios),
        Err(AssetError::Catalog(_))
    ));
}

#[test]
fn unprobed_input_is_not_ready() {
    let tmp = temp_dir("family_unprobed");
    let t = OutputAssetTemplate::new(AssetKind::Icon, TemplateGroup::IconFamily, 8, 8, "icon.png");
    let input = InputAsset::new("icon.png", AssetKind::Icon);
    assert!(matches!(
        generate_family(&[&t], &input, &tmp, Platform::Ios),
        Err(AssetError::PipelineNotReady(_))
    ));
}

#[test]
fn empty_template_list_yields_nothing() {
    let tmp = temp_dir("family_empty");
    let outputs = generate_family(&[], &icon_input(), &tmp, Platform::Ios).unwrap();
    assert!(outputs.is_empty());
}
