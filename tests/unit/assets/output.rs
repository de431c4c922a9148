use super::*;
use crate::{catalog::template::TemplateGroup, transform::raster::OutputFormat};

fn sample() -> OutputAsset {
    let template =
        OutputAssetTemplate::new(AssetKind::Icon, TemplateGroup::IconFamily, 120, 120, "a.png")
            .with_scale(2);
    let input = InputAsset::new("icon-only.png", AssetKind::Icon);
    OutputAsset::new(
        template,
        &input,
        Platform::Ios,
        "a.png",
        PathBuf::from("/out/a.png"),
        WriteInfo {
            size: 42,
            width: 120,
            height: 120,
            format: OutputFormat::Png,
        },
    )
}

#[test]
fn every_destination_has_metadata() {
    let out = sample();
    for (name, path) in out.destinations() {
        assert!(out.info(name).is_some(), "{name}");
        assert_eq!(path, Path::new("/out/a.png"));
    }
    assert_eq!(out.primary_path(), Some(Path::new("/out/a.png")));
    assert_eq!(out.info("a.png").unwrap().size, 42);
    assert!(out.destination("b.png").is_none());
}

#[test]
fn report_serializes_provenance() {
    let v = serde_json::to_value(sample()).unwrap();
    assert_eq!(v["source"]["kind"], "icon");
    assert_eq!(v["platform"], "ios");
    assert_eq!(v["template"]["scale"], 2);
    assert_eq!(v["info"]["a.png"]["size"], 42);
}
