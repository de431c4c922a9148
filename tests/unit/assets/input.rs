use super::*;

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

#[test]
fn unprobed_asset_has_no_pipeline() {
    let asset = InputAsset::new("logo.png", AssetKind::Logo);
    assert!(!asset.is_probed());
    assert_eq!((asset.width(), asset.height()), (0, 0));
    let err = asset.pipeline().unwrap_err();
    assert!(matches!(err, AssetError::PipelineNotReady(_)));
    assert!(err.to_string().contains("logo.png"));
}

#[test]
fn probe_binds_handle_once() {
    let tmp = temp_dir("input_probe");
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("icon.png");
    RgbaImage::from_pixel(12, 7, image::Rgba([0, 0, 0, 255]))
        .save(&path)
        .unwrap();

    let mut asset = InputAsset::new(&path, AssetKind::Icon);
    asset.probe().unwrap();
    assert_eq!((asset.width(), asset.height()), (12, 7));
    let first = Arc::clone(asset.pipeline().unwrap());

    // Deleting the file proves the second probe does not decode again.
    std::fs::remove_file(&path).unwrap();
    asset.probe().unwrap();
    assert!(Arc::ptr_eq(&first, asset.pipeline().unwrap()));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn open_fails_for_missing_file() {
    assert!(InputAsset::open("/definitely/not/here.png", AssetKind::Splash).is_err());
}

#[test]
fn from_image_records_dimensions() {
    let asset = InputAsset::from_image(
        "mem.png",
        AssetKind::SplashDark,
        RgbaImage::new(30, 40),
    );
    assert!(asset.is_probed());
    assert_eq!((asset.width(), asset.height()), (30, 40));
    assert_eq!(asset.kind(), AssetKind::SplashDark);
    assert_eq!(asset.path(), Path::new("mem.png"));
}
