use super::*;
use crate::catalog::template::{Appearance, AssetKind, TemplateGroup};
use serde_json::json;

fn dark_template() -> OutputAssetTemplate {
    OutputAssetTemplate::new(
        AssetKind::SplashDark,
        TemplateGroup::SplashDark,
        2732,
        2732,
        "Default@2x~universal~anyany-dark.png",
    )
    .with_scale(2)
    .with_appearance(Appearance::Dark)
}

fn manifest(value: serde_json::Value) -> Manifest {
    serde_json::from_value(value).unwrap()
}

#[test]
fn dark_entry_shape() {
    let entry = ImageEntry::for_template(&dark_template());
    assert_eq!(
        serde_json::to_value(&entry).unwrap(),
        json!({
            "appearances": [{ "appearance": "luminosity", "value": "dark" }],
            "idiom": "universal",
            "scale": "2x",
            "filename": "Default@2x~universal~anyany-dark.png"
        })
    );
}

#[test]
fn scale_defaults_to_1x() {
    let mut t = dark_template();
    t.scale = None;
    assert_eq!(ImageEntry::for_template(&t).scale.as_deref(), Some("1x"));
}

#[test]
fn merge_drops_malformed_and_keeps_valid_entries() {
    let mut m = manifest(json!({
        "images": [
            { "idiom": "universal", "scale": "1x", "filename": "" },
            { "idiom": "universal", "scale": "2x", "filename": "Default@2x~universal~anyany.png" }
        ],
        "info": { "author": "xcode", "version": 1 }
    }));

    let outcome = merge_dark_variant(&mut m, &dark_template());
    assert_eq!(outcome, MergeOutcome { pruned: 1, replaced: false });

    assert_eq!(m.images.len(), 2);
    assert_eq!(
        m.images[0].filename.as_deref(),
        Some("Default@2x~universal~anyany.png")
    );
    assert!(m.images[0].appearances.is_none());
    assert_eq!(
        m.images[1].filename.as_deref(),
        Some("Default@2x~universal~anyany-dark.png")
    );
    assert_eq!(m.extra["info"], json!({ "author": "xcode", "version": 1 }));
}

#[test]
fn entries_without_filename_key_are_pruned() {
    let mut m = manifest(json!({
        "images": [
            { "idiom": "universal", "scale": "3x" },
            { "idiom": "universal", "scale": "1x", "filename": "   " }
        ]
    }));
    assert_eq!(m.prune_incomplete(), 2);
    assert!(m.images.is_empty());
}

#[test]
fn registering_twice_replaces_instead_of_duplicating() {
    let mut m = Manifest::default();
    merge_dark_variant(&mut m, &dark_template());
    let second = merge_dark_variant(&mut m, &dark_template());

    assert!(second.replaced);
    assert_eq!(m.images.len(), 1);
}

#[test]
fn upsert_keys_on_idiom_scale_and_appearance() {
    let mut m = manifest(json!({
        "images": [
            {
                "appearances": [{ "appearance": "luminosity", "value": "dark" }],
                "idiom": "universal",
                "scale": "2x",
                "filename": "old-dark.png"
            },
            {
                "appearances": [{ "appearance": "luminosity", "value": "dark" }],
                "idiom": "universal",
                "scale": "3x",
                "filename": "other-scale.png"
            },
            { "idiom": "universal", "scale": "2x", "filename": "light.png" }
        ]
    }));

    let replaced = m.upsert(ImageEntry::for_template(&dark_template()));
    assert!(replaced);
    let names: Vec<_> = m
        .images
        .iter()
        .map(|e| e.filename.as_deref().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "Default@2x~universal~anyany-dark.png",
            "other-scale.png",
            "light.png"
        ]
    );
}

#[test]
fn unknown_keys_survive_a_round_trip() {
    let m = manifest(json!({
        "images": [
            { "idiom": "universal", "scale": "2x", "filename": "a.png", "compression-type": "lossless" }
        ],
        "properties": { "template-rendering-intent": "original" }
    }));
    let text = m.to_json_pretty().unwrap();
    assert!(text.ends_with('\n'));

    let back = Manifest::from_json(&text).unwrap();
    assert_eq!(back, m);
    assert_eq!(back.images[0].extra["compression-type"], json!("lossless"));
}

#[test]
fn missing_images_key_is_an_empty_list() {
    let m = Manifest::from_json(r#"{ "info": { "version": 1 } }"#).unwrap();
    assert!(m.images.is_empty());
    assert!(Manifest::from_json("[]").is_err());
}

#[test]
fn untouched_entries_are_written_back_as_read() {
    let original = json!({
        "images": [
            { "filename": "a.png", "appearances": [] },
            { "idiom": "universal", "scale": "1x", "filename": "b.png" }
        ]
    });
    let mut m = manifest(original.clone());
    let outcome = merge_dark_variant(&mut m, &dark_template());
    assert_eq!(outcome.pruned, 0);

    let written: serde_json::Value = serde_json::from_str(&m.to_json_pretty().unwrap()).unwrap();
    assert_eq!(written["images"][0], original["images"][0]);
    assert_eq!(written["images"][1], original["images"][1]);
    assert_eq!(written["images"].as_array().unwrap().len(), 3);
}

#[test]
fn empty_and_absent_appearances_share_a_merge_key() {
    let absent = manifest(json!({ "images": [{ "idiom": "universal", "scale": "2x" }] }));
    let empty = manifest(json!({
        "images": [{ "idiom": "universal", "scale": "2x", "appearances": [] }]
    }));
    assert_eq!(absent.images[0].merge_key(), empty.images[0].merge_key());

    let no_idiom = manifest(json!({ "images": [{ "scale": "2x" }] }));
    assert_ne!(no_idiom.images[0].merge_key(), absent.images[0].merge_key());
}
