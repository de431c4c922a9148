use super::*;

fn icon(name: &str, w: u32, h: u32) -> OutputAssetTemplate {
    OutputAssetTemplate::new(AssetKind::Icon, TemplateGroup::IconFamily, w, h, name)
}

#[test]
fn ios_catalog_groups_are_complete() {
    let catalog = Catalog::ios().unwrap();
    assert_eq!(catalog.group(TemplateGroup::NotificationFamily).len(), 4);
    assert_eq!(catalog.group(TemplateGroup::SettingsFamily).len(), 4);
    assert_eq!(catalog.group(TemplateGroup::SpotlightFamily).len(), 4);
    assert_eq!(catalog.group(TemplateGroup::IconFamily).len(), 6);
    assert_eq!(catalog.group(TemplateGroup::SplashLight).len(), 1);
    assert_eq!(catalog.group(TemplateGroup::SplashDark).len(), 1);
    assert_eq!(catalog.len(), 20);
    assert_eq!(catalog.groups(&TemplateGroup::ICONS).len(), 18);
}

#[test]
fn ios_catalog_sizes_follow_points_times_scale() {
    let catalog = Catalog::ios().unwrap();
    let by_name = |name: &str| {
        catalog
            .templates()
            .iter()
            .find(|t| t.name == name)
            .unwrap_or_else(|| panic!("missing template {name}"))
    };

    assert_eq!(by_name("AppIcon-20x20@3x.png").width, 60);
    assert_eq!(by_name("AppIcon-29x29@2x.png").width, 58);
    assert_eq!(by_name("AppIcon-83.5x83.5@2x.png").width, 167);
    assert_eq!(by_name("AppIcon-512@2x.png").height, 1024);

    let dark = by_name(crate::catalog::ios::SPLASH_DARK_NAME);
    assert_eq!(dark.appearance, Some(Appearance::Dark));
    assert_eq!(dark.scale_or_default(), 2);
    assert_eq!((dark.width, dark.height), (2732, 2732));
}

#[test]
fn group_membership_matches_template_kind() {
    let catalog = Catalog::ios().unwrap();
    for t in catalog.group(TemplateGroup::SettingsFamily) {
        assert_eq!(t.kind, AssetKind::SettingsIcon);
    }
    for t in catalog.group(TemplateGroup::SplashLight) {
        assert_eq!(t.kind, AssetKind::Splash);
        assert_eq!(t.appearance, None);
    }
}

#[test]
fn group_preserves_registration_order() {
    let catalog = Catalog::new(vec![icon("b.png", 2, 2), icon("a.png", 1, 1)]).unwrap();
    let names: Vec<_> = catalog
        .group(TemplateGroup::IconFamily)
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, ["b.png", "a.png"]);
    assert!(catalog.group(TemplateGroup::SplashDark).is_empty());
}

#[test]
fn rejects_missing_dimensions() {
    let err = Catalog::new(vec![icon("zero.png", 0, 10)]).unwrap_err();
    assert!(matches!(err, AssetError::Catalog(_)));
    assert!(err.to_string().contains("zero.png"));

    assert!(icon("h.png", 10, 0).dimensions().is_err());
    assert_eq!(icon("ok.png", 10, 12).dimensions().unwrap(), (10, 12));
}

#[test]
fn rejects_empty_and_duplicate_names() {
    assert!(matches!(
        Catalog::new(vec![icon(" ", 1, 1)]),
        Err(AssetError::Catalog(_))
    ));
    let err = Catalog::new(vec![icon("x.png", 1, 1), icon("x.png", 2, 2)]).unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn kind_names_round_trip_through_serde() {
    for kind in AssetKind::ALL {
        let json = serde_json::to_value(kind).unwrap();
        assert_eq!(json, serde_json::Value::String(kind.as_str().to_string()));
        let back: AssetKind = serde_json::from_value(json).unwrap();
        assert_eq!(back, kind);
    }
    assert!(AssetKind::SplashDark.is_dark());
    assert!(!AssetKind::Splash.is_dark());
}
