use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    assert_eq!(Rgba8::parse_hex("#ff0000").unwrap(), Rgba8::rgb(255, 0, 0));
    assert_eq!(Rgba8::parse_hex("111111").unwrap(), Rgba8::rgb(0x11, 0x11, 0x11));

    let c = Rgba8::parse_hex("#0000FF80").unwrap();
    assert_eq!(c.b, 255);
    assert_eq!(c.a, 128);
}

#[test]
fn rejects_bad_lengths_and_digits() {
    assert!(matches!(
        Rgba8::parse_hex("#fff"),
        Err(AssetError::Validation(_))
    ));
    assert!(Rgba8::parse_hex("#gg0000").is_err());
    assert!(Rgba8::parse_hex("#ééé").is_err());
}

#[test]
fn hex_form_omits_opaque_alpha() {
    assert_eq!(Rgba8::rgb(0x11, 0x22, 0x33).to_hex(), "#112233");
    let translucent = Rgba8 {
        r: 0xff,
        g: 0xff,
        b: 0xff,
        a: 0x80,
    };
    assert_eq!(translucent.to_string(), "#ffffff80");
}

#[test]
fn serde_uses_hex_strings() {
    let c: Rgba8 = serde_json::from_value(json!("#AbCdEf")).unwrap();
    assert_eq!(c, Rgba8::rgb(0xab, 0xcd, 0xef));
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#abcdef"));

    let err = serde_json::from_value::<Rgba8>(json!("red")).unwrap_err();
    assert!(err.to_string().contains("#RRGGBB"));
}
