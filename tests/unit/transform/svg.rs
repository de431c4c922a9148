use super::*;

#[test]
fn rasterizes_at_intrinsic_size() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="12" height="8">
        <rect width="12" height="8" fill="#ff0000"/>
    </svg>"##;
    let img = rasterize_svg(svg, None).unwrap();
    assert_eq!(img.dimensions(), (12, 8));
    assert_eq!(img.get_pixel(6, 4).0, [255, 0, 0, 255]);
}

#[test]
fn unpremultiplies_translucent_pixels() {
    let mut px = [64u8, 0, 32, 128];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [128, 0, 64, 128]);

    let mut clear = [0u8, 0, 0, 0];
    unpremultiply_rgba8_in_place(&mut clear);
    assert_eq!(clear, [0, 0, 0, 0]);
}

#[test]
fn rejects_malformed_svg() {
    assert!(rasterize_svg(br#"<svg"#, None).is_err());
}
