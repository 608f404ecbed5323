//! Unit tests for color parsing and conversions

use dank16::color::{hsv_to_rgb, rgb_to_hsv, Hsv, Rgb};
use dank16::{normalize_hex, wrap_hue, ColorError, HexColor};

use crate::helpers::hex;

#[test]
fn normalize_hex_canonicalizes_spelling() {
    assert_eq!(normalize_hex("#ABCDEF").unwrap(), "#abcdef");
    assert_eq!(normalize_hex("abcdef").unwrap(), "#abcdef");
    assert_eq!(normalize_hex("  #1F6FEB\n").unwrap(), "#1f6feb");
}

#[test]
fn normalize_hex_rejects_bad_input() {
    assert_eq!(normalize_hex(""), Err(ColorError::Empty));
    assert!(matches!(
        normalize_hex("#fff"),
        Err(ColorError::InvalidLength { .. })
    ));
    assert!(matches!(
        normalize_hex("#1234567"),
        Err(ColorError::InvalidLength { .. })
    ));
    assert!(matches!(
        normalize_hex("#gggggg"),
        Err(ColorError::InvalidDigits { .. })
    ));
}

#[test]
fn from_str_matches_parse() {
    let parsed: HexColor = "#5677fc".parse().unwrap();
    assert_eq!(parsed, HexColor::new(0x56, 0x77, 0xfc));
    assert_eq!(parsed.to_string(), "#5677fc");
}

#[test]
fn primaries_convert_to_expected_hues() {
    let cases = [
        ("#ff0000", 0.0),
        ("#00ff00", 1.0 / 3.0),
        ("#0000ff", 2.0 / 3.0),
    ];
    for (input, expected) in cases {
        let hsv = hex(input).to_hsv();
        assert!((hsv.h - expected).abs() < 1e-12, "{input}: {}", hsv.h);
        assert_eq!(hsv.s, 1.0);
        assert_eq!(hsv.v, 1.0);
    }
}

#[test]
fn hsv_round_trip_preserves_bytes() {
    for input in ["#1f6feb", "#e06c75", "#98c379", "#000000", "#ffffff", "#7f7f7f"] {
        let color = hex(input);
        assert_eq!(HexColor::from_hsv(color.to_hsv()), color, "{input}");
    }
}

#[test]
fn hsv_conversion_functions_agree() {
    let rgb = Rgb::new(0.2, 0.4, 0.6);
    let back = hsv_to_rgb(rgb_to_hsv(rgb));
    assert!((back.r - rgb.r).abs() < 1e-12);
    assert!((back.g - rgb.g).abs() < 1e-12);
    assert!((back.b - rgb.b).abs() < 1e-12);
}

#[test]
fn out_of_range_channels_are_clamped() {
    let color = HexColor::from_rgb(Rgb::new(-0.5, 0.5, 1.5));
    assert_eq!(color.r, 0);
    assert_eq!(color.b, 255);
    assert_eq!(HexColor::from_hsv(Hsv::new(0.0, 0.0, 2.0)), HexColor::WHITE);
}

#[test]
fn grayscale_detection_uses_tolerance() {
    assert!(hex("#808080").is_grayscale());
    assert!(hex("#808181").is_grayscale());
    assert!(!hex("#808585").is_grayscale());
    assert!(hex("#808585").is_grayscale_within(0.05));
}

#[test]
fn to_grayscale_yields_gray() {
    for input in ["#1f6feb", "#ff0000", "#00ff00"] {
        let gray = hex(input).to_grayscale();
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
    }
    assert_eq!(HexColor::WHITE.to_grayscale(), HexColor::WHITE);
}

#[test]
fn blend_endpoints() {
    let a = hex("#1f6feb");
    let b = hex("#e06c75");
    assert_eq!(a.blend(b, 1.0), a);
    assert_eq!(a.blend(b, 0.0), b);
    assert_eq!(
        HexColor::BLACK.blend(HexColor::WHITE, 0.5),
        HexColor::new(128, 128, 128)
    );
}

#[test]
fn wrap_hue_steps_back_into_range() {
    assert!((wrap_hue(-0.03) - 0.97).abs() < 1e-12);
    assert!((wrap_hue(1.08) - 0.08).abs() < 1e-12);
    assert_eq!(wrap_hue(0.5), 0.5);
    assert_eq!(wrap_hue(1.0), 1.0);
}
