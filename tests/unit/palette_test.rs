//! Unit tests for palette generation and request resolution

use dank16::contrast::{MIN_CONTRAST_LARGE, MIN_CONTRAST_TEXT};
use dank16::palette::{GrayscaleConfig, DEFAULT_DARK_BACKGROUND, DEFAULT_LIGHT_BACKGROUND};
use dank16::{
    contrast_ratio, generate_palette, Appearance, HexColor, Palette, PaletteError, PaletteInputs,
    PaletteRequest, WalColors,
};

use crate::helpers::{hex, SAMPLE_BASES};

const BACKGROUNDS: [(Appearance, &str); 4] = [
    (Appearance::Dark, "#1a1a1a"),
    (Appearance::Dark, "#000000"),
    (Appearance::Light, "#f8f8f8"),
    (Appearance::Light, "#ffffff"),
];

fn assert_floors(palette: &Palette, background: HexColor, context: &str) {
    for slot in 1..=6 {
        let ratio = contrast_ratio(palette[slot], background);
        assert!(
            ratio >= MIN_CONTRAST_TEXT,
            "{context}: slot {slot} {} has {ratio:.2}:1",
            palette[slot]
        );
    }
    for slot in 9..=14 {
        let ratio = contrast_ratio(palette[slot], background);
        assert!(
            ratio >= MIN_CONTRAST_LARGE,
            "{context}: slot {slot} {} has {ratio:.2}:1",
            palette[slot]
        );
    }
}

#[test]
fn chromatic_palettes_meet_contrast_floors() {
    for (appearance, background) in BACKGROUNDS {
        let background = hex(background);
        for base in SAMPLE_BASES {
            let request = PaletteRequest {
                background: Some(background),
                ..PaletteRequest::new(hex(base), appearance)
            };
            let palette = generate_palette(&request);
            assert_eq!(palette.background(), background);
            assert_floors(&palette, background, base);
        }
    }
}

#[test]
fn grayscale_palettes_meet_contrast_floors() {
    for (appearance, background) in BACKGROUNDS {
        let background = hex(background);
        for base in ["#000000", "#202020", "#808080", "#c0c0c0", "#ffffff"] {
            let request = PaletteRequest {
                background: Some(background),
                grayscale: true,
                ..PaletteRequest::new(hex(base), appearance)
            };
            let palette = generate_palette(&request);
            assert_floors(&palette, background, base);
            for slot in 7..=8 {
                assert!(contrast_ratio(palette[slot], background) >= MIN_CONTRAST_TEXT);
            }
            assert!(
                contrast_ratio(palette[15], background)
                    >= GrayscaleConfig::FOREGROUND_MIN_CONTRAST
            );
        }
    }
}

#[test]
fn default_backgrounds_follow_appearance() {
    let dark = generate_palette(&PaletteRequest::new(hex("#1f6feb"), Appearance::Dark));
    let light = generate_palette(&PaletteRequest::new(hex("#1f6feb"), Appearance::Light));
    assert_eq!(dark.background(), DEFAULT_DARK_BACKGROUND);
    assert_eq!(light.background(), DEFAULT_LIGHT_BACKGROUND);
    assert_eq!(dark[15], HexColor::WHITE);
    assert_eq!(light[15], hex("#1a1a1a"));
}

#[test]
fn hex_strings_are_canonical() {
    for base in SAMPLE_BASES {
        let palette = generate_palette(&PaletteRequest::new(hex(base), Appearance::Light));
        let strings = palette.to_hex_strings();
        assert_eq!(strings.len(), Palette::SIZE);
        for s in &strings {
            assert_eq!(s.len(), 7);
            assert!(s.starts_with('#'));
            assert_eq!(s, &s.to_lowercase());
        }
    }
}

#[test]
fn honored_cyan_stays_verbatim_when_readable() {
    let honor = hex("#8ab4f8");
    let request = PaletteRequest {
        honor_primary: Some(honor),
        ..PaletteRequest::new(hex("#1f6feb"), Appearance::Dark)
    };
    assert_eq!(generate_palette(&request)[6], honor);
}

#[test]
fn resolve_then_generate_from_cached_scheme() {
    let cached = WalColors {
        primary: Some(hex("#8ab4f8")),
        primary_container: Some(hex("#004a77")),
        background: Some(hex("#fdf8fd")),
    };
    let request = PaletteRequest::resolve(PaletteInputs::default(), &cached).unwrap();
    assert_eq!(request.base, hex("#004a77"));
    assert_eq!(request.appearance, Appearance::Light);
    assert!(!request.grayscale);

    let palette = generate_palette(&request);
    assert_eq!(palette.background(), hex("#fdf8fd"));
}

#[test]
fn resolve_without_any_color_fails() {
    let err = PaletteRequest::resolve(PaletteInputs::default(), &WalColors::default())
        .unwrap_err();
    assert!(matches!(err, PaletteError::MissingBaseColor));
}

#[test]
fn gray_base_with_gray_cache_selects_grayscale() {
    let cached = WalColors {
        primary: Some(hex("#9e9e9e")),
        primary_container: Some(hex("#505050")),
        background: Some(hex("#121212")),
    };
    let request = PaletteRequest::resolve(PaletteInputs::default(), &cached).unwrap();
    assert!(request.grayscale);
    assert_eq!(request.appearance, Appearance::Dark);
    assert_eq!(request.honor_primary, Some(hex("#9e9e9e")));
}
