//! Tests for the built-in bitmap font.

use image::{Rgb, RgbImage};
use palette_common::Color;
use palette_renderer::glyphs::{advance, draw_text_mut, has_glyph, text_height, text_width};
use test_utils::{assert_pixel, count_color};

const INK: Rgb<u8> = Rgb([0, 0, 0]);

fn blank(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb([255, 255, 255]))
}

// ============================================================================
// Metrics tests
// ============================================================================

#[test]
fn test_metrics_at_scale_two() {
    assert_eq!(advance(2), 12);
    assert_eq!(text_height(2), 14);
    // 7 glyphs, 6 gaps
    assert_eq!(text_width("#2C4A3E", 2), 82);
    assert_eq!(text_width("", 2), 0);
}

#[test]
fn test_scale_zero_behaves_like_one() {
    assert_eq!(advance(0), advance(1));
    assert_eq!(text_width("AB", 0), text_width("AB", 1));
}

// ============================================================================
// Drawing tests
// ============================================================================

#[test]
fn test_hash_glyph_pixels() {
    let mut img = blank(8, 8);
    draw_text_mut(&mut img, (0, 0), "#", INK, 1);

    // Top row of '#' is .X.X.
    assert_pixel!(img, 0, 0, [255, 255, 255]);
    assert_pixel!(img, 1, 0, [0, 0, 0]);
    assert_pixel!(img, 2, 0, [255, 255, 255]);
    assert_pixel!(img, 3, 0, [0, 0, 0]);
    // Third row is a full bar
    for x in 0..5 {
        assert_pixel!(img, x, 2, [0, 0, 0]);
    }
}

#[test]
fn test_scaled_glyph_pixels() {
    let mut img = blank(12, 16);
    draw_text_mut(&mut img, (0, 0), "#", INK, 2);

    assert_pixel!(img, 2, 0, [0, 0, 0]);
    assert_pixel!(img, 3, 1, [0, 0, 0]);
    assert_pixel!(img, 1, 1, [255, 255, 255]);
}

#[test]
fn test_text_stays_inside_its_box() {
    let mut img = blank(100, 30);
    draw_text_mut(&mut img, (5, 5), "#FF69B4", INK, 2);

    let inside = count_color(&img, 5..5 + text_width("#FF69B4", 2), 5..5 + text_height(2), Color::BLACK);
    let total = count_color(&img, 0..100, 0..30, Color::BLACK);
    assert!(inside > 0);
    assert_eq!(inside, total);
}

#[test]
fn test_lowercase_draws_like_uppercase() {
    let mut upper = blank(40, 10);
    let mut lower = blank(40, 10);
    draw_text_mut(&mut upper, (0, 0), "#FF69B4", INK, 1);
    draw_text_mut(&mut lower, (0, 0), "#ff69b4", INK, 1);
    assert_eq!(upper.as_raw(), lower.as_raw());
}

#[test]
fn test_unknown_characters_only_advance() {
    let mut with_gap = blank(40, 10);
    let mut spaced = blank(40, 10);
    assert!(!has_glyph('?'));

    draw_text_mut(&mut with_gap, (0, 0), "A?B", INK, 1);
    draw_text_mut(&mut spaced, (0, 0), "A B", INK, 1);
    assert_eq!(with_gap.as_raw(), spaced.as_raw());
}

#[test]
fn test_clipping_does_not_panic() {
    let mut img = blank(10, 10);
    draw_text_mut(&mut img, (-20, -20), "#000000", INK, 2);
    draw_text_mut(&mut img, (8, 8), "#000000", INK, 2);
    draw_text_mut(&mut img, (50, 50), "#000000", INK, 2);
    assert_eq!(img.dimensions(), (10, 10));
}
