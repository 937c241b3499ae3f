//! Tests for batch render-and-save.

use palette_common::{Palette, PaletteError, PaletteTable};
use palette_renderer::batch::{render_all_and_save_with, save_palette};
use palette_renderer::layout::CanvasSize;
use palette_renderer::{render_all_and_save, render_palette, BatchConfig};
use test_utils::{fixtures, png_files_in, temp_test_dir, temp_test_dir_with_prefix};

// ============================================================================
// Output layout tests
// ============================================================================

#[test]
fn test_writes_one_file_per_builtin_palette() {
    let dir = temp_test_dir();
    let table = PaletteTable::builtin().unwrap();
    let config = BatchConfig::new(dir.path());

    let written = render_all_and_save(&table, &config).unwrap();

    assert_eq!(written.len(), table.len());
    for (path, palette) in written.iter().zip(table.iter()) {
        assert_eq!(path, &dir.path().join(format!("{}.png", palette.name())));
        assert!(path.is_file());
    }
    assert_eq!(png_files_in(dir.path()).len(), 10);
}

#[test]
fn test_creates_missing_output_dir() {
    let dir = temp_test_dir();
    let nested = dir.path().join("color_palettes").join("v1");
    let config = BatchConfig::new(&nested);

    let palette = fixtures::minimalist();
    render_all_and_save(vec![&palette], &config).unwrap();

    assert!(nested.join("minimalist.png").is_file());
}

#[test]
fn test_existing_output_dir_is_fine() {
    let dir = temp_test_dir();
    let config = BatchConfig::new(dir.path());
    let palette = fixtures::minimalist();

    render_all_and_save(vec![&palette], &config).unwrap();
    render_all_and_save(vec![&palette], &config).unwrap();

    assert_eq!(png_files_in(dir.path()).len(), 1);
}

#[test]
fn test_reports_each_write_in_order() {
    let dir = temp_test_dir();
    let table = PaletteTable::builtin().unwrap();
    let config = BatchConfig::new(dir.path());

    let mut reported = Vec::new();
    render_all_and_save_with(&table, &config, |palette, path| {
        assert!(path.is_file());
        reported.push(format!("Generated {}", palette.file_name()));
    })
    .unwrap();

    assert_eq!(reported.len(), 10);
    assert_eq!(reported[0], "Generated nature_embrace.png");
    assert_eq!(reported[9], "Generated warm_sunset.png");
}

// ============================================================================
// Content tests
// ============================================================================

#[test]
fn test_saved_file_matches_render() {
    let dir = temp_test_dir();
    let config = BatchConfig::new(dir.path());
    let palette = fixtures::digital_glamour();

    let path = save_palette(&palette, &config).unwrap();
    let reloaded = image::open(&path).unwrap().to_rgb8();
    let rendered = render_palette(&palette, config.size).unwrap();

    assert_eq!(reloaded.dimensions(), (800, 200));
    assert_eq!(reloaded.as_raw(), rendered.as_raw());
}

#[test]
fn test_custom_size_applies_to_every_file() {
    let dir = temp_test_dir();
    let config = BatchConfig::new(dir.path()).with_size(CanvasSize::new(400, 100));
    let table = PaletteTable::builtin().unwrap();

    for path in render_all_and_save(&table, &config).unwrap() {
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (400, 100));
    }
}

#[test]
fn test_two_runs_are_byte_identical() {
    let first = temp_test_dir_with_prefix("swatch_run_a_");
    let second = temp_test_dir_with_prefix("swatch_run_b_");
    let table = PaletteTable::builtin().unwrap();

    render_all_and_save(&table, &BatchConfig::new(first.path())).unwrap();
    render_all_and_save(&table, &BatchConfig::new(second.path())).unwrap();

    for palette in &table {
        let a = std::fs::read(first.path().join(palette.file_name())).unwrap();
        let b = std::fs::read(second.path().join(palette.file_name())).unwrap();
        assert_eq!(a, b, "{} differs between runs", palette.name());
    }
}

// ============================================================================
// Failure tests
// ============================================================================

#[test]
fn test_first_failure_stops_batch() {
    let dir = temp_test_dir();
    let config = BatchConfig::new(dir.path());

    let before = fixtures::minimalist();
    let broken = Palette::new("broken", Vec::new());
    let after = fixtures::digital_glamour();

    let mut reported = Vec::new();
    let err = render_all_and_save_with(vec![&before, &broken, &after], &config, |p, _| {
        reported.push(p.name().to_string())
    })
    .unwrap_err();

    assert!(matches!(err, PaletteError::EmptyPalette(ref n) if n == "broken"));
    assert_eq!(reported, vec!["minimalist"]);
    assert!(dir.path().join("minimalist.png").is_file());
    assert!(!dir.path().join("broken.png").exists());
    assert!(!dir.path().join("digital_glamour.png").exists());
}

#[test]
fn test_output_dir_that_is_a_file() {
    let dir = temp_test_dir();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, b"").unwrap();

    let palette = fixtures::minimalist();
    let err = render_all_and_save(vec![&palette], &BatchConfig::new(&blocker)).unwrap_err();

    assert_eq!(err.kind(), "Io");
    assert!(matches!(err, PaletteError::Io { ref path, .. } if path == &blocker));
}

#[test]
fn test_empty_selection_writes_nothing() {
    let dir = temp_test_dir();
    let out = dir.path().join("out");
    let written = render_all_and_save(Vec::<&Palette>::new(), &BatchConfig::new(&out)).unwrap();

    assert!(written.is_empty());
    assert!(out.is_dir());
    assert!(png_files_in(&out).is_empty());
}
