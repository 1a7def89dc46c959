use binview_core::color::{decode_row, decode_rows, map_byte, ColorMode};

// ---------------------------------------------------------------------------
// ColorMode
// ---------------------------------------------------------------------------

#[test]
fn test_color_mode_default_is_bi_threshold() {
    assert_eq!(ColorMode::default(), ColorMode::BiThreshold);
}

#[test]
fn test_color_mode_display() {
    assert_eq!(format!("{}", ColorMode::Grayscale), "Grayscale");
    assert_eq!(format!("{}", ColorMode::BiThreshold), "Bi-threshold");
    assert_eq!(format!("{}", ColorMode::Rainbow), "Rainbow");
}

#[test]
fn test_color_mode_next_cycles_through_all() {
    let mut mode = ColorMode::Grayscale;
    for expected in [ColorMode::BiThreshold, ColorMode::Rainbow, ColorMode::Grayscale] {
        mode = mode.next();
        assert_eq!(mode, expected);
    }
}

// ---------------------------------------------------------------------------
// Grayscale
// ---------------------------------------------------------------------------

#[test]
fn test_grayscale_is_identity_ramp() {
    for b in 0..=255u8 {
        assert_eq!(map_byte(b, ColorMode::Grayscale), [b, b, b, 255]);
    }
}

// ---------------------------------------------------------------------------
// BiThreshold
// ---------------------------------------------------------------------------

#[test]
fn test_bi_threshold_zero_is_black() {
    assert_eq!(map_byte(0, ColorMode::BiThreshold), [0, 0, 0, 255]);
}

#[test]
fn test_bi_threshold_low_bytes_are_blue() {
    assert_eq!(map_byte(1, ColorMode::BiThreshold), [0, 0, 129, 255]);
    assert_eq!(map_byte(126, ColorMode::BiThreshold), [0, 0, 254, 255]);
    for b in 1..=126u8 {
        let [r, g, bl, a] = map_byte(b, ColorMode::BiThreshold);
        assert_eq!((r, g, a), (0, 0, 255));
        assert_eq!(bl, b + 128);
    }
}

#[test]
fn test_bi_threshold_high_bytes_are_red() {
    assert_eq!(map_byte(127, ColorMode::BiThreshold), [127, 0, 0, 255]);
    assert_eq!(map_byte(255, ColorMode::BiThreshold), [255, 0, 0, 255]);
    for b in 127..=255u8 {
        assert_eq!(map_byte(b, ColorMode::BiThreshold), [b, 0, 0, 255]);
    }
}

// ---------------------------------------------------------------------------
// Rainbow
// ---------------------------------------------------------------------------

#[test]
fn test_rainbow_zero_is_transparent_sentinel() {
    assert_eq!(map_byte(0, ColorMode::Rainbow), [0, 0, 0, 0]);
}

#[test]
fn test_rainbow_nonzero_never_matches_sentinel() {
    let sentinel = map_byte(0, ColorMode::Rainbow);
    for b in 1..=255u8 {
        let px = map_byte(b, ColorMode::Rainbow);
        assert_ne!(px, sentinel, "byte {b}");
        assert_eq!(px[3], 255, "byte {b} not opaque");
    }
}

#[test]
fn test_rainbow_primary_hues() {
    assert_eq!(map_byte(85, ColorMode::Rainbow), [0, 255, 0, 255]);
    assert_eq!(map_byte(170, ColorMode::Rainbow), [0, 0, 255, 255]);
    assert_eq!(map_byte(255, ColorMode::Rainbow), [255, 0, 0, 255]);
}

#[test]
fn test_rainbow_is_fully_saturated() {
    // Every hue has one channel at full value and one at zero.
    for b in 1..=255u8 {
        let [r, g, bl, _] = map_byte(b, ColorMode::Rainbow);
        let channels = [r, g, bl];
        assert_eq!(channels.iter().max(), Some(&255), "byte {b}");
        assert_eq!(channels.iter().min(), Some(&0), "byte {b}");
    }
}

// ---------------------------------------------------------------------------
// Row decoding
// ---------------------------------------------------------------------------

#[test]
fn test_decode_row_maps_each_byte() {
    let raw = [0u8, 10, 200];
    let mut out = [0u8; 12];
    decode_row(&raw, ColorMode::BiThreshold, &mut out);
    assert_eq!(out, [0, 0, 0, 255, 0, 0, 138, 255, 200, 0, 0, 255]);
}

#[test]
fn test_decode_rows_flips_row_order() {
    // Three rows of width 2, stream order: [1,1], [2,2], [3,3].
    let raw = [1u8, 1, 2, 2, 3, 3];
    let mut out = [0u8; 24];
    decode_rows(&raw, 2, ColorMode::Grayscale, &mut out);

    let first_pixel_of = |row: usize| out[row * 8];
    assert_eq!(first_pixel_of(0), 3);
    assert_eq!(first_pixel_of(1), 2);
    assert_eq!(first_pixel_of(2), 1);
}

#[test]
fn test_decode_rows_is_row_local() {
    // Decoding a subset of rows gives the same pixels as decoding the whole.
    let raw: Vec<u8> = (0..40).map(|i| (i * 7) as u8).collect();
    let width = 8;
    let mut whole = vec![0u8; raw.len() * 4];
    decode_rows(&raw, width, ColorMode::Rainbow, &mut whole);

    let tail = &raw[3 * width..];
    let mut part = vec![0u8; tail.len() * 4];
    decode_rows(tail, width, ColorMode::Rainbow, &mut part);

    // The last two stream rows are the first two output rows of both.
    assert_eq!(&whole[..part.len()], &part[..]);
}

#[test]
#[should_panic(expected = "whole number of rows")]
fn test_decode_rows_rejects_partial_rows() {
    let raw = [0u8; 7];
    let mut out = [0u8; 28];
    decode_rows(&raw, 2, ColorMode::Grayscale, &mut out);
}
