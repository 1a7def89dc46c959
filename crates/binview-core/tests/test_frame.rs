use std::path::PathBuf;

use binview_core::error::BinviewError;
use binview_core::frame::{Geometry, RgbaFrame, SourceInfo};
use binview_core::viewport::{apply_shift, FrameMirror, FrameUpdate, ScrollDirection};

fn numbered_frame(width: usize, height: usize) -> RgbaFrame {
    // Every byte of row r is r + 1.
    let g = Geometry::new(width, height).unwrap();
    let data = (0..height)
        .flat_map(|r| std::iter::repeat((r + 1) as u8).take(g.row_stride()))
        .collect();
    RgbaFrame::from_pixels(g, data)
}

fn row_tags(frame: &RgbaFrame) -> Vec<u8> {
    (0..frame.height()).map(|r| frame.row(r)[0]).collect()
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

#[test]
fn test_geometry_sizes() {
    let g = Geometry::new(500, 800).unwrap();
    assert_eq!(g.frame_bytes(), 400_000);
    assert_eq!(g.row_stride(), 2000);
    assert_eq!(g.pixel_bytes(), 1_600_000);
    assert_eq!(g.to_string(), "500x800");
}

#[test]
fn test_geometry_rejects_zero() {
    assert!(matches!(
        Geometry::new(0, 10),
        Err(BinviewError::InvalidDimensions { width: 0, height: 10 })
    ));
    assert!(Geometry::new(10, 0).is_err());
}

#[test]
fn test_geometry_rejects_overflowing_frame_size() {
    assert!(matches!(
        Geometry::new(usize::MAX, 2),
        Err(BinviewError::InvalidDimensions { width: usize::MAX, height: 2 })
    ));
    // Fits as bytes but not as RGBA pixels.
    assert!(Geometry::new(usize::MAX / 2, 1).is_err());
    assert!(Geometry::new(usize::MAX / 4, 1).is_ok());
}

// ---------------------------------------------------------------------------
// Row shifting
// ---------------------------------------------------------------------------

#[test]
fn test_shift_rows_toward_end() {
    let mut frame = numbered_frame(3, 5);
    frame.shift_rows_toward_end(2);
    assert_eq!(row_tags(&frame)[2..], [1, 2, 3]);
}

#[test]
fn test_shift_rows_toward_start() {
    let mut frame = numbered_frame(3, 5);
    frame.shift_rows_toward_start(2);
    assert_eq!(row_tags(&frame)[..3], [3, 4, 5]);
}

#[test]
fn test_apply_shift_down_writes_leading_rows() {
    let mut frame = numbered_frame(2, 4);
    let new_rows = vec![9u8; 2 * frame.geometry().row_stride()];
    apply_shift(&mut frame, ScrollDirection::Down, 2, &new_rows);
    assert_eq!(row_tags(&frame), [9, 9, 1, 2]);
}

#[test]
fn test_apply_shift_up_writes_trailing_rows() {
    let mut frame = numbered_frame(2, 4);
    let new_rows = vec![9u8; frame.geometry().row_stride()];
    apply_shift(&mut frame, ScrollDirection::Up, 1, &new_rows);
    assert_eq!(row_tags(&frame), [2, 3, 4, 9]);
}

#[test]
fn test_apply_shift_whole_frame() {
    let mut frame = numbered_frame(2, 3);
    let new_rows = vec![7u8; frame.geometry().pixel_bytes()];
    apply_shift(&mut frame, ScrollDirection::Down, 3, &new_rows);
    assert_eq!(row_tags(&frame), [7, 7, 7]);
}

// ---------------------------------------------------------------------------
// FrameMirror
// ---------------------------------------------------------------------------

#[test]
fn test_mirror_applies_updates() {
    let source = numbered_frame(2, 4);
    let g = source.geometry();
    let mut mirror = FrameMirror::new();
    assert!(mirror.frame().is_none());

    FrameUpdate::FullFrame {
        geometry: g,
        pixels: source.as_bytes(),
    }
    .deliver(&mut mirror);
    assert_eq!(mirror.frame(), Some(&source));

    let new_rows = vec![9u8; g.row_stride()];
    FrameUpdate::PartialShift {
        direction: ScrollDirection::Down,
        rows: 1,
        new_rows: &new_rows,
        geometry: g,
    }
    .deliver(&mut mirror);
    assert_eq!(row_tags(mirror.frame().unwrap()), [9, 1, 2, 3]);

    FrameUpdate::EndOfFile.deliver(&mut mirror);
    FrameUpdate::None.deliver(&mut mirror);
    assert_eq!(mirror.eof_notifications(), 1);
}

#[test]
fn test_mirror_ignores_mismatched_partial() {
    let source = numbered_frame(2, 4);
    let mut mirror = FrameMirror::new();
    FrameUpdate::FullFrame {
        geometry: source.geometry(),
        pixels: source.as_bytes(),
    }
    .deliver(&mut mirror);

    let other = Geometry::new(3, 4).unwrap();
    let new_rows = vec![9u8; other.row_stride()];
    FrameUpdate::PartialShift {
        direction: ScrollDirection::Up,
        rows: 1,
        new_rows: &new_rows,
        geometry: other,
    }
    .deliver(&mut mirror);
    assert_eq!(mirror.frame(), Some(&source));
}

// ---------------------------------------------------------------------------
// SourceInfo
// ---------------------------------------------------------------------------

#[test]
fn test_source_info_counts() {
    let info = SourceInfo {
        filename: PathBuf::from("data.bin"),
        size_bytes: 1_600_000,
    };
    assert_eq!(info.total_rows(400), 4000);
    assert_eq!(info.total_rows(300), 5334);
    assert_eq!(info.pages(Geometry::new(500, 800).unwrap()), 4);
    assert_eq!(info.size_kb(), 1600);
    assert_eq!(info.position_label(820_500), "820KB of 1600KB");
}
