//! This module contains all the constants used by the viewer.

use std::time::Duration;

use glam::UVec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of one sprite sheet cell, in pixels.
pub const CELL_SIZE: u32 = 64;
/// The number of frames in one animation cycle (columns per sheet row).
pub const SHEET_COLUMNS: u32 = 4;
/// The number of physical motion rows in a creature sheet.
pub const SHEET_ROWS: u32 = 6;
/// The pixel size of a full creature sheet.
pub const SHEET_SIZE: UVec2 = UVec2::new(CELL_SIZE * SHEET_COLUMNS, CELL_SIZE * SHEET_ROWS);

/// How long each primary animation frame stays visible, in wall-clock time.
pub const FRAME_TIME: Duration = Duration::from_millis(250);

/// The number of frames in an overlay effect clip.
pub const EFFECT_FRAMES: u32 = 8;
/// How long each effect frame stays visible.
pub const EFFECT_FRAME_TIME: Duration = Duration::from_millis(100);
/// The pixel size of an effect strip (a single row of cells).
pub const EFFECT_SHEET_SIZE: UVec2 = UVec2::new(CELL_SIZE * EFFECT_FRAMES, CELL_SIZE);

/// Bounds for the user-requested render scale multiplier.
pub const MIN_USER_SCALE: f32 = 0.5;
pub const MAX_USER_SCALE: f32 = 2.0;

/// The initial window size, in pixels.
pub const WINDOW_SIZE: UVec2 = UVec2::new(320, 320);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_sheet_geometry() {
        assert_eq!(CELL_SIZE, 64);
        assert_eq!(SHEET_SIZE, UVec2::new(SHEET_COLUMNS * 64, SHEET_ROWS * 64));
        assert_eq!(EFFECT_SHEET_SIZE, UVec2::new(EFFECT_FRAMES * 64, 64));
    }

    #[test]
    fn test_frame_timing() {
        // A full primary cycle spans one second; a full effect clip spans 800ms.
        assert_eq!(FRAME_TIME * SHEET_COLUMNS, Duration::from_secs(1));
        assert_eq!(EFFECT_FRAME_TIME * EFFECT_FRAMES, Duration::from_millis(800));
    }

    #[test]
    fn test_scale_bounds() {
        assert!(MIN_USER_SCALE < MAX_USER_SCALE);
        assert!(MIN_USER_SCALE > 0.0);
    }

    #[test]
    fn test_window_fits_cell() {
        assert!(WINDOW_SIZE.x >= CELL_SIZE);
        assert!(WINDOW_SIZE.y >= CELL_SIZE);
    }
}
