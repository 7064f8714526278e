use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

use crate::constants::CELL_SIZE;
use crate::error::TextureError;

/// One cell of a fixed-layout sprite sheet (row = motion, column = frame).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SheetCell {
    pub row: u32,
    pub col: u32,
}

impl SheetCell {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The source rectangle of this cell within its sheet.
    pub fn source_rect(self) -> Rect {
        Rect::new(
            (self.col * CELL_SIZE) as i32,
            (self.row * CELL_SIZE) as i32,
            CELL_SIZE,
            CELL_SIZE,
        )
    }
}

/// Blits one sheet cell into `surface`, replacing its entire prior contents.
///
/// This is the only code path that mutates a draw surface; everything above
/// it just decides which cell to pass in, so a surface is never left in a
/// partially drawn state.
pub fn blit(
    canvas: &mut Canvas<Window>,
    surface: &mut Texture,
    sheet: &Texture,
    cell: SheetCell,
) -> Result<(), TextureError> {
    let src = cell.source_rect();
    let dest = Rect::new(0, 0, CELL_SIZE, CELL_SIZE);

    let mut copied = Ok(());
    canvas
        .with_texture_canvas(surface, |target| {
            target.set_draw_color(Color::RGBA(0, 0, 0, 0));
            target.clear();
            copied = target.copy(sheet, src, dest).map_err(TextureError::RenderFailed);
        })
        .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
    copied
}

/// Clears `surface` to fully transparent.
///
/// Used when a sheet is not ready (blank render) and when an overlay effect
/// session ends.
pub fn clear(canvas: &mut Canvas<Window>, surface: &mut Texture) -> Result<(), TextureError> {
    canvas
        .with_texture_canvas(surface, |target| {
            target.set_draw_color(Color::RGBA(0, 0, 0, 0));
            target.clear();
        })
        .map_err(|e| TextureError::RenderFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_rect_math() {
        let rect = SheetCell::new(2, 3).source_rect();
        assert_eq!(rect.x(), (3 * CELL_SIZE) as i32);
        assert_eq!(rect.y(), (2 * CELL_SIZE) as i32);
        assert_eq!(rect.width(), CELL_SIZE);
        assert_eq!(rect.height(), CELL_SIZE);
    }
}
