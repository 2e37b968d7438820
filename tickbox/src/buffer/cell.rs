use crate::types::Rgb;

/// Upper half block: the glyph colors the top pixel, the background the bottom one.
pub const HALF_BLOCK: char = '▀';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
        }
    }
}

impl Cell {
    /// A cell showing two stacked pixels.
    pub fn pixels(top: Rgb, bottom: Rgb) -> Self {
        Self {
            char: HALF_BLOCK,
            fg: top,
            bg: bottom,
        }
    }
}
