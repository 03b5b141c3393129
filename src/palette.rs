//! Colors used when drawing cells. Values follow the Nord palette.
use crate::cell::CellState;

/// Opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Color {
        Color {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

pub const WHITE: Color = Color::from_hex(0xECEFF4);
pub const BLACK: Color = Color::from_hex(0x2E3440);
pub const PURPLE: Color = Color::from_hex(0xB48EAD);
pub const ORANGE: Color = Color::from_hex(0xD08770);
pub const GREY: Color = Color::from_hex(0xD8DEE9);
pub const LIGHT_GREY: Color = Color::from_hex(0xE5E9F0);
pub const TURQUOISE: Color = Color::from_hex(0x8FBCBB);

/// Color of the lines separating cells.
pub const GRIDLINE: Color = GREY;

/// The fill color associated with a cell state.
pub fn color_of(state: CellState) -> Color {
    match state {
        CellState::Empty => WHITE,
        CellState::Start => ORANGE,
        CellState::End => TURQUOISE,
        CellState::Barrier => BLACK,
        CellState::Frontier => GREY,
        CellState::Visited => LIGHT_GREY,
        CellState::Path => PURPLE,
    }
}
