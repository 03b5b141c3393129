/// Maps screen coordinates onto grid cells and back.
///
/// The horizontal screen axis selects the row and the vertical axis selects the column, so cell
/// `(row, col)` is drawn at `(row * cell_width, col * cell_height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    grid_size: usize,
    cell_width: u32,
    cell_height: u32,
}

impl Viewport {
    /// Cell dimensions are clamped to at least one unit.
    pub fn new(grid_size: usize, cell_width: u32, cell_height: u32) -> Viewport {
        Viewport {
            grid_size,
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }
    /// Square cells of side `window_size / grid_size`.
    pub fn square(window_size: u32, grid_size: usize) -> Viewport {
        let side = window_size / to_screen(grid_size.max(1));
        Viewport::new(grid_size, side, side)
    }
    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }
    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }
    /// Width and height covered by the grid in screen units.
    pub fn extent(&self) -> (u32, u32) {
        let n = to_screen(self.grid_size);
        (
            n.saturating_mul(self.cell_width),
            n.saturating_mul(self.cell_height),
        )
    }
    /// The `(row, col)` under a screen position, or [None] outside the grid.
    pub fn cell_at(&self, x: u32, y: u32) -> Option<(usize, usize)> {
        let row = (x / self.cell_width) as usize;
        let col = (y / self.cell_height) as usize;
        (row < self.grid_size && col < self.grid_size).then_some((row, col))
    }
    /// Top-left screen position of a cell.
    pub fn origin_of(&self, row: usize, col: usize) -> (u32, u32) {
        (
            to_screen(row).saturating_mul(self.cell_width),
            to_screen(col).saturating_mul(self.cell_height),
        )
    }
}

/// Screen coordinates saturate instead of wrapping.
fn to_screen(v: usize) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}
