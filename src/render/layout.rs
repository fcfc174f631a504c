//! Grid geometry shared by rendering and mouse hit-testing
//!
//! Tiles flow left to right, top to bottom. Only whole tiles are laid out;
//! when the collection does not fit, rows scroll so the focused tile stays
//! visible. The discard zone sits in the bottom-right corner of the grid.

use ratatui::layout::Rect;

use crate::core::HitBox;

/// Discard zone size in cells
pub const TRASH_WIDTH: u16 = 12;
pub const TRASH_HEIGHT: u16 = 3;

/// Tile positions for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Inner grid area (inside the border)
    area: Rect,
    tile_width: u16,
    tile_height: u16,
    columns: usize,
    visible_rows: usize,
    first_row: usize,
    len: usize,
}

impl GridLayout {
    /// Lay out `len` tiles of `tile_size` inside `area`, scrolled to `focus`
    pub fn new(area: Rect, tile_size: (u16, u16), len: usize, focus: usize) -> Self {
        let (tile_width, tile_height) = tile_size;
        let columns = (area.width / tile_width.max(1)).max(1) as usize;
        // Keep the bottom strip free for the discard zone
        let usable_height = area.height.saturating_sub(TRASH_HEIGHT);
        let visible_rows = (usable_height / tile_height.max(1)).max(1) as usize;

        let focus_row = focus.min(len.saturating_sub(1)) / columns;
        let first_row = focus_row.saturating_sub(visible_rows - 1);

        Self {
            area,
            tile_width,
            tile_height,
            columns,
            visible_rows,
            first_row,
            len,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Indices of the tiles currently on screen
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = (self.first_row * self.columns).min(self.len);
        let end = ((self.first_row + self.visible_rows) * self.columns).min(self.len);
        start..end
    }

    /// Screen rectangle of tile `index`, if it is on screen
    pub fn cell_rect(&self, index: usize) -> Option<Rect> {
        if !self.visible_range().contains(&index) {
            return None;
        }
        let row = index / self.columns - self.first_row;
        let col = index % self.columns;
        let x = self.area.x + col as u16 * self.tile_width;
        let y = self.area.y + row as u16 * self.tile_height;
        let width = self.tile_width.min(self.area.right().saturating_sub(x));
        let height = self.tile_height.min(self.area.bottom().saturating_sub(y));
        Some(Rect::new(x, y, width, height))
    }

    /// Horizontal extent of tile `index`, for the drag threshold
    pub fn hit_box(&self, index: usize) -> Option<HitBox> {
        self.cell_rect(index)
            .map(|r| HitBox::new(r.x as f32, r.width as f32))
    }

    /// Tile under the cell (`column`, `row`)
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        self.visible_range()
            .find(|&i| self.cell_rect(i).is_some_and(|r| contains(r, column, row)))
    }

    /// Discard zone in the bottom-right corner
    pub fn trash_rect(&self) -> Rect {
        let width = TRASH_WIDTH.min(self.area.width);
        let height = TRASH_HEIGHT.min(self.area.height);
        Rect::new(
            self.area.right().saturating_sub(width),
            self.area.bottom().saturating_sub(height),
            width,
            height,
        )
    }

    pub fn in_trash(&self, column: u16, row: u16) -> bool {
        contains(self.trash_rect(), column, row)
    }

    /// Whether (`column`, `row`) is inside the grid area
    pub fn in_grid(&self, column: u16, row: u16) -> bool {
        contains(self.area, column, row)
    }

    /// Number of tiles per column step, for up/down focus movement
    pub fn row_stride(&self) -> isize {
        self.columns as isize
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}
