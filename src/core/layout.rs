//! # Layout Engine
//!
//! Maps terminal width to a column arrangement.
//!
//! ```text
//!   width <  80        →  Narrow  (1 panel)
//!   80 <= width < 120  →  Medium  (list + details)
//!   width >= 120       →  Grid    (4 columns, flattened index)
//! ```
//!
//! Column widths are `(width - margin) / columns`, floored; the remainder is
//! left as right margin.

/// Lower bound (inclusive) for the two-panel layout.
pub const MEDIUM_LAYOUT_MIN: u16 = 80;
/// Lower bound (inclusive) for the four-column grid.
pub const WIDE_LAYOUT_MIN: u16 = 120;
/// Columns in grid mode. Also the row stride for vertical grid moves.
pub const GRID_COLUMNS: usize = 4;
/// The grid never renders fewer rows than this.
pub const MIN_GRID_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Narrow,
    Medium,
    Grid,
}

impl LayoutMode {
    pub fn for_width(width: u16) -> Self {
        if width >= WIDE_LAYOUT_MIN {
            LayoutMode::Grid
        } else if width >= MEDIUM_LAYOUT_MIN {
            LayoutMode::Medium
        } else {
            LayoutMode::Narrow
        }
    }

    pub fn column_count(&self) -> usize {
        match self {
            LayoutMode::Narrow => 1,
            LayoutMode::Medium => 2,
            LayoutMode::Grid => GRID_COLUMNS,
        }
    }

    /// Border and padding budget reserved before splitting the width.
    fn margin(&self) -> u16 {
        match self {
            LayoutMode::Narrow => 4,
            LayoutMode::Medium => 6,
            LayoutMode::Grid => 10,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LayoutMode::Narrow => "Narrow",
            LayoutMode::Medium => "Medium",
            LayoutMode::Grid => "Grid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub mode: LayoutMode,
    pub column_count: usize,
    pub column_widths: Vec<u16>,
}

impl Layout {
    pub fn is_grid(&self) -> bool {
        self.mode == LayoutMode::Grid
    }

    /// Rows the grid renders for `item_count` visible items. Zero outside
    /// grid mode.
    pub fn grid_row_count(&self, item_count: usize) -> usize {
        if !self.is_grid() {
            return 0;
        }
        item_count.div_ceil(GRID_COLUMNS).max(MIN_GRID_ROWS)
    }
}

impl Default for Layout {
    fn default() -> Self {
        compute_layout(0)
    }
}

/// Derive the layout for a terminal `width`. Never panics, including at 0.
pub fn compute_layout(width: u16) -> Layout {
    let mode = LayoutMode::for_width(width);
    let column_count = mode.column_count();
    let column_width = width.saturating_sub(mode.margin()) / column_count as u16;
    Layout {
        mode,
        column_count,
        column_widths: vec![column_width; column_count],
    }
}
