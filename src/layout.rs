//! Grid cell geometry.
//!
//! Pure closed-form arithmetic from a board description to pixel rectangles.
//! Everything is validated and computed once at construction; queries are
//! read-only and safe to share across rendering workers.

use thiserror::Error;

/// Errors from board geometry validation.
///
/// All of these are raised at construction time - once a [`GridLayout`]
/// exists, its queries cannot fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// One or both cell counts were zero.
    #[error("cell counts must be at least 1, got {cols}x{rows}")]
    ZeroCells {
        /// Requested column count.
        cols: u32,
        /// Requested row count.
        rows: u32,
    },

    /// Explicit cell dimensions were zero.
    #[error("cell dimensions must be at least 1 pixel")]
    ZeroCellSize,

    /// The fit-to-target size cannot hold even 1-pixel cells.
    #[error("target size {target} cannot fit {cells} cells with outline {outline} and {border_overhead}px of borders")]
    TargetTooSmall {
        /// Requested overall size.
        target: u32,
        /// Cell count on the constrained axis.
        cells: u32,
        /// Outline stroke width.
        outline: u32,
        /// Combined border size on the constrained axis.
        border_overhead: u32,
    },
}

/// Border sizes around the grid, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Borders {
    /// Top border.
    pub top: u32,
    /// Bottom border.
    pub bottom: u32,
    /// Left border.
    pub left: u32,
    /// Right border.
    pub right: u32,
}

impl Borders {
    /// The same border size on all four sides.
    #[must_use]
    pub const fn uniform(px: u32) -> Self {
        Self { top: px, bottom: px, left: px, right: px }
    }
}

/// How cell dimensions are determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    /// Caller supplies explicit cell dimensions.
    Cell {
        /// Cell width in pixels.
        width: u32,
        /// Cell height in pixels.
        height: u32,
    },
    /// Cell dimensions are derived from a target overall square size.
    ///
    /// Derivation rounds up, so the realized board is never smaller than
    /// the target (it may exceed it by a few pixels).
    FitTarget {
        /// Desired overall size of the square canvas.
        size: u32,
    },
}

/// A cell's pixel rectangle, corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    /// Left edge.
    pub x1: u32,
    /// Top edge.
    pub y1: u32,
    /// Right edge (inclusive).
    pub x2: u32,
    /// Bottom edge (inclusive).
    pub y2: u32,
}

impl CellRect {
    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.x2 - self.x1 + 1
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.y2 - self.y1 + 1
    }
}

/// Cell geometry for one board, frozen at construction.
///
/// The outer gridline is reserved at `2 * outline` pixels while interior
/// gridlines get a single `outline`; the asymmetry is deliberate (the board
/// edge is drawn twice as thick).
#[derive(Debug, Clone)]
pub struct GridLayout {
    cols: u32,
    rows: u32,
    cell_w: u32,
    cell_h: u32,
    outline: u32,
    borders: Borders,
    content_w: u32,
    content_h: u32,
}

impl GridLayout {
    /// Build a layout, validating the geometry up front.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if either cell count is zero, explicit cell
    /// dimensions are zero, or a fit-to-target size is too small to hold
    /// 1-pixel cells after border and outline overhead.
    pub fn new(
        cols: u32,
        rows: u32,
        outline: u32,
        borders: Borders,
        sizing: Sizing,
    ) -> Result<Self, LayoutError> {
        if cols == 0 || rows == 0 {
            return Err(LayoutError::ZeroCells { cols, rows });
        }

        let (cell_w, cell_h) = match sizing {
            Sizing::Cell { width, height } => {
                if width == 0 || height == 0 {
                    return Err(LayoutError::ZeroCellSize);
                }
                (width, height)
            }
            Sizing::FitTarget { size } => (
                fit_cell(size, cols, outline, borders.left + borders.right)?,
                fit_cell(size, rows, outline, borders.top + borders.bottom)?,
            ),
        };

        // outline*4 on the outer boundary plus outline between each pair of cells.
        let content_w = outline * 4 + outline * (cols - 1) + cell_w * cols;
        let content_h = outline * 4 + outline * (rows - 1) + cell_h * rows;

        Ok(Self { cols, rows, cell_w, cell_h, outline, borders, content_w, content_h })
    }

    /// Full canvas size (width, height) callers must allocate.
    #[must_use]
    pub const fn board_area(&self) -> (u32, u32) {
        (
            self.content_w + self.borders.left + self.borders.right,
            self.content_h + self.borders.top + self.borders.bottom,
        )
    }

    /// Pixel span (width, height) of the grid including all outlines,
    /// excluding the outer borders.
    #[must_use]
    pub const fn content_area(&self) -> (u32, u32) {
        (self.content_w, self.content_h)
    }

    /// The rectangle bounding the drawable grid region inside the borders.
    #[must_use]
    pub const fn content_pos(&self) -> CellRect {
        CellRect {
            x1: self.borders.left,
            y1: self.borders.top,
            x2: self.borders.left + self.content_w - 1,
            y2: self.borders.top + self.content_h - 1,
        }
    }

    /// Total cell count.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Outline stroke width.
    #[must_use]
    pub const fn outline(&self) -> u32 {
        self.outline
    }

    /// 1-D index of the center cell, if the board has one (both counts odd).
    #[must_use]
    pub const fn center_index(&self) -> Option<usize> {
        if self.cols % 2 == 1 && self.rows % 2 == 1 {
            Some(self.cell_count() / 2)
        } else {
            None
        }
    }

    /// Rectangle of cell `(x, y)`, 0-indexed.
    ///
    /// A `2 * outline` gap precedes the first cell on each axis (the doubled
    /// outer gridline); subsequent cells are separated by a single `outline`.
    ///
    /// # Panics
    ///
    /// Debug builds assert the indices are in range.
    #[must_use]
    pub fn rect_for(&self, x: u32, y: u32) -> CellRect {
        debug_assert!(x < self.cols && y < self.rows, "cell ({x}, {y}) out of range");
        let x1 = self.borders.left + x * self.cell_w + self.outline * 2 + x * self.outline;
        let y1 = self.borders.top + y * self.cell_h + self.outline * 2 + y * self.outline;
        CellRect { x1, y1, x2: x1 + self.cell_w - 1, y2: y1 + self.cell_h - 1 }
    }

    /// Rectangle of the cell at 1-D index `i`, row-major.
    #[must_use]
    pub fn rect_for_1d(&self, i: usize) -> CellRect {
        let (x, y) = self.index_to_xy(i);
        self.rect_for(x, y)
    }

    /// Map a 1-D index to `(x, y)` coordinates, row-major.
    #[must_use]
    pub fn index_to_xy(&self, i: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((i % cols) as u32, (i / cols) as u32)
    }
}

/// Derive a cell dimension from a target overall size by subtracting border
/// and outline overhead then dividing by the cell count, rounding up.
fn fit_cell(
    target: u32,
    cells: u32,
    outline: u32,
    border_overhead: u32,
) -> Result<u32, LayoutError> {
    let overhead = border_overhead + outline * (cells + 3);
    if target <= overhead {
        return Err(LayoutError::TargetTooSmall { target, cells, outline, border_overhead });
    }
    Ok((target - overhead).div_ceil(cells))
}
