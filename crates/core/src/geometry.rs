//! Geometry module - grid coordinates and the playable diamond region
//!
//! The grid is N x N, indexed from 1 in both axes. Row `r` of the diamond
//! spans `N - |r - center|` columns (center = `ceil(N / 2)`), starting at
//! column `ceil(|r - center| / 2)`. Each row is intersected with the grid, so
//! rows outside `1..=N` have no playable columns.
//!
//! All queries are evaluated over a full rectangle footprint, never just the
//! anchor cell. Coordinate arithmetic saturates at the `i16` limits, so a
//! footprint far off the grid stays off the grid instead of wrapping.

/// Axis-aligned rectangle of grid cells: `[col, col + col_span - 1] x [row, row + row_span - 1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub col: i16,
    pub row: i16,
    pub col_span: u8,
    pub row_span: u8,
}

impl Rect {
    pub fn new(col: i16, row: i16, col_span: u8, row_span: u8) -> Self {
        Self {
            col,
            row,
            col_span,
            row_span,
        }
    }

    /// Last occupied column (inclusive)
    #[inline(always)]
    pub fn right(&self) -> i16 {
        self.col.saturating_add(self.col_span as i16 - 1)
    }

    /// Last occupied row (inclusive)
    #[inline(always)]
    pub fn bottom(&self) -> i16 {
        self.row.saturating_add(self.row_span as i16 - 1)
    }

    /// Same footprint moved to a new anchor
    #[inline(always)]
    pub fn at(&self, col: i16, row: i16) -> Self {
        Self { col, row, ..*self }
    }

    /// Same footprint shifted by (dc, dr)
    #[inline(always)]
    pub fn offset(&self, dc: i16, dr: i16) -> Self {
        self.at(self.col.saturating_add(dc), self.row.saturating_add(dr))
    }

    /// Closed-rectangle intersection test
    #[inline(always)]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.col <= other.right()
            && self.right() >= other.col
            && self.row <= other.bottom()
            && self.bottom() >= other.row
    }

    pub fn contains(&self, col: i16, row: i16) -> bool {
        col >= self.col && col <= self.right() && row >= self.row && row <= self.bottom()
    }

    /// Iterate every occupied (col, row) cell
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        (self.row..=self.bottom()).flat_map(move |r| (self.col..=self.right()).map(move |c| (c, r)))
    }
}

/// Board geometry for an N x N grid with an inscribed diamond
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    size: u8,
}

impl Geometry {
    /// Largest grid any geometry can describe
    pub const MAX: Geometry = Geometry { size: u8::MAX };

    pub fn new(size: u8) -> Self {
        Self { size }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Center row/column, `ceil(N / 2)`
    pub fn center(&self) -> i16 {
        (self.size as i16 + 1) / 2
    }

    /// Inclusive playable column range of a diamond row, clipped to the grid
    pub fn row_range(&self, row: i16) -> Option<(i16, i16)> {
        let n = self.size as i16;
        if row < 1 || row > n {
            return None;
        }
        let distance = (row - self.center()).abs();
        let width = n - distance;
        if width <= 0 {
            return None;
        }
        let start = (distance + 1) / 2;
        let end = start + width - 1;
        let (start, end) = (start.max(1), end.min(n));
        (start <= end).then_some((start, end))
    }

    /// Is the whole footprint inside the outer N x N grid?
    pub fn in_bounds(&self, col: i16, row: i16, col_span: u8, row_span: u8) -> bool {
        let rect = Rect::new(col, row, col_span, row_span);
        let n = self.size as i16;
        rect.col >= 1 && rect.right() <= n && rect.row >= 1 && rect.bottom() <= n
    }

    /// Is every cell of the footprint inside the diamond region?
    pub fn in_diamond(&self, col: i16, row: i16, col_span: u8, row_span: u8) -> bool {
        let rect = Rect::new(col, row, col_span, row_span);
        (rect.row..=rect.bottom()).all(|r| match self.row_range(r) {
            Some((start, end)) => rect.col >= start && rect.right() <= end,
            None => false,
        })
    }

    pub fn rect_in_bounds(&self, rect: &Rect) -> bool {
        self.in_bounds(rect.col, rect.row, rect.col_span, rect.row_span)
    }

    pub fn rect_in_diamond(&self, rect: &Rect) -> bool {
        self.in_diamond(rect.col, rect.row, rect.col_span, rect.row_span)
    }

    /// Number of playable cells in the diamond
    pub fn diamond_cells(&self) -> usize {
        (1..=self.size as i16)
            .filter_map(|r| self.row_range(r))
            .map(|(start, end)| (end - start + 1) as usize)
            .sum()
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(tile_escape_types::GRID_SIZE)
    }
}
