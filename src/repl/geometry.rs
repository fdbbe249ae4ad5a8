//! # Geometry Types
//!
//! Rectangles and dimensions, plus the layout engine that splits the
//! terminal into the methods panel and the result panel.
//!
//! All margins come from the metrics in [`crate::config`]:
//!
//! ```text
//! panel inner width   = outer width - 2 * border                       (-2)
//! panel inner height  = height - header - footer - 2 * border          (-4)
//! viewport width      = right outer - 2 * border - 2 * padding_x       (-6)
//! viewport height     = inner height - 2 * padding_y
//!                       - result header - result footer                 (-10 from terminal)
//! ```

use crate::config::{
    FRAME_FOOTER_ROWS, FRAME_HEADER_ROWS, LEFT_PANEL_TENTHS, PANEL_BORDER_WIDTH, PANEL_PADDING_X,
    PANEL_PADDING_Y, RESULT_FOOTER_ROWS, RESULT_HEADER_ROWS, RIGHT_PANEL_TENTHS,
};

/// Dimensions representing width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    /// Create new dimensions
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Create zero dimensions
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    /// Check if dimensions are empty (width or height is 0)
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A content rectangle in terminal cells, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Everything the renderer needs to place the two panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelLayout {
    /// Content area of the methods panel (inside its border)
    pub left: Rect,
    /// Content area of the result panel (inside its border)
    pub right: Rect,
    /// Size of the response viewport inside the result panel
    pub viewport: Dimensions,
}

impl PanelLayout {
    /// Compute the full layout for a terminal of the given size
    pub fn compute(terminal_width: usize, terminal_height: usize) -> Self {
        let (left, right) = layout(terminal_width, terminal_height);
        Self {
            left,
            right,
            viewport: viewport_dimensions(terminal_width, terminal_height),
        }
    }

    /// Outer width of the methods panel including its border
    pub fn left_outer_width(&self) -> usize {
        self.left.width + 2 * PANEL_BORDER_WIDTH
    }

    /// Outer width of the result panel including its border
    pub fn right_outer_width(&self) -> usize {
        self.right.width + 2 * PANEL_BORDER_WIDTH
    }

    /// Outer height shared by both panels including borders
    pub fn outer_height(&self) -> usize {
        self.left.height + 2 * PANEL_BORDER_WIDTH
    }
}

fn left_outer_width(terminal_width: usize) -> usize {
    terminal_width * LEFT_PANEL_TENTHS / 10
}

fn right_outer_width(terminal_width: usize) -> usize {
    terminal_width * RIGHT_PANEL_TENTHS / 10
}

fn panel_inner_height(terminal_height: usize) -> usize {
    terminal_height.saturating_sub(FRAME_HEADER_ROWS + FRAME_FOOTER_ROWS + 2 * PANEL_BORDER_WIDTH)
}

/// Split the terminal into the left and right panel content rectangles.
///
/// Left width is `floor(w * 0.4) - 2`, right width `floor(w * 0.6) - 2`,
/// shared height `h - 4`. Values saturate at zero on tiny terminals.
pub fn layout(terminal_width: usize, terminal_height: usize) -> (Rect, Rect) {
    let left_outer = left_outer_width(terminal_width);
    let right_outer = right_outer_width(terminal_width);
    let height = panel_inner_height(terminal_height);
    let top = FRAME_HEADER_ROWS + PANEL_BORDER_WIDTH;

    let left = Rect::new(
        PANEL_BORDER_WIDTH,
        top,
        left_outer.saturating_sub(2 * PANEL_BORDER_WIDTH),
        height,
    );
    let right = Rect::new(
        left_outer + PANEL_BORDER_WIDTH,
        top,
        right_outer.saturating_sub(2 * PANEL_BORDER_WIDTH),
        height,
    );
    (left, right)
}

/// Size of the response viewport: `floor(w * 0.6) - 6` by `h - 10`
pub fn viewport_dimensions(terminal_width: usize, terminal_height: usize) -> Dimensions {
    let width = right_outer_width(terminal_width)
        .saturating_sub(2 * PANEL_BORDER_WIDTH + 2 * PANEL_PADDING_X);
    let height = panel_inner_height(terminal_height)
        .saturating_sub(2 * PANEL_PADDING_Y + RESULT_HEADER_ROWS + RESULT_FOOTER_ROWS);
    Dimensions::new(width, height)
}
