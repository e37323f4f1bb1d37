//! Pure geometry of the room creation page.
//!
//! The page is a full-viewport container holding a centered, width-bounded
//! column. Inside the column's padding sits a two-column grid; both cells
//! start at the top of the grid.

use egui::{Rect, pos2, vec2};

/// Sizing constants of the page, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Upper bound of the content column width (padding included).
    pub max_content_width: f32,
    /// Horizontal padding inside the column.
    pub padding_x: f32,
    /// Vertical padding inside the column.
    pub padding_y: f32,
    /// Space between the two grid columns.
    pub column_gap: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_content_width: 896.0,
            padding_x: 16.0,
            padding_y: 32.0,
            column_gap: 32.0,
        }
    }
}

/// Grid cell occupied by a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    CreateRoomForm,
    RoomList,
}

impl Slot {
    /// Left-to-right order of the grid.
    pub const ORDER: [Slot; 2] = [Slot::CreateRoomForm, Slot::RoomList];

    pub fn label(&self) -> &'static str {
        match self {
            Slot::CreateRoomForm => "create_room_form",
            Slot::RoomList => "room_list",
        }
    }
}

/// A slot and the rectangle allotted to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionLayout {
    pub slot: Slot,
    pub rect: Rect,
}

/// Resolved page geometry for one viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// Whole viewport.
    pub container: Rect,
    /// Centered column, padding included.
    pub column: Rect,
    /// Column minus padding; holds both regions.
    pub grid: Rect,
    regions: [RegionLayout; 2],
}

impl PageLayout {
    /// Lays out the page inside `viewport`.
    ///
    /// Never produces negative sizes: a viewport narrower than the padding
    /// or the gap collapses the affected rectangles to zero width.
    pub fn compute(viewport: Rect, config: &LayoutConfig) -> Self {
        let container = viewport;

        let column_width = config.max_content_width.min(viewport.width()).max(0.0);
        let column = Rect::from_min_size(
            pos2(viewport.center().x - column_width / 2.0, viewport.top()),
            vec2(column_width, viewport.height().max(0.0)),
        );

        let inset_x = config.padding_x.min(column_width / 2.0);
        let grid = Rect::from_min_size(
            pos2(column.left() + inset_x, column.top() + config.padding_y),
            vec2(
                (column_width - 2.0 * inset_x).max(0.0),
                (column.height() - 2.0 * config.padding_y).max(0.0),
            ),
        );

        let cell_width = ((grid.width() - config.column_gap) / 2.0).max(0.0);
        let cell_size = vec2(cell_width, grid.height());
        let list_left = (grid.left() + cell_width + config.column_gap).min(grid.right() - cell_width);

        let regions = [
            RegionLayout {
                slot: Slot::CreateRoomForm,
                rect: Rect::from_min_size(grid.left_top(), cell_size),
            },
            RegionLayout {
                slot: Slot::RoomList,
                rect: Rect::from_min_size(pos2(list_left, grid.top()), cell_size),
            },
        ];

        Self {
            container,
            column,
            grid,
            regions,
        }
    }

    /// Both regions in grid order.
    pub fn regions(&self) -> &[RegionLayout; 2] {
        &self.regions
    }

    pub fn region(&self, slot: Slot) -> &RegionLayout {
        match slot {
            Slot::CreateRoomForm => &self.regions[0],
            Slot::RoomList => &self.regions[1],
        }
    }
}
