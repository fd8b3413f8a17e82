use super::*;

mod arrange;
mod cache;
mod centered;
mod container;
mod dynamic;
mod flow;
pub mod grid;
mod length;
mod measure;
pub mod stack;

pub use centered::centered;
pub use container::{GridContainer, GridContainerBuilder};
pub use dynamic::{DynamicLayout, DynamicRow};
pub use flow::flow;
pub use grid::{Grid, TableColumn, TableRow, Track};
pub use length::TableLength;
pub use stack::{Orientation, StackItem, StackLayout};

use grid::Pass;

/// The content of one grid cell.
#[derive(Debug, PartialEq)]
pub enum LayoutItem {
    /// The item is a nested layout.
    Layout(Box<Grid>),
    /// The item is a control owned by the host.
    Control(ChildRef),
}

impl From<ChildRef> for LayoutItem {
    fn from(child: ChildRef) -> Self {
        Self::Control(child)
    }
}

impl From<Grid> for LayoutItem {
    fn from(grid: Grid) -> Self {
        Self::Layout(Box::new(grid))
    }
}

impl From<ChildRef> for Option<LayoutItem> {
    fn from(child: ChildRef) -> Self {
        Some(LayoutItem::Control(child))
    }
}

impl From<Grid> for Option<LayoutItem> {
    fn from(grid: Grid) -> Self {
        Some(LayoutItem::from(grid))
    }
}

impl LayoutItem {
    /// Nested layouts are always visible; controls ask the host.
    pub(crate) fn is_visible(&self, host: &dyn LayoutHost) -> bool {
        match self {
            Self::Layout(_) => true,
            Self::Control(child) => host.is_visible(*child),
        }
    }

    pub(crate) fn measure(&mut self, host: &dyn LayoutHost, available: Size) -> Size {
        match self {
            Self::Layout(nested) => nested.measure(host, available),
            Self::Control(child) => host.measure(*child, available),
        }
    }

    pub(crate) fn place(
        &mut self,
        host: &dyn LayoutHost,
        origin: Point,
        size: Size,
        placements: &mut Vec<Placement>,
    ) {
        match self {
            Self::Layout(nested) => nested.arrange_at(host, origin, size, placements),
            Self::Control(child) => placements.push(Placement {
                child: *child,
                rect: Rect::from_edges(
                    origin.x,
                    origin.y,
                    origin.x + size.width,
                    origin.y + size.height,
                ),
            }),
        }
    }

    pub fn contains(&self, child: ChildRef) -> bool {
        match self {
            Self::Layout(nested) => nested.contains(child),
            Self::Control(c) => *c == child,
        }
    }

    pub(crate) fn children(&self) -> Vec<ChildRef> {
        let mut children = Vec::new();
        self.for_each_child(&mut |child| children.push(child));
        children
    }

    pub(crate) fn for_each_child(&self, f: &mut dyn FnMut(ChildRef)) {
        match self {
            Self::Layout(nested) => nested.for_each_child(f),
            Self::Control(child) => f(*child),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum HorizontalAlignment {
    #[default]
    Stretch,
    Left,
    Center,
    Right,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum VerticalAlignment {
    #[default]
    Stretch,
    Top,
    Center,
    Bottom,
}

/// Track lengths that position an item along one axis, and the index of
/// the item's track.
fn alignment_tracks(start: bool, center: bool, end: bool) -> (Vec<TableLength>, usize) {
    let auto = TableLength::Auto;
    let fill = TableLength::Star(1.0);
    if start {
        (vec![auto, fill], 0)
    } else if center {
        (vec![fill, auto, fill], 1)
    } else if end {
        (vec![fill, auto], 1)
    } else {
        (vec![fill], 0)
    }
}

/// Wraps `item` in a grid that keeps it at its natural size on the axes
/// that are not stretched. Stretched on both axes, `item` is returned as is.
pub fn align(
    item: LayoutItem,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
) -> LayoutItem {
    if horizontal == HorizontalAlignment::Stretch && vertical == VerticalAlignment::Stretch {
        return item;
    }

    let (columns, column) = alignment_tracks(
        horizontal == HorizontalAlignment::Left,
        horizontal == HorizontalAlignment::Center,
        horizontal == HorizontalAlignment::Right,
    );
    let (rows, row) = alignment_tracks(
        vertical == VerticalAlignment::Top,
        vertical == VerticalAlignment::Center,
        vertical == VerticalAlignment::Bottom,
    );

    let mut grid = Grid::new();
    for length in columns {
        grid.add_column(length);
    }
    for length in rows {
        grid.add_row(length, []);
    }
    grid.set_cell(column, row, item);
    LayoutItem::from(grid)
}
