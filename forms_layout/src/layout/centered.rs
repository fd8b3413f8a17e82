use super::*;

/// A grid that keeps `item` at its natural size in the middle of whatever
/// space it is given.
pub fn centered(item: impl Into<LayoutItem>) -> Grid {
    let item: LayoutItem = item.into();
    let mut grid = Grid::new();
    let fill = TableLength::Star(1.0);
    for length in [fill, TableLength::Auto, fill] {
        grid.add_column(length);
        grid.add_row(length, []);
    }
    grid.set_cell(1, 1, item);
    grid
}
