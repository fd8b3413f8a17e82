use super::*;

/// One row or column of a [`Grid`].
///
/// `measure_size` is scratch space for [`Grid::measure`] and `actual_size`
/// the result of the last [`Grid::arrange`]. Both are overwritten on every
/// pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Track {
    length: TableLength,
    pub(crate) measure_size: f64,
    pub(crate) actual_size: f64,
}

pub type TableColumn = Track;
pub type TableRow = Track;

impl Track {
    pub fn new(length: TableLength) -> Self {
        Self {
            length,
            measure_size: 0.0,
            actual_size: 0.0,
        }
    }

    pub fn length(&self) -> TableLength {
        self.length
    }

    pub fn set_length(&mut self, length: TableLength) {
        self.length = length;
    }

    pub fn measure_size(&self) -> f64 {
        self.measure_size
    }

    pub fn actual_size(&self) -> f64 {
        self.actual_size
    }

    pub(crate) fn size_mut(&mut self, pass: Pass) -> &mut f64 {
        match pass {
            Pass::Measure => &mut self.measure_size,
            Pass::Arrange => &mut self.actual_size,
        }
    }
}

impl From<TableLength> for Track {
    fn from(length: TableLength) -> Self {
        Self::new(length)
    }
}

/// Which track field a sizing pass writes to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Pass {
    Measure,
    Arrange,
}

/// Rows and columns of cells, each holding at most one [`LayoutItem`].
///
/// Rows may be shorter than the column list; the missing cells are empty.
/// Columns are added whenever a row grows wider than the grid, never
/// removed.
#[derive(Debug, Default, PartialEq)]
pub struct Grid {
    pub(crate) columns: Vec<Track>,
    pub(crate) rows: Vec<Track>,
    pub(crate) cells: Vec<Vec<Option<LayoutItem>>>,
    pub(crate) padding: Padding,
    pub(crate) spacing: Size,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `columns` x `rows` grid of empty cells with `Auto` tracks.
    pub fn with_dimensions(columns: usize, rows: usize) -> Self {
        let mut grid = Self::new();
        for _ in 0..columns {
            grid.add_column(TableLength::Auto);
        }
        for _ in 0..rows {
            grid.add_row(TableLength::Auto, []);
        }
        grid
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    /// Horizontal gap between columns and vertical gap between rows.
    pub fn spacing(&self) -> Size {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: Size) {
        self.spacing = spacing;
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn add_column(&mut self, length: TableLength) -> usize {
        self.columns.push(Track::new(length));
        self.columns.len() - 1
    }

    /// Appends a row. Columns are added if `cells` is wider than the grid.
    pub fn add_row<I>(&mut self, length: TableLength, cells: I) -> usize
    where
        I: IntoIterator<Item = Option<LayoutItem>>,
    {
        let mut row: Vec<Option<LayoutItem>> = cells.into_iter().collect();
        // Each control may only appear once in a grid.
        for index in 0..row.len() {
            let Some(item) = &row[index] else {
                continue;
            };
            for child in item.children() {
                self.take_child(child);
                let duplicate = row[..index]
                    .iter()
                    .flatten()
                    .any(|earlier| earlier.contains(child));
                if duplicate {
                    match &mut row[index] {
                        Some(LayoutItem::Layout(nested)) => {
                            nested.take_child(child);
                        }
                        slot => *slot = None,
                    }
                }
            }
        }
        self.rows.push(Track::new(length));
        self.cells.push(row);
        self.grow_columns();
        self.rows.len() - 1
    }

    /// Sets the length of column `index`. Out of range indices are ignored.
    pub fn set_column_length(&mut self, index: usize, length: TableLength) -> bool {
        match self.columns.get_mut(index) {
            Some(track) => {
                track.set_length(length);
                true
            }
            None => false,
        }
    }

    pub fn set_row_length(&mut self, index: usize, length: TableLength) -> bool {
        match self.rows.get_mut(index) {
            Some(track) => {
                track.set_length(length);
                true
            }
            None => false,
        }
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<&LayoutItem> {
        self.cells.get(row)?.get(column)?.as_ref()
    }

    pub fn cell_mut(&mut self, column: usize, row: usize) -> Option<&mut LayoutItem> {
        self.cells.get_mut(row)?.get_mut(column)?.as_mut()
    }

    /// Places `item` at (`column`, `row`) and returns the previous occupant.
    ///
    /// Missing rows are added as `Auto`, and columns grow to fit. A control
    /// that already sits elsewhere in this grid (at any depth) is moved
    /// rather than duplicated.
    pub fn set_cell(
        &mut self,
        column: usize,
        row: usize,
        item: impl Into<Option<LayoutItem>>,
    ) -> Option<LayoutItem> {
        let item = item.into();
        if let Some(incoming) = &item {
            for child in incoming.children() {
                let elsewhere = self
                    .position_of(child)
                    .is_some_and(|position| position != (column, row));
                if elsewhere {
                    self.take_child(child);
                }
            }
        }

        while self.rows.len() <= row {
            self.rows.push(Track::new(TableLength::Auto));
            self.cells.push(Vec::new());
        }
        let cells = &mut self.cells[row];
        if cells.len() <= column {
            cells.resize_with(column + 1, || None);
        }
        let previous = core::mem::replace(&mut cells[column], item);
        self.grow_columns();
        previous
    }

    /// Empties the cell at (`column`, `row`), returning what was there.
    pub fn take_cell(&mut self, column: usize, row: usize) -> Option<LayoutItem> {
        self.cells.get_mut(row)?.get_mut(column)?.take()
    }

    /// Location of the top-level cell holding `child`, directly or inside a
    /// nested layout.
    pub fn position_of(&self, child: ChildRef) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(y, row)| {
            row.iter()
                .position(|cell| cell.as_ref().is_some_and(|item| item.contains(child)))
                .map(|x| (x, y))
        })
    }

    pub fn contains(&self, child: ChildRef) -> bool {
        self.position_of(child).is_some()
    }

    /// Every control in the grid, nested layouts included, in row order.
    pub fn children(&self) -> Vec<ChildRef> {
        let mut children = Vec::new();
        self.for_each_child(&mut |child| children.push(child));
        children
    }

    pub(crate) fn for_each_child(&self, f: &mut dyn FnMut(ChildRef)) {
        for item in self.cells.iter().flatten().flatten() {
            item.for_each_child(f);
        }
    }

    /// Removes `child` wherever it is, without disturbing the cells around
    /// it. Returns whether it was found.
    pub(crate) fn take_child(&mut self, child: ChildRef) -> bool {
        for slot in self.cells.iter_mut().flatten() {
            if matches!(slot, Some(LayoutItem::Control(c)) if *c == child) {
                *slot = None;
                return true;
            }
            if let Some(LayoutItem::Layout(nested)) = slot {
                if nested.take_child(child) {
                    return true;
                }
            }
        }
        false
    }

    fn grow_columns(&mut self) {
        let widest = self.cells.iter().map(Vec::len).max().unwrap_or(0);
        if widest > self.columns.len() {
            trace!(
                "growing columns from {} to {} to fit widest row",
                self.columns.len(),
                widest
            );
            self.columns.resize_with(widest, || Track::new(TableLength::Auto));
        }
    }

    /// Track lengths with the last-track fallback applied: an axis without
    /// any `Star` track lets its last track absorb leftover space, unless
    /// that track is `Fixed`.
    pub(crate) fn effective_lengths(tracks: &[Track]) -> Vec<TableLength> {
        let mut lengths: Vec<TableLength> = tracks.iter().map(Track::length).collect();
        if !lengths.iter().any(TableLength::is_star) {
            if let Some(last) = lengths.last_mut() {
                if last.is_auto() {
                    *last = TableLength::Star(1.0);
                }
            }
        }
        lengths
    }

    /// Padding plus the gaps between tracks.
    pub(crate) fn total_padding(&self) -> Size {
        let gaps = |count: usize| count.saturating_sub(1) as f64;
        Size::new(
            self.padding.horizontal() + self.spacing.width * gaps(self.columns.len()),
            self.padding.vertical() + self.spacing.height * gaps(self.rows.len()),
        )
    }
}
