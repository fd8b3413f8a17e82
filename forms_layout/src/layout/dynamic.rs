//! Forms described row by row.
//!
//! Consecutive rows share their columns, like a table, so labels and fields
//! line up. A "separate" row gets columns of its own and does not disturb
//! the alignment of the rows around it.

use super::*;

#[derive(Debug, Default)]
pub struct DynamicRow {
    pub items: Vec<Option<LayoutItem>>,
    /// The row takes a share of the leftover height.
    pub scale: bool,
}

impl DynamicRow {
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<LayoutItem>>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            scale: false,
        }
    }

    pub fn scaled(mut self) -> Self {
        self.scale = true;
        self
    }
}

#[derive(Debug)]
enum Section {
    Table(Vec<DynamicRow>),
    Separate(DynamicRow),
}

#[derive(Debug, Default)]
pub struct DynamicLayout {
    sections: Vec<Section>,
    padding: Padding,
    spacing: Size,
}

impl DynamicLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn padding(&mut self, padding: Padding) -> &mut Self {
        self.padding = padding;
        self
    }

    pub fn spacing(&mut self, spacing: Size) -> &mut Self {
        self.spacing = spacing;
        self
    }

    /// Adds a row whose columns line up with the rows around it.
    pub fn add_row(&mut self, row: DynamicRow) -> &mut Self {
        match self.sections.last_mut() {
            Some(Section::Table(rows)) => rows.push(row),
            _ => self.sections.push(Section::Table(vec![row])),
        }
        self
    }

    /// Adds a row with columns of its own.
    pub fn add_separate_row(&mut self, row: DynamicRow) -> &mut Self {
        self.sections.push(Section::Separate(row));
        self
    }

    pub fn build(self) -> Grid {
        let DynamicLayout {
            mut sections,
            padding,
            spacing,
        } = self;

        if matches!(sections.as_slice(), [Section::Table(_)]) {
            if let Some(Section::Table(rows)) = sections.pop() {
                let mut grid = table(rows, spacing);
                grid.set_padding(padding);
                return grid;
            }
        }

        let mut grid = Grid::new();
        grid.set_padding(padding);
        grid.set_spacing(spacing);
        grid.add_column(TableLength::Star(1.0));
        for section in sections {
            let (rows, scale) = match section {
                Section::Table(rows) => {
                    let scale = rows.iter().any(|row| row.scale);
                    (rows, scale)
                }
                Section::Separate(row) => {
                    let scale = row.scale;
                    (vec![row], scale)
                }
            };
            let length = if scale {
                TableLength::Star(1.0)
            } else {
                TableLength::Auto
            };
            grid.add_row(length, [Some(LayoutItem::from(table(rows, spacing)))]);
        }
        grid
    }
}

fn table(rows: Vec<DynamicRow>, spacing: Size) -> Grid {
    let mut grid = Grid::new();
    grid.set_spacing(spacing);
    for row in rows {
        let length = if row.scale {
            TableLength::Star(1.0)
        } else {
            TableLength::Auto
        };
        grid.add_row(length, row.items);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestHost;

    #[test]
    fn test_rows_share_columns() {
        let mut host = TestHost::new();
        let name_label = host.add(Size::new(40.0, 10.0));
        let name_field = host.add(Size::new(100.0, 10.0));
        let address_label = host.add(Size::new(60.0, 10.0));
        let address_field = host.add(Size::new(100.0, 10.0));
        let mut layout = DynamicLayout::new();
        layout
            .add_row(DynamicRow::new([name_label, name_field]))
            .add_row(DynamicRow::new([address_label, address_field]));
        let mut grid = layout.build();

        assert_eq!(grid.column_count(), 2);
        let placements = grid.arrange(&host, Size::new(300.0, 100.0));
        assert_eq!(placements[1].rect, Rect::new(60, 0, 240, 10));
        assert_eq!(placements[3].rect, Rect::new(60, 10, 240, 90));
    }

    #[test]
    fn test_jagged_rows_grow_columns() {
        let mut host = TestHost::new();
        let a = host.add(Size::new(10.0, 10.0));
        let b = host.add(Size::new(10.0, 10.0));
        let c = host.add(Size::new(10.0, 10.0));
        let mut layout = DynamicLayout::new();
        layout
            .add_row(DynamicRow::new([a]))
            .add_row(DynamicRow::new([
                Some(LayoutItem::from(b)),
                None,
                Some(LayoutItem::from(c)),
            ]));
        let grid = layout.build();
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.row_count(), 2);
    }

    #[test]
    fn test_separate_row_keeps_own_columns() {
        let mut host = TestHost::new();
        let label = host.add(Size::new(80.0, 10.0));
        let field = host.add(Size::new(50.0, 10.0));
        let ok = host.add(Size::new(20.0, 10.0));
        let cancel = host.add(Size::new(30.0, 10.0));
        let mut layout = DynamicLayout::new();
        layout
            .spacing(Size::new(0.0, 4.0))
            .add_row(DynamicRow::new([label, field]))
            .add_separate_row(DynamicRow::new([ok, cancel]).scaled());
        let mut grid = layout.build();

        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.measure(&host, Size::INFINITE), Size::new(130.0, 24.0));

        let placements = grid.arrange(&host, Size::new(200.0, 54.0));
        // The separate row is not pushed right by the 80 pixel label.
        assert_eq!(placements[2], Placement::new(ok, Rect::new(0, 14, 20, 40)));
        assert_eq!(
            placements[3],
            Placement::new(cancel, Rect::new(20, 14, 180, 40))
        );
    }
}
