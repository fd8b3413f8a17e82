use super::*;

/// Places `items` left to right, starting a new row every `per_row` items.
///
/// Items keep their natural size and are packed into the top-left corner;
/// columns line up across rows.
pub fn flow<I>(items: I, per_row: usize, spacing: Size) -> Grid
where
    I: IntoIterator,
    I::Item: Into<LayoutItem>,
{
    let per_row = per_row.max(1);
    let mut grid = Grid::new();
    grid.set_spacing(spacing);

    let mut row = Vec::with_capacity(per_row);
    for item in items {
        row.push(Some(align(
            item.into(),
            HorizontalAlignment::Left,
            VerticalAlignment::Top,
        )));
        if row.len() == per_row {
            grid.add_row(TableLength::Auto, core::mem::take(&mut row));
        }
    }
    if !row.is_empty() {
        grid.add_row(TableLength::Auto, row);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestHost;

    #[test]
    fn test_flow_wraps() {
        let mut host = TestHost::new();
        let items: Vec<ChildRef> = (0..5).map(|_| host.add(Size::new(20.0, 10.0))).collect();
        let mut grid = flow(items.clone(), 2, Size::new(5.0, 5.0));

        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.measure(&host, Size::INFINITE), Size::new(45.0, 40.0));

        let placements = grid.arrange(&host, Size::new(200.0, 200.0));
        let rects: Vec<Rect> = placements.iter().map(|p| p.rect).collect();
        assert_eq!(
            rects,
            vec![
                Rect::new(0, 0, 20, 10),
                Rect::new(25, 0, 20, 10),
                Rect::new(0, 15, 20, 10),
                Rect::new(25, 15, 20, 10),
                Rect::new(0, 30, 20, 10),
            ]
        );
        assert_eq!(placements[4].child, items[4]);
    }

    #[test]
    fn test_flow_zero_per_row_is_one_column() {
        let mut host = TestHost::new();
        let a = host.add(Size::new(20.0, 10.0));
        let b = host.add(Size::new(20.0, 10.0));
        let grid = flow([a, b], 0, Size::ZERO);
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.row_count(), 2);
    }
}
