use super::*;
use super::measure::star_share;

impl Grid {
    /// Lays the grid out in `size` and returns where every visible control
    /// goes, in row order.
    ///
    /// Track sizes are recomputed for `size` rather than taken from an
    /// earlier [`Grid::measure`]. Star tracks then split whatever space the
    /// other tracks leave; when there is none they collapse to zero.
    pub fn arrange(&mut self, host: &dyn LayoutHost, size: Size) -> Vec<Placement> {
        let mut placements = Vec::new();
        self.arrange_at(host, Point::ORIGIN, size, &mut placements);
        placements
    }

    pub(crate) fn arrange_at(
        &mut self,
        host: &dyn LayoutHost,
        origin: Point,
        size: Size,
        placements: &mut Vec<Placement>,
    ) {
        let sizing = self.size_tracks(host, size, Pass::Arrange);

        distribute_leftover(
            &mut self.columns,
            &sizing.column_lengths,
            size.width - sizing.total_padding.width,
            sizing.weight.width,
        );
        distribute_leftover(
            &mut self.rows,
            &sizing.row_lengths,
            size.height - sizing.total_padding.height,
            sizing.weight.height,
        );

        let Grid {
            columns,
            rows,
            cells,
            padding,
            spacing,
        } = self;

        let mut y = origin.y + padding.top;
        for (row, row_cells) in rows.iter().zip(cells.iter_mut()) {
            let mut x = origin.x + padding.left;
            for (index, column) in columns.iter().enumerate() {
                let slot = row_cells.get_mut(index).and_then(Option::as_mut);
                if let Some(item) = slot {
                    if item.is_visible(host) {
                        item.place(
                            host,
                            Point::new(x, y),
                            Size::new(column.actual_size, row.actual_size),
                            placements,
                        );
                    }
                }
                x += column.actual_size + spacing.width;
            }
            y += row.actual_size + spacing.height;
        }
    }
}

/// Gives each star track its weighted share of `content` minus the
/// non-star tracks.
fn distribute_leftover(
    tracks: &mut [Track],
    lengths: &[TableLength],
    content: f64,
    total_weight: f64,
) {
    let claimed: f64 = tracks
        .iter()
        .zip(lengths)
        .filter(|(_, length)| !length.is_star())
        .map(|(track, _)| track.actual_size)
        .sum();
    let leftover = (content - claimed).max(0.0);

    for (track, length) in tracks.iter_mut().zip(lengths) {
        if length.is_star() {
            track.actual_size = star_share(leftover, length.value(), total_weight);
        }
    }
}
