//! Track sizing shared by the measure and arrange passes, and the measure
//! pass itself.
//!
//! Sizing runs in two sweeps over the cells. The first sweep measures every
//! cell that sits in at least one non-proportional track and grows the
//! `Auto` tracks to fit. What remains of the available space is then shared
//! among the `Star` tracks, and the second sweep measures the cells in star
//! tracks against their share. Star tracks finally grow together, so that
//! content overflowing one of them keeps the ratios between all of them.

use super::*;

/// Result of sizing the tracks of a grid for one pass.
#[derive(Clone, Debug)]
pub(crate) struct TrackSizing {
    pub column_lengths: Vec<TableLength>,
    pub row_lengths: Vec<TableLength>,
    /// Padding plus gaps between tracks.
    pub total_padding: Size,
    /// Space claimed by all tracks, padding excluded.
    pub required: Size,
    /// Sum of the star weights on each axis.
    pub weight: Size,
}

/// `weight`'s share of `space`. Zero when there is nothing to share by.
pub(crate) fn star_share(space: f64, weight: f64, total_weight: f64) -> f64 {
    if weight > 0.0 && total_weight > 0.0 {
        space * weight / total_weight
    } else {
        0.0
    }
}

impl Grid {
    /// Preferred size of the grid when given `available` space, padding
    /// included.
    ///
    /// Only `measure_size` of the tracks is written; the arranged sizes are
    /// left untouched.
    pub fn measure(&mut self, host: &dyn LayoutHost, available: Size) -> Size {
        let sizing = self.size_tracks(host, available, Pass::Measure);
        sizing.required.grow(sizing.total_padding)
    }

    pub(crate) fn size_tracks(
        &mut self,
        host: &dyn LayoutHost,
        available: Size,
        pass: Pass,
    ) -> TrackSizing {
        let total_padding = self.total_padding();
        let avail_children = available.shrink(total_padding);

        let column_lengths = Grid::effective_lengths(&self.columns);
        let row_lengths = Grid::effective_lengths(&self.rows);

        let Grid {
            columns,
            rows,
            cells,
            ..
        } = self;

        let mut required = Size::ZERO;
        let mut weight = Size::ZERO;
        seed_tracks(columns, &column_lengths, pass, &mut required.width, &mut weight.width);
        seed_tracks(rows, &row_lengths, pass, &mut required.height, &mut weight.height);

        // Cells touching at least one non-star track.
        for (y, row_cells) in cells.iter_mut().enumerate() {
            let row_length = row_lengths[y];
            for (x, slot) in row_cells.iter_mut().enumerate() {
                let Some(item) = slot else {
                    continue;
                };
                let column_length = column_lengths[x];
                if column_length.is_star() && row_length.is_star() {
                    continue;
                }
                if !item.is_visible(host) {
                    continue;
                }

                let size = item.measure(host, avail_children);
                if column_length.is_auto() {
                    grow_track(&mut columns[x], pass, size.width, &mut required.width);
                }
                if row_length.is_auto() {
                    grow_track(&mut rows[y], pass, size.height, &mut required.height);
                }
            }
        }

        let avail_star = avail_children.shrink(required);

        // Cells touching at least one star track.
        for (y, row_cells) in cells.iter_mut().enumerate() {
            let row_length = row_lengths[y];
            for (x, slot) in row_cells.iter_mut().enumerate() {
                let Some(item) = slot else {
                    continue;
                };
                let column_length = column_lengths[x];
                if !column_length.is_star() && !row_length.is_star() {
                    continue;
                }
                if !item.is_visible(host) {
                    continue;
                }

                let cell_available = Size::new(
                    if column_length.is_star() {
                        star_share(avail_star.width, column_length.value(), weight.width)
                    } else {
                        *columns[x].size_mut(pass)
                    },
                    if row_length.is_star() {
                        star_share(avail_star.height, row_length.value(), weight.height)
                    } else {
                        *rows[y].size_mut(pass)
                    },
                );

                let size = item.measure(host, cell_available);
                if column_length.is_star() {
                    let track = columns[x].size_mut(pass);
                    *track = track.max(size.width);
                }
                if row_length.is_star() {
                    let track = rows[y].size_mut(pass);
                    *track = track.max(size.height);
                }
            }
        }

        required.width += reconcile_stars(columns, &column_lengths, pass, weight.width);
        required.height += reconcile_stars(rows, &row_lengths, pass, weight.height);

        TrackSizing {
            column_lengths,
            row_lengths,
            total_padding,
            required,
            weight,
        }
    }
}

fn seed_tracks(
    tracks: &mut [Track],
    lengths: &[TableLength],
    pass: Pass,
    required: &mut f64,
    weight: &mut f64,
) {
    for (track, length) in tracks.iter_mut().zip(lengths) {
        let seed = match length {
            TableLength::Fixed(_) => length.value(),
            _ => 0.0,
        };
        *track.size_mut(pass) = seed;
        *required += seed;
        if length.is_star() {
            *weight += length.value();
        }
    }
}

fn grow_track(track: &mut Track, pass: Pass, content: f64, required: &mut f64) {
    let size = track.size_mut(pass);
    if content > *size {
        *required += content - *size;
        *size = content;
    }
}

/// Scales every star track to the largest total implied by any one of them
/// and returns that total.
fn reconcile_stars(
    tracks: &mut [Track],
    lengths: &[TableLength],
    pass: Pass,
    total_weight: f64,
) -> f64 {
    let stars = || {
        lengths
            .iter()
            .enumerate()
            .filter(|(_, length)| length.is_star())
            .map(|(index, length)| (index, length.value()))
    };

    let mut implied_total: f64 = 0.0;
    if total_weight > 0.0 {
        for (index, weight) in stars() {
            if weight > 0.0 {
                let size = *tracks[index].size_mut(pass);
                implied_total = implied_total.max(size * total_weight / weight);
            }
        }
    }

    for (index, weight) in stars() {
        *tracks[index].size_mut(pass) = star_share(implied_total, weight, total_weight);
    }

    implied_total
}
