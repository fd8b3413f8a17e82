//! End-to-end layouts driven through a recording host.

use forms_layout::*;
use std::cell::Cell;
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
struct RecordingHost {
    preferred: HashMap<ChildRef, Size>,
    hidden: Vec<ChildRef>,
    measure_calls: Cell<usize>,
    placed: HashMap<ChildRef, Rect>,
}

impl RecordingHost {
    fn control(&mut self, width: f64, height: f64) -> ChildRef {
        let child = ChildRef::new(self.preferred.len() as u64 + 1);
        self.preferred.insert(child, Size::new(width, height));
        child
    }
}

impl LayoutHost for RecordingHost {
    fn measure(&self, child: ChildRef, _available: Size) -> Size {
        self.measure_calls.set(self.measure_calls.get() + 1);
        self.preferred[&child]
    }

    fn is_visible(&self, child: ChildRef) -> bool {
        !self.hidden.contains(&child)
    }

    fn arrange(&mut self, child: ChildRef, rect: Rect) {
        self.placed.insert(child, rect);
    }
}

fn actual_sizes(tracks: &[Track]) -> Vec<f64> {
    tracks.iter().map(Track::actual_size).collect()
}

#[test]
fn auto_column_then_star_column() {
    init_logging();
    let mut host = RecordingHost::default();
    let label = host.control(40.0, 20.0);
    let field = host.control(10.0, 10.0);

    let container = GridContainer::new();
    container.add_column(TableLength::Auto);
    container.add_column(TableLength::Star(1.0));
    container.add_row(TableLength::Auto, [label.into(), field.into()]);

    assert!(container.resize(Size::new(200.0, 20.0), &mut host));
    assert_eq!(actual_sizes(container.grid().columns()), vec![40.0, 160.0]);
    assert_eq!(host.placed[&label], Rect::new(0, 0, 40, 20));
    assert_eq!(host.placed[&field], Rect::new(40, 0, 160, 20));
}

#[test]
fn weighted_rows_around_an_auto_row() {
    init_logging();
    let mut host = RecordingHost::default();
    let top = host.control(10.0, 5.0);
    let middle = host.control(10.0, 5.0);
    let bottom = host.control(10.0, 30.0);

    let mut grid = Grid::new();
    grid.add_column(TableLength::Star(1.0));
    grid.add_row(TableLength::Star(1.0), [top.into()]);
    grid.add_row(TableLength::Star(2.0), [middle.into()]);
    grid.add_row(TableLength::Auto, [bottom.into()]);
    let container = GridContainer::from_grid(grid);

    container.resize(Size::new(100.0, 130.0), &mut host);

    let rows = actual_sizes(container.grid().rows());
    assert_eq!(rows[2], 30.0);
    assert!((rows[0] - 100.0 / 3.0).abs() < 1e-9);
    assert!((rows[1] - 200.0 / 3.0).abs() < 1e-9);
    assert!((rows.iter().sum::<f64>() - 130.0).abs() < 1e-9);

    assert_eq!(host.placed[&top], Rect::new(0, 0, 100, 33));
    assert_eq!(host.placed[&middle], Rect::new(0, 33, 100, 67));
    assert_eq!(host.placed[&bottom], Rect::new(0, 100, 100, 30));
}

#[test]
fn measure_is_repeatable() {
    let mut host = RecordingHost::default();
    let a = host.control(30.0, 12.0);
    let b = host.control(55.0, 8.0);
    let mut grid = Grid::new();
    grid.set_padding(Padding::uniform(4.0));
    grid.add_column(TableLength::Auto);
    grid.add_column(TableLength::Star(1.0));
    grid.add_row(TableLength::Auto, [a.into(), b.into()]);

    let available = Size::new(120.0, 60.0);
    let first = grid.measure(&host, available);
    let first_tracks = actual_sizes(grid.columns());
    let second = grid.measure(&host, available);
    assert_eq!(first, second);
    assert_eq!(first_tracks, actual_sizes(grid.columns()));
}

#[test]
fn more_space_never_shrinks_tracks() {
    let mut host = RecordingHost::default();
    let a = host.control(30.0, 10.0);
    let b = host.control(20.0, 10.0);
    let mut grid = Grid::new();
    grid.add_column(TableLength::Fixed(25.0));
    grid.add_column(TableLength::Auto);
    grid.add_column(TableLength::Star(1.0));
    grid.add_row(TableLength::Auto, [None, a.into(), b.into()]);

    let mut previous_required = Size::ZERO;
    let mut previous_star = 0.0;
    for width in [10.0, 60.0, 75.0, 120.0, 500.0] {
        let required = grid.measure(&host, Size::new(width, 10.0));
        grid.arrange(&host, Size::new(width, 10.0));
        let star = grid.columns()[2].actual_size();
        assert!(required.width >= previous_required.width);
        assert!(star >= previous_star);
        previous_required = required;
        previous_star = star;
    }
}

#[test]
fn tracks_fill_a_large_enough_container() {
    let mut host = RecordingHost::default();
    let a = host.control(30.0, 10.0);
    let mut grid = Grid::new();
    grid.set_padding(Padding::new(3.0, 0.0, 7.0, 0.0));
    grid.add_column(TableLength::Fixed(25.0));
    grid.add_column(TableLength::Auto);
    grid.add_column(TableLength::Star(2.0));
    grid.add_row(TableLength::Auto, [None, a.into()]);

    let required = grid.measure(&host, Size::INFINITE);
    for width in [required.width, required.width + 1.5, 400.0] {
        grid.arrange(&host, Size::new(width, 10.0));
        let total: f64 = actual_sizes(grid.columns()).iter().sum();
        assert!((total + grid.padding().horizontal() - width).abs() < 1e-9);
    }
}

#[test]
fn star_columns_keep_their_ratio() {
    let host = RecordingHost::default();
    let mut grid = Grid::new();
    grid.add_column(TableLength::Star(1.0));
    grid.add_column(TableLength::Star(3.0));
    grid.add_row(TableLength::Auto, []);

    for width in [40.0, 101.0, 999.0] {
        grid.arrange(&host, Size::new(width, 10.0));
        let columns = actual_sizes(grid.columns());
        assert!((columns[1] / columns[0] - 3.0).abs() < 1e-9);
    }
}

#[test]
fn empty_grid_measures_to_its_padding() {
    let host = RecordingHost::default();
    let mut grid = Grid::with_dimensions(1, 1);
    grid.set_padding(Padding::uniform(5.0));
    for available in [Size::ZERO, Size::new(3.0, 300.0), Size::INFINITE] {
        assert_eq!(grid.measure(&host, available), Size::new(10.0, 10.0));
    }
}

#[test]
fn hidden_controls_are_not_moved() {
    let mut host = RecordingHost::default();
    let shown = host.control(10.0, 10.0);
    let hidden = host.control(10.0, 10.0);
    host.hidden.push(hidden);

    let container = GridContainer::new();
    container.add_row(TableLength::Auto, [hidden.into(), shown.into()]);
    container.resize(Size::new(50.0, 50.0), &mut host);

    assert!(!host.placed.contains_key(&hidden));
    assert!(host.placed.contains_key(&shown));
}

#[test]
fn preferred_size_is_cached_until_invalidated() {
    let mut host = RecordingHost::default();
    let a = host.control(30.0, 10.0);
    let container = GridContainer::new();
    container.add_row(TableLength::Auto, [a.into()]);

    let available = Size::new(100.0, 100.0);
    let first = container.get_preferred_size(&host, available);
    let calls = host.measure_calls.get();
    assert_eq!(container.get_preferred_size(&host, available), first);
    assert_eq!(host.measure_calls.get(), calls);

    container.invalidate();
    assert_eq!(container.get_preferred_size(&host, available), first);
    assert!(host.measure_calls.get() > calls);
}

#[test]
fn form_built_from_adapters() {
    init_logging();
    let mut host = RecordingHost::default();
    let name_label = host.control(50.0, 20.0);
    let name_field = host.control(120.0, 20.0);
    let ok = host.control(60.0, 24.0);

    let mut buttons = StackLayout::new(Orientation::Horizontal);
    buttons.add(StackItem::new(ok));

    let mut form = DynamicLayout::new();
    form.padding(Padding::uniform(8.0))
        .spacing(Size::new(4.0, 4.0))
        .add_row(DynamicRow::new([name_label, name_field]))
        .add_separate_row(DynamicRow::new([buttons.build()]));
    let container = GridContainer::from_grid(form.build());

    let preferred = container.get_preferred_size(&host, Size::INFINITE);
    assert_eq!(preferred, Size::new(190.0, 64.0));

    container.resize(Size::new(300.0, 200.0), &mut host);
    assert_eq!(host.placed[&name_label], Rect::new(8, 8, 50, 20));
    assert_eq!(host.placed[&name_field].x, 62);
    assert_eq!(host.placed[&name_field].right(), 292);
    assert_eq!(host.placed[&ok], Rect::new(8, 32, 60, 160));
}
