//! Lays out a small form at a few window sizes and prints where each
//! control ends up. Run with `RUST_LOG=forms_layout=trace` to watch the
//! engine work.

use forms_layout::*;
use std::collections::BTreeMap;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Stands in for a real toolkit: every control has a fixed preferred size.
struct FakeHost {
    controls: BTreeMap<ChildRef, (&'static str, Size)>,
    placed: Vec<(ChildRef, Rect)>,
}

impl FakeHost {
    fn new() -> Self {
        Self {
            controls: BTreeMap::new(),
            placed: Vec::new(),
        }
    }

    fn control(&mut self, name: &'static str, width: f64, height: f64) -> ChildRef {
        let child = ChildRef::new(self.controls.len() as u64 + 1);
        self.controls.insert(child, (name, Size::new(width, height)));
        child
    }

    fn name(&self, child: ChildRef) -> &'static str {
        self.controls.get(&child).map_or("?", |(name, _)| name)
    }
}

impl LayoutHost for FakeHost {
    fn measure(&self, child: ChildRef, _available: Size) -> Size {
        self.controls
            .get(&child)
            .map_or(Size::ZERO, |(_, size)| *size)
    }

    fn arrange(&mut self, child: ChildRef, rect: Rect) {
        self.placed.push((child, rect));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut host = FakeHost::new();

    let name_label = host.control("name label", 60.0, 20.0);
    let name_box = host.control("name box", 150.0, 22.0);
    let notes_label = host.control("notes label", 45.0, 20.0);
    let notes_box = host.control("notes box", 150.0, 80.0);
    let ok = host.control("ok", 75.0, 25.0);
    let cancel = host.control("cancel", 75.0, 25.0);
    let status = host.control("status", 120.0, 18.0);

    let status = align(
        status.into(),
        HorizontalAlignment::Left,
        VerticalAlignment::Center,
    );
    let mut buttons = StackLayout::new(Orientation::Horizontal).with(|s| {
        s.spacing = 6.0;
    });
    buttons
        .add(StackItem::new(status).expand())
        .add(StackItem::new(ok))
        .add(StackItem::new(cancel));

    let mut form = DynamicLayout::new();
    form.padding(Padding::uniform(10.0))
        .spacing(Size::new(8.0, 6.0))
        .add_row(DynamicRow::new([name_label, name_box]))
        .add_row(DynamicRow::new([notes_label, notes_box]).scaled())
        .add_separate_row(DynamicRow::new([buttons.build()]));

    let container = GridContainer::builder().build_with(form.build());

    let preferred = container.get_preferred_size(&host, Size::INFINITE);
    info!("preferred size: {} x {}", preferred.width, preferred.height);
    println!("preferred: {} x {}", preferred.width, preferred.height);

    let sizes = [
        (preferred.width, preferred.height),
        (400.0, 260.0),
        (640.0, 480.0),
    ];
    for (width, height) in sizes {
        host.placed.clear();
        container.resize(Size::new(width, height), &mut host);

        println!();
        println!("window {} x {}", width, height);
        for &(child, rect) in &host.placed {
            println!(
                "  {:<12} x={:<4} y={:<4} w={:<4} h={:<4}",
                host.name(child),
                rect.x,
                rect.y,
                rect.width,
                rect.height
            );
        }
    }
}
