use super::cache::MeasureCache;
use super::*;
use std::cell::Ref;

/// Owns a [`Grid`] on behalf of a host control and runs layout when the
/// host asks for it.
///
/// All methods take `&self` so that the container can sit behind an `Rc`
/// shared with the host. The host's callbacks may call back into the
/// container while an update is running; a nested [`update`] is dropped,
/// and the outer update's result stands.
///
/// [`update`]: GridContainer::update
pub struct GridContainer {
    grid: RefCell<Grid>,
    size: Cell<Size>,
    in_update: Cell<bool>,
    cache: RefCell<MeasureCache>,
    cache_measurements: bool,
    thread: StuckToThread,
}

assert_not_impl_any!(GridContainer: Send, Sync);

impl Default for GridContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl GridContainer {
    pub fn new() -> Self {
        Self::from_grid(Grid::new())
    }

    pub fn builder() -> GridContainerBuilder {
        GridContainerBuilder::default()
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid: RefCell::new(grid),
            size: Cell::new(Size::ZERO),
            in_update: Cell::new(false),
            cache: RefCell::new(MeasureCache::default()),
            cache_measurements: true,
            thread: StuckToThread::new(),
        }
    }

    /// Read access to the grid, e.g. to inspect track sizes after an update.
    ///
    /// # Panics
    ///
    /// If called from inside a [`LayoutHost::measure`] callback issued by
    /// this container.
    pub fn grid(&self) -> Ref<'_, Grid> {
        self.grid.borrow()
    }

    /// The size the last [`update`](Self::update) laid the grid out in.
    pub fn size(&self) -> Size {
        self.size.get()
    }

    pub fn is_updating(&self) -> bool {
        self.in_update.get()
    }

    fn edit_grid<R>(&self, f: impl FnOnce(&mut Grid) -> R) -> R {
        self.thread.check();
        let result = {
            let mut grid = self.grid.borrow_mut();
            f(&mut *grid)
        };
        self.invalidate();
        result
    }

    /// Applies an arbitrary structural change to the grid.
    pub fn edit<R>(&self, f: impl FnOnce(&mut Grid) -> R) -> R {
        self.edit_grid(f)
    }

    /// Replaces the content of a cell.
    ///
    /// The swap happens in one step; only then is the host told about the
    /// controls that left the grid. A control moved from another cell of
    /// this grid is not detached. Returns the previous occupant.
    pub fn set_cell(
        &self,
        column: usize,
        row: usize,
        item: impl Into<Option<LayoutItem>>,
        host: &mut dyn LayoutHost,
    ) -> Option<LayoutItem> {
        let item = item.into();
        let (previous, removed) = self.edit_grid(|grid| {
            let previous = grid.set_cell(column, row, item);
            let removed = departed_children(grid, previous.as_ref());
            (previous, removed)
        });

        debug!(
            "set_cell({}, {}): {} control(s) removed",
            column,
            row,
            removed.len()
        );
        for child in removed {
            host.detach(child);
        }
        previous
    }

    /// Empties a cell, detaching whatever controls it held.
    pub fn take_cell(
        &self,
        column: usize,
        row: usize,
        host: &mut dyn LayoutHost,
    ) -> Option<LayoutItem> {
        self.set_cell(column, row, None::<LayoutItem>, host)
    }

    pub fn add_column(&self, length: TableLength) -> usize {
        self.edit_grid(|grid| grid.add_column(length))
    }

    pub fn add_row<I>(&self, length: TableLength, cells: I) -> usize
    where
        I: IntoIterator<Item = Option<LayoutItem>>,
    {
        self.edit_grid(|grid| grid.add_row(length, cells))
    }

    pub fn set_column_length(&self, index: usize, length: TableLength) -> bool {
        self.edit_grid(|grid| grid.set_column_length(index, length))
    }

    pub fn set_row_length(&self, index: usize, length: TableLength) -> bool {
        self.edit_grid(|grid| grid.set_row_length(index, length))
    }

    pub fn set_padding(&self, padding: Padding) {
        self.edit_grid(|grid| grid.set_padding(padding))
    }

    pub fn set_spacing(&self, spacing: Size) {
        self.edit_grid(|grid| grid.set_spacing(spacing))
    }

    /// Forgets cached measurements. Hosts call this when a control's
    /// content changes in a way that may change its preferred size.
    pub fn invalidate(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Preferred size of the grid within `available`.
    ///
    /// Results are cached per available size until the next structural
    /// change or [`invalidate`](Self::invalidate).
    pub fn get_preferred_size(&self, host: &dyn LayoutHost, available: Size) -> Size {
        self.thread.check();
        if self.cache_measurements {
            if let Some(size) = self.cache.borrow().get(available) {
                trace!("get_preferred_size: cache hit for {:?}", available);
                return size;
            }
        }

        let measured = match self.grid.try_borrow_mut() {
            Ok(mut grid) => grid.measure(host, available),
            Err(_) => {
                warn!("get_preferred_size: grid is busy measuring, answering zero");
                return Size::ZERO;
            }
        };

        if self.cache_measurements {
            self.cache.borrow_mut().insert(available, measured);
        }
        measured
    }

    /// Host size-changed notification: lays the grid out in `size`.
    ///
    /// A resize requested while an update is running is dropped along with
    /// its size.
    pub fn resize(&self, size: Size, host: &mut dyn LayoutHost) -> bool {
        if self.in_update.get() {
            debug!("resize: layout already in progress, dropping nested request");
            return false;
        }
        self.size.set(size);
        self.update(host)
    }

    /// Lays the grid out in its current size and moves every visible
    /// control.
    ///
    /// Returns `false` if the request was dropped because an update is
    /// already running on this container.
    pub fn update(&self, host: &mut dyn LayoutHost) -> bool {
        self.thread.check();
        if self.in_update.get() {
            debug!("update: layout already in progress, dropping nested request");
            return false;
        }
        let _guard = UpdateGuard::enter(&self.in_update);

        let size = self.size.get();
        let placements = match self.grid.try_borrow_mut() {
            Ok(mut grid) => grid.arrange(&*host, size),
            Err(_) => {
                warn!("update: grid is busy measuring, dropping request");
                return false;
            }
        };

        trace!(
            "update: placing {} control(s) in {}x{}",
            placements.len(),
            size.width,
            size.height
        );
        for placement in placements {
            host.arrange(placement.child, placement.rect);
        }
        true
    }
}

/// Children of `previous` that are no longer anywhere in `grid`.
fn departed_children(grid: &Grid, previous: Option<&LayoutItem>) -> Vec<ChildRef> {
    let mut removed = Vec::new();
    if let Some(item) = previous {
        item.for_each_child(&mut |child| {
            if !grid.contains(child) {
                removed.push(child);
            }
        });
    }
    removed
}

/// Clears the in-update flag when dropped, even if the host panics.
struct UpdateGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> UpdateGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for UpdateGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Configures a [`GridContainer`].
#[derive(Clone, Debug)]
pub struct GridContainerBuilder {
    padding: Option<Padding>,
    spacing: Option<Size>,
    size: Size,
    cache_measurements: bool,
}

impl Default for GridContainerBuilder {
    fn default() -> Self {
        Self {
            padding: None,
            spacing: None,
            size: Size::ZERO,
            cache_measurements: true,
        }
    }
}

impl GridContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn padding(&mut self, padding: Padding) -> &mut Self {
        self.padding = Some(padding);
        self
    }

    pub fn spacing(&mut self, horizontal: f64, vertical: f64) -> &mut Self {
        self.spacing = Some(Size::new(horizontal, vertical));
        self
    }

    /// Initial size, used until the first [`GridContainer::resize`].
    pub fn size(&mut self, width: f64, height: f64) -> &mut Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn cache_measurements(&mut self, enabled: bool) -> &mut Self {
        self.cache_measurements = enabled;
        self
    }

    pub fn build(&self) -> GridContainer {
        self.build_with(Grid::new())
    }

    /// Builds a container around an existing grid, e.g. one produced by
    /// [`StackLayout::build`]. Padding and spacing override the grid's own
    /// only when set on the builder.
    pub fn build_with(&self, mut grid: Grid) -> GridContainer {
        if let Some(padding) = self.padding {
            grid.set_padding(padding);
        }
        if let Some(spacing) = self.spacing {
            grid.set_spacing(spacing);
        }
        let mut container = GridContainer::from_grid(grid);
        container.size.set(self.size);
        container.cache_measurements = self.cache_measurements;
        container
    }
}
