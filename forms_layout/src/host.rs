//! The boundary between the layout engine and the toolkit that owns the
//! real controls.

use crate::{Rect, Size};

/// Opaque handle to a control owned by the host.
///
/// The engine never dereferences it; it only passes it back to the
/// [`LayoutHost`] that issued it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ChildRef(u64);

impl ChildRef {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u64 {
        self.0
    }
}

impl From<u64> for ChildRef {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// What the engine needs from the toolkit.
pub trait LayoutHost {
    /// Preferred size of `child` given `available`. Must not have observable
    /// side effects. The answer may exceed `available`; it is not clamped.
    fn measure(&self, child: ChildRef, available: Size) -> Size;

    /// Hidden children take no part in sizing and are not arranged.
    fn is_visible(&self, child: ChildRef) -> bool {
        let _ = child;
        true
    }

    /// Moves the real control. Any relayout this causes must wait for the
    /// next invalidation; requests made from here are dropped.
    fn arrange(&mut self, child: ChildRef, rect: Rect);

    /// `child` was removed from the grid.
    fn detach(&mut self, child: ChildRef) {
        let _ = child;
    }
}

/// Final position of one control, produced by the arrange pass.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    pub child: ChildRef,
    pub rect: Rect,
}

impl Placement {
    pub const fn new(child: ChildRef, rect: Rect) -> Self {
        Self { child, rect }
    }
}
