//! Grid layout engine for forms.
//!
//! A [`Grid`] holds rows and columns sized as [`TableLength::Auto`],
//! [`TableLength::Fixed`] or [`TableLength::Star`], and cells holding either a
//! host control ([`ChildRef`]) or a nested grid. Layout runs in two passes:
//! [`Grid::measure`] computes a preferred size, [`Grid::arrange`] computes the
//! final rectangle of every visible control. [`GridContainer`] ties both
//! passes to the host's resize and invalidate notifications.
//!
//! Stacks, dynamic rows, centered content and flowing items are built on top
//! of the same grid, see [`StackLayout`], [`DynamicLayout`], [`centered`] and
//! [`flow`].

mod error;
mod host;
pub mod layout;
#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use host::{ChildRef, LayoutHost, Placement};
pub use layout::*;

use core::marker::PhantomData;
use static_assertions::assert_not_impl_any;
use std::cell::{Cell, RefCell};
use tracing::{debug, trace, warn};

/// A width and height in device-independent pixels.
///
/// `f64::INFINITY` in either dimension means "unconstrained".
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const INFINITE: Size = Size {
        width: f64::INFINITY,
        height: f64::INFINITY,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Subtracts `other`, never going below zero.
    pub fn shrink(self, other: Size) -> Size {
        Size {
            width: (self.width - other.width).max(0.0),
            height: (self.height - other.height).max(0.0),
        }
    }

    pub fn grow(self, other: Size) -> Size {
        Size {
            width: self.width + other.width,
            height: self.height + other.height,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle in integer device pixels, as handed to the host.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from fractional edges. The edges are rounded, not
    /// the extents, so that adjacent cells share an edge exactly.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let x = round_px(left);
        let y = round_px(top);
        Self {
            x,
            y,
            width: round_px(right).saturating_sub(x).max(0),
            height: round_px(bottom).saturating_sub(y).max(0),
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }
}

// `as` saturates, so infinities land on i32::MIN / i32::MAX and NaN on 0.
fn round_px(v: f64) -> i32 {
    v.round() as i32
}

/// Space reserved inside the edges of a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    pub const ZERO: Padding = Padding::uniform(0.0);

    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Validates host-supplied padding.
    pub fn try_new(left: f64, top: f64, right: f64, bottom: f64) -> Result<Self> {
        let padding = Self::new(left, top, right, bottom);
        let ok = [left, top, right, bottom]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);
        if ok {
            Ok(padding)
        } else {
            Err(Error::InvalidPadding(padding))
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub fn size(&self) -> Size {
        Size::new(self.horizontal(), self.vertical())
    }
}

pub trait With {
    fn with<F: FnMut(&mut Self)>(mut self, mut f: F) -> Self
    where
        Self: Sized,
    {
        f(&mut self);
        self
    }
}

impl<T> With for T {}

/// Pins an object to the thread that created it. Layout state is only ever
/// touched from the host's UI thread.
#[derive(Clone)]
struct StuckToThread {
    #[cfg(debug_assertions)]
    thread_id: std::thread::ThreadId,
    not_send: PhantomData<*mut u8>,
}

assert_not_impl_any!(StuckToThread: Sync, Send);

impl StuckToThread {
    pub fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            thread_id: std::thread::current().id(),
            not_send: PhantomData,
        }
    }

    pub fn check(&self) {
        #[cfg(debug_assertions)]
        {
            let this_thread_id = std::thread::current().id();
            debug_assert_eq!(
                this_thread_id, self.thread_id,
                "Expected this object to be used only on the thread that created it."
            );
        }
    }
}
