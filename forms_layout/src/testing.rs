//! A host that records what the engine asks of it.

use crate::{ChildRef, LayoutHost, Placement, Rect, Size};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

#[derive(Default)]
pub(crate) struct TestHost {
    preferred: HashMap<ChildRef, Size>,
    hidden: HashSet<ChildRef>,
    next_id: u64,
    pub measured: RefCell<HashMap<ChildRef, Size>>,
    pub arranged: Vec<Placement>,
    pub detached: Vec<ChildRef>,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, preferred: Size) -> ChildRef {
        self.next_id += 1;
        let child = ChildRef::new(self.next_id);
        self.preferred.insert(child, preferred);
        child
    }

    pub fn hide(&mut self, child: ChildRef) {
        self.hidden.insert(child);
    }

    pub fn last_available(&self, child: ChildRef) -> Option<Size> {
        self.measured.borrow().get(&child).copied()
    }

    pub fn rect_of(&self, child: ChildRef) -> Option<Rect> {
        self.arranged
            .iter()
            .rev()
            .find(|p| p.child == child)
            .map(|p| p.rect)
    }
}

impl LayoutHost for TestHost {
    fn measure(&self, child: ChildRef, available: Size) -> Size {
        self.measured.borrow_mut().insert(child, available);
        self.preferred.get(&child).copied().unwrap_or_default()
    }

    fn is_visible(&self, child: ChildRef) -> bool {
        !self.hidden.contains(&child)
    }

    fn arrange(&mut self, child: ChildRef, rect: Rect) {
        self.arranged.push(Placement { child, rect });
    }

    fn detach(&mut self, child: ChildRef) {
        self.detached.push(child);
    }
}
