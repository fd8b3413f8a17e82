use super::*;
use std::collections::HashMap;

const MAX_ENTRIES: usize = 32;

type CacheKey = (i64, i64);

/// Measured sizes of one container, keyed by available size rounded to
/// whole pixels. Unconstrained dimensions share the `i64::MAX` key.
#[derive(Debug, Default)]
pub(crate) struct MeasureCache {
    entries: HashMap<CacheKey, Size>,
}

fn key(available: Size) -> CacheKey {
    // `as` saturates, which is what we want for infinity.
    (
        available.width.round() as i64,
        available.height.round() as i64,
    )
}

impl MeasureCache {
    pub fn get(&self, available: Size) -> Option<Size> {
        self.entries.get(&key(available)).copied()
    }

    pub fn insert(&mut self, available: Size, measured: Size) {
        if self.entries.len() >= MAX_ENTRIES {
            trace!("measure cache full, clearing {} entries", self.entries.len());
            self.entries.clear();
        }
        self.entries.insert(key(available), measured);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
