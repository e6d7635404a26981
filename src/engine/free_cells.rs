use rand::Rng;

/// Unordered set of empty cell offsets with O(1) insert, remove and random pick.
///
/// `slots` holds the tracked offsets densely; `position[offset]` points back
/// into `slots` so removal is a swap with the last entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FreeCells {
    slots: Vec<usize>,
    position: Vec<Option<usize>>,
}

impl FreeCells {
    /// Index over `capacity` cells with every cell tracked as free.
    pub(crate) fn full(capacity: usize) -> Self {
        let mut cells = FreeCells { slots: Vec::with_capacity(capacity), position: vec![None; capacity] };
        cells.fill();
        cells
    }

    /// Track every cell again.
    pub(crate) fn fill(&mut self) {
        self.slots.clear();
        self.slots.extend(0..self.position.len());
        for (i, p) in self.position.iter_mut().enumerate() {
            *p = Some(i);
        }
    }

    /// Stop tracking every cell.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.position.iter_mut().for_each(|p| *p = None);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub(crate) fn contains(&self, offset: usize) -> bool {
        self.position[offset].is_some()
    }

    /// Track `offset`; no-op if already tracked.
    pub(crate) fn insert(&mut self, offset: usize) {
        if self.position[offset].is_none() {
            self.position[offset] = Some(self.slots.len());
            self.slots.push(offset);
        }
    }

    /// Untrack `offset`; returns false if it was not tracked.
    pub(crate) fn remove(&mut self, offset: usize) -> bool {
        let Some(at) = self.position[offset].take() else {
            return false;
        };
        self.slots.swap_remove(at);
        if let Some(&moved) = self.slots.get(at) {
            self.position[moved] = Some(at);
        }
        true
    }

    /// Remove and return a uniformly random tracked offset.
    pub(crate) fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if self.slots.is_empty() {
            return None;
        }
        let offset = self.slots[rng.gen_range(0..self.slots.len())];
        self.remove(offset);
        Some(offset)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn consistent(cells: &FreeCells) -> bool {
        cells.slots.iter().enumerate().all(|(i, &o)| cells.position[o] == Some(i))
            && cells.position.iter().filter(|p| p.is_some()).count() == cells.slots.len()
    }

    #[test]
    fn full_tracks_everything() {
        let cells = FreeCells::full(9);
        assert_eq!(cells.len(), 9);
        assert!((0..9).all(|o| cells.contains(o)));
        assert!(consistent(&cells));
    }

    #[test]
    fn insert_and_remove_are_idempotent() {
        let mut cells = FreeCells::full(16);
        assert!(cells.remove(3));
        assert!(!cells.remove(3));
        assert!(cells.remove(15));
        assert!(cells.remove(0));
        assert_eq!(cells.len(), 13);
        cells.insert(3);
        cells.insert(3);
        assert_eq!(cells.len(), 14);
        assert!(cells.contains(3) && !cells.contains(15));
        assert!(consistent(&cells));
    }

    #[test]
    fn take_random_drains_without_repeats() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut cells = FreeCells::full(25);
        let mut seen = vec![false; 25];
        while let Some(o) = cells.take_random(&mut rng) {
            assert!(!seen[o]);
            seen[o] = true;
            assert!(consistent(&cells));
        }
        assert!(seen.iter().all(|&s| s));
        assert!(cells.is_empty());
    }

    #[test]
    fn clear_then_fill() {
        let mut cells = FreeCells::full(9);
        cells.clear();
        assert!(cells.is_empty() && !cells.contains(4));
        cells.fill();
        assert_eq!(cells.len(), 9);
        assert!(consistent(&cells));
    }
}
