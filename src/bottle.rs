use std::fmt::{Display, Write};

use itertools::Itertools;

/// Number of units a bottle holds.
pub const CAPACITY: usize = 4;

/// Marker for an unoccupied slot.
pub const SPACE: u8 = b'.';

/// A single bottle, slots ordered bottom (index 0) to top.
///
/// Filled slots are always contiguous from the bottom; every constructor
/// checks this and every pour keeps it, so the queries below only ever
/// look at the top of the stack.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Bottle([u8; CAPACITY]);

impl Bottle {
    pub const EMPTY: Bottle = Bottle([SPACE; CAPACITY]);

    /// Returns `None` if an empty slot sits below a filled one.
    pub fn new(slots: [u8; CAPACITY]) -> Option<Bottle> {
        let contiguous = slots
            .iter()
            .tuple_windows()
            .all(|(below, above)| *below != SPACE || *above == SPACE);

        contiguous.then_some(Bottle(slots))
    }

    pub fn slots(&self) -> &[u8; CAPACITY] {
        &self.0
    }

    /// Color and slot index of the topmost unit.
    pub fn top(&self) -> Option<(u8, usize)> {
        self.0
            .iter()
            .rposition(|&c| c != SPACE)
            .map(|ix| (self.0[ix], ix))
    }

    pub fn is_full(&self) -> bool {
        self.0[CAPACITY - 1] != SPACE
    }

    pub fn is_empty(&self) -> bool {
        self.0[0] == SPACE
    }

    /// Free slots above the top unit.
    pub fn empty_slots(&self) -> usize {
        self.0.iter().rev().take_while(|&&c| c == SPACE).count()
    }

    /// Length of the same-colored run at the top, which is the most a
    /// single pour can move out of this bottle.
    pub fn top_run(&self) -> usize {
        match self.top() {
            None => 0,
            Some((color, ix)) => self.0[..=ix]
                .iter()
                .rev()
                .take_while(|&&c| c == color)
                .count(),
        }
    }

    /// Full and holding a single color.
    pub fn is_sorted(&self) -> bool {
        self.is_full() && self.0.iter().all_equal()
    }

    /// Number of filled slots.
    pub fn units(&self) -> usize {
        CAPACITY - self.empty_slots()
    }

    // callers keep the contiguity invariant
    pub(crate) fn set(&mut self, slot: usize, value: u8) {
        self.0[slot] = value;
    }
}

impl Display for Bottle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in self.0 {
            f.write_char(c as char)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn bottle(s: &str) -> Bottle {
        let slots: [u8; CAPACITY] = s.as_bytes().try_into().unwrap();
        Bottle::new(slots).unwrap()
    }

    #[test]
    fn rejects_gaps() {
        assert!(Bottle::new(*b"A.B.").is_none());
        assert!(Bottle::new(*b".A..").is_none());
        assert!(Bottle::new(*b"AB..").is_some());
        assert!(Bottle::new(*b"....").is_some());
    }

    #[test]
    fn top_of_stack() {
        assert_eq!(bottle("AB..").top(), Some((b'B', 1)));
        assert_eq!(bottle("ABCD").top(), Some((b'D', 3)));
        assert_eq!(bottle("A...").top(), Some((b'A', 0)));
        assert_eq!(Bottle::EMPTY.top(), None);
    }

    #[test]
    fn fullness() {
        assert!(bottle("AABB").is_full());
        assert!(!bottle("AAB.").is_full());
        assert!(Bottle::EMPTY.is_empty());
        assert!(!bottle("A...").is_empty());
        assert!(!Bottle::EMPTY.is_full());
    }

    #[test]
    fn counts_empty_slots() {
        assert_eq!(Bottle::EMPTY.empty_slots(), 4);
        assert_eq!(bottle("A...").empty_slots(), 3);
        assert_eq!(bottle("ABC.").empty_slots(), 1);
        assert_eq!(bottle("ABCD").empty_slots(), 0);
        assert_eq!(bottle("ABC.").units(), 3);
    }

    #[test]
    fn measures_top_run() {
        assert_eq!(Bottle::EMPTY.top_run(), 0);
        assert_eq!(bottle("ABBB").top_run(), 3);
        assert_eq!(bottle("BBBB").top_run(), 4);
        assert_eq!(bottle("BBA.").top_run(), 1);
        assert_eq!(bottle("ABB.").top_run(), 2);
    }

    #[test]
    fn sorted_needs_full_single_color() {
        assert!(bottle("CCCC").is_sorted());
        assert!(!bottle("CCC.").is_sorted());
        assert!(!bottle("CCCD").is_sorted());
        assert!(!Bottle::EMPTY.is_sorted());
    }
}
