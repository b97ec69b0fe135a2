use std::{
    fmt::{Display, Write},
    ops::Index,
};

use crate::bottle::{Bottle, CAPACITY};
use crate::error::BoardError;

/// The full puzzle state. Boards are values: a move produces a new board
/// and leaves the old one untouched.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    bottles: Vec<Bottle>,
}

impl Board {
    pub fn new(bottles: Vec<Bottle>) -> Board {
        Board { bottles }
    }

    pub fn len(&self) -> usize {
        self.bottles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bottles.is_empty()
    }

    pub fn bottles(&self) -> &[Bottle] {
        &self.bottles
    }

    pub(crate) fn bottles_mut(&mut self) -> &mut [Bottle] {
        &mut self.bottles
    }

    /// Every bottle is either empty or full of a single color.
    pub fn is_solved(&self) -> bool {
        self.bottles.iter().all(|b| b.is_empty() || b.is_sorted())
    }

    /// Canonical key: all slots, bottle by bottle, bottom to top.
    pub fn encode(&self) -> Vec<u8> {
        let mut key = Vec::with_capacity(self.bottles.len() * CAPACITY);
        for bottle in &self.bottles {
            key.extend_from_slice(bottle.slots());
        }

        key
    }

    /// Total number of filled slots on the board.
    pub fn units(&self) -> usize {
        self.bottles.iter().map(Bottle::units).sum()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for bottle in &self.bottles {
            if !first {
                f.write_char('\n')?;
            } else {
                first = false;
            }

            write!(f, "{}", bottle)?;
        }

        Ok(())
    }
}

impl Index<usize> for Board {
    type Output = Bottle;
    fn index(&self, index: usize) -> &Self::Output {
        &self.bottles[index]
    }
}

/// Parses one bottle, `bottle` being its 1-based position for error reports.
pub fn parse_bottle(bottle: usize, text: &str) -> Result<Bottle, BoardError> {
    if let Some(slot) = text.chars().find(|c| !c.is_ascii_graphic()) {
        return Err(BoardError::InvalidSlot { bottle, slot });
    }

    let slots: [u8; CAPACITY] = text
        .as_bytes()
        .try_into()
        .map_err(|_| BoardError::WrongLength {
            bottle,
            len: text.chars().count(),
        })?;

    Bottle::new(slots).ok_or(BoardError::Gap { bottle })
}

/// Parses whitespace-separated bottles such as `"AABB CC.. ...."`, one or
/// more per line. Everything after a `#` on a line is ignored.
pub fn parse_board(b: &str) -> Result<Board, BoardError> {
    let bottles = b
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(str::split_whitespace)
        .enumerate()
        .map(|(ix, text)| parse_bottle(ix + 1, text))
        .collect::<Result<Vec<_>, _>>()?;

    if bottles.is_empty() {
        return Err(BoardError::Empty);
    }

    Ok(Board::new(bottles))
}
