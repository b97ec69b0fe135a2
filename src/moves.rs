use std::fmt::Display;

use smallvec::SmallVec;

use crate::board::Board;
use crate::bottle::{Bottle, SPACE};

/// Pour from bottle `from` into bottle `to` (0-based indices).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    pub fn new(from: usize, to: usize) -> Move {
        Move { from, to }
    }
}

// bottles are numbered from 1 for people
impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bottle {} -> bottle {}", self.from + 1, self.to + 1)
    }
}

/// Moves returned by [`legal_moves`]; most boards have only a handful.
pub type Moves = SmallVec<[Move; 16]>;

/// Whether anything can be poured from `source` onto `dest`: the source
/// has a unit, the destination has room, and the destination is either
/// empty or topped with the same color.
pub fn can_pour(source: &Bottle, dest: &Bottle) -> bool {
    if source.is_empty() || dest.is_full() {
        return false;
    }

    match (source.top(), dest.top()) {
        (_, None) => dest.empty_slots() > 0,
        (Some((from, _)), Some((onto, _))) => from == onto && dest.empty_slots() > 0,
        (None, Some(_)) => false,
    }
}

#[auto_enums::auto_enum(Iterator)]
fn moves_from(board: &Board, from: usize) -> impl Iterator<Item = Move> + '_ {
    let source = &board[from];
    match source.is_empty() {
        true => std::iter::empty::<Move>(),
        false => (0..board.len())
            .filter(move |&to| to != from && can_pour(source, &board[to]))
            .map(move |to| Move::new(from, to)),
    }
}

/// All legal moves, ordered by source then destination. The search
/// relies on this order to break ties between equally good boards.
pub fn legal_moves(board: &Board) -> Moves {
    (0..board.len())
        .flat_map(|from| moves_from(board, from))
        .collect()
}

/// The board after pouring `mv`. Only the two bottles involved change.
///
/// `mv` must be legal for `board` (see [`can_pour`]); anything else is a
/// caller bug.
pub fn apply_move(board: &Board, mv: Move) -> Board {
    debug_assert!(mv.from != mv.to && can_pour(&board[mv.from], &board[mv.to]));

    let mut source = board[mv.from];
    let mut dest = board[mv.to];

    let mut next = board.clone();
    let Some((color, top)) = source.top() else {
        return next;
    };

    let amount = source.top_run().min(dest.empty_slots());
    for i in 0..amount {
        let slot = dest.top().map_or(0, |(_, ix)| ix + 1);
        dest.set(slot, color);
        source.set(top - i, SPACE);
    }

    let bottles = next.bottles_mut();
    bottles[mv.from] = source;
    bottles[mv.to] = dest;
    next
}

/// Plays `moves` from `board`, or `None` if one of them is not legal at
/// the point it is played.
pub fn replay(board: &Board, moves: &[Move]) -> Option<Board> {
    let mut current = board.clone();
    for &mv in moves {
        let legal = mv.from < current.len()
            && mv.to < current.len()
            && mv.from != mv.to
            && can_pour(&current[mv.from], &current[mv.to]);
        if !legal {
            return None;
        }

        current = apply_move(&current, mv);
    }

    Some(current)
}
