use itertools::Itertools;

use crate::board::Board;
use crate::bottle::{Bottle, SPACE};

/// Number of places inside a bottle where one color sits directly on a
/// different one. Empty slots are skipped, never compared.
pub fn color_boundaries(bottle: &Bottle) -> usize {
    bottle
        .slots()
        .iter()
        .filter(|&&c| c != SPACE)
        .tuple_windows()
        .filter(|(below, above)| below != above)
        .count()
}

// each color boundary needs at least one pour to break it up, though
// a single pour can also create one so this is not a strict bound
pub fn heuristic(board: &Board) -> usize {
    board.bottles().iter().map(color_boundaries).sum()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::parse_board;
    use crate::moves::test::all_boards;

    #[test]
    fn counts_boundaries() {
        let board = parse_board("ABAB AAB. A... .... CCCC").unwrap();
        let per_bottle: Vec<_> = board.bottles().iter().map(color_boundaries).collect();

        assert_eq!(per_bottle, vec![3, 1, 0, 0, 0]);
        assert_eq!(heuristic(&board), 4);
    }

    #[test]
    fn zero_when_solved() {
        let board = parse_board("AAAA .... BBBB CCCC ....").unwrap();
        assert!(board.is_solved());
        assert_eq!(heuristic(&board), 0);
    }

    #[test]
    fn zero_on_every_solved_board() {
        let mut solved = 0;
        for board in all_boards(2) {
            if board.is_solved() {
                solved += 1;
                assert_eq!(heuristic(&board), 0, "solved board:\n{}", board);
            }
        }

        // each bottle is one of empty, AAAA or BBBB
        assert_eq!(solved, 9);
    }

    #[test]
    fn partial_runs_are_free() {
        // disorder only counts boundaries, not unfinished bottles
        assert_eq!(heuristic(&parse_board("AA.. AA..").unwrap()), 0);
    }
}
