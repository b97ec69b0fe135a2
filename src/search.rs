use std::{
    cmp::Ordering,
    collections::{hash_map::Entry, BinaryHeap, HashMap},
    time::{Duration, Instant},
};

use itertools::Itertools;
use pathfinding::directed::bfs::bfs;
use smallvec::SmallVec;

use crate::board::Board;
use crate::heuristic::heuristic;
use crate::moves::{apply_move, legal_moves, Move};

/// Diagnostics for one search run. Purely informational.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards taken off the frontier, stale ones included.
    pub expanded: usize,
    /// Successor boards put onto the frontier.
    pub generated: usize,
    /// Popped boards dropped because a shorter path to them was queued later.
    pub stale: usize,
    pub elapsed: Duration,
}

struct Node {
    board: Board,
    path: Vec<Move>,
}

// frontier entry; `seq` keeps equal costs in discovery order
struct Queued {
    cost: usize,
    seq: usize,
    node: Node,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    // reversed: BinaryHeap is a max-heap and we want the cheapest, oldest entry
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Default)]
struct Frontier {
    heap: BinaryHeap<Queued>,
    pushed: usize,
}

impl Frontier {
    fn push(&mut self, cost: usize, node: Node) {
        let seq = self.pushed;
        self.pushed += 1;
        self.heap.push(Queued { cost, seq, node });
    }

    fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|q| q.node)
    }
}

/// Best-first search from `source` towards any solved board, ordering the
/// frontier by moves made plus [`heuristic`].
///
/// Returns the move list of the first solved board taken off the
/// frontier, an empty list if `source` is already solved, or `None` once
/// every reachable board has been tried. The heuristic is not admissible,
/// so the list is short but not guaranteed shortest; use
/// [`solve_shortest`] for that.
pub fn solve(source: &Board) -> (SearchStats, Option<Vec<Move>>) {
    let start = Instant::now();
    let mut stats = SearchStats::default();

    log::debug!(
        "searching {} bottles, {} units, heuristic {}",
        source.len(),
        source.units(),
        heuristic(source)
    );

    // best known move count per board
    let mut seen: HashMap<Vec<u8>, usize> = HashMap::new();
    let mut frontier = Frontier::default();

    seen.insert(source.encode(), 0);
    frontier.push(
        heuristic(source),
        Node {
            board: source.clone(),
            path: Vec::new(),
        },
    );

    let mut result = None;
    while let Some(node) = frontier.pop() {
        stats.expanded += 1;

        let g = node.path.len();
        let best = seen.get(&node.board.encode()).copied().unwrap_or(usize::MAX);
        if g > best {
            // reached more cheaply after this node was queued
            stats.stale += 1;
            continue;
        }

        if node.board.is_solved() {
            result = Some(node.path);
            break;
        }

        log::trace!("expanding at depth {}:\n{}", g, node.board);

        let next_g = g + 1;
        for mv in legal_moves(&node.board) {
            let next = apply_move(&node.board, mv);

            match seen.entry(next.encode()) {
                Entry::Occupied(mut e) => {
                    if next_g >= *e.get() {
                        continue;
                    }
                    e.insert(next_g);
                }
                Entry::Vacant(e) => {
                    e.insert(next_g);
                }
            }

            let mut path = Vec::with_capacity(next_g);
            path.extend_from_slice(&node.path);
            path.push(mv);

            stats.generated += 1;
            frontier.push(next_g + heuristic(&next), Node { board: next, path });
        }
    }

    stats.elapsed = start.elapsed();
    match &result {
        Some(path) => log::debug!(
            "solved in {} moves, expanded {} (generated {}, stale {}) in {:?}",
            path.len(),
            stats.expanded,
            stats.generated,
            stats.stale,
            stats.elapsed
        ),
        None => log::debug!(
            "no solution, expanded {} (generated {}, stale {}) in {:?}",
            stats.expanded,
            stats.generated,
            stats.stale,
            stats.elapsed
        ),
    }

    (stats, result)
}

/// Breadth-first search for a move list of minimal length. Explores far
/// more boards than [`solve`] on anything but small puzzles.
pub fn solve_shortest(source: &Board) -> (SearchStats, Option<Vec<Move>>) {
    let start = Instant::now();
    let mut stats = SearchStats::default();

    let boards = bfs(
        source,
        |b| {
            let buffer: SmallVec<[Board; 16]> = legal_moves(b)
                .into_iter()
                .map(|mv| apply_move(b, mv))
                .collect();

            stats.expanded += 1;
            stats.generated += buffer.len();

            buffer
        },
        |b| b.is_solved(),
    );

    // bfs hands back boards; recover the pour between each pair
    let result = boards.and_then(|boards| {
        boards
            .iter()
            .tuple_windows()
            .map(|(from, to)| {
                legal_moves(from)
                    .into_iter()
                    .find(|&mv| apply_move(from, mv) == *to)
            })
            .collect::<Option<Vec<Move>>>()
    });

    stats.elapsed = start.elapsed();
    log::debug!(
        "breadth-first search finished, expanded {} (generated {}) in {:?}",
        stats.expanded,
        stats.generated,
        stats.elapsed
    );

    (stats, result)
}
