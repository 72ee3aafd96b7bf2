use std::collections::HashMap;

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use tracing::trace;
use unordered_pair::UnorderedPair;

use crate::error::BoardError;
use crate::location::Location;
use crate::shape::{KnightStep, Step};

/// Index of an active cell. Active cells are numbered from 0 in row-major order, so the origin is always 0.
pub type CellIndex = usize;

/// The knight-move graph over the active cells of a board.
///
/// Built once and never mutated afterward; searches borrow it.
#[derive(Clone, Debug)]
pub struct Adjacency {
    graph: UnGraphMap<CellIndex, ()>,
}

impl Adjacency {
    /// Build a graph over cells `0..count` directly from its edges, without any board.
    ///
    /// Duplicate edges are merged. Edges naming a cell outside `0..count` or joining a cell to itself are rejected.
    pub fn from_edges<I>(count: usize, edges: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = UnorderedPair<CellIndex>>,
    {
        let mut graph = UnGraphMap::with_capacity(count, 0);
        for index in 0..count {
            graph.add_node(index);
        }

        for UnorderedPair(a, b) in edges {
            if a >= count || b >= count {
                return Err(BoardError::EdgeOutOfRange { edge: (a, b), count });
            }
            if a == b {
                return Err(BoardError::SelfLoop(a));
            }
            graph.add_edge(a, b, ());
        }

        Ok(Self { graph })
    }

    /// The number of active cells, `M`.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// The number of knight moves between active cells.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Neighbors of `index`, in ascending order.
    pub fn neighbors(&self, index: CellIndex) -> Vec<CellIndex> {
        if !self.graph.contains_node(index) {
            return Vec::new();
        }
        self.graph.neighbors(index).sorted().collect_vec()
    }

    /// Whether a single move connects `a` and `b`.
    pub fn is_adjacent(&self, a: CellIndex, b: CellIndex) -> bool {
        self.graph.contains_edge(a, b)
    }
}

/// The locations of all marked cells of `board`, in row-major order.
///
/// The position of a location in the returned list is its [`CellIndex`].
pub fn active_cells(board: &Array2<bool>) -> Vec<Location> {
    board.indexed_iter()
        .filter(|(_, marked)| **marked)
        .map(|(ind, _)| Location::from(ind))
        .collect_vec()
}

/// Derive the knight-move graph between the marked cells of `board`, indexed as by [`active_cells`].
///
/// Fails if the board is empty or its top-left cell is unmarked. Cells without any neighbor are kept; the search deals with them.
pub fn build_adjacency(board: &Array2<bool>) -> Result<Adjacency, BoardError> {
    if board.is_empty() {
        return Err(BoardError::EmptyBoard);
    }
    if !board[Location::ORIGIN.as_index()] {
        return Err(BoardError::OriginNotMarked);
    }

    Ok(adjacency_of(&active_cells(board)))
}

pub(crate) fn adjacency_of(locations: &[Location]) -> Adjacency {
    let index_of: HashMap<Location, CellIndex> = locations.iter()
        .enumerate()
        .map(|(index, location)| (*location, index))
        .collect();

    // a knight has at most 8 moves, and every edge is shared by two cells
    let mut graph = UnGraphMap::with_capacity(locations.len(), locations.len() * 4);
    for index in 0..locations.len() {
        graph.add_node(index);
    }

    for (index, location) in locations.iter().enumerate() {
        // only forward steps, so each pair is considered once; anything off the board is simply not in `index_of`
        for step in KnightStep::FORWARD_VARIANTS {
            if let Some(other) = index_of.get(&step.attempt_from(*location)) {
                graph.add_edge(index, *other, ());
            }
        }
    }

    trace!(cells = graph.node_count(), moves = graph.edge_count(), "built knight graph");

    Adjacency { graph }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use ndarray::{array, Array2};
    use unordered_pair::UnorderedPair;

    use super::{active_cells, build_adjacency, Adjacency};
    use crate::error::BoardError;
    use crate::location::Location;
    use crate::shape::is_knight_move;

    #[test]
    fn rejects_unmarked_origin() {
        let board = array![[false, true], [true, true]];
        assert_eq!(build_adjacency(&board).unwrap_err(), BoardError::OriginNotMarked);
    }

    #[test]
    fn rejects_empty_board() {
        let board = Array2::<bool>::from_elem((0, 3), false);
        assert_eq!(build_adjacency(&board).unwrap_err(), BoardError::EmptyBoard);
    }

    #[test]
    fn isolated_cells_are_kept() {
        let board = array![[true, true], [true, true]];
        let adjacency = build_adjacency(&board).unwrap();
        assert_eq!(adjacency.node_count(), 4);
        assert_eq!(adjacency.edge_count(), 0);
        assert!(adjacency.neighbors(0).is_empty());
    }

    #[test]
    fn matches_pairwise_rule_on_full_board() {
        let board = Array2::from_elem((5, 6), true);
        let locations = active_cells(&board);
        let adjacency = build_adjacency(&board).unwrap();

        for (a, b) in (0..locations.len()).tuple_combinations() {
            assert_eq!(adjacency.is_adjacent(a, b), is_knight_move(locations[a], locations[b]));
            // symmetric
            assert_eq!(adjacency.is_adjacent(a, b), adjacency.is_adjacent(b, a));
        }
    }

    #[test]
    fn indices_are_row_major() {
        let board = array![
            [true, false, true],
            [false, true, false],
        ];
        assert_eq!(active_cells(&board), vec![Location(0, 0), Location(2, 0), Location(1, 1)]);
    }

    #[test]
    fn from_edges_validates() {
        assert_eq!(
            Adjacency::from_edges(2, [UnorderedPair(0, 2)]).unwrap_err(),
            BoardError::EdgeOutOfRange { edge: (0, 2), count: 2 },
        );
        assert_eq!(Adjacency::from_edges(2, [UnorderedPair(1, 1)]).unwrap_err(), BoardError::SelfLoop(1));

        let adjacency = Adjacency::from_edges(3, [UnorderedPair(0, 1), UnorderedPair(1, 0), UnorderedPair(2, 1)]).unwrap();
        assert_eq!(adjacency.edge_count(), 2);
        assert_eq!(adjacency.neighbors(1), vec![0, 2]);
    }
}
