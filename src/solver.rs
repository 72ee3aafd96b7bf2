use itertools::Itertools;
use ndarray::Array2;
use tracing::{debug, trace};

use crate::error::SolverFailure;
use crate::graph::{build_adjacency, Adjacency, CellIndex};

/// A complete Hamiltonian path: every cell of the graph exactly once, starting at the origin, each step a single move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path(Vec<CellIndex>);

impl Path {
    /// The cells in visiting order.
    pub fn cells(&self) -> &[CellIndex] {
        &self.0
    }

    /// The first cell of the path.
    pub fn origin(&self) -> CellIndex {
        self.0[0]
    }

    /// Number of cells on the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a path holds at least its origin.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check that this is a Hamiltonian path of `adjacency`: it covers every cell once and every step is a move.
    pub fn is_hamiltonian_in(&self, adjacency: &Adjacency) -> bool {
        let mut seen = vec![false; adjacency.node_count()];
        for cell in &self.0 {
            match seen.get_mut(*cell) {
                Some(s) if !*s => *s = true,
                _ => return false,
            }
        }

        self.0.len() == adjacency.node_count()
            && self.0.iter().tuple_windows().all(|(a, b)| adjacency.is_adjacent(*a, *b))
    }
}

/// Bounds on a single search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    /// How many cells the search may place on its path in total before giving up with [`SolverFailure::Exhausted`].
    /// [`None`] searches until a verdict, however long that takes.
    pub max_expansions: Option<u64>,
}

impl SearchLimits {
    /// The budget used by [`SearchLimits::default`].
    pub const DEFAULT_MAX_EXPANSIONS: u64 = 50_000_000;

    /// No budget at all.
    pub fn unbounded() -> Self {
        Self { max_expansions: None }
    }

    /// Replace the expansion budget.
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self { max_expansions: Some(Self::DEFAULT_MAX_EXPANSIONS) }
    }
}

/// Counters describing the work done by one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells placed on the path, counting every retry.
    pub expansions: u64,
    /// Partial paths abandoned because some unvisited cell could no longer be fit in.
    pub pruned: u64,
    /// Partial paths abandoned after all their continuations failed.
    pub backtracks: u64,
}

struct SearchState {
    path: Vec<CellIndex>,
    visited: Vec<bool>,
}

impl SearchState {
    fn new(node_count: usize, origin: CellIndex) -> Self {
        let mut path = Vec::with_capacity(node_count);
        path.push(origin);
        let mut visited = vec![false; node_count];
        visited[origin] = true;

        Self { path, visited }
    }

    fn tail(&self) -> CellIndex {
        // never empty: the origin is never removed
        self.path[self.path.len() - 1]
    }

    fn visit(&mut self, cell: CellIndex) {
        self.visited[cell] = true;
        self.path.push(cell);
    }

    fn unvisit(&mut self) {
        if let Some(cell) = self.path.pop() {
            self.visited[cell] = false;
        }
    }
}

/// Remaining candidate extensions of one cell of the path.
struct Frame {
    candidates: Vec<CellIndex>,
    cursor: usize,
}

impl Frame {
    fn new(candidates: Vec<CellIndex>) -> Self {
        Self { candidates, cursor: 0 }
    }

    fn next(&mut self) -> Option<CellIndex> {
        let next = self.candidates.get(self.cursor).copied();
        self.cursor += 1;
        next
    }
}

/// Depth-first search for one Hamiltonian path through an [`Adjacency`], starting at a fixed cell.
/// Use [`Self::solve`] to attempt to find a path.
///
/// # Search
/// Every time the path grows, the partial path is checked against two necessary conditions for being completable.
/// For each unvisited cell V, count the neighbors of V which are unvisited or are the current end of the path.
/// 1. If V has no such neighbor, nothing can ever enter V.
/// 2. If V has exactly one, V must be the final cell of the path. Only one cell can be final, so two such cells end the branch.
///
/// Surviving partial paths are extended toward unvisited neighbors of their end, fewest onward moves first
/// (Warnsdorff's rule), ties broken by lower index so that repeated searches give the same path.
///
/// Neither rule removes a completable branch, so the search finds a path whenever one exists.
/// Branches are kept on an explicit stack rather than the call stack, so large boards cannot overflow it.
pub struct PathSolver<'a> {
    adjacency: &'a Adjacency,
    // sorted, so candidate order never depends on graph internals
    neighbors: Vec<Vec<CellIndex>>,
    limits: SearchLimits,
}

impl<'a> From<&'a Adjacency> for PathSolver<'a> {
    fn from(adjacency: &'a Adjacency) -> Self {
        Self {
            adjacency,
            neighbors: (0..adjacency.node_count()).map(|cell| adjacency.neighbors(cell)).collect_vec(),
            limits: SearchLimits::default(),
        }
    }
}

impl PathSolver<'_> {
    /// Bound every later search of this solver by `limits`.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    #[inline]
    fn remaining_degree(&self, state: &SearchState, cell: CellIndex) -> usize {
        let tail = state.tail();
        self.neighbors[cell].iter()
            .filter(|n| !state.visited[**n] || **n == tail)
            .count()
    }

    #[inline]
    fn onward_degree(&self, state: &SearchState, cell: CellIndex) -> usize {
        self.neighbors[cell].iter()
            .filter(|n| !state.visited[**n])
            .count()
    }

    /// Candidate next cells for `state` in the order they should be tried, or [`None`] if `state` cannot be completed.
    fn expand(&self, state: &SearchState) -> Option<Vec<CellIndex>> {
        let mut forced_ends = 0;
        for cell in (0..state.visited.len()).filter(|cell| !state.visited[*cell]) {
            match self.remaining_degree(state, cell) {
                0 => {
                    trace!(cell, depth = state.path.len(), "unreachable cell");
                    return None;
                }
                1 => {
                    forced_ends += 1;
                    if forced_ends > 1 {
                        trace!(cell, depth = state.path.len(), "second forced end");
                        return None;
                    }
                }
                _ => {}
            }
        }

        Some(self.neighbors[state.tail()].iter()
            .copied()
            .filter(|n| !state.visited[*n])
            .sorted_by_key(|n| (self.onward_degree(state, *n), *n))
            .collect_vec())
    }

    /// Find a Hamiltonian path of `target_length` cells starting at `origin`.
    ///
    /// `target_length` must be the number of cells in the graph; anything else, or an `origin` outside the graph,
    /// is [`SolverFailure::Malformed`].
    pub fn solve(&self, origin: CellIndex, target_length: usize) -> Result<Path, SolverFailure> {
        self.solve_with_stats(origin, target_length).0
    }

    /// As [`Self::solve`], also reporting how much work the search did.
    pub fn solve_with_stats(&self, origin: CellIndex, target_length: usize) -> (Result<Path, SolverFailure>, SearchStats) {
        let mut stats = SearchStats::default();
        let result = self.search(origin, target_length, &mut stats);

        match &result {
            Ok(path) => debug!(cells = path.len(), ?stats, "found path"),
            Err(failure) => debug!(%failure, ?stats, "search failed"),
        }

        (result, stats)
    }

    fn search(&self, origin: CellIndex, target_length: usize, stats: &mut SearchStats) -> Result<Path, SolverFailure> {
        let node_count = self.adjacency.node_count();
        if origin >= node_count {
            return Err(SolverFailure::Malformed(format!("origin {} is not one of the {} cells", origin, node_count)));
        }
        if target_length != node_count {
            return Err(SolverFailure::Malformed(format!("target length {} does not cover all {} cells", target_length, node_count)));
        }

        let mut state = SearchState::new(node_count, origin);
        if state.path.len() == target_length {
            return Ok(Path(state.path));
        }

        let Some(candidates) = self.expand(&state) else {
            stats.pruned += 1;
            return Err(SolverFailure::NotFound);
        };
        // one frame per cell on the path
        let mut stack = vec![Frame::new(candidates)];

        loop {
            let next = match stack.last_mut() {
                Some(frame) => frame.next(),
                None => return Err(SolverFailure::NotFound),
            };

            match next {
                Some(cell) => {
                    stats.expansions += 1;
                    if self.limits.max_expansions.is_some_and(|max| stats.expansions > max) {
                        return Err(SolverFailure::Exhausted { expansions: stats.expansions - 1 });
                    }

                    state.visit(cell);
                    if state.path.len() == target_length {
                        return Ok(Path(state.path));
                    }

                    match self.expand(&state) {
                        Some(candidates) => stack.push(Frame::new(candidates)),
                        None => {
                            stats.pruned += 1;
                            state.unvisit();
                        }
                    }
                }
                None => {
                    stack.pop();
                    // the origin's frame running dry ends the loop above instead
                    if !stack.is_empty() {
                        stats.backtracks += 1;
                        state.unvisit();
                    }
                }
            }
        }
    }
}

/// Find a Hamiltonian path through `adjacency` from `origin` covering `target_length` cells, with default [`SearchLimits`].
pub fn find_hamiltonian_path(adjacency: &Adjacency, origin: CellIndex, target_length: usize) -> Result<Path, SolverFailure> {
    PathSolver::from(adjacency).solve(origin, target_length)
}

/// Build the knight graph of a boolean `board` and search it from the top-left cell, covering every marked cell.
///
/// Board problems, such as an unmarked top-left cell, come back as [`SolverFailure::Board`].
pub fn solve_marked(board: &Array2<bool>, limits: SearchLimits) -> Result<Path, SolverFailure> {
    let adjacency = build_adjacency(board)?;
    PathSolver::from(&adjacency).with_limits(limits).solve(0, adjacency.node_count())
}
