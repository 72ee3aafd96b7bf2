use crate::error::AssembleError;
use crate::solver::Path;

/// Map a [`Path`] back to positions, `positions[i]` being the position of cell `i`.
///
/// Positions can be anything: board [`Location`](crate::Location)s, `(row, column)` pairs, pixels on a screen.
pub fn to_coordinates<P: Copy>(path: &Path, positions: &[P]) -> Result<Vec<P>, AssembleError> {
    path.cells().iter()
        .map(|cell| positions.get(*cell).copied().ok_or(AssembleError::MissingPosition(*cell)))
        .collect()
}

#[cfg(test)]
mod tests {
    use unordered_pair::UnorderedPair;

    use super::to_coordinates;
    use crate::error::AssembleError;
    use crate::graph::Adjacency;
    use crate::solver::find_hamiltonian_path;

    #[test]
    fn follows_path_order() {
        let adjacency = Adjacency::from_edges(3, [UnorderedPair(0, 2), UnorderedPair(2, 1)]).unwrap();
        let path = find_hamiltonian_path(&adjacency, 0, 3).unwrap();

        assert_eq!(to_coordinates(&path, &["a", "b", "c"]), Ok(vec!["a", "c", "b"]));
    }

    #[test]
    fn missing_position() {
        let adjacency = Adjacency::from_edges(2, [UnorderedPair(0, 1)]).unwrap();
        let path = find_hamiltonian_path(&adjacency, 0, 2).unwrap();

        assert_eq!(to_coordinates(&path, &[(1, 1)]), Err(AssembleError::MissingPosition(1)));
    }
}
