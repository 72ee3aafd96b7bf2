#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use itertools::Itertools;

    use crate::assemble::to_coordinates;
    use crate::builder::{BoardBuilder, Builder};
    use crate::error::SolverFailure;
    use crate::graph::build_adjacency;
    use crate::location::Location;
    use crate::script::{cell_center, ClickScript, ScriptOptions};
    use crate::shape::is_knight_move;
    use crate::solver::{find_hamiltonian_path, SearchLimits};
    use crate::Board;

    fn assert_knight_path(board: &Board, coordinates: &[Location]) {
        assert_eq!(coordinates.len(), board.locations().len());
        assert_eq!(coordinates.first(), Some(&Location::ORIGIN));
        assert!(coordinates.iter().all_unique());
        assert!(coordinates.iter().all(|l| board.locations().contains(l)));
        for (a, b) in coordinates.iter().tuple_windows() {
            assert!(is_knight_move(*a, *b), "{} to {} is not a knight move", a, b);
        }
    }

    #[test]
    fn three_cell_chain() {
        // origin at row 1 column 1, then row 2 column 3, then row 4 column 2
        let board = BoardBuilder::with_dims((NonZero::new(3).unwrap(), NonZero::new(4).unwrap()))
            .mark(Location(2, 1))
            .mark(Location(1, 3))
            .build()
            .unwrap();

        assert_eq!(format!("{}", board), "S..
..#
...
.#.
");

        let adjacency = build_adjacency(&board.marked()).unwrap();
        let path = find_hamiltonian_path(&adjacency, 0, 3).unwrap();
        assert_eq!(path.cells(), &[0, 1, 2]);

        let row_cols = board.locations().iter().map(Location::row_col).collect_vec();
        assert_eq!(to_coordinates(&path, &row_cols).unwrap(), vec![(1, 1), (2, 3), (4, 2)]);

        let solved = board.solve().unwrap();
        assert_eq!(format!("{}", solved), "0..
..1
...
.2.
");
    }

    #[test]
    fn parse_and_solve() {
        let board: Board = "
            S..
            ..x
            ...
            .x.
        ".parse().unwrap();

        let solved = board.solve().unwrap();
        assert_eq!(solved.coordinates(), vec![Location(0, 0), Location(2, 1), Location(1, 3)]);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("S.?\n...".parse::<Board>().is_err());
        assert!("S..\n..".parse::<Board>().is_err());
        assert!("\n\n".parse::<Board>().is_err());
    }

    #[test]
    fn lone_origin() {
        let board: Board = "S".parse().unwrap();
        let solved = board.solve().unwrap();
        assert_eq!(solved.path().cells(), &[0]);
        assert_eq!(format!("{}", solved), "0\n");
    }

    #[test]
    fn origin_without_moves() {
        let board: Board = "S..
...
..#
".parse().unwrap();

        assert_eq!(board.solve().err(), Some(SolverFailure::NotFound));
    }

    #[test]
    fn knight_stuck_in_the_middle() {
        let board = BoardBuilder::with_dims((NonZero::new(3).unwrap(), NonZero::new(3).unwrap()))
            .mark_all()
            .build()
            .unwrap();

        assert_eq!(board.solve().err(), Some(SolverFailure::NotFound));
    }

    #[test]
    fn ring_without_the_middle() {
        // the eight outer cells of a 3x3 board form a single knight cycle
        let board = BoardBuilder::with_dims((NonZero::new(3).unwrap(), NonZero::new(3).unwrap()))
            .mark_all()
            .unmark(Location(1, 1))
            .build()
            .unwrap();

        let solved = board.clone().solve().unwrap();
        assert_knight_path(&board, &solved.coordinates());
        // both directions around the cycle leave the origin with one onward move, so the lower index wins
        assert_eq!(solved.coordinates()[1], Location(2, 1));
    }

    #[test]
    fn full_five_by_five() {
        let board = BoardBuilder::with_dims((NonZero::new(5).unwrap(), NonZero::new(5).unwrap()))
            .mark_all()
            .build()
            .unwrap();

        let solved = board.clone().solve().unwrap();
        assert_knight_path(&board, &solved.coordinates());

        // same board, same answer
        assert_eq!(board.solve().unwrap().path(), solved.path());
    }

    #[test]
    fn full_six_by_six() {
        let board = BoardBuilder::with_dims((NonZero::new(6).unwrap(), NonZero::new(6).unwrap()))
            .mark_all()
            .build()
            .unwrap();

        let solved = board.clone().solve().unwrap();
        assert_knight_path(&board, &solved.coordinates());
    }

    #[test]
    fn sparse_puzzle() {
        // a 5x5 board with holes
        let board: Board = "
            S#.#.
            .#..#
            #.##.
            ..#.#
            .#.#.
        ".parse().unwrap();

        match board.clone().solve() {
            Ok(solved) => assert_knight_path(&board, &solved.coordinates()),
            Err(SolverFailure::NotFound) => {
                let adjacency = board.adjacency();
                assert!(find_hamiltonian_path(&adjacency, 0, adjacency.node_count()).is_err());
            }
            Err(other) => panic!("unexpected failure {:?}", other),
        }
    }

    #[test]
    fn coordinates_follow_the_path() {
        let board = BoardBuilder::with_dims((NonZero::new(4).unwrap(), NonZero::new(3).unwrap()))
            .mark_all()
            .build()
            .unwrap();

        let solved = board.clone().solve().unwrap();
        let coordinates = solved.coordinates();
        assert_eq!(coordinates.len(), 12);
        assert_eq!(coordinates, to_coordinates(solved.path(), &board.locations()).unwrap());
        assert_knight_path(&board, &coordinates);
        assert_eq!(solved.board(), &board);
    }

    #[test]
    fn tiny_budget_is_exhausted() {
        let board = BoardBuilder::with_dims((NonZero::new(5).unwrap(), NonZero::new(5).unwrap()))
            .mark_all()
            .build()
            .unwrap();

        assert_eq!(
            board.solve_with(SearchLimits::default().with_max_expansions(3)).err(),
            Some(SolverFailure::Exhausted { expansions: 3 }),
        );
    }

    #[test]
    fn solved_board_to_clicks() {
        let board: Board = "S..\n..#\n...\n.#.".parse().unwrap();
        let solved = board.solve().unwrap();

        let script = ClickScript::from_positions(
            solved.coordinates().into_iter().map(|l| cell_center(l, 10)),
            ScriptOptions { offset: (1000, 500), delay_ms: 25 },
        );

        assert_eq!(script.to_string(), "click 1025 515
delay 25
click 1015 535
delay 25
");
    }
}
