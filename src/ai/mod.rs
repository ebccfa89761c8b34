pub mod config;
pub mod greedy;
pub mod minimax;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{Color, Position, Selection};

pub use config::MinimaxConfig;
pub use greedy::GreedySelector;
pub use minimax::MinimaxSelector;

/// Chooses a move for one side without touching the caller's board.
pub trait MoveSelector: Send + Sync {
    /// Best legal move and its score, or `None` when `color` must pass.
    fn select(&self, board: &Board, color: Color) -> Option<Selection>;

    fn select_move(&self, board: &Board, color: Color) -> Option<Position> {
        self.select(board, color).map(|selection| selection.position)
    }
}

/// Which selector to run.
///
/// Deserializes from `{"kind": "greedy"}` or
/// `{"kind": "minimax", "depth": 3}` (minimax fields optional).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Greedy,
    Minimax(MinimaxConfig),
}

impl Strategy {
    pub fn selector(&self) -> Box<dyn MoveSelector> {
        match self {
            Self::Greedy => Box::new(GreedySelector),
            Self::Minimax(config) => Box::new(MinimaxSelector::new(*config)),
        }
    }
}

/// Picks a move for `color` with the given strategy.
pub fn select_move(board: &Board, color: Color, strategy: &Strategy) -> Option<Position> {
    let selection = strategy.selector().select(board, color);
    match selection {
        Some(Selection { position, score }) => {
            debug!("{strategy:?} selected {position:?} for {color:?} (score {score})");
        }
        None => debug!("{strategy:?}: no legal move for {color:?}, passing"),
    }
    selection.map(|selection| selection.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{ProptestConfig, prop, prop_assert, prop_assert_eq, proptest};

    fn strategies() -> [Strategy; 2] {
        [
            Strategy::Greedy,
            Strategy::Minimax(MinimaxConfig {
                depth: 2,
                ..MinimaxConfig::default()
            }),
        ]
    }

    #[test]
    fn opening_selection_is_one_of_the_four_legal_cells() {
        let board = Board::standard(8).unwrap();
        let expected = [
            Position::new(2, 3),
            Position::new(3, 2),
            Position::new(4, 5),
            Position::new(5, 4),
        ];

        for strategy in [Strategy::Greedy, Strategy::Minimax(MinimaxConfig::default())] {
            let mv = select_move(&board, Color::A, &strategy).unwrap();
            assert!(expected.contains(&mv), "{strategy:?} chose {mv:?}");
        }
    }

    #[test]
    fn stuck_position_passes_for_both_colors() {
        let mut board = Board::empty(8).unwrap();
        board.set(Position::new(0, 0), Some(Color::A));
        board.set(Position::new(7, 7), Some(Color::B));

        for strategy in strategies() {
            assert_eq!(select_move(&board, Color::A, &strategy), None);
            assert_eq!(select_move(&board, Color::B, &strategy), None);
        }
    }

    #[test]
    fn full_board_passes() {
        let board = Board::from_bitboards(6, (1u64 << 36) - 1, 0).unwrap();

        for strategy in strategies() {
            assert_eq!(select_move(&board, Color::A, &strategy), None);
            assert_eq!(select_move(&board, Color::B, &strategy), None);
        }
    }

    #[test]
    fn strategy_deserializes_from_tagged_json() {
        let greedy: Strategy = serde_json::from_str(r#"{"kind":"greedy"}"#).unwrap();
        assert_eq!(greedy, Strategy::Greedy);

        let minimax: Strategy = serde_json::from_str(r#"{"kind":"minimax","depth":3}"#).unwrap();
        assert_eq!(
            minimax,
            Strategy::Minimax(MinimaxConfig {
                depth: 3,
                ..MinimaxConfig::default()
            })
        );

        let defaults: Strategy = serde_json::from_str(r#"{"kind":"minimax"}"#).unwrap();
        assert_eq!(defaults, Strategy::Minimax(MinimaxConfig::default()));

        assert!(serde_json::from_str::<Strategy>(r#"{"kind":"random"}"#).is_err());
    }

    #[test]
    fn selectors_disagree_where_their_evaluations_differ() {
        // Greedy grabs the corner, the squared table values it at 1 and
        // minimax prefers the inner capture.
        let mut board = Board::empty(6).unwrap();
        board.set(Position::new(3, 3), Some(Color::A));
        board.set(Position::new(2, 3), Some(Color::B));
        board.set(Position::new(4, 4), Some(Color::B));
        let minimax = Strategy::Minimax(MinimaxConfig {
            depth: 1,
            ..MinimaxConfig::default()
        });

        assert_eq!(
            select_move(&board, Color::A, &Strategy::Greedy),
            Some(Position::new(5, 5))
        );
        assert_eq!(
            select_move(&board, Color::A, &minimax),
            Some(Position::new(1, 3))
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn selection_is_legal_and_repeatable(
            cells in prop::collection::vec(0u8..3, 36),
            first in prop::bool::ANY,
        ) {
            let rows: Vec<Vec<u8>> = cells.chunks(6).map(<[u8]>::to_vec).collect();
            let board = Board::from_rows(&rows).unwrap();
            let color = if first { Color::A } else { Color::B };

            for strategy in strategies() {
                let mv = select_move(&board, color, &strategy);
                prop_assert_eq!(mv, select_move(&board, color, &strategy));
                match mv {
                    Some(pos) => prop_assert!(board.is_legal(pos, color)),
                    None => prop_assert!(!board.has_legal_move(color)),
                }
            }
        }
    }
}
