use log::trace;

use crate::ai::MoveSelector;
use crate::board::Board;
use crate::eval::own_weight;
use crate::types::{Color, Selection};
use crate::weights::WeightTable;

/// One-ply selector: plays the move whose resulting position carries the
/// largest corner-weighted sum of the mover's own stones.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySelector;

impl MoveSelector for GreedySelector {
    fn select(&self, board: &Board, color: Color) -> Option<Selection> {
        let table = WeightTable::corner_weighted(board.size());
        let mut best: Option<Selection> = None;

        for mv in board.legal_moves(color) {
            let mut next = *board;
            next.place(mv, color);
            let score = own_weight(&next, color, &table) as f64;
            trace!("greedy candidate {:?} scores {score}", mv);

            if best.is_none_or(|b| score > b.score) {
                best = Some(Selection {
                    position: mv,
                    score,
                });
            }
        }

        best
    }
}
