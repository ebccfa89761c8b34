use log::trace;
use web_time::Instant;

use crate::ai::MoveSelector;
use crate::ai::config::MinimaxConfig;
use crate::board::Board;
use crate::eval::weight_differential;
use crate::types::{Color, Position, SearchStats, Selection};
use crate::weights::WeightTable;

/// Fixed-depth minimax over the squared-distance table.
///
/// Root moves are ranked by
/// `minimax(child) + square_bonus * table[move] + capture_bonus * flipped`,
/// not by the raw minimax value alone.
///
/// A side without a legal move hands the turn over without spending a ply,
/// so the number of plies actually played below the root can exceed `depth`
/// when passes occur.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimaxSelector {
    config: MinimaxConfig,
}

impl MinimaxSelector {
    pub fn new(config: MinimaxConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Scores every legal root move and returns the best one together with
    /// search counters. Returns `None` when `color` has to pass.
    pub fn search(&self, board: &Board, color: Color) -> (Option<Selection>, SearchStats) {
        let start_time = Instant::now();
        let table = WeightTable::squared_distance(board.size());
        let mut searcher = Searcher::new(&table, color);
        let child_depth = self.config.depth.saturating_sub(1);

        let mut best: Option<Selection> = None;
        for mv in board.legal_moves(color) {
            let mut next = *board;
            let flipped = next.place(mv, color);
            let value = searcher.minimax(&next, color.opponent(), child_depth);
            let score = self.root_score(value, &table, mv, flipped.len());
            trace!("minimax candidate {:?}: value {value}, score {score}", mv);

            if best.is_none_or(|b| score > b.score) {
                best = Some(Selection {
                    position: mv,
                    score,
                });
            }
        }

        let stats = SearchStats {
            nodes: searcher.nodes,
            elapsed_ms: start_time.elapsed().as_secs_f64() * 1000.0,
        };
        (best, stats)
    }

    fn root_score(&self, value: i32, table: &WeightTable, mv: Position, flipped: usize) -> f64 {
        value as f64
            + self.config.square_bonus * table.get(mv) as f64
            + self.config.capture_bonus * flipped as f64
    }
}

impl MoveSelector for MinimaxSelector {
    fn select(&self, board: &Board, color: Color) -> Option<Selection> {
        self.search(board, color).0
    }
}

struct Searcher<'a> {
    table: &'a WeightTable,
    ai_color: Color,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    fn new(table: &'a WeightTable, ai_color: Color) -> Self {
        Self {
            table,
            ai_color,
            nodes: 0,
        }
    }

    /// Value of `board` for the AI color with `to_move` about to play.
    fn minimax(&mut self, board: &Board, to_move: Color, depth: u8) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return weight_differential(board, self.ai_color, self.table);
        }

        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            if !board.has_legal_move(to_move.opponent()) {
                return weight_differential(board, self.ai_color, self.table);
            }
            // Pass: same depth, other side to move.
            return self.minimax(board, to_move.opponent(), depth);
        }

        let maximizing = to_move == self.ai_color;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in moves {
            let mut next = *board;
            next.place_bits(mv, to_move);
            let value = self.minimax(&next, to_move.opponent(), depth - 1);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        best
    }
}
