use crate::board::Board;
use crate::types::Color;
use crate::weights::WeightTable;

/// Sum of table weights over the cells owned by `color`.
pub fn own_weight(board: &Board, color: Color, table: &WeightTable) -> i32 {
    mask_weight(board.stones(color), table)
}

/// Own weight minus the opponent's weight.
pub fn weight_differential(board: &Board, color: Color, table: &WeightTable) -> i32 {
    own_weight(board, color, table) - own_weight(board, color.opponent(), table)
}

fn mask_weight(mut mask: u64, table: &WeightTable) -> i32 {
    let mut score = 0i32;
    while mask != 0 {
        score += table.at(mask.trailing_zeros() as usize) as i32;
        mask &= mask - 1;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn own_weight_ignores_opponent_stones() {
        let board = Board::standard(8).unwrap();
        let table = WeightTable::corner_weighted(8);

        assert_eq!(own_weight(&board, Color::A, &table), 8);
        assert_eq!(own_weight(&board, Color::B, &table), 8);
    }

    #[test]
    fn differential_is_zero_sum() {
        let mut board = Board::standard(8).unwrap();
        board.place(Position::new(3, 2), Color::A);
        let table = WeightTable::squared_distance(8);

        let a = weight_differential(&board, Color::A, &table);
        let b = weight_differential(&board, Color::B, &table);

        assert_eq!(a, 57 - 16);
        assert_eq!(a, -b);
    }

    #[test]
    fn corner_stone_counts_its_full_weight() {
        let mut board = Board::empty(6).unwrap();
        board.set(Position::new(5, 0), Some(Color::B));
        board.set(Position::new(1, 0), Some(Color::A));
        let table = WeightTable::corner_weighted(6);

        assert_eq!(own_weight(&board, Color::B, &table), 6);
        assert_eq!(weight_differential(&board, Color::A, &table), 1 - 6);
    }
}
