use serde::{Deserialize, Serialize};

use crate::types::Position;

/// The two positional weight formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// `1 + edge distance`, with the four corners raised to the board size.
    CornerWeighted,
    /// `(1 + edge distance)^2`, corners left as ordinary edge cells.
    SquaredDistance,
}

/// Static per-cell weights for one board size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    size: usize,
    cells: Vec<u32>,
}

impl WeightTable {
    pub fn build(kind: TableKind, size: usize) -> Self {
        match kind {
            TableKind::CornerWeighted => Self::corner_weighted(size),
            TableKind::SquaredDistance => Self::squared_distance(size),
        }
    }

    pub fn corner_weighted(size: usize) -> Self {
        let mut table = Self::from_fn(size, |row, col| edge_distance(row, col, size) + 1);
        let last = size - 1;
        for (row, col) in [(0, 0), (0, last), (last, 0), (last, last)] {
            table.cells[row * size + col] = size as u32;
        }
        table
    }

    pub fn squared_distance(size: usize) -> Self {
        Self::from_fn(size, |row, col| {
            let weight = edge_distance(row, col, size) + 1;
            weight * weight
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> u32 {
        self.at(pos.row as usize * self.size + pos.col as usize)
    }

    /// Weight by row-major cell index (same indexing as the board bitboards).
    pub fn at(&self, idx: usize) -> u32 {
        self.cells.get(idx).copied().unwrap_or(0)
    }

    fn from_fn(size: usize, weight: impl Fn(usize, usize) -> u32) -> Self {
        debug_assert!(size > 0, "weight table needs a non-empty board");
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .map(|(row, col)| weight(row, col))
            .collect();
        Self { size, cells }
    }
}

fn edge_distance(row: usize, col: usize, size: usize) -> u32 {
    row.min(col).min(size - 1 - row).min(size - 1 - col) as u32
}
