use crate::types::{CELL_A, CELL_B, CELL_EMPTY, Color, Position};

/// Side lengths the board model accepts.
pub const SUPPORTED_SIZES: [usize; 2] = [6, 8];

/// Walk order used for flips: (row delta, col delta).
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Square Reversi board represented by two bitboards.
///
/// Cell `(col, row)` maps to bit `row * size + col`, so iterating set bits from
/// the lowest one visits cells in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: u8,
    a: u64,
    b: u64,
}

impl Board {
    /// Creates a board with no stones.
    pub fn empty(size: usize) -> Result<Self, String> {
        check_size(size)?;
        Ok(Self {
            size: size as u8,
            a: 0,
            b: 0,
        })
    }

    /// Creates the opening position: color A (first to move) on the
    /// anti-diagonal of the centre square, color B on its diagonal.
    pub fn standard(size: usize) -> Result<Self, String> {
        let mut board = Self::empty(size)?;
        let lo = (size / 2 - 1) as u8;
        let hi = lo + 1;

        board.set(Position::new(hi, lo), Some(Color::A));
        board.set(Position::new(lo, hi), Some(Color::A));
        board.set(Position::new(lo, lo), Some(Color::B));
        board.set(Position::new(hi, hi), Some(Color::B));

        Ok(board)
    }

    /// Builds a board from rows of `0/1/2` cell values.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, String> {
        let size = rows.len();
        let mut board = Self::empty(size)?;

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(format!(
                    "board is not square: row {row} has {} cells, expected {size}",
                    cells.len()
                ));
            }

            for (col, &cell) in cells.iter().enumerate() {
                let pos = Position::new(col as u8, row as u8);
                match cell {
                    CELL_EMPTY => {}
                    CELL_A => board.set(pos, Some(Color::A)),
                    CELL_B => board.set(pos, Some(Color::B)),
                    other => {
                        return Err(format!(
                            "invalid cell value {other} at column {col}, row {row}"
                        ));
                    }
                }
            }
        }

        Ok(board)
    }

    /// Builds a board from raw occupancy masks.
    pub fn from_bitboards(size: usize, a: u64, b: u64) -> Result<Self, String> {
        check_size(size)?;
        if (a | b) & !full_mask(size) != 0 {
            return Err(format!("bitboard has stones outside a {size}x{size} board"));
        }
        if a & b != 0 {
            return Err("bitboards overlap".to_string());
        }

        Ok(Self {
            size: size as u8,
            a,
            b,
        })
    }

    pub fn size(&self) -> usize {
        self.size as usize
    }

    pub fn contains(&self, pos: Position) -> bool {
        (pos.col as usize) < self.size() && (pos.row as usize) < self.size()
    }

    pub fn get(&self, pos: Position) -> Option<Color> {
        if !self.contains(pos) {
            return None;
        }
        let square = self.bit(pos);
        if self.a & square != 0 {
            Some(Color::A)
        } else if self.b & square != 0 {
            Some(Color::B)
        } else {
            None
        }
    }

    /// Overwrites one cell. Positions outside the board are ignored.
    pub fn set(&mut self, pos: Position, cell: Option<Color>) {
        if !self.contains(pos) {
            return;
        }
        let square = self.bit(pos);
        self.a &= !square;
        self.b &= !square;
        match cell {
            Some(Color::A) => self.a |= square,
            Some(Color::B) => self.b |= square,
            None => {}
        }
    }

    /// Occupancy mask of one color.
    pub fn stones(&self, color: Color) -> u64 {
        match color {
            Color::A => self.a,
            Color::B => self.b,
        }
    }

    pub fn count(&self, color: Color) -> u32 {
        self.stones(color).count_ones()
    }

    pub fn empty_count(&self) -> u32 {
        (self.size() * self.size()) as u32 - (self.a | self.b).count_ones()
    }

    /// Converts the board back to rows of `0/1/2` cell values.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| {
                        self.get(Position::new(col, row))
                            .map_or(CELL_EMPTY, Color::to_cell)
                    })
                    .collect()
            })
            .collect()
    }

    /// A move is legal on an empty cell that brackets at least one
    /// opposing run in some direction.
    pub fn is_legal(&self, pos: Position, color: Color) -> bool {
        if !self.contains(pos) || self.get(pos).is_some() {
            return false;
        }
        self.flip_mask(pos, color) != 0
    }

    /// Legal move mask for `color`.
    pub fn legal_mask(&self, color: Color) -> u64 {
        let occupied = self.a | self.b;
        let mut legal = 0u64;

        for idx in 0..self.size() * self.size() {
            let square = 1u64 << idx;
            if occupied & square != 0 {
                continue;
            }
            if self.flip_mask(self.position_of(idx), color) != 0 {
                legal |= square;
            }
        }

        legal
    }

    /// All legal moves for `color` in row-major order.
    pub fn legal_moves(&self, color: Color) -> Vec<Position> {
        let mut mask = self.legal_mask(color);
        let mut out = Vec::with_capacity(mask.count_ones() as usize);
        while mask != 0 {
            out.push(self.position_of(mask.trailing_zeros() as usize));
            mask &= mask - 1;
        }
        out
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        self.legal_mask(color) != 0
    }

    /// Places a stone and flips every bracketed run.
    ///
    /// Returns the flipped cells direction by direction, nearest first. The
    /// stone is placed even when nothing is captured; callers are expected to
    /// check legality first.
    pub fn place(&mut self, pos: Position, color: Color) -> Vec<Position> {
        if !self.contains(pos) {
            return Vec::new();
        }
        let (me, opp) = self.sides(color);
        let mut flipped = Vec::new();
        let mut flips = 0u64;

        for (dr, dc) in DIRECTIONS {
            let line = self.capture_line(pos, dr, dc, me, opp);
            if line == 0 {
                continue;
            }
            flips |= line;

            let mut row = pos.row as i32 + dr;
            let mut col = pos.col as i32 + dc;
            while let Some(square) = self.bit_at(row, col)
                && line & square != 0
            {
                flipped.push(Position::new(col as u8, row as u8));
                row += dr;
                col += dc;
            }
        }

        self.commit(pos, color, flips);
        flipped
    }

    /// Same as [`Board::place`] but returns the flipped cells as a mask.
    pub fn place_bits(&mut self, pos: Position, color: Color) -> u64 {
        let flips = self.flip_mask(pos, color);
        self.commit(pos, color, flips);
        flips
    }

    fn commit(&mut self, pos: Position, color: Color, flips: u64) {
        if !self.contains(pos) {
            return;
        }
        let changed = self.bit(pos) | flips;
        match color {
            Color::A => {
                self.a |= changed;
                self.b &= !changed;
            }
            Color::B => {
                self.b |= changed;
                self.a &= !changed;
            }
        }
    }

    fn flip_mask(&self, pos: Position, color: Color) -> u64 {
        if !self.contains(pos) {
            return 0;
        }
        let (me, opp) = self.sides(color);
        DIRECTIONS
            .iter()
            .fold(0u64, |acc, &(dr, dc)| {
                acc | self.capture_line(pos, dr, dc, me, opp)
            })
    }

    /// Opponent run starting next to `pos` that ends on one of `me`'s
    /// stones, or 0 when the walk leaves the board or meets an empty cell.
    fn capture_line(&self, pos: Position, dr: i32, dc: i32, me: u64, opp: u64) -> u64 {
        let mut row = pos.row as i32 + dr;
        let mut col = pos.col as i32 + dc;
        let mut line = 0u64;

        while let Some(square) = self.bit_at(row, col) {
            if opp & square != 0 {
                line |= square;
            } else if me & square != 0 {
                return line;
            } else {
                return 0;
            }
            row += dr;
            col += dc;
        }

        0
    }

    fn sides(&self, color: Color) -> (u64, u64) {
        match color {
            Color::A => (self.a, self.b),
            Color::B => (self.b, self.a),
        }
    }

    fn bit(&self, pos: Position) -> u64 {
        1u64 << (pos.row as usize * self.size() + pos.col as usize)
    }

    fn bit_at(&self, row: i32, col: i32) -> Option<u64> {
        let size = self.size as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(1u64 << (row * size + col))
        } else {
            None
        }
    }

    fn position_of(&self, idx: usize) -> Position {
        Position::new((idx % self.size()) as u8, (idx / self.size()) as u8)
    }
}

fn check_size(size: usize) -> Result<(), String> {
    if SUPPORTED_SIZES.contains(&size) {
        Ok(())
    } else {
        Err(format!("unsupported board size {size} (expected 6 or 8)"))
    }
}

fn full_mask(size: usize) -> u64 {
    let cells = size * size;
    if cells >= 64 {
        u64::MAX
    } else {
        (1u64 << cells) - 1
    }
}
