use serde::{Deserialize, Serialize};

pub const CELL_EMPTY: u8 = 0;
pub const CELL_A: u8 = 1;
pub const CELL_B: u8 = 2;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Color {
    A,
    B,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Cell value used in the `0/1/2` board encoding.
    pub fn to_cell(self) -> u8 {
        match self {
            Self::A => CELL_A,
            Self::B => CELL_B,
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            CELL_A => Ok(Self::A),
            CELL_B => Ok(Self::B),
            other => Err(format!("invalid color value: {other} (expected 1 or 2)")),
        }
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.to_cell()
    }
}

/// A board coordinate, serialized as the pair `(column, row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u8, u8)", into = "(u8, u8)")]
pub struct Position {
    pub col: u8,
    pub row: u8,
}

impl Position {
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }
}

impl From<(u8, u8)> for Position {
    fn from((col, row): (u8, u8)) -> Self {
        Self { col, row }
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.col, pos.row)
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SearchStats {
    pub nodes: u64,
    pub elapsed_ms: f64,
}

/// A chosen move together with the score that won the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Selection {
    pub position: Position,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        assert_eq!(Color::A.opponent(), Color::B);
        assert_eq!(Color::B.opponent(), Color::A);
        assert_eq!(Color::A.opponent().opponent(), Color::A);
    }

    #[test]
    fn color_rejects_values_outside_one_and_two() {
        assert_eq!(Color::try_from(1), Ok(Color::A));
        assert_eq!(Color::try_from(2), Ok(Color::B));

        let err = Color::try_from(3).unwrap_err();
        assert!(err.contains("invalid color"));
        assert!(Color::try_from(0).is_err());
    }

    #[test]
    fn position_serializes_as_column_row_pair() {
        let json = serde_json::to_string(&Position::new(5, 2)).unwrap();
        assert_eq!(json, "[5,2]");

        let back: Position = serde_json::from_str("[1,4]").unwrap();
        assert_eq!(back, Position { col: 1, row: 4 });
    }
}
