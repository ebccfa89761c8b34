use serde::{Deserialize, Serialize};

pub const DEFAULT_DEPTH: u8 = 5;
pub const DEFAULT_SQUARE_BONUS: f64 = 0.5;
pub const DEFAULT_CAPTURE_BONUS: f64 = 10.0;

/// Minimax tuning. Missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimaxConfig {
    /// Plies searched from the root, the root move included.
    pub depth: u8,
    /// Multiplier on the table weight of the root move's target cell.
    pub square_bonus: f64,
    /// Multiplier on the number of stones the root move flips.
    pub capture_bonus: f64,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            square_bonus: DEFAULT_SQUARE_BONUS,
            capture_bonus: DEFAULT_CAPTURE_BONUS,
        }
    }
}
