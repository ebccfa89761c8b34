use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod eval;
pub mod types;
pub mod weights;

pub use ai::{MinimaxConfig, MoveSelector, Strategy, select_move};
pub use board::Board;
pub use types::{Color, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Returns `[column, row]` for the chosen move, or `null` when `color` must pass.
///
/// `board` is an array of rows of `0/1/2` cells. `strategy` is optional and
/// defaults to the greedy selector.
#[wasm_bindgen(js_name = selectMove)]
pub fn select_move_js(board: JsValue, color: u8, strategy: JsValue) -> Result<JsValue, JsValue> {
    let board = board_from_js(board)?;
    let color = Color::try_from(color).map_err(|err| JsValue::from_str(&err))?;
    let strategy: Strategy = if strategy.is_undefined() || strategy.is_null() {
        Strategy::default()
    } else {
        serde_wasm_bindgen::from_value(strategy)?
    };

    to_js(&select_move(&board, color, &strategy))
}

/// Returns every legal `[column, row]` for `color` in row-major order.
#[wasm_bindgen(js_name = legalMoves)]
pub fn legal_moves_js(board: JsValue, color: u8) -> Result<JsValue, JsValue> {
    let board = board_from_js(board)?;
    let color = Color::try_from(color).map_err(|err| JsValue::from_str(&err))?;

    to_js(&board.legal_moves(color))
}

fn board_from_js(value: JsValue) -> Result<Board, JsValue> {
    let rows: Vec<Vec<u8>> = serde_wasm_bindgen::from_value(value)?;
    Board::from_rows(&rows).map_err(|err| JsValue::from_str(&err))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    value.serialize(&serializer).map_err(JsValue::from)
}
