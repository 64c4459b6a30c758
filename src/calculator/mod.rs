//! Calculator engine for a two-operand keypad.
//!
//! This module provides:
//! - The immutable state snapshot and the action set
//! - The reducer that maps (state, action) to the next state
//! - Percent resolution and result formatting used by the reducer
//! - Parsing of typed key scripts into actions

mod action;
mod format;
mod keys;
mod percent;
mod reducer;
mod state;

pub use action::Action;
pub use format::format_result;
pub use keys::{KeyError, parse_keys};
pub use percent::resolve as resolve_percent;
pub use reducer::{Reducer, reduce};
pub use state::{
    CalculatorState, DEFAULT_MAX_LENGTH, ERROR_SENTINEL, Operator, PERCENT_MARKER, StateError,
    is_blank as is_blank_operand,
};
