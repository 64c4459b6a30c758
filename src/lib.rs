//! Input interpretation and evaluation engine for a two-operand calculator
//! keypad.
//!
//! A host owns a [`session::Session`] (or a bare [`calculator::CalculatorState`])
//! and feeds it one [`calculator::Action`] at a time; each action produces a
//! fresh snapshot that a renderer reads through [`display::CalculatorDisplay`].

pub mod calculator;
pub mod config;
pub mod display;
pub mod session;
