//! Terminal output formatting
//!
//! Coloured board and result printing for the line-based mode.

pub mod display;
pub mod formatters;

pub use display::{write_board, write_result};
