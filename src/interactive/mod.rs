//! Full-screen terminal front end

mod app;
mod input;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, TOAST_DURATION, Toast, run_tui};
pub use input::{EndScreenKey, decode_end_screen_key, decode_key};
