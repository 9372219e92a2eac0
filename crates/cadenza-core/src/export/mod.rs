//! Output rendering for terminal display

mod console;

pub use console::*;
