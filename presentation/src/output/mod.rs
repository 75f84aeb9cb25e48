//! Output formatting for answers and messages

pub mod console;
