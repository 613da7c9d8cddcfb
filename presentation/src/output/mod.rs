//! Output formatting module

pub mod console;
