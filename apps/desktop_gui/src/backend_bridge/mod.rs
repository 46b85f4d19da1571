//! Worker side of the GUI: commands in, settlements out.

pub mod commands;
pub mod runtime;
