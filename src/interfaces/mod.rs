//! Input and output formats of the command-line replay tool.

pub mod csv;
