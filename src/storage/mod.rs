//! File storage for the CLI grid.

pub mod csv;
