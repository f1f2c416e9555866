//! Textual surfaces over the core operations.

pub mod csv;
