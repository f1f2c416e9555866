//! CSV input for calculation batches and CSV output for results and users.

pub mod calculation_reader;
pub mod calculation_writer;
pub mod user_writer;
