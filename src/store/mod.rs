//! Storage primitives: the open-addressed table and the small containers
//! the graph algorithms run on.

pub mod frontier;
pub mod sequence;
pub mod table;

pub use frontier::{Queue, Stack};
pub use sequence::Sequence;
pub use table::{OpenTable, INITIAL_CAPACITY, LOAD_FACTOR_PERCENT};
