//! Plain-text graph persistence.

pub mod reader;
pub mod writer;

pub use reader::{parse_label, GraphReader};
pub use writer::GraphWriter;
