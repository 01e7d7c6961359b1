//! Command-line front end: file commands and the interactive session.

pub mod commands;
pub mod session;

pub use session::Session;
