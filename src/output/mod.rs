//! Reply rendering for the terminal and machine-readable output

pub mod formatter;

pub use formatter::{ConsoleFormatter, JsonFormatter, PlainFormatter, ReplyFormatter, ReplyRenderer};
