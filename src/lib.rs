//! Log groups: named collections of log entries tied to an optional URL and
//! infrastructure descriptor.

pub mod types;
pub mod utils;

pub use types::{GlobalInfra, Group, LogEntry};
