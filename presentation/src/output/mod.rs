//! Output formatting for command reports

pub mod console;
pub mod formatter;
pub mod report;
