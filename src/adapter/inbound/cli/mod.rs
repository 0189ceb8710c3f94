//! CLI module graph.

pub mod command;
pub mod intervals;
pub mod run;
pub mod top;
