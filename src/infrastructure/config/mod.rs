//! Infrastructure configuration modules.

pub mod liveness;
pub mod logging;
pub mod settings;
pub mod telegram;
