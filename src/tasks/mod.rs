//! Background tasks module
//!
//! This module contains the periodic countdown that runs while the clock is
//! started.

pub mod countdown;

// Re-export main functions
pub use countdown::countdown_task;
