//! Host-provided services module
//!
//! This module contains the audio cue collaborator the clock plays on phase
//! transitions.

pub mod audio;

// Re-export main types
pub use audio::*;
