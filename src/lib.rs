//! Proposal Card - an animated marriage proposal
//!
//! The simulation half: particles, message sequencing, the evasive decline
//! button, timers and the celebration choreography. The window, input and
//! drawing live in the binary.

pub mod audio;
pub mod config;
pub mod effects;
pub mod error;
pub mod evasive;
pub mod experience;
pub mod sequencer;
pub mod settings;
pub mod timeline;
