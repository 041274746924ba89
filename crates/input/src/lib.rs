//! Terminal input module (simulation-facing).
//!
//! This module is intentionally independent of rendering. It maps `crossterm`
//! key events into [`crate::types::Command`]s and drains one frame's worth of
//! pending events without blocking the fixed-rate loop.

pub mod drain;
pub mod map;

pub use pellet_chase_types as types;

pub use drain::{EventDrain, InputBatch, MAX_EVENTS_PER_FRAME};
pub use map::{map_key, should_quit};
