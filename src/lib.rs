//! Pellet Chase (workspace facade crate).
//!
//! The simulation, input mapping and terminal rendering live in dedicated
//! crates under `crates/`; this package re-exports them as
//! `pellet_chase::{core,input,term,types}` and owns the pieces that tie them
//! together at run time: the frame loop and the process configuration.

pub mod driver;
pub mod frontend;
pub mod run_config;

pub use pellet_chase_core as core;
pub use pellet_chase_input as input;
pub use pellet_chase_term as term;
pub use pellet_chase_types as types;
