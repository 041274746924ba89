//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminal I/O or input handling, making it:
//!
//! - **Deterministic**: Same seed produces identical pellet layouts
//! - **Testable**: Sessions can be staged by hand through public fields
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Allocation-free tick and snapshot once warmed up
//!
//! # Module Structure
//!
//! - [`config`]: Gameplay tuning as data, validated at load time
//! - [`entities`]: Player, pellets, ghosts and the circle overlap test
//! - [`game_state`]: Phase machine, tick, pickups, win/loss resolution
//! - [`rng`]: Seeded pellet placement
//! - [`snapshot`]: Read-only view handed to the presentation layer
//!
//! # Game Rules
//!
//! - **Player**: moves `speed` units per tick along the last direction given,
//!   clamped inside the field. Speed starts at 5 and grows by 1 per pellet.
//! - **Pellets**: 12 per session, scattered at random; collected on overlap.
//! - **Ghosts**: two, stepping 4 units per tick toward the player on both
//!   axes at once. They are never clamped to the field.
//! - **End**: a ghost overlapping the player is a loss; an empty pellet set is
//!   a win. Loss wins ties.
//!
//! # Example
//!
//! ```
//! use pellet_chase_core::GameState;
//! use pellet_chase_types::{Command, Direction, Phase};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.phase(), Phase::StartMenu);
//!
//! game.handle_input(Command::Start);
//! game.handle_input(Command::Direction(Direction::Right));
//! game.tick();
//!
//! assert_eq!(game.player().pos.x, 915.0);
//! ```
//!
//! # Timing
//!
//! One call to [`GameState::tick`](game_state::GameState::tick) is one fixed
//! step; the driver calls it at 60 Hz. There is no elapsed-time parameter.

pub mod config;
pub mod entities;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use pellet_chase_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use entities::{circles_overlap, Field, Ghost, Pellet, Player};
pub use game_state::{GameState, Session, TickSummary};
pub use rng::PelletScatter;
pub use snapshot::{CircleSnapshot, GameSnapshot};
