//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input mapping).
//!
//! # Field Dimensions
//!
//! The play field is a fixed rectangle in screen coordinates (y grows downward):
//!
//! - **Width**: 1820 units
//! - **Height**: 980 units
//! - **Player spawn**: field centre, (910, 490)
//!
//! # Entity Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PLAYER_RADIUS` | 20 | Player collision/draw radius |
//! | `PELLET_RADIUS` | 16 | Pellet collision/draw radius, also the spawn margin |
//! | `GHOST_RADIUS` | 35 | Ghost collision/draw radius |
//! | `NUM_PELLETS` | 12 | Pellets scattered per session |
//! | `PLAYER_BASE_SPEED` | 5 | Player units per tick at session start |
//! | `PLAYER_SPEED_STEP` | 1 | Speed gained per pellet collected |
//! | `GHOST_SPEED` | 4 | Ghost units per tick along each axis |
//!
//! # Timing
//!
//! The simulation advances one fixed step per frame at `TICK_RATE_HZ` (60 Hz).
//! Speeds are expressed per tick, never per second.
//!
//! # Examples
//!
//! ```
//! use pellet_chase_types::{Direction, Outcome, Phase, FIELD_WIDTH};
//!
//! // Screen coordinates: Up moves toward y = 0
//! assert_eq!(Direction::Up.delta(), (0.0, -1.0));
//!
//! // Phases
//! assert!(Phase::Ended(Outcome::Win).is_ended());
//! assert_eq!(FIELD_WIDTH, 1820.0);
//! ```

/// Field width in units (1820)
pub const FIELD_WIDTH: f32 = 1820.0;

/// Field height in units (980)
pub const FIELD_HEIGHT: f32 = 980.0;

/// Player radius (20)
pub const PLAYER_RADIUS: f32 = 20.0;

/// Pellet radius (16)
pub const PELLET_RADIUS: f32 = 16.0;

/// Ghost radius (35)
pub const GHOST_RADIUS: f32 = 35.0;

/// Pellets scattered at the start of every session
pub const NUM_PELLETS: usize = 12;

/// Player speed at session start, in units per tick
pub const PLAYER_BASE_SPEED: u32 = 5;

/// Player speed gained per pellet collected
pub const PLAYER_SPEED_STEP: u32 = 1;

/// Ghost speed along each axis, in units per tick
pub const GHOST_SPEED: u32 = 4;

/// Fixed simulation rate (60 ticks per second)
pub const TICK_RATE_HZ: u32 = 60;

/// Ghost spawn points.
///
/// The second one lies below the field; ghosts are never clamped, so it walks
/// in from off-screen.
pub const GHOST_SPAWNS: [(f32, f32); 2] = [(1600.0, 400.0), (400.0, 1600.0)];

/// The four movement directions of the player
///
/// The player moves along exactly one axis per tick. Directions use screen
/// coordinates, so **Up** decreases y and **Down** increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// Unit step along the direction's axis
    pub fn delta(&self) -> (f32, f32) {
        match self {
            Direction::Right => (1.0, 0.0),
            Direction::Up => (0.0, -1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Down => (0.0, 1.0),
        }
    }
}

/// Commands the input layer hands to the simulation
///
/// Commands that are not valid in the current [`Phase`] are ignored by the
/// simulation; the input layer does not need to filter them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Leave the game from any phase
    Quit,
    /// Leave the start menu and begin the first session
    Start,
    /// Begin a fresh session after the previous one ended
    Restart,
    /// Set the player's pending movement direction
    Direction(Direction),
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Every pellet was collected
    Win,
    /// A ghost caught the player
    Loss,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
        }
    }
}

/// Lifecycle of the game
///
/// ```text
/// StartMenu --Start--> Playing --(tick)--> Ended(Win|Loss)
///                         ^                      |
///                         +-------Restart--------+
/// any phase --Quit--> Terminated
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    StartMenu,
    Playing,
    Ended(Outcome),
    Terminated,
}

impl Phase {
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, Phase::Ended(_))
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, Phase::Terminated)
    }

    /// Outcome of the finished session, if the phase is `Ended`
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Ended(outcome) => Some(*outcome),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::StartMenu => "startMenu",
            Phase::Playing => "playing",
            Phase::Ended(_) => "ended",
            Phase::Terminated => "terminated",
        }
    }
}
