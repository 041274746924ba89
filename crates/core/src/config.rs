//! Gameplay configuration and load-time validation.
//!
//! `GameConfig::default()` is the shipped tuning. Anything built from a
//! hand-made config goes through [`GameConfig::validate`] first, so the tick
//! path never has to guard against nonsense geometry.

use glam::Vec2;
use thiserror::Error;

use crate::types::{
    FIELD_HEIGHT, FIELD_WIDTH, GHOST_RADIUS, GHOST_SPAWNS, GHOST_SPEED, NUM_PELLETS,
    PELLET_RADIUS, PLAYER_BASE_SPEED, PLAYER_RADIUS, PLAYER_SPEED_STEP,
};

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("field must have positive finite dimensions, got {width}x{height}")]
    InvalidField { width: f32, height: f32 },

    #[error("{entity} radius must be positive and finite, got {radius}")]
    InvalidRadius { entity: &'static str, radius: f32 },

    #[error("{entity} of radius {radius} does not fit in a {width}x{height} field")]
    FieldTooSmall {
        entity: &'static str,
        radius: f32,
        width: f32,
        height: f32,
    },

    #[error("at least one pellet is required")]
    NoPellets,

    #[error("ghost spawn #{index} is not a finite point")]
    InvalidGhostSpawn { index: usize },
}

/// Every gameplay constant, as data.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub player_radius: f32,
    pub pellet_radius: f32,
    pub ghost_radius: f32,
    pub pellet_count: usize,
    pub player_base_speed: u32,
    pub player_speed_step: u32,
    pub ghost_speed: u32,
    pub ghost_spawns: Vec<Vec2>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            player_radius: PLAYER_RADIUS,
            pellet_radius: PELLET_RADIUS,
            ghost_radius: GHOST_RADIUS,
            pellet_count: NUM_PELLETS,
            player_base_speed: PLAYER_BASE_SPEED,
            player_speed_step: PLAYER_SPEED_STEP,
            ghost_speed: GHOST_SPEED,
            ghost_spawns: GHOST_SPAWNS
                .iter()
                .map(|&(x, y)| Vec2::new(x, y))
                .collect(),
        }
    }
}

impl GameConfig {
    /// Check every precondition the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.field_width, self.field_height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidField { width, height });
        }

        for (entity, radius) in [
            ("player", self.player_radius),
            ("pellet", self.pellet_radius),
            ("ghost", self.ghost_radius),
        ] {
            if !(radius.is_finite() && radius > 0.0) {
                return Err(ConfigError::InvalidRadius { entity, radius });
            }
        }

        // The player is clamped into the field and pellets are scattered inside
        // it, so both need at least their diameter on each axis. Pellet
        // coordinates are whole numbers, hence the rounding.
        if 2.0 * self.player_radius > width || 2.0 * self.player_radius > height {
            return Err(ConfigError::FieldTooSmall {
                entity: "player",
                radius: self.player_radius,
                width,
                height,
            });
        }
        let r = self.pellet_radius;
        if r.ceil() > (width - r).floor() || r.ceil() > (height - r).floor() {
            return Err(ConfigError::FieldTooSmall {
                entity: "pellet",
                radius: r,
                width,
                height,
            });
        }

        if self.pellet_count == 0 {
            return Err(ConfigError::NoPellets);
        }

        if let Some(index) = self.ghost_spawns.iter().position(|p| !p.is_finite()) {
            return Err(ConfigError::InvalidGhostSpawn { index });
        }

        Ok(())
    }

    /// Player spawn point: field centre, truncated to whole units.
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.field_width / 2.0).floor(),
            (self.field_height / 2.0).floor(),
        )
    }
}
