use glam::Vec2;

use crate::types::{Direction, Phase};

/// A drawable circle: centre and radius in field units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSnapshot {
    pub pos: Vec2,
    pub radius: f32,
}

/// Everything the presentation layer reads for one frame.
///
/// `GameState::snapshot_into` refills an existing snapshot in place, so a
/// frontend that keeps one around renders without allocating.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub field_width: f32,
    pub field_height: f32,
    pub player: CircleSnapshot,
    pub player_direction: Option<Direction>,
    pub player_speed: u32,
    pub pellet_radius: f32,
    pub pellets: Vec<Vec2>,
    pub pellets_total: usize,
    pub ghosts: Vec<CircleSnapshot>,
    pub score: u32,
    pub session_id: u32,
    pub seed: u64,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::StartMenu,
            field_width: 0.0,
            field_height: 0.0,
            player: CircleSnapshot {
                pos: Vec2::ZERO,
                radius: 0.0,
            },
            player_direction: None,
            player_speed: 0,
            pellet_radius: 0.0,
            pellets: Vec::new(),
            pellets_total: 0,
            ghosts: Vec::new(),
            score: 0,
            session_id: 0,
            seed: 0,
        }
    }
}
