//! Entities module - player, pellets and ghosts
//!
//! Entities are plain data with per-tick update rules. None of them hold a
//! reference to another; the game state passes positions in when an update
//! depends on some other entity (ghost pursuit, collision checks).

use glam::Vec2;

use crate::types::Direction;

/// Circle overlap test used for pickups and ghost collisions.
///
/// Tangent circles (distance exactly equal to the radius sum) do not overlap.
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Axis-aligned play field. Positions are in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp a circle centre so the whole circle stays inside the field.
    ///
    /// Requires `2 * radius <= width` and `2 * radius <= height`; config
    /// validation guarantees this for the player.
    pub fn clamp_circle(&self, pos: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            pos.x.clamp(radius, self.width - radius),
            pos.y.clamp(radius, self.height - radius),
        )
    }

    pub fn contains_circle(&self, pos: Vec2, radius: f32) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }
}

/// The player-controlled circle
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    /// Last direction set by input; `None` until the first one arrives.
    pub direction: Option<Direction>,
    /// Units per tick along `direction`.
    pub speed: u32,
    pub radius: f32,
}

impl Player {
    pub fn new(pos: Vec2, speed: u32, radius: f32) -> Self {
        Self {
            pos,
            direction: None,
            speed,
            radius,
        }
    }

    /// Move `speed` units along the current direction, then clamp to the field.
    pub fn update_position(&mut self, field: &Field) {
        if let Some(dir) = self.direction {
            let (dx, dy) = dir.delta();
            self.pos += Vec2::new(dx, dy) * self.speed as f32;
        }
        self.pos = field.clamp_circle(self.pos, self.radius);
    }
}

/// A stationary collectible. Its position never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pellet {
    pos: Vec2,
}

impl Pellet {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }
}

/// A pursuing enemy.
///
/// Pursuit is greedy per axis: each tick the ghost steps `speed` units toward
/// the target on both axes at once, or holds an axis that is already aligned.
/// Ghosts are not clamped to the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Ghost {
    pub pos: Vec2,
    /// Per-axis step sign from the last `move_toward` (-1, 0 or +1).
    pub heading: (i8, i8),
    pub speed: u32,
    pub radius: f32,
}

impl Ghost {
    pub fn new(pos: Vec2, speed: u32, radius: f32) -> Self {
        Self {
            pos,
            heading: (0, 0),
            speed,
            radius,
        }
    }

    pub fn move_toward(&mut self, target: Vec2) {
        self.heading = (pursuit_sign(self.pos.x, target.x), pursuit_sign(self.pos.y, target.y));
        let step = self.speed as f32;
        self.pos.x += self.heading.0 as f32 * step;
        self.pos.y += self.heading.1 as f32 * step;
    }
}

fn pursuit_sign(current: f32, target: f32) -> i8 {
    if target < current {
        -1
    } else if target > current {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Field {
        Field::new(1820.0, 980.0)
    }

    #[test]
    fn tangent_circles_do_not_overlap() {
        let a = Vec2::new(0.0, 0.0);
        assert!(!circles_overlap(a, 20.0, Vec2::new(36.0, 0.0), 16.0));
        assert!(circles_overlap(a, 20.0, Vec2::new(35.9, 0.0), 16.0));
    }

    #[test]
    fn player_without_direction_stays_put() {
        let mut p = Player::new(Vec2::new(910.0, 490.0), 5, 20.0);
        p.update_position(&field());
        assert_eq!(p.pos, Vec2::new(910.0, 490.0));
    }

    #[test]
    fn player_moves_along_one_axis() {
        let mut p = Player::new(Vec2::new(910.0, 490.0), 5, 20.0);

        p.direction = Some(Direction::Up);
        p.update_position(&field());
        assert_eq!(p.pos, Vec2::new(910.0, 485.0));

        p.direction = Some(Direction::Left);
        p.update_position(&field());
        assert_eq!(p.pos, Vec2::new(905.0, 485.0));

        p.direction = Some(Direction::Down);
        p.update_position(&field());
        assert_eq!(p.pos, Vec2::new(905.0, 490.0));
    }

    #[test]
    fn player_is_clamped_at_every_edge() {
        let f = field();
        let mut p = Player::new(Vec2::new(1798.0, 22.0), 5, 20.0);

        p.direction = Some(Direction::Right);
        p.update_position(&f);
        assert_eq!(p.pos.x, 1800.0);

        p.direction = Some(Direction::Up);
        p.update_position(&f);
        assert_eq!(p.pos.y, 20.0);

        p.pos = Vec2::new(22.0, 958.0);
        p.direction = Some(Direction::Left);
        p.update_position(&f);
        assert_eq!(p.pos.x, 20.0);

        p.direction = Some(Direction::Down);
        p.update_position(&f);
        assert_eq!(p.pos.y, 960.0);
        assert!(f.contains_circle(p.pos, p.radius));
    }

    #[test]
    fn ghost_steps_diagonally_toward_target() {
        let mut g = Ghost::new(Vec2::new(1600.0, 400.0), 4, 35.0);
        g.move_toward(Vec2::new(100.0, 100.0));
        assert_eq!(g.heading, (-1, -1));
        assert_eq!(g.pos, Vec2::new(1596.0, 396.0));
    }

    #[test]
    fn ghost_holds_aligned_axis() {
        let mut g = Ghost::new(Vec2::new(400.0, 100.0), 4, 35.0);
        g.move_toward(Vec2::new(900.0, 100.0));
        assert_eq!(g.heading, (1, 0));
        assert_eq!(g.pos, Vec2::new(404.0, 100.0));
    }

    #[test]
    fn ghost_is_not_clamped_to_field() {
        let mut g = Ghost::new(Vec2::new(400.0, 1600.0), 4, 35.0);
        g.move_toward(Vec2::new(400.0, 2000.0));
        assert_eq!(g.pos, Vec2::new(400.0, 1604.0));
        assert!(!field().contains_circle(g.pos, g.radius));
    }
}
