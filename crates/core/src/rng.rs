//! RNG module - pellet placement
//!
//! Pellets are placed uniformly at random on whole-unit coordinates inside the
//! field, keeping one pellet radius of margin from every edge. The generator is
//! a seeded PCG so a given seed always produces the same sequence of layouts.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::entities::{Field, Pellet};

/// Seeded source of pellet layouts.
///
/// One scatter lives for the whole program; every session draws its layout
/// from the continuing sequence, so restarts get a fresh arrangement.
#[derive(Debug, Clone)]
pub struct PelletScatter {
    seed: u64,
    rng: Pcg32,
}

impl PelletScatter {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this scatter was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw one pellet position.
    ///
    /// Both coordinates come from the inclusive range `[radius, extent - radius]`
    /// rounded inward to whole units. The caller guarantees the range is
    /// non-empty (see `GameConfig::validate`).
    pub fn next_position(&mut self, field: &Field, radius: f32) -> Vec2 {
        let lo = radius.ceil() as i32;
        let hi_x = (field.width - radius).floor() as i32;
        let hi_y = (field.height - radius).floor() as i32;
        let x = self.rng.random_range(lo..=hi_x);
        let y = self.rng.random_range(lo..=hi_y);
        Vec2::new(x as f32, y as f32)
    }

    /// Fill `out` with `count` freshly placed pellets, replacing its contents.
    pub fn scatter_into(&mut self, field: &Field, radius: f32, count: usize, out: &mut Vec<Pellet>) {
        out.clear();
        out.reserve(count);
        for _ in 0..count {
            out.push(Pellet::new(self.next_position(field, radius)));
        }
    }

    pub fn scatter(&mut self, field: &Field, radius: f32, count: usize) -> Vec<Pellet> {
        let mut out = Vec::with_capacity(count);
        self.scatter_into(field, radius, count, &mut out);
        out
    }
}
