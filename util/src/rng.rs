use std::hash::{Hash, Hasher};

use glam::{vec2, Vec2};
use rand::prelude::*;

use crate::GameRng;

/// Construct a throwaway random number generator seeded by a noise value.
///
/// Good for reproducible scene generation from a human-typed seed string.
pub fn srng(seed: &(impl Hash + ?Sized)) -> GameRng {
    let mut h = crate::FastHasher::default();
    seed.hash(&mut h);
    GameRng::seed_from_u64(h.finish())
}

pub trait RngExt {
    fn one_chance_in(&mut self, n: usize) -> bool;

    /// Uniformly distributed point inside a disc of `radius` around origin.
    fn point_in_disc(&mut self, radius: f32) -> Vec2;
}

impl<T: Rng + ?Sized> RngExt for T {
    fn one_chance_in(&mut self, n: usize) -> bool {
        if n == 0 {
            return false;
        }
        self.gen_range(0..n) == 0
    }

    fn point_in_disc(&mut self, radius: f32) -> Vec2 {
        // Square root keeps the density uniform over the area.
        let r = radius * self.gen::<f32>().sqrt();
        let a = self.gen_range(0.0..std::f32::consts::TAU);
        vec2(a.cos(), a.sin()) * r
    }
}
