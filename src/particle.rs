// Simple particle struct to keep track of individual position, velocity, radius and color

use crate::color::{Color, PALETTE};
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    // Each velocity component is drawn from [-MAX_SPEED, MAX_SPEED)
    pub const MAX_SPEED: f64 = 0.3;
    pub const MIN_RADIUS: f64 = 1.0;
    pub const MAX_RADIUS: f64 = 3.0;

    pub fn new(pos: [f64; 2], vel: [f64; 2], radius: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Scatters a particle somewhere inside a `width` x `height` area.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos = [rng.gen::<f64>() * width, rng.gen::<f64>() * height];
        let vel = [
            (rng.gen::<f64>() - 0.5) * 2.0 * Particle::MAX_SPEED,
            (rng.gen::<f64>() - 0.5) * 2.0 * Particle::MAX_SPEED,
        ];
        let radius = rng.gen::<f64>() * (Particle::MAX_RADIUS - Particle::MIN_RADIUS)
            + Particle::MIN_RADIUS;
        let color = PALETTE[rng.gen_range(0, PALETTE.len())];
        Particle::new(pos, vel, radius, color)
    }

    // Moves one frame's worth of velocity, then flips the velocity on any axis
    // that left [0, bound]. The position itself is never clamped.
    pub fn step(&mut self, bounds: [f64; 2]) {
        for axis in 0..2 {
            self.pos[axis] += self.vel[axis];
            if self.pos[axis] < 0.0 || self.pos[axis] > bounds[axis] {
                self.vel[axis] = -self.vel[axis];
            }
        }
    }
}
