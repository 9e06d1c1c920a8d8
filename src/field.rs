// The particle network: a fixed pool of particles drifting around the viewport,
// with faint lines between every pair that comes close enough.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;
use vecmath::{vec2_len, vec2_sub};

/// Number of particles for a `width` x `height` viewport.
pub fn particle_count(width: f64, height: f64, config: &FieldConfig) -> usize {
    let area_count = (width * height / config.area_per_particle).floor();
    if area_count.is_finite() && area_count > 0.0 {
        (area_count as usize).min(config.max_particles)
    } else {
        0
    }
}

/// A pair of particles close enough to be joined.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

impl Link {
    /// Linear fade: 1 when touching, 0 at `max_distance`.
    pub fn alpha(&self, max_distance: f64) -> f64 {
        1.0 - self.distance / max_distance
    }
}

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    config: FieldConfig,
}

impl ParticleField {
    /// Seeds the pool for the initial viewport. The count is fixed from here on.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: FieldConfig,
    ) -> ParticleField {
        let count = particle_count(width, height, &config);
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        ParticleField::with_particles(width, height, particles, config)
    }

    pub fn with_particles(
        width: f64,
        height: f64,
        particles: Vec<Particle>,
        config: FieldConfig,
    ) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    // Only the bounce bounds follow the viewport; the pool is left alone.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        let bounds = [self.width, self.height];
        for particle in &mut self.particles {
            particle.step(bounds);
        }
    }

    /// Every unordered pair closer than the link distance, in `(a, b)` order with `a < b`.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for a in 0..self.particles.len() {
            for b in a + 1..self.particles.len() {
                let distance = vec2_len(vec2_sub(self.particles[a].pos, self.particles[b].pos));
                if distance < self.config.link_distance {
                    links.push(Link { a, b, distance });
                }
            }
        }
        links
    }

    /// One animation frame: clear, move and draw each particle, then draw the links.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.width, self.height);
        let bounds = [self.width, self.height];
        for particle in &mut self.particles {
            particle.step(bounds);
            surface.fill_glow_circle(
                particle.pos,
                particle.radius,
                particle.color,
                self.config.glow_blur,
            );
        }
        for link in self.links() {
            let from = &self.particles[link.a];
            let to = &self.particles[link.b];
            surface.stroke_line(
                from.pos,
                to.pos,
                from.color,
                link.alpha(self.config.link_distance),
                self.config.link_width,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, PALETTE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(f64, f64),
        Circle([f64; 2], Color),
        Line([f64; 2], [f64; 2], Color, f64),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, width: f64, height: f64) {
            self.ops.push(Op::Clear(width, height));
        }

        fn fill_glow_circle(&mut self, center: [f64; 2], _radius: f64, color: Color, _blur: f64) {
            self.ops.push(Op::Circle(center, color));
        }

        fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, alpha: f64, _width: f64) {
            self.ops.push(Op::Line(from, to, color, alpha));
        }
    }

    fn still(pos: [f64; 2], color: Color) -> Particle {
        Particle::new(pos, [0.0, 0.0], 2.0, color)
    }

    #[test]
    fn count_scales_with_area_and_caps() {
        let config = FieldConfig::default();
        assert_eq!(particle_count(1280.0, 720.0, &config), 23);
        assert_eq!(particle_count(199.0, 200.0, &config), 0);
        assert_eq!(particle_count(200.0, 200.0, &config), 1);
        assert_eq!(particle_count(7680.0, 4320.0, &config), 160);
        assert_eq!(particle_count(0.0, 0.0, &config), 0);
    }

    #[test]
    fn new_field_uses_area_count_and_keeps_it_on_resize() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = ParticleField::new(&mut rng, 1920.0, 1080.0, FieldConfig::default());
        assert_eq!(field.particles().len(), 51);
        field.resize(400.0, 300.0);
        assert_eq!(field.particles().len(), 51);
        assert_eq!(field.size(), (400.0, 300.0));
    }

    #[test]
    fn links_only_below_threshold() {
        let field = ParticleField::with_particles(
            1000.0,
            1000.0,
            vec![
                still([0.0, 0.0], PALETTE[0]),
                still([70.0, 0.0], PALETTE[1]),
                still([0.0, 140.0], PALETTE[2]),
                still([500.0, 500.0], PALETTE[3]),
            ],
            FieldConfig::default(),
        );
        // (0,2) sits exactly on the threshold and is excluded.
        assert_eq!(field.links(), vec![Link { a: 0, b: 1, distance: 70.0 }]);
        let links = field.links();
        assert_eq!(links[0].alpha(140.0), 0.5);
    }

    #[test]
    fn alpha_fades_linearly() {
        let link = |distance| Link { a: 0, b: 1, distance };
        assert_eq!(link(0.0).alpha(140.0), 1.0);
        assert_eq!(link(35.0).alpha(140.0), 0.75);
        assert!(link(139.0).alpha(140.0) > 0.0);
    }

    #[test]
    fn tick_clears_draws_particles_then_links_in_first_color() {
        let mut field = ParticleField::with_particles(
            800.0,
            600.0,
            vec![
                Particle::new([10.0, 10.0], [1.0, 0.0], 2.0, PALETTE[1]),
                Particle::new([40.0, 10.0], [0.0, 0.0], 2.0, PALETTE[2]),
            ],
            FieldConfig::default(),
        );
        let mut recorder = Recorder::default();
        field.tick(&mut recorder);
        assert_eq!(
            recorder.ops,
            vec![
                Op::Clear(800.0, 600.0),
                Op::Circle([11.0, 10.0], PALETTE[1]),
                Op::Circle([40.0, 10.0], PALETTE[2]),
                Op::Line([11.0, 10.0], [40.0, 10.0], PALETTE[1], 1.0 - 29.0 / 140.0),
            ]
        );
    }

    #[test]
    fn step_bounces_against_resized_bounds() {
        let mut field = ParticleField::with_particles(
            800.0,
            600.0,
            vec![Particle::new([399.5, 10.0], [1.0, 0.0], 2.0, PALETTE[0])],
            FieldConfig::default(),
        );
        field.resize(400.0, 600.0);
        field.step();
        assert_eq!(field.particles()[0].vel, [-1.0, 0.0]);
        assert_eq!(field.particles()[0].pos, [400.5, 10.0]);
    }
}
