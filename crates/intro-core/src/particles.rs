use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hue {
    Cyan,
    Pink,
}

impl Hue {
    pub fn glow_rgb(self) -> [u8; 3] {
        match self {
            Hue::Cyan => CYAN_GLOW_RGB,
            Hue::Pink => PINK_GLOW_RGB,
        }
    }

    pub fn core_rgba(self) -> &'static str {
        match self {
            Hue::Cyan => CYAN_CORE_RGBA,
            Hue::Pink => PINK_CORE_RGBA,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub glow: f32,
    pub hue: Hue,
}

/// Decorative background field. The whole set is replaced on resize and
/// advanced once per animation frame by the owning frame loop.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace the field wholesale with a count sized for the viewport width.
    pub fn populate(&mut self, width: f32, height: f32) {
        let count = particle_count_for_width(width);
        let rng = &mut self.rng;
        self.particles = (0..count).map(|_| spawn_particle(rng, width, height)).collect();
    }

    /// Advance every particle by its velocity, wrapping across the viewport
    /// once it drifts past the off-screen margin. After each step every
    /// coordinate lies within `[-WRAP_MARGIN_PX, extent + WRAP_MARGIN_PX]`.
    pub fn step(&mut self, width: f32, height: f32) {
        for p in &mut self.particles {
            p.pos += p.vel;

            if p.pos.x < -WRAP_MARGIN_PX {
                p.pos.x = width + WRAP_MARGIN_PX;
            }
            if p.pos.x > width + WRAP_MARGIN_PX {
                p.pos.x = -WRAP_MARGIN_PX;
            }
            if p.pos.y < -WRAP_MARGIN_PX {
                p.pos.y = height + WRAP_MARGIN_PX;
            }
            if p.pos.y > height + WRAP_MARGIN_PX {
                p.pos.y = -WRAP_MARGIN_PX;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

fn spawn_particle(rng: &mut StdRng, width: f32, height: f32) -> Particle {
    let hue = if rng.gen::<f32>() > PINK_THRESHOLD {
        Hue::Cyan
    } else {
        Hue::Pink
    };
    Particle {
        pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
        vel: Vec2::new(
            (rng.gen::<f32>() - 0.5) * VEL_SPAN_X,
            (rng.gen::<f32>() - 0.5) * VEL_SPAN_Y,
        ),
        radius: RADIUS_MIN_PX + rng.gen::<f32>() * RADIUS_SPAN_PX,
        glow: GLOW_ALPHA_MIN + rng.gen::<f32>() * GLOW_ALPHA_SPAN,
        hue,
    }
}

/// Narrow viewports get a smaller field.
pub fn particle_count_for_width(width: f32) -> usize {
    if width < MOBILE_BREAKPOINT_PX {
        PARTICLE_COUNT_MOBILE
    } else {
        PARTICLE_COUNT_DESKTOP
    }
}
