//! Confetti particles for the celebration overlay.
//!
//! Particles are rendered as absolutely positioned pieces that fall with a
//! CSS animation, so all that is generated here is where, when and how.

use rand::Rng;

/// Default number of pieces on screen.
pub const DEFAULT_PARTICLES: usize = 150;

const PALETTE: [&str; 8] = [
    "#f472b6", "#ec4899", "#c084fc", "#a855f7", "#60a5fa", "#fbbf24", "#34d399", "#fb7185",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal start, percent of viewport width
    pub left_pct: f64,
    pub delay_ms: u32,
    pub fall_ms: u32,
    pub size_px: u32,
    pub rotation_deg: i32,
    pub color: &'static str,
    pub round: bool,
}

impl Particle {
    /// Inline style for the rendered piece.
    pub fn style(&self) -> String {
        let radius = if self.round { "50%" } else { "2px" };
        format!(
            "left: {:.2}%; width: {}px; height: {}px; background: {}; border-radius: {}; \
             animation-delay: {}ms; animation-duration: {}ms; transform: rotate({}deg);",
            self.left_pct,
            self.size_px,
            self.size_px * 2 / 3 + 2,
            self.color,
            radius,
            self.delay_ms,
            self.fall_ms,
            self.rotation_deg,
        )
    }
}

/// Generate `count` particles; all land within a few seconds of each other.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left_pct: rng.random_range(0.0..100.0),
            delay_ms: rng.random_range(0..2_500),
            fall_ms: rng.random_range(3_000..6_500),
            size_px: rng.random_range(6..14),
            rotation_deg: rng.random_range(-180..180),
            color: PALETTE[rng.random_range(0..PALETTE.len())],
            round: rng.random_bool(0.3),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn particles_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate(200, &mut rng);
        assert_eq!(particles.len(), 200);
        for particle in &particles {
            assert!((0.0..100.0).contains(&particle.left_pct));
            assert!(particle.fall_ms >= 3_000);
            assert!(PALETTE.contains(&particle.color));
        }
    }

    #[test]
    fn seeded_generation_is_repeatable() {
        let a = generate(10, &mut StdRng::seed_from_u64(42));
        let b = generate(10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn style_contains_timing() {
        let particle = Particle {
            left_pct: 12.5,
            delay_ms: 300,
            fall_ms: 4000,
            size_px: 9,
            rotation_deg: 45,
            color: "#ec4899",
            round: false,
        };
        let style = particle.style();
        assert!(style.contains("left: 12.50%"));
        assert!(style.contains("animation-duration: 4000ms"));
        assert!(style.contains("rotate(45deg)"));
    }
}
