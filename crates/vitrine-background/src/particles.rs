//! Particle batch generation.

use rand::Rng;

/// Default number of particles in the ambient layer.
pub const DEFAULT_PARTICLE_COUNT: usize = 15;

/// A single ambient particle.
///
/// Attributes are immutable for the lifetime of the batch; only the
/// animation phase changes, and that is owned by the render layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in the generated sequence.
    pub id: usize,
    /// Visual size in the range `[2, 7)`.
    pub size_px: f32,
    /// Horizontal placement in the range `[0, 100)` percent.
    pub left_percent: f32,
    /// Animation cycle length in the range `[10, 20)` seconds.
    pub duration_sec: f32,
    /// Animation start offset in the range `[0, 5)` seconds.
    pub delay_sec: f32,
}

impl Particle {
    /// Size bucket (0 = small, 1 = medium, 2 = large) for glyph and
    /// color selection.
    pub fn size_bucket(&self) -> u8 {
        if self.size_px < 3.7 {
            0
        } else if self.size_px < 5.3 {
            1
        } else {
            2
        }
    }
}

/// Generate a batch of `count` particles with independent uniform draws.
///
/// Called once per activation of the ambient layer; calling it again
/// produces a new, unrelated batch. There is no seeding contract.
/// `count = 0` yields an empty batch.
pub fn generate(count: usize) -> Vec<Particle> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|id| Particle {
            id,
            size_px: rng.gen_range(2.0..7.0),
            left_percent: rng.gen_range(0.0..100.0),
            duration_sec: rng.gen_range(10.0..20.0),
            delay_sec: rng.gen_range(0.0..5.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_count_and_ranges() {
        let batch = generate(15);
        assert_eq!(batch.len(), 15);
        for (i, p) in batch.iter().enumerate() {
            assert_eq!(p.id, i);
            assert!((2.0..7.0).contains(&p.size_px));
            assert!((0.0..100.0).contains(&p.left_percent));
            assert!((10.0..20.0).contains(&p.duration_sec));
            assert!((0.0..5.0).contains(&p.delay_sec));
        }
    }

    #[test]
    fn test_generate_zero_is_empty() {
        assert!(generate(0).is_empty());
    }

    #[test]
    fn test_successive_batches_are_independent() {
        // No reproducibility is promised either way; both calls simply
        // must honor the contract.
        let a = generate(15);
        let b = generate(15);
        assert_eq!(a.len(), b.len());
        for p in a.iter().chain(b.iter()) {
            assert!((2.0..7.0).contains(&p.size_px));
        }
    }

    #[test]
    fn test_size_buckets_cover_range() {
        assert_eq!(
            Particle {
                id: 0,
                size_px: 2.0,
                left_percent: 0.0,
                duration_sec: 10.0,
                delay_sec: 0.0,
            }
            .size_bucket(),
            0
        );
        let mut medium = generate(1);
        medium[0].size_px = 4.5;
        assert_eq!(medium[0].size_bucket(), 1);
        medium[0].size_px = 6.9;
        assert_eq!(medium[0].size_bucket(), 2);
    }
}
