//! Particle layer state and rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use vitrine_core::AccentTheme;

use crate::chars::particle_char;
use crate::color::particle_color;
use crate::particles::{self, Particle};

/// The ambient background layer.
///
/// Owns one immutable particle batch, generated exactly once per
/// activation. Rendering derives each particle's drift phase from elapsed
/// wall-clock time and the particle's own duration and delay; nothing is
/// stepped or stored between frames.
#[derive(Debug)]
pub struct ParticleLayer {
    particles: Vec<Particle>,
}

impl ParticleLayer {
    /// Create a layer with a freshly generated batch of `count` particles.
    pub fn new(count: usize) -> Self {
        Self {
            particles: particles::generate(count),
        }
    }

    /// The particle batch owned by this layer.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Replace the batch with a newly generated one. The old batch is
    /// fully discarded, never merged.
    pub fn regenerate(&mut self, count: usize) {
        self.particles = particles::generate(count);
    }

    /// Render the particle layer across `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, elapsed_ms: u64, theme: AccentTheme) {
        if area.width == 0 || area.height == 0 || self.particles.is_empty() {
            return;
        }

        // Resolve every particle to a cell once per frame, then paint.
        let cells: Vec<(u16, u16, &Particle)> = self
            .particles
            .iter()
            .filter_map(|p| {
                drift_position(p, area.width, area.height, elapsed_ms).map(|(x, y)| (x, y, p))
            })
            .collect();

        let lines: Vec<Line> = (0..area.height)
            .map(|y| {
                let spans: Vec<Span> = (0..area.width)
                    .map(|x| match cells.iter().find(|(cx, cy, _)| *cx == x && *cy == y) {
                        Some((_, _, p)) => {
                            let bucket = p.size_bucket();
                            Span::styled(
                                particle_char(p.id, bucket).to_string(),
                                Style::new().fg(particle_color(theme.hue(), bucket)),
                            )
                        }
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Cell occupied by a particle at the given elapsed time, or `None` while
/// the particle has not started or sits just outside the area.
///
/// A particle enters at the bottom edge once its delay has elapsed, drifts
/// upward over one duration, and wraps back to the bottom indefinitely.
pub fn drift_position(
    particle: &Particle,
    width: u16,
    height: u16,
    elapsed_ms: u64,
) -> Option<(u16, u16)> {
    let running_sec = elapsed_ms as f32 / 1000.0 - particle.delay_sec;
    if running_sec < 0.0 {
        return None;
    }

    let progress = (running_sec / particle.duration_sec).fract();
    let y = ((1.0 - progress) * height as f32) as u16;
    if y >= height {
        return None;
    }

    let x = ((particle.left_percent / 100.0) * width as f32) as u16;
    Some((x.min(width - 1), y))
}
