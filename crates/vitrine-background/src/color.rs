//! Color helpers for the particle field.

use ratatui::style::Color;

/// Color for a particle of the given size bucket, tinted by the theme hue.
///
/// Larger particles render brighter so depth reads at a glance.
pub fn particle_color(hue_deg: f32, size_bucket: u8) -> Color {
    let lightness = match size_bucket {
        0 => 0.35,
        1 => 0.55,
        _ => 0.75,
    };
    hsl_to_rgb(hue_deg, 0.55, lightness)
}

/// Convert an HSL triple (hue in degrees, saturation and lightness in
/// 0.0-1.0) to a terminal RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    let h = (h.rem_euclid(360.0)) / 360.0;

    let channel = |mut t: f32| -> u8 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (v * 255.0) as u8
    };

    Color::Rgb(channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_grayscale() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 0.0, 1.0), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_hsl_primary_hues() {
        // Full-saturation mid-lightness primaries.
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Color::Rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Color::Rgb(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_larger_buckets_are_brighter() {
        let brightness = |c: Color| match c {
            Color::Rgb(r, g, b) => r as u32 + g as u32 + b as u32,
            _ => 0,
        };
        let small = brightness(particle_color(210.0, 0));
        let large = brightness(particle_color(210.0, 2));
        assert!(large > small);
    }
}
