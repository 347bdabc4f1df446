//! Link card rendering with tilt-derived styling.
//!
//! The tilt engine publishes a transform descriptor; this module owns the
//! rest of the card's presentation. Rotation angles place a glare
//! highlight toward the pointer and the hover scale inflates the drawn
//! area by one cell on each side.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use vitrine_core::{AccentTheme, CardLink, MAX_TILT_DEG, TiltTransform};

/// Card width in terminal cells, before hover inflation.
pub const CARD_WIDTH: u16 = 32;

/// Card height in terminal cells, before hover inflation.
pub const CARD_HEIGHT: u16 = 9;

/// Render one link card into `area`.
pub fn render_card(
    frame: &mut Frame,
    area: Rect,
    link: &CardLink,
    transform: &TiltTransform,
    theme: AccentTheme,
    hovered: bool,
    index: usize,
) {
    let area = if hovered {
        inflated(area, frame.area())
    } else {
        area
    };

    let border_style = if hovered {
        Style::new().fg(theme.accent()).bold()
    } else {
        Style::new().fg(Color::DarkGray)
    };

    let block = Block::bordered()
        .border_style(border_style)
        .title(format!(" {} ", index + 1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title_style = if hovered {
        Style::new().fg(theme.accent()).bold()
    } else {
        Style::new().fg(Color::White)
    };

    let mut lines = vec![
        Line::raw(""),
        Line::from(link.title.clone()).style(title_style),
        Line::from(link.subtitle.clone()).style(Style::new().fg(Color::Gray)),
        Line::raw(""),
        Line::from(link.url.clone()).style(Style::new().fg(Color::DarkGray).italic()),
    ];

    // Glare row: a single bright cell that follows the tilt direction.
    if hovered && inner.width > 0 {
        let col = glare_column(transform, inner.width);
        let shine: String = (0..inner.width)
            .map(|i| if i == col { '✦' } else { ' ' })
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            shine,
            Style::new().fg(theme.accent()),
        )));
    }

    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, inner);
}

/// Column of the glare highlight inside a card of `inner_width` cells.
///
/// `rotateY` is positive when the pointer sits right of center, so the
/// glare tracks the pointer horizontally; the vertical component is
/// folded into the horizontal sweep since cards are only a few rows tall.
pub fn glare_column(transform: &TiltTransform, inner_width: u16) -> u16 {
    let dx = (transform.rotate_y_deg / MAX_TILT_DEG).clamp(-1.0, 1.0);
    let half = (inner_width.saturating_sub(1)) as f32 / 2.0;
    ((half + dx * half).round() as u16).min(inner_width.saturating_sub(1))
}

/// Grow `area` by one cell on each side, clipped to `bounds`.
/// This is the terminal rendition of the 1.05 hover scale.
fn inflated(area: Rect, bounds: Rect) -> Rect {
    let x = area.x.saturating_sub(1).max(bounds.x);
    let y = area.y.saturating_sub(1).max(bounds.y);
    let right = (area.x + area.width + 1).min(bounds.x + bounds.width);
    let bottom = (area.y + area.height + 1).min(bounds.y + bounds.height);
    Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glare_tracks_tilt() {
        let neutral = TiltTransform::neutral();
        assert_eq!(glare_column(&neutral, 31), 15);

        let right = TiltTransform {
            rotate_x_deg: 0.0,
            rotate_y_deg: MAX_TILT_DEG,
            scale: 1.05,
        };
        assert_eq!(glare_column(&right, 31), 30);

        let left = TiltTransform {
            rotate_x_deg: 0.0,
            rotate_y_deg: -MAX_TILT_DEG,
            scale: 1.05,
        };
        assert_eq!(glare_column(&left, 31), 0);
    }

    #[test]
    fn test_glare_clamps_overshoot() {
        // Unclamped tilt (pointer outside the region) must still land
        // inside the card.
        let overshoot = TiltTransform {
            rotate_x_deg: 0.0,
            rotate_y_deg: 3.0 * MAX_TILT_DEG,
            scale: 1.05,
        };
        assert_eq!(glare_column(&overshoot, 31), 30);
    }

    #[test]
    fn test_inflation_clips_to_bounds() {
        let bounds = Rect::new(0, 0, 80, 24);
        let grown = inflated(Rect::new(0, 0, 10, 5), bounds);
        assert_eq!(grown, Rect::new(0, 0, 11, 6));

        let grown = inflated(Rect::new(5, 5, 10, 5), bounds);
        assert_eq!(grown, Rect::new(4, 4, 12, 7));
    }
}
