//! Win banner.

use crate::effects::Overlay;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const GLYPHS: [&str; 6] = ["*", "✦", "•", "+", "✧", "°"];
const COLORS: [Color; 6] = [
    Color::LightRed,
    Color::LightYellow,
    Color::LightGreen,
    Color::LightCyan,
    Color::LightBlue,
    Color::LightMagenta,
];

/// Renders the banner for the given stage. Hidden draws nothing.
pub fn render_banner(frame: &mut Frame, area: Rect, overlay: Overlay) {
    let border = match overlay {
        Overlay::Hidden => return,
        Overlay::Revealed => Color::DarkGray,
        Overlay::Fading(_) | Overlay::Shown => Color::Yellow,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = match overlay {
        Overlay::Fading(progress) => confetti(inner, |i| faded(i, progress)),
        Overlay::Shown => confetti(inner, |i| COLORS[i % COLORS.len()]),
        Overlay::Hidden | Overlay::Revealed => return,
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

fn faded(index: usize, progress: f32) -> Color {
    if progress < 1.0 / 3.0 {
        Color::DarkGray
    } else if progress < 2.0 / 3.0 {
        Color::Gray
    } else {
        COLORS[index % COLORS.len()]
    }
}

fn confetti(area: Rect, color: impl Fn(usize) -> Color) -> Vec<Line<'static>> {
    (0..area.height as usize)
        .map(|row| {
            let spans = (0..area.width as usize).map(|col| {
                if (col + row * 2) % 3 != 0 {
                    return Span::raw(" ");
                }
                let i = col * 7 + row * 3;
                Span::styled(GLYPHS[i % GLYPHS.len()], Style::default().fg(color(i)))
            });
            Line::from(spans.collect::<Vec<_>>())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confetti_fills_area() {
        let lines = confetti(Rect::new(0, 0, 12, 2), |_| Color::White);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.width() == 12));
        assert!(lines[0].to_string().starts_with('*'));
    }

    #[test]
    fn test_fade_ramps_towards_color() {
        assert_eq!(faded(0, 0.1), Color::DarkGray);
        assert_eq!(faded(0, 0.5), Color::Gray);
        assert_eq!(faded(0, 0.9), COLORS[0]);
    }
}
