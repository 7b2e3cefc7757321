//! A single board square.

use crate::targets::{Target, Targets};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use rewind_tictactoe::{Player, Square};

/// Width of one square in terminal columns.
pub const CELL_WIDTH: u16 = 9;
/// Height of one square in terminal rows.
pub const CELL_HEIGHT: u16 = 3;

const BIG_X: [&str; 3] = ["╲   ╱", "  ╳  ", "╱   ╲"];
const BIG_O: [&str; 3] = ["╭───╮", "│   │", "╰───╯"];

/// Bounce values below this draw the mark small.
const GROWN: f32 = 0.6;

/// Renders one square and registers it as a click target.
///
/// `emphasis` is the eased progress of a running move animation.
pub fn render_cell(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    position: usize,
    emphasis: Option<f32>,
    targets: &mut Targets,
) {
    let paragraph = Paragraph::new(cell_lines(square, emphasis))
        .style(cell_style(square, emphasis))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
    targets.register(area, Target::Cell(position));
}

fn cell_lines(square: Square, emphasis: Option<f32>) -> Vec<Line<'static>> {
    let centered = |text: String| vec![Line::default(), Line::from(text), Line::default()];

    match square {
        Square::Empty => Vec::new(),
        Square::Occupied(player) if emphasis.is_some_and(|e| e < GROWN) => {
            centered(player.to_string())
        }
        Square::Occupied(player) => {
            let glyph = match player {
                Player::X => BIG_X,
                Player::O => BIG_O,
            };
            glyph.iter().map(|l| Line::from(*l)).collect()
        }
    }
}

fn cell_style(square: Square, emphasis: Option<f32>) -> Style {
    let animating = emphasis.is_some();
    match square {
        Square::Empty => Style::default(),
        Square::Occupied(Player::X) => Style::default()
            .fg(if animating { Color::LightBlue } else { Color::Blue })
            .add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default()
            .fg(if animating { Color::LightRed } else { Color::Red })
            .add_modifier(Modifier::BOLD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_empty_cell_is_blank() {
        assert!(cell_lines(Square::Empty, None).is_empty());
    }

    #[test]
    fn test_settled_mark_is_big() {
        let lines = cell_lines(Square::Occupied(Player::O), None);
        assert_eq!(text(&lines), BIG_O.to_vec());
    }

    #[test]
    fn test_bouncing_mark_starts_small() {
        let lines = cell_lines(Square::Occupied(Player::X), Some(0.1));
        assert_eq!(text(&lines), vec!["", "X", ""]);
        let lines = cell_lines(Square::Occupied(Player::X), Some(0.9));
        assert_eq!(text(&lines), BIG_X.to_vec());
    }
}
