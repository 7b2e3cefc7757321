//! Status line and clickable move history.

use crate::targets::{Target, Targets};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{MoveEntry, Status};

/// Renders the status line.
pub fn render_status(frame: &mut Frame, area: Rect, status: Status) {
    let color = match status {
        Status::Winner(_) => Color::Green,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let paragraph = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(paragraph, area);
}

/// Renders the move list; each visible entry becomes a click target.
///
/// When the list is taller than the area it scrolls so the current entry
/// stays visible.
pub fn render_moves(frame: &mut Frame, area: Rect, moves: &[MoveEntry], targets: &mut Targets) {
    let block = Block::default().borders(Borders::ALL).title("History");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    if visible == 0 {
        return;
    }
    let current = moves.iter().position(|m| *m.current()).unwrap_or(0);
    let skip = (current + 1).saturating_sub(visible);

    for (row, entry) in moves.iter().skip(skip).take(visible).enumerate() {
        let line_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        let style = if *entry.current() {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let text = format!("{:>2}. {}", entry.step() + 1, entry.label());
        frame.render_widget(Paragraph::new(Line::styled(text, style)), line_area);
        targets.register(line_area, Target::Step(*entry.step()));
    }
}
