//! Stateless UI rendering.
//!
//! Each frame is a pure function of the controller state. Drawing returns
//! the click targets for that frame.

pub mod cell;
pub mod confetti;
pub mod grid;
pub mod info;

use crate::effects::{Effects, Overlay};
use crate::targets::Targets;
use grid::{GRID_HEIGHT, GRID_WIDTH, render_grid};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::GameController;

const HELP: &str = "Click a square or press 1-9 | Click history or ←/→ Home/End | Q: Quit";

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, controller: &GameController<Effects>) -> Targets {
    let mut targets = Targets::default();
    let state = controller.state();
    let effects = controller.animator();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Confetti banner
            Constraint::Min(GRID_HEIGHT + 2),    // Board and history
            Constraint::Length(1),               // Help
        ])
        .split(frame.area());

    let overlay = if state.winner().is_some() {
        effects.overlay()
    } else {
        Overlay::Hidden
    };
    confetti::render_banner(frame, chunks[0], overlay);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(GRID_WIDTH + 4), Constraint::Min(24)])
        .split(chunks[1]);

    let board_block = Block::default()
        .borders(Borders::ALL)
        .title("Tic Tac Toe");
    let board_area = board_block.inner(body[0]);
    frame.render_widget(board_block, body[0]);
    render_grid(frame, board_area, state.current_board(), effects, &mut targets);

    let info = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(body[1]);
    info::render_status(frame, info[0], state.status());
    info::render_moves(frame, info[1], &state.moves(), &mut targets);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);

    targets
}

/// Centers a `width` x `height` rectangle inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
