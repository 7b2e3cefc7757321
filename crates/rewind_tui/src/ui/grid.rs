//! The 3x3 board.

use super::cell::{CELL_HEIGHT, CELL_WIDTH, render_cell};
use super::center_rect;
use crate::effects::Effects;
use crate::targets::Targets;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};
use rewind_tictactoe::{Board, Position};

/// Width of the board including separators.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the board including separators.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the board centered in `area`; every square becomes a click target.
pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    effects: &Effects,
    targets: &mut Targets,
) {
    let board_area = center_rect(area, GRID_WIDTH, GRID_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for (i, positions) in Position::ROWS.iter().enumerate() {
        render_row(frame, rows[i * 2], board, positions, effects, targets);
        if i < 2 {
            render_separator(frame, rows[i * 2 + 1]);
        }
    }
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    positions: &[Position; 3],
    effects: &Effects,
    targets: &mut Targets,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (i, &pos) in positions.iter().enumerate() {
        let index = pos.to_index();
        render_cell(
            frame,
            cols[i * 2],
            board.get(pos),
            index,
            effects.cell_emphasis(index),
            targets,
        );
        if i < 2 {
            render_vertical_sep(frame, cols[i * 2 + 1]);
        }
    }
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let run = "─".repeat(CELL_WIDTH as usize);
    let sep = Paragraph::new(format!("{run}┼{run}┼{run}"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
