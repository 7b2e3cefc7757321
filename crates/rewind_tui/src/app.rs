//! Application state and input handling.

use crate::config::AnimationConfig;
use crate::effects::Effects;
use crate::targets::Targets;
use crate::ui;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use rewind_tictactoe::{Action, GameController};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Main application state.
pub struct App {
    controller: GameController<Effects>,
    targets: Targets,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(now))]
    pub fn new(animation: AnimationConfig, now: Instant) -> Self {
        Self {
            controller: GameController::new(Effects::new(animation, now)),
            targets: Targets::default(),
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &GameController<Effects> {
        &self.controller
    }

    /// Click targets from the last frame.
    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the next frame will differ without further input.
    pub fn is_animating(&self) -> bool {
        self.controller.animator().is_animating()
    }

    /// Advances the effect clock.
    pub fn tick(&mut self, now: Instant) {
        self.controller.animator_mut().tick(now);
    }

    /// Draws a frame and remembers its click targets.
    pub fn draw(&mut self, frame: &mut Frame) {
        self.targets = ui::draw(frame, &self.controller);
    }

    /// Handles one terminal event that arrived at `now`.
    ///
    /// The effect clock is advanced first so animations triggered by the
    /// event start when it happened.
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        self.tick(now);
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    #[instrument(skip(self))]
    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        let state = self.controller.state();
        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return self.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return self.quit();
            }
            KeyCode::Char(c @ '1'..='9') => Action::ActivateCell(c as usize - '1' as usize),
            KeyCode::Left => Action::JumpTo(state.step().saturating_sub(1)),
            KeyCode::Right => Action::JumpTo(state.step() + 1),
            KeyCode::Home => Action::JumpTo(0),
            KeyCode::End => Action::JumpTo(state.history().last_step()),
            _ => return,
        };
        self.controller.dispatch(action);
    }

    fn quit(&mut self) {
        info!("User quit");
        self.should_quit = true;
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match self.targets.hit(mouse.column, mouse.row) {
            Some(target) => {
                debug!(?target, column = mouse.column, row = mouse.row, "Click");
                self.controller.dispatch(target.action());
            }
            None => debug!(column = mouse.column, row = mouse.row, "Click on nothing"),
        }
    }
}
