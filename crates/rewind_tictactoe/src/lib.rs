//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: pure win/draw evaluation over a single board
//! - **State**: [`GameState`] with an immutable reducer ([`GameState::apply`])
//! - **Controller**: [`GameController`] owning the state and an [`Animator`]
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameController, Player, Status};
//!
//! let mut game = GameController::headless();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.activate_cell(cell);
//! }
//! assert_eq!(game.status(), Status::Winner(Player::X));
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! game.jump_to(0);
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod animation;
mod controller;
mod history;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Action, Rejection};
pub use animation::{Animator, NoopAnimator};
pub use controller::GameController;
pub use history::History;
pub use position::Position;
pub use rules::Phase;
pub use state::{GameState, MoveEntry, Status, move_label};
pub use types::{Board, Player, Square};
