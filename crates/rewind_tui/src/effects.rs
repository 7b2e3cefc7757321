//! Terminal implementation of the decorative animations.
//!
//! Effects are driven by an explicit clock: the event loop calls
//! [`Effects::tick`] with the current instant and rendering reads the
//! derived progress. Nothing here touches game state.

use crate::config::AnimationConfig;
use rewind_tictactoe::Animator;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Visibility of the win banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    /// Not triggered.
    Hidden,
    /// Stage one: banner is visible but still empty.
    Revealed,
    /// Stage two: confetti fading in, progress in `0.0..1.0`.
    Fading(f32),
    /// Fully shown; stays until the next trigger.
    Shown,
}

/// Bounce-out easing over `t` in `0.0..=1.0`.
pub fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    let t = t.clamp(0.0, 1.0);
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

fn fraction(elapsed: Duration, total: Duration) -> f32 {
    elapsed.as_secs_f32() / total.as_secs_f32()
}

/// Move and win effects for the terminal.
#[derive(Debug, Clone)]
pub struct Effects {
    config: AnimationConfig,
    now: Instant,
    moves: [Option<Instant>; 9],
    win: Option<Instant>,
}

impl Effects {
    /// Creates effects whose clock starts at `now`.
    #[instrument(skip(now))]
    pub fn new(config: AnimationConfig, now: Instant) -> Self {
        Self {
            config,
            now,
            moves: [None; 9],
            win: None,
        }
    }

    /// Advances the effect clock. Instants earlier than the current one
    /// are ignored.
    pub fn tick(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Eased bounce value for the mark at `position`, while its move
    /// animation is running.
    pub fn cell_emphasis(&self, position: usize) -> Option<f32> {
        let started = self.moves.get(position).copied().flatten()?;
        let total = self.config.move_duration();
        let elapsed = self.now.saturating_duration_since(started);
        (elapsed < total).then(|| bounce_out(fraction(elapsed, total)))
    }

    /// Current stage of the win banner.
    pub fn overlay(&self) -> Overlay {
        let Some(started) = self.win else {
            return Overlay::Hidden;
        };
        if !self.config.enabled() {
            return Overlay::Shown;
        }

        let reveal = self.config.reveal_duration();
        let fade = self.config.fade_duration();
        let elapsed = self.now.saturating_duration_since(started);
        if elapsed < reveal {
            Overlay::Revealed
        } else if elapsed < reveal + fade {
            Overlay::Fading(fraction(elapsed - reveal, fade))
        } else {
            Overlay::Shown
        }
    }

    /// Whether any effect still changes from frame to frame.
    pub fn is_animating(&self) -> bool {
        let cells = (0..self.moves.len()).any(|p| self.cell_emphasis(p).is_some());
        let banner = matches!(self.overlay(), Overlay::Revealed | Overlay::Fading(_));
        cells || banner
    }
}

impl Animator for Effects {
    fn animate_move(&mut self, position: usize) {
        if !self.config.enabled() {
            return;
        }
        if let Some(slot) = self.moves.get_mut(position) {
            debug!(position, "Move animation started");
            *slot = Some(self.now);
        }
    }

    fn animate_win(&mut self) {
        debug!(enabled = self.config.enabled(), "Win animation started");
        self.win = Some(self.now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effects(config: AnimationConfig) -> (Effects, Instant) {
        let start = Instant::now();
        (Effects::new(config, start), start)
    }

    #[test]
    fn test_bounce_out_endpoints() {
        assert_eq!(bounce_out(0.0), 0.0);
        assert!((bounce_out(1.0) - 1.0).abs() < 1e-4);
        assert!(bounce_out(0.5) > 0.5);
        assert_eq!(bounce_out(-1.0), 0.0);
    }

    #[test]
    fn test_move_emphasis_expires() {
        let (mut fx, start) = effects(AnimationConfig::default());
        assert_eq!(fx.cell_emphasis(4), None);

        fx.animate_move(4);
        assert_eq!(fx.cell_emphasis(4), Some(0.0));
        assert!(fx.is_animating());

        fx.tick(start + Duration::from_millis(500));
        assert!(fx.cell_emphasis(4).is_some());
        assert_eq!(fx.cell_emphasis(3), None);

        fx.tick(start + Duration::from_millis(1000));
        assert_eq!(fx.cell_emphasis(4), None);
        assert!(!fx.is_animating());
    }

    #[test]
    fn test_move_outside_board_ignored() {
        let (mut fx, _) = effects(AnimationConfig::default());
        fx.animate_move(9);
        assert!(!fx.is_animating());
    }

    #[test]
    fn test_win_banner_runs_two_stages() {
        let (mut fx, start) = effects(AnimationConfig::default());
        assert_eq!(fx.overlay(), Overlay::Hidden);

        fx.animate_win();
        assert_eq!(fx.overlay(), Overlay::Revealed);

        fx.tick(start + Duration::from_millis(1500));
        match fx.overlay() {
            Overlay::Fading(p) => assert!((p - 0.5).abs() < 1e-3),
            other => panic!("expected fading, got {:?}", other),
        }

        fx.tick(start + Duration::from_millis(2000));
        assert_eq!(fx.overlay(), Overlay::Shown);
        assert!(!fx.is_animating());
    }

    #[test]
    fn test_clock_never_runs_backwards() {
        let (mut fx, start) = effects(AnimationConfig::default());
        fx.tick(start + Duration::from_millis(100));
        fx.animate_win();
        fx.tick(start);
        assert_eq!(fx.overlay(), Overlay::Revealed);
    }

    #[test]
    fn test_effects_do_not_change_game_state() {
        use rewind_tictactoe::{Action, GameController};

        let actions = [
            Action::ActivateCell(0),
            Action::ActivateCell(3),
            Action::ActivateCell(3),
            Action::ActivateCell(1),
            Action::JumpTo(1),
            Action::ActivateCell(4),
            Action::ActivateCell(9),
            Action::ActivateCell(1),
            Action::ActivateCell(8),
            Action::ActivateCell(7),
            Action::JumpTo(7),
            Action::JumpTo(2),
        ];

        let mut headless = GameController::headless();
        let mut animated = GameController::new(effects(AnimationConfig::default()).0);
        let mut disabled = GameController::new(effects(AnimationConfig::disabled()).0);
        for action in actions {
            headless.dispatch(action);
            animated.dispatch(action);
            disabled.dispatch(action);
            assert_eq!(animated.state(), headless.state());
            assert_eq!(disabled.state(), headless.state());
        }
        assert_eq!(headless.state().step(), 2);
    }

    #[test]
    fn test_disabled_effects_show_banner_immediately() {
        let (mut fx, _) = effects(AnimationConfig::disabled());
        fx.animate_move(0);
        assert_eq!(fx.cell_emphasis(0), None);

        fx.animate_win();
        assert_eq!(fx.overlay(), Overlay::Shown);
        assert!(!fx.is_animating());
    }
}
