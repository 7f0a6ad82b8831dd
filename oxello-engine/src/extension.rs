//! Pluggable observers attached to a game session, and the match clock.

use crate::game::Game;
use crate::manager::{GameCommand, GameEvent};
use crate::piece::Piece;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// An auxiliary capability attached to a [`GameManager`](crate::GameManager).
///
/// Handlers are invoked synchronously from the manager and must run to
/// completion quickly; they are never re-entered, but the same event may be
/// delivered more than once (e.g. `NextTurn` on resume), so handlers should
/// tolerate repeats.
pub trait GameExtension {
    /// Handle a lifecycle event. `game` is the session's game at the moment
    /// of the transition.
    fn on_event(&mut self, event: GameEvent, game: &Game);

    /// Observe a command after the manager applied it.
    fn on_command(&mut self, _command: GameCommand, _game: &Game) {}

    /// Whether this extension produces a per-side result.
    fn has_result(&self) -> bool {
        false
    }

    /// The per-side result. The meaning of the value is extension-defined;
    /// the match timer reports whole seconds.
    fn result(&self, _piece: Piece) -> Option<i64> {
        None
    }
}

/// Tracks how much time each side has spent to move.
///
/// Time is measured on the monotonic clock and accumulated only while a
/// side is marked as current. Suspending flushes the open segment into that
/// side's total and clears the marker, so a pause/resume cycle never counts
/// the suspended period.
pub struct MatchTimer {
    segment_start: Instant,
    current: Option<Piece>,
    elapsed: HashMap<Piece, Duration>,
}

impl MatchTimer {
    pub fn new() -> Self {
        let mut elapsed = HashMap::new();
        elapsed.insert(Piece::Dark, Duration::ZERO);
        elapsed.insert(Piece::Light, Duration::ZERO);
        Self {
            segment_start: Instant::now(),
            current: None,
            elapsed,
        }
    }

    /// Total time charged to `piece` so far.
    pub fn elapsed(&self, piece: Piece) -> Duration {
        self.elapsed.get(&piece).copied().unwrap_or(Duration::ZERO)
    }

    /// Close the open segment, charging it to the side it belongs to.
    fn flush(&mut self, now: Instant) {
        if let Some(piece) = self.current {
            if let Some(total) = self.elapsed.get_mut(&piece) {
                *total += now - self.segment_start;
            }
        }
    }

    /// Charge the open segment and start a new one for the side now to move.
    fn advance(&mut self, game: &Game) {
        let now = Instant::now();
        self.flush(now);
        self.segment_start = now;
        self.current = Some(game.current());
    }

    /// Charge the open segment and stop accumulating.
    fn suspend(&mut self) {
        self.flush(Instant::now());
        self.current = None;
    }
}

impl Default for MatchTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameExtension for MatchTimer {
    fn on_event(&mut self, event: GameEvent, game: &Game) {
        match event {
            GameEvent::Begin | GameEvent::NextTurn => self.advance(game),
            GameEvent::Paused | GameEvent::End => self.suspend(),
        }
    }

    fn has_result(&self) -> bool {
        true
    }

    fn result(&self, piece: Piece) -> Option<i64> {
        Some(self.elapsed(piece).as_secs() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use std::thread::sleep;

    const TICK: Duration = Duration::from_millis(25);

    // Upper bound used to show a period was *not* charged. Generous enough
    // to absorb scheduler jitter on a loaded machine.
    const SLACK: Duration = Duration::from_millis(150);

    #[test]
    fn paused_time_is_not_charged() {
        let game = Game::new(Board::standard());
        let mut timer = MatchTimer::new();

        timer.on_event(GameEvent::Begin, &game);
        sleep(TICK);
        timer.on_event(GameEvent::Paused, &game);
        sleep(SLACK + TICK);
        timer.on_event(GameEvent::NextTurn, &game);
        sleep(TICK);
        timer.on_event(GameEvent::End, &game);

        let dark = timer.elapsed(Piece::Dark);
        assert!(dark >= 2 * TICK, "active time missing: {:?}", dark);
        assert!(
            dark < SLACK,
            "paused period was charged to dark: {:?}",
            dark
        );
        assert_eq!(timer.elapsed(Piece::Light), Duration::ZERO);
    }

    #[test]
    fn time_is_charged_to_the_side_to_move() {
        let board = Board::standard();
        let dark_to_move = Game::new(board.clone());
        let light_to_move = Game::with_current(board, Piece::Light);
        let mut timer = MatchTimer::new();

        timer.on_event(GameEvent::Begin, &dark_to_move);
        sleep(TICK);
        timer.on_event(GameEvent::NextTurn, &light_to_move);
        sleep(TICK);
        timer.on_event(GameEvent::End, &light_to_move);

        assert!(timer.elapsed(Piece::Dark) >= TICK);
        assert!(timer.elapsed(Piece::Light) >= TICK);
        assert!(timer.elapsed(Piece::Dark) < SLACK);
        assert!(timer.elapsed(Piece::Light) < SLACK);
    }

    #[test]
    fn results_report_whole_seconds() {
        let timer = MatchTimer::new();
        assert!(timer.has_result());
        assert_eq!(timer.result(Piece::Dark), Some(0));
        assert_eq!(timer.result(Piece::Light), Some(0));
    }
}
