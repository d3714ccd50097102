use crate::action::Move;
use crate::card::Color;
use crate::state::SeatView;

/// Interface for deciding an automated seat's moves.
///
/// Implementations run on the automated player actor's thread, hence `Send`.
pub trait Strategy: Send {
    /// Picks one of `legal_moves`, which is never empty.
    fn choose_move(&mut self, view: &SeatView, legal_moves: &[Move]) -> Move;

    /// Names the active colour after this seat played a wild.
    fn choose_color(&mut self, view: &SeatView) -> Color;

    /// Whether to announce the last card once the hand is down to one.
    fn declares_last_card(&mut self, _view: &SeatView) -> bool {
        true
    }
}
