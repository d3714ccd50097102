use serde::{Deserialize, Serialize};

use crate::action::Seat;
use crate::card::{Card, Color};

/// Number of hand cards a UI shows at once.
pub const HAND_PAGE_SIZE: usize = 4;

/// How a finished round ended.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Won(Seat),
    Tie,
}

impl Outcome {
    pub fn winner(self) -> Option<Seat> {
        match self {
            Outcome::Won(seat) => Some(seat),
            Outcome::Tie => None,
        }
    }
}

/// Current phase of the round.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    AwaitingPlay(Seat),
    /// The seat just played a wild and must name a colour.
    AwaitingColorChoice(Seat),
    RoundOver(Outcome),
}

impl Phase {
    /// Seat expected to act next, if any.
    pub fn seat(self) -> Option<Seat> {
        match self {
            Phase::AwaitingPlay(seat) | Phase::AwaitingColorChoice(seat) => Some(seat),
            Phase::RoundOver(_) => None,
        }
    }

    pub fn is_over(self) -> bool {
        matches!(self, Phase::RoundOver(_))
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Reversed,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reversed,
            Direction::Reversed => Direction::Forward,
        }
    }
}

/// Round snapshot from one seat's perspective, tailored for strategies and UIs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatView {
    pub seat: Seat,
    pub phase: Phase,
    pub direction: Direction,
    pub table_card: Option<Card>,
    pub active_color: Option<Color>,
    pub draw_pile_count: usize,
    pub hand: Vec<Card>,
    pub opponent_hand_size: usize,
    pub declared: bool,
}

impl SeatView {
    pub fn is_my_turn(&self) -> bool {
        self.phase.seat() == Some(self.seat)
    }
}

/// Paging cursor over a hand, moving one card at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HandWindow {
    start: usize,
}

impl HandWindow {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Shifts one card to the right while more than a page of cards remains past the cursor.
    pub fn next(&mut self, hand_len: usize) -> bool {
        if self.start + HAND_PAGE_SIZE < hand_len {
            self.start += 1;
            true
        } else {
            false
        }
    }

    pub fn back(&mut self) -> bool {
        if self.start > 0 {
            self.start -= 1;
            true
        } else {
            false
        }
    }

    /// Pulls the cursor back after the hand shrank.
    pub fn clamp(&mut self, hand_len: usize) {
        self.start = self.start.min(hand_len.saturating_sub(HAND_PAGE_SIZE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_moves_within_hand() {
        let mut window = HandWindow::new();
        assert!(!window.back());
        assert!(!window.next(4));
        assert!(window.next(6));
        assert!(window.next(6));
        assert!(!window.next(6));
        assert_eq!(window.start(), 2);
        window.clamp(5);
        assert_eq!(window.start(), 1);
        assert!(window.back());
        assert_eq!(window.start(), 0);
    }
}
