use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::Move;
use crate::bot::Strategy;
use crate::card::Color;
use crate::state::SeatView;

/// Baseline strategy that samples uniformly from the legal moves and colours.
pub struct RandomStrategy<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> Strategy for RandomStrategy<R> {
    fn choose_move(&mut self, _view: &SeatView, legal_moves: &[Move]) -> Move {
        *legal_moves
            .choose(&mut self.rng)
            .expect("at least one legal move must be available")
    }

    fn choose_color(&mut self, _view: &SeatView) -> Color {
        Color::ALL[self.rng.gen_range(0..Color::ALL.len())]
    }

    fn declares_last_card(&mut self, _view: &SeatView) -> bool {
        self.rng.gen_bool(0.5)
    }
}
