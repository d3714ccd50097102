use crate::action::Move;
use crate::bot::Strategy;
use crate::card::{Color, Kind};
use crate::pile::Hand;
use crate::state::SeatView;

/// Straightforward automated player.
///
/// Policy:
/// 1. Play a legal WildDrawFour or DrawTwo, whichever comes first in hand order.
/// 2. Else play the first legal card in hand order.
/// 3. Else draw.
///
/// After a wild it names the colour it holds most of, ties going to the
/// colour listed first in [`Color::ALL`].
pub struct BasicStrategy;

impl BasicStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BasicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for BasicStrategy {
    fn choose_move(&mut self, _view: &SeatView, legal_moves: &[Move]) -> Move {
        assert!(
            !legal_moves.is_empty(),
            "basic strategy requires at least one legal move"
        );
        if let Some(m) = legal_moves.iter().find(|m| {
            matches!(
                m.card().map(|card| card.kind()),
                Some(Kind::WildDrawFour | Kind::DrawTwo)
            )
        }) {
            return *m;
        }
        if let Some(m) = legal_moves.iter().find(|m| matches!(m, Move::Play(_))) {
            return *m;
        }
        legal_moves
            .iter()
            .find(|m| matches!(m, Move::Draw))
            .copied()
            .unwrap_or(legal_moves[0])
    }

    fn choose_color(&mut self, view: &SeatView) -> Color {
        most_held_color(&Hand::from_cards(view.hand.clone()))
    }
}

/// Colour with the most cards in `hand`; earliest catalog colour on ties and for wild-only hands.
pub fn most_held_color(hand: &Hand) -> Color {
    let counts = hand.color_counts();
    let mut best = Color::ALL[0];
    for color in Color::ALL {
        if counts[color.catalog_index()] > counts[best.catalog_index()] {
            best = color;
        }
    }
    best
}
