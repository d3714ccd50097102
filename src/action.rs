use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// One of the two participants of a round.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Automated,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::Human, Seat::Automated];

    /// The opposing seat. With two seats this is also the next seat in either direction.
    #[inline]
    pub fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::Automated,
            Seat::Automated => Seat::Human,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Automated => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Human => f.write_str("human"),
            Seat::Automated => f.write_str("automated"),
        }
    }
}

/// Move available to a seat during its turn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Move {
    /// Play the given card from the seat's hand onto the table.
    Play(Card),
    /// Draw one card from the draw pile, ending the turn.
    Draw,
}

impl Move {
    /// Returns the card if the move is a play.
    pub fn card(&self) -> Option<Card> {
        match self {
            Move::Play(card) => Some(*card),
            Move::Draw => None,
        }
    }
}
