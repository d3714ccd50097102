use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Colour of a non-wild card, listed in catalog order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Green,
    Yellow,
    Blue,
    Red,
}

impl Color {
    /// Every colour in catalog order. Tie-breaks between colours follow this order.
    pub const ALL: [Color; 4] = [Color::Green, Color::Yellow, Color::Blue, Color::Red];

    pub fn name(self) -> &'static str {
        match self {
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::Blue => "BLUE",
            Color::Red => "RED",
        }
    }

    /// Position of the colour within [`Color::ALL`].
    #[inline]
    pub fn catalog_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCardError::UnknownColor(s.to_string()))
    }
}

/// Behavioural class of a card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Number,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Kind {
    #[inline]
    pub fn is_wild(self) -> bool {
        matches!(self, Kind::Wild | Kind::WildDrawFour)
    }
}

/// Face value of a card. Two cards match by rank when their ranks are equal,
/// so every Skip matches every other Skip regardless of colour.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    #[inline]
    pub fn kind(self) -> Kind {
        match self {
            Rank::Number(_) => Kind::Number,
            Rank::Skip => Kind::Skip,
            Rank::Reverse => Kind::Reverse,
            Rank::DrawTwo => Kind::DrawTwo,
            Rank::Wild => Kind::Wild,
            Rank::WildDrawFour => Kind::WildDrawFour,
        }
    }
}

pub const MAX_NUMBER: u8 = 9;
pub const HAND_SIZE: usize = 5;
pub const CATALOG_SIZE: usize = 54;

/// A single card. Colour is `None` only for the two wild kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    color: Option<Color>,
    rank: Rank,
}

impl Card {
    pub fn number(color: Color, value: u8) -> Self {
        debug_assert!(value <= MAX_NUMBER);
        Self {
            color: Some(color),
            rank: Rank::Number(value),
        }
    }

    pub fn skip(color: Color) -> Self {
        Self {
            color: Some(color),
            rank: Rank::Skip,
        }
    }

    pub fn reverse(color: Color) -> Self {
        Self {
            color: Some(color),
            rank: Rank::Reverse,
        }
    }

    pub fn draw_two(color: Color) -> Self {
        Self {
            color: Some(color),
            rank: Rank::DrawTwo,
        }
    }

    pub fn wild() -> Self {
        Self {
            color: None,
            rank: Rank::Wild,
        }
    }

    pub fn wild_draw_four() -> Self {
        Self {
            color: None,
            rank: Rank::WildDrawFour,
        }
    }

    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.rank.kind()
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        self.kind().is_wild()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rank, self.color) {
            (Rank::Number(value), Some(color)) => write!(f, "{color}_{value}"),
            (Rank::Skip, Some(color)) => write!(f, "SKIP_{color}"),
            (Rank::Reverse, Some(color)) => write!(f, "REVERSE_{color}"),
            (Rank::DrawTwo, Some(color)) => write!(f, "TWO_WILD_DRAW_{color}"),
            (Rank::Wild, _) => f.write_str("WILD"),
            (Rank::WildDrawFour, _) => f.write_str("FOUR_WILD_DRAW"),
            (rank, None) => write!(f, "{rank:?}"),
        }
    }
}

/// Failure to parse a canonical card or colour name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("unknown colour '{0}'")]
    UnknownColor(String),
    #[error("unknown card '{0}'")]
    UnknownCard(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the canonical names produced by `Display`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase();
        match name.as_str() {
            "WILD" => return Ok(Card::wild()),
            "FOUR_WILD_DRAW" => return Ok(Card::wild_draw_four()),
            _ => {}
        }
        let unknown = || ParseCardError::UnknownCard(s.to_string());
        if let Some(color) = name.strip_prefix("TWO_WILD_DRAW_") {
            return Ok(Card::draw_two(color.parse().map_err(|_| unknown())?));
        }
        if let Some(color) = name.strip_prefix("SKIP_") {
            return Ok(Card::skip(color.parse().map_err(|_| unknown())?));
        }
        if let Some(color) = name.strip_prefix("REVERSE_") {
            return Ok(Card::reverse(color.parse().map_err(|_| unknown())?));
        }
        let (color, value) = name.rsplit_once('_').ok_or_else(unknown)?;
        let color: Color = color.parse().map_err(|_| unknown())?;
        match value.parse::<u8>() {
            Ok(value) if value <= MAX_NUMBER => Ok(Card::number(color, value)),
            _ => Err(unknown()),
        }
    }
}

/// Builds the full 54-card catalog in deterministic order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(CATALOG_SIZE);
    deck.push(Card::wild());
    deck.push(Card::wild_draw_four());
    for color in Color::ALL {
        deck.push(Card::draw_two(color));
        deck.push(Card::skip(color));
        deck.push(Card::reverse(color));
    }
    for color in Color::ALL {
        for value in 0..=MAX_NUMBER {
            deck.push(Card::number(color, value));
        }
    }
    deck
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_fifty_four_distinct_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), CATALOG_SIZE);
        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), CATALOG_SIZE);
        assert_eq!(deck.iter().filter(|card| card.is_wild()).count(), 2);
        assert!(deck.iter().all(|card| card.is_wild() == card.color().is_none()));
    }

    #[test]
    fn names_parse_back() {
        for card in full_deck() {
            let name = card.to_string();
            assert_eq!(name.parse::<Card>(), Ok(card), "{name}");
        }
        assert_eq!("red_5".parse::<Card>(), Ok(Card::number(Color::Red, 5)));
        assert!("PURPLE_5".parse::<Card>().is_err());
        assert!("RED_10".parse::<Card>().is_err());
    }
}
