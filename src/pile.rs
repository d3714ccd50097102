//! Card containers: the draw pile, the table and the seat hands.

use serde::{Deserialize, Serialize};

use crate::card::{Card, Color};

/// Face-down stack of remaining cards. Cards only ever leave through [`DrawPile::pop`].
#[derive(Clone, Debug, Default)]
pub struct DrawPile {
    // Top of the pile is the last element.
    cards: Vec<Card>,
}

impl DrawPile {
    /// Builds a pile whose first element is drawn first.
    pub fn from_draw_order(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self { cards }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Discard pile whose top card is the active card, plus the colour required for
/// non-rank matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    discard: Vec<Card>,
    active_color: Option<Color>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table showing `card` with `color` as the active colour, mostly useful for tests and bots.
    pub fn showing(card: Card, color: Color) -> Self {
        Self {
            discard: vec![card],
            active_color: Some(color),
        }
    }

    #[inline]
    pub fn active_card(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    #[inline]
    pub fn active_color(&self) -> Option<Color> {
        self.active_color
    }

    /// Cards on the table, including the active one.
    #[inline]
    pub fn len(&self) -> usize {
        self.discard.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.discard.is_empty()
    }

    /// Places a card. Coloured cards set the active colour; wilds keep the previous
    /// colour until [`Table::set_color`] is called.
    pub fn place(&mut self, card: Card) {
        self.discard.push(card);
        if let Some(color) = card.color() {
            self.active_color = Some(color);
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.active_color = Some(color);
    }
}

/// Cards held by one seat, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[inline]
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first copy of `card`, returning its former index.
    pub fn remove(&mut self, card: Card) -> Option<usize> {
        let index = self.cards.iter().position(|held| *held == card)?;
        self.cards.remove(index);
        Some(index)
    }

    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Up to `len` cards starting at `start`; empty when `start` is past the end.
    pub fn window(&self, start: usize, len: usize) -> &[Card] {
        let start = start.min(self.cards.len());
        let end = start.saturating_add(len).min(self.cards.len());
        &self.cards[start..end]
    }

    /// Number of held cards of each colour, indexed by [`Color::catalog_index`].
    pub fn color_counts(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for color in self.cards.iter().filter_map(|card| card.color()) {
            counts[color.catalog_index()] += 1;
        }
        counts
    }
}
