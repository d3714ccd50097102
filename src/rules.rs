//! Pure legality and effect classification. Nothing here mutates a round.

use serde::{Deserialize, Serialize};

use crate::card::{Card, Kind};
use crate::pile::Table;

/// Consequences of a legal play, computed from the card alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    /// Cards the next seat must draw.
    pub draw: usize,
    /// The next seat loses its turn, so the player keeps control.
    pub skip_next: bool,
    /// Direction of play flips.
    pub reverse: bool,
    /// The player must name the new active colour before play continues.
    pub choose_color: bool,
}

/// A card is legal on an empty table, when it is wild, or when it matches the
/// active card's rank or the active colour.
pub fn is_legal(card: Card, table: &Table) -> bool {
    let Some(active) = table.active_card() else {
        return true;
    };
    card.is_wild()
        || card.rank() == active.rank()
        || (card.color().is_some() && card.color() == table.active_color())
}

pub fn resolve_effect(card: Card) -> Effect {
    match card.kind() {
        Kind::Number => Effect::default(),
        Kind::Skip => Effect {
            skip_next: true,
            ..Effect::default()
        },
        // With two seats a reversal hands the turn straight back, exactly like a skip.
        Kind::Reverse => Effect {
            skip_next: true,
            reverse: true,
            ..Effect::default()
        },
        Kind::DrawTwo => Effect {
            draw: 2,
            ..Effect::default()
        },
        Kind::Wild => Effect {
            choose_color: true,
            ..Effect::default()
        },
        Kind::WildDrawFour => Effect {
            draw: 4,
            choose_color: true,
            ..Effect::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Color;

    #[test]
    fn empty_table_accepts_anything() {
        assert!(is_legal(Card::number(Color::Red, 3), &Table::new()));
    }

    #[test]
    fn rank_or_colour_is_enough() {
        let table = Table::showing(Card::number(Color::Blue, 5), Color::Blue);
        assert!(is_legal(Card::number(Color::Red, 5), &table));
        assert!(is_legal(Card::number(Color::Blue, 8), &table));
        assert!(!is_legal(Card::number(Color::Red, 8), &table));
        assert!(is_legal(Card::wild_draw_four(), &table));
    }

    #[test]
    fn active_colour_overrides_wild_card_colour() {
        let table = Table::showing(Card::wild(), Color::Green);
        assert!(is_legal(Card::skip(Color::Green), &table));
        assert!(!is_legal(Card::skip(Color::Red), &table));
        assert!(is_legal(Card::wild(), &table));
    }

    #[test]
    fn special_ranks_match_across_colours() {
        let table = Table::showing(Card::skip(Color::Yellow), Color::Yellow);
        assert!(is_legal(Card::skip(Color::Red), &table));
        assert!(!is_legal(Card::reverse(Color::Red), &table));
    }

    #[test]
    fn effects_by_kind() {
        assert_eq!(resolve_effect(Card::number(Color::Red, 1)), Effect::default());
        assert!(resolve_effect(Card::skip(Color::Red)).skip_next);
        let reverse = resolve_effect(Card::reverse(Color::Red));
        assert!(reverse.reverse && reverse.skip_next);
        assert_eq!(resolve_effect(Card::draw_two(Color::Red)).draw, 2);
        let four = resolve_effect(Card::wild_draw_four());
        assert_eq!(four.draw, 4);
        assert!(four.choose_color);
        assert!(resolve_effect(Card::wild()).choose_color);
    }
}
