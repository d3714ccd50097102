mod common;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use unobot::card::full_deck;
use unobot::Strategy as _;
use unobot::{
    Card, Color, Game, GameBuilder, Move, Phase, PlayError, RandomStrategy, Seat, Table, is_legal,
};

fn card_strategy() -> impl Strategy<Value = Card> {
    proptest::sample::select(full_deck())
}

fn color_strategy() -> impl Strategy<Value = Color> {
    proptest::sample::select(Color::ALL.to_vec())
}

fn held_cards(game: &Game) -> usize {
    game.hand_len(Seat::Human) + game.hand_len(Seat::Automated)
}

fn assert_conserved(game: &Game) {
    assert_eq!(
        held_cards(game) + game.draw_pile_len() + game.table().len(),
        game.total_cards()
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn matching_rank_or_colour_is_symmetric(
        a in card_strategy(),
        b in card_strategy(),
    ) {
        // Coloured cards only: a wild on the table carries a chosen colour instead.
        prop_assume!(!a.is_wild() && !b.is_wild());
        let on_a = Table::showing(a, a.color().unwrap_or(Color::Red));
        let on_b = Table::showing(b, b.color().unwrap_or(Color::Red));
        prop_assert_eq!(is_legal(b, &on_a), is_legal(a, &on_b));
    }

    #[test]
    fn legality_is_wild_or_rank_or_active_colour(
        card in card_strategy(),
        top in card_strategy(),
        color in color_strategy(),
    ) {
        // The active colour may differ from the top card's colour after a wild.
        let table = Table::showing(top, color);
        let expected =
            card.is_wild() || card.rank() == top.rank() || card.color() == Some(color);
        prop_assert_eq!(is_legal(card, &table), expected);
    }

    #[test]
    fn wilds_are_always_playable(
        top in card_strategy(),
        color in color_strategy(),
    ) {
        let table = Table::showing(top, color);
        prop_assert!(is_legal(Card::wild(), &table));
        prop_assert!(is_legal(Card::wild_draw_four(), &table));
    }

    #[test]
    fn random_play_conserves_cards_and_terminates(seed in any::<u64>()) {
        common::init_logging();
        let mut game = GameBuilder::new().with_seed(seed).build().expect("catalog deals");
        let mut strategy = RandomStrategy::new(StdRng::seed_from_u64(seed));
        assert_conserved(&game);

        for _ in 0..500 {
            let seat = match game.phase() {
                Phase::RoundOver(_) => break,
                Phase::AwaitingColorChoice(seat) => {
                    let color = strategy.choose_color(&game.view(seat));
                    game.choose_color(color).expect("colour choice pending");
                    assert_conserved(&game);
                    continue;
                }
                Phase::AwaitingPlay(seat) => seat,
            };

            let moves = game.legal_moves(seat).expect("seat is to play");
            for card in game.hand(seat).cards() {
                let listed = moves.contains(&Move::Play(*card));
                prop_assert_eq!(listed, game.is_legal(*card));
            }
            prop_assert_eq!(
                game.legal_moves(seat.other()),
                Err(PlayError::NotYourTurn)
            );

            match strategy.choose_move(&game.view(seat), &moves) {
                Move::Play(card) => game.play(seat, card).expect("listed move is legal"),
                Move::Draw => {
                    game.draw_card(seat).expect("listed draw succeeds");
                }
            }
            if game.hand_len(Seat::Human) == 1 {
                game.declare_penalty(Seat::Automated);
            }
            assert_conserved(&game);
        }

        prop_assert!(game.is_round_over());
        prop_assert!(game.winner().is_some());
    }
}
