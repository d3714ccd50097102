mod common;

use common::{init_logging, n, stacked_deck};
use rand::SeedableRng;
use rand::rngs::StdRng;
use unobot::actors::take_turn;
use unobot::bots::basic::most_held_color;
use unobot::{
    BasicStrategy, Card, Color, GameBuilder, Hand, Move, Phase, PlayError, RandomStrategy, Seat,
    Strategy,
};

use Color::{Blue, Green, Red, Yellow};

fn view_with(hand: Vec<Card>, table: Card) -> unobot::SeatView {
    let human = [n(Red, 9), n(Red, 8), n(Red, 7), n(Red, 6), n(Red, 4)];
    let automated = [n(Green, 9), n(Green, 8), n(Green, 7), n(Green, 6), n(Green, 4)];
    let game = GameBuilder::new()
        .with_deck(stacked_deck(&human, &automated, table))
        .build()
        .expect("game");
    let mut view = game.view(Seat::Automated);
    view.hand = hand;
    view
}

#[test]
fn basic_prefers_draw_penalties() {
    let mut strategy = BasicStrategy::new();
    let view = view_with(Vec::new(), n(Blue, 5));
    let moves = [
        Move::Play(n(Blue, 1)),
        Move::Play(Card::draw_two(Blue)),
        Move::Play(Card::wild_draw_four()),
        Move::Draw,
    ];
    assert_eq!(
        strategy.choose_move(&view, &moves),
        Move::Play(Card::draw_two(Blue))
    );
    assert_eq!(
        strategy.choose_move(&view, &[Move::Play(n(Blue, 1)), Move::Play(Card::wild()), Move::Draw]),
        Move::Play(n(Blue, 1))
    );
    assert_eq!(strategy.choose_move(&view, &[Move::Draw]), Move::Draw);
}

#[test]
fn basic_names_the_most_held_colour() {
    let mut strategy = BasicStrategy::new();
    let view = view_with(vec![n(Blue, 1), n(Red, 2), n(Blue, 3), Card::wild()], n(Blue, 5));
    assert_eq!(strategy.choose_color(&view), Blue);

    let tied = Hand::from_cards(vec![n(Red, 1), n(Yellow, 2), n(Green, 3)]);
    assert_eq!(most_held_color(&tied), Green);
    assert_eq!(most_held_color(&Hand::from_cards(vec![Card::wild()])), Green);
}

#[test]
fn random_strategy_only_picks_offered_moves() {
    let mut strategy = RandomStrategy::new(StdRng::seed_from_u64(5));
    let view = view_with(Vec::new(), n(Blue, 5));
    let moves = [Move::Play(n(Blue, 1)), Move::Play(Card::wild()), Move::Draw];
    for _ in 0..50 {
        assert!(moves.contains(&strategy.choose_move(&view, &moves)));
        assert!(Color::ALL.contains(&strategy.choose_color(&view)));
    }
}

#[test]
fn take_turn_plays_wild_draw_four_and_colour_together() -> Result<(), PlayError> {
    init_logging();
    let human = [n(Red, 5), n(Red, 1), n(Red, 2), n(Red, 3), n(Red, 4)];
    let automated = [
        n(Yellow, 9),
        Card::wild_draw_four(),
        n(Yellow, 1),
        n(Yellow, 2),
        n(Green, 3),
    ];
    let mut game = GameBuilder::new()
        .with_deck(stacked_deck(&human, &automated, n(Blue, 5)))
        .with_starting_seat(Seat::Automated)
        .build()
        .expect("game");
    let mut strategy = BasicStrategy::new();

    assert!(!take_turn(&mut game, Seat::Human, &mut strategy)?);
    assert!(take_turn(&mut game, Seat::Automated, &mut strategy)?);
    assert_eq!(game.active_color(), Some(Yellow));
    assert_eq!(game.hand_len(Seat::Human), 9);
    assert_eq!(game.phase(), Phase::AwaitingPlay(Seat::Human));
    Ok(())
}

#[test]
fn take_turn_declares_the_last_card() -> Result<(), PlayError> {
    init_logging();
    let human = [n(Red, 5), n(Red, 1), n(Red, 2), n(Red, 3), n(Red, 4)];
    let automated = [
        Card::skip(Blue),
        Card::skip(Green),
        Card::skip(Yellow),
        Card::skip(Red),
        n(Red, 9),
    ];
    let mut game = GameBuilder::new()
        .with_deck(stacked_deck(&human, &automated, n(Blue, 6)))
        .with_starting_seat(Seat::Automated)
        .build()
        .expect("game");
    let mut strategy = BasicStrategy::new();
    for _ in 0..4 {
        assert!(take_turn(&mut game, Seat::Automated, &mut strategy)?);
    }
    assert_eq!(game.hand_len(Seat::Automated), 1);
    assert!(game.has_declared(Seat::Automated));
    assert!(!game.declare_penalty(Seat::Human));
    Ok(())
}
