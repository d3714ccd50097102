use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::action::{Move, Seat};
use crate::card::{Card, Color, HAND_SIZE, full_deck};
use crate::error::{GameError, PlayError};
use crate::pile::{DrawPile, Hand, Table};
use crate::rules::{self, Effect};
use crate::state::{Direction, Outcome, Phase, SeatView};

const DEFAULT_SEED: u64 = 0x5EED_5EED_5EED_5EED;

/// Cards needed to deal both hands and flip the first table card.
pub const CARDS_TO_START: usize = 2 * HAND_SIZE + 1;

/// Configuration required to bootstrap a round.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub seed: u64,
    pub starting_seat: Seat,
}

impl GameConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            starting_seat: Seat::Human,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Builder that enables deterministic deck injection for testing.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            deck: None,
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Replaces the shuffled catalog with `deck`, whose first card is drawn first.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn with_starting_seat(mut self, seat: Seat) -> Self {
        self.config.starting_seat = seat;
        self
    }

    /// Deals the round.
    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn effect held back until the player who played a wild names a colour.
#[derive(Clone, Copy, Debug)]
struct Deferred {
    seat: Seat,
    effect: Effect,
}

/// Authoritative state of one round: hands, piles, table and turn order.
///
/// Every mutating entry point either succeeds completely or returns a
/// [`PlayError`] without touching the round.
pub struct Game {
    hands: [Hand; 2],
    declared: [bool; 2],
    draw_pile: DrawPile,
    table: Table,
    phase: Phase,
    direction: Direction,
    deferred: Option<Deferred>,
    total_cards: usize,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Seat whose action the round is waiting for, `None` once the round is over.
    pub fn current_seat(&self) -> Option<Seat> {
        self.phase.seat()
    }

    pub fn next_seat(&self) -> Option<Seat> {
        self.current_seat().map(Seat::other)
    }

    pub fn current_table_card(&self) -> Option<Card> {
        self.table.active_card()
    }

    pub fn active_color(&self) -> Option<Color> {
        self.table.active_color()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn hand_len(&self, seat: Seat) -> usize {
        self.hands[seat.index()].len()
    }

    pub fn has_declared(&self, seat: Seat) -> bool {
        self.declared[seat.index()]
    }

    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Number of cards the round was dealt from.
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Paged read of a hand, clamped to its bounds.
    pub fn visible_hand(&self, seat: Seat, start: usize, len: usize) -> &[Card] {
        self.hands[seat.index()].window(start, len)
    }

    pub fn view(&self, seat: Seat) -> SeatView {
        SeatView {
            seat,
            phase: self.phase,
            direction: self.direction,
            table_card: self.table.active_card(),
            active_color: self.table.active_color(),
            draw_pile_count: self.draw_pile.len(),
            hand: self.hands[seat.index()].cards().to_vec(),
            opponent_hand_size: self.hand_len(seat.other()),
            declared: self.has_declared(seat),
        }
    }

    pub fn is_legal(&self, card: Card) -> bool {
        rules::is_legal(card, &self.table)
    }

    /// Playable cards in hand order, then drawing while the pile still has cards.
    pub fn legal_moves(&self, seat: Seat) -> Result<Vec<Move>, PlayError> {
        self.ensure_turn(seat)?;
        let mut moves: Vec<Move> = self.hands[seat.index()]
            .cards()
            .iter()
            .filter(|card| self.is_legal(**card))
            .map(|card| Move::Play(*card))
            .collect();
        if !self.draw_pile.is_empty() {
            moves.push(Move::Draw);
        }
        Ok(moves)
    }

    pub fn play(&mut self, seat: Seat, card: Card) -> Result<(), PlayError> {
        self.ensure_turn(seat)?;
        if !self.is_legal(card) {
            return Err(PlayError::CardNotPlayable);
        }
        if self.hands[seat.index()].remove(card).is_none() {
            panic!("{seat} seat does not hold {card}");
        }
        self.hand_changed(seat);
        self.table.place(card);
        let effect = rules::resolve_effect(card);
        debug!(%seat, %card, ?effect, "card played");

        if self.hands[seat.index()].is_empty() {
            self.finish_if_over();
            return Ok(());
        }
        if effect.choose_color {
            self.deferred = Some(Deferred { seat, effect });
            self.phase = Phase::AwaitingColorChoice(seat);
            debug!(%seat, "awaiting colour choice");
            return Ok(());
        }
        self.apply_effect(seat, effect);
        Ok(())
    }

    /// Names the active colour after a wild and completes the held-back turn advance.
    pub fn choose_color(&mut self, color: Color) -> Result<(), PlayError> {
        let seat = match self.phase {
            Phase::AwaitingColorChoice(seat) => seat,
            Phase::RoundOver(_) => return Err(PlayError::RoundOver),
            Phase::AwaitingPlay(_) => return Err(PlayError::IllegalColorChoice),
        };
        self.table.set_color(color);
        debug!(%seat, %color, "colour chosen");
        match self.deferred.take() {
            Some(Deferred { seat, effect }) => self.apply_effect(seat, effect),
            // A wild flipped at round start only needs its colour.
            None => self.phase = Phase::AwaitingPlay(seat),
        }
        Ok(())
    }

    /// Draws one card for the current seat, which ends its turn.
    pub fn draw_card(&mut self, seat: Seat) -> Result<Card, PlayError> {
        if self.draw_pile.is_empty() {
            return Err(PlayError::DeckEmpty);
        }
        self.ensure_turn(seat)?;
        let card = self.draw_pile.pop().ok_or(PlayError::DeckEmpty)?;
        self.hands[seat.index()].push(card);
        self.hand_changed(seat);
        debug!(%seat, %card, "card drawn");
        self.phase = Phase::AwaitingPlay(seat.other());
        self.finish_if_over();
        Ok(card)
    }

    /// `accuser` calls out the other seat for holding one undeclared card; the
    /// accused draws one. Returns whether a card was drawn.
    pub fn declare_penalty(&mut self, accuser: Seat) -> bool {
        if self.phase.is_over() {
            return false;
        }
        let target = accuser.other();
        if self.hand_len(target) != 1 || self.has_declared(target) {
            return false;
        }
        let Some(card) = self.draw_pile.pop() else {
            return false;
        };
        self.hands[target.index()].push(card);
        self.hand_changed(target);
        info!(%accuser, %target, "undeclared last card, penalty draw");
        self.finish_if_over();
        true
    }

    /// `seat` announces it is down to its last card, which protects it from the penalty.
    pub fn declare_last_card(&mut self, seat: Seat) -> Result<(), PlayError> {
        if self.phase.is_over() {
            return Err(PlayError::RoundOver);
        }
        if self.hand_len(seat) != 1 {
            return Err(PlayError::NothingToDeclare);
        }
        self.declared[seat.index()] = true;
        debug!(%seat, "last card declared");
        Ok(())
    }

    pub fn is_round_over(&self) -> bool {
        self.phase.is_over() || self.evaluate_outcome().is_some()
    }

    pub fn winner(&self) -> Option<Outcome> {
        match self.phase {
            Phase::RoundOver(outcome) => Some(outcome),
            _ => self.evaluate_outcome(),
        }
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        let deck = if let Some(deck) = deck {
            deck
        } else {
            let mut rng = StdRng::seed_from_u64(config.seed);
            let mut deck = full_deck();
            deck.shuffle(&mut rng);
            deck
        };
        if deck.len() < CARDS_TO_START {
            return Err(GameError::EmptyDrawPile {
                needed: CARDS_TO_START,
                available: deck.len(),
            });
        }

        let total_cards = deck.len();
        let mut draw_pile = DrawPile::from_draw_order(deck);
        let exhausted = || GameError::EmptyDrawPile {
            needed: CARDS_TO_START,
            available: total_cards,
        };
        let mut hands = [Hand::new(), Hand::new()];
        for step in 0..2 * HAND_SIZE {
            let seat = if step % 2 == 0 {
                Seat::Human
            } else {
                Seat::Automated
            };
            let card = draw_pile.pop().ok_or_else(exhausted)?;
            hands[seat.index()].push(card);
        }
        let seed_card = draw_pile.pop().ok_or_else(exhausted)?;
        let mut table = Table::new();
        table.place(seed_card);

        let starting_seat = config.starting_seat;
        let phase = if seed_card.is_wild() {
            Phase::AwaitingColorChoice(starting_seat)
        } else {
            Phase::AwaitingPlay(starting_seat)
        };

        let mut game = Game {
            hands,
            declared: [false; 2],
            draw_pile,
            table,
            phase,
            direction: Direction::Forward,
            deferred: None,
            total_cards,
        };
        info!(
            table = %seed_card,
            starting = %starting_seat,
            draw_pile = game.draw_pile.len(),
            "round dealt"
        );
        game.finish_if_over();
        Ok(game)
    }

    fn ensure_turn(&self, seat: Seat) -> Result<(), PlayError> {
        match self.phase {
            Phase::RoundOver(_) => Err(PlayError::RoundOver),
            Phase::AwaitingColorChoice(_) => Err(PlayError::ColorChoicePending),
            Phase::AwaitingPlay(current) if current != seat => Err(PlayError::NotYourTurn),
            Phase::AwaitingPlay(_) => Ok(()),
        }
    }

    fn apply_effect(&mut self, seat: Seat, effect: Effect) {
        if effect.reverse {
            self.direction = self.direction.flipped();
        }
        if effect.draw > 0 {
            let drawn = self.draw_cards(seat.other(), effect.draw);
            debug!(seat = %seat.other(), drawn, "penalty cards drawn");
        }
        let next = if effect.skip_next { seat } else { seat.other() };
        self.phase = Phase::AwaitingPlay(next);
        self.finish_if_over();
    }

    /// Gives up to `count` cards to `seat`, stopping early on an empty pile.
    fn draw_cards(&mut self, seat: Seat, count: usize) -> usize {
        let mut drawn = 0;
        while drawn < count {
            let Some(card) = self.draw_pile.pop() else {
                break;
            };
            self.hands[seat.index()].push(card);
            drawn += 1;
        }
        if drawn > 0 {
            self.hand_changed(seat);
        }
        drawn
    }

    fn hand_changed(&mut self, seat: Seat) {
        self.declared[seat.index()] = false;
    }

    fn evaluate_outcome(&self) -> Option<Outcome> {
        let human = self.hand_len(Seat::Human);
        let automated = self.hand_len(Seat::Automated);
        if human == 0 {
            return Some(Outcome::Won(Seat::Human));
        }
        if automated == 0 {
            return Some(Outcome::Won(Seat::Automated));
        }
        if !self.draw_pile.is_empty() {
            return None;
        }
        Some(match human.cmp(&automated) {
            std::cmp::Ordering::Less => Outcome::Won(Seat::Human),
            std::cmp::Ordering::Greater => Outcome::Won(Seat::Automated),
            std::cmp::Ordering::Equal => Outcome::Tie,
        })
    }

    fn finish_if_over(&mut self) {
        if self.phase.is_over() {
            return;
        }
        if let Some(outcome) = self.evaluate_outcome() {
            self.phase = Phase::RoundOver(outcome);
            self.deferred = None;
            info!(?outcome, "round over");
        }
    }
}
