//! Concurrent front of the engine: one shared round, the UI caller and two background actors.

use std::sync::Arc;
use std::thread::JoinHandle;

use parking_lot::{Mutex, MutexGuard};
use tracing::{info, warn};

use crate::action::{Move, Seat};
use crate::actors::signal::{Handoff, Shutdown};
use crate::actors::{automated, watchdog};
use crate::bot::Strategy;
use crate::bots::BasicStrategy;
use crate::card::{Card, Color};
use crate::config::SessionConfig;
use crate::error::{GameError, PlayError};
use crate::game::Game;
use crate::observer::Observer;
use crate::state::{Outcome, Phase, SeatView};

/// Everything the actors of one round share. Rebuilt from scratch on restart.
pub(crate) struct RoundShared {
    pub(crate) game: Mutex<Game>,
    pub(crate) handoff: Handoff,
    pub(crate) shutdown: Shutdown,
    pub(crate) observer: Arc<dyn Observer>,
    pub(crate) config: SessionConfig,
    // Phase seen by the last publish; only written with the round lock held.
    announced: Mutex<Option<Phase>>,
}

impl RoundShared {
    fn new(game: Game, observer: Arc<dyn Observer>, config: SessionConfig) -> Self {
        Self {
            game: Mutex::new(game),
            handoff: Handoff::new(),
            shutdown: Shutdown::new(),
            observer,
            config,
            announced: Mutex::new(None),
        }
    }

    /// Syncs the handoff with the round, releases the lock, then notifies the observer.
    ///
    /// Colour-choice and round-over callbacks fire once, when the round enters
    /// that phase; later changes within the same phase only report a state change.
    pub(crate) fn publish(&self, game: MutexGuard<'_, Game>) {
        let phase = game.phase();
        let entered = self.announced.lock().replace(phase) != Some(phase);
        if game.current_seat() == Some(Seat::Automated) {
            self.handoff.raise();
        } else {
            self.handoff.take();
        }
        drop(game);

        self.observer.on_state_changed();
        if !entered {
            return;
        }
        match phase {
            Phase::AwaitingColorChoice(Seat::Human) => {
                self.observer.on_color_choice_required(Seat::Human)
            }
            Phase::RoundOver(outcome) => self.observer.on_round_over(outcome),
            _ => {}
        }
    }
}

struct Actors {
    automated: JoinHandle<Box<dyn Strategy>>,
    watchdog: JoinHandle<()>,
}

/// A running game: the current round plus the automated player and watchdog actors bound to it.
///
/// All round mutations, from any thread, go through one lock. Dropping the
/// session stops and joins both actors.
pub struct Session {
    config: SessionConfig,
    observer: Arc<dyn Observer>,
    round: u64,
    shared: Arc<RoundShared>,
    actors: Option<Actors>,
    strategy: Option<Box<dyn Strategy>>,
}

impl Session {
    /// Deals the first round from `config` and starts both actors.
    pub fn new(
        config: SessionConfig,
        strategy: Box<dyn Strategy>,
        observer: Arc<dyn Observer>,
    ) -> Result<Self, GameError> {
        let game = Game::new(config.game_config(0))?;
        Self::from_game(config, game, strategy, observer)
    }

    /// Starts a session on an already dealt round. Later rounds are dealt from `config`.
    pub fn from_game(
        config: SessionConfig,
        game: Game,
        strategy: Box<dyn Strategy>,
        observer: Arc<dyn Observer>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let shared = Arc::new(RoundShared::new(game, Arc::clone(&observer), config));
        let mut session = Self {
            config,
            observer,
            round: 0,
            shared,
            actors: None,
            strategy: Some(strategy),
        };
        session.launch()?;
        Ok(session)
    }

    /// Tears down the current round's actors, deals a fresh round and starts new actors.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        self.stop_actors();
        self.round += 1;
        let game = Game::new(self.config.game_config(self.round))?;
        self.shared = Arc::new(RoundShared::new(
            game,
            Arc::clone(&self.observer),
            self.config,
        ));
        info!(round = self.round, "round restarted");
        self.launch()
    }

    /// Stops both actors. The round stays readable; restart with [`Session::start_round`].
    pub fn stop(&mut self) {
        self.stop_actors();
    }

    /// Number of restarts so far.
    pub fn round_number(&self) -> u64 {
        self.round
    }

    pub fn play(&self, seat: Seat, card: Card) -> Result<(), PlayError> {
        let mut game = self.shared.game.lock();
        game.play(seat, card)?;
        self.shared.publish(game);
        Ok(())
    }

    pub fn choose_color(&self, color: Color) -> Result<(), PlayError> {
        let mut game = self.shared.game.lock();
        game.choose_color(color)?;
        self.shared.publish(game);
        Ok(())
    }

    pub fn draw_card(&self, seat: Seat) -> Result<Card, PlayError> {
        let mut game = self.shared.game.lock();
        let card = game.draw_card(seat)?;
        self.shared.publish(game);
        Ok(card)
    }

    pub fn declare_penalty(&self, accuser: Seat) -> bool {
        let mut game = self.shared.game.lock();
        let applied = game.declare_penalty(accuser);
        if applied {
            self.shared.publish(game);
        }
        applied
    }

    pub fn declare_last_card(&self, seat: Seat) -> Result<(), PlayError> {
        let mut game = self.shared.game.lock();
        game.declare_last_card(seat)?;
        self.shared.publish(game);
        Ok(())
    }

    /// Runs one turn for `seat` with `strategy`, consulting it without holding the round lock.
    ///
    /// Meant for seats driven from the caller's thread, such as a console player.
    pub fn play_turn(&self, seat: Seat, strategy: &mut dyn Strategy) -> Result<(), PlayError> {
        let (view, legal_moves) = {
            let game = self.shared.game.lock();
            if game.phase() == Phase::AwaitingColorChoice(seat) {
                (game.view(seat), Vec::new())
            } else {
                let moves = game.legal_moves(seat)?;
                (game.view(seat), moves)
            }
        };
        if view.phase == Phase::AwaitingColorChoice(seat) {
            return self.choose_color(strategy.choose_color(&view));
        }
        if legal_moves.is_empty() {
            return Err(PlayError::DeckEmpty);
        }
        match strategy.choose_move(&view, &legal_moves) {
            Move::Play(card) => {
                self.play(seat, card)?;
                let view = self.snapshot(seat);
                if view.phase == Phase::AwaitingColorChoice(seat) {
                    self.choose_color(strategy.choose_color(&view))?;
                }
                let view = self.snapshot(seat);
                if view.hand.len() == 1 && !view.phase.is_over() && strategy.declares_last_card(&view)
                {
                    self.declare_last_card(seat)?;
                }
            }
            Move::Draw => {
                self.draw_card(seat)?;
            }
        }
        Ok(())
    }

    pub fn is_round_over(&self) -> bool {
        self.shared.game.lock().is_round_over()
    }

    pub fn winner(&self) -> Option<Outcome> {
        self.shared.game.lock().winner()
    }

    pub fn visible_hand(&self, seat: Seat, start: usize, len: usize) -> Vec<Card> {
        self.shared.game.lock().visible_hand(seat, start, len).to_vec()
    }

    pub fn current_table_card(&self) -> Option<Card> {
        self.shared.game.lock().current_table_card()
    }

    pub fn current_seat(&self) -> Option<Seat> {
        self.shared.game.lock().current_seat()
    }

    pub fn snapshot(&self, seat: Seat) -> SeatView {
        self.shared.game.lock().view(seat)
    }

    /// Read access to the whole round under the lock.
    pub fn with_game<T>(&self, read: impl FnOnce(&Game) -> T) -> T {
        read(&self.shared.game.lock())
    }

    fn launch(&mut self) -> Result<(), GameError> {
        let strategy = self.strategy.take().unwrap_or_else(|| {
            warn!("automated strategy was lost, falling back to the basic strategy");
            Box::new(BasicStrategy::new())
        });
        let automated = automated::spawn(Arc::clone(&self.shared), strategy)?;
        let watchdog_seed = self.config.game_config(self.round).seed ^ 0xA5A5_A5A5;
        let watchdog = match watchdog::spawn(Arc::clone(&self.shared), watchdog_seed) {
            Ok(handle) => handle,
            Err(err) => {
                self.shared.shutdown.stop();
                self.shared.handoff.interrupt();
                if let Ok(strategy) = automated.join() {
                    self.strategy = Some(strategy);
                }
                return Err(err.into());
            }
        };
        self.actors = Some(Actors {
            automated,
            watchdog,
        });

        let game = self.shared.game.lock();
        self.shared.publish(game);
        Ok(())
    }

    fn stop_actors(&mut self) {
        let Some(actors) = self.actors.take() else {
            return;
        };
        self.shared.shutdown.stop();
        self.shared.handoff.interrupt();
        match actors.automated.join() {
            Ok(strategy) => self.strategy = Some(strategy),
            Err(_) => warn!("automated player actor panicked"),
        }
        if actors.watchdog.join().is_err() {
            warn!("declaration watchdog actor panicked");
        }
        info!(round = self.round, "actors stopped");
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop_actors();
    }
}
