use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use crate::action::{Move, Seat};
use crate::bot::Strategy;
use crate::error::PlayError;
use crate::game::Game;
use crate::session::RoundShared;
use crate::state::Phase;

/// Plays one complete turn for `seat`, colour choice and declaration included.
///
/// Returns `Ok(false)` without touching the round when `seat` is not the one
/// the round is waiting for.
pub fn take_turn(
    game: &mut Game,
    seat: Seat,
    strategy: &mut dyn Strategy,
) -> Result<bool, PlayError> {
    match game.phase() {
        Phase::AwaitingColorChoice(current) if current == seat => {
            let color = strategy.choose_color(&game.view(seat));
            game.choose_color(color)?;
            return Ok(true);
        }
        Phase::AwaitingPlay(current) if current == seat => {}
        _ => return Ok(false),
    }

    let legal_moves = game.legal_moves(seat)?;
    if legal_moves.is_empty() {
        return Err(PlayError::DeckEmpty);
    }
    let chosen = strategy.choose_move(&game.view(seat), &legal_moves);
    debug!(%seat, ?chosen, "move chosen");
    match chosen {
        Move::Play(card) => {
            game.play(seat, card)?;
            if game.phase() == Phase::AwaitingColorChoice(seat) {
                let color = strategy.choose_color(&game.view(seat));
                game.choose_color(color)?;
            }
            if game.hand_len(seat) == 1
                && !game.is_round_over()
                && strategy.declares_last_card(&game.view(seat))
            {
                game.declare_last_card(seat)?;
            }
        }
        Move::Draw => {
            game.draw_card(seat)?;
        }
    }
    Ok(true)
}

pub(crate) fn spawn(
    shared: Arc<RoundShared>,
    strategy: Box<dyn Strategy>,
) -> io::Result<JoinHandle<Box<dyn Strategy>>> {
    thread::Builder::new()
        .name(String::from("automated-player"))
        .spawn(move || run(&shared, strategy))
}

/// Waits for the handoff, thinks, then acts under the round lock. Hands the
/// strategy back when stopped so the next round can reuse it.
fn run(shared: &RoundShared, mut strategy: Box<dyn Strategy>) -> Box<dyn Strategy> {
    info!("automated player started");
    while !shared.shutdown.is_stopped() {
        if !shared.handoff.wait(shared.config.idle_wait) {
            continue;
        }
        if !shared.shutdown.sleep(shared.config.think_delay) {
            break;
        }
        let mut game = shared.game.lock();
        match take_turn(&mut game, Seat::Automated, strategy.as_mut()) {
            Ok(true) => shared.publish(game),
            Ok(false) => {
                shared.handoff.take();
            }
            Err(err) => {
                warn!(%err, "automated move rejected");
                shared.handoff.take();
            }
        }
    }
    info!("automated player stopped");
    strategy
}
