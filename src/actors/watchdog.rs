use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::action::Seat;
use crate::session::RoundShared;

pub(crate) fn spawn(shared: Arc<RoundShared>, seed: u64) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(String::from("declaration-watchdog"))
        .spawn(move || run(&shared, StdRng::seed_from_u64(seed)))
}

/// Checks the human hand after a random pause and calls out an undeclared last card.
fn run(shared: &RoundShared, mut rng: StdRng) {
    info!("declaration watchdog started");
    let max_delay =
        u64::try_from(shared.config.watchdog_max_delay.as_millis()).unwrap_or(u64::MAX);
    loop {
        let delay = Duration::from_millis(rng.gen_range(0..=max_delay));
        if !shared.shutdown.sleep(delay) {
            break;
        }
        let mut game = shared.game.lock();
        if game.hand_len(Seat::Human) == 1 && game.declare_penalty(Seat::Automated) {
            debug!("human caught holding an undeclared last card");
            shared.publish(game);
        }
    }
    info!("declaration watchdog stopped");
}
