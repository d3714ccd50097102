#![allow(dead_code)]

use std::thread;
use std::time::{Duration, Instant};

use tracing_subscriber::{EnvFilter, fmt};
use unobot::card::{self, Card, Color};

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub fn n(color: Color, value: u8) -> Card {
    Card::number(color, value)
}

/// Catalog deck in draw order: `human` and `automated` are dealt interleaved,
/// `table` is flipped next, then the rest of the catalog follows in catalog order.
pub fn stacked_deck(human: &[Card], automated: &[Card], table: Card) -> Vec<Card> {
    assert_eq!(human.len(), card::HAND_SIZE);
    assert_eq!(automated.len(), card::HAND_SIZE);
    let mut rest = card::full_deck();
    let mut deck = Vec::with_capacity(rest.len());
    for (h, a) in human.iter().zip(automated) {
        deck.push(*h);
        deck.push(*a);
    }
    deck.push(table);
    for used in &deck {
        let index = rest
            .iter()
            .position(|card| card == used)
            .unwrap_or_else(|| panic!("{used} used twice"));
        rest.remove(index);
    }
    deck.extend(rest);
    deck
}

/// Full catalog with `prefix` moved to the top of the pile.
pub fn deck_starting_with(prefix: &[Card]) -> Vec<Card> {
    let mut rest = card::full_deck();
    rest.retain(|card| !prefix.contains(card));
    let mut deck = prefix.to_vec();
    deck.extend(rest);
    deck
}

/// Polls `condition` until it holds or `timeout` elapses.
pub fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}
