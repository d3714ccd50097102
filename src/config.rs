use std::time::Duration;

use crate::action::Seat;
use crate::error::GameError;
use crate::game::GameConfig;

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

/// Timing and dealing parameters for a [`crate::Session`].
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    /// Seed of the first round; later rounds derive theirs from it.
    pub seed: u64,
    pub starting_seat: Seat,
    /// Pause before the automated seat acts.
    pub think_delay: Duration,
    /// Upper bound of the watchdog's random pause between checks.
    pub watchdog_max_delay: Duration,
    /// Longest an idle actor waits before re-checking its signals.
    pub idle_wait: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            starting_seat: Seat::Human,
            think_delay: Duration::from_millis(2000),
            watchdog_max_delay: Duration::from_millis(5000),
            idle_wait: Duration::from_millis(250),
        }
    }
}

impl SessionConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_starting_seat(mut self, seat: Seat) -> Self {
        self.starting_seat = seat;
        self
    }

    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    pub fn with_watchdog_max_delay(mut self, delay: Duration) -> Self {
        self.watchdog_max_delay = delay;
        self
    }

    pub fn with_idle_wait(mut self, wait: Duration) -> Self {
        self.idle_wait = wait;
        self
    }

    /// Rejects settings the actors cannot run with.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.idle_wait.is_zero() {
            return Err(GameError::InvalidConfiguration("idle wait must be non-zero"));
        }
        if self.watchdog_max_delay.is_zero() {
            return Err(GameError::InvalidConfiguration(
                "watchdog delay must be non-zero",
            ));
        }
        Ok(())
    }

    /// Round configuration for the `round`-th round of the session, counting from zero.
    pub fn game_config(&self, round: u64) -> GameConfig {
        GameConfig {
            seed: self
                .seed
                .wrapping_add(round.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
            starting_seat: self.starting_seat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_get_distinct_seeds() {
        let config = SessionConfig::default().with_seed(1);
        assert_eq!(config.game_config(0).seed, 1);
        assert_ne!(config.game_config(1).seed, config.game_config(2).seed);
        assert_eq!(config.game_config(3).starting_seat, Seat::Human);
    }

    #[test]
    fn zero_idle_wait_is_rejected() {
        assert!(SessionConfig::default().validate().is_ok());
        let spinning = SessionConfig::default().with_idle_wait(Duration::ZERO);
        assert!(matches!(
            spinning.validate(),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn zero_watchdog_delay_is_rejected() {
        let spinning = SessionConfig::default().with_watchdog_max_delay(Duration::ZERO);
        assert!(matches!(
            spinning.validate(),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn huge_delays_are_accepted() {
        let patient = SessionConfig::default()
            .with_think_delay(Duration::MAX)
            .with_watchdog_max_delay(Duration::MAX);
        assert!(patient.validate().is_ok());
    }
}
