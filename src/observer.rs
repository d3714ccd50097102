//! Notifications from the engine to whatever displays it.
//!
//! Callbacks may run on a background actor thread and never while the round
//! lock is held. A UI must marshal them onto its own thread before touching
//! widgets; calling back into the session from a callback is allowed.

use std::sync::mpsc::Sender;

use crate::action::Seat;
use crate::state::Outcome;

pub trait Observer: Send + Sync {
    /// Something visible changed: hands, table, turn or draw pile.
    fn on_state_changed(&self);

    /// `seat` played a wild and the round waits for [`crate::Session::choose_color`].
    /// Called once per pending choice, even if a penalty lands before the choice is made.
    fn on_color_choice_required(&self, seat: Seat);

    /// Called once when the round ends.
    fn on_round_over(&self, _outcome: Outcome) {}
}

/// Observer for headless sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn on_state_changed(&self) {}

    fn on_color_choice_required(&self, _seat: Seat) {}
}

/// Engine notification as a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    StateChanged,
    ColorChoiceRequired(Seat),
    RoundOver(Outcome),
}

/// Forwards every notification over a channel so a UI loop can consume them in order.
pub struct ChannelObserver {
    sender: Sender<Event>,
}

impl ChannelObserver {
    pub fn new(sender: Sender<Event>) -> Self {
        Self { sender }
    }

    fn send(&self, event: Event) {
        // A dropped receiver just means nobody is listening any more.
        let _ = self.sender.send(event);
    }
}

impl Observer for ChannelObserver {
    fn on_state_changed(&self) {
        self.send(Event::StateChanged);
    }

    fn on_color_choice_required(&self, seat: Seat) {
        self.send(Event::ColorChoiceRequired(seat));
    }

    fn on_round_over(&self, outcome: Outcome) {
        self.send(Event::RoundOver(outcome));
    }
}
