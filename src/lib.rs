//! Two-seat Uno engine: an authoritative turn coordinator driven concurrently by
//! a UI, an automated player actor and a declaration watchdog actor.

pub mod action;
pub mod actors;
pub mod bot;
pub mod bots;
pub mod card;
pub mod config;
pub mod error;
pub mod game;
pub mod observer;
pub mod pile;
pub mod rules;
pub mod session;
pub mod state;
pub mod visualize;

pub use crate::action::{Move, Seat};
pub use crate::bot::Strategy;
pub use crate::bots::{
    BasicStrategy, ConsoleStrategy, RandomStrategy, create_strategy_from_spec, label_for_spec,
};
pub use crate::card::{Card, Color, Kind, Rank};
pub use crate::config::SessionConfig;
pub use crate::error::{GameError, PlayError};
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::observer::{ChannelObserver, Event, NoopObserver, Observer};
pub use crate::pile::{DrawPile, Hand, Table};
pub use crate::rules::{Effect, is_legal, resolve_effect};
pub use crate::session::Session;
pub use crate::state::{Direction, HAND_PAGE_SIZE, HandWindow, Outcome, Phase, SeatView};
pub use crate::visualize::{describe_move, describe_outcome, render_view};
