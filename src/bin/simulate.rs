use std::error::Error;
use std::process;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use unobot::{
    ChannelObserver, Event, PlayError, Seat, Session, SessionConfig, create_strategy_from_spec,
    describe_outcome, render_view,
};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StartingSeat {
    Human,
    Automated,
}

impl From<StartingSeat> for Seat {
    fn from(value: StartingSeat) -> Self {
        match value {
            StartingSeat::Human => Seat::Human,
            StartingSeat::Automated => Seat::Automated,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Play rounds against the automated seat, optionally with a scripted human."
)]
struct Args {
    /// Number of rounds to play
    #[arg(short = 'r', long = "rounds", default_value_t = 1)]
    rounds: u32,

    /// Base RNG seed (each round derives its own shuffle from it)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Strategy driving the human seat: console[:name], basic or random[:seed]
    #[arg(long = "human", default_value = "console")]
    human: String,

    /// Strategy driving the automated seat: basic or random[:seed]
    #[arg(long = "automated", default_value = "basic")]
    automated: String,

    /// Seat that plays first
    #[arg(long = "starting-seat", value_enum, default_value_t = StartingSeat::Human)]
    starting_seat: StartingSeat,

    /// Automated seat thinking delay in milliseconds
    #[arg(long = "think-ms", default_value_t = 2000)]
    think_ms: u64,

    /// Upper bound of the watchdog's random delay in milliseconds
    #[arg(long = "watchdog-ms", default_value_t = 5000)]
    watchdog_ms: u64,

    /// Call out the automated seat whenever it holds one undeclared card
    #[arg(long = "catch")]
    catch: bool,

    /// Show the human seat's view before each of its turns
    #[arg(long = "visualize")]
    visualize: bool,

    /// Safety cap on human turns per round
    #[arg(long = "max-turns", default_value_t = 500)]
    max_turns: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = SessionConfig::default()
        .with_seed(args.seed)
        .with_starting_seat(args.starting_seat.into())
        .with_think_delay(Duration::from_millis(args.think_ms))
        .with_watchdog_max_delay(Duration::from_millis(args.watchdog_ms));
    let idle = config.idle_wait;

    let (sender, events) = mpsc::channel();
    let observer = Arc::new(ChannelObserver::new(sender));
    let automated = create_strategy_from_spec(&args.automated, args.seed)?;
    let mut human = create_strategy_from_spec(&args.human, args.seed.rotate_left(17))?;
    let mut session = Session::new(config, automated, observer)?;

    for round in 0..args.rounds {
        if round > 0 {
            session.start_round()?;
        }
        info!(round, "round started");
        let mut turns = 0usize;
        loop {
            if let Some(outcome) = session.winner() {
                println!("Round {round} finished: {}.", describe_outcome(outcome));
                break;
            }
            if turns >= args.max_turns {
                println!("Max turn limit {} reached. Stopping round.", args.max_turns);
                break;
            }
            if args.catch && session.declare_penalty(Seat::Human) {
                println!("Caught the automated seat holding an undeclared last card!");
            }
            if session.current_seat() != Some(Seat::Human) {
                match events.recv_timeout(idle) {
                    Ok(Event::RoundOver(_)) | Ok(Event::StateChanged) => {}
                    Ok(Event::ColorChoiceRequired(seat)) => info!(%seat, "colour choice required"),
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => {
                        return Err("session observer disconnected".into());
                    }
                }
                continue;
            }
            if args.visualize {
                println!("{}", render_view(&session.snapshot(Seat::Human)));
            }
            turns += 1;
            match session.play_turn(Seat::Human, human.as_mut()) {
                Ok(()) => {}
                // The watchdog or the automated seat got in between; look again.
                Err(PlayError::NotYourTurn | PlayError::ColorChoicePending) => {}
                Err(PlayError::DeckEmpty | PlayError::RoundOver) => {}
                Err(err) => warn!(%err, "human move rejected"),
            }
        }
    }

    session.stop();
    Ok(())
}
