use std::fmt::Write;

use crate::action::Move;
use crate::state::{HAND_PAGE_SIZE, Outcome, Phase, SeatView};

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    /// Show the whole hand instead of one page.
    pub show_full_hand: bool,
    /// First hand card shown when paging.
    pub window_start: usize,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_full_hand: true,
            window_start: 0,
        }
    }
}

pub fn render_view(view: &SeatView) -> String {
    render_view_with_options(view, VisualOptions::default())
}

pub fn render_view_with_options(view: &SeatView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match view.phase {
        Phase::AwaitingPlay(seat) => format!("{seat} to play"),
        Phase::AwaitingColorChoice(seat) => format!("{seat} to choose a colour"),
        Phase::RoundOver(outcome) => format!("Finished ({})", describe_outcome(outcome)),
    };
    let _ = writeln!(out, "Round: {status}");
    let table = view
        .table_card
        .map(|card| card.to_string())
        .unwrap_or_else(|| String::from("--"));
    let color = view
        .active_color
        .map(|color| color.to_string())
        .unwrap_or_else(|| String::from("--"));
    let _ = writeln!(out, "Table: {table}  |  Active colour: {color}");
    let _ = writeln!(
        out,
        "Draw pile: {}  |  Direction: {:?}",
        view.draw_pile_count, view.direction
    );
    let _ = writeln!(out, "Opponent hand size: {}", view.opponent_hand_size);

    let (start, shown) = if options.show_full_hand {
        (0, &view.hand[..])
    } else {
        let start = options.window_start.min(view.hand.len());
        let end = (start + HAND_PAGE_SIZE).min(view.hand.len());
        (start, &view.hand[start..end])
    };
    if shown.is_empty() {
        let _ = writeln!(out, "Hand: (empty)");
    } else {
        let entries = shown
            .iter()
            .enumerate()
            .map(|(offset, card)| format!("{}:{card}", start + offset))
            .collect::<Vec<_>>()
            .join("  ");
        let declared = if view.declared { " (declared)" } else { "" };
        let _ = writeln!(out, "Hand ({} cards){declared}: {entries}", view.hand.len());
    }
    out
}

pub fn describe_move(mv: &Move) -> String {
    match mv {
        Move::Play(card) => format!("Play {card}"),
        Move::Draw => String::from("Draw a card"),
    }
}

pub fn describe_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Won(seat) => format!("{seat} seat wins"),
        Outcome::Tie => String::from("tie"),
    }
}
