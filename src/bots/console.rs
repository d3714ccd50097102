use std::io::{self, Write};

use crate::action::Move;
use crate::bot::Strategy;
use crate::card::Color;
use crate::state::SeatView;
use crate::visualize::{describe_move, render_view};

/// Interactive strategy that queries a person via standard input.
pub struct ConsoleStrategy {
    name: String,
}

impl ConsoleStrategy {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn read_line(prompt: &str) -> Option<String> {
        print!("{prompt}");
        if io::stdout().flush().is_err() {
            eprintln!("failed to flush stdout");
        }
        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => {
                println!("Input closed, exiting.");
                std::process::exit(0);
            }
            Ok(_) => Some(input.trim().to_string()),
            Err(_) => {
                eprintln!("failed to read input");
                None
            }
        }
    }
}

impl Default for ConsoleStrategy {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl Strategy for ConsoleStrategy {
    fn choose_move(&mut self, view: &SeatView, legal_moves: &[Move]) -> Move {
        assert!(
            !legal_moves.is_empty(),
            "at least one legal move must exist"
        );
        loop {
            println!("\n=== {}'s turn ===", self.name);
            println!("{}", render_view(view));
            println!("Available moves:");
            for (index, mv) in legal_moves.iter().enumerate() {
                println!("  [{index}] {}", describe_move(mv));
            }
            println!("Type the move index, 'help' or 'q' to quit.");
            let Some(trimmed) = Self::read_line("Selection: ") else {
                continue;
            };
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                println!("Exiting game at user's request.");
                std::process::exit(0);
            }
            if trimmed.eq_ignore_ascii_case("help") {
                println!("Enter the numeric index listed next to the move you wish to make.");
                continue;
            }
            let Ok(choice) = trimmed.parse::<usize>() else {
                println!("Invalid input: '{trimmed}'. Please enter a number.");
                continue;
            };
            if let Some(mv) = legal_moves.get(choice) {
                println!("You selected: {}", describe_move(mv));
                return *mv;
            }
            println!("Index out of range. Please choose a valid option.");
        }
    }

    fn choose_color(&mut self, _view: &SeatView) -> Color {
        loop {
            let names = Color::ALL.map(Color::name).join("/");
            let Some(trimmed) = Self::read_line(&format!("Choose a colour ({names}): ")) else {
                continue;
            };
            match trimmed.parse::<Color>() {
                Ok(color) => return color,
                Err(err) => println!("{err}"),
            }
        }
    }

    fn declares_last_card(&mut self, _view: &SeatView) -> bool {
        let Some(answer) = Self::read_line("One card left! Declare it? [y/N]: ") else {
            return false;
        };
        answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
    }
}
