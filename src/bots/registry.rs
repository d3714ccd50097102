use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bot::Strategy;
use crate::bots::{BasicStrategy, ConsoleStrategy, RandomStrategy};

/// Returns a normalized label for a strategy spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create a strategy from a CLI-style spec.
/// Supported specs:
/// - basic
/// - random[:seed]
/// - console[:name]
pub fn create_strategy_from_spec(
    spec: &str,
    seed: u64,
) -> Result<Box<dyn Strategy>, Box<dyn Error>> {
    match label_for_spec(spec).as_str() {
        "basic" => Ok(Box::new(BasicStrategy::new())),
        "random" => {
            let custom_seed = spec
                .split_once(':')
                .and_then(|(_, value)| value.trim().parse::<u64>().ok())
                .unwrap_or(seed ^ 0x9E37_79B9);
            Ok(Box::new(RandomStrategy::new(StdRng::seed_from_u64(
                custom_seed,
            ))))
        }
        "console" => {
            let name = spec
                .split_once(':')
                .map(|(_, name)| name.trim().to_string())
                .unwrap_or_else(|| String::from("Human"));
            Ok(Box::new(ConsoleStrategy::new(name)))
        }
        _ => Err(format!("unrecognized strategy spec: {spec}").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_specs_resolve() {
        assert_eq!(label_for_spec(" Random:7"), "random");
        assert!(create_strategy_from_spec("basic", 1).is_ok());
        assert!(create_strategy_from_spec("random:7", 1).is_ok());
        assert!(create_strategy_from_spec("console:Ana", 1).is_ok());
        assert!(create_strategy_from_spec("smart", 1).is_err());
    }
}
