// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, compares two five cards poker hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use showdown_eval::{Deck, Hand, TieRule};

pub mod config;
pub mod report;

use config::{Config, DuplicateRule};
use report::Report;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compares two hands, e.g. "KS KH 5C JS TD" "9C 9H 5C 5H AC".
    Compare {
        /// The first hand.
        first: String,
        /// The second hand.
        second: String,
        /// Reject repeated cards within or across the hands.
        #[clap(long)]
        strict: bool,
        #[clap(flatten)]
        output: OutputArgs,
    },
    /// Deals two random hands and compares them.
    Deal {
        /// The shuffle seed.
        #[clap(long)]
        seed: Option<u64>,
        #[clap(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Report equal hands as a tie.
    #[clap(long)]
    ties: bool,
    /// Print the comparison report as JSON.
    #[clap(long)]
    json: bool,
}

impl OutputArgs {
    fn config(&self, duplicate_rule: DuplicateRule) -> Config {
        Config {
            tie_rule: if self.ties {
                TieRule::Split
            } else {
                TieRule::FirstHandWins
            },
            duplicate_rule,
            json: self.json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let output = match cli.command {
        Command::Compare {
            first,
            second,
            strict,
            output,
        } => {
            let duplicate_rule = if strict {
                DuplicateRule::Reject
            } else {
                DuplicateRule::Allow
            };

            let config = output.config(duplicate_rule);
            compare(&config, first, second)?
        }
        Command::Deal { seed, output } => {
            let config = output.config(DuplicateRule::Reject);
            deal(&config, seed)?
        }
    };

    println!("{output}");
    Ok(())
}

fn compare(config: &Config, first: String, second: String) -> Result<String> {
    let first = Hand::new(first).context("Invalid first hand")?;
    let second = Hand::new(second).context("Invalid second hand")?;
    config.check_cards(&first, &second)?;

    Report::new(first, second, config.tie_rule).render(config.json)
}

fn deal(config: &Config, seed: Option<u64>) -> Result<String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut deck = Deck::new_and_shuffled(&mut rng);
    let first = deck.deal_hand().context("Not enough cards for the first hand")?;
    let second = deck.deal_hand().context("Not enough cards for the second hand")?;
    debug!("Dealt {first} and {second}, {} cards left", deck.count());
    config.check_cards(&first, &second)?;

    Report::new(first, second, config.tie_rule).render_hands(config.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_command() {
        let config = Config::default();
        let out = compare(
            &config,
            "TC TH 5C 5H KH".to_string(),
            "9C 9H 5C 5H AC".to_string(),
        )
        .unwrap();
        assert_eq!(out, "WIN");

        let err = compare(&config, "KS KH 5C JS".to_string(), "9C 9H 5C 5H AC".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid first hand");
        assert_eq!(
            err.root_cause().to_string(),
            "a hand must have 5 cards, found 4"
        );

        let err = compare(&config, "9C 9H 5C 5H AC".to_string(), "KS KH 5C JS XD".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid second hand");
    }

    #[test]
    fn compare_strict() {
        let config = Config {
            duplicate_rule: DuplicateRule::Reject,
            ..Config::default()
        };

        // Both hands have the 5C and 5H.
        assert!(
            compare(
                &config,
                "TC TH 5C 5H KH".to_string(),
                "9C 9H 5C 5H AC".to_string()
            )
            .is_err()
        );
    }

    #[test]
    fn deal_command() {
        let config = Config::default();
        let out = deal(&config, Some(42)).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert_eq!(deal(&config, Some(42)).unwrap(), out);

        let last = out.lines().last().unwrap();
        assert!(last == "WIN" || last == "LOSS", "{out}");

        let hands = out
            .lines()
            .take(2)
            .map(|l| Hand::new(&l[..14]).unwrap())
            .collect::<Vec<_>>();
        assert!(hands[0].shared_cards(&hands[1]).is_empty());
    }

    #[test]
    fn cli_args() {
        let cli = Cli::try_parse_from([
            "showdown",
            "compare",
            "KS KH 5C JS TD",
            "9C 9H 5C 5H AC",
            "--ties",
            "--strict",
        ])
        .unwrap();

        match cli.command {
            Command::Compare {
                first,
                strict,
                output,
                ..
            } => {
                assert_eq!(first, "KS KH 5C JS TD");
                assert!(strict);
                let config = output.config(DuplicateRule::Reject);
                assert_eq!(config.tie_rule, TieRule::Split);
                assert!(!config.json);
            }
            _ => panic!("Expected compare command"),
        }

        let cli = Cli::try_parse_from(["showdown", "-v", "deal", "--seed", "7", "--json"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Deal {
                seed: Some(7),
                output: OutputArgs { json: true, .. }
            }
        ));
    }
}
