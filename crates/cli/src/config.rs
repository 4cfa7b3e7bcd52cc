// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Comparison settings.
use anyhow::{Result, bail};

use showdown_eval::{Card, Hand, TieRule};

/// How to handle cards that appear more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateRule {
    /// Hands are compared by their ranks and suits, repeated cards are allowed.
    #[default]
    Allow,
    /// Reject hands with repeated cards or with cards shared by the two hands.
    Reject,
}

/// The comparison configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// How to report equal hands.
    pub tie_rule: TieRule,
    /// How to handle repeated cards.
    pub duplicate_rule: DuplicateRule,
    /// Print the report as JSON.
    pub json: bool,
}

impl Config {
    /// Checks the hands cards against the duplicate rule.
    pub fn check_cards(&self, a: &Hand, b: &Hand) -> Result<()> {
        if self.duplicate_rule == DuplicateRule::Allow {
            return Ok(());
        }

        for hand in [a, b] {
            let dups = hand.duplicates();
            if !dups.is_empty() {
                bail!("Hand {hand} has repeated cards {}", join(&dups));
            }
        }

        let shared = a.shared_cards(b);
        if !shared.is_empty() {
            bail!("Hands {a} and {b} share cards {}", join(&shared));
        }

        Ok(())
    }
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
