// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Two hands comparison.
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::{Hand, Rank};

use crate::ScoredHand;

/// The result of comparing a hand against another hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The first hand wins.
    Win,
    /// The first hand loses.
    Loss,
    /// The hands have the same value, only returned with [TieRule::Split].
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self {
            Outcome::Win => "WIN",
            Outcome::Loss => "LOSS",
            Outcome::Tie => "TIE",
        };

        write!(f, "{outcome}")
    }
}

/// How to report two hands with the same value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieRule {
    /// The first hand wins, so that comparing two equal hands is a [Outcome::Win]
    /// whatever the order of the hands.
    #[default]
    FirstHandWins,
    /// Equal hands are reported as [Outcome::Tie].
    Split,
}

/// Compares hand `a` against hand `b`.
///
/// Returns [Outcome::Win] or [Outcome::Loss], when the two hands have the same
/// value the first hand wins.
pub fn compare(a: &Hand, b: &Hand) -> Outcome {
    compare_with(a, b, TieRule::FirstHandWins)
}

/// Compares hand `a` against hand `b` reporting [Outcome::Tie] for equal hands.
pub fn showdown(a: &Hand, b: &Hand) -> Outcome {
    compare_with(a, b, TieRule::Split)
}

/// Compares hand `a` against hand `b` using the given tie rule.
pub fn compare_with(a: &Hand, b: &Hand, rule: TieRule) -> Outcome {
    let outcome = match order_hands(a, b) {
        Ordering::Greater => Outcome::Win,
        Ordering::Less => Outcome::Loss,
        Ordering::Equal => match rule {
            TieRule::FirstHandWins => Outcome::Win,
            TieRule::Split => Outcome::Tie,
        },
    };

    debug!("Hand {a} vs {b}: {outcome}");
    outcome
}

/// Orders two hands by category, then by tiebreak rank, then by kickers.
pub fn order_hands(a: &Hand, b: &Hand) -> Ordering {
    let (sa, sb) = (ScoredHand::of(a), ScoredHand::of(b));

    if sa.category() != sb.category() {
        return sa.category().cmp(&sb.category());
    }

    if let (Some(ta), Some(tb)) = (sa.tiebreak(), sb.tiebreak()) {
        if ta != tb {
            return ta.cmp(&tb);
        }
    }

    order_kickers(&a.ranks(), &b.ranks())
}

/// Compares two hands by their kickers, returns true if `a` wins or if the two
/// hands have the same ranks.
pub fn high_card(a: &[Rank; Hand::SIZE], b: &[Rank; Hand::SIZE]) -> bool {
    order_kickers(a, b) != Ordering::Less
}

/// Orders two hands ranks sorted from the highest to the lowest.
pub fn order_kickers(a: &[Rank; Hand::SIZE], b: &[Rank; Hand::SIZE]) -> Ordering {
    let (a, b) = (descending(a), descending(b));
    a.iter()
        .zip(b.iter())
        .map(|(ra, rb)| ra.cmp(rb))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn descending(ranks: &[Rank; Hand::SIZE]) -> [Rank; Hand::SIZE] {
    let mut sorted = *ranks;
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}
