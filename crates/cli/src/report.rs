// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Comparison report rendering.
use anyhow::Result;
use serde::Serialize;

use showdown_eval::{Hand, Outcome, ScoredHand, TieRule, compare_with};

/// A scored hand in a report.
#[derive(Debug, Serialize)]
pub struct HandReport {
    /// The hand cards.
    pub hand: Hand,
    /// The hand category and tiebreak.
    pub score: ScoredHand,
}

impl HandReport {
    fn new(hand: Hand) -> Self {
        let score = ScoredHand::of(&hand);
        Self { hand, score }
    }
}

/// The comparison of two hands from the first hand point of view.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The first hand.
    pub first: HandReport,
    /// The second hand.
    pub second: HandReport,
    /// The first hand outcome.
    pub outcome: Outcome,
}

impl Report {
    /// Compares two hands.
    pub fn new(first: Hand, second: Hand, tie_rule: TieRule) -> Self {
        let outcome = compare_with(&first, &second, tie_rule);
        Self {
            first: HandReport::new(first),
            second: HandReport::new(second),
            outcome,
        }
    }

    /// Renders the outcome only, or the full report as JSON.
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            Ok(serde_json::to_string(self)?)
        } else {
            Ok(self.outcome.to_string())
        }
    }

    /// Renders the hands with their categories followed by the outcome, or the
    /// full report as JSON.
    pub fn render_hands(&self, json: bool) -> Result<String> {
        if json {
            self.render(json)
        } else {
            Ok(format!(
                "{}  {}\n{}  {}\n{}",
                self.first.hand, self.first.score, self.second.hand, self.second.score, self.outcome
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(a: &str, b: &str, tie_rule: TieRule) -> Report {
        Report::new(Hand::new(a).unwrap(), Hand::new(b).unwrap(), tie_rule)
    }

    #[test]
    fn render_text() {
        let r = report("KS KH 5C JS TD", "9C 9H 5C 5H AC", TieRule::default());
        assert_eq!(r.render(false).unwrap(), "LOSS");
        assert_eq!(
            r.render_hands(false).unwrap(),
            "KS KH 5C JS TD  One Pair (K)\n9C 9H 5C 5H AC  Two Pair (9)\nLOSS"
        );

        let r = report("2H 3D 5S 9C KD", "2C 3H 5D 9S KH", TieRule::Split);
        assert_eq!(r.render(false).unwrap(), "TIE");
    }

    #[test]
    fn render_json() {
        let r = report("TS JS QS KS AS", "QH QS QC AS 8H", TieRule::default());
        let json = r.render(true).unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();

        assert_eq!(value["first"]["hand"], "TS JS QS KS AS");
        assert_eq!(value["first"]["score"]["category"], "RoyalFlush");
        assert!(value["first"]["score"]["tiebreak"].is_null());
        assert_eq!(value["second"]["score"]["category"], "ThreeOfAKind");
        assert_eq!(value["second"]["score"]["tiebreak"], "Queen");
        assert_eq!(value["outcome"], "Win");

        assert_eq!(r.render_hands(true).unwrap(), json);
    }
}
