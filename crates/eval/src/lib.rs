// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown five cards poker hand evaluator.
//!
//! A hand is scored by its [Category], from high card to royal flush, and by a
//! tiebreak rank for categories made of repeated ranks. Two hands with the
//! same category and tiebreak are resolved by comparing their ranks sorted from
//! the highest to the lowest. The ace always plays high, there is no five high
//! straight.
//!
//! To compare two hands parse them and call [compare]:
//!
//! ```
//! # use showdown_eval::*;
//! let two_pair = Hand::new("TC TH 5C 5H KH").unwrap();
//! let full_house = Hand::new("TS TH TD JH JD").unwrap();
//! assert_eq!(compare(&full_house, &two_pair), Outcome::Win);
//! assert_eq!(compare(&two_pair, &full_house), Outcome::Loss);
//!
//! let scored = ScoredHand::of(&full_house);
//! assert_eq!(scored.category(), Category::FullHouse);
//! assert_eq!(scored.tiebreak(), Some(Rank::Ten));
//! ```
//!
//! [compare] never reports a tie, when two hands have the same value the first
//! hand wins, use [showdown] or [compare_with] to get [Outcome::Tie] instead:
//!
//! ```
//! # use showdown_eval::*;
//! let a = Hand::new("2H 3D 5S 9C KD").unwrap();
//! let b = Hand::new("2C 3H 5D 9S KH").unwrap();
//! assert_eq!(compare(&a, &b), Outcome::Win);
//! assert_eq!(compare(&b, &a), Outcome::Win);
//! assert_eq!(showdown(&a, &b), Outcome::Tie);
//! assert_eq!(compare_with(&a, &b, TieRule::Split), Outcome::Tie);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub use category::{Category, ScoredHand, categorize};

pub mod compare;
pub use compare::{Outcome, TieRule, compare, compare_with, high_card, showdown};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Hand, MalformedHandError, Rank, Suit};
