// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! a [Hand] type that parses and validates five cards hands:
//!
//! ```
//! # use showdown_cards::{Hand, MalformedHandError};
//! let hand = Hand::new("TS JS QS KS AS").unwrap();
//! assert_eq!(hand.cards().len(), 5);
//!
//! let err = Hand::new("TS JS QS KS").unwrap_err();
//! assert_eq!(err, MalformedHandError::WrongCardCount(4));
//! ```
//!
//! and a [Deck] type for shuffling and dealing random hands:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hand = deck.deal_hand().unwrap();
//! assert!(hand.duplicates().is_empty());
//! assert_eq!(deck.count(), Deck::SIZE - 5);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, Rank, Suit};

mod hand;
pub use hand::{Hand, MalformedHandError};
