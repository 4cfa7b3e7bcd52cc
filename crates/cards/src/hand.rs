// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand parsing and validation.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Errors returned when a hand string is not a valid five cards hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedHandError {
    /// The hand doesn't split into five cards.
    #[error("a hand must have 5 cards, found {0}")]
    WrongCardCount(usize),
    /// A card is not made of two characters.
    #[error("invalid card {0:?}, a card must have 2 characters")]
    BadCardLength(String),
    /// A card rank is not one of `23456789TJQKA`.
    #[error("invalid rank in card {0:?}")]
    InvalidRank(String),
    /// A card suit is not one of `SHDC`.
    #[error("invalid suit in card {0:?}")]
    InvalidSuit(String),
}

/// A validated five cards hand.
///
/// A hand is created from a string with five space separated cards, each card
/// has a rank symbol followed by a suit symbol:
///
/// ```
/// # use showdown_cards::*;
/// let hand = Hand::new("KS KH 5C JS TD").unwrap();
/// assert_eq!(hand.ranks()[0], Rank::King);
/// assert_eq!(hand.suits()[2], Suit::Clubs);
/// assert_eq!(hand.to_string(), "KS KH 5C JS TD");
/// ```
///
/// Validation happens only here, once created a hand cannot be changed. Cards
/// are not checked for uniqueness, use [Hand::duplicates] and
/// [Hand::shared_cards] to detect repeated cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hand {
    raw: String,
    cards: [Card; 5],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Parses and validates a hand.
    pub fn new(raw: impl Into<String>) -> Result<Self, MalformedHandError> {
        let raw = raw.into();
        let tokens = raw.split(' ').collect::<Vec<_>>();

        if tokens.len() != Self::SIZE {
            return Err(MalformedHandError::WrongCardCount(tokens.len()));
        }

        // All cards must have the same length and that length must be 2.
        if let Some(token) = tokens.iter().find(|t| t.chars().count() != 2) {
            return Err(MalformedHandError::BadCardLength(token.to_string()));
        }

        // Check all ranks before any suit.
        let ranks = tokens
            .iter()
            .map(|t| {
                t.chars()
                    .next()
                    .and_then(Rank::from_symbol)
                    .ok_or_else(|| MalformedHandError::InvalidRank(t.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let suits = tokens
            .iter()
            .map(|t| {
                t.chars()
                    .nth(1)
                    .and_then(Suit::from_symbol)
                    .ok_or_else(|| MalformedHandError::InvalidSuit(t.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cards = ranks
            .into_iter()
            .zip(suits)
            .map(|(rank, suit)| Card::new(rank, suit))
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|cards: Vec<Card>| MalformedHandError::WrongCardCount(cards.len()))?;

        Ok(Self { raw, cards })
    }

    /// Creates a hand from five cards.
    pub fn from_cards(cards: [Card; Hand::SIZE]) -> Self {
        let raw = cards
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        Self { raw, cards }
    }

    /// The hand cards in input order.
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.cards
    }

    /// The cards ranks in input order.
    pub fn ranks(&self) -> [Rank; Hand::SIZE] {
        self.cards.map(|c| c.rank())
    }

    /// The cards suits in input order.
    pub fn suits(&self) -> [Suit; Hand::SIZE] {
        self.cards.map(|c| c.suit())
    }

    /// The validated hand string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the cards that appear more than once in this hand.
    pub fn duplicates(&self) -> Vec<Card> {
        let mut seen = AHashSet::with_capacity(Self::SIZE);
        let mut dups = Vec::new();
        for card in self.cards {
            if !seen.insert(card) && !dups.contains(&card) {
                dups.push(card);
            }
        }

        dups
    }

    /// Returns the cards of this hand that also appear in the other hand.
    pub fn shared_cards(&self, other: &Hand) -> Vec<Card> {
        let others = other.cards.iter().copied().collect::<AHashSet<_>>();
        let mut shared = Vec::new();
        for card in self.cards {
            if others.contains(&card) && !shared.contains(&card) {
                shared.push(card);
            }
        }

        shared
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for Hand {
    type Err = MalformedHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::new(s)
    }
}

impl TryFrom<&str> for Hand {
    type Error = MalformedHandError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Hand::new(value)
    }
}

impl TryFrom<String> for Hand {
    type Error = MalformedHandError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Hand::new(value)
    }
}

impl From<Hand> for String {
    fn from(hand: Hand) -> Self {
        hand.raw
    }
}
