// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
//!
//! A hand category is computed by two independent rules, the first looks for
//! repeated ranks (pairs, trips, quads) and the second, used only when all
//! ranks are different, looks for flushes and straights.
use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Hand, Rank, Suit};

/// A five cards hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No other category.
    HighCard = 1,
    /// Two cards with the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// A straight flush from ten to ace.
    RoyalFlush,
}

impl Category {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category score from 1 for high card to 10 for royal flush.
    pub fn score(&self) -> u8 {
        *self as u8
    }

    /// Checks if this category is made of repeated ranks.
    pub fn is_denomination(&self) -> bool {
        matches!(
            self,
            Category::OnePair
                | Category::TwoPair
                | Category::ThreeOfAKind
                | Category::FullHouse
                | Category::FourOfAKind
        )
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A hand category with its tiebreak rank.
///
/// The tiebreak is the highest among the most repeated ranks for categories
/// made of repeated ranks, and `None` for all other categories that are
/// resolved by comparing the hands kickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredHand {
    category: Category,
    tiebreak: Option<Rank>,
}

impl ScoredHand {
    /// Scores a hand.
    pub fn of(hand: &Hand) -> Self {
        categorize(&hand.ranks(), &hand.suits())
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The tiebreak rank.
    pub fn tiebreak(&self) -> Option<Rank> {
        self.tiebreak
    }
}

impl fmt::Display for ScoredHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tiebreak {
            Some(rank) => write!(f, "{} ({rank})", self.category),
            None => write!(f, "{}", self.category),
        }
    }
}

/// Computes a hand category and tiebreak from its ranks and suits.
///
/// Repeated ranks have priority, flushes and straights are checked only when
/// all ranks are different.
pub fn categorize(ranks: &[Rank; Hand::SIZE], suits: &[Suit; Hand::SIZE]) -> ScoredHand {
    let scored = match score_denomination(ranks) {
        Some((category, rank)) => ScoredHand {
            category,
            tiebreak: Some(rank),
        },
        None => ScoredHand {
            category: score_flush_straight(ranks, suits),
            tiebreak: None,
        },
    };

    debug!("Scored ranks {ranks:?} suits {suits:?} as {scored}");
    scored
}

/// Scores a hand by its repeated ranks.
///
/// Returns the category and the highest of the most repeated ranks, or `None`
/// if all ranks are different.
pub fn score_denomination(ranks: &[Rank; Hand::SIZE]) -> Option<(Category, Rank)> {
    let mut counts = AHashMap::<Rank, usize>::with_capacity(Hand::SIZE);
    for rank in ranks {
        *counts.entry(*rank).or_default() += 1;
    }

    let max_count = counts.values().copied().max()?;
    let category = match (counts.len(), max_count) {
        // Five of a kind needs repeated cards, it scores as four of a kind.
        (1, 5) | (2, 4) => Category::FourOfAKind,
        (2, 3) => Category::FullHouse,
        (3, 3) => Category::ThreeOfAKind,
        (3, 2) => Category::TwoPair,
        (4, 2) => Category::OnePair,
        // All ranks are different.
        _ => return None,
    };

    let tiebreak = counts
        .into_iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(rank, _)| rank)
        .max()?;

    Some((category, tiebreak))
}

/// Scores a hand with all different ranks.
pub fn score_flush_straight(
    ranks: &[Rank; Hand::SIZE],
    suits: &[Suit; Hand::SIZE],
) -> Category {
    let is_flush = suits.iter().all(|s| *s == suits[0]);

    let mut sorted = *ranks;
    sorted.sort_unstable();
    let [low, .., high] = sorted;

    // No wheel, the ace only plays high.
    let is_distinct = sorted.windows(2).all(|w| w[0] != w[1]);
    let is_straight = is_distinct && high.value() - low.value() == 4;

    match (is_flush, is_straight) {
        (true, true) if low == Rank::Ten => Category::RoyalFlush,
        (true, true) => Category::StraightFlush,
        (true, false) => Category::Flush,
        (false, true) => Category::Straight,
        (false, false) => Category::HighCard,
    }
}
