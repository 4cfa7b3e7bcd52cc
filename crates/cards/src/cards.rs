// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Hand, MalformedHandError};

/// A Poker card.
///
/// Cards are ordered by rank only when compared through [Card::rank], the suit
/// is never used to order cards, only to check for flushes.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = MalformedHandError;

    /// Parses a two characters card like `KS` or `TD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                let rank = Rank::from_symbol(rank)
                    .ok_or_else(|| MalformedHandError::InvalidRank(s.to_string()))?;
                let suit = Suit::from_symbol(suit)
                    .ok_or_else(|| MalformedHandError::InvalidSuit(s.to_string()))?;
                Ok(Card::new(rank, suit))
            }
            _ => Err(MalformedHandError::BadCardLength(s.to_string())),
        }
    }
}

/// Card rank.
///
/// The discriminant is the rank numeric value, from 2 for a deuce to 14 for
/// an ace, the ace always plays high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank numeric value, 2 to 14.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Gets the rank for a symbol in `23456789TJQKA`.
    pub fn from_symbol(symbol: char) -> Option<Rank> {
        let rank = match symbol {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }

    /// The rank symbol.
    pub fn symbol(&self) -> char {
        match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
///
/// Suits have no order, two cards suits are only checked for equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Gets the suit for a symbol in `SHDC`.
    pub fn from_symbol(symbol: char) -> Option<Suit> {
        match symbol {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }

    /// The suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals a five cards hand, `None` if there are not enough cards left.
    pub fn deal_hand(&mut self) -> Option<Hand> {
        let at = self.cards.len().checked_sub(Hand::SIZE)?;
        let cards: [Card; Hand::SIZE] = self.cards.split_off(at).try_into().ok()?;
        Some(Hand::from_cards(cards))
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<u8>>());
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Deuce < Rank::Trey);
    }

    #[test]
    fn symbols() {
        for rank in Rank::ranks() {
            assert_eq!(Rank::from_symbol(rank.symbol()), Some(rank));
        }

        for suit in Suit::suits() {
            assert_eq!(Suit::from_symbol(suit.symbol()), Some(suit));
        }

        assert_eq!(Rank::from_symbol('1'), None);
        assert_eq!(Rank::from_symbol('t'), None);
        assert_eq!(Suit::from_symbol('s'), None);
        assert_eq!(Suit::from_symbol('X'), None);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(format!("{c:?}"), "Card(AH)");
    }

    #[test]
    fn card_from_str() {
        let c = "QC".parse::<Card>().unwrap();
        assert_eq!(c.rank(), Rank::Queen);
        assert_eq!(c.suit(), Suit::Clubs);

        assert!(matches!(
            "XC".parse::<Card>(),
            Err(MalformedHandError::InvalidRank(t)) if t == "XC"
        ));
        assert!(matches!(
            "QX".parse::<Card>(),
            Err(MalformedHandError::InvalidSuit(t)) if t == "QX"
        ));
        assert!(matches!(
            "QCC".parse::<Card>(),
            Err(MalformedHandError::BadCardLength(_))
        ));
        assert!(matches!(
            "Q".parse::<Card>(),
            Err(MalformedHandError::BadCardLength(_))
        ));
    }

    #[test]
    fn deck_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        // Check uniquness.
        assert!(deck.is_empty());
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_deal_hands() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        let mut dealt = HashSet::default();
        for _ in 0..10 {
            let hand = deck.deal_hand().unwrap();
            assert!(hand.duplicates().is_empty());
            dealt.extend(hand.cards().iter().copied());
        }

        // 50 cards dealt, not enough left for another hand.
        assert_eq!(dealt.len(), 50);
        assert_eq!(deck.count(), 2);
        assert!(deck.deal_hand().is_none());
        assert_eq!(deck.count(), 2);
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        assert!(deck.into_iter().all(|c| c != ad));
    }
}
