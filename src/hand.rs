//! Participant hands and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Scores at or above this value are bust.
pub const BUST_THRESHOLD: u8 = 22;

fn card_points(card: &Card) -> u16 {
    if card.is_ace() { 11 } else { u16::from(card.value()) }
}

fn wide_total(cards: &[Card]) -> u16 {
    cards
        .iter()
        .fold(0u16, |total, card| total.saturating_add(card_points(card)))
}

fn clamp(score: u16) -> u8 {
    u8::try_from(score).unwrap_or(u8::MAX)
}

/// Sums the cards with every ace counted as 11.
///
/// Totals above `u8::MAX` are clamped to `u8::MAX`.
#[must_use]
pub fn raw_total(cards: &[Card]) -> u8 {
    clamp(wide_total(cards))
}

/// Scores a hand.
///
/// Totals below [`BUST_THRESHOLD`] are returned as-is. Otherwise, when
/// `reduce_aces` is set, 10 is taken off per ace until the score drops below
/// the threshold or the aces run out. The result is clamped to `u8::MAX`.
#[must_use]
pub fn score_cards(cards: &[Card], reduce_aces: bool) -> u8 {
    let threshold = u16::from(BUST_THRESHOLD);
    let mut score = wide_total(cards);
    if score < threshold || !reduce_aces {
        return clamp(score);
    }

    let mut aces = cards.iter().filter(|card| card.is_ace()).count();
    while score >= threshold && aces > 0 {
        score -= 10;
        aces -= 1;
    }

    clamp(score)
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand can still act.
    Active,
    /// Participant has stood.
    Stood,
    /// Hand has busted (score of 22 or more).
    Bust,
}

/// One participant's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty, active hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    pub(crate) const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns whether the hand can still hit or stand.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, HandStatus::Active)
    }

    /// Sum of the cards with aces counted as 11.
    #[must_use]
    pub fn raw_total(&self) -> u8 {
        raw_total(&self.cards)
    }

    /// Scores the hand, see [`score_cards`].
    #[must_use]
    pub fn score(&self, reduce_aces: bool) -> u8 {
        score_cards(&self.cards, reduce_aces)
    }

    /// Returns the number of aces held.
    #[must_use]
    pub fn aces(&self) -> usize {
        self.cards.iter().filter(|card| card.is_ace()).count()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
