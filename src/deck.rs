//! The single 52-card deck a round deals from.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// The cards not yet dealt, top of the deck first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in fixed order: Hearts, Diamonds, Spades, Clubs,
    /// each from 2 up to Ace.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a full deck with `top` moved to the front in the given order.
    ///
    /// The remaining cards follow in the fixed order of [`Deck::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Card, Deck, Rank, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Spades);
    /// let mut deck = Deck::with_top(&[ace]).unwrap();
    /// assert_eq!(deck.draw_one().unwrap(), ace);
    /// assert_eq!(deck.len(), 51);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if a card appears twice in `top`.
    pub fn with_top(top: &[Card]) -> Result<Self, DeckError> {
        let mut seen = [false; DECK_SIZE];
        for card in top {
            let slot = &mut seen[card.index()];
            if *slot {
                return Err(DeckError::DuplicateCard);
            }
            *slot = true;
        }

        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend_from_slice(top);
        cards.extend(Self::new().cards.into_iter().filter(|c| !seen[c.index()]));

        Ok(Self { cards })
    }

    /// Shuffles the deck in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut m = self.cards.len();
        while m > 0 {
            let i = rng.random_range(0..m);
            self.cards.swap(m - 1, i);
            m -= 1;
        }
    }

    /// Removes and returns the top `count` cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if fewer than `count` cards remain. The
    /// deck is left untouched in that case.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if count > remaining {
            return Err(DeckError::Empty {
                requested: count,
                remaining,
            });
        }

        Ok(self.cards.drain(..count).collect())
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck is empty.
    pub fn draw_one(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty {
                requested: 1,
                remaining: 0,
            });
        }

        Ok(self.cards.remove(0))
    }

    /// Puts cards back at the bottom of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if a card is already in the deck
    /// or given twice. Nothing is added in that case.
    pub fn add_to_bottom<I>(&mut self, cards: I) -> Result<(), DeckError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut seen = [false; DECK_SIZE];
        for card in &self.cards {
            seen[card.index()] = true;
        }

        let incoming: Vec<Card> = cards.into_iter().collect();
        for card in &incoming {
            let slot = &mut seen[card.index()];
            if *slot {
                return Err(DeckError::DuplicateCard);
            }
            *slot = true;
        }

        self.cards.extend(incoming);
        Ok(())
    }

    /// Returns the remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
