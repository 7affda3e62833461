//! Error types for card, deck and round operations.

use thiserror::Error;

/// Errors that can occur when building a card from symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is not one of 2-10, J, Q, K, A.
    #[error("invalid card rank")]
    InvalidRank,
    /// Suit is not one of Hearts, Diamonds, Spades, Clubs.
    #[error("invalid card suit")]
    InvalidSuit,
}

/// Errors that can occur when drawing from or building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards were requested than remain in the deck.
    #[error("cannot draw {requested} cards, only {remaining} remain")]
    Empty {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
    /// The same card was given twice when stacking a deck.
    #[error("duplicate card in stacked deck")]
    DuplicateCard,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A round needs at least one participant.
    #[error("a round needs at least one participant")]
    NoParticipants,
    /// More participants than a single deck can deal two cards to.
    #[error("too many participants for a single deck")]
    TooManyParticipants,
    /// The provided deck is too short to deal the opening hands.
    #[error("not enough cards in the deck to deal")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for this action.
    #[error("invalid round phase for this action")]
    InvalidPhase,
    /// Participant index does not exist.
    #[error("participant not found")]
    ParticipantNotFound,
    /// The dealer acts through `dealer_act`, not player actions.
    #[error("the dealer cannot take player actions")]
    DealerIsNotPlayer,
    /// Hand has already stood or busted.
    #[error("hand is not active")]
    HandNotActive,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during the dealer's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// The round was created without a dealer.
    #[error("the round has no dealer")]
    NoDealer,
    /// Invalid round phase for dealer play.
    #[error("invalid round phase for dealer play")]
    InvalidPhase,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur when resolving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The round is not over yet.
    #[error("the round is not over yet")]
    InvalidPhase,
}
