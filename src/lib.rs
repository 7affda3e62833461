//! A single-deck blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that deals a shuffled deck to a dealer
//! and one or more players, applies hit and stand actions, scores hands with
//! ace reduction, and resolves the winner.
//!
//! # Example
//!
//! ```
//! use bjround::{Round, RoundOptions, RoundPhase};
//!
//! let mut round = Round::new(RoundOptions::default(), 42).unwrap();
//! round.player_stand(1).unwrap();
//! round.play_dealer().unwrap();
//! assert_eq!(round.phase(), RoundPhase::RoundOver);
//!
//! let result = round.resolve_round().unwrap();
//! assert_eq!(result.scores.len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, CardError, ConfigError, DealerError, DeckError, ResolveError};
pub use hand::{BUST_THRESHOLD, Hand, HandStatus};
pub use options::{DealerAces, RoundOptions};
pub use result::{DealerAction, DealerMove, HitResult, RoundResult};
pub use round::{Round, RoundPhase};
