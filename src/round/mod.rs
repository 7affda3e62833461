//! Round engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::error::ConfigError;
use crate::hand::{Hand, HandStatus};
use crate::options::{DealerAces, RoundOptions};

mod actions;
mod dealer;
pub mod state;

pub use state::RoundPhase;

/// Cards dealt to every participant at the start of a round.
const OPENING_CARDS: usize = 2;

/// A single blackjack round.
///
/// The round owns its deck and every participant's hand. When the round has a
/// dealer, participant 0 is the dealer and the rest are players.
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    hands: Vec<Hand>,
    options: RoundOptions,
    phase: RoundPhase,
}

impl Round {
    /// Starts a new round with a deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Round, RoundOptions, RoundPhase};
    ///
    /// let round = Round::new(RoundOptions::default(), 42).unwrap();
    /// assert_eq!(round.phase(), RoundPhase::PlayerTurn);
    /// assert_eq!(round.cards_remaining(), 48);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if there are no participants or more than a single
    /// deck can deal to.
    pub fn new(options: RoundOptions, seed: u64) -> Result<Self, ConfigError> {
        Self::validate(&options)?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        Self::with_deck(options, deck)
    }

    /// Starts a new round dealing from `deck` as given, without shuffling.
    ///
    /// Cards are dealt one at a time to each participant in index order, twice.
    ///
    /// # Errors
    ///
    /// Returns an error if the participant count is invalid or the deck is too
    /// short for the opening deal.
    pub fn with_deck(options: RoundOptions, mut deck: Deck) -> Result<Self, ConfigError> {
        Self::validate(&options)?;

        let needed = options.participants * OPENING_CARDS;
        if deck.len() < needed {
            return Err(ConfigError::NotEnoughCards);
        }

        let mut hands: Vec<Hand> = (0..options.participants).map(|_| Hand::new()).collect();
        for _ in 0..OPENING_CARDS {
            for hand in &mut hands {
                let card = deck
                    .draw_one()
                    .map_err(|_| ConfigError::NotEnoughCards)?;
                hand.add_card(card);
            }
        }

        log::debug!(
            "dealt {} hands (dealer: {}), {} cards left",
            options.participants,
            options.has_dealer,
            deck.len()
        );

        let mut round = Self {
            deck,
            hands,
            options,
            phase: RoundPhase::Dealing,
        };
        round.set_phase(RoundPhase::PlayerTurn);
        round.advance_if_players_done();

        Ok(round)
    }

    const fn validate(options: &RoundOptions) -> Result<(), ConfigError> {
        if options.participants == 0 {
            return Err(ConfigError::NoParticipants);
        }
        if options.participants > DECK_SIZE / OPENING_CARDS {
            return Err(ConfigError::TooManyParticipants);
        }
        Ok(())
    }

    fn set_phase(&mut self, phase: RoundPhase) {
        debug_assert!(phase >= self.phase, "round phase cannot move backwards");
        if phase != self.phase {
            log::debug!("round phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Index of the first player hand.
    const fn first_player(&self) -> usize {
        if self.options.has_dealer { 1 } else { 0 }
    }

    fn player_hands(&self) -> &[Hand] {
        self.hands.get(self.first_player()..).unwrap_or_default()
    }

    /// Leaves `PlayerTurn` once no player hand is active.
    ///
    /// If every player busted the dealer has nothing to beat and the round
    /// ends right away.
    fn advance_if_players_done(&mut self) {
        if self.phase != RoundPhase::PlayerTurn {
            return;
        }

        let players = self.player_hands();
        if players.iter().any(Hand::is_active) {
            return;
        }

        let all_bust = !players.is_empty()
            && players
                .iter()
                .all(|hand| hand.status() == HandStatus::Bust);

        if self.options.has_dealer && !all_bust {
            self.set_phase(RoundPhase::DealerTurn);
        } else {
            self.set_phase(RoundPhase::RoundOver);
        }
    }

    /// Returns whether aces in this participant's hand may count as 1.
    fn reduces_aces(&self, participant: usize) -> bool {
        !self.is_dealer(participant) || self.options.dealer_aces == DealerAces::Reduce
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the options this round was started with.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns whether participant 0 is the dealer.
    #[must_use]
    pub const fn has_dealer(&self) -> bool {
        self.options.has_dealer
    }

    /// Returns whether `participant` is the dealer.
    #[must_use]
    pub const fn is_dealer(&self, participant: usize) -> bool {
        self.options.has_dealer && participant == 0
    }

    /// Returns the number of participants, the dealer included.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.hands.len()
    }

    /// Returns a participant's hand.
    #[must_use]
    pub fn hand(&self, participant: usize) -> Option<&Hand> {
        self.hands.get(participant)
    }

    /// Returns every hand, by participant index.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the dealer's hand, if the round has a dealer.
    #[must_use]
    pub fn dealer_hand(&self) -> Option<&Hand> {
        if self.options.has_dealer {
            self.hands.first()
        } else {
            None
        }
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns a participant's score.
    ///
    /// Aces count as 11. A total of 22 or more loses 10 per ace until it
    /// drops below 22, except for the dealer under [`DealerAces::Keep`].
    ///
    /// Returns `None` if the participant does not exist.
    #[must_use]
    pub fn get_score(&self, participant: usize) -> Option<u8> {
        self.hands
            .get(participant)
            .map(|hand| hand.score(self.reduces_aces(participant)))
    }

    /// Returns every participant's score, by index.
    #[must_use]
    pub fn scores(&self) -> Vec<u8> {
        self.hands
            .iter()
            .enumerate()
            .map(|(participant, hand)| hand.score(self.reduces_aces(participant)))
            .collect()
    }
}
