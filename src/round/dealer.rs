use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DealerError, ResolveError};
use crate::hand::{BUST_THRESHOLD, HandStatus};
use crate::result::{DealerAction, DealerMove, RoundResult};

use super::{Round, RoundPhase};

impl Round {
    /// Dealer takes one step according to the house rule.
    ///
    /// While the dealer's score is below
    /// [`RoundOptions::dealer_hits_below`](crate::RoundOptions::dealer_hits_below)
    /// (and not bust) the dealer draws a card and the round stays in
    /// `DealerTurn`. Otherwise the dealer stands and the round is over.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has no dealer, is not in dealer turn, or
    /// the deck is empty while the dealer must draw.
    pub fn dealer_act(&mut self) -> Result<DealerMove, DealerError> {
        if !self.options.has_dealer {
            return Err(DealerError::NoDealer);
        }
        if self.phase != RoundPhase::DealerTurn {
            return Err(DealerError::InvalidPhase);
        }

        let score = self.get_score(0).ok_or(DealerError::NoDealer)?;
        let reduce_aces = self.reduces_aces(0);
        let hits_below = self.options.dealer_hits_below;

        if score < hits_below && score < BUST_THRESHOLD {
            let card = self.deck.draw_one().map_err(|_| DealerError::NoCards)?;
            log::trace!("dealer draws {card} on {score}");

            let dealer = self.hands.first_mut().ok_or(DealerError::NoDealer)?;
            dealer.add_card(card);
            if dealer.score(reduce_aces) >= BUST_THRESHOLD {
                dealer.set_status(HandStatus::Bust);
            }

            return Ok(DealerMove {
                action: DealerAction::Hit(card),
                hand: dealer.clone(),
            });
        }

        let dealer = self.hands.first_mut().ok_or(DealerError::NoDealer)?;
        if dealer.is_active() {
            let status = if score >= BUST_THRESHOLD {
                HandStatus::Bust
            } else {
                HandStatus::Stood
            };
            dealer.set_status(status);
        }
        let hand = dealer.clone();
        log::debug!("dealer stands on {score}");

        self.set_phase(RoundPhase::RoundOver);

        Ok(DealerMove {
            action: DealerAction::Stand,
            hand,
        })
    }

    /// Plays the dealer's turn to the end.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Same as [`Round::dealer_act`].
    pub fn play_dealer(&mut self) -> Result<Vec<Card>, DealerError> {
        let mut drawn_cards = Vec::new();

        loop {
            match self.dealer_act()?.action {
                DealerAction::Hit(card) => drawn_cards.push(card),
                DealerAction::Stand => return Ok(drawn_cards),
            }
        }
    }

    /// Computes final scores and the winner.
    ///
    /// Can be called any number of times once the round is over.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn resolve_round(&self) -> Result<RoundResult, ResolveError> {
        if self.phase != RoundPhase::RoundOver {
            return Err(ResolveError::InvalidPhase);
        }

        Ok(RoundResult::from_scores(
            &self.scores(),
            self.options.has_dealer,
        ))
    }
}
