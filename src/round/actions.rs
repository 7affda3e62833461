use crate::error::ActionError;
use crate::hand::{BUST_THRESHOLD, HandStatus};
use crate::result::HitResult;

use super::{Round, RoundPhase};

impl Round {
    fn ensure_player_turn(&self, participant: usize) -> Result<(), ActionError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(ActionError::InvalidPhase);
        }

        let hand = self
            .hands
            .get(participant)
            .ok_or(ActionError::ParticipantNotFound)?;

        if self.is_dealer(participant) {
            return Err(ActionError::DealerIsNotPlayer);
        }

        if !hand.is_active() {
            return Err(ActionError::HandNotActive);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A score of 22 or more busts the hand. Once no player hand is active
    /// the round moves on to the dealer, or ends if every player busted.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn, the participant
    /// does not exist or is the dealer, the hand is not active, or the deck is
    /// empty. Nothing changes on error.
    pub fn player_hit(&mut self, participant: usize) -> Result<HitResult, ActionError> {
        self.ensure_player_turn(participant)?;

        let reduce_aces = self.reduces_aces(participant);
        let card = self.deck.draw_one().map_err(|_| ActionError::NoCards)?;
        log::trace!("participant {participant} draws {card}");

        let hand = self
            .hands
            .get_mut(participant)
            .ok_or(ActionError::ParticipantNotFound)?;
        hand.add_card(card);

        if hand.score(reduce_aces) >= BUST_THRESHOLD {
            hand.set_status(HandStatus::Bust);
            log::debug!("participant {participant} busts");
        }
        let hand = hand.clone();

        self.advance_if_players_done();

        Ok(HitResult {
            card,
            hand,
            phase: self.phase,
        })
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Returns the round phase after standing.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn, the participant
    /// does not exist or is the dealer, or the hand is not active.
    pub fn player_stand(&mut self, participant: usize) -> Result<RoundPhase, ActionError> {
        self.ensure_player_turn(participant)?;

        self.hands
            .get_mut(participant)
            .ok_or(ActionError::ParticipantNotFound)?
            .set_status(HandStatus::Stood);

        self.advance_if_players_done();

        Ok(self.phase)
    }
}
