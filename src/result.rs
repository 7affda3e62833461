//! Values returned by round actions and resolution.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{BUST_THRESHOLD, Hand};
use crate::round::RoundPhase;

/// Result of a player hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitResult {
    /// The card drawn.
    pub card: Card,
    /// The player's hand after the draw.
    pub hand: Hand,
    /// The round phase after the hit.
    pub phase: RoundPhase,
}

/// What the dealer did on one `dealer_act` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerAction {
    /// The dealer drew this card.
    Hit(Card),
    /// The dealer stood and the round is over.
    Stand,
}

/// Result of a single dealer step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerMove {
    /// The action taken.
    pub action: DealerAction,
    /// The dealer's hand after the action.
    pub hand: Hand,
}

/// Final outcome of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Final score of every participant, by index.
    pub scores: Vec<u8>,
    /// The winning participant, if there is one.
    pub winner: Option<usize>,
    /// Whether two or more participants share the best score.
    pub is_tied: bool,
    /// Participants sharing the best score (empty unless tied).
    pub tied_participants: Vec<usize>,
    /// Whether the dealer won because everyone busted.
    pub is_dealer_default_win: bool,
}

impl RoundResult {
    /// Determines the winner from final scores.
    ///
    /// The highest score below [`BUST_THRESHOLD`] wins. Equal best scores
    /// are a tie with no winner. If every score is bust and there is a
    /// dealer, participant 0 wins by default.
    ///
    /// ```
    /// use bjround::RoundResult;
    ///
    /// let result = RoundResult::from_scores(&[25, 17], true);
    /// assert_eq!(result.winner, Some(1));
    ///
    /// let result = RoundResult::from_scores(&[24, 23], true);
    /// assert!(result.is_dealer_default_win);
    /// assert_eq!(result.winner, Some(0));
    /// ```
    #[must_use]
    pub fn from_scores(scores: &[u8], has_dealer: bool) -> Self {
        let best = scores
            .iter()
            .copied()
            .filter(|&score| score < BUST_THRESHOLD)
            .max();

        let Some(best) = best else {
            let dealer_default = has_dealer && !scores.is_empty();
            return Self {
                scores: scores.to_vec(),
                winner: dealer_default.then_some(0),
                is_tied: false,
                tied_participants: Vec::new(),
                is_dealer_default_win: dealer_default,
            };
        };

        let leaders: Vec<usize> = scores
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == best)
            .map(|(index, _)| index)
            .collect();

        let (winner, tied_participants) = if leaders.len() == 1 {
            (Some(leaders[0]), Vec::new())
        } else {
            (None, leaders)
        };

        Self {
            scores: scores.to_vec(),
            winner,
            is_tied: !tied_participants.is_empty(),
            tied_participants,
            is_dealer_default_win: false,
        }
    }
}
