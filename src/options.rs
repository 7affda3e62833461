//! Round configuration options.

/// Whether a busted dealer hand may count its aces as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DealerAces {
    /// The dealer's aces are reduced like any player's.
    #[default]
    Reduce,
    /// A dealer hand at or above the bust threshold keeps its raw total.
    Keep,
}

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::{DealerAces, RoundOptions};
///
/// let options = RoundOptions::default()
///     .with_participants(3)
///     .with_dealer_hits_below(17)
///     .with_dealer_aces(DealerAces::Keep);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// Number of hands dealt, the dealer included.
    pub participants: usize,
    /// Whether participant 0 is the dealer.
    pub has_dealer: bool,
    /// The dealer draws while its score is strictly below this value.
    ///
    /// Defaults to 16. Conventional casino rules use 17.
    pub dealer_hits_below: u8,
    /// Ace reduction policy for the dealer's hand.
    pub dealer_aces: DealerAces,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            participants: 2,
            has_dealer: true,
            dealer_hits_below: 16,
            dealer_aces: DealerAces::Reduce,
        }
    }
}

impl RoundOptions {
    /// Sets the number of participants, the dealer included.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_participants(4);
    /// assert_eq!(options.participants, 4);
    /// ```
    #[must_use]
    pub const fn with_participants(mut self, participants: usize) -> Self {
        self.participants = participants;
        self
    }

    /// Sets whether participant 0 is the dealer.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_dealer(false);
    /// assert_eq!(options.has_dealer, false);
    /// ```
    #[must_use]
    pub const fn with_dealer(mut self, has_dealer: bool) -> Self {
        self.has_dealer = has_dealer;
        self
    }

    /// Sets the score below which the dealer keeps drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_dealer_hits_below(17);
    /// assert_eq!(options.dealer_hits_below, 17);
    /// ```
    #[must_use]
    pub const fn with_dealer_hits_below(mut self, score: u8) -> Self {
        self.dealer_hits_below = score;
        self
    }

    /// Sets the dealer's ace reduction policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{DealerAces, RoundOptions};
    ///
    /// let options = RoundOptions::default().with_dealer_aces(DealerAces::Keep);
    /// assert_eq!(options.dealer_aces, DealerAces::Keep);
    /// ```
    #[must_use]
    pub const fn with_dealer_aces(mut self, policy: DealerAces) -> Self {
        self.dealer_aces = policy;
        self
    }
}
