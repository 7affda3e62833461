//! Round phase types.

/// Round phase.
///
/// Phases only move forward: `Dealing` → `PlayerTurn` → `DealerTurn` →
/// `RoundOver`. Rounds without a dealer skip `DealerTurn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoundPhase {
    /// Opening hands are being dealt.
    Dealing,
    /// Players hit or stand.
    PlayerTurn,
    /// The dealer plays out their hand.
    DealerTurn,
    /// Round has ended and can be resolved.
    RoundOver,
}
