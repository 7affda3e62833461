//! Round integration tests.

use bjround::{
    ActionError, Card, ConfigError, DECK_SIZE, DealerAces, DealerAction, DealerError, Deck,
    HandStatus, Rank, ResolveError, Round, RoundOptions, RoundPhase, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Builds a round whose deck starts with `draws`, in deal order.
///
/// Opening cards go to each participant in index order, twice.
fn stacked(options: RoundOptions, draws: &[Card]) -> Round {
    let deck = Deck::with_top(draws).unwrap();
    Round::with_deck(options, deck).unwrap()
}

fn heads_up() -> RoundOptions {
    RoundOptions::default().with_participants(2).with_dealer(true)
}

#[test]
fn new_round_deals_two_cards_each() {
    let round = Round::new(heads_up(), 7).unwrap();

    assert_eq!(round.phase(), RoundPhase::PlayerTurn);
    assert_eq!(round.participant_count(), 2);
    assert!(round.is_dealer(0));
    assert!(!round.is_dealer(1));
    assert_eq!(round.dealer_hand(), round.hand(0));

    let dealt: Vec<Card> = round
        .hands()
        .iter()
        .flat_map(|hand| hand.cards().iter().copied())
        .collect();
    assert!(round.hands().iter().all(|hand| hand.len() == 2));
    assert_eq!(dealt.len() + round.cards_remaining(), DECK_SIZE);

    let mut all: Vec<usize> = dealt
        .iter()
        .chain(round.deck().cards())
        .map(Card::index)
        .collect();
    all.sort_unstable();
    assert_eq!(all, (0..DECK_SIZE).collect::<Vec<_>>());
}

#[test]
fn same_seed_deals_the_same_round() {
    let a = Round::new(heads_up(), 1234).unwrap();
    let b = Round::new(heads_up(), 1234).unwrap();
    assert_eq!(a.hands(), b.hands());
    assert_eq!(a.deck(), b.deck());
}

#[test]
fn participant_count_is_validated() {
    let none = RoundOptions::default().with_participants(0);
    assert_eq!(Round::new(none, 1).unwrap_err(), ConfigError::NoParticipants);

    let crowded = RoundOptions::default().with_participants(27);
    assert_eq!(
        Round::new(crowded, 1).unwrap_err(),
        ConfigError::TooManyParticipants
    );

    let full = RoundOptions::default().with_participants(26);
    let round = Round::new(full, 1).unwrap();
    assert_eq!(round.cards_remaining(), 0);
}

#[test]
fn short_deck_cannot_deal() {
    let mut deck = Deck::new();
    deck.draw(DECK_SIZE - 3).unwrap();

    assert_eq!(
        Round::with_deck(heads_up(), deck).unwrap_err(),
        ConfigError::NotEnoughCards
    );
}

#[test]
fn scores_of_dealt_hands() {
    let round = stacked(
        RoundOptions::default().with_participants(3),
        &[
            card(Rank::Ten, Suit::Hearts),  // dealer
            card(Rank::King, Suit::Hearts), // player 1
            card(Rank::Ace, Suit::Hearts),  // player 2
            card(Rank::Six, Suit::Hearts),  // dealer
            card(Rank::Queen, Suit::Clubs), // player 1
            card(Rank::Ace, Suit::Clubs),   // player 2
        ],
    );

    assert_eq!(round.get_score(0), Some(16));
    assert_eq!(round.get_score(1), Some(20));
    // 11 + 11 = 22, one ace drops to 1.
    assert_eq!(round.get_score(2), Some(12));
    assert_eq!(round.get_score(3), None);
    assert_eq!(round.scores(), [16, 20, 12]);
}

#[test]
fn player_hit_with_ace_reduction() {
    let mut round = stacked(
        heads_up(),
        &[
            card(Rank::Nine, Suit::Hearts), // dealer
            card(Rank::Ace, Suit::Spades),  // player
            card(Rank::Eight, Suit::Hearts), // dealer
            card(Rank::Six, Suit::Spades),  // player
            card(Rank::Ten, Suit::Clubs),   // player hit
        ],
    );

    let hit = round.player_hit(1).unwrap();
    assert_eq!(hit.card, card(Rank::Ten, Suit::Clubs));
    assert_eq!(hit.hand.len(), 3);
    assert_eq!(hit.hand.raw_total(), 27);
    assert_eq!(hit.hand.status(), HandStatus::Active);
    assert_eq!(hit.phase, RoundPhase::PlayerTurn);
    assert_eq!(round.get_score(1), Some(17));
}

#[test]
fn single_player_bust_ends_round() {
    let mut round = stacked(
        heads_up(),
        &[
            card(Rank::Ten, Suit::Hearts),  // dealer
            card(Rank::Ten, Suit::Spades),  // player
            card(Rank::Six, Suit::Hearts),  // dealer
            card(Rank::Nine, Suit::Spades), // player
            card(Rank::King, Suit::Spades), // player hit
        ],
    );

    let hit = round.player_hit(1).unwrap();
    assert_eq!(hit.hand.status(), HandStatus::Bust);
    assert_eq!(hit.phase, RoundPhase::RoundOver);
    assert_eq!(round.phase(), RoundPhase::RoundOver);

    let result = round.resolve_round().unwrap();
    assert_eq!(result.scores, [16, 29]);
    assert_eq!(result.winner, Some(0));
    assert!(!result.is_dealer_default_win);
}

#[test]
fn dealer_hits_then_stands() {
    let mut round = stacked(
        heads_up(),
        &[
            card(Rank::Five, Suit::Hearts),  // dealer
            card(Rank::Ten, Suit::Spades),   // player
            card(Rank::Seven, Suit::Hearts), // dealer
            card(Rank::Eight, Suit::Spades), // player
            card(Rank::Seven, Suit::Clubs),  // dealer draw
        ],
    );

    assert_eq!(round.player_stand(1).unwrap(), RoundPhase::DealerTurn);
    assert_eq!(round.get_score(0), Some(12));

    let first = round.dealer_act().unwrap();
    assert_eq!(first.action, DealerAction::Hit(card(Rank::Seven, Suit::Clubs)));
    assert_eq!(first.hand.len(), 3);
    assert_eq!(round.get_score(0), Some(19));
    assert_eq!(round.phase(), RoundPhase::DealerTurn);

    let second = round.dealer_act().unwrap();
    assert_eq!(second.action, DealerAction::Stand);
    assert_eq!(second.hand.status(), HandStatus::Stood);
    assert_eq!(round.phase(), RoundPhase::RoundOver);

    assert_eq!(round.dealer_act().unwrap_err(), DealerError::InvalidPhase);

    let result = round.resolve_round().unwrap();
    assert_eq!(result.scores, [19, 18]);
    assert_eq!(result.winner, Some(0));
}

#[test]
fn dealer_stands_on_sixteen_by_default() {
    let draws = [
        card(Rank::Ten, Suit::Hearts),   // dealer
        card(Rank::Ten, Suit::Spades),   // player
        card(Rank::Six, Suit::Hearts),   // dealer
        card(Rank::Seven, Suit::Spades), // player
        card(Rank::Two, Suit::Clubs),    // dealer draw
    ];

    let mut round = stacked(heads_up(), &draws);
    round.player_stand(1).unwrap();
    assert_eq!(round.dealer_act().unwrap().action, DealerAction::Stand);

    let mut round = stacked(heads_up().with_dealer_hits_below(17), &draws);
    round.player_stand(1).unwrap();
    assert_eq!(
        round.dealer_act().unwrap().action,
        DealerAction::Hit(card(Rank::Two, Suit::Clubs))
    );
    assert_eq!(round.get_score(0), Some(18));
}

#[test]
fn play_dealer_returns_drawn_cards() {
    let mut round = stacked(
        heads_up(),
        &[
            card(Rank::Two, Suit::Hearts),   // dealer
            card(Rank::Ten, Suit::Spades),   // player
            card(Rank::Three, Suit::Hearts), // dealer
            card(Rank::Nine, Suit::Spades),  // player
            card(Rank::Four, Suit::Clubs),   // dealer: 9
            card(Rank::Five, Suit::Clubs),   // dealer: 14
            card(Rank::Ten, Suit::Clubs),    // dealer: 24
        ],
    );

    round.player_stand(1).unwrap();
    let drawn = round.play_dealer().unwrap();
    assert_eq!(
        drawn,
        [
            card(Rank::Four, Suit::Clubs),
            card(Rank::Five, Suit::Clubs),
            card(Rank::Ten, Suit::Clubs),
        ]
    );
    assert_eq!(round.phase(), RoundPhase::RoundOver);
    assert_eq!(round.dealer_hand().unwrap().status(), HandStatus::Bust);

    let result = round.resolve_round().unwrap();
    assert_eq!(result.scores, [24, 19]);
    assert_eq!(result.winner, Some(1));
    assert!(!result.is_tied);
    assert!(!result.is_dealer_default_win);
}

#[test]
fn dealer_aces_policy() {
    let draws = [
        card(Rank::Ace, Suit::Hearts),    // dealer
        card(Rank::Ten, Suit::Spades),    // player
        card(Rank::Ace, Suit::Diamonds),  // dealer
        card(Rank::Eight, Suit::Spades),  // player
        card(Rank::Four, Suit::Clubs),    // dealer draw
    ];

    let round = stacked(heads_up(), &draws);
    assert_eq!(round.get_score(0), Some(12));

    let mut round = stacked(heads_up().with_dealer_aces(DealerAces::Keep), &draws);
    assert_eq!(round.get_score(0), Some(22));

    round.player_stand(1).unwrap();
    let stand = round.dealer_act().unwrap();
    assert_eq!(stand.action, DealerAction::Stand);
    // A kept 22 is still a bust hand.
    assert_eq!(stand.hand.status(), HandStatus::Bust);
    assert_eq!(round.dealer_hand().unwrap().status(), HandStatus::Bust);

    let result = round.resolve_round().unwrap();
    assert_eq!(result.scores, [22, 18]);
    assert_eq!(result.winner, Some(1));
}

#[test]
fn everyone_bust_is_dealer_default_win() {
    let mut round = stacked(
        heads_up().with_dealer_aces(DealerAces::Keep),
        &[
            card(Rank::Ace, Suit::Hearts),   // dealer
            card(Rank::Ten, Suit::Spades),   // player
            card(Rank::Ace, Suit::Diamonds), // dealer
            card(Rank::Nine, Suit::Spades),  // player
            card(Rank::King, Suit::Clubs),   // player hit
        ],
    );

    round.player_hit(1).unwrap();
    assert_eq!(round.phase(), RoundPhase::RoundOver);

    let result = round.resolve_round().unwrap();
    assert_eq!(result.scores, [22, 29]);
    assert_eq!(result.winner, Some(0));
    assert!(result.is_dealer_default_win);
    assert!(!result.is_tied);
}

#[test]
fn hit_after_round_over_changes_nothing() {
    let mut round = stacked(
        heads_up(),
        &[
            card(Rank::Ten, Suit::Hearts),   // dealer
            card(Rank::Ten, Suit::Spades),   // player
            card(Rank::Eight, Suit::Hearts), // dealer
            card(Rank::Nine, Suit::Spades),  // player
        ],
    );
    round.player_stand(1).unwrap();
    round.play_dealer().unwrap();
    assert_eq!(round.phase(), RoundPhase::RoundOver);

    let hands = round.hands().to_vec();
    let remaining = round.cards_remaining();

    assert_eq!(round.player_hit(1).unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(round.player_stand(1).unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(round.hands(), hands.as_slice());
    assert_eq!(round.cards_remaining(), remaining);
}

#[test]
fn player_action_errors() {
    let mut round = Round::new(heads_up(), 5).unwrap();

    assert_eq!(round.player_hit(0).unwrap_err(), ActionError::DealerIsNotPlayer);
    assert_eq!(round.player_stand(0).unwrap_err(), ActionError::DealerIsNotPlayer);
    assert_eq!(round.player_hit(2).unwrap_err(), ActionError::ParticipantNotFound);
    assert_eq!(round.dealer_act().unwrap_err(), DealerError::InvalidPhase);
    assert_eq!(round.resolve_round().unwrap_err(), ResolveError::InvalidPhase);
}

#[test]
fn hit_on_empty_deck_changes_nothing() {
    let mut deck = Deck::new();
    deck.draw(DECK_SIZE - 4).unwrap();
    let mut round = Round::with_deck(heads_up(), deck).unwrap();
    assert_eq!(round.cards_remaining(), 0);

    let before = round.hand(1).cloned();
    assert_eq!(round.player_hit(1).unwrap_err(), ActionError::NoCards);
    assert_eq!(round.hand(1).cloned(), before);
    assert_eq!(round.phase(), RoundPhase::PlayerTurn);
}

#[test]
fn dealer_draw_on_empty_deck_fails() {
    let mut deck = Deck::new();
    deck.draw(DECK_SIZE - 4).unwrap();
    // Dealer J + K = 20 would stand, so lower the bar to force a draw.
    let mut round = Round::with_deck(heads_up().with_dealer_hits_below(21), deck).unwrap();

    round.player_stand(1).unwrap();
    assert_eq!(round.dealer_act().unwrap_err(), DealerError::NoCards);
    assert_eq!(round.phase(), RoundPhase::DealerTurn);
    assert_eq!(round.dealer_hand().unwrap().len(), 2);
}

#[test]
fn no_dealer_round() {
    let options = RoundOptions::default().with_participants(2).with_dealer(false);
    let mut round = stacked(
        options,
        &[
            card(Rank::Ten, Suit::Hearts),   // player 0
            card(Rank::Ten, Suit::Spades),   // player 1
            card(Rank::Eight, Suit::Hearts), // player 0
            card(Rank::Eight, Suit::Spades), // player 1
        ],
    );

    assert!(round.dealer_hand().is_none());
    assert_eq!(round.dealer_act().unwrap_err(), DealerError::NoDealer);

    assert_eq!(round.player_stand(0).unwrap(), RoundPhase::PlayerTurn);
    assert_eq!(round.player_stand(0).unwrap_err(), ActionError::HandNotActive);
    assert_eq!(round.player_stand(1).unwrap(), RoundPhase::RoundOver);
    assert_eq!(round.dealer_act().unwrap_err(), DealerError::NoDealer);

    let result = round.resolve_round().unwrap();
    assert_eq!(result.scores, [18, 18]);
    assert!(result.is_tied);
    assert_eq!(result.tied_participants, [0, 1]);
    assert_eq!(result.winner, None);
    assert!(!result.is_dealer_default_win);

    // Resolution is a pure query.
    assert_eq!(round.resolve_round().unwrap(), result);
}

#[test]
fn multiplayer_waits_for_every_player() {
    let mut round = stacked(
        RoundOptions::default().with_participants(3),
        &[
            card(Rank::Nine, Suit::Hearts),   // dealer
            card(Rank::Ten, Suit::Spades),    // player 1
            card(Rank::Seven, Suit::Spades),  // player 2
            card(Rank::Eight, Suit::Hearts),  // dealer
            card(Rank::Six, Suit::Spades),    // player 1
            card(Rank::Ten, Suit::Diamonds),  // player 2
            card(Rank::Queen, Suit::Clubs),   // player 1 hit
        ],
    );

    let hit = round.player_hit(1).unwrap();
    assert_eq!(hit.hand.status(), HandStatus::Bust);
    assert_eq!(hit.phase, RoundPhase::PlayerTurn);
    assert_eq!(round.player_hit(1).unwrap_err(), ActionError::HandNotActive);

    assert_eq!(round.player_stand(2).unwrap(), RoundPhase::DealerTurn);
    assert_eq!(round.dealer_act().unwrap().action, DealerAction::Stand);

    let result = round.resolve_round().unwrap();
    assert_eq!(result.scores, [17, 26, 17]);
    assert!(result.is_tied);
    assert_eq!(result.tied_participants, [0, 2]);
    assert_eq!(result.winner, None);
}

#[test]
fn multiplayer_all_bust_skips_dealer() {
    let mut round = stacked(
        RoundOptions::default().with_participants(3),
        &[
            card(Rank::Two, Suit::Hearts),   // dealer
            card(Rank::Ten, Suit::Spades),   // player 1
            card(Rank::Ten, Suit::Diamonds), // player 2
            card(Rank::Three, Suit::Hearts), // dealer
            card(Rank::Nine, Suit::Spades),  // player 1
            card(Rank::Nine, Suit::Diamonds), // player 2
            card(Rank::King, Suit::Clubs),   // player 1 hit
            card(Rank::Queen, Suit::Clubs),  // player 2 hit
        ],
    );

    assert_eq!(round.player_hit(1).unwrap().phase, RoundPhase::PlayerTurn);
    assert_eq!(round.player_hit(2).unwrap().phase, RoundPhase::RoundOver);

    let result = round.resolve_round().unwrap();
    assert_eq!(result.scores, [5, 29, 29]);
    assert_eq!(result.winner, Some(0));
    assert!(!result.is_dealer_default_win);
}

#[test]
fn dealer_only_round_goes_straight_to_dealer() {
    let mut round = stacked(
        RoundOptions::default().with_participants(1),
        &[
            card(Rank::Ten, Suit::Hearts),   // dealer
            card(Rank::Seven, Suit::Hearts), // dealer
        ],
    );

    assert_eq!(round.phase(), RoundPhase::DealerTurn);
    round.play_dealer().unwrap();

    let result = round.resolve_round().unwrap();
    assert_eq!(result.scores, [17]);
    assert_eq!(result.winner, Some(0));
}
