//! Card types and parsing.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];

    /// Parses a suit from a letter (`H`), glyph (`♥`) or name (`Hearts`).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if the symbol is not a known suit.
    pub fn from_symbol(symbol: &str) -> Result<Self, CardError> {
        match symbol {
            "H" | "h" | "♥" | "Hearts" => Ok(Self::Hearts),
            "D" | "d" | "♦" | "Diamonds" => Ok(Self::Diamonds),
            "S" | "s" | "♠" | "Spades" => Ok(Self::Spades),
            "C" | "c" | "♣" | "Clubs" => Ok(Self::Clubs),
            _ => Err(CardError::InvalidSuit),
        }
    }

    /// Returns the suit glyph.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
            Self::Spades => "♠",
            Self::Clubs => "♣",
        }
    }

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
        }
    }

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Spades | Self::Clubs => Color::Black,
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in deck order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Parses a rank from its symbol (`2`..`10`, `J`, `Q`, `K`, `A`).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the symbol is not a known rank.
    pub fn from_symbol(symbol: &str) -> Result<Self, CardError> {
        let rank = match symbol {
            "2" => Self::Two,
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "10" => Self::Ten,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            "A" | "a" => Self::Ace,
            _ => return Err(CardError::InvalidRank),
        };
        Ok(rank)
    }

    /// Returns the short rank symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns the rank name used in the long display form.
    ///
    /// Number cards keep their numeral.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
            _ => self.symbol(),
        }
    }

    /// Returns the card-level value: 10 for J, Q, K and A, numeric otherwise.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King | Self::Ace => 10,
        }
    }
}

/// Suit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and Diamonds.
    Red,
    /// Spades and Clubs.
    Black,
}

impl Color {
    /// Returns `"red"` or `"black"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Black => "black",
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a card from a rank symbol and a suit symbol.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Card, Rank, Suit};
    ///
    /// let card = Card::from_symbols("Q", "D").unwrap();
    /// assert_eq!(card, Card::new(Rank::Queen, Suit::Diamonds));
    /// assert!(Card::from_symbols("1", "D").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] or [`CardError::InvalidSuit`] if
    /// either symbol is unknown. The rank is checked first.
    pub fn from_symbols(rank: &str, suit: &str) -> Result<Self, CardError> {
        let rank = Rank::from_symbol(rank)?;
        let suit = Suit::from_symbol(suit)?;
        Ok(Self::new(rank, suit))
    }

    /// Returns the card-level value.
    ///
    /// Aces are worth 10 here. Hand scoring counts them as 11 and may reduce
    /// them to 1, see [`crate::hand::score_cards`].
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    /// Returns the color of the card.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns the position of this card in a freshly built deck (`0..52`).
    #[must_use]
    pub const fn index(&self) -> usize {
        self.suit as usize * Rank::ALL.len() + self.rank as usize
    }

    /// Formats the card as `♦A` or, when `long` is set, `Ace of Diamonds`.
    #[must_use]
    pub fn to_display_string(&self, long: bool) -> String {
        if long {
            format!("{} of {}", self.rank.name(), self.suit.name())
        } else {
            format!("{}{}", self.suit.glyph(), self.rank.symbol())
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} of {}", self.rank.name(), self.suit.name())
        } else {
            write!(f, "{}{}", self.suit.glyph(), self.rank.symbol())
        }
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses `<rank><suit>` (`10H`, `AS`, `Q♦`) or the short display form
    /// `<glyph><rank>` (`♦A`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = s.chars().next().ok_or(CardError::InvalidRank)?;
        if matches!(first, '♥' | '♦' | '♠' | '♣') {
            let (suit, rank) = s.split_at(first.len_utf8());
            return Self::from_symbols(rank, suit);
        }

        let split = s
            .char_indices()
            .last()
            .map_or(0, |(i, _)| i);
        let (rank, suit) = s.split_at(split);
        Self::from_symbols(rank, suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
