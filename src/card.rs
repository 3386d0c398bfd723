use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Lowest rank in play.
pub const MIN_RANK: u8 = 2;
/// Ace plays high as 14; the wheel straight treats it as 1.
pub const ACE: u8 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits, in the order the deck is built.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    const fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single playing card: rank 2..=14 plus a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: u8,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: u8, suit: Suit) -> Card {
        Card { rank, suit }
    }
}

/// Raised when a card token has an unrecognized rank or suit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("invalid rank in card token: {0:?}")]
    InvalidRank(String),
    #[error("invalid suit in card token: {0:?}")]
    InvalidSuit(String),
    #[error("malformed card token: {0:?}")]
    Malformed(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses tokens of the form `<rank><suit>`: `2H`, `10D`, `QS`, `AC`.
    ///
    /// The two-character rank `10` is a single unit; the final character is
    /// always the suit. Tokens are uppercase only and validated strictly.
    fn from_str(s: &str) -> Result<Card, ParseCardError> {
        if s.len() < 2 || !s.is_ascii() {
            return Err(ParseCardError::Malformed(s.to_string()));
        }
        let (rank_str, suit_str) = s.split_at(s.len() - 1);
        let rank = match rank_str {
            "2" => 2,
            "3" => 3,
            "4" => 4,
            "5" => 5,
            "6" => 6,
            "7" => 7,
            "8" => 8,
            "9" => 9,
            "10" => 10,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            "A" => ACE,
            _ => return Err(ParseCardError::InvalidRank(rank_str.to_string())),
        };
        let suit = match suit_str {
            "H" => Suit::Hearts,
            "D" => Suit::Diamonds,
            "C" => Suit::Clubs,
            "S" => Suit::Spades,
            _ => return Err(ParseCardError::InvalidSuit(suit_str.to_string())),
        };
        Ok(Card { rank, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            11 => write!(f, "J{}", self.suit),
            12 => write!(f, "Q{}", self.suit),
            13 => write!(f, "K{}", self.suit),
            14 => write!(f, "A{}", self.suit),
            r => write!(f, "{}{}", r, self.suit),
        }
    }
}
