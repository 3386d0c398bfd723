use std::cmp::Ordering;
use std::fmt;

/// Hand ranking tiers.
///
/// Discriminants are gapped to leave room for future tiers without
/// renumbering anything that compares or serializes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 1,
    Pair = 20,
    TwoPair = 30,
    ThreeOfAKind = 40,
    Straight = 50,
    Flush = 60,
    FullHouse = 70,
    FourOfAKind = 80,
    StraightFlush = 100,
    RoyalFlush = 110,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };
        write!(f, "{}", name)
    }
}

/// Total-ordered strength of a classified hand.
///
/// `tiebreak` holds the distinct ranks present, ordered by frequency
/// descending then rank descending. The same sequence serves as the kicker
/// comparison key for every category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Score {
    pub category: HandCategory,
    pub tiebreak: Vec<u8>,
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.category != other.category {
            return self.category.cmp(&other.category);
        }
        // element-wise, higher leading rank wins
        self.tiebreak.cmp(&other.tiebreak)
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
