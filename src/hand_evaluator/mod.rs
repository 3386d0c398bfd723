//! Hand classification: rank counting plus the flush and straight detectors
//! combined into a total-ordered [`Score`].

pub mod detectors;
pub mod score;

pub use detectors::{flush_ranks, straight_ranks};
pub use score::{HandCategory, Score};

use std::cmp::Reverse;
use std::collections::HashSet;

use thiserror::Error;

use crate::card::{Card, ParseCardError, ACE, MIN_RANK};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluatorError {
    #[error(transparent)]
    InvalidCard(#[from] ParseCardError),
    #[error("hand must have 5 to 7 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
}

/// Returns the first card that appears twice, if any.
pub(crate) fn find_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.iter().find(|card| !seen.insert(**card)).copied()
}

/// Classifies a 5 to 7 card hand into its [`Score`].
///
/// The decision chain checks categories strongest first; reordering it would
/// change the hand hierarchy. The straight-flush branch reuses the general
/// flush and straight results rather than a suited-straight detector: when a
/// flush's filtered rank list also forms a straight those cards necessarily
/// share a suit, which holds for hands of at most seven cards.
pub fn classify(cards: &[Card]) -> Score {
    let mut rank_counts = [0u8; 15];
    for card in cards {
        rank_counts[card.rank as usize] += 1;
    }
    let mut tiebreak: Vec<u8> = (MIN_RANK..=ACE)
        .filter(|&rank| rank_counts[rank as usize] > 0)
        .collect();
    tiebreak.sort_unstable_by_key(|&rank| (Reverse(rank_counts[rank as usize]), Reverse(rank)));

    let distinct_desc: Vec<u8> = (MIN_RANK..=ACE)
        .rev()
        .filter(|&rank| rank_counts[rank as usize] > 0)
        .collect();
    let flush = flush_ranks(cards);
    let straight = straight_ranks(&distinct_desc);

    let has_count = |n: u8| rank_counts.iter().any(|&count| count == n);
    let pair_count = rank_counts.iter().filter(|&&count| count == 2).count();

    let category = if flush.is_some() && straight.is_some() {
        if tiebreak[..5] == [ACE, 13, 12, 11, 10] {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        }
    } else if has_count(4) {
        HandCategory::FourOfAKind
    } else if has_count(3) && has_count(2) {
        HandCategory::FullHouse
    } else if flush.is_some() {
        HandCategory::Flush
    } else if straight.is_some() {
        HandCategory::Straight
    } else if has_count(3) {
        HandCategory::ThreeOfAKind
    } else if pair_count == 2 {
        HandCategory::TwoPair
    } else if pair_count == 1 {
        HandCategory::Pair
    } else {
        HandCategory::HighCard
    };

    Score { category, tiebreak }
}

/// Parses 5 to 7 card tokens and classifies them.
///
/// Fails on an unrecognized token, a hand size outside 5..=7, or a repeated
/// card.
pub fn evaluate_hand<S: AsRef<str>>(tokens: &[S]) -> Result<Score, EvaluatorError> {
    if !(5..=7).contains(&tokens.len()) {
        return Err(EvaluatorError::InvalidHandSize(tokens.len()));
    }
    let cards = tokens
        .iter()
        .map(|token| token.as_ref().parse::<Card>())
        .collect::<Result<Vec<Card>, ParseCardError>>()?;
    if let Some(card) = find_duplicate(&cards) {
        return Err(EvaluatorError::DuplicateCard(card));
    }
    Ok(classify(&cards))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(tokens: &[&str]) -> Score {
        evaluate_hand(tokens).unwrap()
    }

    #[test]
    fn test_royal_flush() {
        let score = eval(&["AH", "KH", "QH", "JH", "10H"]);
        assert_eq!(score.category, HandCategory::RoyalFlush);
    }

    #[test]
    fn test_straight_flush() {
        let score = eval(&["9H", "8H", "7H", "6H", "5H"]);
        assert_eq!(score.category, HandCategory::StraightFlush);
        assert_eq!(score.tiebreak[0], 9);
    }

    #[test]
    fn test_four_of_a_kind() {
        let score = eval(&["3D", "3H", "3S", "3C", "2D"]);
        assert_eq!(score.category, HandCategory::FourOfAKind);
        assert_eq!(score.tiebreak, vec![3, 2]);
    }

    #[test]
    fn test_full_house() {
        let score = eval(&["6D", "6H", "6S", "JC", "JD"]);
        assert_eq!(score.category, HandCategory::FullHouse);
        assert_eq!(score.tiebreak, vec![6, 11]);
    }

    #[test]
    fn test_flush() {
        let score = eval(&["AS", "JS", "8S", "6S", "3S"]);
        assert_eq!(score.category, HandCategory::Flush);
        assert_eq!(score.tiebreak, vec![14, 11, 8, 6, 3]);
    }

    #[test]
    fn test_straight() {
        let score = eval(&["9C", "8D", "7H", "6S", "5C"]);
        assert_eq!(score.category, HandCategory::Straight);
        assert_eq!(score.tiebreak, vec![9, 8, 7, 6, 5]);
    }

    #[test]
    fn test_wheel_straight() {
        let score = eval(&["AH", "5D", "4C", "3S", "2H"]);
        assert_eq!(score.category, HandCategory::Straight);
        // detector reports the five playing low; the tiebreak keeps the
        // ace first since all counts are equal
        assert_eq!(score.tiebreak, vec![14, 5, 4, 3, 2]);
    }

    #[test]
    fn test_three_of_a_kind() {
        let score = eval(&["QD", "QH", "QS", "9C", "4D"]);
        assert_eq!(score.category, HandCategory::ThreeOfAKind);
        assert_eq!(score.tiebreak, vec![12, 9, 4]);
    }

    #[test]
    fn test_two_pair() {
        let score = eval(&["10D", "10H", "4S", "4C", "AD"]);
        assert_eq!(score.category, HandCategory::TwoPair);
        assert_eq!(score.tiebreak, vec![10, 4, 14]);
    }

    #[test]
    fn test_one_pair() {
        let score = eval(&["9D", "9H", "AS", "7C", "3D"]);
        assert_eq!(score.category, HandCategory::Pair);
        assert_eq!(score.tiebreak, vec![9, 14, 7, 3]);
    }

    #[test]
    fn test_high_card() {
        let score = eval(&["AD", "JH", "8S", "6C", "3D"]);
        assert_eq!(score.category, HandCategory::HighCard);
        assert_eq!(score.tiebreak, vec![14, 11, 8, 6, 3]);
    }

    #[test]
    fn test_seven_card_straight_over_pair() {
        // pair of sixes plus a ten-high straight in seven cards
        let score = eval(&["10D", "9H", "8S", "7C", "6D", "6H", "2S"]);
        assert_eq!(score.category, HandCategory::Straight);
        // the paired six leads the tiebreak on frequency
        assert_eq!(score.tiebreak, vec![6, 10, 9, 8, 7, 2]);
    }

    #[test]
    fn test_order_independence() {
        let sorted = eval(&["AH", "KH", "QH", "JH", "10H", "2D", "7C"]);
        let shuffled = eval(&["7C", "10H", "AH", "2D", "QH", "KH", "JH"]);
        assert_eq!(sorted, shuffled);
    }

    #[test]
    fn test_invalid_hand_size() {
        assert_eq!(
            evaluate_hand(&["AH", "KH"]),
            Err(EvaluatorError::InvalidHandSize(2))
        );
        let eight = ["AH", "KH", "QH", "JH", "10H", "9H", "8H", "7H"];
        assert_eq!(
            evaluate_hand(&eight),
            Err(EvaluatorError::InvalidHandSize(8))
        );
    }

    #[test]
    fn test_duplicate_card_rejected() {
        let result = evaluate_hand(&["AH", "AH", "QH", "JH", "10H"]);
        assert_eq!(
            result,
            Err(EvaluatorError::DuplicateCard("AH".parse().unwrap()))
        );
    }

    #[test]
    fn test_invalid_token_propagates() {
        let result = evaluate_hand(&["AH", "KH", "QH", "JH", "10X"]);
        assert!(matches!(result, Err(EvaluatorError::InvalidCard(_))));
    }
}
