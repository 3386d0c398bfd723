use crate::card::{Card, Suit, ACE};

/// Checks a set of cards for a flush.
///
/// Returns the flush suit's ranks sorted highest first, or `None` when no
/// suit reaches five cards. Only the flush suit's cards are included. With
/// at most seven cards a second qualifying suit cannot exist; if the input
/// ever exceeded that, the first suit in `Suit::ALL` order would win.
pub fn flush_ranks(cards: &[Card]) -> Option<Vec<u8>> {
    let mut suit_counts = [0u8; 4];
    for card in cards {
        suit_counts[card.suit as usize] += 1;
    }
    let flush_suit = *Suit::ALL
        .iter()
        .find(|&&suit| suit_counts[suit as usize] >= 5)?;
    let mut ranks: Vec<u8> = cards
        .iter()
        .filter(|card| card.suit == flush_suit)
        .map(|card| card.rank)
        .collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    Some(ranks)
}

/// Checks for a straight over a set of distinct ranks sorted descending.
///
/// Scans every five-rank window for strictly consecutive values and returns
/// the first (highest) run found, highest card first. When no run exists,
/// the wheel A-5-4-3-2 is tried with the ace playing low, returned as
/// `[5, 4, 3, 2, 1]`.
pub fn straight_ranks(distinct_desc: &[u8]) -> Option<[u8; 5]> {
    for window in distinct_desc.windows(5) {
        if window[0] - window[4] == 4 {
            return Some([window[0], window[1], window[2], window[3], window[4]]);
        }
    }
    const WHEEL: [u8; 5] = [ACE, 5, 4, 3, 2];
    if WHEEL.iter().all(|rank| distinct_desc.contains(rank)) {
        return Some([5, 4, 3, 2, 1]);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(tokens: &[&str]) -> Vec<Card> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_flush_detected() {
        let hand = cards(&["AH", "10H", "7H", "4H", "2H", "KD", "3C"]);
        assert_eq!(flush_ranks(&hand), Some(vec![14, 10, 7, 4, 2]));
    }

    #[test]
    fn test_flush_only_returns_flush_suit() {
        // six hearts: all six come back, the off-suit king does not
        let hand = cards(&["AH", "10H", "7H", "4H", "2H", "9H", "KD"]);
        assert_eq!(flush_ranks(&hand), Some(vec![14, 10, 9, 7, 4, 2]));
    }

    #[test]
    fn test_no_flush_with_four_suited() {
        let hand = cards(&["AH", "10H", "7H", "4H", "2D", "KD", "3C"]);
        assert_eq!(flush_ranks(&hand), None);
    }

    #[test]
    fn test_straight_found_in_window() {
        assert_eq!(straight_ranks(&[13, 12, 11, 10, 9]), Some([13, 12, 11, 10, 9]));
        // seven distinct ranks, straight buried behind a gap at the top
        assert_eq!(
            straight_ranks(&[14, 12, 8, 7, 6, 5, 4]),
            Some([8, 7, 6, 5, 4])
        );
    }

    #[test]
    fn test_straight_prefers_highest_run() {
        // six in a row, the higher five-card window wins
        assert_eq!(
            straight_ranks(&[10, 9, 8, 7, 6, 5]),
            Some([10, 9, 8, 7, 6])
        );
    }

    #[test]
    fn test_wheel() {
        assert_eq!(straight_ranks(&[14, 9, 5, 4, 3, 2]), Some([5, 4, 3, 2, 1]));
    }

    #[test]
    fn test_no_straight() {
        assert_eq!(straight_ranks(&[14, 12, 10, 8, 6, 4, 2]), None);
        // a gap breaks the run
        assert_eq!(straight_ranks(&[9, 8, 7, 6, 4]), None);
    }
}
