use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::{Card, Suit, ACE, MIN_RANK};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// The unseen portion of the deck: all 52 cards minus the known ones.
///
/// Built once per simulation; each trial draws a fresh permutation.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the 13x4 universe with every known card removed.
    pub fn without(known: &[Card]) -> Deck {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| (MIN_RANK..=ACE).map(move |rank| Card::new(rank, suit)))
            .filter(|card| !known.contains(card))
            .collect();
        Deck { cards }
    }

    /// Number of unseen cards remaining.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns a uniform random permutation of the unseen cards.
    ///
    /// Each call shuffles independently; callers dealing repeatedly should
    /// reuse the returned buffer via [`Deck::shuffle_into`].
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        cards
    }

    /// Shuffles a previously dealt buffer in place.
    pub fn shuffle_into<R: Rng>(&self, buf: &mut [Card], rng: &mut R) {
        buf.shuffle(rng);
    }
}
