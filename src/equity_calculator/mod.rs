//! Monte Carlo win probability estimation over the unseen deck.

pub mod deck;
pub mod simulator;

pub use deck::{Deck, DECK_SIZE};
pub use simulator::{
    simulate_win_probability, simulate_win_probability_seeded, SimulatorError, DEFAULT_TRIALS,
};
