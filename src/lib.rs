//! # Showdown
//! A texas holdem hand ranking and win probability library
//!
//! Currently supports
//!  - rule-based 5 to 7 card hand classification
//!  - total-ordered scores with kicker comparison
//!  - multithreaded monte carlo win probability vs. N random opponents
//!
//! ## Hand Evaluator
//!
//! ```
//! use showdown::{evaluate_hand, HandCategory};
//!
//! let score = evaluate_hand(&["AH", "KH", "QH", "JH", "10H"]).unwrap();
//! assert_eq!(score.category, HandCategory::RoyalFlush);
//!
//! let full_house = evaluate_hand(&["6D", "6H", "6S", "JC", "JD", "2H", "9C"]).unwrap();
//! assert!(full_house.category < score.category);
//! ```
//!
//! ## Win Probability
//!
//! ```
//! use std::sync::{atomic::AtomicBool, Arc};
//! use showdown::{simulate_win_probability, DEFAULT_TRIALS};
//!
//! let cancel_token = Arc::new(AtomicBool::new(false));
//! let n_threads = 4;
//! let probability = simulate_win_probability(
//!     &["AH", "AD"],
//!     &["10C", "3D", "7S"],
//!     2,
//!     DEFAULT_TRIALS,
//!     n_threads,
//!     cancel_token,
//! )
//! .unwrap();
//! assert!((0.0..=100.0).contains(&probability));
//! ```

pub mod card;
pub mod equity_calculator;
pub mod hand_evaluator;

pub use card::{Card, ParseCardError, Suit};
pub use equity_calculator::{
    simulate_win_probability, simulate_win_probability_seeded, Deck, SimulatorError,
    DEFAULT_TRIALS,
};
pub use hand_evaluator::{evaluate_hand, EvaluatorError, HandCategory, Score};
