use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::thread;

use log::debug;
use rand::rngs::SmallRng;
use rand::{thread_rng, Rng, SeedableRng};
use thiserror::Error;

use super::deck::Deck;
use crate::card::{Card, ParseCardError};
use crate::hand_evaluator::{classify, find_duplicate};

/// Trial count used when the caller has no preference.
pub const DEFAULT_TRIALS: u64 = 1000;
const HOLE_CARDS: usize = 2;
const BOARD_CARDS: usize = 5;
/// Cancel token poll stride, in trials.
const CANCEL_CHECK_MASK: u64 = 0x3ff;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulatorError {
    #[error(transparent)]
    InvalidCard(#[from] ParseCardError),
    #[error("expected exactly 2 hole cards, got {0}")]
    InvalidHoleCards(usize),
    #[error("too many community cards: {0}")]
    TooManyBoardCards(usize),
    #[error("duplicate card among known cards: {0}")]
    DuplicateCard(Card),
    #[error("trial needs {needed} unseen cards but only {available} remain")]
    InsufficientDeck { needed: usize, available: usize },
    #[error("number of opponents must be positive")]
    NoOpponents,
    #[error("number of trials must be positive")]
    NoTrials,
}

/// Estimates the probability, in percent, that the hole cards beat every
/// opponent at showdown.
///
/// Each trial shuffles the unseen deck, deals two cards to each opponent and
/// enough cards to complete the five-card board, then classifies all hands
/// over the shared board. A trial counts as a win only when the hole cards
/// strictly beat every opponent; true ties are losses.
///
/// Trials are split across `n_threads` workers, each with its own
/// independently seeded RNG. The cancel token is polled between trials; on
/// early termination the estimate covers the trials actually completed.
///
/// # Arguments
///
/// * `hand` Two hole card tokens
/// * `community` Zero to five community card tokens
/// * `num_opponents` Number of random opposing hands
/// * `num_trials` Monte Carlo sample size
/// * `n_threads` Number of worker threads
/// * `cancel_token` A shared boolean to stop the simulation early
///
/// # Example
/// ```
/// use std::sync::{atomic::AtomicBool, Arc};
/// use showdown::{simulate_win_probability, DEFAULT_TRIALS};
///
/// let cancel = Arc::new(AtomicBool::new(false));
/// let p = simulate_win_probability(
///     &["AH", "KH"],
///     &["QH", "JH", "10H"],
///     2,
///     DEFAULT_TRIALS,
///     4,
///     cancel,
/// )
/// .unwrap();
/// assert!((0.0..=100.0).contains(&p));
/// ```
pub fn simulate_win_probability<S: AsRef<str>, T: AsRef<str>>(
    hand: &[S],
    community: &[T],
    num_opponents: usize,
    num_trials: u64,
    n_threads: u8,
    cancel_token: Arc<AtomicBool>,
) -> Result<f64, SimulatorError> {
    let sim = Simulator::new(hand, community, num_opponents, num_trials, cancel_token)?;
    let n_threads = usize::from(n_threads.max(1));
    let mut seed_rng = thread_rng();
    let rngs = (0..n_threads)
        .map(|_| SmallRng::from_rng(&mut seed_rng).unwrap())
        .collect();
    Ok(sim.run(num_trials, rngs))
}

/// Deterministic variant of [`simulate_win_probability`].
///
/// Trials are partitioned across workers up front and worker `i` draws from
/// `SmallRng::seed_from_u64(seed + i)`, so identical inputs, seed, and
/// thread count always produce the identical estimate.
pub fn simulate_win_probability_seeded<S: AsRef<str>, T: AsRef<str>>(
    hand: &[S],
    community: &[T],
    num_opponents: usize,
    num_trials: u64,
    n_threads: u8,
    cancel_token: Arc<AtomicBool>,
    seed: u64,
) -> Result<f64, SimulatorError> {
    let sim = Simulator::new(hand, community, num_opponents, num_trials, cancel_token)?;
    let n_threads = usize::from(n_threads.max(1));
    let rngs = (0..n_threads)
        .map(|i| SmallRng::seed_from_u64(seed.wrapping_add(i as u64)))
        .collect();
    Ok(sim.run(num_trials, rngs))
}

/// Win probability simulation state shared by all workers.
#[derive(Debug)]
struct Simulator {
    /// the evaluated hole cards
    hero: Vec<Card>,
    /// fixed community cards, 0 to 5
    community: Vec<Card>,
    /// unseen cards, sampled fresh each trial
    deck: Deck,
    n_opponents: usize,
    /// has the simulation been stopped
    stopped: Arc<AtomicBool>,
}

impl Simulator {
    fn new<S: AsRef<str>, T: AsRef<str>>(
        hand: &[S],
        community: &[T],
        num_opponents: usize,
        num_trials: u64,
        cancel_token: Arc<AtomicBool>,
    ) -> Result<Simulator, SimulatorError> {
        if num_opponents == 0 {
            return Err(SimulatorError::NoOpponents);
        }
        if num_trials == 0 {
            return Err(SimulatorError::NoTrials);
        }
        if hand.len() != HOLE_CARDS {
            return Err(SimulatorError::InvalidHoleCards(hand.len()));
        }
        if community.len() > BOARD_CARDS {
            return Err(SimulatorError::TooManyBoardCards(community.len()));
        }

        let hero = parse_tokens(hand)?;
        let community = parse_tokens(community)?;
        let mut known = hero.clone();
        known.extend_from_slice(&community);
        if let Some(card) = find_duplicate(&known) {
            return Err(SimulatorError::DuplicateCard(card));
        }

        let deck = Deck::without(&known);
        let needed = HOLE_CARDS * num_opponents + (BOARD_CARDS - community.len());
        if needed > deck.len() {
            return Err(SimulatorError::InsufficientDeck {
                needed,
                available: deck.len(),
            });
        }

        Ok(Simulator {
            hero,
            community,
            deck,
            n_opponents: num_opponents,
            stopped: cancel_token,
        })
    }

    /// Fans trials out over one worker per RNG and reduces the win tallies.
    fn run(&self, num_trials: u64, rngs: Vec<SmallRng>) -> f64 {
        let n_threads = rngs.len() as u64;
        debug!(
            "simulating {} trials over {} threads: {} opponents, {} unseen cards",
            num_trials,
            n_threads,
            self.n_opponents,
            self.deck.len(),
        );

        let mut wins = 0u64;
        let mut completed = 0u64;
        let (tx, rx) = channel();

        thread::scope(|scope| {
            for (i, mut rng) in rngs.into_iter().enumerate() {
                let tx = tx.clone();
                // spread the remainder over the first workers
                let trials =
                    num_trials / n_threads + u64::from((i as u64) < num_trials % n_threads);
                scope.spawn(move || {
                    let _ = tx.send(self.run_trials(&mut rng, trials));
                });
            }
            drop(tx);
            for (batch_wins, batch_completed) in rx.iter() {
                wins += batch_wins;
                completed += batch_completed;
            }
        });

        if completed == 0 {
            // cancelled before any trial finished
            return 0.0;
        }
        wins as f64 / completed as f64 * 100.0
    }

    /// Runs one worker's share of trials, returning (wins, completed).
    fn run_trials<R: Rng>(&self, rng: &mut R, trials: u64) -> (u64, u64) {
        let mut wins = 0u64;
        let mut completed = 0u64;
        let mut drawn = self.deck.cards().to_vec();
        let board_fill = BOARD_CARDS - self.community.len();
        let opponent_cards = HOLE_CARDS * self.n_opponents;
        let mut eval_buf: Vec<Card> = Vec::with_capacity(HOLE_CARDS + BOARD_CARDS);

        for trial in 0..trials {
            if trial & CANCEL_CHECK_MASK == 0 && self.stopped.load(Ordering::SeqCst) {
                break;
            }
            self.deck.shuffle_into(&mut drawn, rng);
            let opponents = &drawn[..opponent_cards];
            let board = &drawn[opponent_cards..opponent_cards + board_fill];

            eval_buf.clear();
            eval_buf.extend_from_slice(&self.hero);
            eval_buf.extend_from_slice(&self.community);
            eval_buf.extend_from_slice(board);
            let hero_score = classify(&eval_buf);

            let beats_all = opponents.chunks_exact(HOLE_CARDS).all(|hole| {
                eval_buf.clear();
                eval_buf.extend_from_slice(hole);
                eval_buf.extend_from_slice(&self.community);
                eval_buf.extend_from_slice(board);
                hero_score > classify(&eval_buf)
            });
            if beats_all {
                wins += 1;
            }
            completed += 1;
        }
        (wins, completed)
    }
}

fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, ParseCardError> {
    tokens.iter().map(|token| token.as_ref().parse()).collect()
}
