//! Uniformly random legal moves.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tabula_core::GameState;

use crate::error::SearchError;
use crate::search::control::SearchControl;
use crate::search::negamax::SearchContext;
use crate::search::{SearchResult, Strategy, finish};

/// Picks any legal move with equal probability. Reports the position's
/// rough outcome as its score.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = StdRng> {
    rng: R,
}

impl RandomStrategy<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomStrategy<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomStrategy<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<G: GameState, R: Rng> Strategy<G> for RandomStrategy<R> {
    fn search(
        &mut self,
        state: &G,
        control: &SearchControl,
    ) -> Result<SearchResult<G::Move>, SearchError> {
        let moves = state.possible_next_moves();
        let mut ctx = SearchContext::new(control);
        ctx.enter()?;
        let best_move = *moves.choose(&mut self.rng).ok_or(SearchError::GameOver)?;
        Ok(finish("random", best_move, state.rough_outcome(), ctx.stats))
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
