//! Plain full-width minimax with uniform random tie-breaking.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tabula_core::GameState;

use crate::error::SearchError;
use crate::search::control::SearchControl;
use crate::search::negamax::{SearchContext, negamax, score_root};
use crate::search::{SearchResult, Strategy, finish, pick_best};

/// Explores the whole game tree below the root on every call.
#[derive(Debug, Clone)]
pub struct Minimax<R = StdRng> {
    rng: R,
}

impl Minimax<StdRng> {
    /// Tie-breaking seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Reproducible tie-breaking.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Minimax<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Minimax<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<G: GameState, R: Rng> Strategy<G> for Minimax<R> {
    fn search(
        &mut self,
        state: &G,
        control: &SearchControl,
    ) -> Result<SearchResult<G::Move>, SearchError> {
        let mut ctx = SearchContext::new(control);
        let scored = score_root(state, &mut ctx, |child, ctx| negamax(child, 1, None, ctx))?;
        let (best_move, score) = pick_best(&scored, &mut self.rng).ok_or(SearchError::GameOver)?;
        Ok(finish("minimax", best_move, score, ctx.stats))
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}
