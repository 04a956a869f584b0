//! Depth-limited minimax that falls back on the rough outcome estimate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tabula_core::GameState;

use crate::error::{ConfigError, SearchError};
use crate::search::control::SearchControl;
use crate::search::negamax::{SearchContext, negamax, score_root};
use crate::search::{SearchResult, Strategy, finish, pick_best};

/// Minimax that expands at most `max_depth` plies below the root.
///
/// The root is ply 0. States down to ply `max_depth` are expanded, and a
/// non-terminal state one ply further is scored with
/// [`GameState::rough_outcome`]. Finished games are always scored exactly.
#[derive(Debug, Clone)]
pub struct MyopicMinimax<R = StdRng> {
    max_depth: u32,
    rng: R,
}

impl MyopicMinimax<StdRng> {
    /// Tie-breaking seeded from the operating system.
    pub fn new(max_depth: u32) -> Result<Self, ConfigError> {
        Self::with_rng(max_depth, StdRng::from_os_rng())
    }

    /// Reproducible tie-breaking.
    pub fn seeded(max_depth: u32, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(max_depth, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MyopicMinimax<R> {
    /// Fails with [`ConfigError::ZeroDepth`] unless `max_depth >= 1`.
    pub fn with_rng(max_depth: u32, rng: R) -> Result<Self, ConfigError> {
        if max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(Self { max_depth, rng })
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

impl<G: GameState, R: Rng> Strategy<G> for MyopicMinimax<R> {
    fn search(
        &mut self,
        state: &G,
        control: &SearchControl,
    ) -> Result<SearchResult<G::Move>, SearchError> {
        let limit = Some(self.max_depth);
        let mut ctx = SearchContext::new(control);
        let scored = score_root(state, &mut ctx, |child, ctx| negamax(child, 1, limit, ctx))?;
        let (best_move, score) = pick_best(&scored, &mut self.rng).ok_or(SearchError::GameOver)?;
        Ok(finish("myopic", best_move, score, ctx.stats))
    }

    fn name(&self) -> &'static str {
        "myopic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::{Player, SubtractMove, SubtractSquare, TicTacToe, WIN};

    #[test]
    fn zero_depth_is_rejected() {
        assert_eq!(MyopicMinimax::seeded(0, 1).unwrap_err(), ConfigError::ZeroDepth);
        assert_eq!(MyopicMinimax::seeded(3, 1).unwrap().max_depth(), 3);
    }

    #[test]
    fn depth_one_expands_every_child() {
        let state = TicTacToe::new(Player::P1);
        let result = MyopicMinimax::seeded(1, 5)
            .unwrap()
            .search(&state, &SearchControl::unbounded())
            .unwrap();
        assert_eq!(result.stats.expansions, 1 + 9);
        assert_eq!(result.stats.estimates, 9 * 8);
    }

    #[test]
    fn depth_one_sees_an_immediate_win() {
        // 27 - 25 leaves 2, whose only reply leaves the square 1.
        let state = SubtractSquare::new(Player::P1, 27);
        let mut strategy = MyopicMinimax::seeded(1, 8).unwrap();
        assert_eq!(strategy.suggest_move(&state), Ok(SubtractMove(25)));
    }

    #[test]
    fn terminal_children_are_scored_exactly() {
        let state = SubtractSquare::new(Player::P2, 25);
        let result = MyopicMinimax::seeded(1, 0)
            .unwrap()
            .search(&state, &SearchControl::unbounded())
            .unwrap();
        assert_eq!(result.best_move, SubtractMove(25));
        assert_eq!(result.score, WIN);
    }
}
