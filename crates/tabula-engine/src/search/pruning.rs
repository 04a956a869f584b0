//! Alpha-beta minimax, optionally memoized ("overkill").

use tabula_core::{GameState, WIN};

use crate::error::SearchError;
use crate::search::control::SearchControl;
use crate::search::memo::{MemoEntry, MemoTable};
use crate::search::negamax::{INF, SearchContext, alpha_beta};
use crate::search::{SearchResult, Strategy, finish};

/// Minimax that skips siblings once they can no longer change the result.
///
/// Ties are not broken at random: the root returns the first move, in
/// generation order, that reaches the optimal score. The reported score is
/// always the exact optimum.
#[derive(Debug, Clone)]
pub struct PruningMinimax<G: GameState> {
    memo: Option<MemoTable<G::Key>>,
}

impl<G: GameState> PruningMinimax<G> {
    /// Plain alpha-beta without a memo table.
    pub fn new() -> Self {
        Self { memo: None }
    }

    /// Alpha-beta backed by a bound-tagged memo table kept across searches.
    pub fn with_memo() -> Self {
        Self {
            memo: Some(MemoTable::new()),
        }
    }

    /// The memo table, if this instance keeps one.
    pub fn memo(&self) -> Option<&MemoTable<G::Key>> {
        self.memo.as_ref()
    }
}

impl<G: GameState> Default for PruningMinimax<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GameState> Strategy<G> for PruningMinimax<G> {
    fn search(
        &mut self,
        state: &G,
        control: &SearchControl,
    ) -> Result<SearchResult<G::Move>, SearchError> {
        let moves = state.possible_next_moves();
        if moves.is_empty() {
            return Err(SearchError::GameOver);
        }

        let mut ctx = SearchContext::new(control);
        ctx.enter()?;
        ctx.stats.expansions += 1;

        // No score is below LOSE, so a child failing low against the
        // (LOSE, -alpha) window still reports its exact value.
        let mut alpha = -INF;
        let mut best = None;

        for mv in moves {
            let child = state.apply_move(mv)?;
            let score = -alpha_beta(&child, -WIN, -alpha, self.memo.as_mut(), &mut ctx)?;
            if score > alpha {
                alpha = score;
                best = Some(mv);
            }
            if alpha >= WIN {
                ctx.stats.cutoffs += 1;
                break;
            }
        }

        let best_move = best.ok_or(SearchError::GameOver)?;
        let score = alpha;

        if let Some(memo) = self.memo.as_mut() {
            memo.store(state.key(), MemoEntry::exact(score));
        }

        Ok(finish(self.label(), best_move, score, ctx.stats))
    }

    fn name(&self) -> &'static str {
        self.label()
    }
}

impl<G: GameState> PruningMinimax<G> {
    fn label(&self) -> &'static str {
        if self.memo.is_some() { "overkill" } else { "prune" }
    }
}
