//! Negamax tree walks shared by the minimax strategies.
//!
//! Every walk scores a state from the perspective of its own next player:
//! `score(state) = max over children of -score(child)`, with finished games
//! scored by [`GameState::outcome`].

use tabula_core::{GameState, Score};

use crate::error::SearchError;
use crate::search::SearchStats;
use crate::search::control::SearchControl;
use crate::search::memo::{Bound, MemoEntry, MemoTable};

/// Score beyond any reachable value.
pub const INF: Score = Score::INFINITY;

/// Per-search mutable state threaded through the recursion.
pub(crate) struct SearchContext<'a> {
    pub(crate) stats: SearchStats,
    control: &'a SearchControl,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(control: &'a SearchControl) -> Self {
        Self {
            stats: SearchStats::default(),
            control,
        }
    }

    /// Count a node and check the stop condition.
    #[inline]
    pub(crate) fn enter(&mut self) -> Result<(), SearchError> {
        self.stats.nodes += 1;
        if self.control.should_stop(self.stats.nodes) {
            return Err(SearchError::Stopped);
        }
        Ok(())
    }
}

/// Expand the root and score each legal move from the mover's perspective.
///
/// `evaluate` scores a child from the child's own perspective. Moves come
/// back in generation order.
pub(crate) fn score_root<G, F>(
    state: &G,
    ctx: &mut SearchContext<'_>,
    mut evaluate: F,
) -> Result<Vec<(G::Move, Score)>, SearchError>
where
    G: GameState,
    F: FnMut(&G, &mut SearchContext<'_>) -> Result<Score, SearchError>,
{
    let moves = state.possible_next_moves();
    if moves.is_empty() {
        return Err(SearchError::GameOver);
    }
    ctx.enter()?;
    ctx.stats.expansions += 1;

    let mut scored = Vec::with_capacity(moves.len());
    for mv in moves {
        let child = state.apply_move(mv)?;
        scored.push((mv, -evaluate(&child, ctx)?));
    }
    Ok(scored)
}

/// Full-width negamax. With `limit`, states down to ply `limit` are expanded
/// and non-terminal states beyond it return [`GameState::rough_outcome`].
pub(crate) fn negamax<G: GameState>(
    state: &G,
    ply: u32,
    limit: Option<u32>,
    ctx: &mut SearchContext<'_>,
) -> Result<Score, SearchError> {
    ctx.enter()?;

    let moves = state.possible_next_moves();
    if moves.is_empty() {
        return Ok(state.outcome().score());
    }

    if let Some(limit) = limit
        && ply > limit
    {
        ctx.stats.estimates += 1;
        return Ok(state.rough_outcome());
    }

    ctx.stats.expansions += 1;
    let mut best = -INF;
    for mv in moves {
        let child = state.apply_move(mv)?;
        best = best.max(-negamax(&child, ply + 1, limit, ctx)?);
    }
    Ok(best)
}

/// Full-width negamax that caches the exact score of every state it finishes.
pub(crate) fn negamax_memo<G: GameState>(
    state: &G,
    memo: &mut MemoTable<G::Key>,
    ctx: &mut SearchContext<'_>,
) -> Result<Score, SearchError> {
    ctx.enter()?;

    let key = state.key();
    if let Some(entry) = memo.probe(&key) {
        ctx.stats.memo_hits += 1;
        return Ok(entry.score);
    }

    let moves = state.possible_next_moves();
    let score = if moves.is_empty() {
        state.outcome().score()
    } else {
        ctx.stats.expansions += 1;
        let mut best = -INF;
        for mv in moves {
            let child = state.apply_move(mv)?;
            best = best.max(-negamax_memo(&child, memo, ctx)?);
        }
        best
    };

    memo.store(key, MemoEntry::exact(score));
    Ok(score)
}

/// Fail-soft alpha-beta negamax, optionally backed by a bound-tagged memo.
///
/// The returned score is exact when it lies strictly inside `(alpha, beta)`,
/// an upper bound when it is `<= alpha` and a lower bound when `>= beta`.
pub(crate) fn alpha_beta<G: GameState>(
    state: &G,
    mut alpha: Score,
    beta: Score,
    mut memo: Option<&mut MemoTable<G::Key>>,
    ctx: &mut SearchContext<'_>,
) -> Result<Score, SearchError> {
    ctx.enter()?;

    let key = memo.as_ref().map(|_| state.key());
    if let (Some(table), Some(key)) = (memo.as_deref_mut(), key.as_ref())
        && let Some(entry) = table.probe(key)
        && entry.cuts(alpha, beta)
    {
        ctx.stats.memo_hits += 1;
        return Ok(entry.score);
    }

    let moves = state.possible_next_moves();
    if moves.is_empty() {
        let score = state.outcome().score();
        if let (Some(table), Some(key)) = (memo, key) {
            table.store(key, MemoEntry::exact(score));
        }
        return Ok(score);
    }

    ctx.stats.expansions += 1;
    let original_alpha = alpha;
    let mut best = -INF;

    for mv in moves {
        let child = state.apply_move(mv)?;
        let score = -alpha_beta(&child, -beta, -alpha, memo.as_deref_mut(), ctx)?;

        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            ctx.stats.cutoffs += 1;
            break;
        }
    }

    if let (Some(table), Some(key)) = (memo, key) {
        let bound = if best <= original_alpha {
            Bound::Upper
        } else if best >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        table.store(key, MemoEntry { score: best, bound });
    }

    Ok(best)
}
