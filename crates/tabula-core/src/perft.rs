//! Game-tree counting for move generation correctness verification.

use crate::error::MoveError;
use crate::game::GameState;

/// Count the positions exactly `depth` plies below `state`.
///
/// Depth 0 returns 1 (the current position). Games that end earlier
/// contribute nothing at deeper plies. A generated move that fails to apply
/// is a move-generation bug and is returned as the error.
pub fn perft<G: GameState>(state: &G, depth: usize) -> Result<u64, MoveError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = state.possible_next_moves();

    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        let child = state.apply_move(mv)?;
        nodes += perft(&child, depth - 1)?;
    }
    Ok(nodes)
}

/// Count every position in the full game tree, the root included.
pub fn count_nodes<G: GameState>(state: &G) -> Result<u64, MoveError> {
    let mut nodes = 1u64;
    for mv in state.possible_next_moves() {
        nodes += count_nodes(&state.apply_move(mv)?)?;
    }
    Ok(nodes)
}

/// Count the finished games reachable from `state`.
pub fn count_games<G: GameState>(state: &G) -> Result<u64, MoveError> {
    let moves = state.possible_next_moves();
    if moves.is_empty() {
        return Ok(1);
    }
    let mut games = 0u64;
    for mv in moves {
        games += count_games(&state.apply_move(mv)?)?;
    }
    Ok(games)
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs in move-generation order.
pub fn divide<G: GameState>(state: &G, depth: usize) -> Result<Vec<(String, u64)>, MoveError> {
    let mut counts = Vec::new();
    for mv in state.possible_next_moves() {
        let child = state.apply_move(mv)?;
        let count = if depth <= 1 { 1 } else { perft(&child, depth - 1)? };
        counts.push((mv.to_string(), count));
    }
    Ok(counts)
}
