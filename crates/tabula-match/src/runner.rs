//! Plays a game between two strategies.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use tracing::{debug, info, warn};

use tabula_core::{GameState, Player, SubtractSquare, TicTacToe, Tippy};
use tabula_engine::{SearchControl, Strategy};

use crate::command::{GameSpec, MatchParams};
use crate::error::MatchError;

/// Search limits applied to every move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchLimits {
    pub movetime: Option<Duration>,
    pub nodes: Option<u64>,
}

impl MatchLimits {
    /// Fresh control for one move.
    fn control(&self) -> SearchControl {
        let stopped = Arc::new(AtomicBool::new(false));
        let control = match self.movetime {
            Some(limit) => SearchControl::new_timed(stopped, limit),
            None => SearchControl::new_infinite(stopped),
        };
        match self.nodes {
            Some(nodes) => control.with_node_limit(nodes),
            None => control,
        }
    }
}

/// A finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord<M> {
    /// Moves in the order played, with the player who made each.
    pub moves: Vec<(Player, M)>,
    /// Notation of the final position.
    pub final_notation: String,
    /// `None` for a draw.
    pub winner: Option<Player>,
}

impl<M> MatchRecord<M> {
    /// Convert every recorded move.
    pub fn map_moves<N>(self, mut f: impl FnMut(M) -> N) -> MatchRecord<N> {
        MatchRecord {
            moves: self
                .moves
                .into_iter()
                .map(|(player, mv)| (player, f(mv)))
                .collect(),
            final_notation: self.final_notation,
            winner: self.winner,
        }
    }
}

/// Alternate `p1` and `p2` from `state` until the game is over.
///
/// Each suggested move is checked against the legal-move set before it is
/// applied.
pub fn play<G>(
    mut state: G,
    p1: &mut dyn Strategy<G>,
    p2: &mut dyn Strategy<G>,
    limits: &MatchLimits,
) -> Result<MatchRecord<G::Move>, MatchError>
where
    G: GameState + fmt::Display,
{
    let mut moves = Vec::new();

    loop {
        let legal = state.possible_next_moves();
        if legal.is_empty() {
            break;
        }

        let player = state.next_player();
        let control = limits.control();
        let (result, name) = match player {
            Player::P1 => (p1.search(&state, &control)?, p1.name()),
            Player::P2 => (p2.search(&state, &control)?, p2.name()),
        };

        let mv = result.best_move;
        if !legal.contains(&mv) {
            warn!(strategy = name, mv = %mv, position = %state, "illegal suggestion");
            return Err(MatchError::IllegalSuggestion {
                strategy: name,
                mv: mv.to_string(),
                position: state.to_string(),
            });
        }

        debug!(
            ply = moves.len() + 1,
            player = %player,
            mv = %mv,
            score = result.score,
            nodes = result.stats.nodes,
            "move played"
        );
        state = state.apply_move(mv)?;
        moves.push((player, mv));
    }

    let winner = Player::ALL.into_iter().find(|&p| state.winner(p));
    info!(plies = moves.len(), final_position = %state, winner = ?winner, "match finished");

    Ok(MatchRecord {
        moves,
        final_notation: state.to_string(),
        winner,
    })
}

/// Set up the game described by `params` and play it out.
pub fn run(params: &MatchParams) -> Result<MatchRecord<String>, MatchError> {
    info!(
        game = ?params.game,
        p1 = %params.p1,
        p2 = %params.p2,
        "match started"
    );

    match params.game {
        GameSpec::SubtractSquare { total } => {
            let state = match &params.position {
                Some(notation) => notation.parse()?,
                None => SubtractSquare::new(params.first, total),
            };
            run_game(state, params)
        }
        GameSpec::TicTacToe { size } => {
            let state = match &params.position {
                Some(notation) => notation.parse()?,
                None => TicTacToe::with_size(params.first, size)?,
            };
            run_game(state, params)
        }
        GameSpec::Tippy { size } => {
            let state = match &params.position {
                Some(notation) => notation.parse()?,
                None => Tippy::new(params.first, size)?,
            };
            run_game(state, params)
        }
    }
}

fn run_game<G>(state: G, params: &MatchParams) -> Result<MatchRecord<String>, MatchError>
where
    G: GameState + fmt::Display + 'static,
{
    let mut p1 = params.strategy(Player::P1).build::<G>()?;
    let mut p2 = params.strategy(Player::P2).build::<G>()?;
    let record = play(state, p1.as_mut(), p2.as_mut(), &params.limits())?;
    Ok(record.map_moves(|mv| mv.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::SubtractMove;
    use tabula_engine::{Minimax, PruningMinimax, RandomStrategy, SearchError};

    #[test]
    fn perfect_play_draws_tic_tac_toe() {
        let mut p1 = PruningMinimax::<TicTacToe>::with_memo();
        let mut p2 = PruningMinimax::<TicTacToe>::with_memo();
        let record = play(
            TicTacToe::new(Player::P1),
            &mut p1,
            &mut p2,
            &MatchLimits::default(),
        )
        .unwrap();
        assert_eq!(record.winner, None);
        assert_eq!(record.moves.len(), 9);
    }

    #[test]
    fn winner_of_subtract_square() {
        let mut p1 = Minimax::seeded(1);
        let mut p2 = RandomStrategy::seeded(1);
        let record = play(
            SubtractSquare::new(Player::P1, 25),
            &mut p1,
            &mut p2,
            &MatchLimits::default(),
        )
        .unwrap();
        assert_eq!(record.moves, vec![(Player::P1, SubtractMove(25))]);
        assert_eq!(record.winner, Some(Player::P1));
        assert_eq!(record.final_notation, "0 p2");
    }

    #[test]
    fn players_alternate() {
        let mut p1 = RandomStrategy::seeded(3);
        let mut p2 = RandomStrategy::seeded(4);
        let record = play(
            Tippy::new(Player::P2, 3).unwrap(),
            &mut p1,
            &mut p2,
            &MatchLimits::default(),
        )
        .unwrap();
        for (i, (player, _)) in record.moves.iter().enumerate() {
            let expected = if i % 2 == 0 { Player::P2 } else { Player::P1 };
            assert_eq!(*player, expected);
        }
    }

    #[test]
    fn node_limit_surfaces_as_search_error() {
        let mut p1 = Minimax::seeded(0);
        let mut p2 = Minimax::seeded(0);
        let limits = MatchLimits {
            movetime: None,
            nodes: Some(100),
        };
        let err = play(TicTacToe::new(Player::P1), &mut p1, &mut p2, &limits).unwrap_err();
        assert!(matches!(err, MatchError::Search(SearchError::Stopped)));
    }

    /// Always proposes taking one more than the total.
    struct Cheater;

    impl Strategy<SubtractSquare> for Cheater {
        fn search(
            &mut self,
            state: &SubtractSquare,
            _control: &SearchControl,
        ) -> Result<tabula_engine::SearchResult<SubtractMove>, SearchError> {
            Ok(tabula_engine::SearchResult {
                best_move: SubtractMove(state.total() + 1),
                score: 1.0,
                stats: Default::default(),
            })
        }

        fn name(&self) -> &'static str {
            "cheater"
        }
    }

    #[test]
    fn illegal_suggestion_is_rejected() {
        let mut p1 = Cheater;
        let mut p2 = Minimax::seeded(0);
        let err = play(
            SubtractSquare::new(Player::P1, 3),
            &mut p1,
            &mut p2,
            &MatchLimits::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MatchError::IllegalSuggestion {
                strategy: "cheater",
                ..
            }
        ));
    }

    #[test]
    fn run_from_parsed_position() {
        let params = crate::parse_args(&[
            "tictactoe",
            "--position",
            "xx./oo./...",
            "p1",
            "--p1",
            "minimax",
            "--seed",
            "5",
        ])
        .unwrap();
        let record = run(&params).unwrap();
        assert_eq!(record.moves[0], (Player::P1, "(2, 0)".to_string()));
        assert_eq!(record.winner, Some(Player::P1));
    }
}
