//! End-to-end move choices on small known positions.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use tabula_core::{
    CellMove, GameState, LOSE, MoveError, Outcome, Player, SubtractMove, SubtractSquare,
    TicTacToe, Tippy, WIN,
};
use tabula_engine::{
    MemoizedMinimax, Minimax, MyopicMinimax, PruningMinimax, SearchControl, SearchError, Strategy,
};

#[test]
fn subtract_square_25_takes_everything() {
    let state = SubtractSquare::new(Player::P1, 25);
    for seed in 0..5 {
        assert_eq!(Minimax::seeded(seed).suggest_move(&state), Ok(SubtractMove(25)));
    }
    assert_eq!(
        MemoizedMinimax::<SubtractSquare>::seeded(0).suggest_move(&state),
        Ok(SubtractMove(25))
    );
    assert_eq!(
        PruningMinimax::<SubtractSquare>::new().suggest_move(&state),
        Ok(SubtractMove(25))
    );
}

#[test]
fn subtract_square_1_has_one_move() {
    let state = SubtractSquare::new(Player::P2, 1);
    assert_eq!(state.possible_next_moves(), vec![SubtractMove(1)]);
    let result = Minimax::seeded(0)
        .search(&state, &SearchControl::unbounded())
        .unwrap();
    assert_eq!(result.best_move, SubtractMove(1));
    assert_eq!(result.score, WIN);
}

#[test]
fn unique_winning_subtractions() {
    for (total, amount) in [(27, 25), (28, 16), (29, 9), (33, 16), (41, 36)] {
        let state = SubtractSquare::new(Player::P1, total);
        let mv = Minimax::seeded(u64::from(total)).suggest_move(&state);
        assert_eq!(mv, Ok(SubtractMove(amount)), "total {total}");
    }
}

#[test]
fn tippy_opens_in_the_centre() {
    let state = Tippy::new(Player::P1, 3).unwrap();
    let result = Minimax::seeded(17)
        .search(&state, &SearchControl::unbounded())
        .unwrap();
    assert_eq!(result.best_move, CellMove::new(1, 1));
    assert_eq!(result.score, WIN);
}

#[test]
fn completed_row_loses_for_next_player() {
    let state = TicTacToe::new(Player::P1);
    let moves = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)];
    let state = moves.iter().fold(state, |s, &(x, y)| {
        s.apply_move(CellMove::new(x, y)).unwrap()
    });
    assert!(state.is_over());
    assert_eq!(state.next_player(), Player::P2);
    assert!(state.winner(Player::P1));
    assert_eq!(state.outcome(), Outcome::Lose);
    assert_eq!(state.outcome().score(), LOSE);
    assert_eq!(
        Minimax::seeded(0).suggest_move(&state),
        Err(SearchError::GameOver)
    );
}

#[test]
fn occupied_cells_are_never_offered() {
    let state: TicTacToe = "xo./.x./... p2".parse().unwrap();
    let moves = state.possible_next_moves();
    assert_eq!(moves.len(), 6);
    for taken in [CellMove::new(0, 0), CellMove::new(1, 0), CellMove::new(1, 1)] {
        assert!(!moves.contains(&taken));
        assert_eq!(
            state.apply_move(taken),
            Err(MoveError::Occupied {
                x: taken.coord.x,
                y: taken.coord.y
            })
        );
    }
    assert!(matches!(
        state.apply_move(CellMove::new(3, 1)),
        Err(MoveError::OutOfBounds { .. })
    ));
}

#[test]
fn stop_flag_aborts_search() {
    let flag = Arc::new(AtomicBool::new(true));
    let control = SearchControl::new_infinite(flag);
    let state = TicTacToe::new(Player::P1);
    assert_eq!(
        Minimax::seeded(0).search(&state, &control),
        Err(SearchError::Stopped)
    );
}

#[test]
fn node_limit_aborts_search() {
    let state = TicTacToe::new(Player::P1);
    let control = SearchControl::unbounded().with_node_limit(500);
    let result = MemoizedMinimax::<TicTacToe>::seeded(0).search(&state, &control);
    assert_eq!(result, Err(SearchError::Stopped));
}

#[test]
fn expired_clock_aborts_search() {
    let state = TicTacToe::new(Player::P1);
    let control = SearchControl::new_timed(Arc::new(AtomicBool::new(false)), Duration::ZERO);
    let mut strategy = MyopicMinimax::seeded(9, 0).unwrap();
    assert_eq!(strategy.search(&state, &control), Err(SearchError::Stopped));
}

#[test]
fn stopped_memo_search_still_answers_later() {
    let state = TicTacToe::new(Player::P1);
    let mut strategy = MemoizedMinimax::<TicTacToe>::seeded(3);
    let limited = SearchControl::unbounded().with_node_limit(2_000);
    assert!(strategy.search(&state, &limited).is_err());

    let result = strategy.search(&state, &SearchControl::unbounded()).unwrap();
    assert_eq!(result.score, 0.0);
}
