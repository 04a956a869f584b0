//! Command-line argument parsing.

use std::time::Duration;

use tabula_core::Player;
use tabula_engine::{StrategyConfig, StrategyKind};

use crate::error::MatchError;
use crate::runner::MatchLimits;

/// Which game to play and on what board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSpec {
    SubtractSquare { total: u32 },
    TicTacToe { size: usize },
    Tippy { size: usize },
}

/// Everything needed to set up a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchParams {
    pub game: GameSpec,
    /// Strategy playing as P1.
    pub p1: StrategyKind,
    /// Strategy playing as P2.
    pub p2: StrategyKind,
    /// Who moves first from the starting position.
    pub first: Player,
    /// Tie-breaking seed; P2 uses `seed + 1`.
    pub seed: Option<u64>,
    /// Time allowed per move.
    pub movetime: Option<Duration>,
    /// Node budget per move.
    pub nodes: Option<u64>,
    /// Start from this notation instead of the empty position.
    pub position: Option<String>,
}

impl MatchParams {
    /// Default settings for `game`: overkill against random, P1 first.
    pub fn new(game: GameSpec) -> Self {
        Self {
            game,
            p1: StrategyKind::Overkill,
            p2: StrategyKind::Random,
            first: Player::P1,
            seed: None,
            movetime: None,
            nodes: None,
            position: None,
        }
    }

    /// Strategy configuration for `player`.
    pub fn strategy(&self, player: Player) -> StrategyConfig {
        let kind = match player {
            Player::P1 => self.p1,
            Player::P2 => self.p2,
        };
        let config = StrategyConfig::new(kind);
        match self.seed {
            Some(seed) => config.with_seed(seed.wrapping_add(player.index() as u64)),
            None => config,
        }
    }

    /// Per-move search limits.
    pub fn limits(&self) -> MatchLimits {
        MatchLimits {
            movetime: self.movetime,
            nodes: self.nodes,
        }
    }
}

/// Parse `<game>[:<param>] [--p1 s] [--p2 s] [--first p1|p2] [--seed n]
/// [--movetime ms] [--nodes n] [--position notation]`.
///
/// The position notation contains a space, so `--position` consumes two
/// tokens.
pub fn parse_args(tokens: &[&str]) -> Result<MatchParams, MatchError> {
    let Some((game, rest)) = tokens.split_first() else {
        return Err(MatchError::MissingGame);
    };
    let mut params = MatchParams::new(parse_game(game)?);

    let mut i = 0;
    while i < rest.len() {
        match rest[i] {
            "--p1" => {
                params.p1 = value(rest.get(i + 1), "--p1")?.parse()?;
                i += 2;
            }
            "--p2" => {
                params.p2 = value(rest.get(i + 1), "--p2")?.parse()?;
                i += 2;
            }
            "--first" => {
                params.first = parse_value(rest.get(i + 1), "--first")?;
                i += 2;
            }
            "--seed" => {
                params.seed = Some(parse_value(rest.get(i + 1), "--seed")?);
                i += 2;
            }
            "--movetime" => {
                let ms: u64 = parse_value(rest.get(i + 1), "--movetime")?;
                params.movetime = Some(Duration::from_millis(ms));
                i += 2;
            }
            "--nodes" => {
                params.nodes = Some(parse_value(rest.get(i + 1), "--nodes")?);
                i += 2;
            }
            "--position" => {
                let board = value(rest.get(i + 1), "--position")?;
                let next = value(rest.get(i + 2), "--position")?;
                params.position = Some(format!("{board} {next}"));
                i += 3;
            }
            other => {
                return Err(MatchError::UnexpectedArgument {
                    arg: other.to_string(),
                });
            }
        }
    }

    Ok(params)
}

/// Parse `subtract-square:<total>`, `tictactoe[:n]` or `tippy[:n]`.
fn parse_game(token: &str) -> Result<GameSpec, MatchError> {
    let (name, param) = match token.split_once(':') {
        Some((name, param)) => (name, Some(param)),
        None => (token, None),
    };

    match name {
        "subtract-square" => {
            let total = param.ok_or_else(|| MatchError::MissingValue {
                flag: "subtract-square total".to_string(),
            })?;
            Ok(GameSpec::SubtractSquare {
                total: parse_value(Some(&total), "subtract-square total")?,
            })
        }
        "tictactoe" => Ok(GameSpec::TicTacToe {
            size: board_size(param)?,
        }),
        "tippy" => Ok(GameSpec::Tippy {
            size: board_size(param)?,
        }),
        _ => Err(MatchError::UnknownGame {
            name: name.to_string(),
        }),
    }
}

fn board_size(param: Option<&str>) -> Result<usize, MatchError> {
    match param {
        Some(size) => parse_value(Some(&size), "board size"),
        None => Ok(3),
    }
}

fn value<'a>(token: Option<&&'a str>, flag: &str) -> Result<&'a str, MatchError> {
    token.copied().ok_or_else(|| MatchError::MissingValue {
        flag: flag.to_string(),
    })
}

fn parse_value<T: std::str::FromStr>(token: Option<&&str>, flag: &str) -> Result<T, MatchError> {
    let raw = value(token, flag)?;
    raw.parse().map_err(|_| MatchError::InvalidValue {
        flag: flag.to_string(),
        value: raw.to_string(),
    })
}
