//! Winning footprints on a grid: straight lines for Tic-Tac-Toe, tetromino
//! "tippies" for Tippy.
//!
//! A footprint is a set of cells; whoever fills all of them with their own
//! mark wins. Footprints are precomputed once per board size together with a
//! per-cell index, so checking the move just played only touches the
//! footprints that run through its cell.

use crate::grid::{Grid, Mark};
use crate::outcome::{DRAW, LOSE, Score, WIN};
use crate::player::Player;

/// The four orientations of the S/Z tetromino, as non-negative offsets.
const TIPPY_SHAPES: [[(u8, u8); 4]; 4] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(1, 0), (1, 1), (0, 1), (0, 2)],
];

/// Precomputed footprints for one board size.
#[derive(Debug)]
pub(crate) struct Patterns {
    /// Row-major cell indices of each footprint.
    footprints: Vec<Vec<usize>>,
    /// Indices into `footprints` of every footprint containing a cell.
    by_cell: Vec<Vec<usize>>,
}

impl Patterns {
    /// All rows, columns, and both diagonals of a `size x size` board.
    pub(crate) fn lines(size: u8) -> Patterns {
        let n = size;
        let horizontal: Vec<(u8, u8)> = (0..n).map(|i| (i, 0)).collect();
        let vertical: Vec<(u8, u8)> = (0..n).map(|i| (0, i)).collect();
        let diagonal: Vec<(u8, u8)> = (0..n).map(|i| (i, i)).collect();
        let anti_diagonal: Vec<(u8, u8)> = (0..n).map(|i| (n - 1 - i, i)).collect();
        Self::from_shapes(size, &[&horizontal, &vertical, &diagonal, &anti_diagonal])
    }

    /// Every placement of every tippy orientation that fits on the board.
    pub(crate) fn tippies(size: u8) -> Patterns {
        let shapes: Vec<&[(u8, u8)]> = TIPPY_SHAPES.iter().map(|s| s.as_slice()).collect();
        Self::from_shapes(size, &shapes)
    }

    /// Translate each shape to every anchor where it stays on the board.
    fn from_shapes(size: u8, shapes: &[&[(u8, u8)]]) -> Patterns {
        let n = size as usize;
        let mut footprints: Vec<Vec<usize>> = Vec::new();

        for shape in shapes {
            let width = shape.iter().map(|&(dx, _)| dx as usize).max().unwrap_or(0) + 1;
            let height = shape.iter().map(|&(_, dy)| dy as usize).max().unwrap_or(0) + 1;
            if width > n || height > n {
                continue;
            }
            for y in 0..=(n - height) {
                for x in 0..=(n - width) {
                    let cells = shape
                        .iter()
                        .map(|&(dx, dy)| (y + dy as usize) * n + x + dx as usize)
                        .collect();
                    footprints.push(cells);
                }
            }
        }

        let mut by_cell = vec![Vec::new(); n * n];
        for (i, footprint) in footprints.iter().enumerate() {
            for &cell in footprint {
                by_cell[cell].push(i);
            }
        }

        Patterns {
            footprints,
            by_cell,
        }
    }

    /// Number of footprints.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.footprints.len()
    }

    /// Whether the mark at `index` completes a footprint running through it.
    pub(crate) fn completed_through(&self, grid: &Grid, index: usize) -> bool {
        let Some(mark) = grid.at(index) else {
            return false;
        };
        self.by_cell[index].iter().any(|&f| {
            self.footprints[f]
                .iter()
                .all(|&cell| grid.at(cell) == Some(mark))
        })
    }

    /// Whether any footprint on the board is filled by a single mark.
    pub(crate) fn any_completed(&self, grid: &Grid) -> bool {
        self.footprints.iter().any(|footprint| {
            let first = grid.at(footprint[0]);
            first.is_some() && footprint.iter().all(|&cell| grid.at(cell) == first)
        })
    }

    /// Whether some footprint is filled entirely with `mark`.
    pub(crate) fn completed_by(&self, grid: &Grid, mark: Mark) -> bool {
        self.footprints
            .iter()
            .any(|footprint| footprint.iter().all(|&cell| grid.at(cell) == Some(mark)))
    }

    /// Rough outcome for `mover` without searching.
    ///
    /// - WIN if the mover can complete a footprint with this move.
    /// - LOSE if the opponent threatens two different completing cells.
    /// - Otherwise the balance of unblocked footprints holding at least two
    ///   marks of one side, scaled into `[-0.5, 0.5]`.
    pub(crate) fn estimate(&self, grid: &Grid, mover: Player) -> Score {
        let mine = Mark::of(mover);
        let mut threats: Vec<usize> = Vec::new();
        let mut my_open = 0u32;
        let mut their_open = 0u32;

        for footprint in &self.footprints {
            let mut own = 0;
            let mut other = 0;
            let mut gap = None;
            for &cell in footprint {
                match grid.at(cell) {
                    Some(mark) if mark == mine => own += 1,
                    Some(_) => other += 1,
                    None => gap = Some(cell),
                }
            }
            if own > 0 && other > 0 {
                continue;
            }

            let needed = footprint.len() - 1;
            if other == 0 && own == needed {
                return WIN;
            }
            if own == 0 && other == needed {
                if let Some(cell) = gap
                    && !threats.contains(&cell)
                {
                    threats.push(cell);
                }
            }
            if own >= 2 {
                my_open += 1;
            } else if other >= 2 {
                their_open += 1;
            }
        }

        if threats.len() >= 2 {
            return LOSE;
        }
        let total = my_open + their_open;
        if total == 0 {
            return DRAW;
        }
        (my_open as Score - their_open as Score) / (2.0 * total as Score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coord;

    fn board(size: usize, marks: &[(u8, u8, Mark)]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for &(x, y, mark) in marks {
            grid = grid.place(Coord::new(x, y), mark).unwrap();
        }
        grid
    }

    #[test]
    fn line_counts() {
        assert_eq!(Patterns::lines(3).len(), 8);
        assert_eq!(Patterns::lines(4).len(), 10);
    }

    #[test]
    fn tippy_counts() {
        // Each orientation spans 3x2 or 2x3: 2 anchors on a 3x3 board, 6 on 4x4.
        assert_eq!(Patterns::tippies(3).len(), 4 * 2);
        assert_eq!(Patterns::tippies(4).len(), 4 * 6);
    }

    #[test]
    fn completed_through_last_cell() {
        let patterns = Patterns::lines(3);
        let grid = board(
            3,
            &[(0, 0, Mark::Cross), (1, 1, Mark::Cross), (2, 2, Mark::Cross)],
        );
        assert!(patterns.completed_through(&grid, grid.index(Coord::new(2, 2))));
        assert!(!patterns.completed_through(&grid, grid.index(Coord::new(1, 0))));
        assert!(patterns.any_completed(&grid));
    }

    #[test]
    fn tippy_in_every_orientation() {
        let patterns = Patterns::tippies(3);
        let shapes: [[(u8, u8); 4]; 4] = [
            [(0, 0), (1, 0), (1, 1), (2, 1)],
            [(1, 0), (2, 0), (0, 1), (1, 1)],
            [(0, 0), (0, 1), (1, 1), (1, 2)],
            [(1, 0), (1, 1), (0, 1), (0, 2)],
        ];
        for shape in shapes {
            let marks: Vec<(u8, u8, Mark)> =
                shape.iter().map(|&(x, y)| (x, y, Mark::Circle)).collect();
            assert!(patterns.any_completed(&board(3, &marks)), "{shape:?}");
        }
    }

    #[test]
    fn mixed_marks_do_not_complete() {
        let patterns = Patterns::tippies(3);
        let grid = board(
            3,
            &[
                (0, 0, Mark::Circle),
                (1, 0, Mark::Circle),
                (1, 1, Mark::Cross),
                (2, 1, Mark::Circle),
            ],
        );
        assert!(!patterns.any_completed(&grid));
    }

    #[test]
    fn estimate_immediate_win() {
        let patterns = Patterns::lines(3);
        let grid = board(
            3,
            &[(0, 0, Mark::Cross), (1, 0, Mark::Cross), (0, 1, Mark::Circle)],
        );
        assert_eq!(patterns.estimate(&grid, Player::P1), WIN);
    }

    #[test]
    fn estimate_double_threat_loses() {
        let patterns = Patterns::lines(3);
        // Circle threatens (2, 0) and (0, 2); Cross cannot block both.
        let cross_blocked = board(
            3,
            &[
                (0, 0, Mark::Circle),
                (1, 0, Mark::Circle),
                (0, 1, Mark::Circle),
                (2, 1, Mark::Cross),
                (1, 2, Mark::Cross),
            ],
        );
        assert_eq!(patterns.estimate(&cross_blocked, Player::P1), LOSE);
    }

    #[test]
    fn estimate_empty_is_draw() {
        let patterns = Patterns::tippies(4);
        let grid = Grid::new(4).unwrap();
        assert_eq!(patterns.estimate(&grid, Player::P1), DRAW);
    }

    #[test]
    fn estimate_stays_in_range() {
        let patterns = Patterns::tippies(4);
        let grid = board(
            4,
            &[(0, 0, Mark::Cross), (1, 0, Mark::Cross), (3, 3, Mark::Circle)],
        );
        let score = patterns.estimate(&grid, Player::P1);
        assert!(score > DRAW && score <= 0.5, "score {score}");
        assert_eq!(patterns.estimate(&grid, Player::P2), -score);
    }
}
