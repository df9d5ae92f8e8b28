use std::fmt;

use super::{PAIRS_TO_WIN, SLOTS};

/// Contents of one board position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Empty,
    Single,
    Paired,
}

impl Cell {
    /// Weight a cell contributes when a toothpick is carried over it.
    pub fn weight(self) -> usize {
        match self {
            Cell::Empty => 0,
            Cell::Single => 1,
            Cell::Paired => 2,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum MoveError {
    OutOfRange(usize),
    InvalidMove { start: usize, end: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange(index) => write!(f, "slot {} is out of range", index),
            MoveError::InvalidMove { start, end } => {
                write!(f, "cannot move a toothpick from slot {} to slot {}", start, end)
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// The ten toothpick slots.
///
/// A move picks up a single toothpick and drops it on another single,
/// forming a pair. The carried toothpick must pass over exactly weight 2
/// in between: one pair, or two singles. Empty slots weigh nothing, so
/// gaps of any width are crossed for free.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    cells: [Cell; SLOTS],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [Cell::Single; SLOTS],
        }
    }

    pub fn cells(&self) -> &[Cell; SLOTS] {
        &self.cells
    }

    pub fn pairs(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Paired).count()
    }

    pub fn is_won(&self) -> bool {
        self.pairs() == PAIRS_TO_WIN
    }

    /// Sum of weights strictly between `start` and `end`.
    pub fn jump_value(&self, start: usize, end: usize) -> usize {
        let (lower, upper) = if start < end { (start, end) } else { (end, start) };
        self.cells[lower + 1..upper]
            .iter()
            .map(|cell| cell.weight())
            .sum()
    }

    pub fn check_move(&self, start: usize, end: usize) -> Result<(), MoveError> {
        for index in [start, end] {
            if index >= SLOTS {
                return Err(MoveError::OutOfRange(index));
            }
        }
        if start == end
            || self.cells[start] != Cell::Single
            || self.cells[end] != Cell::Single
            || self.jump_value(start, end) != 2
        {
            return Err(MoveError::InvalidMove { start, end });
        }
        Ok(())
    }

    pub fn is_move_valid(&self, start: usize, end: usize) -> bool {
        self.check_move(start, end).is_ok()
    }

    /// Returns the board after carrying the toothpick at `start` onto `end`.
    /// The receiver is untouched, so the caller can keep it for undo.
    pub fn apply_move(&self, start: usize, end: usize) -> Result<Board, MoveError> {
        self.check_move(start, end)?;
        let mut next = self.clone();
        next.cells[start] = Cell::Empty;
        next.cells[end] = Cell::Paired;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn board_of(weights: [usize; SLOTS]) -> Board {
        let mut board = Board::new();
        for (cell, weight) in board.cells.iter_mut().zip(weights) {
            *cell = match weight {
                0 => Cell::Empty,
                1 => Cell::Single,
                2 => Cell::Paired,
                _ => unreachable!(),
            };
        }
        board
    }

    #[test]
    fn new_board_is_all_single() {
        let board = Board::new();
        assert!(board.cells().iter().all(|&cell| cell == Cell::Single));
        assert_eq!(board.pairs(), 0);
        assert!(!board.is_won());
    }

    #[test]
    fn jump_over_one_single_is_invalid() {
        let board = Board::new();
        assert_eq!(board.jump_value(0, 2), 1);
        assert!(!board.is_move_valid(0, 2));
    }

    #[test]
    fn jump_over_two_singles_is_valid() {
        let board = Board::new();
        assert!(board.is_move_valid(0, 3));

        let next = board.apply_move(0, 3).unwrap();
        assert_eq!(next.cells()[0], Cell::Empty);
        assert_eq!(next.cells()[3], Cell::Paired);
        // intermediates are crossed, not consumed
        assert_eq!(next.cells()[1], Cell::Single);
        assert_eq!(next.cells()[2], Cell::Single);
        // the original snapshot survives for history
        assert_eq!(board, Board::new());
    }

    #[test]
    fn jump_over_one_pair_is_valid() {
        let board = board_of([1, 2, 1, 1, 1, 1, 1, 1, 1, 1]);
        assert!(board.is_move_valid(0, 2));
    }

    #[test]
    fn empty_gaps_are_crossed_for_free() {
        // weight 2 sits far from the endpoints; empties in between count 0
        let board = board_of([1, 0, 0, 2, 0, 1, 1, 1, 1, 1]);
        assert!(board.is_move_valid(0, 5));

        // nothing but empties sums to 0, not 2
        let board = board_of([1, 0, 0, 0, 1, 1, 1, 1, 1, 1]);
        assert!(!board.is_move_valid(0, 4));
    }

    #[test]
    fn adjacent_move_is_invalid() {
        let board = Board::new();
        assert!(!board.is_move_valid(0, 1));
    }

    #[test]
    fn endpoints_must_both_be_single() {
        let board = board_of([0, 1, 1, 2, 1, 1, 1, 1, 1, 1]);
        // empty start
        assert!(!board.is_move_valid(0, 3));
        // paired destination, even though the jump value works out
        assert!(!board.is_move_valid(1, 3));
        // paired start
        assert!(!board.is_move_valid(3, 6));
    }

    #[test]
    fn same_slot_is_invalid() {
        let board = Board::new();
        assert!(!board.is_move_valid(4, 4));
    }

    #[test]
    fn out_of_range_is_reported() {
        let board = Board::new();
        assert_eq!(board.check_move(0, SLOTS), Err(MoveError::OutOfRange(SLOTS)));
        assert_eq!(board.check_move(99, 3), Err(MoveError::OutOfRange(99)));
    }

    #[test]
    fn apply_move_rejects_invalid_moves() {
        let board = Board::new();
        assert_eq!(
            board.apply_move(0, 1),
            Err(MoveError::InvalidMove { start: 0, end: 1 })
        );
        // the rejected call leaves the board alone
        assert_eq!(board, Board::new());
    }

    #[test]
    fn validity_ignores_scan_direction() {
        let boards = [
            Board::new(),
            board_of([1, 2, 1, 0, 1, 0, 2, 1, 1, 0]),
            board_of([1, 0, 0, 2, 0, 1, 2, 0, 1, 2]),
            board_of([2, 2, 2, 2, 0, 0, 0, 0, 1, 1]),
        ];
        for board in &boards {
            for start in 0..SLOTS {
                for end in 0..SLOTS {
                    assert_eq!(
                        board.is_move_valid(start, end),
                        board.is_move_valid(end, start),
                        "asymmetric validity for {} -> {} on {:?}",
                        start,
                        end,
                        board
                    );
                }
            }
        }
    }

    #[test]
    fn win_requires_exactly_five_pairs() {
        assert!(board_of([2, 0, 2, 0, 2, 0, 2, 0, 2, 0]).is_won());
        assert!(!board_of([2, 0, 2, 0, 2, 0, 2, 0, 1, 1]).is_won());
        assert!(!Board::new().is_won());
    }

    #[test]
    fn reachable_boards_conserve_toothpicks() {
        // walk every board reachable from the start and check that the ten
        // toothpicks are all accounted for in each one
        let mut seen = HashSet::new();
        let mut frontier = vec![Board::new()];
        while let Some(board) = frontier.pop() {
            if !seen.insert(board.clone()) {
                continue;
            }
            let singles = board
                .cells()
                .iter()
                .filter(|&&cell| cell == Cell::Single)
                .count();
            assert_eq!(singles + 2 * board.pairs(), SLOTS);

            for start in 0..SLOTS {
                for end in 0..SLOTS {
                    if let Ok(next) = board.apply_move(start, end) {
                        frontier.push(next);
                    }
                }
            }
        }
        assert!(seen.len() > 1);
    }
}
