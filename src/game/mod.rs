mod board;

use std::rc::Rc;

use yew::Reducible;

pub use board::{Board, Cell, MoveError};

pub const SLOTS: usize = 10;
pub const PAIRS_TO_WIN: usize = 5;

pub enum GameAction {
    Tap(usize),
    Undo,
    Reset,
}

/// One game session: the board plus the state that drives it.
///
/// `history` holds a snapshot per successful move; `move_count` moves in
/// lockstep with it. Win status is always recomputed from the board, so
/// undoing the final move drops back out of the won state.
#[derive(Clone)]
pub struct Game {
    pub board: Board,
    pub history: Vec<Board>,
    pub move_count: usize,
    pub selected: Option<usize>,
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            history: Vec::new(),
            move_count: 0,
            selected: None,
        }
    }

    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// A tap either picks up a single toothpick or tries to drop the one
    /// already picked up. The selection is cleared after every attempted
    /// drop, valid or not.
    fn tap(&mut self, index: usize) {
        if self.is_won() {
            return;
        }

        match self.selected.take() {
            None => {
                if self.board.cells().get(index) == Some(&Cell::Single) {
                    self.selected = Some(index);
                }
            }
            Some(start) => {
                if let Ok(next) = self.board.apply_move(start, index) {
                    self.history.push(std::mem::replace(&mut self.board, next));
                    self.move_count += 1;
                }
            }
        }
    }

    fn undo(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.board = previous;
            self.move_count -= 1;
            self.selected = None;
        }
    }

    fn reset(&mut self) {
        *self = Game::new();
    }
}

impl Reducible for Game {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut game = (*self).clone();

        match action {
            GameAction::Tap(index) => game.tap(index),
            GameAction::Undo => game.undo(),
            GameAction::Reset => game.reset(),
        }

        game.into()
    }
}
