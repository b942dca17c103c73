use std::mem;

use crosses_core::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Action {
    /// A click on a grid cell.
    TapCell(Position),
    /// A click anywhere on the board outside the cells, or the continue key.
    TapBoard,
    ShowHint,
    NewPuzzle,
    ResetProgress,
}

#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::TapCell(Position::new(0, 1)));
        queue.request(Action::ShowHint);

        let drained = queue.take_all();
        assert_eq!(
            drained,
            [Action::TapCell(Position::new(0, 1)), Action::ShowHint]
        );

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
