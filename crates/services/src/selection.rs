//! Per-session record of the generic question the user picked.

/// Session-level state machine: starts at `NoSelection`, moves to `Selected`
/// on the first pick and stays there on later picks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionPhase {
    NoSelection,
    Selected,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<String>,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with an optional pre-selected question.
    #[must_use]
    pub fn with_selection(selected: Option<String>) -> Self {
        Self { selected }
    }

    /// Picking the current question again leaves the state unchanged.
    pub fn select(&mut self, question_text: impl Into<String>) {
        let question_text = question_text.into();
        if self.selected.as_deref() == Some(question_text.as_str()) {
            return;
        }
        tracing::debug!(question = %question_text, "generic question selected");
        self.selected = Some(question_text);
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        match self.selected {
            Some(_) => SelectionPhase::Selected,
            None => SelectionPhase::NoSelection,
        }
    }

    #[must_use]
    pub fn is_selected(&self, question_text: &str) -> bool {
        self.current() == Some(question_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_selection() {
        let state = SelectionState::new();
        assert_eq!(state.current(), None);
        assert_eq!(state.phase(), SelectionPhase::NoSelection);
    }

    #[test]
    fn select_moves_to_selected_and_repick_updates() {
        let mut state = SelectionState::new();
        state.select("First?");
        assert_eq!(state.phase(), SelectionPhase::Selected);
        assert_eq!(state.current(), Some("First?"));

        state.select("Second?");
        assert_eq!(state.phase(), SelectionPhase::Selected);
        assert_eq!(state.current(), Some("Second?"));
        assert!(state.is_selected("Second?"));
        assert!(!state.is_selected("First?"));
    }

    #[test]
    fn select_is_idempotent() {
        let mut state = SelectionState::new();
        state.select("Same?");
        let before = state.clone();
        state.select("Same?");
        assert_eq!(state, before);
    }

    #[test]
    fn clear_resets() {
        let mut state = SelectionState::with_selection(Some("Q?".to_string()));
        assert_eq!(state.phase(), SelectionPhase::Selected);
        state.clear();
        assert_eq!(state.current(), None);
        assert_eq!(state.phase(), SelectionPhase::NoSelection);
    }
}
