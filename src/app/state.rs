//! Selector state.
//!
//! One [`SelectorState`] lives for exactly one selection interaction.  It is
//! read by the renderer (`&SelectorState`) and mutated only by
//! [`super::handler::handle_input`].

use crate::error::{SelectError, SelectResult};

/// Help line used when the caller doesn't supply one.
pub const DEFAULT_HELP: &str = "Press q to quit.";

/// Lifecycle of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Active,
    /// The user accepted the option under the cursor.
    Confirmed,
    /// The user quit without choosing.
    Cancelled,
}

/// What a finished selection resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Selected { index: usize, label: String },
    Cancelled,
}

impl Outcome {
    /// Index of the chosen option, `None` when cancelled.
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Outcome::Selected { index, .. } => Some(*index),
            Outcome::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }
}

/// State of one selection interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    title: String,
    options: Vec<String>,
    help: String,
    /// Always `< options.len()`.
    cursor: usize,
    status: Status,
}

impl SelectorState {
    /// Create a selector with the cursor on the first option.
    ///
    /// An empty option list is rejected with [`SelectError::NoOptions`].
    pub fn new<I, S>(title: impl Into<String>, options: I) -> SelectResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(SelectError::NoOptions);
        }
        Ok(Self {
            title: title.into(),
            options,
            help: DEFAULT_HELP.to_string(),
            cursor: 0,
            status: Status::Active,
        })
    }

    /// Replace the help line shown under the list.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// `true` once the user confirmed or cancelled.
    pub fn is_terminated(&self) -> bool {
        self.status != Status::Active
    }

    /// The final result, or `None` while still active.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Active => None,
            Status::Cancelled => Some(Outcome::Cancelled),
            Status::Confirmed => Some(Outcome::Selected {
                index: self.cursor,
                label: self.options[self.cursor].clone(),
            }),
        }
    }

    // ── mutations (handler only) ────────────────────────────────

    pub(super) fn move_up(&mut self) {
        self.cursor = self.cursor.checked_sub(1).unwrap_or(self.options.len() - 1);
    }

    pub(super) fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % self.options.len();
    }

    pub(super) fn finish(&mut self, status: Status) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_active_at_zero() {
        let state = SelectorState::new("Pick:", ["a", "b"]).unwrap();
        assert_eq!(state.title(), "Pick:");
        assert_eq!(state.options(), ["a", "b"]);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.help(), DEFAULT_HELP);
        assert!(!state.is_terminated());
        assert!(state.outcome().is_none());
    }

    #[test]
    fn test_empty_options_rejected() {
        let err = SelectorState::new("Pick:", Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, SelectError::NoOptions));
    }

    #[test]
    fn test_outcome_reports_label() {
        let mut state = SelectorState::new("Pick:", ["Board", "Clock"]).unwrap();
        state.move_down();
        state.finish(Status::Confirmed);
        let outcome = state.outcome().unwrap();
        assert_eq!(
            outcome,
            Outcome::Selected {
                index: 1,
                label: "Clock".into()
            }
        );
        assert_eq!(outcome.selected_index(), Some(1));
        assert!(!outcome.is_cancelled());
    }

    #[test]
    fn test_cancelled_outcome_has_no_index() {
        let mut state = SelectorState::new("Pick:", ["Board", "Clock"]).unwrap();
        state.move_down();
        state.finish(Status::Cancelled);
        let outcome = state.outcome().unwrap();
        assert!(outcome.is_cancelled());
        assert_eq!(outcome.selected_index(), None);
        assert!(state.is_terminated());
    }
}
