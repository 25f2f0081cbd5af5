//! Explicit state transitions for interactive selections.
//!
//! View state is kept in plain structs that change only through messages:
//! `State + Message → (State, Command)`.
//!
//! # Examples
//!
//! ```
//! use ascend_core::{GoalMessage, GoalSelection, State};
//!
//! let mut goals = GoalSelection::new(2);
//! goals.update(GoalMessage::Toggle("Sleep".into()));
//! goals.update(GoalMessage::Toggle("Energy".into()));
//! let cmd = goals.update(GoalMessage::Toggle("Recovery".into()));
//!
//! assert!(cmd.is_notify());
//! assert_eq!(goals.selected(), ["Sleep", "Energy"]);
//! ```

use serde::{Deserialize, Serialize};

/// State that changes only in response to messages.
pub trait State {
    /// Message type for state updates
    type Message;

    /// Apply a message, returning any follow-up effect for the host.
    fn update(&mut self, msg: Self::Message) -> Command;
}

/// Effects requested by a state update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Command {
    /// No command
    #[default]
    None,
    /// Execute multiple commands
    Batch(Vec<Command>),
    /// Surface a short message to the user
    Notify(String),
}

impl Command {
    /// Create a batch of commands, dropping `None` entries.
    pub fn batch(commands: impl IntoIterator<Item = Self>) -> Self {
        let commands: Vec<Self> = commands.into_iter().filter(|c| !c.is_none()).collect();
        if commands.is_empty() {
            Self::None
        } else {
            Self::Batch(commands)
        }
    }

    /// Check if this is the none command.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Check if this is a notification.
    #[must_use]
    pub const fn is_notify(&self) -> bool {
        matches!(self, Self::Notify(_))
    }
}

/// Ordered, capacity-limited set of selected goals.
///
/// Goals are ranked by the order in which they were picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSelection {
    selected: Vec<String>,
    max_selections: usize,
}

/// Messages for [`GoalSelection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalMessage {
    /// Select the goal, or deselect it if already selected
    Toggle(String),
    /// Deselect everything
    Clear,
}

impl GoalSelection {
    /// Default limit used by the onboarding goal picker.
    pub const DEFAULT_MAX: usize = 3;

    /// Create an empty selection holding at most `max_selections` goals.
    #[must_use]
    pub const fn new(max_selections: usize) -> Self {
        Self {
            selected: Vec::new(),
            max_selections,
        }
    }

    /// Selected goals, most important first.
    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Check if a goal is selected.
    #[must_use]
    pub fn is_selected(&self, title: &str) -> bool {
        self.selected.iter().any(|s| s == title)
    }

    /// 1-based importance rank of a selected goal.
    #[must_use]
    pub fn rank(&self, title: &str) -> Option<usize> {
        self.selected.iter().position(|s| s == title).map(|i| i + 1)
    }

    /// Check if no more goals can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.selected.len() >= self.max_selections
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Maximum number of selections.
    #[must_use]
    pub const fn max_selections(&self) -> usize {
        self.max_selections
    }
}

impl Default for GoalSelection {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX)
    }
}

impl State for GoalSelection {
    type Message = GoalMessage;

    fn update(&mut self, msg: Self::Message) -> Command {
        match msg {
            GoalMessage::Toggle(title) => {
                if let Some(index) = self.selected.iter().position(|s| *s == title) {
                    self.selected.remove(index);
                } else if self.is_full() {
                    return Command::Notify(format!(
                        "select up to {} goals",
                        self.max_selections
                    ));
                } else {
                    self.selected.push(title);
                }
            }
            GoalMessage::Clear => self.selected.clear(),
        }
        Command::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(goals: &mut GoalSelection, title: &str) -> Command {
        goals.update(GoalMessage::Toggle(title.to_string()))
    }

    #[test]
    fn test_default_selection() {
        let goals = GoalSelection::default();
        assert!(goals.is_empty());
        assert_eq!(goals.max_selections(), 3);
        assert!(!goals.is_full());
    }

    #[test]
    fn test_toggle_selects_in_order() {
        let mut goals = GoalSelection::default();
        assert!(toggle(&mut goals, "Hair").is_none());
        assert!(toggle(&mut goals, "Skin").is_none());
        assert_eq!(goals.selected(), ["Hair", "Skin"]);
        assert_eq!(goals.rank("Hair"), Some(1));
        assert_eq!(goals.rank("Skin"), Some(2));
        assert_eq!(goals.rank("Sleep"), None);
    }

    #[test]
    fn test_toggle_twice_deselects_and_reranks() {
        let mut goals = GoalSelection::default();
        toggle(&mut goals, "Hair");
        toggle(&mut goals, "Skin");
        toggle(&mut goals, "Hair");
        assert!(!goals.is_selected("Hair"));
        assert_eq!(goals.rank("Skin"), Some(1));
    }

    #[test]
    fn test_toggle_when_full_is_rejected() {
        let mut goals = GoalSelection::default();
        for title in ["Hair", "Skin", "Sleep"] {
            toggle(&mut goals, title);
        }
        assert!(goals.is_full());

        let cmd = toggle(&mut goals, "Energy");
        assert_eq!(cmd, Command::Notify("select up to 3 goals".to_string()));
        assert!(!goals.is_selected("Energy"));
        assert_eq!(goals.selected().len(), 3);
    }

    #[test]
    fn test_deselect_allowed_when_full() {
        let mut goals = GoalSelection::new(1);
        toggle(&mut goals, "Hair");
        assert!(toggle(&mut goals, "Hair").is_none());
        assert!(goals.is_empty());
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let mut goals = GoalSelection::new(0);
        assert!(toggle(&mut goals, "Hair").is_notify());
        assert!(goals.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut goals = GoalSelection::default();
        toggle(&mut goals, "Hair");
        goals.update(GoalMessage::Clear);
        assert!(goals.is_empty());
    }

    #[test]
    fn test_command_batch_drops_none() {
        assert_eq!(Command::batch([Command::None, Command::None]), Command::None);
        let cmd = Command::batch([Command::None, Command::Notify("x".into())]);
        assert_eq!(cmd, Command::Batch(vec![Command::Notify("x".into())]));
    }
}
