//! Confirmation capability
//!
//! Destructive operations ask the caller before touching the store. The UI
//! decides how to ask; the store only sees the answer.

/// Asks the operator a yes/no question
pub trait Confirm: Send + Sync {
    fn confirm(&self, question: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, question: &str) -> bool {
        self(question)
    }
}

/// Fixed answer to every question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, _question: &str) -> bool {
        self.0
    }
}

/// Result of an operation gated by [`Confirm`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    /// The operator said no; nothing changed
    Declined,
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}

// Prompt texts
pub const CONFIRM_DELETE_BRANCH: &str = "Delete this branch? This deletes menus and gallery too.";
pub const CONFIRM_DELETE_MENU_ITEM: &str = "Delete this menu item?";
pub const CONFIRM_DELETE_PHOTO: &str = "Delete this photo?";
pub const CONFIRM_IMPORT: &str = "Import will replace current local data. Continue?";
pub const CONFIRM_RESET: &str = "Reset local data to demo state?";
pub const CONFIRM_LOGOUT: &str = "Logout?";
