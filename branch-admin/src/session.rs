//! Admin session gate
//!
//! The admin screen stays locked until the operator signs in with the
//! configured password or switches to demo mode.

use shared::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    SignedOut,
    SignedIn,
    /// Unlocked without a password
    Demo,
}

#[derive(Debug, Clone)]
pub struct AdminSession {
    password: String,
    state: SessionState,
}

impl AdminSession {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            state: SessionState::SignedOut,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, SessionState::SignedOut)
    }

    pub fn sign_in(&mut self, password: &str) -> AppResult<()> {
        if password != self.password {
            tracing::warn!("Admin sign-in rejected");
            return Err(AppError::invalid_credentials());
        }
        self.state = SessionState::SignedIn;
        Ok(())
    }

    pub fn enter_demo(&mut self) {
        self.state = SessionState::Demo;
    }

    pub fn sign_out(&mut self) {
        self.state = SessionState::SignedOut;
    }

    /// Err unless signed in or in demo mode
    pub fn require_open(&self) -> AppResult<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(AppError::not_authenticated())
        }
    }
}
