//! Explicit session context supplied by the identity provider.
//!
//! The provider itself is external; this type only records what it reported
//! so that callers can branch on it without consulting global state.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Provider has not reported yet.
    Loading,
    SignedOut,
    SignedIn { user_id: String },
    /// Provider failed to report a session.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn loading() -> Self {
        Self {
            state: SessionState::Loading,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            state: SessionState::SignedOut,
        }
    }

    pub fn signed_in(user_id: impl Into<String>) -> Self {
        let mut session = Self::loading();
        session.resolve(Some(user_id.into()));
        session
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        !matches!(self.state, SessionState::Loading)
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.state, SessionState::SignedIn { .. })
    }

    pub fn user_id(&self) -> Option<&str> {
        match &self.state {
            SessionState::SignedIn { user_id } => Some(user_id.as_str()),
            _ => None,
        }
    }

    /// Record the provider's answer. An empty user id counts as signed out.
    pub fn resolve(&mut self, user_id: Option<String>) {
        self.state = match user_id.filter(|id| !id.is_empty()) {
            Some(user_id) => SessionState::SignedIn { user_id },
            None => SessionState::SignedOut,
        };
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        self.state = SessionState::Failed(reason.into());
    }

    pub fn sign_out(&mut self) {
        self.state = SessionState::SignedOut;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}
