//! Caller-side flow tying the generator, the session and the history gateway together.

use crate::api::HistoryClient;
use crate::db::PasswordRecord;
use crate::error::PassforgeError;
use crate::generator::{self, PasswordOptions};
use crate::session::Session;
use tracing::warn;

/// Result of one generate request. The password is always present; the
/// network outcomes are `None` when nothing was attempted.
#[derive(Debug)]
pub struct Generation {
    pub password: String,
    pub saved: Option<Result<PasswordRecord, PassforgeError>>,
    /// History reloaded after a successful save.
    pub history: Option<Result<Vec<PasswordRecord>, PassforgeError>>,
}

pub struct PasswordGenerator {
    client: HistoryClient,
}

impl PasswordGenerator {
    pub fn new(client: HistoryClient) -> Self {
        Self { client }
    }

    /// Generate a password and, for a signed-in session, save it and reload history.
    pub async fn generate(&self, session: &Session, options: &PasswordOptions) -> Generation {
        let password = generator::generate(options);

        let Some(user_id) = session.user_id() else {
            return Generation {
                password,
                saved: None,
                history: None,
            };
        };

        let saved = self
            .client
            .save_password(user_id, &password)
            .await
            .inspect_err(|e| warn!(user_id, error = %e, "failed to save password"));

        let history = if saved.is_ok() {
            Some(self.history(session).await)
        } else {
            None
        };

        Generation {
            password,
            saved: Some(saved),
            history,
        }
    }

    /// History of the signed-in user, newest first.
    pub async fn history(&self, session: &Session) -> Result<Vec<PasswordRecord>, PassforgeError> {
        let user_id = session.user_id().ok_or(PassforgeError::NotSignedIn)?;
        self.client
            .password_history(user_id)
            .await
            .inspect_err(|e| warn!(user_id, error = %e, "failed to load password history"))
    }

    /// Delete `id` remotely, then drop it from the caller's `history` view.
    pub async fn delete(
        &self,
        id: &str,
        history: &mut Vec<PasswordRecord>,
    ) -> Result<(), PassforgeError> {
        self.client
            .delete_password(id)
            .await
            .inspect_err(|e| warn!(id, error = %e, "failed to delete password"))?;
        history.retain(|record| record.id != id);
        Ok(())
    }
}
