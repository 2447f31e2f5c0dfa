use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::PassforgeError;

/// One persisted generation event. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRecord {
    pub id: String,
    pub user_id: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Create payload as received on the wire. Fields are checked by the store,
/// not by deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPasswordRecord {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl NewPasswordRecord {
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            password: Some(password.into()),
        }
    }

    /// Returns `(user_id, password)` or the first missing/empty field.
    pub fn require(self) -> Result<(String, String), PassforgeError> {
        let user_id = non_empty(self.user_id).ok_or(PassforgeError::MissingField("userId"))?;
        let password = non_empty(self.password).ok_or(PassforgeError::MissingField("password"))?;
        Ok((user_id, password))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, FromRow)]
pub(crate) struct PasswordRow {
    pub id: String,
    pub user_id: String,
    pub password: String,
    pub created_at: String,
}

impl TryFrom<PasswordRow> for PasswordRecord {
    type Error = sqlx::Error;

    fn try_from(row: PasswordRow) -> Result<Self, Self::Error> {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);
        Ok(PasswordRecord {
            id: row.id,
            user_id: row.user_id,
            password: row.password,
            created_at,
        })
    }
}

/// Storage encoding of `created_at`. Fixed width keeps lexical and chronological order equal.
pub(crate) fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}
