use crate::config::Config;
use crate::db::{NewPasswordRecord, PasswordRecord};
use crate::error::PassforgeError;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Typed bindings for the history gateway under `base` (e.g. `http://host/api`).
#[derive(Clone)]
pub struct HistoryClient {
    http: reqwest::Client,
    base: Url,
}

impl HistoryClient {
    pub fn new(base: Url) -> Result<Self, PassforgeError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("passforge/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;
        Self::with_client(http, base)
    }

    /// Client for the gateway at `cfg.api_base_url`.
    pub fn from_config(cfg: &Config) -> Result<Self, PassforgeError> {
        Self::new(cfg.api_base_url.clone())
    }

    pub fn with_client(http: reqwest::Client, base: Url) -> Result<Self, PassforgeError> {
        if base.cannot_be_a_base() {
            return Err(PassforgeError::InvalidBaseUrl(base.to_string()));
        }
        Ok(Self { http, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// POST /passwords
    pub async fn save_password(
        &self,
        user_id: &str,
        password: &str,
    ) -> Result<PasswordRecord, PassforgeError> {
        let url = self.endpoint(&["passwords"])?;
        let resp = self
            .http
            .post(url)
            .json(&NewPasswordRecord::new(user_id, password))
            .send()
            .await?;
        let record = ensure_success(resp)?.json::<PasswordRecord>().await?;
        debug!(id = %record.id, "password saved");
        Ok(record)
    }

    /// GET /passwords/{userId}
    pub async fn password_history(
        &self,
        user_id: &str,
    ) -> Result<Vec<PasswordRecord>, PassforgeError> {
        let url = self.endpoint(&["passwords", user_id])?;
        let resp = self.http.get(url).send().await?;
        Ok(ensure_success(resp)?.json().await?)
    }

    /// DELETE /passwords/{id}
    pub async fn delete_password(&self, id: &str) -> Result<(), PassforgeError> {
        let url = self.endpoint(&["passwords", id])?;
        let resp = self.http.delete(url).send().await?;
        ensure_success(resp)?;
        Ok(())
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, PassforgeError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| PassforgeError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, PassforgeError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(PassforgeError::UpstreamStatus(status))
    }
}
