use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use passforge::db::HistoryStorage;
use passforge::router::{PassforgeState, cors_layer, passforge_router};

/// Temp-file SQLite database removed on drop.
pub struct TestDb {
    pub storage: HistoryStorage,
    path: PathBuf,
}

impl TestDb {
    pub async fn new(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "passforge-{}-{}-{}.sqlite",
            tag,
            std::process::id(),
            nanos
        ));

        let database_url = format!("sqlite:{}", path.display());
        let storage = passforge::db::connect(&database_url)
            .await
            .expect("failed to open test database");
        Self { storage, path }
    }

    pub fn database_url(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }

    pub fn router(&self) -> axum::Router {
        let cors = cors_layer("http://localhost:5173").expect("valid origin");
        passforge_router(PassforgeState::new(self.storage.clone()), cors)
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
