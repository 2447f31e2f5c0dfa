//! SQL DDL for initializing the password history storage.

/// SQLite schema with:
/// - `id` TEXT PRIMARY KEY holding a UUID v4
/// - `created_at` fixed-width RFC3339 (UTC, microseconds), so text order is time order
/// - index on `(user_id, created_at)` serving the newest-first history query
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS passwords (
    id TEXT PRIMARY KEY NOT NULL,
    user_id TEXT NOT NULL,
    password TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_passwords_user_created ON passwords(user_id, created_at);
"#;
