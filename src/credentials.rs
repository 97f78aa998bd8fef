use crate::db::DbPool;
use crate::errors::{AppError, AppResult};
use rusqlite::OptionalExtension;

const API_KEY: &str = "finnhub_api_key";

/// What the API reveals about the saved key. Never the key itself.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CredentialStatus {
    pub saved: bool,
    pub masked: Option<String>,
}

/// Single-slot store for the Finnhub API key, backed by the `settings` table.
/// Statements are short; the connection lock is held only for one query.
#[derive(Clone)]
pub struct CredentialStore {
    db: DbPool,
}

impl CredentialStore {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub fn get(&self) -> AppResult<Option<String>> {
        let conn = self.db.lock().map_err(|e| AppError::Storage(format!("lock: {e}")))?;
        let value = conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                rusqlite::params![API_KEY],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Saves the key, trimmed. Blank input is rejected and leaves any saved key alone.
    pub fn set(&self, value: &str) -> AppResult<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(AppError::invalid("API key cannot be empty"));
        }
        let conn = self.db.lock().map_err(|e| AppError::Storage(format!("lock: {e}")))?;
        conn.execute(
            "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![API_KEY, value, chrono::Utc::now().to_rfc3339()],
        )?;
        tracing::info!("finnhub API key saved");
        Ok(())
    }

    pub fn clear(&self) -> AppResult<()> {
        let conn = self.db.lock().map_err(|e| AppError::Storage(format!("lock: {e}")))?;
        let removed = conn.execute("DELETE FROM settings WHERE key = ?1", rusqlite::params![API_KEY])?;
        tracing::info!(removed = removed, "finnhub API key cleared");
        Ok(())
    }

    pub fn status(&self) -> AppResult<CredentialStatus> {
        Ok(match self.get()? {
            Some(key) => CredentialStatus {
                saved: true,
                masked: Some(mask(&key)),
            },
            None => CredentialStatus {
                saved: false,
                masked: None,
            },
        })
    }

    /// Saved key, or `MissingCredential` when nothing is stored.
    pub fn require(&self) -> AppResult<String> {
        self.get()?.ok_or(AppError::MissingCredential)
    }
}

fn mask(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    format!("{visible}****")
}
