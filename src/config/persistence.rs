//! Session history persistence module
//!
//! Handles saving, loading, and rotation of finished quiz sessions.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::game::stats::GameStats;
use crate::{CrazyColorsError, Result, APP_NAME, MAX_SESSIONS_HISTORY, SESSIONS_FILE};

/// One finished session as written to the history file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// When the session ended
    pub timestamp: DateTime<Utc>,
    /// Final statistics for the session
    pub stats: GameStats,
    /// Settings the session was played with
    pub settings: Settings,
}

impl SessionRecord {
    /// Record for a session that just ended
    pub fn new(stats: GameStats, settings: Settings) -> Self {
        Self {
            timestamp: Utc::now(),
            stats,
            settings,
        }
    }
}

/// Session history storage manager
#[derive(Debug)]
pub struct SessionStorage {
    sessions_path: PathBuf,
}

/// Sessions file structure for JSON persistence
#[derive(Debug, Serialize, Deserialize)]
struct SessionsFile {
    version: u32,
    sessions: Vec<SessionRecord>,
}

impl Default for SessionsFile {
    fn default() -> Self {
        Self {
            version: 1,
            sessions: Vec::new(),
        }
    }
}

impl SessionStorage {
    /// Create a new session storage manager
    pub fn new() -> Result<Self> {
        let sessions_path = Self::sessions_file_path()?;
        Ok(Self { sessions_path })
    }

    /// Get the standard sessions file path
    /// Uses $DATA_HOME/crazycolors/sessions.json
    pub fn sessions_file_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            CrazyColorsError::PersistenceError("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join(SESSIONS_FILE))
    }

    /// Load all sessions from the history file
    pub fn load_sessions(&self) -> Result<Vec<SessionRecord>> {
        if !self.sessions_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.sessions_path).map_err(|e| {
            CrazyColorsError::PersistenceError(format!(
                "Failed to read sessions file {}: {}",
                self.sessions_path.display(),
                e
            ))
        })?;

        let sessions_file: SessionsFile = serde_json::from_str(&content).map_err(|e| {
            CrazyColorsError::PersistenceError(format!(
                "Failed to parse sessions file {}: {}",
                self.sessions_path.display(),
                e
            ))
        })?;

        Ok(sessions_file.sessions)
    }

    /// Append a finished session to the history file
    /// Automatically rotates old entries past MAX_SESSIONS_HISTORY
    pub fn append_session(&self, record: SessionRecord) -> Result<()> {
        let mut sessions = self.load_sessions()?;

        sessions.push(record);

        if sessions.len() > MAX_SESSIONS_HISTORY {
            let skip_count = sessions.len() - MAX_SESSIONS_HISTORY;
            sessions = sessions.into_iter().skip(skip_count).collect();
        }

        self.save_sessions(sessions)
    }

    /// Save all sessions to the history file
    fn save_sessions(&self, sessions: Vec<SessionRecord>) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.sessions_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CrazyColorsError::PersistenceError(format!(
                    "Failed to create sessions directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let sessions_file = SessionsFile {
            version: 1,
            sessions,
        };

        let content = serde_json::to_string_pretty(&sessions_file).map_err(|e| {
            CrazyColorsError::PersistenceError(format!("Failed to serialize sessions: {}", e))
        })?;

        fs::write(&self.sessions_path, content).map_err(|e| {
            CrazyColorsError::PersistenceError(format!(
                "Failed to write sessions file {}: {}",
                self.sessions_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the number of stored sessions
    pub fn count_sessions(&self) -> Result<usize> {
        let sessions = self.load_sessions()?;
        Ok(sessions.len())
    }
}
