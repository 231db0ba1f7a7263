#![forbid(unsafe_code)]

mod answers;
mod error;
mod interactions;
mod questions;
mod requests;
mod saves;
mod support;
mod tags;
mod types;
mod users;
mod votes;

pub use error::{ErrorKind, StoreError};
pub use requests::*;
pub use types::*;

use qa_core::{AnswerId, EntityId, QuestionId, ReputationPolicy, TagId, UserId, VoteDirection};
use rusqlite::{Connection, OptionalExtension, Transaction, params};
use std::path::{Path, PathBuf};
use std::time::Duration;
use support::*;

const DB_FILE_NAME: &str = "qa_forum.db";

/// Persistence client for the forum. Owns one SQLite connection; every
/// compound mutation runs in a single transaction on it.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    storage_dir: Option<PathBuf>,
    policy: ReputationPolicy,
}

impl SqliteStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;

        let db_path = storage_dir.join(DB_FILE_NAME);
        let conn = Connection::open(db_path)?;
        Self::init(conn, Some(storage_dir))
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, storage_dir: Option<PathBuf>) -> Result<Self, StoreError> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        migrate_sqlite_schema(&conn)?;
        tracing::debug!(storage_dir = ?storage_dir, "store opened");
        Ok(Self {
            conn,
            storage_dir,
            policy: ReputationPolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: ReputationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn storage_dir(&self) -> Option<&Path> {
        self.storage_dir.as_deref()
    }
}

fn user_exists(conn: &Connection, user_id: &UserId) -> Result<bool, StoreError> {
    Ok(conn
        .query_row(
            "SELECT 1 FROM users WHERE id=?1",
            params![user_id.as_str()],
            |row| row.get::<_, i64>(0),
        )
        .optional()?
        .is_some())
}

fn ensure_user_exists(conn: &Connection, user_id: &UserId) -> Result<(), StoreError> {
    if user_exists(conn, user_id)? {
        Ok(())
    } else {
        Err(StoreError::not_found(user_id))
    }
}

fn ensure_question_exists(conn: &Connection, question_id: &QuestionId) -> Result<(), StoreError> {
    let exists = conn
        .query_row(
            "SELECT 1 FROM questions WHERE id=?1",
            params![question_id.as_str()],
            |row| row.get::<_, i64>(0),
        )
        .optional()?
        .is_some();
    if exists {
        Ok(())
    } else {
        Err(StoreError::not_found(question_id))
    }
}

fn adjust_reputation_tx(
    tx: &Transaction<'_>,
    user_id: &UserId,
    delta: i64,
) -> Result<(), StoreError> {
    if delta == 0 {
        return Ok(());
    }
    let updated = tx.execute(
        "UPDATE users SET reputation = reputation + ?2 WHERE id=?1",
        params![user_id.as_str(), delta],
    )?;
    if updated == 0 {
        return Err(StoreError::not_found(user_id));
    }
    Ok(())
}

fn question_tag_ids(conn: &Connection, question_id: &QuestionId) -> Result<Vec<TagId>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT tag_id FROM question_tags WHERE question_id=?1 ORDER BY position ASC",
    )?;
    let rows = stmt.query_map(params![question_id.as_str()], |row| row.get::<_, String>(0))?;
    let mut raw = Vec::new();
    for row in rows {
        raw.push(row?);
    }
    decode_ids(raw)
}

/// Reads the voter ids of one target grouped by direction, ordered by id.
fn voters_by_direction(
    conn: &Connection,
    votes_table: &str,
    target_column: &str,
    target_id: &str,
) -> Result<(Vec<UserId>, Vec<UserId>), StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT user_id, direction FROM {votes_table} WHERE {target_column}=?1 ORDER BY user_id ASC"
    ))?;
    let rows = stmt.query_map(params![target_id], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut upvoters = Vec::new();
    let mut downvoters = Vec::new();
    for row in rows {
        let (user_id, direction) = row?;
        let user_id = decode_id::<UserId>(user_id)?;
        match VoteDirection::from_str(&direction) {
            Some(VoteDirection::Up) => upvoters.push(user_id),
            Some(VoteDirection::Down) => downvoters.push(user_id),
            None => {
                return Err(StoreError::InvalidInput(format!(
                    "invalid vote direction row: {direction}"
                )));
            }
        }
    }
    Ok((upvoters, downvoters))
}

fn answer_ids_for_question(
    conn: &Connection,
    question_id: &QuestionId,
) -> Result<Vec<AnswerId>, StoreError> {
    let mut stmt =
        conn.prepare("SELECT id FROM answers WHERE question_id=?1 ORDER BY seq ASC")?;
    let rows = stmt.query_map(params![question_id.as_str()], |row| row.get::<_, String>(0))?;
    let mut raw = Vec::new();
    for row in rows {
        raw.push(row?);
    }
    decode_ids(raw)
}
