#![forbid(unsafe_code)]

use super::*;
use rusqlite::{ErrorCode, TransactionBehavior};

impl SqliteStore {
    pub fn create_user(&mut self, request: CreateUserRequest) -> Result<UserRow, StoreError> {
        let name = require_text(&request.name, "name")?;
        let username = require_text(&request.username, "username")?;
        let email = require_text(&request.email, "email")?;
        let picture = request
            .picture
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let bio = request
            .bio
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let created_at_ms = now_ms();

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let (user_id, seq) = mint_id_tx::<UserId>(&tx)?;
        let insert = tx.execute(
            "INSERT INTO users(id, seq, name, username, email, picture, bio, reputation, created_at_ms) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, ?8)",
            params![
                user_id.as_str(),
                seq,
                name,
                username,
                email,
                picture,
                bio,
                created_at_ms
            ],
        );
        if let Err(err) = insert {
            return Err(map_username_conflict(err));
        }
        tx.commit()?;

        tracing::debug!(user_id = %user_id, "user created");
        Ok(UserRow {
            id: user_id,
            name,
            username,
            email,
            picture,
            bio,
            reputation: 0,
            created_at_ms,
        })
    }

    pub fn get_user(&self, user_id: &UserId) -> Result<UserRow, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, username, email, picture, bio, reputation, created_at_ms \
                 FROM users WHERE id=?1",
                params![user_id.as_str()],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, Option<String>>(4)?,
                        row.get::<_, Option<String>>(5)?,
                        row.get::<_, i64>(6)?,
                        row.get::<_, i64>(7)?,
                    ))
                },
            )
            .optional()?;

        let Some((id, name, username, email, picture, bio, reputation, created_at_ms)) = row else {
            return Err(StoreError::not_found(user_id));
        };
        Ok(UserRow {
            id: decode_id(id)?,
            name,
            username,
            email,
            picture,
            bio,
            reputation,
            created_at_ms,
        })
    }
}

fn map_username_conflict(err: rusqlite::Error) -> StoreError {
    match &err {
        rusqlite::Error::SqliteFailure(code, _) if code.code == ErrorCode::ConstraintViolation => {
            StoreError::InvalidInput("username is already taken".to_string())
        }
        _ => StoreError::Sql(err),
    }
}
