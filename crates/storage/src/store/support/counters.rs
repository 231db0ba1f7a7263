#![forbid(unsafe_code)]

use super::super::StoreError;
use qa_core::EntityId;
use rusqlite::{OptionalExtension, Transaction, params};

pub(in crate::store) fn next_counter_tx(
    tx: &Transaction<'_>,
    name: &str,
) -> Result<i64, StoreError> {
    let current: i64 = tx
        .query_row(
            "SELECT value FROM counters WHERE name=?1",
            params![name],
            |row| row.get(0),
        )
        .optional()?
        .unwrap_or(0);
    let next = current + 1;
    tx.execute(
        r#"
        INSERT INTO counters(name, value) VALUES (?1, ?2)
        ON CONFLICT(name) DO UPDATE SET value=excluded.value
        "#,
        params![name, next],
    )?;
    Ok(next)
}

/// Mints the next id of kind `T`, returning it with its sequence number.
pub(in crate::store) fn mint_id_tx<T: EntityId>(
    tx: &Transaction<'_>,
) -> Result<(T, i64), StoreError> {
    let seq = next_counter_tx(tx, T::KIND)?;
    Ok((T::from_seq(seq), seq))
}
