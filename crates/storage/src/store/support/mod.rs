#![forbid(unsafe_code)]

mod counters;
mod json;
mod rows;
mod schema;
mod time;

pub(super) use counters::*;
pub(super) use json::*;
pub(super) use rows::*;
pub(super) use schema::migrate_sqlite_schema;
pub(super) use time::now_ms;
