#![forbid(unsafe_code)]

use clap::Parser;
use qa_core::ReputationPolicy;
use qa_storage::{SqliteStore, StoreError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub(crate) const DEFAULT_LOG_FILTER: &str = "qa_server=info,qa_storage=info";

/// Q&A forum action server (JSON-RPC over stdio).
#[derive(Parser, Debug, Clone)]
#[command(name = "qa_server", version, about)]
pub(crate) struct Cli {
    /// Directory holding the forum database.
    #[arg(
        long,
        env = "QA_STORAGE_DIR",
        value_name = "DIR",
        default_value = ".qa_forum"
    )]
    pub(crate) storage_dir: PathBuf,

    /// Keep everything in memory; nothing survives the process.
    #[arg(long)]
    pub(crate) in_memory: bool,

    /// Tracing filter used when RUST_LOG is unset.
    #[arg(long, env = "QA_LOG", value_name = "FILTER", default_value = DEFAULT_LOG_FILTER)]
    pub(crate) log_filter: String,

    /// Reputation given to (or taken from) a question's author per vote.
    #[arg(
        long,
        env = "QA_QUESTION_AUTHOR_DELTA",
        value_name = "N",
        default_value_t = 0,
        allow_hyphen_values = true
    )]
    pub(crate) question_author_delta: i64,
}

impl Cli {
    pub(crate) fn policy(&self) -> ReputationPolicy {
        ReputationPolicy {
            question_author: self.question_author_delta,
            ..ReputationPolicy::default()
        }
    }

    pub(crate) fn open_store(&self) -> Result<SqliteStore, StoreError> {
        let store = if self.in_memory {
            SqliteStore::open_in_memory()?
        } else {
            SqliteStore::open(&self.storage_dir)?
        };
        Ok(store.with_policy(self.policy()))
    }
}

/// Logs go to stderr; stdout carries the protocol.
pub(crate) fn init_tracing(fallback_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
