#![forbid(unsafe_code)]

mod actions;
mod config;
mod entry;
mod server;
mod support;

use clap::Parser;

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "qa_server";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = config::Cli::parse();
    config::init_tracing(&cli.log_filter);

    let store = cli.open_store().inspect_err(|err| {
        tracing::error!(error = %err, storage_dir = %cli.storage_dir.display(), "failed to open store");
    })?;
    tracing::info!(
        storage_dir = ?store.storage_dir(),
        in_memory = cli.in_memory,
        question_author_delta = cli.question_author_delta,
        "qa_server ready"
    );

    let mut server = server::ActionServer::new(store);
    entry::run_stdio(&mut server)?;
    tracing::info!("stdin closed, shutting down");
    Ok(())
}
