// crates/govdb-server/src/main.rs

//! govdb-server — HTTP front end for govdb-core
//!
//! Serves `cities.json` and `governments.json` from the data directory
//! (the current directory unless `--data-dir` is given).
//!
//! Usage examples
//! --------------
//!
//! - Serve the files in the current directory on 127.0.0.1:5000
//!   $ govdb-server
//!
//! - Serve another directory, with the OpenAPI documents enabled
//!   $ govdb-server --data-dir /srv/govdb --environment development
//!
//! - JSON logs, verbose
//!   $ RUST_LOG=debug govdb-server --log-format json
use anyhow::Context;
use clap::Parser;
use govdb_core::DirSource;
use govdb_server::{app, logging, shutdown, AppState, ServerArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();
    logging::init(args.log_format);

    let source = match &args.data_dir {
        Some(dir) => DirSource::new(dir),
        None => DirSource::current_dir().context("cannot determine the current directory")?,
    };
    tracing::info!(data_dir = %source.root().display(), "serving reference data");

    let router = app(AppState::new(source), args.environment);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", args.host, args.port))?;
    tracing::info!(
        addr = %listener.local_addr()?,
        environment = ?args.environment,
        "listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown::wait_for_shutdown())
        .await
        .context("server error")?;

    Ok(())
}
