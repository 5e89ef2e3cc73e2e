#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! `rack` binary entrypoint.

use std::process;

/// Runs the CLI on a single-threaded runtime and exits with its status code.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = rack_cli::run().await;
    if exit_code != 0 {
        process::exit(exit_code);
    }
}
