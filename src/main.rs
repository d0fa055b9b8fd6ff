use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;

use symtags_lsp::Backend;

/// Symfony service-container intelligence for YAML configs, served
/// over LSP on stdio.
#[derive(Parser)]
#[command(name = "symtags-lsp", version, about)]
struct Cli {
    /// Log filter directive used when RUST_LOG is not set,
    /// e.g. `info` or `symtags_lsp=debug`.
    #[arg(long, default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // stdout carries the LSP protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("starting SymtagsLSP");

    let (service, socket) = LspService::new(Backend::new);
    Server::new(tokio::io::stdin(), tokio::io::stdout(), socket)
        .serve(service)
        .await;
}
