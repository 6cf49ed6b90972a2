use clap::Parser;
use fieldcheck::{Validator, ValidatorConfig};
use fieldcheck_server::{init_tracing, AppState, Server, ServerError, DEFAULT_BODY_LIMIT};
use std::net::SocketAddr;

/// Validate JSON request bodies over HTTP.
///
/// Validator settings come from `FIELDCHECK_POLICY` (`collect_all` or
/// `fail_fast`) and `FIELDCHECK_ARGUMENTS` (`lenient` or `strict`).
#[derive(Debug, Parser)]
#[command(name = "fieldcheck-server", version, about)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "FIELDCHECK_ADDR", default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Maximum request body size in bytes
    #[arg(long, env = "FIELDCHECK_BODY_LIMIT", default_value_t = DEFAULT_BODY_LIMIT)]
    body_limit: usize,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let args = Args::parse();
    init_tracing();

    let config = ValidatorConfig::from_env()?;
    let state = AppState::new(Validator::new(config)).with_body_limit(args.body_limit);

    Server::new(state)
        .run_until(args.addr, async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
}
