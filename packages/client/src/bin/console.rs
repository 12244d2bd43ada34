//! Terminal messages pane for the JEB incubator platform.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin renraku -- --token <bearer token>
//! cargo run --bin renraku -- --email you@example.com --password secret
//! ```

use std::time::Duration;

use clap::Parser;

use renraku_client::config::{DEFAULT_API_URL, SyncConfig};
use renraku_client::ui::{ConsoleOptions, Credentials, run_console};
use renraku_shared::setup_logger;

/// Chat console for the incubator platform REST API
#[derive(Debug, Parser)]
#[command(name = "renraku", version)]
struct Args {
    /// API base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Bearer token (falls back to the RENRAKU_TOKEN environment variable)
    #[arg(long, conflicts_with_all = ["email", "password"])]
    token: Option<String>,

    /// Account email, for password login
    #[arg(long, requires = "password")]
    email: Option<String>,

    /// Account password, for password login
    #[arg(long, requires = "email")]
    password: Option<String>,

    /// Fast poll interval for the open room, in seconds
    #[arg(long, default_value_t = 4)]
    room_poll_secs: u64,

    /// Slow unread-scan interval, in seconds
    #[arg(long, default_value_t = 7)]
    unread_poll_secs: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    let credentials = match (args.token, args.email, args.password) {
        (Some(token), _, _) => Credentials::Token(token),
        (None, Some(email), Some(password)) => Credentials::Login { email, password },
        _ => match std::env::var("RENRAKU_TOKEN") {
            Ok(token) if !token.is_empty() => Credentials::Token(token),
            _ => {
                eprintln!("No credentials: pass --token or --email/--password.");
                std::process::exit(2);
            }
        },
    };

    let options = ConsoleOptions {
        api_url: args.api_url,
        credentials,
        sync: SyncConfig {
            room_poll: Duration::from_secs(args.room_poll_secs),
            unread_poll: Duration::from_secs(args.unread_poll_secs),
        },
    };

    if let Err(e) = run_console(options).await {
        tracing::error!("Console error: {e}");
        std::process::exit(1);
    }
}
