//! Prints where routing keys are placed.
//!
//! Usage:
//!
//! ```text
//! docshard-route --backend main --backend db1 --backend db2 alice@example.com
//! ```
//!
//! Backends must be listed in registration order. For each key the tool
//! prints the primary position, the primary backend and the full failover
//! ordering, which answers "which backend holds this user" without touching
//! any store.

use clap::Parser;
use docshard::observability::{DEFAULT_LOG_DIRECTIVE, init_tracing};
use docshard::routing::{domain::RoutingKey, services::Router};
use docshard::store::domain::BackendName;
use std::io::{self, Write};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Parser)]
#[command(name = "docshard-route", about = "Show backend placement for routing keys")]
struct Args {
    /// Backend name, repeated in registration order.
    #[arg(short, long = "backend", required = true)]
    backends: Vec<String>,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = DEFAULT_LOG_DIRECTIVE)]
    log: String,

    /// Routing keys to place.
    #[arg(required = true)]
    keys: Vec<String>,
}

fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    init_tracing(&args.log)?;

    let names = parse_backends(&args.backends)?;
    tracing::debug!(backends = names.len(), "routing keys");

    let router = Router::new();
    let mut out = io::stdout().lock();
    for raw_key in args.keys {
        let key = RoutingKey::new(raw_key);
        let order = router.route_names(&names, &key);
        let (Some(index), Some(primary)) = (order.primary_index(), order.primary()) else {
            writeln!(out, "{key}: no backend available")?;
            continue;
        };
        let ordering = order
            .iter()
            .map(BackendName::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "{key}: primary {primary} (index {index}); order [{ordering}]")?;
    }
    Ok(())
}

fn parse_backends(raw: &[String]) -> Result<Vec<BackendName>, BoxError> {
    let mut names: Vec<BackendName> = Vec::with_capacity(raw.len());
    for value in raw {
        let name = BackendName::new(value.as_str())?;
        if names.contains(&name) {
            return Err(format!("duplicate backend name: {name}").into());
        }
        names.push(name);
    }
    Ok(names)
}
