//! Print heartbeat, status and chain height of a NIS node.
//!
//! ```sh
//! NIS_ENDPOINT=http://127.0.0.1:7890 cargo run -p nis-client --example node_status
//! ```

use std::env;

use eyre::WrapErr;
use nis_client::config::LOCALHOST_ENDPOINT;
use nis_client::{AsyncClient, NisApi, Scheduler};

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_level(true)
        .init();

    let endpoint = env::var("NIS_ENDPOINT").unwrap_or_else(|_| LOCALHOST_ENDPOINT.to_owned());
    let scheduler = Scheduler::start()?;
    let client = AsyncClient::new(&endpoint)?;

    let responses = scheduler
        .map([
            client.heartbeat(),
            client.status(),
            client.blockchain().height(),
        ])
        .wrap_err_with(|| format!("while querying NIS at {endpoint}"))?;

    for (name, response) in ["heartbeat", "status", "chain/height"]
        .into_iter()
        .zip(responses)
    {
        let status = response.status();
        let body = scheduler
            .run(response.text())
            .wrap_err_with(|| format!("while reading {name} response"))?;
        tracing::info!(route = name, %status, "{body}");
    }

    scheduler.shutdown();
    Ok(())
}
