//! HTTP fetch worker.
//!
//! - One dedicated thread owning a current-thread tokio runtime and a
//!   reqwest client
//! - "Fetch now" requests arrive over a flume channel; the worker holds the
//!   configured URL
//! - Outcomes go back over an async-channel, exactly one per request, in
//!   request order; the main loop drains them with `glib::spawn_future_local`
//!
//! The worker never retries and never times out on its own; a failed fetch
//! is reported and the next regular reload tick tries again.

use std::thread;

use thiserror::Error;
use tokio::runtime::Builder as TokioRuntimeBuilder;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed")]
    Request(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),
}

pub type FetchOutcome = Result<Vec<u8>, TransportError>;

/// Handle to the fetch worker thread. Dropping it closes the request
/// channel and lets the thread wind down.
pub struct FetchWorker {
    request_tx: flume::Sender<()>,
}

impl FetchWorker {
    /// Spawn the worker for `url`, delivering outcomes to `outcome_tx`.
    pub fn spawn(url: String, outcome_tx: async_channel::Sender<FetchOutcome>) -> Self {
        let (request_tx, request_rx) = flume::unbounded::<()>();

        thread::Builder::new()
            .name("fetch-worker".into())
            .spawn(move || {
                let runtime = match TokioRuntimeBuilder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(err) => {
                        error!(error = ?err, "failed to build fetch runtime");
                        return;
                    }
                };
                runtime.block_on(worker_loop(url, request_rx, outcome_tx));
            })
            .expect("failed to spawn fetch worker");

        Self { request_tx }
    }

    /// Ask the worker to fetch the resource once. The scheduler guarantees
    /// at most one of these is outstanding at a time.
    pub fn request(&self) {
        if self.request_tx.send(()).is_err() {
            error!("fetch worker is gone, dropping reload request");
        }
    }
}

async fn worker_loop(
    url: String,
    request_rx: flume::Receiver<()>,
    outcome_tx: async_channel::Sender<FetchOutcome>,
) {
    let client = reqwest::Client::new();
    while request_rx.recv_async().await.is_ok() {
        let outcome = fetch_once(&client, &url).await;
        if outcome_tx.send(outcome).await.is_err() {
            // Main loop went away; nothing left to deliver to.
            break;
        }
    }
    debug!("fetch worker stopped");
}

async fn fetch_once(client: &reqwest::Client, url: &str) -> FetchOutcome {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status(status));
    }
    let bytes = response.bytes().await?;
    debug!(len = bytes.len(), "fetched frame bytes");
    Ok(bytes.to_vec())
}
