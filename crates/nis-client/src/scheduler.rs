//! An owned single-threaded runtime for driving async calls from
//! synchronous code.
//!
//! Callers already running inside tokio await [`AsyncClient`] futures
//! directly and have no use for this type.
//!
//! [`AsyncClient`]: crate::AsyncClient

use std::future::Future;

use futures::future::try_join_all;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::error::ClientError;

pub struct Scheduler {
    runtime: Runtime,
}

impl Scheduler {
    /// Build a current-thread runtime with I/O and timers enabled.
    pub fn start() -> Result<Self, ClientError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientError::Scheduler)?;
        debug!("scheduler started");
        Ok(Self { runtime })
    }

    /// Drive `future` to completion on this thread.
    ///
    /// Panics when called from within an async context, like
    /// [`Runtime::block_on`].
    pub fn run<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Drive every future concurrently and collect the results in input
    /// order. The first error wins; the remaining futures are dropped.
    pub fn map<I, F, T, E>(&self, futures: I) -> Result<Vec<T>, E>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Result<T, E>>,
    {
        self.runtime.block_on(try_join_all(futures))
    }

    /// Stop the runtime without waiting for spawned background tasks such
    /// as idle pooled connections.
    pub fn shutdown(self) {
        self.runtime.shutdown_background();
        debug!("scheduler stopped");
    }
}

#[cfg(test)]
mod tests {
    use std::pin::Pin;

    use super::*;
    use crate::client::NisApi;
    use crate::test_util::{assert_get, recording_async_client};

    #[test]
    fn run_drives_a_client_call() {
        let scheduler = Scheduler::start().expect("runtime must start");
        let (client, transport) = recording_async_client(4);

        let response = scheduler
            .run(client.blockchain().height())
            .expect("dispatch");
        assert_eq!(response.status, 200);
        assert_get(&transport.last(), "chain/height", &[]);

        scheduler.shutdown();
    }

    #[test]
    fn map_gathers_every_call() {
        let scheduler = Scheduler::start().expect("runtime must start");
        let (client, transport) = recording_async_client(2);

        let addresses = ["TA", "TB", "TC", "TD"];
        let responses = scheduler
            .map(addresses.iter().map(|address| client.account().get(address)))
            .expect("dispatch");
        assert_eq!(responses.len(), addresses.len());

        let mut seen: Vec<String> = transport
            .requests()
            .iter()
            .filter_map(|request| request.query_value("address").map(str::to_owned))
            .collect();
        seen.sort();
        assert_eq!(seen, addresses);
    }

    #[test]
    fn map_returns_first_error() {
        type Job = Pin<Box<dyn Future<Output = Result<u32, &'static str>>>>;

        let scheduler = Scheduler::start().expect("runtime must start");
        let jobs: Vec<Job> = vec![
            Box::pin(async { Ok::<u32, &'static str>(1) }),
            Box::pin(async { Err::<u32, &'static str>("boom") }),
            Box::pin(async { Ok::<u32, &'static str>(3) }),
        ];
        assert_eq!(scheduler.map(jobs), Err("boom"));
    }

    #[test]
    fn map_of_nothing_is_empty() {
        let scheduler = Scheduler::start().expect("runtime must start");
        let results: Result<Vec<()>, ClientError> =
            scheduler.map(Vec::<std::future::Ready<Result<(), ClientError>>>::new());
        assert!(results.expect("empty gather").is_empty());
    }
}
