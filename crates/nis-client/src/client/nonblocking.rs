use futures::future::BoxFuture;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::gate::ConcurrencyGate;
use crate::request::Call;
use crate::transport::{HttpTransport, Transport};

use super::{prepare, NisApi};

/// Async NIS client with a bounded number of in-flight requests.
///
/// Calls return `Send` futures that suspend on network I/O. At most
/// `max_concurrency` of them are inside the transport at any moment; the
/// rest wait on the [`ConcurrencyGate`] in arrival order.
pub struct AsyncClient<T = HttpTransport> {
    endpoint: String,
    transport: T,
    gate: ConcurrencyGate,
}

impl AsyncClient<HttpTransport> {
    /// Client for `endpoint` with default settings (100 concurrent requests).
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        Self::from_config(ClientConfig::new(endpoint))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> AsyncClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ClientError> {
        config.validate_endpoint()?;
        let gate = ConcurrencyGate::new(config.max_concurrency)?;
        Ok(Self {
            endpoint: config.endpoint,
            transport,
            gate,
        })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn gate(&self) -> &ConcurrencyGate {
        &self.gate
    }

    pub fn max_concurrency(&self) -> usize {
        self.gate.capacity()
    }

    /// Stop admitting calls. Calls already past the gate complete normally;
    /// queued and future calls fail with [`ClientError::Closed`]. The
    /// connection pool is released when the client is dropped.
    pub fn close(&self) {
        debug!(endpoint = %self.endpoint, in_flight = self.gate.in_flight(), "closing nis client");
        self.gate.close();
    }

    pub fn is_closed(&self) -> bool {
        self.gate.is_closed()
    }
}

impl<T: Transport> NisApi for AsyncClient<T> {
    type Output<'a>
        = BoxFuture<'a, Result<T::Response, ClientError>>
    where
        Self: 'a;

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn call(&self, call: Call) -> Self::Output<'_> {
        Box::pin(async move {
            let request = prepare(&self.endpoint, call)?;
            let _permit = self.gate.acquire().await?;
            self.transport.send(request).await
        })
    }
}
