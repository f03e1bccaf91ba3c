use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::request::Call;
use crate::transport::{BlockingHttpTransport, BlockingTransport};

use super::{prepare, NisApi};

/// Synchronous NIS client. Every call blocks the calling thread for one
/// HTTP round-trip.
///
/// The client is `Send + Sync` when its transport is, so one instance (and
/// its connection pool) can be shared across threads behind an `Arc`.
pub struct BlockingClient<T = BlockingHttpTransport> {
    endpoint: String,
    transport: T,
}

impl BlockingClient<BlockingHttpTransport> {
    /// Client for `endpoint` with default settings.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        Self::from_config(ClientConfig::new(endpoint))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = BlockingHttpTransport::new(&config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: BlockingTransport> BlockingClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ClientError> {
        config.validate_endpoint()?;
        Ok(Self {
            endpoint: config.endpoint,
            transport,
        })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: BlockingTransport> NisApi for BlockingClient<T> {
    type Output<'a>
        = Result<T::Response, ClientError>
    where
        Self: 'a;

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn call(&self, call: Call) -> Self::Output<'_> {
        let request = prepare(&self.endpoint, call)?;
        self.transport.send(request)
    }
}
