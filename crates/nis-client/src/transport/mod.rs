//! HTTP transport seam.
//!
//! Defines the [`Transport`] (async) and [`BlockingTransport`] traits the
//! clients dispatch through, the `reqwest`-backed implementations
//! ([`HttpTransport`], [`BlockingHttpTransport`]) and a recording test mock
//! (`mock::RecordingTransport`).

mod http_adapter;
#[cfg(test)]
pub mod mock;

pub use http_adapter::{BlockingHttpTransport, HttpTransport};

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::request::Request;

/// Sends one request and hands back whatever the HTTP layer produced.
///
/// Implementations must not inspect the status code: only failures to
/// complete the exchange (connect, DNS, TLS, timeout) are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    type Response: Send;

    async fn send(&self, request: Request) -> Result<Self::Response, ClientError>;
}

/// Synchronous counterpart of [`Transport`]; `send` blocks the calling thread.
pub trait BlockingTransport: Send + Sync {
    type Response;

    fn send(&self, request: Request) -> Result<Self::Response, ClientError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    type Response = T::Response;

    async fn send(&self, request: Request) -> Result<Self::Response, ClientError> {
        (**self).send(request).await
    }
}

impl<T: BlockingTransport + ?Sized> BlockingTransport for Arc<T> {
    type Response = T::Response;

    fn send(&self, request: Request) -> Result<Self::Response, ClientError> {
        (**self).send(request)
    }
}
