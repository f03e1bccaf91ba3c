use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::request::Request;

use super::{BlockingTransport, Transport};

// ==============================================================================
// Request Builder Plumbing
// ==============================================================================
//
// `reqwest::RequestBuilder` and `reqwest::blocking::RequestBuilder` share
// method names but no trait, so the mapping from `Request` is a macro.

macro_rules! build_http_request {
    ($client:expr, $request:expr) => {{
        let request = $request;
        let mut builder = $client.request(request.method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if !request.options.is_empty() {
            builder = builder.headers(request.options.header_map()?);
            if let Some(timeout) = request.options.timeout {
                builder = builder.timeout(timeout);
            }
        }
        builder
    }};
}

// ==============================================================================
// Async Transport
// ==============================================================================

/// Async transport over a pooled [`reqwest::Client`].
///
/// The pool lives as long as the transport; dropping it closes idle
/// connections.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .tcp_nodelay(config.tcp_nodelay)
            .default_headers(config.header_map()?)
            .danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an already-configured `reqwest` client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    type Response = reqwest::Response;

    async fn send(&self, request: Request) -> Result<reqwest::Response, ClientError> {
        let method = request.method.clone();
        let url = request.url.clone();
        let builder = build_http_request!(self.client, request);

        match builder.send().await {
            Ok(response) => {
                debug!(http.method = %method, http.url = %url, status = %response.status(), "nis response");
                Ok(response)
            }
            Err(err) => {
                warn!(http.method = %method, http.url = %url, error = %err, "nis transport failure");
                Err(ClientError::Transport(err))
            }
        }
    }
}

// ==============================================================================
// Blocking Transport
// ==============================================================================

/// Blocking transport over a pooled [`reqwest::blocking::Client`].
///
/// Must not be created or dropped from inside an async runtime; that is a
/// `reqwest::blocking` restriction.
#[derive(Debug, Clone)]
pub struct BlockingHttpTransport {
    client: reqwest::blocking::Client,
}

impl BlockingHttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        // reqwest::blocking defaults to a 30s timeout; pass ours through so
        // an unset timeout really means none.
        let mut builder = reqwest::blocking::Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .tcp_nodelay(config.tcp_nodelay)
            .default_headers(config.header_map()?)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .timeout(config.timeout);
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl BlockingTransport for BlockingHttpTransport {
    type Response = reqwest::blocking::Response;

    fn send(&self, request: Request) -> Result<reqwest::blocking::Response, ClientError> {
        let method = request.method.clone();
        let url = request.url.clone();
        let builder = build_http_request!(self.client, request);

        match builder.send() {
            Ok(response) => {
                debug!(http.method = %method, http.url = %url, status = %response.status(), "nis response");
                Ok(response)
            }
            Err(err) => {
                warn!(http.method = %method, http.url = %url, error = %err, "nis transport failure");
                Err(ClientError::Transport(err))
            }
        }
    }
}
