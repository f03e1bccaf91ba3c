use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;

use crate::error::ClientError;

/// Base URL of a NIS node running on the local machine.
pub const LOCALHOST_ENDPOINT: &str = "http://127.0.0.1:7890";

/// Default bound on simultaneously in-flight async requests.
pub const DEFAULT_MAX_CONCURRENCY: usize = 100;

/// Client-wide settings, fixed at construction.
///
/// No timeout is applied unless one is set here or per call through
/// [`RequestOptions`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    /// Only consulted by the async client.
    pub max_concurrency: usize,
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub pool_max_idle_per_host: usize,
    pub tcp_nodelay: bool,
    pub user_agent: Option<String>,
    pub default_headers: Vec<(String, String)>,
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: LOCALHOST_ENDPOINT.to_owned(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            connect_timeout: None,
            timeout: None,
            pool_max_idle_per_host: 32,
            tcp_nodelay: true,
            user_agent: None,
            default_headers: Vec::new(),
            accept_invalid_certs: false,
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Check the endpoint is an HTTP(S) URL. The stored string is not
    /// rewritten; request URLs are built from it verbatim.
    pub fn validate_endpoint(&self) -> Result<(), ClientError> {
        let parsed = Url::parse(&self.endpoint).map_err(|e| ClientError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: format!("expected HTTP(S) URL ({e})"),
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ClientError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                reason: format!("unsupported scheme `{other}`; expected http or https"),
            }),
        }
    }

    pub(crate) fn header_map(&self) -> Result<HeaderMap, ClientError> {
        to_header_map(&self.default_headers)
    }
}

/// Per-call transport settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub timeout: Option<Duration>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn is_empty(&self) -> bool {
        self.timeout.is_none() && self.headers.is_empty()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub(crate) fn header_map(&self) -> Result<HeaderMap, ClientError> {
        to_header_map(&self.headers)
    }
}

fn to_header_map(headers: &[(String, String)]) -> Result<HeaderMap, ClientError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::InvalidConfig(format!("invalid header name `{name}`: {e}")))?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            ClientError::InvalidConfig(format!("invalid value for header `{name}`: {e}"))
        })?;
        map.append(name, value);
    }
    Ok(map)
}
