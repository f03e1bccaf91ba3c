//! Request construction shared by the blocking and async clients.
//!
//! A [`Call`] is endpoint-agnostic: verb, relative path, query pairs, JSON
//! body and per-call options. [`Call::into_request`] binds it to an endpoint
//! by plain concatenation (`endpoint + "/" + path`) and produces the
//! [`Request`] handed to a transport.

use std::fmt::Display;

use reqwest::{Method, Url};
use serde::Serialize;

use crate::config::RequestOptions;
use crate::error::ClientError;
use crate::routes::Route;

#[derive(Debug)]
pub struct Call {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Result<serde_json::Value, serde_json::Error>>,
    options: RequestOptions,
}

impl Call {
    /// Any verb is accepted and forwarded unchanged.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            options: RequestOptions::default(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn route(route: &Route) -> Self {
        Self::new(route.verb.method(), route.path)
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// `None` values are dropped, so they never appear in the query string.
    pub fn opt_param<V: Display>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Attach a JSON body. Encoding errors are reported when the call is
    /// dispatched, before any I/O.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.body = Some(serde_json::to_value(body));
        self
    }

    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn into_request(self, endpoint: &str) -> Result<Request, ClientError> {
        let body = self.body.transpose()?;
        Ok(Request {
            method: self.method,
            url: join_url(endpoint, &self.path),
            query: self.query,
            body,
            options: self.options,
        })
    }
}

/// A fully-bound request as seen by a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub options: RequestOptions,
}

impl Request {
    /// The URL with the query string appended, encoded the way the HTTP
    /// transport encodes it (`application/x-www-form-urlencoded`).
    pub fn url_with_query(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        match Url::parse(&self.url) {
            Ok(mut url) => {
                url.query_pairs_mut().extend_pairs(
                    self.query
                        .iter()
                        .map(|(name, value)| (name.as_str(), value.as_str())),
                );
                url.into()
            }
            Err(_) => self.url.clone(),
        }
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// `endpoint + "/" + path`, with no slash normalization on either side.
pub fn join_url(endpoint: &str, path: &str) -> String {
    let mut url = String::with_capacity(endpoint.len() + 1 + path.len());
    url.push_str(endpoint);
    url.push('/');
    url.push_str(path);
    url
}
