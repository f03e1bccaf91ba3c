#![doc = include_str!("../README.md")]

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod request;
pub mod routes;
pub mod scheduler;
pub mod transport;

#[cfg(test)]
mod test_util;

pub use client::{AsyncClient, BlockingClient, NisApi};
pub use config::{ClientConfig, RequestOptions};
pub use error::ClientError;
pub use request::{Call, Request};
pub use scheduler::Scheduler;
pub use transport::{BlockingHttpTransport, BlockingTransport, HttpTransport, Transport};
