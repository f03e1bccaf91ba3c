use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::error::ClientError;
use crate::request::Request;

use super::{BlockingTransport, Transport};

/// Canned response returned by the mock transports.
#[derive(Debug, Clone, PartialEq)]
pub struct MockResponse {
    pub status: u16,
    pub url: String,
}

/// A transport that records every request it receives and answers with a
/// fixed status. Implements both transport traits so the blocking and async
/// clients can share route tests.
pub struct RecordingTransport {
    status: u16,
    requests: Mutex<Vec<Request>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::with_status(200)
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().expect("mock lock poisoned").clone()
    }

    pub fn last(&self) -> Request {
        self.requests()
            .pop()
            .expect("mock transport received no request")
    }

    fn record(&self, request: Request) -> MockResponse {
        let response = MockResponse {
            status: self.status,
            url: request.url.clone(),
        };
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .push(request);
        response
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    type Response = MockResponse;

    async fn send(&self, request: Request) -> Result<MockResponse, ClientError> {
        Ok(self.record(request))
    }
}

impl BlockingTransport for RecordingTransport {
    type Response = MockResponse;

    fn send(&self, request: Request) -> Result<MockResponse, ClientError> {
        Ok(self.record(request))
    }
}

/// A transport that parks every request until the test releases it, while
/// tracking how many requests are inside `send` at once.
pub struct HoldingTransport {
    release: Semaphore,
    started: AtomicUsize,
    finished: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl HoldingTransport {
    pub fn new() -> Self {
        Self {
            release: Semaphore::new(0),
            started: AtomicUsize::new(0),
            finished: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Let `count` parked requests complete.
    pub fn release(&self, count: usize) {
        self.release.add_permits(count);
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Default for HoldingTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HoldingTransport {
    type Response = MockResponse;

    async fn send(&self, request: Request) -> Result<MockResponse, ClientError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        self.release
            .acquire()
            .await
            .expect("release semaphore is never closed")
            .forget();

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.finished.fetch_add(1, Ordering::SeqCst);
        Ok(MockResponse {
            status: 200,
            url: request.url,
        })
    }
}
