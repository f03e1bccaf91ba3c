//! Blocking and async NIS clients.
//!
//! Both clients implement [`NisApi`], which carries the dispatcher
//! (`call`), the two root routes (`heartbeat`, `status`) and the facade
//! accessors. Facades are generic over the client, so one set of facade
//! methods serves both modes: with [`BlockingClient`] they return
//! `Result<Response, ClientError>`, with [`AsyncClient`] a boxed future of
//! the same.

mod blocking;
mod nonblocking;

pub use blocking::BlockingClient;
pub use nonblocking::AsyncClient;

use tracing::debug;

use crate::api::{Account, BlockChain, Debug, Namespace, Node, Transaction};
use crate::error::ClientError;
use crate::request::{Call, Request};
use crate::routes;

pub trait NisApi {
    /// What a dispatched call yields: a result for the blocking client, a
    /// future of a result for the async client.
    type Output<'a>
    where
        Self: 'a;

    fn endpoint(&self) -> &str;

    /// Issue one request to `endpoint + "/" + call.path()`. The response is
    /// returned untouched, whatever its status.
    fn call(&self, call: Call) -> Self::Output<'_>;

    /// Whether the node is up and able to answer.
    fn heartbeat(&self) -> Self::Output<'_> {
        self.call(Call::route(&routes::HEARTBEAT))
    }

    fn status(&self) -> Self::Output<'_> {
        self.call(Call::route(&routes::STATUS))
    }

    // Facades borrow the client and hold no state, so building one per
    // access costs a pointer copy.

    fn account(&self) -> Account<'_, Self>
    where
        Self: Sized,
    {
        Account::new(self)
    }

    fn blockchain(&self) -> BlockChain<'_, Self>
    where
        Self: Sized,
    {
        BlockChain::new(self)
    }

    fn node(&self) -> Node<'_, Self>
    where
        Self: Sized,
    {
        Node::new(self)
    }

    fn namespace(&self) -> Namespace<'_, Self>
    where
        Self: Sized,
    {
        Namespace::new(self)
    }

    fn transaction(&self) -> Transaction<'_, Self>
    where
        Self: Sized,
    {
        Transaction::new(self)
    }

    fn debug(&self) -> Debug<'_, Self>
    where
        Self: Sized,
    {
        Debug::new(self)
    }
}

fn prepare(endpoint: &str, call: Call) -> Result<Request, ClientError> {
    let request = call.into_request(endpoint)?;
    debug!(
        http.method = %request.method,
        http.url = %request.url,
        query = request.query.len(),
        body = request.body.is_some(),
        "nis call"
    );
    Ok(request)
}
