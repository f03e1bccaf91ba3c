use serde::Serialize;

use crate::client::NisApi;
use crate::request::Call;
use crate::routes;

/// Transaction announcement. Both routes take caller-built objects and
/// forward them as the JSON body without inspection.
pub struct Transaction<'a, C> {
    client: &'a C,
}

impl<'a, C: NisApi> Transaction<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    pub fn prefix(&self) -> &'static str {
        routes::TRANSACTION_PREFIX
    }

    /// Let the node sign and announce a `RequestPrepareAnnounce` object.
    /// This ships the private key to the node; only use it against a
    /// trusted local NIS.
    pub fn prepare_announce<T: Serialize + ?Sized>(&self, request: &T) -> C::Output<'a> {
        self.client
            .call(Call::route(&routes::TRANSACTION_PREPARE_ANNOUNCE).json(request))
    }

    /// Announce an already signed `RequestAnnounce` object.
    pub fn announce<T: Serialize + ?Sized>(&self, request_announce: &T) -> C::Output<'a> {
        self.client
            .call(Call::route(&routes::TRANSACTION_ANNOUNCE).json(request_announce))
    }
}
