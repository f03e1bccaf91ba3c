use serde::Serialize;

use crate::client::NisApi;
use crate::request::Call;
use crate::routes;

/// Node and peer related requests. While the node has not been booted,
/// most of these answer with an error object.
pub struct Node<'a, C> {
    client: &'a C,
}

impl<'a, C: NisApi> Node<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    pub fn prefix(&self) -> &'static str {
        routes::NODE_PREFIX
    }

    pub fn info(&self) -> C::Output<'a> {
        self.client.call(Call::route(&routes::NODE_INFO))
    }

    pub fn extended_info(&self) -> C::Output<'a> {
        self.client.call(Call::route(&routes::NODE_EXTENDED_INFO))
    }

    pub fn peer_list_all(&self) -> C::Output<'a> {
        self.client.call(Call::route(&routes::NODE_PEER_LIST_ALL))
    }

    pub fn peer_list_reachable(&self) -> C::Output<'a> {
        self.client.call(Call::route(&routes::NODE_PEER_LIST_REACHABLE))
    }

    /// Peers currently selected for broadcasts.
    pub fn peer_list_active(&self) -> C::Output<'a> {
        self.client.call(Call::route(&routes::NODE_PEER_LIST_ACTIVE))
    }

    /// Highest chain height reported by any active peer.
    pub fn max_chain_height(&self) -> C::Output<'a> {
        self.client.call(Call::route(&routes::NODE_MAX_CHAIN_HEIGHT))
    }

    pub fn experiences(&self) -> C::Output<'a> {
        self.client.call(Call::route(&routes::NODE_EXPERIENCES))
    }

    /// Boot the node with a `BootNodeRequest` object, sent as-is.
    pub fn boot<T: Serialize + ?Sized>(&self, boot_node_request: &T) -> C::Output<'a> {
        self.client
            .call(Call::route(&routes::NODE_BOOT).json(boot_node_request))
    }
}
