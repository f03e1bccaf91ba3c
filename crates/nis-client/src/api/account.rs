use serde::Serialize;

use crate::client::NisApi;
use crate::request::Call;
use crate::routes::{self, Route};

/// Account related requests.
pub struct Account<'a, C> {
    client: &'a C,
}

/// Body of the `local/transfers/*` routes. Unset cursors are left out
/// rather than sent as `null`.
#[derive(Serialize)]
struct DecodedTransfers<'k> {
    value: &'k str,
    #[serde(skip_serializing_if = "Option::is_none")]
    hash: Option<&'k str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
}

#[derive(Serialize)]
struct PrivateKey<'k> {
    value: &'k str,
}

impl<'a, C: NisApi> Account<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    pub fn prefix(&self) -> &'static str {
        routes::ACCOUNT_PREFIX
    }

    /// Generate a new key pair on the node.
    pub fn generate(&self) -> C::Output<'a> {
        self.client.call(Call::route(&routes::ACCOUNT_GENERATE))
    }

    pub fn get(&self, address: &str) -> C::Output<'a> {
        self.by_address(&routes::ACCOUNT_GET, address)
    }

    pub fn get_from_public_key(&self, public_key: &str) -> C::Output<'a> {
        self.client.call(
            Call::route(&routes::ACCOUNT_GET_FROM_PUBLIC_KEY).param("publicKey", public_key),
        )
    }

    /// Account data of the account that `address` is the delegate
    /// (remote harvesting) account for.
    pub fn get_forwarded(&self, address: &str) -> C::Output<'a> {
        self.by_address(&routes::ACCOUNT_GET_FORWARDED, address)
    }

    pub fn get_forwarded_from_public_key(&self, public_key: &str) -> C::Output<'a> {
        self.client.call(
            Call::route(&routes::ACCOUNT_GET_FORWARDED_FROM_PUBLIC_KEY)
                .param("publicKey", public_key),
        )
    }

    pub fn status(&self, address: &str) -> C::Output<'a> {
        self.by_address(&routes::ACCOUNT_STATUS, address)
    }

    /// Incoming transfers, newest first, at most 25 per page. `hash` and `id`
    /// page backwards from a known transaction.
    pub fn transfers_incoming(
        &self,
        address: &str,
        hash: Option<&str>,
        id: Option<u64>,
    ) -> C::Output<'a> {
        self.transfers(&routes::ACCOUNT_TRANSFERS_INCOMING, address, hash, id)
    }

    pub fn transfers_outgoing(
        &self,
        address: &str,
        hash: Option<&str>,
        id: Option<u64>,
    ) -> C::Output<'a> {
        self.transfers(&routes::ACCOUNT_TRANSFERS_OUTGOING, address, hash, id)
    }

    pub fn transfers_all(&self, address: &str, hash: Option<&str>, id: Option<u64>) -> C::Output<'a> {
        self.transfers(&routes::ACCOUNT_TRANSFERS_ALL, address, hash, id)
    }

    pub fn unconfirmed_transactions(&self, address: &str) -> C::Output<'a> {
        self.by_address(&routes::ACCOUNT_UNCONFIRMED_TRANSACTIONS, address)
    }

    /// Like [`Self::transfers_incoming`], but the node decrypts encrypted
    /// messages with `private_key`. Only send this to a node you trust.
    pub fn decoded_transfers_incoming(
        &self,
        private_key: &str,
        hash: Option<&str>,
        id: Option<u64>,
    ) -> C::Output<'a> {
        self.decoded_transfers(&routes::LOCAL_TRANSFERS_INCOMING, private_key, hash, id)
    }

    pub fn decoded_transfers_outgoing(
        &self,
        private_key: &str,
        hash: Option<&str>,
        id: Option<u64>,
    ) -> C::Output<'a> {
        self.decoded_transfers(&routes::LOCAL_TRANSFERS_OUTGOING, private_key, hash, id)
    }

    pub fn decoded_transfers_all(
        &self,
        private_key: &str,
        hash: Option<&str>,
        id: Option<u64>,
    ) -> C::Output<'a> {
        self.decoded_transfers(&routes::LOCAL_TRANSFERS_ALL, private_key, hash, id)
    }

    pub fn harvests(&self, address: &str, hash: Option<&str>) -> C::Output<'a> {
        self.client.call(
            Call::route(&routes::ACCOUNT_HARVESTS)
                .param("address", address)
                .opt_param("hash", hash),
        )
    }

    pub fn importances(&self) -> C::Output<'a> {
        self.client.call(Call::route(&routes::ACCOUNT_IMPORTANCES))
    }

    /// Namespaces owned by `address`, optionally only children of `parent`.
    pub fn namespace_page(
        &self,
        address: &str,
        parent: Option<&str>,
        id: Option<u64>,
        page_size: Option<u32>,
    ) -> C::Output<'a> {
        self.client.call(
            Call::route(&routes::ACCOUNT_NAMESPACE_PAGE)
                .param("address", address)
                .opt_param("parent", parent)
                .opt_param("id", id)
                .opt_param("pageSize", page_size),
        )
    }

    pub fn mosaic_definition_page(
        &self,
        address: &str,
        parent: Option<&str>,
        id: Option<u64>,
    ) -> C::Output<'a> {
        self.client.call(
            Call::route(&routes::ACCOUNT_MOSAIC_DEFINITION_PAGE)
                .param("address", address)
                .opt_param("parent", parent)
                .opt_param("id", id),
        )
    }

    pub fn mosaic_owned(&self, address: &str) -> C::Output<'a> {
        self.by_address(&routes::ACCOUNT_MOSAIC_OWNED, address)
    }

    /// Start delegated harvesting for the account of `private_key`.
    pub fn unlock(&self, private_key: &str) -> C::Output<'a> {
        self.client.call(
            Call::route(&routes::ACCOUNT_UNLOCK).json(&PrivateKey { value: private_key }),
        )
    }

    /// Stop delegated harvesting for the account of `private_key`.
    pub fn lock(&self, private_key: &str) -> C::Output<'a> {
        self.client
            .call(Call::route(&routes::ACCOUNT_LOCK).json(&PrivateKey { value: private_key }))
    }

    pub fn unlocked_info(&self) -> C::Output<'a> {
        self.client.call(Call::route(&routes::ACCOUNT_UNLOCKED_INFO))
    }

    /// Historical account state sampled every `increment` blocks. Requires
    /// the node's `HISTORICAL_ACCOUNT_DATA` feature; the node rejects
    /// ranges over 1000 data points.
    pub fn historical_get(
        &self,
        address: &str,
        start_height: u64,
        end_height: u64,
        increment: u64,
    ) -> C::Output<'a> {
        self.client.call(
            Call::route(&routes::ACCOUNT_HISTORICAL_GET)
                .param("address", address)
                .param("startHeight", start_height)
                .param("endHeight", end_height)
                .param("increment", increment),
        )
    }

    fn by_address(&self, route: &Route, address: &str) -> C::Output<'a> {
        self.client.call(Call::route(route).param("address", address))
    }

    fn transfers(
        &self,
        route: &Route,
        address: &str,
        hash: Option<&str>,
        id: Option<u64>,
    ) -> C::Output<'a> {
        self.client.call(
            Call::route(route)
                .param("address", address)
                .opt_param("hash", hash)
                .opt_param("id", id),
        )
    }

    fn decoded_transfers(
        &self,
        route: &Route,
        private_key: &str,
        hash: Option<&str>,
        id: Option<u64>,
    ) -> C::Output<'a> {
        self.client.call(Call::route(route).json(&DecodedTransfers {
            value: private_key,
            hash,
            id,
        }))
    }
}
