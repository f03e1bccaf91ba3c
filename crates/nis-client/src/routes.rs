//! Static catalog of NIS API routes.
//!
//! Each [`Route`] names one remote operation: its HTTP verb, the path
//! appended to the endpoint, and the query-parameter (GET) or body-key (POST)
//! names the facade fills in. Paths are relative to the endpoint and are
//! joined with a single `/`, never normalized.

use reqwest::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
}

impl Verb {
    pub fn method(self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Post => Method::POST,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub verb: Verb,
    pub path: &'static str,
    /// Query names for GET routes, top-level body keys for POST routes.
    /// Empty for routes without arguments or with a caller-supplied body.
    pub params: &'static [&'static str],
}

impl Route {
    const fn get(name: &'static str, path: &'static str, params: &'static [&'static str]) -> Self {
        Self {
            name,
            verb: Verb::Get,
            path,
            params,
        }
    }

    const fn post(name: &'static str, path: &'static str, params: &'static [&'static str]) -> Self {
        Self {
            name,
            verb: Verb::Post,
            path,
            params,
        }
    }
}

// ==============================================================================
// Client
// ==============================================================================

pub const HEARTBEAT: Route = Route::get("heartbeat", "heartbeat", &[]);
pub const STATUS: Route = Route::get("status", "status", &[]);

// ==============================================================================
// Account
// ==============================================================================

pub const ACCOUNT_PREFIX: &str = "account/";

pub const ACCOUNT_GENERATE: Route = Route::get("account.generate", "account/generate", &[]);
pub const ACCOUNT_GET: Route = Route::get("account.get", "account/get", &["address"]);
pub const ACCOUNT_GET_FROM_PUBLIC_KEY: Route = Route::get(
    "account.get_from_public_key",
    "account/get/from-public-key",
    &["publicKey"],
);
pub const ACCOUNT_GET_FORWARDED: Route = Route::get(
    "account.get_forwarded",
    "account/get/forwarded",
    &["address"],
);
pub const ACCOUNT_GET_FORWARDED_FROM_PUBLIC_KEY: Route = Route::get(
    "account.get_forwarded_from_public_key",
    "account/get/forwarded/from-public-key",
    &["publicKey"],
);
pub const ACCOUNT_STATUS: Route = Route::get("account.status", "account/status", &["address"]);
pub const ACCOUNT_TRANSFERS_INCOMING: Route = Route::get(
    "account.transfers_incoming",
    "account/transfers/incoming",
    &["address", "hash", "id"],
);
pub const ACCOUNT_TRANSFERS_OUTGOING: Route = Route::get(
    "account.transfers_outgoing",
    "account/transfers/outgoing",
    &["address", "hash", "id"],
);
pub const ACCOUNT_TRANSFERS_ALL: Route = Route::get(
    "account.transfers_all",
    "account/transfers/all",
    &["address", "hash", "id"],
);
pub const ACCOUNT_UNCONFIRMED_TRANSACTIONS: Route = Route::get(
    "account.unconfirmed_transactions",
    "account/unconfirmedTransactions",
    &["address"],
);
pub const LOCAL_TRANSFERS_INCOMING: Route = Route::post(
    "account.decoded_transfers_incoming",
    "local/transfers/incoming",
    &["value", "hash", "id"],
);
pub const LOCAL_TRANSFERS_OUTGOING: Route = Route::post(
    "account.decoded_transfers_outgoing",
    "local/transfers/outgoing",
    &["value", "hash", "id"],
);
pub const LOCAL_TRANSFERS_ALL: Route = Route::post(
    "account.decoded_transfers_all",
    "local/transfers/all",
    &["value", "hash", "id"],
);
pub const ACCOUNT_HARVESTS: Route = Route::get(
    "account.harvests",
    "account/harvests",
    &["address", "hash"],
);
pub const ACCOUNT_IMPORTANCES: Route =
    Route::get("account.importances", "account/importances", &[]);
pub const ACCOUNT_NAMESPACE_PAGE: Route = Route::get(
    "account.namespace_page",
    "account/namespace/page",
    &["address", "parent", "id", "pageSize"],
);
pub const ACCOUNT_MOSAIC_DEFINITION_PAGE: Route = Route::get(
    "account.mosaic_definition_page",
    "account/mosaic/definition/page",
    &["address", "parent", "id"],
);
pub const ACCOUNT_MOSAIC_OWNED: Route = Route::get(
    "account.mosaic_owned",
    "account/mosaic/owned",
    &["address"],
);
pub const ACCOUNT_UNLOCK: Route = Route::post("account.unlock", "account/unlock", &["value"]);
pub const ACCOUNT_LOCK: Route = Route::post("account.lock", "account/lock", &["value"]);
pub const ACCOUNT_UNLOCKED_INFO: Route =
    Route::post("account.unlocked_info", "account/unlocked/info", &[]);
pub const ACCOUNT_HISTORICAL_GET: Route = Route::get(
    "account.historical_get",
    "account/historical/get",
    &["address", "startHeight", "endHeight", "increment"],
);

// ==============================================================================
// Block Chain
// ==============================================================================

pub const CHAIN_PREFIX: &str = "chain/";

pub const CHAIN_HEIGHT: Route = Route::get("blockchain.height", "chain/height", &[]);
pub const CHAIN_SCORE: Route = Route::get("blockchain.score", "chain/score", &[]);
pub const CHAIN_LAST_BLOCK: Route = Route::get("blockchain.last_block", "chain/last-block", &[]);
pub const BLOCK_AT_PUBLIC: Route =
    Route::post("blockchain.at_public", "block/at/public", &["height"]);
pub const LOCAL_CHAIN_BLOCKS_AFTER: Route = Route::post(
    "blockchain.local_chain_blocks_after",
    "local/chain/blocks-after",
    &["height"],
);

// ==============================================================================
// Node
// ==============================================================================

pub const NODE_PREFIX: &str = "node/";

pub const NODE_INFO: Route = Route::get("node.info", "node/info", &[]);
pub const NODE_EXTENDED_INFO: Route = Route::get("node.extended_info", "node/extended-info", &[]);
pub const NODE_PEER_LIST_ALL: Route = Route::get("node.peer_list_all", "node/peer-list/all", &[]);
pub const NODE_PEER_LIST_REACHABLE: Route = Route::get(
    "node.peer_list_reachable",
    "node/peer-list/reachable",
    &[],
);
pub const NODE_PEER_LIST_ACTIVE: Route =
    Route::get("node.peer_list_active", "node/peer-list/active", &[]);
pub const NODE_MAX_CHAIN_HEIGHT: Route = Route::get(
    "node.max_chain_height",
    "node/active-peers/max-chain-height",
    &[],
);
pub const NODE_EXPERIENCES: Route = Route::get("node.experiences", "node/experiences", &[]);
pub const NODE_BOOT: Route = Route::post("node.boot", "node/boot", &[]);

// ==============================================================================
// Namespace
// ==============================================================================

pub const NAMESPACE_PREFIX: &str = "namespace/";

/// Page size sent by the namespace paging routes when the caller gives none.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

pub const NAMESPACE_ROOT_PAGE: Route = Route::get(
    "namespace.root_page",
    "namespace/root/page",
    &["id", "pageSize"],
);
pub const NAMESPACE: Route = Route::get("namespace.namespace", "namespace/", &["namespace"]);
pub const NAMESPACE_MOSAIC_DEFINITION_PAGE: Route = Route::get(
    "namespace.mosaic_definition_page",
    "namespace/mosaic/definition/page",
    &["namespace", "id", "pagesize"],
);

// ==============================================================================
// Transaction
// ==============================================================================

pub const TRANSACTION_PREFIX: &str = "transaction/";

pub const TRANSACTION_PREPARE_ANNOUNCE: Route = Route::post(
    "transaction.prepare_announce",
    "transaction/prepare-announce",
    &[],
);
pub const TRANSACTION_ANNOUNCE: Route =
    Route::post("transaction.announce", "transaction/announce", &[]);

// ==============================================================================
// Debug
// ==============================================================================

pub const DEBUG_PREFIX: &str = "debug/";

pub const DEBUG_TIME_SYNCHRONIZATION: Route = Route::get(
    "debug.time_synchronization",
    "debug/time-synchronization",
    &[],
);
pub const DEBUG_CONNECTIONS_INCOMING: Route = Route::get(
    "debug.connections_incoming",
    "debug/connections/incoming",
    &[],
);
pub const DEBUG_CONNECTIONS_OUTGOING: Route = Route::get(
    "debug.connections_outgoing",
    "debug/connections/outgoing",
    &[],
);
pub const DEBUG_TIMERS: Route = Route::get("debug.timers", "debug/timers", &[]);

/// Every route the facades expose, in facade order.
pub const ALL: &[Route] = &[
    HEARTBEAT,
    STATUS,
    ACCOUNT_GENERATE,
    ACCOUNT_GET,
    ACCOUNT_GET_FROM_PUBLIC_KEY,
    ACCOUNT_GET_FORWARDED,
    ACCOUNT_GET_FORWARDED_FROM_PUBLIC_KEY,
    ACCOUNT_STATUS,
    ACCOUNT_TRANSFERS_INCOMING,
    ACCOUNT_TRANSFERS_OUTGOING,
    ACCOUNT_TRANSFERS_ALL,
    ACCOUNT_UNCONFIRMED_TRANSACTIONS,
    LOCAL_TRANSFERS_INCOMING,
    LOCAL_TRANSFERS_OUTGOING,
    LOCAL_TRANSFERS_ALL,
    ACCOUNT_HARVESTS,
    ACCOUNT_IMPORTANCES,
    ACCOUNT_NAMESPACE_PAGE,
    ACCOUNT_MOSAIC_DEFINITION_PAGE,
    ACCOUNT_MOSAIC_OWNED,
    ACCOUNT_UNLOCK,
    ACCOUNT_LOCK,
    ACCOUNT_UNLOCKED_INFO,
    ACCOUNT_HISTORICAL_GET,
    CHAIN_HEIGHT,
    CHAIN_SCORE,
    CHAIN_LAST_BLOCK,
    BLOCK_AT_PUBLIC,
    LOCAL_CHAIN_BLOCKS_AFTER,
    NODE_INFO,
    NODE_EXTENDED_INFO,
    NODE_PEER_LIST_ALL,
    NODE_PEER_LIST_REACHABLE,
    NODE_PEER_LIST_ACTIVE,
    NODE_MAX_CHAIN_HEIGHT,
    NODE_EXPERIENCES,
    NODE_BOOT,
    NAMESPACE_ROOT_PAGE,
    NAMESPACE,
    NAMESPACE_MOSAIC_DEFINITION_PAGE,
    TRANSACTION_PREPARE_ANNOUNCE,
    TRANSACTION_ANNOUNCE,
    DEBUG_TIME_SYNCHRONIZATION,
    DEBUG_CONNECTIONS_INCOMING,
    DEBUG_CONNECTIONS_OUTGOING,
    DEBUG_TIMERS,
];

/// Look up a route by its operation name (`"account.get"`, `"heartbeat"`, ...).
pub fn by_name(name: &str) -> Option<&'static Route> {
    ALL.iter().find(|route| route.name == name)
}
