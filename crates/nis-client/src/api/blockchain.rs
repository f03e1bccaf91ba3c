use serde::Serialize;

use crate::client::NisApi;
use crate::request::Call;
use crate::routes;

/// Block chain related requests.
pub struct BlockChain<'a, C> {
    client: &'a C,
}

#[derive(Serialize)]
struct BlockHeight {
    height: u64,
}

impl<'a, C: NisApi> BlockChain<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    pub fn prefix(&self) -> &'static str {
        routes::CHAIN_PREFIX
    }

    pub fn height(&self) -> C::Output<'a> {
        self.client.call(Call::route(&routes::CHAIN_HEIGHT))
    }

    pub fn score(&self) -> C::Output<'a> {
        self.client.call(Call::route(&routes::CHAIN_SCORE))
    }

    pub fn last_block(&self) -> C::Output<'a> {
        self.client.call(Call::route(&routes::CHAIN_LAST_BLOCK))
    }

    /// The block at `height`. The node answers with an error object when no
    /// such block exists.
    pub fn at_public(&self, height: u64) -> C::Output<'a> {
        self.client
            .call(Call::route(&routes::BLOCK_AT_PUBLIC).json(&BlockHeight { height }))
    }

    /// Up to 10 blocks following `height`.
    pub fn local_chain_blocks_after(&self, height: u64) -> C::Output<'a> {
        self.client
            .call(Call::route(&routes::LOCAL_CHAIN_BLOCKS_AFTER).json(&BlockHeight { height }))
    }
}
