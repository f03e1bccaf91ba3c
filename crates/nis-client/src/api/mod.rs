//! Resource facades, one per NIS API category.
//!
//! A facade borrows the client and a fixed path prefix. Its methods map
//! their arguments onto the query string (GET) or JSON body (POST) of one
//! catalog route and return the client's output unmodified. Nothing is
//! validated locally; the node is the only authority on argument shape.

mod account;
mod blockchain;
mod debug;
mod namespace;
mod node;
mod transaction;

pub use account::Account;
pub use blockchain::BlockChain;
pub use debug::Debug;
pub use namespace::Namespace;
pub use node::Node;
pub use transaction::Transaction;
