// Soulbound Token Registry
// This module provides a non-transferable token ledger.
//
// Features:
// - Single administrator gating every mutation
// - Single and batch (all-or-nothing) minting with sequential ids
// - Administrator-only burning; ids are never reused
// - Ownership-change records for every mint and burn
//
// Module Structure:
// - error: Error codes and types
// - types: Core data structures (Token, TransferEvent, ...)
// - storage: Storage key prefixes and record encoding
// - cache: Backend trait and staged-write overlay
// - operations: Core operation logic (mint, burn, query)
// - registry: TokenRegistry, the public entry point

mod access;
mod cache;
mod error;
mod memory;
pub mod operations;
mod registry;
#[cfg(all(feature = "tokio", not(target_arch = "wasm32")))]
mod shared;
mod storage;
mod types;

pub use access::*;
pub use cache::*;
pub use error::*;
pub use memory::*;
pub use registry::*;
#[cfg(all(feature = "tokio", not(target_arch = "wasm32")))]
pub use shared::*;
pub use storage::*;
pub use types::*;
