// Registry Operations Module
// This module contains the core state-transition logic of the registry.
//
// The operations are storage-agnostic:
// - Storage operations are abstracted via the SbtStorage trait
// - The caller identity is passed in a CallContext
// - Authorization is checked against an AccessGuard before any write

mod burn;
mod mint;
mod query;
mod validation;

pub use burn::*;
pub use mint::*;
pub use query::*;
pub use validation::*;

use crate::crypto::Address;
use crate::sbt::{SbtResult, Token, TokenId};

// ========================================
// Storage Trait (for dependency injection)
// ========================================

/// Abstract read/write storage interface for registry operations
pub trait SbtStorage {
    // Token operations
    fn get_token(&self, token_id: TokenId) -> SbtResult<Option<Token>>;
    fn set_token(&mut self, token: &Token) -> SbtResult<()>;
    fn delete_token(&mut self, token_id: TokenId) -> SbtResult<()>;

    fn token_exists(&self, token_id: TokenId) -> SbtResult<bool> {
        Ok(self.get_token(token_id)?.is_some())
    }

    // Balance operations
    fn get_balance(&self, holder: &Address) -> SbtResult<u64>;
    fn increment_balance(&mut self, holder: &Address) -> SbtResult<u64>;
    fn decrement_balance(&mut self, holder: &Address) -> SbtResult<u64>;

    // Counters
    fn get_next_token_id(&self) -> SbtResult<TokenId>;
    fn set_next_token_id(&mut self, token_id: TokenId) -> SbtResult<()>;
    fn get_total_supply(&self) -> SbtResult<u64>;
    fn set_total_supply(&mut self, supply: u64) -> SbtResult<()>;
}

// ========================================
// Call Context
// ========================================

/// Identity of the party invoking an operation
#[derive(Clone, Copy, Debug)]
pub struct CallContext {
    pub caller: Address,
}

impl CallContext {
    pub fn new(caller: Address) -> Self {
        Self { caller }
    }
}
