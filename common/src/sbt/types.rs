// Soulbound Registry - Core Types

use serde::{Deserialize, Serialize};

use crate::crypto::Address;

/// Token identifier, allocated from a zero-based monotonic counter
pub type TokenId = u64;

/// A minted, not yet burned, soulbound token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token ID (never reused, even after burn)
    pub id: TokenId,

    /// Holder bound to this token until it is burned
    pub owner: Address,

    /// Opaque metadata URI, stored verbatim (may be empty)
    pub metadata_uri: String,
}

impl Token {
    pub fn new(id: TokenId, owner: Address, metadata_uri: String) -> Self {
        Self {
            id,
            owner,
            metadata_uri,
        }
    }
}

/// Lifecycle of a token id: NONEXISTENT -> MINTED -> BURNED
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenState {
    /// Id not allocated yet
    Nonexistent,
    /// Token exists and is bound to its owner
    Minted,
    /// Token was destroyed; terminal, the id is retired
    Burned,
}

/// Ownership-change record emitted by every successful mint and burn
///
/// `from` is the null address for a mint, `to` is the null address for a burn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub token_id: TokenId,
}

impl TransferEvent {
    pub fn minted(to: Address, token_id: TokenId) -> Self {
        Self {
            from: Address::zero(),
            to,
            token_id,
        }
    }

    pub fn burned(from: Address, token_id: TokenId) -> Self {
        Self {
            from,
            to: Address::zero(),
            token_id,
        }
    }

    pub fn is_mint(&self) -> bool {
        self.from.is_zero()
    }

    pub fn is_burn(&self) -> bool {
        self.to.is_zero()
    }
}
