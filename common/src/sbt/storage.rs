// Soulbound Registry - Storage Schema
// This module defines storage key prefixes and serialization for registry records.
//
// Storage Key Structure:
// - Token:          sbt:tok:<token_id>
// - Holder Balance: sbt:bal:<holder>
// - Id Counter:     sbt:next
// - Total Supply:   sbt:supply

use crate::crypto::Address;
use crate::serializer::{Reader, ReaderError, Serializer, Writer};

use super::types::{Token, TokenId};

// ========================================
// Storage Key Prefixes
// ========================================

/// Storage key prefixes for registry data
pub mod prefixes {
    /// Token record prefix
    pub const TOKEN: &[u8] = b"sbt:tok:";

    /// Holder balance prefix (for balance_of queries)
    pub const BALANCE: &[u8] = b"sbt:bal:";

    /// Next token id counter
    pub const NEXT_TOKEN_ID: &[u8] = b"sbt:next";

    /// Number of existing tokens
    pub const TOTAL_SUPPLY: &[u8] = b"sbt:supply";
}

// ========================================
// Storage Key Generation Functions
// ========================================

/// Generate storage key for a token
pub fn token_key(token_id: TokenId) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefixes::TOKEN.len() + 8);
    key.extend_from_slice(prefixes::TOKEN);
    key.extend_from_slice(&token_id.to_be_bytes());
    key
}

/// Generate storage key for a holder balance
pub fn balance_key(holder: &Address) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefixes::BALANCE.len() + 32);
    key.extend_from_slice(prefixes::BALANCE);
    key.extend_from_slice(holder.as_bytes());
    key
}

/// Generate storage key for the id counter
pub fn next_token_id_key() -> Vec<u8> {
    prefixes::NEXT_TOKEN_ID.to_vec()
}

/// Generate storage key for the total supply
pub fn total_supply_key() -> Vec<u8> {
    prefixes::TOTAL_SUPPLY.to_vec()
}

// ========================================
// Serializer Implementations
// ========================================

impl Serializer for Token {
    fn write(&self, writer: &mut Writer) {
        writer.write_u64(&self.id);
        self.owner.write(writer);
        writer.write_string(&self.metadata_uri);
    }

    fn read(reader: &mut Reader) -> Result<Self, ReaderError> {
        let id = reader.read_u64()?;
        let owner = Address::read(reader)?;
        let metadata_uri = reader.read_string()?;
        Ok(Token {
            id,
            owner,
            metadata_uri,
        })
    }

    fn size(&self) -> usize {
        8 + self.owner.size() + 4 + self.metadata_uri.len()
    }
}
