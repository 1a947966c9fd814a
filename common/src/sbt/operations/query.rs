// Registry Query Operations
// This module contains read-only query functions.

use crate::crypto::Address;
use crate::sbt::{SbtError, SbtResult, Token, TokenId, TokenState};

use super::SbtStorage;

/// Get the full record of an existing token
pub fn get_token<S: SbtStorage + ?Sized>(storage: &S, token_id: TokenId) -> SbtResult<Token> {
    storage.get_token(token_id)?.ok_or(SbtError::NotMinted)
}

/// Get the owner of a token
pub fn owner_of<S: SbtStorage + ?Sized>(storage: &S, token_id: TokenId) -> SbtResult<Address> {
    Ok(get_token(storage, token_id)?.owner)
}

/// Get the metadata URI of a token
pub fn token_uri<S: SbtStorage + ?Sized>(storage: &S, token_id: TokenId) -> SbtResult<String> {
    Ok(get_token(storage, token_id)?.metadata_uri)
}

/// Get the number of tokens currently bound to `holder`
///
/// Unknown holders have a zero balance.
pub fn balance_of<S: SbtStorage + ?Sized>(storage: &S, holder: &Address) -> SbtResult<u64> {
    storage.get_balance(holder)
}

/// Check if a token currently exists
pub fn exists<S: SbtStorage + ?Sized>(storage: &S, token_id: TokenId) -> SbtResult<bool> {
    storage.token_exists(token_id)
}

/// Resolve where a token id is in its lifecycle
///
/// Ids below the counter were allocated, so a missing record means burned.
pub fn token_state<S: SbtStorage + ?Sized>(
    storage: &S,
    token_id: TokenId,
) -> SbtResult<TokenState> {
    if storage.token_exists(token_id)? {
        return Ok(TokenState::Minted);
    }
    if token_id < storage.get_next_token_id()? {
        return Ok(TokenState::Burned);
    }
    Ok(TokenState::Nonexistent)
}

/// Number of currently existing tokens
pub fn total_supply<S: SbtStorage + ?Sized>(storage: &S) -> SbtResult<u64> {
    storage.get_total_supply()
}

/// Id the next mint will receive
pub fn next_token_id<S: SbtStorage + ?Sized>(storage: &S) -> SbtResult<TokenId> {
    storage.get_next_token_id()
}
