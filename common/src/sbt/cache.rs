use indexmap::IndexMap;
use log::error;

use crate::{
    crypto::Address,
    sbt::{SbtError, SbtResult, Token, TokenId},
    serializer::ReaderError,
};

use super::operations::SbtStorage;

/// Backend seam of the registry
///
/// Getters return `None` for keys that were never written. `apply_changes`
/// must commit every staged write or none of them.
pub trait SbtStorageProvider {
    fn get_token(&self, token_id: TokenId) -> Result<Option<Token>, anyhow::Error>;

    fn get_balance(&self, holder: &Address) -> Result<Option<u64>, anyhow::Error>;

    fn get_next_token_id(&self) -> Result<Option<TokenId>, anyhow::Error>;

    fn get_total_supply(&self) -> Result<Option<u64>, anyhow::Error>;

    fn apply_changes(&mut self, changes: SbtCache) -> Result<(), anyhow::Error>;
}

/// Writes staged by one operation, in the order they were made
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SbtCache {
    /// `None` marks a deleted token
    pub tokens: IndexMap<TokenId, Option<Token>>,
    pub balances: IndexMap<Address, u64>,
    pub next_token_id: Option<TokenId>,
    pub total_supply: Option<u64>,
}

impl SbtCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
            && self.balances.is_empty()
            && self.next_token_id.is_none()
            && self.total_supply.is_none()
    }
}

/// Read-through overlay staging writes in an `SbtCache`
pub struct SbtCacheStorage<'a, P: SbtStorageProvider + ?Sized> {
    provider: &'a P,
    cache: SbtCache,
}

impl<'a, P: SbtStorageProvider + ?Sized> SbtCacheStorage<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            cache: SbtCache::new(),
        }
    }

    /// Consume the overlay, returning the staged writes
    pub fn into_cache(self) -> SbtCache {
        self.cache
    }

    fn map_err(err: anyhow::Error) -> SbtError {
        if err.downcast_ref::<ReaderError>().is_some() {
            if log::log_enabled!(log::Level::Error) {
                error!("Failed to decode stored registry record: {err:#}");
            }
            return SbtError::EncodingError;
        }
        if log::log_enabled!(log::Level::Error) {
            error!("Registry storage backend failed: {err:#}");
        }
        SbtError::StorageError
    }

    fn stored_token(&self, token_id: TokenId) -> SbtResult<Option<Token>> {
        self.provider.get_token(token_id).map_err(Self::map_err)
    }
}

impl<P: SbtStorageProvider + ?Sized> SbtStorage for SbtCacheStorage<'_, P> {
    fn get_token(&self, token_id: TokenId) -> SbtResult<Option<Token>> {
        if let Some(value) = self.cache.tokens.get(&token_id) {
            return Ok(value.clone());
        }
        self.stored_token(token_id)
    }

    fn set_token(&mut self, token: &Token) -> SbtResult<()> {
        self.cache.tokens.insert(token.id, Some(token.clone()));
        Ok(())
    }

    fn delete_token(&mut self, token_id: TokenId) -> SbtResult<()> {
        let stored = self.stored_token(token_id)?.is_some();
        if stored {
            self.cache.tokens.insert(token_id, None);
        } else {
            // Staged in this operation only: dropping the write is enough
            self.cache.tokens.shift_remove(&token_id);
        }
        Ok(())
    }

    fn get_balance(&self, holder: &Address) -> SbtResult<u64> {
        if let Some(balance) = self.cache.balances.get(holder) {
            return Ok(*balance);
        }
        Ok(self
            .provider
            .get_balance(holder)
            .map_err(Self::map_err)?
            .unwrap_or(0))
    }

    fn increment_balance(&mut self, holder: &Address) -> SbtResult<u64> {
        let balance = self
            .get_balance(holder)?
            .checked_add(1)
            .ok_or(SbtError::Overflow)?;
        self.cache.balances.insert(*holder, balance);
        Ok(balance)
    }

    fn decrement_balance(&mut self, holder: &Address) -> SbtResult<u64> {
        let balance = self
            .get_balance(holder)?
            .checked_sub(1)
            .ok_or(SbtError::Overflow)?;
        self.cache.balances.insert(*holder, balance);
        Ok(balance)
    }

    fn get_next_token_id(&self) -> SbtResult<TokenId> {
        if let Some(next) = self.cache.next_token_id {
            return Ok(next);
        }
        Ok(self
            .provider
            .get_next_token_id()
            .map_err(Self::map_err)?
            .unwrap_or(0))
    }

    fn set_next_token_id(&mut self, token_id: TokenId) -> SbtResult<()> {
        self.cache.next_token_id = Some(token_id);
        Ok(())
    }

    fn get_total_supply(&self) -> SbtResult<u64> {
        if let Some(supply) = self.cache.total_supply {
            return Ok(supply);
        }
        Ok(self
            .provider
            .get_total_supply()
            .map_err(Self::map_err)?
            .unwrap_or(0))
    }

    fn set_total_supply(&mut self, supply: u64) -> SbtResult<()> {
        self.cache.total_supply = Some(supply);
        Ok(())
    }
}
