// Soulbound Token Registry
//
// Every mutation follows the same path: authorize against the AccessGuard,
// run the operation against a staging overlay, commit the staged writes in
// one `apply_changes` call, then append the ownership-change records.
// A failure at any step leaves the provider and the event log untouched.

use log::{debug, error, trace};

use crate::{config::RegistryConfig, crypto::Address};

use super::{
    operations::{self, BatchMintParams, CallContext, MintParams},
    AccessGuard, MemoryStorage, SbtCacheStorage, SbtError, SbtResult, SbtStorageProvider, Token,
    TokenId, TokenState, TransferEvent,
};

/// Non-transferable token registry
///
/// There is deliberately no transfer operation: a token keeps the owner it
/// was minted to until the administrator burns it.
pub struct TokenRegistry<P: SbtStorageProvider = MemoryStorage> {
    name: String,
    symbol: String,
    guard: AccessGuard,
    provider: P,
    events: Vec<TransferEvent>,
}

impl TokenRegistry<MemoryStorage> {
    /// Create an empty in-memory registry
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        administrator: Address,
    ) -> SbtResult<Self> {
        Self::with_provider(name, symbol, administrator, MemoryStorage::new())
    }
}

impl<P: SbtStorageProvider> TokenRegistry<P> {
    /// Create a registry on top of an existing storage backend
    pub fn with_provider(
        name: impl Into<String>,
        symbol: impl Into<String>,
        administrator: Address,
        provider: P,
    ) -> SbtResult<Self> {
        Ok(Self {
            name: name.into(),
            symbol: symbol.into(),
            guard: AccessGuard::new(administrator)?,
            provider,
            events: Vec::new(),
        })
    }

    pub fn from_config(config: &RegistryConfig, provider: P) -> SbtResult<Self> {
        Self::with_provider(
            config.name.clone(),
            config.symbol.clone(),
            config.administrator,
            provider,
        )
    }

    // ========================================
    // Mutations
    // ========================================

    /// Mint one token to `recipient`, returning its id
    pub fn mint(
        &mut self,
        caller: &Address,
        recipient: Address,
        uri: impl Into<String>,
    ) -> SbtResult<TokenId> {
        let params = MintParams::new(recipient).with_uri(uri);
        let event = self.execute(caller, |storage, guard, ctx| {
            operations::mint(storage, guard, ctx, params)
        })?;

        if log::log_enabled!(log::Level::Debug) {
            debug!("Minted token {} to {}", event.token_id, event.to);
        }
        self.events.push(event);
        Ok(event.token_id)
    }

    /// Mint one token per (recipient, uri) pair, all or nothing
    pub fn batch_mint(
        &mut self,
        caller: &Address,
        recipients: Vec<Address>,
        uris: Vec<String>,
    ) -> SbtResult<Vec<TokenId>> {
        let params = BatchMintParams::new(recipients, uris);
        let events = self.execute(caller, |storage, guard, ctx| {
            operations::batch_mint(storage, guard, ctx, params)
        })?;

        let ids: Vec<TokenId> = events.iter().map(|event| event.token_id).collect();
        if log::log_enabled!(log::Level::Debug) {
            debug!("Batch minted {} tokens: {:?}", ids.len(), ids);
        }
        self.events.extend(events);
        Ok(ids)
    }

    /// Destroy a token; only the administrator may burn
    pub fn burn(&mut self, caller: &Address, token_id: TokenId) -> SbtResult<()> {
        let event = self.execute(caller, |storage, guard, ctx| {
            operations::burn(storage, guard, ctx, token_id)
        })?;

        if log::log_enabled!(log::Level::Debug) {
            debug!("Burned token {} held by {}", token_id, event.from);
        }
        self.events.push(event);
        Ok(())
    }

    /// Hand the administrator role over, returning the previous administrator
    pub fn set_administrator(
        &mut self,
        caller: &Address,
        new_administrator: Address,
    ) -> SbtResult<Address> {
        self.guard.set_administrator(caller, new_administrator)
    }

    fn execute<R, F>(&mut self, caller: &Address, operation: F) -> SbtResult<R>
    where
        F: FnOnce(&mut SbtCacheStorage<'_, P>, &AccessGuard, &CallContext) -> SbtResult<R>,
    {
        let ctx = CallContext::new(*caller);
        let mut storage = SbtCacheStorage::new(&self.provider);
        let result = operation(&mut storage, &self.guard, &ctx)?;

        let changes = storage.into_cache();
        if log::log_enabled!(log::Level::Trace) {
            trace!(
                "Committing {} token and {} balance writes",
                changes.tokens.len(),
                changes.balances.len()
            );
        }
        self.provider.apply_changes(changes).map_err(|err| {
            if log::log_enabled!(log::Level::Error) {
                error!("Failed to commit registry changes: {err:#}");
            }
            SbtError::StorageError
        })?;

        Ok(result)
    }

    // ========================================
    // Queries
    // ========================================

    pub fn owner_of(&self, token_id: TokenId) -> SbtResult<Address> {
        operations::owner_of(&self.reader(), token_id)
    }

    /// Number of live tokens held by `holder`; fails only on backend errors
    pub fn balance_of(&self, holder: &Address) -> SbtResult<u64> {
        operations::balance_of(&self.reader(), holder)
    }

    pub fn token_uri(&self, token_id: TokenId) -> SbtResult<String> {
        operations::token_uri(&self.reader(), token_id)
    }

    pub fn token(&self, token_id: TokenId) -> SbtResult<Token> {
        operations::get_token(&self.reader(), token_id)
    }

    pub fn exists(&self, token_id: TokenId) -> SbtResult<bool> {
        operations::exists(&self.reader(), token_id)
    }

    pub fn token_state(&self, token_id: TokenId) -> SbtResult<TokenState> {
        operations::token_state(&self.reader(), token_id)
    }

    pub fn total_supply(&self) -> SbtResult<u64> {
        operations::total_supply(&self.reader())
    }

    pub fn next_token_id(&self) -> SbtResult<TokenId> {
        operations::next_token_id(&self.reader())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn administrator(&self) -> &Address {
        self.guard.administrator()
    }

    /// Ownership-change records emitted so far, oldest first
    pub fn events(&self) -> &[TransferEvent] {
        &self.events
    }

    /// Take the pending ownership-change records, leaving the log empty
    pub fn drain_events(&mut self) -> Vec<TransferEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn reader(&self) -> SbtCacheStorage<'_, P> {
        SbtCacheStorage::new(&self.provider)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;
    use crate::sbt::SbtCache;

    fn admin() -> Address {
        Address::new([1u8; 32])
    }

    fn holder(seed: u8) -> Address {
        Address::new([seed; 32])
    }

    fn registry() -> TokenRegistry {
        TokenRegistry::new("Soulbound Token", "SBT", admin()).unwrap()
    }

    // Backend that refuses every commit
    #[derive(Default)]
    struct ReadOnlyStorage {
        inner: MemoryStorage,
    }

    impl SbtStorageProvider for ReadOnlyStorage {
        fn get_token(&self, token_id: TokenId) -> Result<Option<Token>, anyhow::Error> {
            self.inner.get_token(token_id)
        }

        fn get_balance(&self, holder: &Address) -> Result<Option<u64>, anyhow::Error> {
            self.inner.get_balance(holder)
        }

        fn get_next_token_id(&self) -> Result<Option<TokenId>, anyhow::Error> {
            self.inner.get_next_token_id()
        }

        fn get_total_supply(&self) -> Result<Option<u64>, anyhow::Error> {
            self.inner.get_total_supply()
        }

        fn apply_changes(&mut self, _changes: SbtCache) -> Result<(), anyhow::Error> {
            Err(anyhow!("storage is read-only"))
        }
    }

    #[test]
    fn test_name_symbol_administrator() {
        let registry = registry();
        assert_eq!(registry.name(), "Soulbound Token");
        assert_eq!(registry.symbol(), "SBT");
        assert_eq!(registry.administrator(), &admin());
        assert!(registry.events().is_empty());
    }

    #[test]
    fn test_null_administrator_rejected() {
        assert!(matches!(
            TokenRegistry::new("Soulbound Token", "SBT", Address::zero()),
            Err(SbtError::InvalidAdministrator)
        ));
    }

    #[test]
    fn test_mint_emits_transfer_from_null() {
        let mut registry = registry();
        let id = registry.mint(&admin(), holder(2), "123").unwrap();

        assert_eq!(id, 0);
        assert_eq!(registry.events(), &[TransferEvent::minted(holder(2), 0)]);
        assert_eq!(
            registry.token(0),
            Ok(Token::new(0, holder(2), "123".to_string()))
        );
    }

    #[test]
    fn test_burn_emits_transfer_to_null() {
        let mut registry = registry();
        registry.mint(&admin(), holder(2), "1").unwrap();
        registry.burn(&admin(), 0).unwrap();

        assert_eq!(
            registry.drain_events(),
            vec![
                TransferEvent::minted(holder(2), 0),
                TransferEvent::burned(holder(2), 0)
            ]
        );
        assert!(registry.events().is_empty());
        assert_eq!(registry.token_state(0), Ok(TokenState::Burned));
    }

    #[test]
    fn test_failed_operations_emit_nothing() {
        let mut registry = registry();
        assert_eq!(
            registry.mint(&holder(2), holder(2), "x"),
            Err(SbtError::Unauthorized)
        );
        assert_eq!(registry.burn(&admin(), 0), Err(SbtError::NotMinted));
        assert_eq!(
            registry.batch_mint(&admin(), vec![holder(2)], vec![]),
            Err(SbtError::LengthMismatch)
        );
        assert!(registry.events().is_empty());
        assert!(registry.provider().is_empty());
    }

    #[test]
    fn test_batch_mint_events_in_order() {
        let mut registry = registry();
        registry.mint(&admin(), holder(3), "first").unwrap();

        let ids = registry
            .batch_mint(
                &admin(),
                vec![holder(4), holder(5)],
                vec!["a".to_string(), "b".to_string()],
            )
            .unwrap();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(
            &registry.events()[1..],
            &[
                TransferEvent::minted(holder(4), 1),
                TransferEvent::minted(holder(5), 2)
            ]
        );
    }

    #[test]
    fn test_new_administrator_takes_over_minting() {
        let mut registry = registry();
        assert_eq!(registry.set_administrator(&admin(), holder(7)), Ok(admin()));

        assert_eq!(
            registry.mint(&admin(), holder(2), "x"),
            Err(SbtError::Unauthorized)
        );
        assert_eq!(registry.mint(&holder(7), holder(2), "x"), Ok(0));
        assert_eq!(registry.events().len(), 1);
    }

    #[test]
    fn test_commit_failure_leaves_state_unchanged() {
        let storage = ReadOnlyStorage::default();
        let mut registry =
            TokenRegistry::with_provider("Soulbound Token", "SBT", admin(), storage).unwrap();

        assert_eq!(
            registry.mint(&admin(), holder(2), "x"),
            Err(SbtError::StorageError)
        );
        assert_eq!(registry.next_token_id(), Ok(0));
        assert_eq!(registry.balance_of(&holder(2)), Ok(0));
        assert!(registry.events().is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = RegistryConfig::new("My token", "MySBT", admin());
        let registry = TokenRegistry::from_config(&config, MemoryStorage::new()).unwrap();
        assert_eq!(registry.name(), "My token");
        assert_eq!(registry.symbol(), "MySBT");
        assert_eq!(registry.administrator(), &admin());
    }
}
