use std::sync::Arc;

use tokio::sync::RwLock;

use crate::crypto::Address;

use super::{
    MemoryStorage, SbtResult, SbtStorageProvider, Token, TokenId, TokenRegistry, TokenState,
    TransferEvent,
};

/// Registry handle shared between concurrent callers
///
/// Mutations hold the write lock for the whole operation, so a batch mint is
/// never interleaved with another mutation and readers only ever observe
/// fully applied states.
pub struct SharedRegistry<P: SbtStorageProvider = MemoryStorage> {
    inner: Arc<RwLock<TokenRegistry<P>>>,
}

impl<P: SbtStorageProvider> Clone for SharedRegistry<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: SbtStorageProvider> From<TokenRegistry<P>> for SharedRegistry<P> {
    fn from(registry: TokenRegistry<P>) -> Self {
        Self::new(registry)
    }
}

impl<P: SbtStorageProvider> SharedRegistry<P> {
    pub fn new(registry: TokenRegistry<P>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    pub async fn mint(
        &self,
        caller: &Address,
        recipient: Address,
        uri: impl Into<String>,
    ) -> SbtResult<TokenId> {
        self.inner.write().await.mint(caller, recipient, uri)
    }

    pub async fn batch_mint(
        &self,
        caller: &Address,
        recipients: Vec<Address>,
        uris: Vec<String>,
    ) -> SbtResult<Vec<TokenId>> {
        self.inner
            .write()
            .await
            .batch_mint(caller, recipients, uris)
    }

    pub async fn burn(&self, caller: &Address, token_id: TokenId) -> SbtResult<()> {
        self.inner.write().await.burn(caller, token_id)
    }

    pub async fn set_administrator(
        &self,
        caller: &Address,
        new_administrator: Address,
    ) -> SbtResult<Address> {
        self.inner
            .write()
            .await
            .set_administrator(caller, new_administrator)
    }

    pub async fn owner_of(&self, token_id: TokenId) -> SbtResult<Address> {
        self.inner.read().await.owner_of(token_id)
    }

    pub async fn balance_of(&self, holder: &Address) -> SbtResult<u64> {
        self.inner.read().await.balance_of(holder)
    }

    pub async fn token_uri(&self, token_id: TokenId) -> SbtResult<String> {
        self.inner.read().await.token_uri(token_id)
    }

    pub async fn token(&self, token_id: TokenId) -> SbtResult<Token> {
        self.inner.read().await.token(token_id)
    }

    pub async fn exists(&self, token_id: TokenId) -> SbtResult<bool> {
        self.inner.read().await.exists(token_id)
    }

    pub async fn token_state(&self, token_id: TokenId) -> SbtResult<TokenState> {
        self.inner.read().await.token_state(token_id)
    }

    pub async fn total_supply(&self) -> SbtResult<u64> {
        self.inner.read().await.total_supply()
    }

    pub async fn next_token_id(&self) -> SbtResult<TokenId> {
        self.inner.read().await.next_token_id()
    }

    pub async fn name(&self) -> String {
        self.inner.read().await.name().to_string()
    }

    pub async fn symbol(&self) -> String {
        self.inner.read().await.symbol().to_string()
    }

    pub async fn administrator(&self) -> Address {
        *self.inner.read().await.administrator()
    }

    pub async fn events(&self) -> Vec<TransferEvent> {
        self.inner.read().await.events().to_vec()
    }

    pub async fn drain_events(&self) -> Vec<TransferEvent> {
        self.inner.write().await.drain_events()
    }
}
