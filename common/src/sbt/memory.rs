// In-memory storage backend keyed by the registry storage schema.

use std::collections::BTreeMap;

use anyhow::Context;
use log::trace;

use crate::{
    crypto::Address,
    sbt::{
        balance_key, next_token_id_key, token_key, total_supply_key, SbtCache,
        SbtStorageProvider, Token, TokenId,
    },
    serializer::Serializer,
};

/// Ordered byte-keyed store holding encoded registry records
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw encoded value stored under `key`
    pub fn get_raw(&self, key: &[u8]) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    fn load<T: Serializer>(&self, key: &[u8]) -> Result<Option<T>, anyhow::Error> {
        match self.entries.get(key) {
            Some(bytes) => {
                let value = T::from_bytes(bytes)
                    .with_context(|| format!("decoding key {}", hex::encode(key)))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }
}

impl SbtStorageProvider for MemoryStorage {
    fn get_token(&self, token_id: TokenId) -> Result<Option<Token>, anyhow::Error> {
        self.load(&token_key(token_id))
    }

    fn get_balance(&self, holder: &Address) -> Result<Option<u64>, anyhow::Error> {
        self.load(&balance_key(holder))
    }

    fn get_next_token_id(&self) -> Result<Option<TokenId>, anyhow::Error> {
        self.load(&next_token_id_key())
    }

    fn get_total_supply(&self) -> Result<Option<u64>, anyhow::Error> {
        self.load(&total_supply_key())
    }

    fn apply_changes(&mut self, changes: SbtCache) -> Result<(), anyhow::Error> {
        // Encode everything first; the map is only touched once nothing can fail
        let mut writes: Vec<(Vec<u8>, Option<Vec<u8>>)> = Vec::new();
        for (token_id, token) in &changes.tokens {
            writes.push((token_key(*token_id), token.as_ref().map(Serializer::to_bytes)));
        }
        for (holder, balance) in &changes.balances {
            let value = (*balance > 0).then(|| balance.to_bytes());
            writes.push((balance_key(holder), value));
        }
        if let Some(next) = changes.next_token_id {
            writes.push((next_token_id_key(), Some(next.to_bytes())));
        }
        if let Some(supply) = changes.total_supply {
            writes.push((total_supply_key(), Some(supply.to_bytes())));
        }

        if log::log_enabled!(log::Level::Trace) {
            trace!("Applying {} registry writes", writes.len());
        }

        for (key, value) in writes {
            match value {
                Some(value) => {
                    self.entries.insert(key, value);
                }
                None => {
                    self.entries.remove(&key);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::ReaderError;

    fn holder() -> Address {
        Address::new([6u8; 32])
    }

    #[test]
    fn test_empty_storage_reads_none() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.get_token(0).unwrap(), None);
        assert_eq!(storage.get_balance(&holder()).unwrap(), None);
        assert_eq!(storage.get_next_token_id().unwrap(), None);
        assert_eq!(storage.get_total_supply().unwrap(), None);
    }

    #[test]
    fn test_apply_changes_uses_schema_keys() {
        let mut storage = MemoryStorage::new();
        let token = Token::new(3, holder(), "uri".to_string());

        let mut changes = SbtCache::new();
        changes.tokens.insert(3, Some(token.clone()));
        changes.balances.insert(holder(), 1);
        changes.next_token_id = Some(4);
        changes.total_supply = Some(1);
        storage.apply_changes(changes).unwrap();

        assert_eq!(storage.len(), 4);
        assert_eq!(
            storage.get_raw(&token_key(3)),
            Some(token.to_bytes().as_slice())
        );
        assert_eq!(
            storage.get_raw(&balance_key(&holder())),
            Some(1u64.to_bytes().as_slice())
        );
        assert_eq!(storage.get_token(3).unwrap(), Some(token));
        assert_eq!(storage.get_next_token_id().unwrap(), Some(4));
    }

    #[test]
    fn test_tombstones_and_zero_balances_are_removed() {
        let mut storage = MemoryStorage::new();

        let mut changes = SbtCache::new();
        changes
            .tokens
            .insert(0, Some(Token::new(0, holder(), String::new())));
        changes.balances.insert(holder(), 1);
        storage.apply_changes(changes).unwrap();

        let mut changes = SbtCache::new();
        changes.tokens.insert(0, None);
        changes.balances.insert(holder(), 0);
        storage.apply_changes(changes).unwrap();

        assert!(storage.is_empty());
    }

    #[test]
    fn test_corrupted_record_reports_reader_error() {
        let mut storage = MemoryStorage::new();
        storage.entries.insert(token_key(0), vec![1, 2, 3]);

        let err = storage.get_token(0).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ReaderError>(),
            Some(&ReaderError::InvalidSize)
        );
    }
}
