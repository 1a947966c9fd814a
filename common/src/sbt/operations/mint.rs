// Registry Mint Operations
// This module contains the single and batch mint logic.

use crate::crypto::Address;
use crate::sbt::{AccessGuard, SbtError, SbtResult, Token, TransferEvent};

use super::validation::{validate_batch_lengths, validate_metadata_uri_len, validate_recipient};
use super::{CallContext, SbtStorage};

// ========================================
// Mint Parameters
// ========================================

/// Parameters for minting a single token
#[derive(Clone, Debug)]
pub struct MintParams {
    /// Recipient address
    pub to: Address,
    /// Metadata URI (opaque, may be empty)
    pub metadata_uri: String,
}

impl MintParams {
    pub fn new(to: Address) -> Self {
        Self {
            to,
            metadata_uri: String::new(),
        }
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.metadata_uri = uri.into();
        self
    }
}

// ========================================
// Mint Operation
// ========================================

/// Mint a single token
///
/// # Returns
/// - `Ok(TransferEvent)`: The ownership-change record carrying the new token ID
/// - `Err(SbtError)`: Error code
pub fn mint<S: SbtStorage + ?Sized>(
    storage: &mut S,
    guard: &AccessGuard,
    ctx: &CallContext,
    params: MintParams,
) -> SbtResult<TransferEvent> {
    // Step 1: Authorization
    guard.authorize(&ctx.caller)?;

    // Step 2: Input validation
    validate_recipient(&params.to)?;
    validate_metadata_uri_len(params.metadata_uri.len())?;

    // Step 3: Allocate token ID
    let token_id = storage.get_next_token_id()?;
    let next_token_id = token_id.checked_add(1).ok_or(SbtError::Overflow)?;
    let total_supply = storage
        .get_total_supply()?
        .checked_add(1)
        .ok_or(SbtError::Overflow)?;

    // Step 4: Write token and bookkeeping
    write_token(storage, Token::new(token_id, params.to, params.metadata_uri))?;
    storage.set_next_token_id(next_token_id)?;
    storage.set_total_supply(total_supply)?;

    Ok(TransferEvent::minted(params.to, token_id))
}

fn write_token<S: SbtStorage + ?Sized>(storage: &mut S, token: Token) -> SbtResult<()> {
    storage.set_token(&token)?;
    storage.increment_balance(&token.owner)?;
    Ok(())
}

// ========================================
// Batch Mint Operation
// ========================================

/// Parameters for batch minting: recipients and URIs paired by position
#[derive(Clone, Debug, Default)]
pub struct BatchMintParams {
    pub recipients: Vec<Address>,
    pub metadata_uris: Vec<String>,
}

impl BatchMintParams {
    pub fn new(recipients: Vec<Address>, metadata_uris: Vec<String>) -> Self {
        Self {
            recipients,
            metadata_uris,
        }
    }

    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }
}

/// Batch mint tokens with strictly sequential ids
///
/// Every entry is validated before anything is written, so an invalid
/// recipient anywhere fails the whole batch.
///
/// # Returns
/// - `Ok(Vec<TransferEvent>)`: One record per minted token, in input order
/// - `Err(SbtError)`: Error code (entire batch fails)
pub fn batch_mint<S: SbtStorage + ?Sized>(
    storage: &mut S,
    guard: &AccessGuard,
    ctx: &CallContext,
    params: BatchMintParams,
) -> SbtResult<Vec<TransferEvent>> {
    // Step 1: Authorization
    guard.authorize(&ctx.caller)?;

    // Step 2: Validate the whole batch
    validate_batch_lengths(params.recipients.len(), params.metadata_uris.len())?;
    for recipient in &params.recipients {
        validate_recipient(recipient)?;
    }
    for uri in &params.metadata_uris {
        validate_metadata_uri_len(uri.len())?;
    }

    // Step 3: Reserve the id range
    let count = params.len() as u64;
    let first_token_id = storage.get_next_token_id()?;
    let next_token_id = first_token_id
        .checked_add(count)
        .ok_or(SbtError::Overflow)?;
    let total_supply = storage
        .get_total_supply()?
        .checked_add(count)
        .ok_or(SbtError::Overflow)?;

    // Step 4: Mint in input order
    let mut events = Vec::with_capacity(params.len());
    let entries = params.recipients.into_iter().zip(params.metadata_uris);
    for (token_id, (to, metadata_uri)) in (first_token_id..next_token_id).zip(entries) {
        write_token(storage, Token::new(token_id, to, metadata_uri))?;
        events.push(TransferEvent::minted(to, token_id));
    }

    storage.set_next_token_id(next_token_id)?;
    storage.set_total_supply(total_supply)?;

    Ok(events)
}
