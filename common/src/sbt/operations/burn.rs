// Registry Burn Operation

use crate::sbt::{AccessGuard, SbtError, SbtResult, TokenId, TransferEvent};

use super::{CallContext, SbtStorage};

/// Burn (destroy) a token
///
/// Burn authority is the registry administrator, not the holder. The id is
/// retired permanently: the counter is never rewound.
///
/// # Returns
/// - `Ok(TransferEvent)`: The ownership-change record of the destroyed token
/// - `Err(SbtError)`: Error code
pub fn burn<S: SbtStorage + ?Sized>(
    storage: &mut S,
    guard: &AccessGuard,
    ctx: &CallContext,
    token_id: TokenId,
) -> SbtResult<TransferEvent> {
    // Step 1: Authorization
    guard.authorize(&ctx.caller)?;

    // Step 2: Get token
    let token = storage.get_token(token_id)?.ok_or(SbtError::NotMinted)?;
    let total_supply = storage
        .get_total_supply()?
        .checked_sub(1)
        .ok_or(SbtError::Overflow)?;

    // Step 3: Execute burn
    storage.delete_token(token_id)?;
    storage.decrement_balance(&token.owner)?;
    storage.set_total_supply(total_supply)?;

    Ok(TransferEvent::burned(token.owner, token_id))
}
