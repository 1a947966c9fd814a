// Registry Input Validation Helpers

use crate::crypto::Address;
use crate::sbt::{SbtError, SbtResult};

/// Validate recipient address (must be non-null)
pub fn validate_recipient(recipient: &Address) -> SbtResult<()> {
    if recipient.is_zero() {
        return Err(SbtError::InvalidRecipient);
    }
    Ok(())
}

/// Validate that batch recipients and URIs pair up one to one
pub fn validate_batch_lengths(recipients: usize, uris: usize) -> SbtResult<()> {
    if recipients != uris {
        return Err(SbtError::LengthMismatch);
    }
    Ok(())
}

/// Validate that a metadata URI of `len` bytes fits its u32 length prefix
pub fn validate_metadata_uri_len(len: usize) -> SbtResult<()> {
    u32::try_from(len).map_err(|_| SbtError::MetadataTooLong)?;
    Ok(())
}
