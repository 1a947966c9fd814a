// Soulbound Registry - Error Codes
// This module defines all error codes for registry operations.
//
// Error Code Ranges:
// - 100-199: Token errors
// - 200-299: Permission errors
// - 300-399: Input validation errors
// - 900-999: System errors

use thiserror::Error;

/// Registry operation result type
pub type SbtResult<T> = Result<T, SbtError>;

/// Registry error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum SbtError {
    // ========================================
    // Token errors (100-199)
    // ========================================
    #[error("Token not minted")]
    NotMinted = 100,

    // ========================================
    // Permission errors (200-299)
    // ========================================
    #[error("Unauthorized")]
    Unauthorized = 200,

    // ========================================
    // Input validation errors (300-399)
    // ========================================
    #[error("Invalid recipient")]
    InvalidRecipient = 300,

    #[error("Length mismatch")]
    LengthMismatch = 301,

    #[error("Invalid administrator")]
    InvalidAdministrator = 302,

    #[error("Metadata URI too long")]
    MetadataTooLong = 303,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,

    #[error("Storage error")]
    StorageError = 901,

    #[error("Encoding error")]
    EncodingError = 902,

    #[error("Internal error")]
    Internal = 999,
}

impl SbtError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            100 => Some(Self::NotMinted),
            200 => Some(Self::Unauthorized),
            300 => Some(Self::InvalidRecipient),
            301 => Some(Self::LengthMismatch),
            302 => Some(Self::InvalidAdministrator),
            303 => Some(Self::MetadataTooLong),
            900 => Some(Self::Overflow),
            901 => Some(Self::StorageError),
            902 => Some(Self::EncodingError),
            999 => Some(Self::Internal),
            _ => None,
        }
    }
}
