// Soulbound Registry - Access Control
// A single administrator identity gates every state-changing operation.

use log::info;

use crate::crypto::Address;

use super::error::{SbtError, SbtResult};

/// Holds the registry administrator and authorizes privileged calls
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessGuard {
    administrator: Address,
}

impl AccessGuard {
    /// Create a guard owned by `administrator` (must not be the null address)
    pub fn new(administrator: Address) -> SbtResult<Self> {
        if administrator.is_zero() {
            return Err(SbtError::InvalidAdministrator);
        }
        Ok(Self { administrator })
    }

    /// Succeeds iff `caller` is the current administrator
    #[inline]
    pub fn authorize(&self, caller: &Address) -> SbtResult<()> {
        if *caller != self.administrator {
            return Err(SbtError::Unauthorized);
        }
        Ok(())
    }

    pub fn administrator(&self) -> &Address {
        &self.administrator
    }

    /// Hand the administrator role over to `new_administrator`
    ///
    /// Returns the previous administrator.
    pub fn set_administrator(
        &mut self,
        caller: &Address,
        new_administrator: Address,
    ) -> SbtResult<Address> {
        self.authorize(caller)?;
        if new_administrator.is_zero() {
            return Err(SbtError::InvalidAdministrator);
        }

        let previous = std::mem::replace(&mut self.administrator, new_administrator);
        if log::log_enabled!(log::Level::Info) {
            info!(
                "Administrator changed from {} to {}",
                previous, self.administrator
            );
        }
        Ok(previous)
    }
}
