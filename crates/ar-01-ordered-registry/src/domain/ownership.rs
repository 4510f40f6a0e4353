//! # Ownership Guard
//!
//! Single-owner access control. The owner is always nonzero and changes only
//! through a transfer authorized by the current owner.

use shared_types::{format_address, is_zero_address, Address, RegistryError};
use tracing::{info, warn};

/// Owner of one registry instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipGuard {
    owner: Address,
}

impl OwnershipGuard {
    /// Create a guard owned by `owner`.
    pub fn new(owner: Address) -> Result<Self, RegistryError> {
        if is_zero_address(&owner) {
            return Err(RegistryError::InvalidAddress(
                "owner cannot be the zero address".to_string(),
            ));
        }
        info!("[ar-01] OwnershipTransferred: 0x0 -> {}", format_address(&owner));
        Ok(Self { owner })
    }

    /// Current owner.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// True if `caller` is the owner.
    pub fn is_owner(&self, caller: &Address) -> bool {
        self.owner == *caller
    }

    /// Fails with `Unauthorized` unless `caller` is the owner.
    pub fn ensure_owner(&self, caller: &Address) -> Result<(), RegistryError> {
        if !self.is_owner(caller) {
            warn!(
                "[ar-01] Rejected owner-gated call from {}",
                format_address(caller)
            );
            return Err(RegistryError::unauthorized(caller));
        }
        Ok(())
    }

    /// Hand ownership to `new_owner`, returning the previous owner.
    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        new_owner: Address,
    ) -> Result<Address, RegistryError> {
        self.ensure_owner(caller)?;
        if is_zero_address(&new_owner) {
            return Err(RegistryError::InvalidAddress(
                "new owner cannot be the zero address".to_string(),
            ));
        }

        let previous = std::mem::replace(&mut self.owner, new_owner);
        info!(
            previous = %format_address(&previous),
            new = %format_address(&new_owner),
            "[ar-01] OwnershipTransferred"
        );
        Ok(previous)
    }
}
