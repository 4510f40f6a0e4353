//! # Adapter Directory
//!
//! Outbound port resolving an adapter address to a live adapter handle, the
//! analogue of calling the contract deployed at that address. Registries
//! store addresses only; handles are looked up on every query.

use crate::entities::Address;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::encoding::format_address;

/// Resolves adapter addresses to adapter handles of type `A`
/// (typically a trait object such as `dyn ProtocolAdapter`).
pub trait AdapterDirectory<A: ?Sized>: Send + Sync {
    /// Returns the adapter deployed at `address`, if any.
    fn resolve(&self, address: &Address) -> Option<Arc<A>>;
}

impl<A: ?Sized, D: AdapterDirectory<A> + ?Sized> AdapterDirectory<A> for Arc<D> {
    fn resolve(&self, address: &Address) -> Option<Arc<A>> {
        (**self).resolve(address)
    }
}

/// In-memory directory backed by a `HashMap`.
pub struct InMemoryAdapterDirectory<A: ?Sized> {
    adapters: RwLock<HashMap<Address, Arc<A>>>,
}

impl<A: ?Sized + Send + Sync> InMemoryAdapterDirectory<A> {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            adapters: RwLock::new(HashMap::new()),
        }
    }

    /// Deploy `adapter` at `address`, returning the handle it replaced.
    pub fn deploy(&self, address: Address, adapter: Arc<A>) -> Option<Arc<A>> {
        debug!("[directory] Deploying adapter at {}", format_address(&address));
        self.adapters.write().insert(address, adapter)
    }

    /// Remove the adapter at `address`.
    pub fn withdraw(&self, address: &Address) -> Option<Arc<A>> {
        self.adapters.write().remove(address)
    }

    /// Number of deployed adapters.
    pub fn len(&self) -> usize {
        self.adapters.read().len()
    }

    /// True if nothing is deployed.
    pub fn is_empty(&self) -> bool {
        self.adapters.read().is_empty()
    }
}

impl<A: ?Sized + Send + Sync> Default for InMemoryAdapterDirectory<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized + Send + Sync> AdapterDirectory<A> for InMemoryAdapterDirectory<A> {
    fn resolve(&self, address: &Address) -> Option<Arc<A>> {
        self.adapters.read().get(address).cloned()
    }
}
