//! # Ordered Registry
//!
//! Generic list with policy-checked appends and swap-pop removal.
//!
//! ## Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `add` | O(1) amortized |
//! | `remove_at` | O(1) (+ O(log k) for k duplicates of the touched values) |
//! | `remove_by_value` | O(1) expected |
//! | `contains` / `index_of` | O(1) expected |
//!
//! A position index (`value -> set of slots`) is kept in step with the
//! backing `Vec` so that lookups never scan the list.

use super::errors::ListError;
use shared_types::{format_address, format_bytes32, Address, Bytes32};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Values that can be stored in an [`OrderedRegistry`].
pub trait RegistryEntry: Copy + Eq + Hash + Debug {
    /// True for the null value (all-zero bytes).
    fn is_null(&self) -> bool;

    /// Human-readable form used in errors and logs.
    fn describe(&self) -> String;
}

impl RegistryEntry for Address {
    fn is_null(&self) -> bool {
        self.iter().all(|b| *b == 0)
    }

    fn describe(&self) -> String {
        format_address(self)
    }
}

impl RegistryEntry for Bytes32 {
    fn is_null(&self) -> bool {
        self.iter().all(|b| *b == 0)
    }

    fn describe(&self) -> String {
        format_bytes32(self)
    }
}

/// Constraints checked on every append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPolicy<T> {
    /// Reject values already present.
    pub unique: bool,
    /// Reject the null value.
    pub reject_null: bool,
    /// Values that may never be added.
    pub reserved: Vec<T>,
}

impl<T> EntryPolicy<T> {
    /// Unique, non-null entries (adapter ids).
    pub fn unique_non_null() -> Self {
        Self {
            unique: true,
            reject_null: true,
            reserved: Vec::new(),
        }
    }

    /// Non-null entries, duplicates allowed (asset lists).
    pub fn non_null() -> Self {
        Self {
            unique: false,
            reject_null: true,
            reserved: Vec::new(),
        }
    }

    /// Unique entries, null allowed (adapter names, where the empty name is
    /// meaningful).
    pub fn unique() -> Self {
        Self {
            unique: true,
            reject_null: false,
            reserved: Vec::new(),
        }
    }

    /// Adds a reserved value.
    pub fn with_reserved(mut self, value: T) -> Self {
        self.reserved.push(value);
        self
    }
}

/// Append-ordered list with swap-pop removal.
#[derive(Debug, Clone)]
pub struct OrderedRegistry<T: RegistryEntry> {
    items: Vec<T>,
    positions: HashMap<T, BTreeSet<usize>>,
    policy: EntryPolicy<T>,
}

impl<T: RegistryEntry> OrderedRegistry<T> {
    /// Create an empty list governed by `policy`.
    pub fn new(policy: EntryPolicy<T>) -> Self {
        Self {
            items: Vec::new(),
            positions: HashMap::new(),
            policy,
        }
    }

    /// The policy this list enforces.
    pub fn policy(&self) -> &EntryPolicy<T> {
        &self.policy
    }

    /// Check `item` against the policy without modifying the list.
    pub fn validate(&self, item: &T) -> Result<(), ListError> {
        if self.policy.reject_null && item.is_null() {
            return Err(ListError::InvalidEntry(item.describe()));
        }
        if self.policy.reserved.contains(item) {
            return Err(ListError::Reserved(item.describe()));
        }
        if self.policy.unique && self.contains(item) {
            return Err(ListError::AlreadyRegistered(item.describe()));
        }
        Ok(())
    }

    /// Append `item`, returning its index.
    pub fn add(&mut self, item: T) -> Result<usize, ListError> {
        self.validate(&item)?;

        let index = self.items.len();
        self.items.push(item);
        self.positions.entry(item).or_default().insert(index);
        Ok(index)
    }

    /// Append every item, or none of them if any violates the policy
    /// (including duplicates within `items` for unique lists).
    pub fn extend<I>(&mut self, items: I) -> Result<(), ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();

        let mut batch = HashSet::with_capacity(items.len());
        for item in &items {
            self.validate(item)?;
            if self.policy.unique && !batch.insert(*item) {
                return Err(ListError::AlreadyRegistered(item.describe()));
            }
        }

        for item in items {
            let index = self.items.len();
            self.items.push(item);
            self.positions.entry(item).or_default().insert(index);
        }
        Ok(())
    }

    /// Remove the entry at `index` by swapping in the last entry.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let len = self.items.len();
        if index >= len {
            return Err(ListError::IndexOutOfRange { index, len });
        }

        let last = len - 1;
        let removed = self.items.swap_remove(index);
        self.forget_position(&removed, index);

        if index != last {
            let moved = self.items[index];
            self.forget_position(&moved, last);
            self.positions.entry(moved).or_default().insert(index);
        }

        Ok(removed)
    }

    /// Remove the first occurrence of `item`, returning the index it held.
    pub fn remove_by_value(&mut self, item: &T) -> Result<usize, ListError> {
        let index = self
            .index_of(item)
            .ok_or_else(|| ListError::NotFound(item.describe()))?;
        self.remove_at(index)?;
        Ok(index)
    }

    /// True if `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Lowest index holding `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.positions
            .get(item)
            .and_then(|slots| slots.iter().next().copied())
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Snapshot of the current order.
    pub fn to_list(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Borrow the current order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate in current order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn forget_position(&mut self, item: &T, index: usize) {
        if let Some(slots) = self.positions.get_mut(item) {
            slots.remove(&index);
            if slots.is_empty() {
                self.positions.remove(item);
            }
        }
    }
}

impl<'a, T: RegistryEntry> IntoIterator for &'a OrderedRegistry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
