use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use bevy::log::debug;

use crate::data_cache::DataCache;
use crate::util_error::UtilError;

/// Independent [`DataCache`] slots keyed by a context.
///
/// A context that was never given data has no slot and reads as invalid.
/// [`invalidate`](Self::invalidate) empties every slot at once.
#[derive(Debug, Clone)]
pub struct ContextDataCache<K, T> {
    slots: HashMap<K, DataCache<T>>,
}

impl<K, T> Default for ContextDataCache<K, T> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, T> ContextDataCache<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` for `context`, creating the slot if needed. Other
    /// contexts are unaffected.
    pub fn set_data(&mut self, data: T, context: K) {
        self.slots.entry(context).or_default().set_data(data);
    }

    pub fn get_data<Q>(&self, context: &Q) -> Result<&T, UtilError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots
            .get(context)
            .ok_or(UtilError::InvalidState)?
            .get_data()
    }

    pub fn is_valid<Q>(&self, context: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(context).is_some_and(DataCache::is_valid)
    }

    /// Invalidates every context.
    pub fn invalidate(&mut self) {
        let discarded = self.slots.len();
        self.slots.clear();
        if discarded > 0 {
            debug!("ContextDataCache: invalidated {discarded} context slot(s)");
        }
    }

    /// Invalidates a single context, leaving the others valid.
    pub fn invalidate_context<Q>(&mut self, context: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.remove(context);
    }

    /// Number of contexts currently holding valid data.
    pub fn valid_count(&self) -> usize {
        self.slots.values().filter(|slot| slot.is_valid()).count()
    }
}
