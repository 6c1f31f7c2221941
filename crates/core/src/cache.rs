//! Process-wide accessor cache.
//!
//! Entries are keyed by (type name, member name), created on first request
//! and never updated or evicted afterwards. Population is serialized per
//! type, so unrelated types never contend.
//!
//! The root type bounding supertype walks belongs to the cache: every
//! resolver sharing a cache probes with the same root.

use crate::accessor::Accessor;
use crate::config::ResolverConfig;
use dashmap::DashMap;
use stache_api::ROOT_TYPE;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Identity of a runtime type: its shape name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeKey(Arc<str>);

impl TypeKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeKey {
    fn from(name: &str) -> Self {
        TypeKey(Arc::from(name))
    }
}

impl Borrow<str> for TypeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Name → accessor table of one type.
#[derive(Debug)]
pub struct TypeTable {
    key: TypeKey,
    members: RwLock<HashMap<Arc<str>, Accessor>>,
    probes: AtomicU64,
}

impl TypeTable {
    fn new(key: TypeKey) -> Self {
        Self {
            key,
            members: RwLock::new(HashMap::new()),
            probes: AtomicU64::new(0),
        }
    }

    pub fn type_key(&self) -> &TypeKey {
        &self.key
    }

    /// Cached accessor for `name`, without probing.
    pub fn get(&self, name: &str) -> Option<Accessor> {
        self.members
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Cached accessor for `name`, running `probe` if there is none yet.
    ///
    /// Double-checked under the table's write lock: `probe` runs at most
    /// once per name and every caller observes the same accessor.
    pub fn get_or_probe<F>(&self, name: &str, probe: F) -> Accessor
    where
        F: FnOnce() -> Accessor,
    {
        if let Some(hit) = self.get(name) {
            tracing::trace!(type_name = self.key.as_str(), member = name, "Accessor cache hit");
            return hit;
        }

        let mut members = self.members.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(raced) = members.get(name) {
            return raced.clone();
        }

        let accessor = probe();
        self.probes.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            type_name = self.key.as_str(),
            member = name,
            kind = accessor.kind(),
            "Cached accessor"
        );
        members.insert(Arc::from(name), accessor.clone());
        accessor
    }

    /// Number of probes run for this type.
    pub fn probes(&self) -> u64 {
        self.probes.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.members.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Snapshot of cache occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub types: usize,
    pub entries: usize,
    pub probes: u64,
}

/// Type-indexed accessor cache shared by all renders.
#[derive(Debug)]
pub struct AccessorCache {
    root_type: Arc<str>,
    tables: DashMap<TypeKey, Arc<TypeTable>>,
}

impl Default for AccessorCache {
    fn default() -> Self {
        Self::with_root_type(ROOT_TYPE)
    }
}

impl AccessorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache whose probes stop before `root_type` instead of the universal root.
    pub fn with_root_type(root_type: &str) -> Self {
        Self {
            root_type: Arc::from(root_type),
            tables: DashMap::new(),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::with_root_type(&config.root_type)
    }

    /// Supertype walks stop before this type.
    pub fn root_type(&self) -> &str {
        &self.root_type
    }

    /// Table for `type_name`, created on first request.
    pub fn table(&self, type_name: &str) -> Arc<TypeTable> {
        if let Some(table) = self.tables.get(type_name) {
            return table.value().clone();
        }
        self.tables
            .entry(TypeKey::from(type_name))
            .or_insert_with(|| Arc::new(TypeTable::new(TypeKey::from(type_name))))
            .value()
            .clone()
    }

    pub fn get_or_probe<F>(&self, type_name: &str, name: &str, probe: F) -> Accessor
    where
        F: FnOnce() -> Accessor,
    {
        self.table(type_name).get_or_probe(name, probe)
    }

    /// Cached accessor, if any, without creating entries.
    pub fn lookup(&self, type_name: &str, name: &str) -> Option<Accessor> {
        self.tables.get(type_name)?.get(name)
    }

    pub fn stats(&self) -> CacheStats {
        self.tables
            .iter()
            .fold(CacheStats::default(), |mut stats, table| {
                stats.types += 1;
                stats.entries += table.len();
                stats.probes += table.probes();
                stats
            })
    }
}
