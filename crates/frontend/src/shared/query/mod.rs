//! Query keys and cache invalidation.
//!
//! Every fetched server response is read under a [`QueryKey`]. A mutation
//! cannot tell another component to refresh directly: it invalidates the
//! key, which bumps a generation counter; readers track that counter and
//! refetch. Stale data stays on screen until the refetch lands.

mod retry;

pub use retry::RetryPolicy;

use leptos::prelude::*;
use std::collections::HashMap;
use std::fmt;

/// Root of the keys of every admin list
pub const TABLE_DATA: &str = "tableData";
/// Root of the keys of relation select options
pub const OPTIONS: &str = "options";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyPart {
    Str(String),
    Int(i64),
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{:?}", s),
            Self::Int(i) => write!(f, "{}", i),
        }
    }
}

/// Ordered identifier of a cached response, e.g. `["application-detail", 7]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<KeyPart>);

impl QueryKey {
    pub fn new(root: &str) -> Self {
        Self(vec![KeyPart::Str(root.to_string())])
    }

    pub fn with(mut self, part: &str) -> Self {
        self.0.push(KeyPart::Str(part.to_string()));
        self
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.0.push(KeyPart::Int(id));
        self
    }

    /// Key of the list table for `endpoint`
    pub fn table(endpoint: &str) -> Self {
        Self::new(TABLE_DATA).with(endpoint)
    }

    /// Key of the select options loaded from `endpoint`
    pub fn options(endpoint: &str) -> Self {
        Self::new(OPTIONS).with(endpoint)
    }

    /// Options key of the endpoint behind a list key
    pub fn options_of_table(&self) -> Option<QueryKey> {
        match self.0.as_slice() {
            [KeyPart::Str(root), KeyPart::Str(endpoint)] if root == TABLE_DATA => {
                Some(Self::options(endpoint))
            }
            _ => None,
        }
    }

    /// `self` equals `other` or is one of its ancestors
    pub fn is_prefix_of(&self, other: &QueryKey) -> bool {
        other.0.len() >= self.0.len() && other.0[..self.0.len()] == self.0[..]
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", part)?;
        }
        write!(f, "]")
    }
}

/// Anything that can mark cached responses as stale
pub trait CacheInvalidator {
    fn invalidate(&self, key: &QueryKey);

    /// After a write to the records of a list: the list and the select
    /// options read from the same endpoint
    fn invalidate_written(&self, list_key: &QueryKey) {
        self.invalidate(list_key);
        if let Some(options) = list_key.options_of_table() {
            self.invalidate(&options);
        }
    }
}

/// Generation counters of known keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryRegistry {
    generations: HashMap<QueryKey, u64>,
}

impl QueryRegistry {
    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.generations.get(key).copied().unwrap_or(0)
    }

    /// Readers announce the keys they observe so prefix invalidation can reach them
    pub fn register(&mut self, key: &QueryKey) {
        self.generations.entry(key.clone()).or_insert(0);
    }

    /// Marks `key` and every key below it as stale. Returns the number of
    /// registered keys touched; an unknown key is still recorded so a reader
    /// that registers later starts past it.
    pub fn invalidate(&mut self, key: &QueryKey) -> usize {
        let mut touched = 0;
        for (known, generation) in self.generations.iter_mut() {
            if key.is_prefix_of(known) {
                *generation += 1;
                touched += 1;
            }
        }
        if touched == 0 {
            self.generations.insert(key.clone(), 1);
        }
        touched
    }
}

/// Shared cache handle, provided once in `App`
#[derive(Clone, Copy)]
pub struct QueryClient {
    registry: RwSignal<QueryRegistry>,
    pub retry: RetryPolicy,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            registry: RwSignal::new(QueryRegistry::default()),
            retry: RetryPolicy::default(),
        }
    }

    /// Reactive read: the calling effect re-runs when `key` is invalidated
    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.registry.with(|r| r.generation(key))
    }

    pub fn register(&self, key: &QueryKey) {
        let known = self
            .registry
            .with_untracked(|r| r.generations.contains_key(key));
        if !known {
            self.registry.update(|r| r.register(key));
        }
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheInvalidator for QueryClient {
    fn invalidate(&self, key: &QueryKey) {
        let touched = self
            .registry
            .try_update(|r| r.invalidate(key))
            .unwrap_or_default();
        log::debug!("invalidate {} ({} keys)", key, touched);
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix() {
        let root = QueryKey::new(TABLE_DATA);
        let branches = QueryKey::table("/branches/");
        assert!(root.is_prefix_of(&branches));
        assert!(branches.is_prefix_of(&branches));
        assert!(!branches.is_prefix_of(&root));
        assert!(!QueryKey::table("/customers/").is_prefix_of(&branches));
    }

    #[test]
    fn test_invalidate_exact_and_descendants() {
        let mut registry = QueryRegistry::default();
        let branches = QueryKey::table("/branches/");
        let customers = QueryKey::table("/customers/");
        let detail = QueryKey::new("application-detail").with_id(7);
        registry.register(&branches);
        registry.register(&customers);
        registry.register(&detail);

        assert_eq!(registry.invalidate(&branches), 1);
        assert_eq!(registry.generation(&branches), 1);
        assert_eq!(registry.generation(&customers), 0);

        assert_eq!(registry.invalidate(&QueryKey::new(TABLE_DATA)), 2);
        assert_eq!(registry.generation(&branches), 2);
        assert_eq!(registry.generation(&customers), 1);
        assert_eq!(registry.generation(&detail), 0);
    }

    #[test]
    fn test_invalidate_unknown_key_is_remembered() {
        let mut registry = QueryRegistry::default();
        let key = QueryKey::new("application-detail").with_id(3);
        assert_eq!(registry.invalidate(&key), 0);
        assert_eq!(registry.generation(&key), 1);
    }

    #[test]
    fn test_options_of_table() {
        assert_eq!(
            QueryKey::table("/branches/").options_of_table(),
            Some(QueryKey::options("/branches/"))
        );
        assert_eq!(QueryKey::new("application-detail").with_id(7).options_of_table(), None);
        assert_eq!(QueryKey::new(TABLE_DATA).options_of_table(), None);
    }

    #[test]
    fn test_display() {
        let key = QueryKey::new("application-detail").with_id(7);
        assert_eq!(key.to_string(), r#"["application-detail", 7]"#);
    }
}
