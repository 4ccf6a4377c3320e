//! Lookup sources queried by the binder

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A read-only key/value source.
///
/// `lookup` follows the semantics of an environment lookup: `None` means
/// the key is unset, `Some("")` means it is set to an empty string.
/// The binder treats both the same way, the [`Reader`](crate::Reader)
/// accessors do not.
pub trait Env {
    /// Retrieve the value stored under `key`.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The process environment.
///
/// Values that are not valid Unicode are reported as unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl Env for SystemEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// An in-memory source, mainly for tests and for feeding values that did
/// not come from the environment (command line options, files, ...).
///
/// ```rust
/// use envbind::{Env, MapEnv};
///
/// let env = MapEnv::from([("PORT", "8080"), ("EMPTY", "")]);
/// assert_eq!(env.lookup("PORT").as_deref(), Some("8080"));
/// assert_eq!(env.lookup("EMPTY").as_deref(), Some(""));
/// assert_eq!(env.lookup("MISSING"), None);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MapEnv(HashMap<String, String>);

impl MapEnv {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Unset `key`, returning its value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Env for MapEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<S: BuildHasher> Env for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Env for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Env + ?Sized> Env for &E {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// Look `key` up, treating an empty value as unset.
#[doc(hidden)]
pub fn lookup_non_empty(env: &dyn Env, key: &str) -> Option<String> {
    env.lookup(key).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_map_env_lookup() {
        let mut env = MapEnv::new();
        assert!(env.is_empty());

        env.insert("STRING", "one");
        env.insert("EMPTY", "");
        assert_eq!(env.len(), 2);
        assert_eq!(env.lookup("STRING"), Some("one".to_string()));
        assert_eq!(env.lookup("EMPTY"), Some(String::new()));
        assert_eq!(env.lookup("MISSING"), None);

        assert_eq!(env.remove("STRING"), Some("one".to_string()));
        assert_eq!(env.lookup("STRING"), None);
    }

    #[test]
    fn test_lookup_non_empty() {
        let env = MapEnv::from([("SET", "x"), ("EMPTY", "")]);
        assert_eq!(lookup_non_empty(&env, "SET"), Some("x".to_string()));
        assert_eq!(lookup_non_empty(&env, "EMPTY"), None);
        assert_eq!(lookup_non_empty(&env, "MISSING"), None);
    }

    #[test]
    fn test_std_maps_and_references() {
        let mut hash = HashMap::new();
        hash.insert("KEY".to_string(), "hash".to_string());
        let tree: BTreeMap<String, String> = [("KEY".to_string(), "tree".to_string())].into();

        assert_eq!(hash.lookup("KEY").as_deref(), Some("hash"));
        assert_eq!(tree.lookup("KEY").as_deref(), Some("tree"));
        assert_eq!((&&tree).lookup("KEY").as_deref(), Some("tree"));
    }

    #[test]
    #[serial]
    fn test_system_env_set_and_unset() {
        env::set_var("ENVBIND_TEST_SYSTEM", "value");
        env::set_var("ENVBIND_TEST_SYSTEM_EMPTY", "");
        env::remove_var("ENVBIND_TEST_SYSTEM_MISSING");

        assert_eq!(SystemEnv.lookup("ENVBIND_TEST_SYSTEM").as_deref(), Some("value"));
        assert_eq!(SystemEnv.lookup("ENVBIND_TEST_SYSTEM_EMPTY").as_deref(), Some(""));
        assert_eq!(SystemEnv.lookup("ENVBIND_TEST_SYSTEM_MISSING"), None);

        env::remove_var("ENVBIND_TEST_SYSTEM");
        env::remove_var("ENVBIND_TEST_SYSTEM_EMPTY");
    }
}
