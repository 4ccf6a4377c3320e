//! Single-key accessors with fallbacks

use crate::de::{parse_bool, parse_duration, parse_int, FromEnvValue};
use crate::source::{Env, SystemEnv};
use std::fmt::Display;
use std::time::Duration;

/// Reads single values from an [`Env`], falling back to a default.
///
/// Unlike [`bind_with`](crate::bind_with), the accessors never fail: an
/// unset key *or* a value that does not parse yields the fallback. Only
/// unset keys fall back for strings; an empty value is returned as is.
///
/// ```rust
/// use envbind::{MapEnv, Reader};
/// use std::time::Duration;
///
/// let reader = Reader::new(MapEnv::from([("PORT", "8080"), ("PING", "5m"), ("DEBUG", "maybe")]));
///
/// assert_eq!(reader.get_int("PORT"), 8080);
/// assert_eq!(reader.get_duration("PING"), Duration::from_secs(300));
/// assert!(reader.get_bool_or("DEBUG", true));
/// assert_eq!(reader.get_or("HOST", "localhost"), "localhost");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Reader<E = SystemEnv> {
    env: E,
}

impl Reader<SystemEnv> {
    /// A reader over the process environment
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<E: Env> Reader<E> {
    /// A reader over `env`
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// The wrapped source
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Value of `key`, or an empty string if unset
    pub fn get(&self, key: &str) -> String {
        self.get_or(key, "")
    }

    /// Value of `key`, or `fallback` if unset
    pub fn get_or(&self, key: &str, fallback: &str) -> String {
        self.env.lookup(key).unwrap_or_else(|| fallback.to_string())
    }

    /// Synonym for [`get`](Reader::get)
    pub fn get_string(&self, key: &str) -> String {
        self.get(key)
    }

    /// Synonym for [`get_or`](Reader::get_or)
    pub fn get_string_or(&self, key: &str, fallback: &str) -> String {
        self.get_or(key, fallback)
    }

    /// Value of `key` as an integer, or 0
    pub fn get_int(&self, key: &str) -> i64 {
        self.get_int_or(key, 0)
    }

    /// Value of `key` as an integer, or `fallback`.
    ///
    /// Values like `1.0` are accepted and truncated.
    pub fn get_int_or(&self, key: &str, fallback: i64) -> i64 {
        self.parse_or(key, fallback, parse_int::<i64>)
    }

    /// Value of `key` as a float, or 0.0
    pub fn get_float(&self, key: &str) -> f64 {
        self.get_float_or(key, 0.0)
    }

    /// Value of `key` as a float, or `fallback`
    pub fn get_float_or(&self, key: &str, fallback: f64) -> f64 {
        self.parse_or(key, fallback, f64::from_env_value)
    }

    /// Value of `key` as a boolean, or `false`
    pub fn get_bool(&self, key: &str) -> bool {
        self.get_bool_or(key, false)
    }

    /// Value of `key` as a boolean, or `fallback`
    pub fn get_bool_or(&self, key: &str, fallback: bool) -> bool {
        self.parse_or(key, fallback, parse_bool)
    }

    /// Value of `key` as a duration, or zero
    pub fn get_duration(&self, key: &str) -> Duration {
        self.get_duration_or(key, Duration::ZERO)
    }

    /// Value of `key` as a duration, or `fallback`
    pub fn get_duration_or(&self, key: &str, fallback: Duration) -> Duration {
        self.parse_or(key, fallback, parse_duration)
    }

    fn parse_or<T, F, Err>(&self, key: &str, fallback: T, parse: F) -> T
    where
        F: FnOnce(&str) -> Result<T, Err>,
        Err: Display,
    {
        let Some(raw) = self.env.lookup(key) else {
            return fallback;
        };

        match parse(&raw) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!(key, value = %raw, %error, "unparseable value, using fallback");
                fallback
            }
        }
    }
}
