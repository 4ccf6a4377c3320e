//! Values of foreign `FromStr` types

use crate::de::FromEnvValue;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// A leaf converted with the wrapped type's `FromStr` impl.
///
/// [`FromEnvValue`] cannot be implemented for types from other crates, so
/// URL or timestamp types (`url::Url`, `chrono::DateTime<Utc>`, ...) are
/// bound through this wrapper instead. Unlike `#[env(with = "...")]` it
/// also works as the element of an `Option` or a `Vec`.
///
/// ```rust
/// use envbind::{Bind, MapEnv, Parsed};
/// use std::net::SocketAddrV4;
/// use std::num::NonZeroU32;
///
/// #[derive(Debug, Default, Bind)]
/// struct Config {
///     pub listen: Option<Parsed<SocketAddrV4>>,
///     pub workers: Option<Parsed<NonZeroU32>>,
/// }
///
/// let env = MapEnv::from([("LISTEN", "0.0.0.0:8080"), ("WORKERS", "4")]);
/// let config = Config::from_source(&env).unwrap();
/// assert_eq!(config.listen.unwrap().port(), 8080);
/// assert_eq!(config.workers.unwrap().get(), 4);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Parsed<T>(pub T);

impl<T> Parsed<T> {
    /// Unwrap the parsed value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromEnvValue for Parsed<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = T::Err;

    fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
        raw.parse().map(Parsed)
    }
}

impl<T: fmt::Display> fmt::Display for Parsed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> Deref for Parsed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Parsed<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> From<T> for Parsed<T> {
    fn from(value: T) -> Self {
        Parsed(value)
    }
}
