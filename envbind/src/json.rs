//! JSON-encoded values

use crate::de::FromEnvValue;
use serde::de::DeserializeOwned;
use std::ops::{Deref, DerefMut};

/// A leaf whose raw value is a JSON document.
///
/// Use it for values that do not fit a single scalar or a comma-separated
/// list, e.g. `TAGS=["a","b,c"]` or a small object. The whole string goes
/// to `serde_json::from_str`; the wrapped type is never recursed into.
///
/// ```rust
/// use envbind::{Bind, Json, MapEnv};
/// use serde::Deserialize;
///
/// #[derive(Debug, Default, Deserialize, PartialEq)]
/// struct Database {
///     host: String,
///     port: u16,
/// }
///
/// #[derive(Debug, Default, Bind)]
/// struct Config {
///     pub database: Json<Database>,
/// }
///
/// let env = MapEnv::from([("DATABASE", r#"{"host":"localhost","port":5432}"#)]);
/// let config = Config::from_source(&env).unwrap();
/// assert_eq!(config.database.port, 5432);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Unwrap the decoded value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned> FromEnvValue for Json<T> {
    type Err = serde_json::Error;

    fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(raw).map(Json)
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Json(value)
    }
}
