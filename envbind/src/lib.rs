//! Bind environment variables onto plain structs
//!
//! `envbind` fills the public fields of a struct from a flat key/value
//! source, usually the process environment. Every field gets a variable
//! name derived from its identifier, the value is converted into the
//! field's type, and nested structs are walked recursively.
//!
//! # Features
//!
//! - **Declarative**: `#[derive(Bind)]` generates the field walk
//! - **Defaults stay put**: unset or empty variables never touch a field,
//!   so whatever the struct held before binding acts as the default
//! - **Structural checks**: unsupported field types (maps, lists of structs)
//!   are reported even when their variable is not set
//! - **Pluggable sources**: bind from [`SystemEnv`], a [`MapEnv`], or any
//!   [`Env`] implementation
//!
//! # Value Parsing
//!
//! - Strings: `DATABASE_URL=postgres://localhost/db`
//! - Integers: `MAX_CONNECTIONS=42` (also `42.0`, truncated)
//! - Booleans: `DEBUG=true` (`1 t T TRUE true True`, `0 f F FALSE false False`)
//! - Durations: `PING_INTERVAL=1m30s`
//! - Lists: `HOSTS=a.example.com,b.example.com` into a `Vec<T>`
//! - JSON: `TAGS=["a","b"]` into a [`Json<T>`]
//! - Types from other crates with a `FromStr` impl via [`Parsed<T>`]
//! - Anything else implementing [`FromEnvValue`]
//!
//! # Example
//!
//! ```rust
//! use envbind::{Bind, MapEnv};
//! use std::time::Duration;
//!
//! #[derive(Debug, Default, Bind)]
//! struct Config {
//!     // HOST_NAME
//!     pub host_name: String,
//!
//!     // USE_SSL
//!     #[env(name = "USE_SSL")]
//!     pub ssl: bool,
//!
//!     // PORT
//!     pub port: u16,
//!
//!     // PING_INTERVAL
//!     pub ping_interval: Duration,
//!
//!     // Never bound
//!     #[env(skip)]
//!     pub online: bool,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let env = MapEnv::from([
//!     ("HOST_NAME", "api.example.com"),
//!     ("USE_SSL", "1"),
//!     ("PORT", ""),
//!     ("PING_INTERVAL", "5m"),
//!     ("ONLINE", "1"),
//! ]);
//!
//! let mut config = Config { port: 443, ..Config::default() };
//! envbind::bind_with(&mut config, &env)?;
//!
//! assert_eq!(config.host_name, "api.example.com");
//! assert!(config.ssl);
//! assert_eq!(config.port, 443); // empty value, default kept
//! assert_eq!(config.ping_interval, Duration::from_secs(300));
//! assert!(!config.online);
//! # Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env(name = "KEY")]`
//!
//! Read the field from `KEY` instead of the derived name.
//!
//! ## `#[env(skip)]`
//!
//! Never bind the field. Fields that are not `pub` are skipped as well.
//!
//! ## `#[env(with = "path::to::function")]`
//!
//! Convert the value with `fn(&str) -> Result<T, E>` (where `E: Display`)
//! instead of the field type's own rules.
//!
//! ```rust
//! # use envbind::{Bind, MapEnv};
//! fn comma_separated(s: &str) -> Result<Vec<String>, String> {
//!     Ok(s.split(',').map(|s| s.trim().to_string()).collect())
//! }
//!
//! #[derive(Default, Bind)]
//! struct Config {
//!     #[env(with = "comma_separated")]
//!     pub tags: Vec<String>,
//! }
//!
//! let config = Config::from_source(&MapEnv::from([("TAGS", "a, b")])).unwrap();
//! assert_eq!(config.tags, vec!["a", "b"]);
//! ```
//!
//! ## `#[env(prefix = "APP_")]`
//!
//! On the struct: prepend `APP_` to the key of each of its own fields.

// Lets the derive's `::envbind::...` paths resolve inside this crate.
extern crate self as envbind;

pub mod de;

mod error;
mod field;
mod json;
mod naming;
mod parsed;
mod reader;
mod source;

pub use de::FromEnvValue;
pub use envbind_derive::Bind;
pub use error::{BindError, ValueError};
pub use field::{bind, bind_with, Bind, Field, Shape, SEPARATOR};
pub use json::Json;
pub use naming::{is_camel_case, var_name};
pub use parsed::Parsed;
pub use reader::Reader;
pub use source::{Env, MapEnv, SystemEnv};

// Used by macro-generated code
#[doc(hidden)]
pub mod __private {
    pub use crate::source::lookup_non_empty;

    /// Key of a field: `prefix` followed by the override or derived name.
    pub fn key(prefix: &str, name: Option<&str>, ident: &str) -> String {
        match name {
            Some(name) => format!("{prefix}{name}"),
            None => format!("{prefix}{}", crate::var_name(ident)),
        }
    }
}
