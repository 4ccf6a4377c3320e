//! Conversion of raw strings into field values

use crate::error::ValueError;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Types that can construct themselves from a raw variable value.
///
/// This is the leaf capability of the binder: any type implementing it is
/// converted from the whole string and never recursed into. Implement it
/// for your own types to bind them directly.
///
/// ```rust
/// use envbind::FromEnvValue;
///
/// #[derive(Debug, PartialEq)]
/// struct Hostname(String);
///
/// impl FromEnvValue for Hostname {
///     type Err = &'static str;
///
///     fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
///         if raw.contains(' ') {
///             return Err("hostname contains whitespace");
///         }
///         Ok(Hostname(raw.to_lowercase()))
///     }
/// }
///
/// assert_eq!(Hostname::from_env_value("API.Example.com"), Ok(Hostname("api.example.com".into())));
/// ```
pub trait FromEnvValue: Sized {
    /// Error reported when `raw` is not a valid value
    type Err: Display;

    /// Convert `raw` into a value.
    fn from_env_value(raw: &str) -> Result<Self, Self::Err>;
}

impl FromEnvValue for bool {
    type Err = ValueError;

    fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
        parse_bool(raw)
    }
}

/// Parse a boolean token.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(raw: &str) -> Result<bool, ValueError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ValueError::Bool),
    }
}

/// Integer types accepted by [`parse_int`].
pub trait Integer: Sized + std::str::FromStr {
    /// Truncate a finite float toward zero, `None` if out of range.
    fn from_f64(n: f64) -> Option<Self>;
}

macro_rules! integer_impls {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Integer for $ty {
                fn from_f64(n: f64) -> Option<Self> {
                    let n = n.trunc();
                    // `MAX as f64` can round up past MAX, hence the exclusive bound.
                    if n.is_finite() && n >= <$ty>::MIN as f64 && n < (<$ty>::MAX as f64) + 1.0 {
                        Some(n as $ty)
                    } else {
                        None
                    }
                }
            }

            impl FromEnvValue for $ty {
                type Err = ValueError;

                fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
                    parse_int(raw)
                }
            }
        )*
    };
}

integer_impls!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Parse a base-10 integer, falling back to truncating a float.
///
/// Some producers write integers as `1.0`; those parse as `1`. The float
/// fallback still has to fit the target width.
pub fn parse_int<T: Integer>(raw: &str) -> Result<T, ValueError> {
    if let Ok(n) = raw.parse::<T>() {
        return Ok(n);
    }

    raw.parse::<f64>()
        .ok()
        .and_then(T::from_f64)
        .ok_or(ValueError::Int)
}

// Infinity and NaN only when spelled out; `1e400` is out of range.
fn is_non_finite_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|token| unsigned.eq_ignore_ascii_case(token))
}

macro_rules! float_impls {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromEnvValue for $ty {
                type Err = ValueError;

                fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
                    let n = raw.parse::<$ty>().map_err(|_| ValueError::Float)?;
                    if n.is_finite() || is_non_finite_literal(raw) {
                        Ok(n)
                    } else {
                        Err(ValueError::Float)
                    }
                }
            }
        )*
    };
}

float_impls!(f32, f64);

impl FromEnvValue for Duration {
    type Err = ValueError;

    fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
        parse_duration(raw)
    }
}

macro_rules! from_str_impls {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromEnvValue for $ty {
                type Err = <$ty as std::str::FromStr>::Err;

                fn from_env_value(raw: &str) -> Result<Self, Self::Err> {
                    raw.parse()
                }
            }
        )*
    };
}

from_str_impls!(String, char, PathBuf, IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

const NANOSECOND: u128 = 1;
const MICROSECOND: u128 = 1_000 * NANOSECOND;
const MILLISECOND: u128 = 1_000 * MICROSECOND;
const SECOND: u128 = 1_000 * MILLISECOND;
const MINUTE: u128 = 60 * SECOND;
const HOUR: u128 = 60 * MINUTE;

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "µs" | "μs" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Parse a duration such as `300ms`, `1.5h` or `2h45m`.
///
/// A duration is a sequence of decimal numbers, each with an optional
/// fraction and a mandatory unit (`ns`, `us`/`µs`, `ms`, `s`, `m`, `h`).
/// A bare `0` is accepted. Negative durations are rejected unless they
/// are zero.
///
/// ```rust
/// use std::time::Duration;
///
/// assert_eq!(envbind::de::parse_duration("1h30m"), Ok(Duration::from_secs(5400)));
/// assert_eq!(envbind::de::parse_duration("1.5s"), Ok(Duration::from_millis(1500)));
/// ```
pub fn parse_duration(raw: &str) -> Result<Duration, ValueError> {
    let (negative, mut rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(ValueError::Duration("empty duration"));
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_fraction) = match after_whole.strip_prefix('.') {
            Some(tail) => split_digits(tail),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(ValueError::Duration("expected a number"));
        }

        let unit_len = after_fraction
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_fraction.len());
        let (unit, tail) = after_fraction.split_at(unit_len);
        if unit.is_empty() {
            return Err(ValueError::Duration("missing unit"));
        }
        let unit = unit_nanos(unit).ok_or(ValueError::Duration("unknown unit"))?;

        total = whole_nanos(whole, unit)
            .and_then(|n| n.checked_add(fraction_nanos(fraction, unit)))
            .and_then(|n| n.checked_add(total))
            .ok_or(ValueError::Duration("overflow"))?;
        rest = tail;
    }

    if negative && total != 0 {
        return Err(ValueError::Duration("negative duration"));
    }

    let secs = u64::try_from(total / SECOND).map_err(|_| ValueError::Duration("overflow"))?;
    // The remainder is below one second and always fits.
    let nanos = (total % SECOND) as u32;
    Ok(Duration::new(secs, nanos))
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn whole_nanos(digits: &str, unit: u128) -> Option<u128> {
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse::<u128>().ok()?.checked_mul(unit)
}

// Digits past nanosecond precision cannot change the result, so they are
// ignored instead of overflowing the scale.
fn fraction_nanos(digits: &str, unit: u128) -> u128 {
    let digits = &digits[..digits.len().min(18)];
    if digits.is_empty() {
        return 0;
    }
    let value: u128 = digits.parse().unwrap_or(0);
    let scale = 10u128.pow(digits.len() as u32);
    value * unit / scale
}
