//! The binder: structural checks and per-field assignment

use crate::de::FromEnvValue;
use crate::error::BindError;
use crate::source::{lookup_non_empty, Env, SystemEnv};
use std::collections::{BTreeMap, HashMap};

/// Sequence element separator. Elements are not trimmed.
pub const SEPARATOR: char = ',';

/// Structural class of a bindable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A leaf converted from the whole value via [`FromEnvValue`]
    Scalar,
    /// `Option<T>`: one level of indirection
    Optional,
    /// `Vec<T>`: a comma-separated list
    Sequence,
    /// A struct deriving [`Bind`](crate::Bind)
    Record,
    /// A type the binder rejects (maps)
    Unsupported,
}

/// A type that can appear as a field of a bound struct.
///
/// Implemented for every [`FromEnvValue`] type, for `Option`, `Vec` and the
/// std maps (which always fail [`check`](Field::check)), and by
/// `#[derive(Bind)]` for records. You normally never implement it by hand.
pub trait Field: Sized {
    /// Structural class of `Self`
    const SHAPE: Shape;

    /// Whether `Self` may be the element type of a `Vec`
    const ELEMENT: bool = matches!(Self::SHAPE, Shape::Scalar);

    /// Validate `Self` and every type reachable through it.
    ///
    /// Runs before any value is read, so an unsupported type is reported
    /// even when its key is absent.
    fn check() -> Result<(), BindError>;

    /// Bind the value stored under `key` into `self`, returning whether
    /// anything was assigned.
    ///
    /// Absent and empty values leave `self` untouched. Records ignore `key`
    /// and bind their own fields instead.
    fn bind_field(&mut self, key: &str, env: &dyn Env) -> Result<bool, BindError>;

    /// Build a value for an empty `Option` slot.
    ///
    /// `None` leaves the slot empty. Records are built from `Default` and
    /// kept only if at least one of their fields was assigned.
    fn bind_new(key: &str, env: &dyn Env) -> Result<Option<Self>, BindError>;

    /// Convert one element of a sequence.
    fn from_element(key: &str, raw: &str) -> Result<Self, BindError>;
}

impl<T: FromEnvValue> Field for T {
    const SHAPE: Shape = Shape::Scalar;

    fn check() -> Result<(), BindError> {
        Ok(())
    }

    fn bind_field(&mut self, key: &str, env: &dyn Env) -> Result<bool, BindError> {
        let Some(value) = Self::bind_new(key, env)? else {
            return Ok(false);
        };
        *self = value;
        Ok(true)
    }

    fn bind_new(key: &str, env: &dyn Env) -> Result<Option<Self>, BindError> {
        match lookup_non_empty(env, key) {
            Some(raw) => Self::from_element(key, &raw).map(Some),
            None => Ok(None),
        }
    }

    fn from_element(key: &str, raw: &str) -> Result<Self, BindError> {
        T::from_env_value(raw).map_err(|e| BindError::invalid_value::<T>(key, raw, e))
    }
}

impl<T: Field> Field for Option<T> {
    const SHAPE: Shape = Shape::Optional;
    const ELEMENT: bool = matches!(T::SHAPE, Shape::Scalar);

    fn check() -> Result<(), BindError> {
        T::check()?;
        match T::SHAPE {
            Shape::Scalar | Shape::Record => Ok(()),
            _ => Err(BindError::unsupported::<Self>()),
        }
    }

    fn bind_field(&mut self, key: &str, env: &dyn Env) -> Result<bool, BindError> {
        match self {
            Some(inner) => inner.bind_field(key, env),
            None => {
                *self = T::bind_new(key, env)?;
                Ok(self.is_some())
            }
        }
    }

    fn bind_new(key: &str, env: &dyn Env) -> Result<Option<Self>, BindError> {
        Ok(T::bind_new(key, env)?.map(Some))
    }

    fn from_element(key: &str, raw: &str) -> Result<Self, BindError> {
        T::from_element(key, raw).map(Some)
    }
}

impl<T: Field> Field for Vec<T> {
    const SHAPE: Shape = Shape::Sequence;

    fn check() -> Result<(), BindError> {
        T::check()?;
        if T::ELEMENT {
            Ok(())
        } else {
            Err(BindError::unsupported::<T>())
        }
    }

    fn bind_field(&mut self, key: &str, env: &dyn Env) -> Result<bool, BindError> {
        let Some(values) = Self::bind_new(key, env)? else {
            return Ok(false);
        };
        *self = values;
        Ok(true)
    }

    fn bind_new(key: &str, env: &dyn Env) -> Result<Option<Self>, BindError> {
        let Some(raw) = lookup_non_empty(env, key) else {
            return Ok(None);
        };
        raw.split(SEPARATOR)
            .map(|piece| T::from_element(key, piece))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn from_element(_key: &str, _raw: &str) -> Result<Self, BindError> {
        Err(BindError::unsupported::<Self>())
    }
}

macro_rules! unsupported_impls {
    ($($ty:ident<$($param:ident),*>),* $(,)?) => {
        $(
            impl<$($param),*> Field for $ty<$($param),*> {
                const SHAPE: Shape = Shape::Unsupported;

                fn check() -> Result<(), BindError> {
                    Err(BindError::unsupported::<Self>())
                }

                fn bind_field(&mut self, _key: &str, _env: &dyn Env) -> Result<bool, BindError> {
                    Err(BindError::unsupported::<Self>())
                }

                fn bind_new(_key: &str, _env: &dyn Env) -> Result<Option<Self>, BindError> {
                    Err(BindError::unsupported::<Self>())
                }

                fn from_element(_key: &str, _raw: &str) -> Result<Self, BindError> {
                    Err(BindError::unsupported::<Self>())
                }
            }
        )*
    };
}

unsupported_impls!(HashMap<K, V, S>, BTreeMap<K, V>);

/// A struct whose public fields can be bound from an [`Env`].
///
/// Implemented by `#[derive(Bind)]`. `Default` provides the starting value
/// for [`from_source`](Bind::from_source) and for `Option<Self>` fields
/// that are still `None`.
pub trait Bind: Field + Default {
    /// Build `Self::default()` and bind it to the process environment.
    ///
    /// # Errors
    ///
    /// See [`bind_with`].
    fn from_env() -> Result<Self, BindError> {
        Self::from_source(&SystemEnv)
    }

    /// Build `Self::default()` and bind it to `env`.
    ///
    /// # Errors
    ///
    /// See [`bind_with`].
    fn from_source<E: Env>(env: &E) -> Result<Self, BindError> {
        let mut value = Self::default();
        bind_with(&mut value, env)?;
        Ok(value)
    }
}

/// Bind `target` to the process environment.
///
/// # Errors
///
/// See [`bind_with`].
pub fn bind<T: Field>(target: &mut T) -> Result<(), BindError> {
    bind_with(target, &SystemEnv)
}

/// Bind the public fields of `target` to the values in `env`.
///
/// Keys are derived with [`var_name`](crate::var_name) unless a field says
/// otherwise. Absent and empty values leave fields untouched, so values
/// set on `target` beforehand act as defaults. Nested structs share the
/// same keys as their parent; there is no prefixing by field name. An
/// `Option` of a nested struct that is `None` stays `None` unless at least
/// one of its fields gets a value.
///
/// # Errors
///
/// - [`BindError::NotAStruct`] if `T` is not a struct deriving `Bind`
/// - [`BindError::UnsupportedType`] if any reachable field type cannot be
///   bound, regardless of which keys are present
/// - [`BindError::InvalidValue`] if a present value fails to convert;
///   fields assigned before the failure keep their new values
pub fn bind_with<T: Field, E: Env>(target: &mut T, env: &E) -> Result<(), BindError> {
    if T::SHAPE != Shape::Record {
        return Err(BindError::not_a_struct::<T>());
    }
    T::check()?;
    target.bind_field("", env)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapEnv;
    use std::time::Duration;

    #[test]
    fn test_shapes() {
        assert_eq!(<u8 as Field>::SHAPE, Shape::Scalar);
        assert_eq!(<Option<String> as Field>::SHAPE, Shape::Optional);
        assert_eq!(<Vec<Duration> as Field>::SHAPE, Shape::Sequence);
        assert_eq!(<HashMap<String, String> as Field>::SHAPE, Shape::Unsupported);
        assert!(<Option<bool> as Field>::ELEMENT);
        assert!(!<Vec<bool> as Field>::ELEMENT);
    }

    #[test]
    fn test_check_supported_leaves() {
        assert!(<i64 as Field>::check().is_ok());
        assert!(<Option<f32> as Field>::check().is_ok());
        assert!(<Vec<Option<u16>> as Field>::check().is_ok());
    }

    #[test]
    fn test_check_rejects_nesting() {
        assert!(matches!(
            <Option<Option<u8>> as Field>::check(),
            Err(BindError::UnsupportedType { .. })
        ));
        assert!(matches!(
            <Option<Vec<u8>> as Field>::check(),
            Err(BindError::UnsupportedType { .. })
        ));
        assert!(matches!(
            <Vec<Vec<u8>> as Field>::check(),
            Err(BindError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_check_cites_map_inside_sequence() {
        let err = <Vec<HashMap<String, String>> as Field>::check().unwrap_err();
        let BindError::UnsupportedType { type_name } = err else {
            panic!("Expected UnsupportedType error");
        };
        assert!(type_name.contains("HashMap<"), "{type_name}");
        assert!(!type_name.starts_with("alloc::vec::Vec"), "{type_name}");
    }

    #[test]
    fn test_scalar_absent_and_empty_are_no_ops() {
        let env = MapEnv::from([("EMPTY", "")]);
        let mut value = 7u32;
        assert!(!value.bind_field("MISSING", &env).unwrap());
        assert!(!value.bind_field("EMPTY", &env).unwrap());
        assert_eq!(value, 7);
    }

    #[test]
    fn test_option_allocated_only_when_present() {
        let env = MapEnv::from([("SET", "5")]);

        let mut absent: Option<i32> = None;
        assert!(!absent.bind_field("MISSING", &env).unwrap());
        assert_eq!(absent, None);

        let mut present: Option<i32> = None;
        assert!(present.bind_field("SET", &env).unwrap());
        assert_eq!(present, Some(5));

        let mut kept = Some(1);
        assert!(!kept.bind_field("MISSING", &env).unwrap());
        assert_eq!(kept, Some(1));
    }

    #[test]
    fn test_sequence_split_without_trimming() {
        let env = MapEnv::from([("LIST", "a, b,,c")]);
        let mut list: Vec<String> = Vec::new();
        assert!(list.bind_field("LIST", &env).unwrap());
        assert_eq!(list, vec!["a", " b", "", "c"]);
    }

    #[test]
    fn test_sequence_of_options() {
        let env = MapEnv::from([("NUMS", "1,2")]);
        let mut nums: Vec<Option<u8>> = Vec::new();
        nums.bind_field("NUMS", &env).unwrap();
        assert_eq!(nums, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_sequence_element_failure_fails_field() {
        let env = MapEnv::from([("NUMS", "1,x,3")]);
        let mut nums: Vec<u8> = vec![9];
        let err = nums.bind_field("NUMS", &env).unwrap_err();
        match err {
            BindError::InvalidValue { name, value, .. } => {
                assert_eq!(name, "NUMS");
                assert_eq!(value, "x");
            }
            _ => panic!("Expected InvalidValue error"),
        }
        assert_eq!(nums, vec![9]);
    }

    #[test]
    fn test_bind_rejects_non_records() {
        let env = MapEnv::new();
        assert!(matches!(
            bind_with(&mut 5i32, &env),
            Err(BindError::NotAStruct { .. })
        ));
        assert!(matches!(
            bind_with(&mut Vec::<String>::new(), &env),
            Err(BindError::NotAStruct { .. })
        ));
        assert!(matches!(
            bind_with(&mut HashMap::<String, String>::new(), &env),
            Err(BindError::NotAStruct { .. })
        ));
    }
}
