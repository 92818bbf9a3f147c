//! Positional parameter codec shared by every name command.
//!
//! A command's parameters are a required prefix followed by an optional
//! suffix. [`ParamReader`] checks the array length against the declared
//! [`Arity`] before touching any position, then decodes each position into a
//! [`Scalar`]. [`ParamWriter`] builds the canonical array: required values are
//! always written, and an optional value at its zero value is only written
//! when a later optional value is set, so positions stay unambiguous and the
//! array never carries a trailing run of defaults.

use serde_json::Value;
use serde_json::value::RawValue;

use crate::error::CommandError;

/// Scalar JSON type declared for a parameter position.
///
/// # Example
///
/// ```
/// use nmcrpc::params::ParamKind;
///
/// assert_eq!(ParamKind::Integer.as_str(), "integer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// A JSON string.
    String,
    /// A JSON integer representable as a signed 64-bit value.
    Integer,
}

impl ParamKind {
    /// Returns the lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
        }
    }
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that can occupy a parameter position.
pub trait Scalar: Sized + Default {
    /// JSON type accepted at positions holding this scalar.
    const KIND: ParamKind;

    /// Coerces a decoded JSON value, returning `None` on a type mismatch.
    fn from_json(value: &Value) -> Option<Self>;

    /// Encodes the scalar as a JSON value.
    fn to_json(&self) -> Value;

    /// Returns `true` when the value equals the type's zero value.
    fn is_zero(&self) -> bool;
}

impl Scalar for String {
    const KIND: ParamKind = ParamKind::String;

    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Scalar for i64 {
    const KIND: ParamKind = ParamKind::Integer;

    fn from_json(value: &Value) -> Option<Self> {
        value.as_i64()
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }
}

/// Declared parameter counts for a command.
///
/// # Example
///
/// ```
/// use nmcrpc::params::Arity;
///
/// let arity = Arity::new(2, 1);
/// assert!(arity.contains(3));
/// assert!(!arity.contains(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    required: usize,
    optional: usize,
}

impl Arity {
    /// Creates an arity with `required` leading and `optional` trailing slots.
    #[must_use]
    pub const fn new(required: usize, optional: usize) -> Self {
        Self { required, optional }
    }

    /// Returns the number of required parameters.
    #[must_use]
    pub const fn required(self) -> usize {
        self.required
    }

    /// Returns the number of optional parameters.
    #[must_use]
    pub const fn optional(self) -> usize {
        self.optional
    }

    /// Returns the smallest accepted parameter count.
    #[must_use]
    pub const fn min(self) -> usize {
        self.required
    }

    /// Returns the largest accepted parameter count.
    #[must_use]
    pub const fn max(self) -> usize {
        self.required + self.optional
    }

    /// Returns `true` when `len` parameters are accepted.
    #[must_use]
    pub const fn contains(self, len: usize) -> bool {
        len >= self.min() && len <= self.max()
    }

    /// Checks a parameter count for `method`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Arity`] when `len` is outside the bounds.
    pub fn check(self, method: &'static str, len: usize) -> Result<(), CommandError> {
        if self.contains(len) {
            Ok(())
        } else {
            Err(CommandError::Arity {
                method,
                min: self.min(),
                max: self.max(),
                actual: len,
            })
        }
    }
}

/// Decodes scalars from a raw positional parameter array.
///
/// # Example
///
/// ```
/// use nmcrpc::params::{Arity, ParamReader};
/// use serde_json::value::RawValue;
///
/// let params: Vec<Box<RawValue>> = serde_json::from_str(r#"["d/example", 25]"#)?;
/// let reader = ParamReader::new("name_scan", &params, Arity::new(0, 2))?;
/// assert_eq!(reader.optional::<String>(0)?, "d/example");
/// assert_eq!(reader.optional::<i64>(1)?, 25);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParamReader<'a> {
    method: &'static str,
    arity: Arity,
    params: &'a [Box<RawValue>],
}

impl<'a> ParamReader<'a> {
    /// Wraps `params` after checking its length against `arity`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Arity`] when the array is too short or too
    /// long, before any position is read.
    pub fn new(
        method: &'static str,
        params: &'a [Box<RawValue>],
        arity: Arity,
    ) -> Result<Self, CommandError> {
        arity.check(method, params.len())?;
        Ok(Self {
            method,
            arity,
            params,
        })
    }

    /// Returns the number of parameters present.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` when no parameters are present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Decodes the required parameter at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Arity`] if the position is missing,
    /// [`CommandError::Decode`] if it holds a number outside the range of a
    /// JSON value, and [`CommandError::TypeMismatch`] if it holds the wrong
    /// JSON type.
    pub fn required<T: Scalar>(&self, position: usize) -> Result<T, CommandError> {
        let raw = self.params.get(position).ok_or(CommandError::Arity {
            method: self.method,
            min: self.arity.min(),
            max: self.arity.max(),
            actual: self.params.len(),
        })?;
        self.decode(position, raw)
    }

    /// Decodes the optional parameter at `position`, or returns the zero value
    /// when the array ends before it.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Decode`] or [`CommandError::TypeMismatch`] when
    /// the position is present but cannot be decoded.
    pub fn optional<T: Scalar>(&self, position: usize) -> Result<T, CommandError> {
        self.params
            .get(position)
            .map_or_else(|| Ok(T::default()), |raw| self.decode(position, raw))
    }

    // Raw positions are syntactically valid JSON, but the raw scanner does not
    // evaluate numbers, so a literal such as `1e400` only fails here. Every
    // other wrong value is a type mismatch.
    fn decode<T: Scalar>(&self, position: usize, raw: &RawValue) -> Result<T, CommandError> {
        let value: Value =
            serde_json::from_str(raw.get()).map_err(|source| CommandError::Decode {
                method: self.method,
                position: Some(position),
                source,
            })?;
        T::from_json(&value).ok_or(CommandError::TypeMismatch {
            method: self.method,
            position,
            expected: T::KIND,
        })
    }
}

/// Builds a canonical positional parameter array.
///
/// # Example
///
/// ```
/// use nmcrpc::params::ParamWriter;
/// use serde_json::json;
///
/// let params = ParamWriter::new()
///     .optional(&String::new())
///     .optional(&0_i64)
///     .optional(&20_i64)
///     .optional(&0_i64)
///     .finish();
/// assert_eq!(params, vec![json!(""), json!(0), json!(20)]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ParamWriter {
    params: Vec<Value>,
    pending: Vec<Value>,
}

impl ParamWriter {
    /// Creates an empty writer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            params: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Appends a required value unconditionally.
    #[must_use]
    pub fn required<T: Scalar>(mut self, value: &T) -> Self {
        self.params.push(value.to_json());
        self
    }

    /// Appends an optional value.
    ///
    /// Zero values are held back and only written once a later optional value
    /// is non-zero.
    #[must_use]
    pub fn optional<T: Scalar>(mut self, value: &T) -> Self {
        if value.is_zero() {
            self.pending.push(value.to_json());
        } else {
            self.params.append(&mut self.pending);
            self.params.push(value.to_json());
        }
        self
    }

    /// Returns the array, dropping any trailing zero-valued optionals.
    #[must_use]
    pub fn finish(self) -> Vec<Value> {
        self.params
    }
}
