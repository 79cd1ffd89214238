//! This module includes a high level abstraction over a DICOM data
//! element's value, either a primitive value or a sequence of items.

use itertools::Itertools;
use smallvec::SmallVec;
use snafu::Snafu;
use std::borrow::Cow;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// Stub type representing a non-existing sequence item.
///
/// This type cannot be instantiated,
/// so that `Value<EmptyItem>` is sure to be a primitive value.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum EmptyItem {}

/// Representation of a full DICOM value,
/// which may be either primitive or a sequence of nested items.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<I> {
    /// Primitive value.
    Primitive(PrimitiveValue),
    /// A sequence of items,
    /// each item being a nested data set.
    Sequence {
        /// Item collection.
        items: C<I>,
    },
}

impl<I> Value<I> {
    /// Create a value from a sequence of items.
    pub fn from_items<T>(items: T) -> Self
    where
        T: IntoIterator<Item = I>,
    {
        Value::Sequence {
            items: items.into_iter().collect(),
        }
    }

    /// Obtain the number of individual values.
    /// In a sequence, this is the number of items.
    pub fn multiplicity(&self) -> u32 {
        match *self {
            Value::Primitive(ref v) => v.multiplicity(),
            Value::Sequence { ref items } => items.len() as u32,
        }
    }

    /// Gets a reference to the primitive value.
    pub fn primitive(&self) -> Option<&PrimitiveValue> {
        match *self {
            Value::Primitive(ref v) => Some(v),
            _ => None,
        }
    }

    /// Gets a reference to the items.
    pub fn items(&self) -> Option<&[I]> {
        match *self {
            Value::Sequence { ref items } => Some(items),
            _ => None,
        }
    }

    /// Retrieves the primitive value.
    pub fn into_primitive(self) -> Option<PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Retrieves the items.
    pub fn into_items(self) -> Option<C<I>> {
        match self {
            Value::Sequence { items } => Some(items),
            _ => None,
        }
    }

    /// Retrieve the specific type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Primitive(v) => v.value_type(),
            Value::Sequence { .. } => ValueType::Item,
        }
    }

    /// Retrieves the primitive value as a single string.
    ///
    /// If the value contains multiple strings, they are concatenated
    /// (separated by `'\\'`) into an owned string.
    pub fn to_str(&self) -> Result<Cow<str>, CastValueError> {
        match self {
            Value::Primitive(PrimitiveValue::Str(v)) => Ok(Cow::from(v.as_str())),
            Value::Primitive(PrimitiveValue::Strs(v)) => Ok(Cow::from(v.iter().join("\\"))),
            _ => Err(CastValueError {
                requested: "string",
                got: self.value_type(),
            }),
        }
    }
}

impl<I> From<PrimitiveValue> for Value<I> {
    fn from(v: PrimitiveValue) -> Self {
        Value::Primitive(v)
    }
}

impl<I> From<&str> for Value<I> {
    fn from(v: &str) -> Self {
        Value::Primitive(v.into())
    }
}

impl<I> From<String> for Value<I> {
    fn from(v: String) -> Self {
        Value::Primitive(v.into())
    }
}

/// An enum representing a primitive value from a DICOM element.
/// Only the value types employed by structured report attributes
/// are represented.
#[derive(Debug, PartialEq, Clone)]
pub enum PrimitiveValue {
    /// No data. Used for any value of length 0.
    Empty,

    /// A single string.
    /// Used for ST, LT, UT and UR, which are never multi-valued.
    Str(String),

    /// A sequence of strings.
    /// Used for AE, AS, PN, SH, CS, LO, UI and UC.
    Strs(C<String>),

    /// A sequence of signed 32-bit integers.
    /// Used for SL and IS.
    I32(C<i32>),

    /// The value is a sequence of 32-bit floating point numbers.
    /// Used for OF and FL.
    F32(C<f32>),

    /// The value is a sequence of 64-bit floating point numbers.
    /// Used for OD, FD and DS.
    F64(C<f64>),
}

/// A utility macro for implementing the conversion from a core type into a
/// DICOM primitive value with a single element.
macro_rules! impl_from_for_primitive {
    ($typ: ty, $variant: ident) => {
        impl From<$typ> for PrimitiveValue {
            fn from(value: $typ) -> Self {
                PrimitiveValue::$variant(C::from_elem(value, 1))
            }
        }
    };
}

impl_from_for_primitive!(i32, I32);
impl_from_for_primitive!(f32, F32);
impl_from_for_primitive!(f64, F64);

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::Str(value)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Str(value.to_owned())
    }
}

impl From<Vec<f32>> for PrimitiveValue {
    fn from(value: Vec<f32>) -> Self {
        PrimitiveValue::F32(value.into_iter().collect())
    }
}

impl From<Vec<f64>> for PrimitiveValue {
    fn from(value: Vec<f64>) -> Self {
        PrimitiveValue::F64(value.into_iter().collect())
    }
}

impl PrimitiveValue {
    /// Obtain the number of individual elements.
    pub fn multiplicity(&self) -> u32 {
        use self::PrimitiveValue::*;
        match self {
            Empty => 0,
            Str(_) => 1,
            Strs(c) => c.len() as u32,
            I32(c) => c.len() as u32,
            F32(c) => c.len() as u32,
            F64(c) => c.len() as u32,
        }
    }

    /// Get a single string value. If it contains multiple strings,
    /// only the first one is returned.
    pub fn string(&self) -> Option<&str> {
        use self::PrimitiveValue::*;
        match self {
            Strs(c) => c.first().map(String::as_str),
            Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get a single 32-bit signed integer value.
    pub fn int32(&self) -> Option<i32> {
        use self::PrimitiveValue::*;
        match self {
            I32(c) => c.first().cloned(),
            _ => None,
        }
    }

    /// Get a single 32-bit floating point number value.
    pub fn float32(&self) -> Option<f32> {
        use self::PrimitiveValue::*;
        match self {
            F32(c) => c.first().cloned(),
            _ => None,
        }
    }

    /// Get a sequence of 32-bit floating point number values.
    pub fn float32s(&self) -> Option<&[f32]> {
        use self::PrimitiveValue::*;
        match self {
            F32(c) => Some(c),
            _ => None,
        }
    }

    /// Get a single 64-bit floating point number value.
    pub fn float64(&self) -> Option<f64> {
        use self::PrimitiveValue::*;
        match self {
            F64(c) => c.first().cloned(),
            _ => None,
        }
    }

    /// Retrieve the specific type of this value.
    pub fn value_type(&self) -> ValueType {
        use self::PrimitiveValue::*;
        match *self {
            Empty => ValueType::Empty,
            Str(_) => ValueType::Str,
            Strs(_) => ValueType::Strs,
            I32(_) => ValueType::I32,
            F32(_) => ValueType::F32,
            F64(_) => ValueType::F64,
        }
    }
}

/// An enum representing an abstraction of a DICOM element's data value
/// type. This is the equivalent of `PrimitiveValue` without the content,
/// plus the `Item` entry.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueType {
    /// No data. Used for any value of length 0.
    Empty,
    /// An item. Used for elements in a SQ, regardless of content.
    Item,
    /// A single string.
    Str,
    /// A sequence of strings.
    Strs,
    /// A sequence of signed 32-bit integers.
    I32,
    /// A sequence of 32-bit floating point numbers.
    F32,
    /// A sequence of 64-bit floating point numbers.
    F64,
}

/// Error triggered when reading a value as the wrong type.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(display("bad value cast: requested {} but value is {:?}", requested, got))]
pub struct CastValueError {
    /// The value type requested by the caller.
    pub requested: &'static str,
    /// The value type effectively at hand.
    pub got: ValueType,
}
