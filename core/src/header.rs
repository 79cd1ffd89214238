//! This module contains the basic data types for addressing and holding
//! DICOM attributes: the attribute tag, the value representation,
//! and the owned data element composite.

use crate::value::{CastValueError, PrimitiveValue, Value};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// A DICOM attribute tag group number.
pub type GroupNumber = u16;
/// A DICOM attribute tag element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags:
/// a pair of unsigned 16-bit integers
/// identifying the attribute's group and element.
#[derive(PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

impl PartialOrd<(u16, u16)> for Tag {
    fn partial_cmp(&self, other: &(u16, u16)) -> Option<Ordering> {
        Some(self.cmp(&Tag::from(*other)))
    }
}

/// An enum type for the value representations
/// used by structured report attributes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum VR {
    /// Code String
    CS,
    /// Decimal String
    DS,
    /// Floating Point Single
    FL,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Short String
    SH,
    /// Sequence of Items
    SQ,
    /// Unique Identifier (UID)
    UI,
    /// Unlimited Text
    UT,
}

impl VR {
    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            CS => "CS",
            DS => "DS",
            FL => "FL",
            IS => "IS",
            LO => "LO",
            SH => "SH",
            SQ => "SQ",
            UI => "UI",
            UT => "UT",
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// A data type that represents and owns a DICOM data element:
/// a tag, a value representation,
/// and either a primitive value or a sequence of items of type `I`.
#[derive(Debug, PartialEq, Clone)]
pub struct DataElement<I> {
    tag: Tag,
    vr: VR,
    value: Value<I>,
}

impl<I> DataElement<I> {
    /// Create a data element from the given parts.
    ///
    /// This method will not check whether the value representation is
    /// compatible with the given value.
    pub fn new<T>(tag: Tag, vr: VR, value: T) -> Self
    where
        T: Into<Value<I>>,
    {
        DataElement {
            tag,
            vr,
            value: value.into(),
        }
    }

    /// Create an empty data element.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        DataElement {
            tag,
            vr,
            value: PrimitiveValue::Empty.into(),
        }
    }

    /// Retrieve the element's tag as a `(group, element)` tuple.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Retrieve the value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Retrieve the data value.
    pub fn value(&self) -> &Value<I> {
        &self.value
    }

    /// Move the data value out of the element, discarding the rest.
    pub fn into_value(self) -> Value<I> {
        self.value
    }

    /// Retrieve the element's value as a single clean string.
    ///
    /// Returns an error if the value is not primitive.
    pub fn to_str(&self) -> Result<Cow<str>, CastValueError> {
        self.value.to_str()
    }

    /// Gets a reference to the element's sequence items,
    /// if the value is a sequence.
    pub fn items(&self) -> Option<&[I]> {
        self.value.items()
    }
}
