//! This module contains the coded attribute value object,
//! the four-field DICOM concept descriptor reused across content items
//! as concept name, concept code, or measurement unit.

use std::fmt;

/// A coded concept as defined by the DICOM code sequence macro:
/// a code value within a coding scheme,
/// plus the human-readable code meaning.
///
/// A coded attribute is immutable once constructed.
/// The coding scheme version is optional and may be left empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CodedAttribute {
    code_value: String,
    coding_scheme_designator: String,
    coding_scheme_version: String,
    code_meaning: String,
}

impl CodedAttribute {
    /// Create a coded attribute without a coding scheme version.
    pub fn new<V, D, M>(code_value: V, coding_scheme_designator: D, code_meaning: M) -> Self
    where
        V: Into<String>,
        D: Into<String>,
        M: Into<String>,
    {
        CodedAttribute {
            code_value: code_value.into(),
            coding_scheme_designator: coding_scheme_designator.into(),
            coding_scheme_version: String::new(),
            code_meaning: code_meaning.into(),
        }
    }

    /// Create a coded attribute with an explicit coding scheme version.
    pub fn with_version<V, D, S, M>(
        code_value: V,
        coding_scheme_designator: D,
        coding_scheme_version: S,
        code_meaning: M,
    ) -> Self
    where
        V: Into<String>,
        D: Into<String>,
        S: Into<String>,
        M: Into<String>,
    {
        CodedAttribute {
            code_value: code_value.into(),
            coding_scheme_designator: coding_scheme_designator.into(),
            coding_scheme_version: coding_scheme_version.into(),
            code_meaning: code_meaning.into(),
        }
    }

    /// Getter for the code value.
    pub fn code_value(&self) -> &str {
        &self.code_value
    }

    /// Getter for the coding scheme designator.
    pub fn coding_scheme_designator(&self) -> &str {
        &self.coding_scheme_designator
    }

    /// Getter for the coding scheme version, which may be empty.
    pub fn coding_scheme_version(&self) -> &str {
        &self.coding_scheme_version
    }

    /// Getter for the code meaning.
    pub fn code_meaning(&self) -> &str {
        &self.code_meaning
    }

    /// Check whether the attribute denotes no concept at all:
    /// code value and code meaning are both empty.
    pub fn is_empty(&self) -> bool {
        self.code_value.is_empty() && self.code_meaning.is_empty()
    }
}

impl fmt::Display for CodedAttribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}, {}, \"{}\")",
            self.code_value, self.coding_scheme_designator, self.code_meaning
        )
    }
}
