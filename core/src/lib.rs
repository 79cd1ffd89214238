#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of the DICOM-SR writer,
//! containing the data types shared by the structured report
//! content model and its dataset back ends.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the basic data types for DICOM attributes,
//!   namely the attribute tag, the value representation,
//!   and the owned data element.
//! - [`value`] holds definitions for values in data elements,
//!   with awareness of multiplicity
//!   and the possible presence of sequences.
//! - [`sink`] declares the dataset sink abstraction
//!   which structured report trees are written into.
//! - [`tags`] declares the attribute tag constants
//!   of the structured report content item macro.
//!
//! [`header`]: ./header/index.html
//! [`sink`]: ./sink/index.html
//! [`tags`]: ./tags/index.html
//! [`value`]: ./value/index.html

pub mod header;
pub mod sink;
pub mod tags;
pub mod value;

pub use header::{DataElement, Tag, VR};
pub use sink::DataSetSink;
pub use value::{PrimitiveValue, Value};

// re-export crates that are part of the public API
pub use smallvec;
