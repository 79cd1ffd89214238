#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This crate provides an in-memory DICOM attribute dataset,
//! [`MemDataSet`],
//! which implements the [`DataSetSink`] contract of `dicom-sr-core`:
//! scalar and sequence insertion with overwrite semantics,
//! sequence merging with append semantics,
//! and the creation of nested items for sequences.
//!
//! A structured report tree written into a `MemDataSet`
//! can afterwards be inspected element by element,
//! which is also how this workspace tests its writer.
//!
//! [`DataSetSink`]: dicom_sr_core::sink::DataSetSink
//! [`MemDataSet`]: crate::mem::MemDataSet

pub mod mem;

pub use crate::mem::{AccessError, MemDataSet, MemElement};
