//! This module declares the dataset sink abstraction:
//! the contract between the structured report writer
//! and whichever attribute dataset back end receives the output.
//!
//! A sink is an ordered mapping from attribute tags
//! to scalar values or sequences of nested items,
//! where each item exposes the same operations as the dataset itself.
//! An implementation backed by an in-memory data set
//! is available in the `dicom-sr-object` crate.

use crate::header::{Tag, VR};
use crate::value::PrimitiveValue;

/// Interface for a DICOM attribute dataset
/// which data elements can be written into.
///
/// Implementations decide how attributes are stored or encoded;
/// the writer only relies on the insertion and merge semantics
/// stated on each operation.
pub trait DataSetSink: Sized {
    /// The error type surfaced by failing operations.
    ///
    /// Failures are propagated unchanged to the caller of a report
    /// write; no retries or partial-write cleanup are performed,
    /// so a failed write leaves the sink partially populated.
    type Error: std::error::Error + 'static;

    /// The nested dataset type populated for sequence items.
    ///
    /// An item exposes the same operations as the dataset it
    /// belongs to, including the creation of further nested items
    /// of the same type.
    type Item: DataSetSink<Item = Self::Item, Error = Self::Error>;

    /// Set the scalar value at `tag`, overwriting any prior value.
    fn insert_scalar(
        &mut self,
        tag: Tag,
        vr: VR,
        value: PrimitiveValue,
    ) -> Result<(), Self::Error>;

    /// Set the sequence at `tag`, overwriting any prior value.
    fn insert_sequence(&mut self, tag: Tag, items: Vec<Self::Item>) -> Result<(), Self::Error>;

    /// Merge `items` into the sequence at `tag`.
    ///
    /// If `tag` is absent, this behaves exactly like
    /// [`insert_sequence`](DataSetSink::insert_sequence).
    /// If a sequence is already present, its items are kept in their
    /// original order and `items` are appended after them, in their
    /// given order.
    fn merge_sequence(&mut self, tag: Tag, items: Vec<Self::Item>) -> Result<(), Self::Error>;

    /// Check whether an attribute is present at `tag`.
    fn has_attribute(&self, tag: Tag) -> bool;

    /// Produce a new, initially empty nested dataset,
    /// to be populated and later included in a sequence.
    fn new_item(&self) -> Self::Item;
}
