//! This module contains the implementation for an in-memory DICOM dataset.

use snafu::{Backtrace, OptionExt, Snafu};
use std::collections::BTreeMap;
use std::convert::Infallible;

use dicom_sr_core::header::{DataElement, Tag, VR};
use dicom_sr_core::sink::DataSetSink;
use dicom_sr_core::value::{PrimitiveValue, Value};

/// A full in-memory DICOM data element.
pub type MemElement = DataElement<MemDataSet>;

/// Error type for accessing elements of an in-memory dataset.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum AccessError {
    /// Attempted to fetch an element at a tag with no value.
    #[snafu(display("No such data element with tag {}", tag))]
    NoSuchDataElementTag {
        /// The requested tag.
        tag: Tag,
        /// Backtrace of the failed access.
        backtrace: Backtrace,
    },
}

type Result<T, E = AccessError> = std::result::Result<T, E>;

/** A DICOM attribute dataset that is fully contained in memory.
 *
 * Elements are kept in ascending tag order,
 * as mandated for DICOM data sets.
 * Sequence-valued elements own their items,
 * each item being a nested `MemDataSet`.
 */
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemDataSet {
    /// the element map
    entries: BTreeMap<Tag, MemElement>,
}

impl MemDataSet {
    /// Create a new empty dataset.
    pub fn new_empty() -> Self {
        MemDataSet {
            entries: BTreeMap::new(),
        }
    }

    /// Retrieve the element at the given tag,
    /// or an error if it is not present.
    pub fn element(&self, tag: Tag) -> Result<&MemElement> {
        self.entries
            .get(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Retrieve the element at the given tag, if present.
    pub fn get(&self, tag: Tag) -> Option<&MemElement> {
        self.entries.get(&tag)
    }

    /// Insert a data element into the dataset,
    /// replacing (and returning) any previous element of the same tag.
    pub fn put(&mut self, elt: MemElement) -> Option<MemElement> {
        self.entries.insert(elt.tag(), elt)
    }

    /// Remove the element at the given tag,
    /// reporting whether it was present.
    pub fn remove_element(&mut self, tag: Tag) -> bool {
        self.entries.remove(&tag).is_some()
    }

    /// Obtain the number of elements in the dataset.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the dataset contains no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a MemDataSet {
    type Item = &'a MemElement;
    type IntoIter = std::collections::btree_map::Values<'a, Tag, MemElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl IntoIterator for MemDataSet {
    type Item = MemElement;
    type IntoIter = std::collections::btree_map::IntoValues<Tag, MemElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl DataSetSink for MemDataSet {
    type Error = Infallible;
    type Item = MemDataSet;

    fn insert_scalar(
        &mut self,
        tag: Tag,
        vr: VR,
        value: PrimitiveValue,
    ) -> Result<(), Self::Error> {
        self.put(DataElement::new(tag, vr, value));
        Ok(())
    }

    fn insert_sequence(&mut self, tag: Tag, items: Vec<MemDataSet>) -> Result<(), Self::Error> {
        self.put(DataElement::new(tag, VR::SQ, Value::from_items(items)));
        Ok(())
    }

    fn merge_sequence(&mut self, tag: Tag, items: Vec<MemDataSet>) -> Result<(), Self::Error> {
        let mut merged: Vec<MemDataSet> = match self.entries.remove(&tag) {
            None => Vec::new(),
            Some(elt) => match elt.into_value() {
                Value::Sequence { items } => items.into_vec(),
                Value::Primitive(_) => {
                    // the merge contract is only defined over sequences
                    tracing::warn!(
                        "replacing non-sequence value at {} on sequence merge",
                        tag
                    );
                    Vec::new()
                }
            },
        };
        merged.extend(items);
        self.insert_sequence(tag, merged)
    }

    fn has_attribute(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    fn new_item(&self) -> MemDataSet {
        MemDataSet::new_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_obj_eq(obj1: &MemDataSet, obj2: &MemDataSet) {
        // debug representation because it makes a stricter comparison
        assert_eq!(format!("{:?}", obj1), format!("{:?}", obj2))
    }

    #[test]
    fn mem_dataset_compare() {
        let mut obj1 = MemDataSet::new_empty();
        let mut obj2 = MemDataSet::new_empty();
        assert_eq!(obj1, obj2);
        let empty_text = DataElement::empty(Tag(0x0040, 0xA160), VR::UT);
        obj1.put(empty_text.clone());
        assert_ne!(obj1, obj2);
        obj2.put(empty_text);
        assert_obj_eq(&obj1, &obj2);
    }

    #[test]
    fn mem_dataset_element_access() {
        let mut obj = MemDataSet::new_empty();
        obj.insert_scalar(Tag(0x0040, 0xA040), VR::CS, "TEXT".into())
            .unwrap();

        let e = obj.element(Tag(0x0040, 0xA040)).unwrap();
        assert_eq!(e.vr(), VR::CS);
        assert_eq!(e.to_str().unwrap(), "TEXT");

        assert!(matches!(
            obj.element(Tag(0x0040, 0xA010)),
            Err(AccessError::NoSuchDataElementTag { tag, .. }) if tag == Tag(0x0040, 0xA010)
        ));
        assert_eq!(obj.get(Tag(0x0040, 0xA010)), None);
    }

    #[test]
    fn mem_dataset_insert_scalar_overwrites() {
        let mut obj = MemDataSet::new_empty();
        obj.insert_scalar(Tag(0x0040, 0xA160), VR::UT, "first".into())
            .unwrap();
        obj.insert_scalar(Tag(0x0040, 0xA160), VR::UT, "second".into())
            .unwrap();

        assert_eq!(obj.len(), 1);
        let e = obj.element(Tag(0x0040, 0xA160)).unwrap();
        assert_eq!(e.to_str().unwrap(), "second");
    }

    #[test]
    fn mem_dataset_insert_sequence_overwrites() {
        let tag = Tag(0x0040, 0xA730);
        let mut obj = MemDataSet::new_empty();

        let mut item = obj.new_item();
        item.insert_scalar(Tag(0x0040, 0xA040), VR::CS, "TEXT".into())
            .unwrap();
        obj.insert_sequence(tag, vec![item.clone(), item.clone()])
            .unwrap();
        assert_eq!(obj.element(tag).unwrap().items().unwrap().len(), 2);

        obj.insert_sequence(tag, vec![item]).unwrap();
        assert_eq!(obj.element(tag).unwrap().items().unwrap().len(), 1);
    }

    #[test]
    fn mem_dataset_merge_sequence_on_absent_tag_inserts() {
        let tag = Tag(0x0040, 0xA043);
        let mut obj = MemDataSet::new_empty();
        assert!(!obj.has_attribute(tag));

        let mut item = obj.new_item();
        item.insert_scalar(Tag(0x0008, 0x0100), VR::SH, "T-D0050".into())
            .unwrap();
        obj.merge_sequence(tag, vec![item]).unwrap();

        assert!(obj.has_attribute(tag));
        let items = obj.element(tag).unwrap().items().unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn mem_dataset_merge_sequence_appends_in_order() {
        let tag = Tag(0x0040, 0xA168);
        let mut obj = MemDataSet::new_empty();

        let mut first = obj.new_item();
        first
            .insert_scalar(Tag(0x0008, 0x0100), VR::SH, "one".into())
            .unwrap();
        let mut second = obj.new_item();
        second
            .insert_scalar(Tag(0x0008, 0x0100), VR::SH, "two".into())
            .unwrap();
        let mut third = obj.new_item();
        third
            .insert_scalar(Tag(0x0008, 0x0100), VR::SH, "three".into())
            .unwrap();

        obj.merge_sequence(tag, vec![first]).unwrap();
        obj.merge_sequence(tag, vec![second, third]).unwrap();

        let items = obj.element(tag).unwrap().items().unwrap();
        let codes: Vec<_> = items
            .iter()
            .map(|item| {
                item.element(Tag(0x0008, 0x0100))
                    .unwrap()
                    .to_str()
                    .unwrap()
                    .into_owned()
            })
            .collect();
        assert_eq!(codes, vec!["one", "two", "three"]);
    }

    #[test]
    fn mem_dataset_merge_sequence_replaces_scalar() {
        let tag = Tag(0x0040, 0xA050);
        let mut obj = MemDataSet::new_empty();
        obj.insert_scalar(tag, VR::CS, "SEPARATE".into()).unwrap();

        obj.merge_sequence(tag, vec![obj.new_item()]).unwrap();

        let e = obj.element(tag).unwrap();
        assert_eq!(e.vr(), VR::SQ);
        assert_eq!(e.items().unwrap().len(), 1);
    }

    #[test]
    fn mem_dataset_iterates_in_ascending_tag_order() {
        let mut obj = MemDataSet::new_empty();
        obj.insert_scalar(Tag(0x0070, 0x0023), VR::CS, "POINT".into())
            .unwrap();
        obj.insert_scalar(Tag(0x0040, 0xA040), VR::CS, "SCOORD".into())
            .unwrap();
        obj.insert_scalar(Tag(0x0070, 0x0022), VR::FL, vec![1.0_f32, 2.0].into())
            .unwrap();

        let tags: Vec<Tag> = (&obj).into_iter().map(|e| e.tag()).collect();
        assert_eq!(
            tags,
            vec![
                Tag(0x0040, 0xA040),
                Tag(0x0070, 0x0022),
                Tag(0x0070, 0x0023),
            ]
        );
    }

    #[test]
    fn mem_dataset_new_item_is_empty() {
        let obj = MemDataSet::new_empty();
        let item = obj.new_item();
        assert!(item.is_empty());
        assert_eq!(item.len(), 0);
    }
}
