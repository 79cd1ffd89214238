//! Helpers for locating content items inside a written dataset,
//! by concept name code value or by value type.
//!
//! These operate on the writer's own output:
//! a document assembler that appends measurements to a report
//! over several passes uses them to find the container
//! it should write into next.

use dicom_sr_core::tags;
use dicom_sr_object::MemDataSet;

/// Find the first content item dataset whose concept name carries the
/// given code value, searching `dataset` and then its content sequence
/// depth-first.
///
/// Only the first item of a concept name code sequence is inspected,
/// and children are only searched when the current level
/// has no concept name at all.
pub fn find_coded_container<'a>(
    dataset: &'a MemDataSet,
    code_value: &str,
) -> Option<&'a MemDataSet> {
    if let Some(items) = dataset
        .get(tags::CONCEPT_NAME_CODE_SEQUENCE)
        .and_then(|e| e.items())
    {
        let found = items
            .first()
            .and_then(|item| item.get(tags::CODE_VALUE))
            .and_then(|e| e.to_str().ok())
            .map_or(false, |value| value == code_value);
        return if found { Some(dataset) } else { None };
    }

    dataset
        .get(tags::CONTENT_SEQUENCE)
        .and_then(|e| e.items())
        .and_then(|items| {
            items
                .iter()
                .find_map(|item| find_coded_container(item, code_value))
        })
}

/// Find the first content item dataset with the given value type,
/// searching `dataset` and then its content sequence depth-first.
pub fn find_typed_container<'a>(
    dataset: &'a MemDataSet,
    value_type: &str,
) -> Option<&'a MemDataSet> {
    let matches = dataset
        .get(tags::VALUE_TYPE)
        .and_then(|e| e.to_str().ok())
        .map_or(false, |value| value == value_type);
    if matches {
        return Some(dataset);
    }

    dataset
        .get(tags::CONTENT_SEQUENCE)
        .and_then(|e| e.items())
        .and_then(|items| {
            items
                .iter()
                .find_map(|item| find_typed_container(item, value_type))
        })
}
