#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! A content tree model and writer for DICOM Structured Reports.
//!
//! A report is composed as a tree of [`SrNode`]s,
//! one of eight content item kinds
//! (CODE, CONTAINER, IMAGE, NUM, SCOORD, SCOORD3D, TEXT, UIDREF),
//! and serialized by a single recursive call to [`SrNode::write`]
//! into any attribute dataset implementing
//! [`DataSetSink`](dicom_sr_core::sink::DataSetSink),
//! such as the in-memory dataset of `dicom-sr-object`.
//!
//! # Example
//!
//! ```
//! use dicom_sr::{CodedAttribute, Measurement, RelationshipType, SrNode, SrNodeKind};
//! use dicom_sr_core::tags;
//! use dicom_sr_object::MemDataSet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut root = SrNode::new_root(
//!     SrNodeKind::Container,
//!     CodedAttribute::new("126000", "DCM", "Imaging Measurement Report"),
//! );
//! root.add_child(SrNode::new(
//!     SrNodeKind::Num(Measurement {
//!         value: 12.5,
//!         units: CodedAttribute::new("mm", "UCUM", "millimeter"),
//!     }),
//!     RelationshipType::Contains,
//!     CodedAttribute::new("410668003", "SCT", "Length"),
//! ));
//!
//! let mut dataset = MemDataSet::new_empty();
//! root.write(&mut dataset)?;
//!
//! assert_eq!(dataset.element(tags::VALUE_TYPE)?.to_str()?, "CONTAINER");
//! let children = dataset.element(tags::CONTENT_SEQUENCE)?.items().unwrap();
//! assert_eq!(children.len(), 1);
//! assert_eq!(children[0].element(tags::VALUE_TYPE)?.to_str()?, "NUM");
//! # Ok(())
//! # }
//! ```
//!
//! Spatial coordinate items validate their shape at construction,
//! so an ill-formed node can never reach `write`:
//!
//! ```
//! use dicom_sr::{GraphicType, SpatialCoordinates};
//!
//! assert!(SpatialCoordinates::new(GraphicType::Point, vec![1.0, 2.0]).is_ok());
//! assert!(SpatialCoordinates::new(GraphicType::Point, vec![1.0, 2.0, 3.0]).is_err());
//! ```

pub mod coded;
pub mod node;
pub mod query;
pub mod scoord;

pub use crate::coded::CodedAttribute;
pub use crate::node::{ImageReference, Measurement, RelationshipType, SrNode, SrNodeKind};
pub use crate::query::{find_coded_container, find_typed_container};
pub use crate::scoord::{
    GraphicType, InvalidShapeDataError, SpatialCoordinates, SpatialCoordinates3d,
};
