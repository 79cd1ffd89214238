//! This module contains the structured report content item tree
//! and its recursive write algorithm.
//!
//! A report is a tree of [`SrNode`]s:
//! each node carries a value type (fixed by its [`SrNodeKind`]),
//! an optional relationship to its parent
//! (absent only on the document root),
//! an optional concept name,
//! and exclusively owned, ordered children.
//! Calling [`write`](SrNode::write) once on the root
//! serializes the whole tree depth-first
//! into any [`DataSetSink`].

use std::fmt;

use dicom_sr_core::header::VR;
use dicom_sr_core::sink::DataSetSink;
use dicom_sr_core::tags;

use crate::coded::CodedAttribute;
use crate::scoord::{SpatialCoordinates, SpatialCoordinates3d};

/// The DICOM defined terms for the relationship
/// between a source content item and its target
/// (PS3.3 Table C.17.3-8).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum RelationshipType {
    /// The target item is contained in the source item.
    Contains,
    /// The target item describes a property of the source item.
    HasProperties,
    /// Conditions present during data acquisition.
    HasAcqContext,
    /// The target item qualifies or describes the concept name.
    HasConceptMod,
    /// The observation context of the source item.
    HasObsContext,
    /// The source item is inferred from the target item.
    InferredFrom,
    /// Spatial or temporal selection from the target item.
    SelectedFrom,
}

impl RelationshipType {
    /// Retrieve the DICOM defined term for this relationship.
    pub fn as_str(self) -> &'static str {
        use RelationshipType::*;
        match self {
            Contains => "CONTAINS",
            HasProperties => "HAS PROPERTIES",
            HasAcqContext => "HAS ACQ CONTEXT",
            HasConceptMod => "HAS CONCEPT MOD",
            HasObsContext => "HAS OBS CONTEXT",
            InferredFrom => "INFERRED FROM",
            SelectedFrom => "SELECTED FROM",
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The payload of an IMAGE content item:
/// a reference to a single frame of a SOP instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageReference {
    /// The referenced SOP class UID.
    pub sop_class_uid: String,
    /// The referenced SOP instance UID.
    pub sop_instance_uid: String,
    /// The referenced frame number within the instance.
    pub frame_number: i32,
}

/// The payload of a NUM content item:
/// a measured value with its measurement units.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// The numeric value.
    pub value: f64,
    /// The measurement units, as a coded concept.
    pub units: CodedAttribute,
}

/// The variant-specific payload of a content item,
/// fixing its value type.
#[derive(Debug, Clone, PartialEq)]
pub enum SrNodeKind {
    /// A CODE item, holding a coded entry.
    Code(CodedAttribute),
    /// A CONTAINER item, grouping its children.
    Container,
    /// An IMAGE item, referencing a SOP instance frame.
    Image(ImageReference),
    /// A NUM item, holding a measurement.
    Num(Measurement),
    /// A SCOORD item, holding 2D spatial coordinates.
    Scoord(SpatialCoordinates),
    /// A SCOORD3D item, holding 3D spatial coordinates.
    Scoord3d(SpatialCoordinates3d),
    /// A TEXT item, holding free text.
    Text(String),
    /// A UIDREF item, holding a unique identifier.
    UidRef(String),
}

impl SrNodeKind {
    /// Retrieve the value type term written at (0040,A040).
    pub fn value_type(&self) -> &'static str {
        use SrNodeKind::*;
        match self {
            Code(_) => "CODE",
            Container => "CONTAINER",
            Image(_) => "IMAGE",
            Num(_) => "NUM",
            Scoord(_) => "SCOORD",
            Scoord3d(_) => "SCOORD3D",
            Text(_) => "TEXT",
            UidRef(_) => "UIDREF",
        }
    }
}

/// A single content item in a structured report tree,
/// owning its descendants.
///
/// Nodes are built once, bottom-up or top-down,
/// and are immutable apart from child attachment;
/// the tree is consumed by calling [`write`](SrNode::write)
/// on the document root.
#[derive(Debug, Clone, PartialEq)]
pub struct SrNode {
    kind: SrNodeKind,
    relationship: Option<RelationshipType>,
    concept: CodedAttribute,
    children: Vec<SrNode>,
}

impl SrNode {
    /// Create a content item related to its parent by `relationship`.
    ///
    /// The concept name may be [`CodedAttribute::default()`]
    /// when the item carries none.
    pub fn new(kind: SrNodeKind, relationship: RelationshipType, concept: CodedAttribute) -> Self {
        SrNode {
            kind,
            relationship: Some(relationship),
            concept,
            children: Vec::new(),
        }
    }

    /// Create a document root content item.
    ///
    /// The root carries no relationship,
    /// and is the only node of a well-formed tree that does not.
    pub fn new_root(kind: SrNodeKind, concept: CodedAttribute) -> Self {
        SrNode {
            kind,
            relationship: None,
            concept,
            children: Vec::new(),
        }
    }

    /// Getter for the variant payload.
    pub fn kind(&self) -> &SrNodeKind {
        &self.kind
    }

    /// Getter for the relationship to the parent item,
    /// `None` on the document root.
    pub fn relationship(&self) -> Option<RelationshipType> {
        self.relationship
    }

    /// Getter for the concept name.
    pub fn concept(&self) -> &CodedAttribute {
        &self.concept
    }

    /// Getter for the child content items, in order.
    pub fn children(&self) -> &[SrNode] {
        &self.children
    }

    /// Attach a child content item after the existing children.
    pub fn add_child(&mut self, node: SrNode) {
        self.children.push(node);
    }

    /// Write this content item and all of its descendants into `sink`.
    ///
    /// Attributes are emitted in a fixed order:
    /// the value type, the relationship (non-root items only),
    /// the concept name code sequence
    /// (merged, and only when the concept carries
    /// both a code value and a coding scheme designator),
    /// the content sequence with one fresh item per child
    /// (overwritten, never merged),
    /// and finally the variant-specific attributes.
    ///
    /// Sink failures are propagated unchanged;
    /// a failed write leaves the sink partially populated.
    pub fn write<S>(&self, sink: &mut S) -> Result<(), S::Error>
    where
        S: DataSetSink,
    {
        tracing::trace!(
            value_type = self.kind.value_type(),
            children = self.children.len(),
            "writing content item"
        );

        sink.insert_scalar(tags::VALUE_TYPE, VR::CS, self.kind.value_type().into())?;

        if let Some(relationship) = self.relationship {
            sink.insert_scalar(tags::RELATIONSHIP_TYPE, VR::CS, relationship.as_str().into())?;
        }

        // type 1C: gated on code value and scheme designator only,
        // the code meaning is not consulted
        if !self.concept.code_value().is_empty()
            && !self.concept.coding_scheme_designator().is_empty()
        {
            let item = code_sequence_item(sink, &self.concept)?;
            sink.merge_sequence(tags::CONCEPT_NAME_CODE_SEQUENCE, vec![item])?;
        }

        if !self.children.is_empty() {
            let mut items = Vec::with_capacity(self.children.len());
            for child in &self.children {
                let mut item = sink.new_item();
                child.write(&mut item)?;
                items.push(item);
            }
            sink.insert_sequence(tags::CONTENT_SEQUENCE, items)?;
        }

        self.write_kind(sink)
    }

    /// Write the variant-specific attributes of this content item.
    fn write_kind<S>(&self, sink: &mut S) -> Result<(), S::Error>
    where
        S: DataSetSink,
    {
        match &self.kind {
            SrNodeKind::Code(entry) => {
                let item = code_sequence_item(sink, entry)?;
                sink.merge_sequence(tags::CONCEPT_CODE_SEQUENCE, vec![item])
            }
            SrNodeKind::Container => {
                sink.insert_scalar(tags::CONTINUITY_OF_CONTENT, VR::CS, "SEPARATE".into())
            }
            SrNodeKind::Image(reference) => {
                let mut item = sink.new_item();
                item.insert_scalar(
                    tags::REFERENCED_SOP_CLASS_UID,
                    VR::UI,
                    reference.sop_class_uid.as_str().into(),
                )?;
                item.insert_scalar(
                    tags::REFERENCED_SOP_INSTANCE_UID,
                    VR::UI,
                    reference.sop_instance_uid.as_str().into(),
                )?;
                item.insert_scalar(
                    tags::REFERENCED_FRAME_NUMBER,
                    VR::IS,
                    reference.frame_number.into(),
                )?;
                sink.insert_sequence(tags::REFERENCED_SOP_SEQUENCE, vec![item])
            }
            SrNodeKind::Num(measurement) => {
                let mut item = sink.new_item();
                item.insert_scalar(tags::NUMERIC_VALUE, VR::DS, measurement.value.into())?;
                let units = code_sequence_item(&item, &measurement.units)?;
                item.merge_sequence(tags::MEASUREMENT_UNITS_CODE_SEQUENCE, vec![units])?;
                sink.insert_sequence(tags::MEASURED_VALUE_SEQUENCE, vec![item])
            }
            SrNodeKind::Scoord(coords) => {
                sink.insert_scalar(
                    tags::GRAPHIC_DATA,
                    VR::FL,
                    coords.graphic_data().to_vec().into(),
                )?;
                sink.insert_scalar(
                    tags::GRAPHIC_TYPE,
                    VR::CS,
                    coords.graphic_type().as_str().into(),
                )
            }
            SrNodeKind::Scoord3d(coords) => {
                sink.insert_scalar(
                    tags::FRAME_OF_REFERENCE_UID,
                    VR::UI,
                    coords.frame_of_reference_uid().into(),
                )?;
                sink.insert_scalar(
                    tags::GRAPHIC_DATA,
                    VR::FL,
                    coords.graphic_data().to_vec().into(),
                )?;
                sink.insert_scalar(
                    tags::GRAPHIC_TYPE,
                    VR::CS,
                    coords.graphic_type().as_str().into(),
                )
            }
            SrNodeKind::Text(text) => {
                sink.insert_scalar(tags::TEXT_VALUE, VR::UT, text.as_str().into())
            }
            SrNodeKind::UidRef(uid) => sink.insert_scalar(tags::UID, VR::UI, uid.as_str().into()),
        }
    }
}

/// Build a one-item code sequence entry for the given coded attribute
/// (PS3.3 Table 8.8-1).
///
/// The coding scheme version is emitted only when non-empty;
/// code value, designator and meaning are always emitted.
fn code_sequence_item<S>(sink: &S, attr: &CodedAttribute) -> Result<S::Item, S::Error>
where
    S: DataSetSink,
{
    let mut item = sink.new_item();
    item.insert_scalar(tags::CODE_VALUE, VR::SH, attr.code_value().into())?;
    item.insert_scalar(
        tags::CODING_SCHEME_DESIGNATOR,
        VR::SH,
        attr.coding_scheme_designator().into(),
    )?;
    if !attr.coding_scheme_version().is_empty() {
        item.insert_scalar(
            tags::CODING_SCHEME_VERSION,
            VR::SH,
            attr.coding_scheme_version().into(),
        )?;
    }
    item.insert_scalar(tags::CODE_MEANING, VR::LO, attr.code_meaning().into())?;
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoord::GraphicType;
    use dicom_sr_core::value::PrimitiveValue;
    use dicom_sr_object::MemDataSet;
    use snafu::Snafu;

    fn write_to_new(node: &SrNode) -> MemDataSet {
        let mut dataset = MemDataSet::new_empty();
        node.write(&mut dataset).unwrap();
        dataset
    }

    fn str_of(dataset: &MemDataSet, tag: dicom_sr_core::Tag) -> String {
        dataset.element(tag).unwrap().to_str().unwrap().into_owned()
    }

    fn items_of<'a>(dataset: &'a MemDataSet, tag: dicom_sr_core::Tag) -> &'a [MemDataSet] {
        dataset.element(tag).unwrap().items().unwrap()
    }

    #[test]
    fn text_item_writes_exactly_its_attributes() {
        let node = SrNode::new(
            SrNodeKind::Text("Finding present".to_owned()),
            RelationshipType::Contains,
            CodedAttribute::default(),
        );
        let dataset = write_to_new(&node);

        assert_eq!(str_of(&dataset, tags::VALUE_TYPE), "TEXT");
        assert_eq!(str_of(&dataset, tags::RELATIONSHIP_TYPE), "CONTAINS");
        assert_eq!(str_of(&dataset, tags::TEXT_VALUE), "Finding present");
        assert!(!dataset.has_attribute(tags::CONCEPT_NAME_CODE_SEQUENCE));
        assert!(!dataset.has_attribute(tags::CONTENT_SEQUENCE));
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn root_item_never_writes_a_relationship() {
        let root = SrNode::new_root(SrNodeKind::Container, CodedAttribute::default());
        let dataset = write_to_new(&root);

        assert!(!dataset.has_attribute(tags::RELATIONSHIP_TYPE));
        assert_eq!(str_of(&dataset, tags::VALUE_TYPE), "CONTAINER");
        assert_eq!(str_of(&dataset, tags::CONTINUITY_OF_CONTENT), "SEPARATE");
    }

    #[test]
    fn measurement_report_sample_tree() {
        let mut root = SrNode::new_root(SrNodeKind::Container, CodedAttribute::default());
        root.add_child(SrNode::new(
            SrNodeKind::Num(Measurement {
                value: 12.5,
                units: CodedAttribute::new("mm", "UCUM", "millimeter"),
            }),
            RelationshipType::Contains,
            CodedAttribute::default(),
        ));
        let dataset = write_to_new(&root);

        assert_eq!(str_of(&dataset, tags::VALUE_TYPE), "CONTAINER");
        assert_eq!(str_of(&dataset, tags::CONTINUITY_OF_CONTENT), "SEPARATE");
        assert!(!dataset.has_attribute(tags::RELATIONSHIP_TYPE));

        let children = items_of(&dataset, tags::CONTENT_SEQUENCE);
        assert_eq!(children.len(), 1);
        let num = &children[0];
        assert_eq!(str_of(num, tags::VALUE_TYPE), "NUM");
        assert_eq!(str_of(num, tags::RELATIONSHIP_TYPE), "CONTAINS");

        let measured = items_of(num, tags::MEASURED_VALUE_SEQUENCE);
        assert_eq!(measured.len(), 1);
        assert_eq!(
            measured[0]
                .element(tags::NUMERIC_VALUE)
                .unwrap()
                .value()
                .primitive()
                .unwrap()
                .float64(),
            Some(12.5)
        );

        let units = items_of(&measured[0], tags::MEASUREMENT_UNITS_CODE_SEQUENCE);
        assert_eq!(units.len(), 1);
        assert_eq!(str_of(&units[0], tags::CODE_VALUE), "mm");
        assert_eq!(str_of(&units[0], tags::CODING_SCHEME_DESIGNATOR), "UCUM");
        assert_eq!(str_of(&units[0], tags::CODE_MEANING), "millimeter");
    }

    #[test]
    fn concept_name_is_gated_on_value_and_designator() {
        // both present: emitted
        let node = SrNode::new(
            SrNodeKind::Text("t".to_owned()),
            RelationshipType::Contains,
            CodedAttribute::new("121071", "DCM", "Finding"),
        );
        let dataset = write_to_new(&node);
        let name = items_of(&dataset, tags::CONCEPT_NAME_CODE_SEQUENCE);
        assert_eq!(name.len(), 1);
        assert_eq!(str_of(&name[0], tags::CODE_VALUE), "121071");
        assert_eq!(str_of(&name[0], tags::CODE_MEANING), "Finding");
        assert!(!name[0].has_attribute(tags::CODING_SCHEME_VERSION));

        // designator missing: not emitted, even with a code meaning
        let node = SrNode::new(
            SrNodeKind::Text("t".to_owned()),
            RelationshipType::Contains,
            CodedAttribute::new("121071", "", "Finding"),
        );
        let dataset = write_to_new(&node);
        assert!(!dataset.has_attribute(tags::CONCEPT_NAME_CODE_SEQUENCE));

        // code value missing: not emitted
        let node = SrNode::new(
            SrNodeKind::Text("t".to_owned()),
            RelationshipType::Contains,
            CodedAttribute::new("", "DCM", "Finding"),
        );
        let dataset = write_to_new(&node);
        assert!(!dataset.has_attribute(tags::CONCEPT_NAME_CODE_SEQUENCE));
    }

    #[test]
    fn coding_scheme_version_is_written_only_when_present() {
        let node = SrNode::new(
            SrNodeKind::Code(CodedAttribute::with_version("T-D0050", "SRT", "1.0", "Tissue")),
            RelationshipType::Contains,
            CodedAttribute::default(),
        );
        let dataset = write_to_new(&node);
        let entries = items_of(&dataset, tags::CONCEPT_CODE_SEQUENCE);
        assert_eq!(str_of(&entries[0], tags::CODING_SCHEME_VERSION), "1.0");
        assert_eq!(str_of(&entries[0], tags::CODE_VALUE), "T-D0050");
    }

    #[test]
    fn children_are_written_in_order() {
        let mut root = SrNode::new_root(SrNodeKind::Container, CodedAttribute::default());
        for text in ["first", "second", "third"] {
            root.add_child(SrNode::new(
                SrNodeKind::Text(text.to_owned()),
                RelationshipType::Contains,
                CodedAttribute::default(),
            ));
        }
        let dataset = write_to_new(&root);

        let children = items_of(&dataset, tags::CONTENT_SEQUENCE);
        let texts: Vec<_> = children
            .iter()
            .map(|item| str_of(item, tags::TEXT_VALUE))
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn double_write_merges_code_sequences_but_not_content() {
        let mut node = SrNode::new(
            SrNodeKind::Code(CodedAttribute::new("T-D0050", "SRT", "Tissue")),
            RelationshipType::Contains,
            CodedAttribute::new("121071", "DCM", "Finding"),
        );
        node.add_child(SrNode::new(
            SrNodeKind::Text("t".to_owned()),
            RelationshipType::HasProperties,
            CodedAttribute::default(),
        ));

        let mut dataset = MemDataSet::new_empty();
        node.write(&mut dataset).unwrap();
        assert_eq!(items_of(&dataset, tags::CONCEPT_CODE_SEQUENCE).len(), 1);
        assert_eq!(
            items_of(&dataset, tags::CONCEPT_NAME_CODE_SEQUENCE).len(),
            1
        );
        assert_eq!(items_of(&dataset, tags::CONTENT_SEQUENCE).len(), 1);

        node.write(&mut dataset).unwrap();
        assert_eq!(items_of(&dataset, tags::CONCEPT_CODE_SEQUENCE).len(), 2);
        assert_eq!(
            items_of(&dataset, tags::CONCEPT_NAME_CODE_SEQUENCE).len(),
            2
        );
        // overwritten in place, not merged
        assert_eq!(items_of(&dataset, tags::CONTENT_SEQUENCE).len(), 1);
        assert_eq!(str_of(&dataset, tags::VALUE_TYPE), "CODE");
    }

    #[test]
    fn image_item_writes_a_referenced_sop_sequence() {
        let node = SrNode::new(
            SrNodeKind::Image(ImageReference {
                sop_class_uid: "1.2.840.10008.5.1.4.1.1.2".to_owned(),
                sop_instance_uid: "1.2.3.4.5".to_owned(),
                frame_number: 3,
            }),
            RelationshipType::SelectedFrom,
            CodedAttribute::default(),
        );
        let dataset = write_to_new(&node);

        assert_eq!(str_of(&dataset, tags::VALUE_TYPE), "IMAGE");
        assert_eq!(str_of(&dataset, tags::RELATIONSHIP_TYPE), "SELECTED FROM");
        let refs = items_of(&dataset, tags::REFERENCED_SOP_SEQUENCE);
        assert_eq!(refs.len(), 1);
        assert_eq!(
            str_of(&refs[0], tags::REFERENCED_SOP_CLASS_UID),
            "1.2.840.10008.5.1.4.1.1.2"
        );
        assert_eq!(str_of(&refs[0], tags::REFERENCED_SOP_INSTANCE_UID), "1.2.3.4.5");
        assert_eq!(
            refs[0]
                .element(tags::REFERENCED_FRAME_NUMBER)
                .unwrap()
                .value()
                .primitive()
                .unwrap()
                .int32(),
            Some(3)
        );
    }

    #[test]
    fn scoord_item_writes_graphic_data_and_type() {
        let node = SrNode::new(
            SrNodeKind::Scoord(
                SpatialCoordinates::new(GraphicType::Point, vec![10.5, 20.5]).unwrap(),
            ),
            RelationshipType::InferredFrom,
            CodedAttribute::default(),
        );
        let dataset = write_to_new(&node);

        assert_eq!(str_of(&dataset, tags::VALUE_TYPE), "SCOORD");
        assert_eq!(str_of(&dataset, tags::GRAPHIC_TYPE), "POINT");
        assert_eq!(
            dataset
                .element(tags::GRAPHIC_DATA)
                .unwrap()
                .value()
                .primitive(),
            Some(&PrimitiveValue::from(vec![10.5_f32, 20.5]))
        );
        assert!(!dataset.has_attribute(tags::FRAME_OF_REFERENCE_UID));
    }

    #[test]
    fn scoord3d_item_writes_its_frame_of_reference() {
        let node = SrNode::new(
            SrNodeKind::Scoord3d(
                SpatialCoordinates3d::new(
                    GraphicType::Polyline,
                    vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
                    "1.2.840.113619.2.1.1",
                )
                .unwrap(),
            ),
            RelationshipType::InferredFrom,
            CodedAttribute::default(),
        );
        let dataset = write_to_new(&node);

        assert_eq!(str_of(&dataset, tags::VALUE_TYPE), "SCOORD3D");
        assert_eq!(str_of(&dataset, tags::GRAPHIC_TYPE), "POLYLINE");
        assert_eq!(
            str_of(&dataset, tags::FRAME_OF_REFERENCE_UID),
            "1.2.840.113619.2.1.1"
        );
        assert_eq!(
            dataset
                .element(tags::GRAPHIC_DATA)
                .unwrap()
                .value()
                .multiplicity(),
            6
        );
    }

    #[test]
    fn uidref_item_writes_its_uid() {
        let node = SrNode::new(
            SrNodeKind::UidRef("1.2.3.4".to_owned()),
            RelationshipType::HasProperties,
            CodedAttribute::default(),
        );
        let dataset = write_to_new(&node);

        assert_eq!(str_of(&dataset, tags::VALUE_TYPE), "UIDREF");
        assert_eq!(str_of(&dataset, tags::UID), "1.2.3.4");
    }

    #[derive(Debug, Snafu)]
    enum StubError {
        /// The stub sink rejects every attribute.
        #[snafu(display("sink rejected attribute"))]
        Rejected,
    }

    /// A sink which fails on any insertion.
    #[derive(Debug, Default)]
    struct FailingSink;

    impl DataSetSink for FailingSink {
        type Error = StubError;
        type Item = FailingSink;

        fn insert_scalar(
            &mut self,
            _tag: dicom_sr_core::Tag,
            _vr: VR,
            _value: PrimitiveValue,
        ) -> Result<(), StubError> {
            Err(StubError::Rejected)
        }

        fn insert_sequence(
            &mut self,
            _tag: dicom_sr_core::Tag,
            _items: Vec<FailingSink>,
        ) -> Result<(), StubError> {
            Err(StubError::Rejected)
        }

        fn merge_sequence(
            &mut self,
            _tag: dicom_sr_core::Tag,
            _items: Vec<FailingSink>,
        ) -> Result<(), StubError> {
            Err(StubError::Rejected)
        }

        fn has_attribute(&self, _tag: dicom_sr_core::Tag) -> bool {
            false
        }

        fn new_item(&self) -> FailingSink {
            FailingSink
        }
    }

    #[test]
    fn sink_failures_propagate_out_of_write() {
        let node = SrNode::new(
            SrNodeKind::Text("t".to_owned()),
            RelationshipType::Contains,
            CodedAttribute::default(),
        );
        let mut sink = FailingSink;
        assert!(matches!(node.write(&mut sink), Err(StubError::Rejected)));
    }
}
