//! Attribute tag constants for the structured report content item macro
//! (PS3.3 Table 10-2) and the code sequence macro (PS3.3 Table 8.8-1),
//! named by their DICOM keyword.

use crate::header::Tag;

/// Code Value (0008,0100)
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// Coding Scheme Designator (0008,0102)
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// Coding Scheme Version (0008,0103)
pub const CODING_SCHEME_VERSION: Tag = Tag(0x0008, 0x0103);
/// Code Meaning (0008,0104)
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// Referenced SOP Class UID (0008,1150)
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// Referenced SOP Instance UID (0008,1155)
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// Referenced Frame Number (0008,1160)
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);
/// Referenced SOP Sequence (0008,1199)
pub const REFERENCED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1199);
/// Frame of Reference UID (3006,0024)
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x3006, 0x0024);
/// Measurement Units Code Sequence (0040,08EA)
pub const MEASUREMENT_UNITS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x08EA);
/// Relationship Type (0040,A010)
pub const RELATIONSHIP_TYPE: Tag = Tag(0x0040, 0xA010);
/// Value Type (0040,A040)
pub const VALUE_TYPE: Tag = Tag(0x0040, 0xA040);
/// Concept Name Code Sequence (0040,A043)
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// Continuity Of Content (0040,A050)
pub const CONTINUITY_OF_CONTENT: Tag = Tag(0x0040, 0xA050);
/// UID (0040,A124)
pub const UID: Tag = Tag(0x0040, 0xA124);
/// Text Value (0040,A160)
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);
/// Concept Code Sequence (0040,A168)
pub const CONCEPT_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA168);
/// Measured Value Sequence (0040,A300)
pub const MEASURED_VALUE_SEQUENCE: Tag = Tag(0x0040, 0xA300);
/// Numeric Value (0040,A30A)
pub const NUMERIC_VALUE: Tag = Tag(0x0040, 0xA30A);
/// Content Sequence (0040,A730)
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// Graphic Data (0070,0022)
pub const GRAPHIC_DATA: Tag = Tag(0x0070, 0x0022);
/// Graphic Type (0070,0023)
pub const GRAPHIC_TYPE: Tag = Tag(0x0070, 0x0023);
