//! This module contains the spatial coordinate payloads of the
//! SCOORD and SCOORD3D content items,
//! including the graphic type and its per-shape cardinality rules.

use snafu::{ensure, Backtrace, Snafu};
use std::fmt;

/// The graphic types supported for spatial coordinates.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum GraphicType {
    /// A single location.
    Point,
    /// An open polygon of connected line segments.
    Polyline,
}

impl GraphicType {
    /// Retrieve the DICOM defined term for this graphic type.
    pub fn as_str(self) -> &'static str {
        match self {
            GraphicType::Point => "POINT",
            GraphicType::Polyline => "POLYLINE",
        }
    }
}

impl fmt::Display for GraphicType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a spatial coordinate payload is built with a
/// graphic data length that does not match its graphic type.
///
/// Fatal for the node's construction:
/// the caller must supply correct data,
/// and no partially built node exists after the failure.
#[derive(Debug, Snafu)]
#[snafu(display(
    "invalid graphic data for {} {}: expected {} values, got {}",
    value_type,
    graphic_type,
    expected,
    got
))]
pub struct InvalidShapeDataError {
    value_type: &'static str,
    graphic_type: GraphicType,
    expected: usize,
    got: usize,
    backtrace: Backtrace,
}

/// The payload of a SCOORD content item:
/// a shape over the 2D image plane, in image coordinates.
///
/// The graphic data length is validated on construction:
/// 2 values for a POINT, 4 for a POLYLINE.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialCoordinates {
    graphic_type: GraphicType,
    graphic_data: Vec<f32>,
}

impl SpatialCoordinates {
    /// Create a 2D spatial coordinate payload,
    /// validating the graphic data length against the graphic type.
    pub fn new(
        graphic_type: GraphicType,
        graphic_data: Vec<f32>,
    ) -> Result<Self, InvalidShapeDataError> {
        let expected = match graphic_type {
            GraphicType::Point => 2,
            GraphicType::Polyline => 4,
        };
        ensure!(
            graphic_data.len() == expected,
            InvalidShapeDataSnafu {
                value_type: "SCOORD",
                graphic_type,
                expected,
                got: graphic_data.len(),
            }
        );
        Ok(SpatialCoordinates {
            graphic_type,
            graphic_data,
        })
    }

    /// Getter for the graphic type.
    pub fn graphic_type(&self) -> GraphicType {
        self.graphic_type
    }

    /// Getter for the graphic data.
    pub fn graphic_data(&self) -> &[f32] {
        &self.graphic_data
    }
}

/// The payload of a SCOORD3D content item:
/// a shape in patient space,
/// anchored to a frame of reference.
///
/// The graphic data length is validated on construction:
/// 3 values for a POINT, 6 for a POLYLINE.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialCoordinates3d {
    graphic_type: GraphicType,
    graphic_data: Vec<f32>,
    frame_of_reference_uid: String,
}

impl SpatialCoordinates3d {
    /// Create a 3D spatial coordinate payload,
    /// validating the graphic data length against the graphic type.
    pub fn new<U>(
        graphic_type: GraphicType,
        graphic_data: Vec<f32>,
        frame_of_reference_uid: U,
    ) -> Result<Self, InvalidShapeDataError>
    where
        U: Into<String>,
    {
        let expected = match graphic_type {
            GraphicType::Point => 3,
            GraphicType::Polyline => 6,
        };
        ensure!(
            graphic_data.len() == expected,
            InvalidShapeDataSnafu {
                value_type: "SCOORD3D",
                graphic_type,
                expected,
                got: graphic_data.len(),
            }
        );
        Ok(SpatialCoordinates3d {
            graphic_type,
            graphic_data,
            frame_of_reference_uid: frame_of_reference_uid.into(),
        })
    }

    /// Getter for the graphic type.
    pub fn graphic_type(&self) -> GraphicType {
        self.graphic_type
    }

    /// Getter for the graphic data.
    pub fn graphic_data(&self) -> &[f32] {
        &self.graphic_data
    }

    /// Getter for the frame of reference UID.
    pub fn frame_of_reference_uid(&self) -> &str {
        &self.frame_of_reference_uid
    }
}
