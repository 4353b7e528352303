use geopost_ewkb::EwkbReader;
use serde::{Deserialize, Serialize};

use crate::error::GeopostError;

/// Geometry-kind value of a point in the EWKB type tag.
pub const TYPE_POINT: u32 = 1;

/// Type-tag bit indicating that coordinates carry a Z value.
pub const FLAG_Z: u32 = 0x8000_0000;

/// Type-tag bit indicating that coordinates carry an M value.
pub const FLAG_M: u32 = 0x4000_0000;

/// Type-tag bit indicating that an SRID field precedes the coordinates.
pub const FLAG_SRID: u32 = 0x2000_0000;

/// Construction of a point shape from a decoded EWKB value.
///
/// This trait is the seam between the point types and [`EwkbReader`]: the
/// reader stays generic over geometry kinds, and each shape declares here how
/// many coordinate doubles it pulls out of the value.
///
/// Only the SRID presence bit of the type tag is inspected. The geometry-kind
/// bits and the Z/M flags are not checked against the shape being read, so a
/// caller expecting the wrong shape reads whatever doubles are there, failing
/// only if it runs past the end of the buffer.
pub trait FromEwkb: Sized {
    /// Number of coordinate doubles this shape reads.
    const DIMENSIONS: usize;

    /// Builds the shape from its coordinate tuple.
    ///
    /// `coords` holds exactly [`DIMENSIONS`](Self::DIMENSIONS) values when
    /// called through [`from_ewkb_hex`](Self::from_ewkb_hex).
    fn from_coords(coords: &[f64], srid: Option<u32>) -> Self;

    /// Decodes the shape from a hex-encoded EWKB value.
    fn from_ewkb_hex(hex: &[u8]) -> Result<Self, GeopostError> {
        let mut reader = EwkbReader::decode(hex)?;
        let srid = if reader.geometry_type() & FLAG_SRID != 0 {
            Some(reader.read_u32()?)
        } else {
            None
        };
        let coords = reader.read_f64s(Self::DIMENSIONS)?;

        Ok(Self::from_coords(&coords, srid))
    }
}

/// 2d point, `POINT(x y)`.
///
/// A NULL database value or JSON `null` is represented by `Option<Point>` on
/// the caller's side; the type itself is always a concrete point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate (easting or longitude).
    pub x: f64,
    /// Y coordinate (northing or latitude).
    pub y: f64,
    /// Spatial reference identifier, if the value carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srid: Option<u32>,
}

impl Point {
    /// Creates a new point without an SRID.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, srid: None }
    }

    /// Creates a new point with the given SRID.
    pub fn with_srid(x: f64, y: f64, srid: u32) -> Self {
        Self {
            x,
            y,
            srid: Some(srid),
        }
    }
}

impl FromEwkb for Point {
    const DIMENSIONS: usize = 2;

    fn from_coords(coords: &[f64], srid: Option<u32>) -> Self {
        Self {
            x: coords[0],
            y: coords[1],
            srid,
        }
    }
}

/// 3d point with elevation, `POINT(x y z)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointZ {
    /// X coordinate (easting or longitude).
    pub x: f64,
    /// Y coordinate (northing or latitude).
    pub y: f64,
    /// Z coordinate (elevation).
    pub z: f64,
    /// Spatial reference identifier, if the value carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srid: Option<u32>,
}

impl PointZ {
    /// Creates a new point without an SRID.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            srid: None,
        }
    }

    /// Creates a new point with the given SRID.
    pub fn with_srid(x: f64, y: f64, z: f64, srid: u32) -> Self {
        Self {
            x,
            y,
            z,
            srid: Some(srid),
        }
    }
}

impl FromEwkb for PointZ {
    const DIMENSIONS: usize = 3;

    fn from_coords(coords: &[f64], srid: Option<u32>) -> Self {
        Self {
            x: coords[0],
            y: coords[1],
            z: coords[2],
            srid,
        }
    }
}

/// 2d point with a measure value, `POINTM(x y m)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointM {
    /// X coordinate (easting or longitude).
    pub x: f64,
    /// Y coordinate (northing or latitude).
    pub y: f64,
    /// Measure value.
    pub m: f64,
    /// Spatial reference identifier, if the value carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srid: Option<u32>,
}

impl PointM {
    /// Creates a new point without an SRID.
    pub fn new(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            m,
            srid: None,
        }
    }

    /// Creates a new point with the given SRID.
    pub fn with_srid(x: f64, y: f64, m: f64, srid: u32) -> Self {
        Self {
            x,
            y,
            m,
            srid: Some(srid),
        }
    }
}

impl FromEwkb for PointM {
    const DIMENSIONS: usize = 3;

    fn from_coords(coords: &[f64], srid: Option<u32>) -> Self {
        Self {
            x: coords[0],
            y: coords[1],
            m: coords[2],
            srid,
        }
    }
}

/// 3d point with elevation and a measure value, `POINT(x y z m)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointZm {
    /// X coordinate (easting or longitude).
    pub x: f64,
    /// Y coordinate (northing or latitude).
    pub y: f64,
    /// Z coordinate (elevation).
    pub z: f64,
    /// Measure value.
    pub m: f64,
    /// Spatial reference identifier, if the value carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srid: Option<u32>,
}

impl PointZm {
    /// Creates a new point without an SRID.
    pub fn new(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z,
            m,
            srid: None,
        }
    }

    /// Creates a new point with the given SRID.
    pub fn with_srid(x: f64, y: f64, z: f64, m: f64, srid: u32) -> Self {
        Self {
            x,
            y,
            z,
            m,
            srid: Some(srid),
        }
    }
}

impl FromEwkb for PointZm {
    const DIMENSIONS: usize = 4;

    fn from_coords(coords: &[f64], srid: Option<u32>) -> Self {
        Self {
            x: coords[0],
            y: coords[1],
            z: coords[2],
            m: coords[3],
            srid,
        }
    }
}
