//! PostGIS point types for Rust database clients.
//!
//! The crate decodes the hex-encoded EWKB values PostGIS hands to clients
//! into plain point structs, renders and parses their EWKT text form, and
//! serializes them to JSON through serde. The `postgres` feature adds
//! `postgres_types` conversions so the types can be used directly as query
//! parameters and row fields.
//!
//! # Quick start
//!
//! ```
//! use geopost::{FromEwkb, Point};
//!
//! // A `geometry` column value for SRID=4326;POINT(10 20).
//! let hex = b"0101000020E610000000000000000024400000000000003440";
//!
//! let point = Point::from_ewkb_hex(hex)?;
//! assert_eq!(point.x, 10.0);
//! assert_eq!(point.y, 20.0);
//! assert_eq!(point.srid, Some(4326));
//! assert_eq!(point.to_string(), "SRID=4326;POINT(10 20)");
//! # Ok::<(), geopost::GeopostError>(())
//! ```
//!
//! NULL column values and JSON `null` are modeled with `Option<Point>`; the
//! point types themselves always hold concrete coordinates.

pub mod error;
pub use error::GeopostError;

mod point;
pub use point::{FromEwkb, Point, PointM, PointZ, PointZm, FLAG_M, FLAG_SRID, FLAG_Z, TYPE_POINT};

mod ewkt;

#[cfg(feature = "postgres")]
mod postgres;

pub use geopost_ewkb::{EwkbError, EwkbReader};
