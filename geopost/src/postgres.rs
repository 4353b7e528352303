//! Conversions between the point types and `postgres` column values.
//!
//! Reading goes through the EWKB decoder (PostGIS returns geometry columns
//! as hex-encoded EWKB); writing renders EWKT text and leaves it to the
//! server to cast into a geometry value.

use bytes::BytesMut;
use postgres_types::{to_sql_checked, FromSql, IsNull, ToSql, Type};

use crate::point::{FromEwkb, Point, PointM, PointZ, PointZm};

fn is_geometry(ty: &Type) -> bool {
    matches!(ty.name(), "geometry" | "geography")
}

macro_rules! point_sql_impls {
    ($point:ty) => {
        impl<'a> FromSql<'a> for $point {
            fn from_sql(
                _: &Type,
                raw: &'a [u8],
            ) -> Result<Self, Box<dyn std::error::Error + Sync + Send>> {
                Ok(<$point>::from_ewkb_hex(raw)?)
            }

            fn accepts(ty: &Type) -> bool {
                is_geometry(ty)
            }
        }

        impl ToSql for $point {
            fn to_sql(
                &self,
                _: &Type,
                out: &mut BytesMut,
            ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
                out.extend_from_slice(self.to_string().as_bytes());
                Ok(IsNull::No)
            }

            fn accepts(ty: &Type) -> bool {
                is_geometry(ty)
            }

            to_sql_checked!();
        }
    };
}

point_sql_impls!(Point);
point_sql_impls!(PointZ);
point_sql_impls!(PointM);
point_sql_impls!(PointZm);
