//! EWKT (extended well-known text) rendering and parsing for the point
//! types, e.g. `POINT(10 20)` or `SRID=4326;POINT(10 20)`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::GeopostError;
use crate::point::{FromEwkb, Point, PointM, PointZ, PointZm};

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_srid(f, self.srid)?;
        write!(f, "POINT({} {})", self.x, self.y)
    }
}

impl Display for PointZ {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_srid(f, self.srid)?;
        write!(f, "POINT({} {} {})", self.x, self.y, self.z)
    }
}

impl Display for PointM {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_srid(f, self.srid)?;
        write!(f, "POINTM({} {} {})", self.x, self.y, self.m)
    }
}

impl Display for PointZm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_srid(f, self.srid)?;
        write!(f, "POINT({} {} {} {})", self.x, self.y, self.z, self.m)
    }
}

fn write_srid(f: &mut Formatter<'_>, srid: Option<u32>) -> std::fmt::Result {
    if let Some(srid) = srid {
        write!(f, "SRID={srid};")?;
    }

    Ok(())
}

impl FromStr for Point {
    type Err = GeopostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coords, srid) = parse_ewkt(s, "POINT", Self::DIMENSIONS)?;
        Ok(Self::from_coords(&coords, srid))
    }
}

impl FromStr for PointZ {
    type Err = GeopostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coords, srid) = parse_ewkt(s, "POINT", Self::DIMENSIONS)?;
        Ok(Self::from_coords(&coords, srid))
    }
}

impl FromStr for PointM {
    type Err = GeopostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coords, srid) = parse_ewkt(s, "POINTM", Self::DIMENSIONS)?;
        Ok(Self::from_coords(&coords, srid))
    }
}

impl FromStr for PointZm {
    type Err = GeopostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coords, srid) = parse_ewkt(s, "POINT", Self::DIMENSIONS)?;
        Ok(Self::from_coords(&coords, srid))
    }
}

fn parse_ewkt(
    input: &str,
    keyword: &str,
    dimensions: usize,
) -> Result<(Vec<f64>, Option<u32>), GeopostError> {
    let input = input.trim();

    let (srid, rest) = match input.strip_prefix("SRID=") {
        Some(tail) => {
            let (srid, rest) = tail.split_once(';').ok_or_else(|| invalid(input))?;
            let srid = srid.trim().parse().map_err(|_| invalid(input))?;
            (Some(srid), rest.trim_start())
        }
        None => (None, input),
    };

    let body = rest
        .strip_prefix(keyword)
        .map(str::trim_start)
        .and_then(|b| b.strip_prefix('('))
        .and_then(|b| b.strip_suffix(')'))
        .ok_or_else(|| invalid(input))?;

    let coords = body
        .split_whitespace()
        .map(|c| c.parse().map_err(|_| invalid(input)))
        .collect::<Result<Vec<f64>, _>>()?;
    if coords.len() != dimensions {
        return Err(invalid(input));
    }

    Ok((coords, srid))
}

fn invalid(input: &str) -> GeopostError {
    GeopostError::Ewkt(format!("not a valid point: {input}"))
}
