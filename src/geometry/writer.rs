//! WKT text in the spelling PostGIS and JTS print: a space between the type
//! tag and its coordinates, `, ` between coordinates, `EMPTY` for geometries
//! without coordinates.

use geo_types::{Coord, Geometry, LineString, Point, Polygon};
use std::fmt;

/// Displays a geometry as WKT, e.g. `POINT (10 10)`
pub struct WktText<'a>(pub &'a Geometry<f64>);

impl fmt::Display for WktText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Geometry::Point(point) => {
                f.write_str("POINT ")?;
                write_point(f, point)
            }
            Geometry::Line(line) => {
                f.write_str("LINESTRING ")?;
                write_coords(f, [line.start, line.end].iter())
            }
            Geometry::LineString(line) => {
                f.write_str("LINESTRING ")?;
                write_line(f, line)
            }
            Geometry::Polygon(polygon) => {
                f.write_str("POLYGON ")?;
                write_polygon(f, polygon)
            }
            Geometry::Rect(rect) => {
                f.write_str("POLYGON ")?;
                write_polygon(f, &rect.to_polygon())
            }
            Geometry::Triangle(triangle) => {
                f.write_str("POLYGON ")?;
                write_polygon(f, &triangle.to_polygon())
            }
            Geometry::MultiPoint(points) => {
                f.write_str("MULTIPOINT ")?;
                write_list(f, &points.0, write_point)
            }
            Geometry::MultiLineString(lines) => {
                f.write_str("MULTILINESTRING ")?;
                write_list(f, &lines.0, write_line)
            }
            Geometry::MultiPolygon(polygons) => {
                f.write_str("MULTIPOLYGON ")?;
                write_list(f, &polygons.0, write_polygon)
            }
            Geometry::GeometryCollection(collection) => {
                f.write_str("GEOMETRYCOLLECTION ")?;
                write_list(f, &collection.0, |f, member| {
                    fmt::Display::fmt(&WktText(member), f)
                })
            }
        }
    }
}

fn write_coord(f: &mut fmt::Formatter<'_>, coord: &Coord<f64>) -> fmt::Result {
    write!(f, "{} {}", coord.x, coord.y)
}

fn write_coords<'c>(
    f: &mut fmt::Formatter<'_>,
    coords: impl Iterator<Item = &'c Coord<f64>>,
) -> fmt::Result {
    f.write_str("(")?;
    for (i, coord) in coords.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_coord(f, coord)?;
    }
    f.write_str(")")
}

fn write_point(f: &mut fmt::Formatter<'_>, point: &Point<f64>) -> fmt::Result {
    write_coords(f, std::iter::once(&point.0))
}

fn write_line(f: &mut fmt::Formatter<'_>, line: &LineString<f64>) -> fmt::Result {
    if line.0.is_empty() {
        return f.write_str("EMPTY");
    }
    write_coords(f, line.0.iter())
}

fn write_polygon(f: &mut fmt::Formatter<'_>, polygon: &Polygon<f64>) -> fmt::Result {
    if polygon.exterior().0.is_empty() {
        return f.write_str("EMPTY");
    }
    f.write_str("(")?;
    write_coords(f, polygon.exterior().0.iter())?;
    for ring in polygon.interiors() {
        f.write_str(", ")?;
        write_coords(f, ring.0.iter())?;
    }
    f.write_str(")")
}

fn write_list<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    write_item: impl Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    if items.is_empty() {
        return f.write_str("EMPTY");
    }
    f.write_str("(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    f.write_str(")")
}
