//! Bounding rectangles from WKT geometry text, for bulk loading an index.
//!
//! Input holds one or more geometries separated by blank lines.

use wkt::types::{Coord, LineString};
use wkt::{Geometry, Wkt};

use crate::{Coordinate, IndexError, Rect};

/// The envelope of each geometry in `text`, in input order.
pub fn envelopes_from_wkt(text: &str) -> Result<Vec<Rect>, IndexError> {
    parse_geometries(text)?
        .iter()
        .enumerate()
        .map(|(idx, geom)| {
            let mut coords = Vec::new();
            collect_coords(geom, &mut coords);
            Rect::of(&coords).ok_or(IndexError::EmptyGeometry(idx))
        })
        .collect()
}

/// The envelope of every segment of every line string and polygon ring in
/// `text`. Points contribute nothing.
pub fn segment_envelopes_from_wkt(text: &str) -> Result<Vec<Rect>, IndexError> {
    let mut lines = Vec::new();
    for geom in parse_geometries(text)?.iter() {
        collect_lines(geom, &mut lines);
    }
    Ok(lines
        .iter()
        .flat_map(|coords| rectangles_from_coordinates(coords))
        .collect())
}

pub fn rectangles_from_coordinates(coords: &[Coordinate]) -> Vec<Rect> {
    coords
        .windows(2)
        .map(|c| Rect::from_corners(c[0], c[1]))
        .collect()
}

fn parse_geometries(text: &str) -> Result<Vec<Geometry<f64>>, IndexError> {
    let mut geometries = Vec::new();
    for chunk in text.split("\n\n").map(str::trim).filter(|c| !c.is_empty()) {
        let parsed: Wkt<f64> = Wkt::from_str(chunk).map_err(|e| IndexError::Wkt(e.to_string()))?;
        geometries.extend(parsed.items);
    }
    Ok(geometries)
}

fn to_coordinate(coord: &Coord<f64>) -> Coordinate {
    Coordinate::new(coord.x, coord.y)
}

fn line_coords(line: &LineString<f64>) -> Vec<Coordinate> {
    line.0.iter().map(to_coordinate).collect()
}

fn collect_coords(geom: &Geometry<f64>, coords: &mut Vec<Coordinate>) {
    match geom {
        Geometry::Point(point) => coords.extend(point.0.iter().map(to_coordinate)),
        Geometry::MultiPoint(points) => {
            coords.extend(points.0.iter().flat_map(|p| p.0.iter()).map(to_coordinate))
        }
        Geometry::GeometryCollection(collection) => {
            for inner in collection.0.iter() {
                collect_coords(inner, coords);
            }
        }
        _ => {
            let mut lines = Vec::new();
            collect_lines(geom, &mut lines);
            coords.extend(lines.into_iter().flatten());
        }
    }
}

fn collect_lines(geom: &Geometry<f64>, lines: &mut Vec<Vec<Coordinate>>) {
    match geom {
        Geometry::Point(_) | Geometry::MultiPoint(_) => {}
        Geometry::LineString(line) => lines.push(line_coords(line)),
        Geometry::MultiLineString(multi) => lines.extend(multi.0.iter().map(line_coords)),
        Geometry::Polygon(poly) => lines.extend(poly.0.iter().map(line_coords)),
        Geometry::MultiPolygon(multi) => {
            for poly in multi.0.iter() {
                lines.extend(poly.0.iter().map(line_coords));
            }
        }
        Geometry::GeometryCollection(collection) => {
            for inner in collection.0.iter() {
                collect_lines(inner, lines);
            }
        }
    }
}
