//! JSON documents read and written by the CLI.
//!
//! Input: `{"geometries": [{"id": "...", "geometry": {"type": ..., "coordinates": ...}}]}`
//! with GeoJSON-style nesting of `[x, y]` pairs. Output: one report entry per
//! input geometry, in input order.

use serde::{Deserialize, Serialize};
use topocheck::{AreaConsistency, Coord, Geometry, LineSegment, LineString, Polygon, SimpleResult};

type Xy = [f64; 2];

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type", content = "coordinates")]
pub enum GeometryDto {
    Point(Xy),
    LineString(Vec<Xy>),
    LinearRing(Vec<Xy>),
    /// Shell first, then holes.
    Polygon(Vec<Vec<Xy>>),
    MultiPoint(Vec<Xy>),
    MultiLineString(Vec<Vec<Xy>>),
    MultiPolygon(Vec<Vec<Vec<Xy>>>),
    GeometryCollection(Vec<GeometryDto>),
}

#[derive(Clone, Debug, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub id: Option<String>,
    pub geometry: GeometryDto,
}

#[derive(Clone, Debug, Deserialize)]
pub struct InputDoc {
    pub geometries: Vec<Entry>,
}

fn coord(xy: Xy) -> Coord {
    Coord::new(xy[0], xy[1])
}

fn xy(c: Coord) -> Xy {
    [c.x, c.y]
}

fn line(pts: Vec<Xy>) -> LineString {
    LineString::new(pts.into_iter().map(coord).collect())
}

fn polygon(rings: Vec<Vec<Xy>>) -> Polygon {
    let mut rings = rings.into_iter().map(line);
    match rings.next() {
        Some(shell) => Polygon::new(shell, rings.collect()),
        None => Polygon::default(),
    }
}

impl From<GeometryDto> for Geometry {
    fn from(dto: GeometryDto) -> Self {
        match dto {
            GeometryDto::Point(p) => Geometry::Point(coord(p)),
            GeometryDto::LineString(pts) => Geometry::LineString(line(pts)),
            GeometryDto::LinearRing(pts) => Geometry::LinearRing(line(pts)),
            GeometryDto::Polygon(rings) => Geometry::Polygon(polygon(rings)),
            GeometryDto::MultiPoint(pts) => Geometry::MultiPoint(pts.into_iter().map(coord).collect()),
            GeometryDto::MultiLineString(ls) => {
                Geometry::MultiLineString(ls.into_iter().map(line).collect())
            }
            GeometryDto::MultiPolygon(ps) => {
                Geometry::MultiPolygon(ps.into_iter().map(polygon).collect())
            }
            GeometryDto::GeometryCollection(gs) => {
                Geometry::GeometryCollection(gs.into_iter().map(Geometry::from).collect())
            }
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimpleReport {
    pub is_simple: bool,
    pub non_simple_points: Vec<Xy>,
}

impl From<SimpleResult> for SimpleReport {
    fn from(r: SimpleResult) -> Self {
        Self {
            is_simple: r.is_simple,
            non_simple_points: r.non_simple_points.into_iter().map(xy).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AreaReport {
    pub is_consistent: bool,
    pub invalid_points: Vec<Xy>,
    pub invalid_segments: Vec<[Xy; 2]>,
}

impl From<AreaConsistency> for AreaReport {
    fn from(r: AreaConsistency) -> Self {
        let seg = |s: LineSegment| [xy(s.p0), xy(s.p1)];
        Self {
            is_consistent: r.is_consistent,
            invalid_points: r.invalid_points.into_iter().map(xy).collect(),
            invalid_segments: r.invalid_segments.into_iter().map(seg).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EntryReport {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub simple: Option<SimpleReport>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub area: Option<AreaReport>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub version: String,
    pub rule: String,
    pub strategy: String,
    pub results: Vec<EntryReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_document_converts_shell_then_holes() {
        let raw = r#"{"type": "Polygon", "coordinates": [
            [[0,0],[10,0],[10,10],[0,10],[0,0]],
            [[2,2],[3,2],[3,3],[2,2]]
        ]}"#;
        let dto: GeometryDto = serde_json::from_str(raw).unwrap();
        let Geometry::Polygon(p) = Geometry::from(dto) else {
            panic!("expected a polygon");
        };
        assert_eq!(p.exterior.coords.len(), 5);
        assert_eq!(p.interiors.len(), 1);
        assert_eq!(p.interiors[0].coords[1], Coord::new(3.0, 2.0));
    }

    #[test]
    fn empty_polygon_and_nested_collection() {
        let raw = r#"{"type": "GeometryCollection", "coordinates": [
            {"type": "Polygon", "coordinates": []},
            {"type": "Point", "coordinates": [1, 2]}
        ]}"#;
        let dto: GeometryDto = serde_json::from_str(raw).unwrap();
        let geom = Geometry::from(dto);
        let Geometry::GeometryCollection(parts) = &geom else {
            panic!("expected a collection");
        };
        assert!(parts[0].is_empty());
        assert_eq!(parts[1], Geometry::Point(Coord::new(1.0, 2.0)));
    }

    #[test]
    fn reports_skip_absent_sections() {
        let entry = EntryReport {
            id: "a".into(),
            simple: Some(SimpleReport {
                is_simple: true,
                non_simple_points: vec![],
            }),
            area: None,
        };
        let v = serde_json::to_value(&entry).unwrap();
        assert!(v.get("area").is_none());
        assert_eq!(v["simple"]["is_simple"], true);
    }
}
