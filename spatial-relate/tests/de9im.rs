#[cfg(test)]
mod tests {
    use test_case::test_case;

    use spatial_relate::geometry::Geometry;
    use spatial_relate::geometry::geo_enums::GeoPosition::{Boundary, Exterior, Interior};
    use spatial_relate::geometry::geo_enums::SpatialRelation;
    use spatial_relate::geometry::primitives::{Point, Polygon, Segment};
    use spatial_relate::trace::TraceStep;
    use spatial_relate::{Relator, classify};

    use SpatialRelation::*;

    const SQUARE: [(f64, f64); 4] = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];

    fn pt(x: f64, y: f64) -> Geometry {
        Geometry::Point(Point(x, y))
    }

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Geometry {
        Geometry::Segment(Segment::new(Point(x1, y1), Point(x2, y2)).unwrap())
    }

    fn poly(ring: &[(f64, f64)]) -> Geometry {
        Geometry::Polygon(Polygon::new(ring.iter().map(|p| Point::from(*p)).collect()).unwrap())
    }

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Geometry {
        poly(&[(x_min, y_min), (x_max, y_min), (x_max, y_max), (x_min, y_max)])
    }

    #[test_case(pt(3.0, 4.0), pt(3.0, 4.0), "0FFFFFFF2", Equals; "equal points")]
    #[test_case(pt(3.0, 4.0), pt(4.0, 3.0), "FF0FFF0F2", Disjoint; "distinct points")]
    #[test_case(pt(0.0, 0.0), seg(0.0, 0.0, 10.0, 0.0), "F0FFFF102", Touches; "point at an endpoint")]
    #[test_case(pt(5.0, 0.0), seg(0.0, 0.0, 10.0, 0.0), "0FFFFF102", Within; "point on a segment")]
    #[test_case(seg(0.0, 0.0, 10.0, 0.0), seg(5.0, 0.0, 15.0, 0.0), "1010F0102", Overlaps; "collinear overlap")]
    #[test_case(seg(0.0, 0.0, 10.0, 0.0), seg(3.0, 0.0, 7.0, 0.0), "101FF0FF2", Contains; "segment in segment")]
    #[test_case(seg(0.0, 0.0, 10.0, 10.0), seg(0.0, 10.0, 10.0, 0.0), "0F1FF0102", Crosses; "crossing segments")]
    #[test_case(pt(5.0, 5.0), poly(&SQUARE), "0FFFFF212", Within; "point inside")]
    #[test_case(pt(15.0, 15.0), poly(&SQUARE), "FF0FFF212", Disjoint; "point outside")]
    #[test_case(pt(0.0, 5.0), poly(&SQUARE), "F0FFFF212", Touches; "point on an edge")]
    #[test_case(seg(-5.0, 5.0, 15.0, 5.0), poly(&SQUARE), "1010F0212", Crosses; "segment through a polygon")]
    #[test_case(rect(0.0, 0.0, 20.0, 20.0), rect(5.0, 5.0, 15.0, 15.0), "212FF1FF2", Contains; "nested squares")]
    #[test_case(rect(0.0, 0.0, 10.0, 10.0), rect(10.0, 0.0, 20.0, 10.0), "FF2F11212", Touches; "shared edge")]
    fn matrix(a: Geometry, b: Geometry, expected_matrix: &str, expected: SpatialRelation) {
        let relator = Relator::default();
        let m = relator.relate_matrix(&a, &b);
        assert_eq!(m.to_string(), expected_matrix);
        assert_eq!(m.relation(), expected);

        let converse = relator.relate_matrix(&b, &a);
        assert_eq!(converse, m.transpose());
        assert_eq!(converse.relation(), expected.converse());
    }

    #[test_case(rect(0.0, 4.0, 10.0, 6.0), rect(4.0, 0.0, 6.0, 10.0); "plus shape")]
    #[test_case(
        poly(&[(0.0, 0.0), (30.0, 0.0), (30.0, 30.0), (20.0, 30.0), (20.0, 10.0), (10.0, 10.0), (10.0, 30.0), (0.0, 30.0)]),
        rect(5.0, 15.0, 25.0, 25.0);
        "rectangle across a notch"
    )]
    fn overlap_without_vertex_containment(a: Geometry, b: Geometry) {
        let relator = Relator::default();
        let m = relator.relate_matrix(&a, &b);
        assert_eq!(m.get(Interior, Interior), 2);
        assert_eq!(m.get(Boundary, Boundary), 0);
        assert_eq!(m.relation(), Overlaps);
        //vertex sampling misses these
        assert_ne!(classify(&a, &b).unwrap(), Overlaps);
    }

    #[test]
    fn exteriors_always_meet() {
        let relator = Relator::default();
        let m = relator.relate_matrix(&pt(1.0, 1.0), &seg(5.0, 5.0, 6.0, 6.0));
        assert_eq!(m.get(Exterior, Exterior), 2);
        assert_eq!(m.dims, [0, 1]);
    }

    #[test]
    fn traced_matrix() {
        let (m, trace) = Relator::default().relate_matrix_traced(&pt(5.0, 5.0), &poly(&SQUARE));
        assert_eq!(trace.conclusion(), Some(m.relation()));
        assert!(
            trace
                .steps
                .iter()
                .any(|s| matches!(s, TraceStep::Matrix { matrix } if *matrix == m))
        );
        assert!(trace.to_string().contains("0FFFFF212"));
    }
}
