#[cfg(test)]
mod tests {
    use test_case::test_case;

    use spatial_relate::geometry::Geometry;
    use spatial_relate::geometry::geo_enums::SpatialRelation;
    use spatial_relate::io::answer::extract_relation;
    use spatial_relate::io::export::{export_geometry, export_record};
    use spatial_relate::io::ext_repr::{ExtGeometry, ExtRelationRecord};
    use spatial_relate::io::import::{import_geometry, import_record};
    use spatial_relate::classify;

    const RECORD: &str = r#"{
        "entity1": {"type": "line", "coordinates": [[-5.0, 5.0], [15.0, 5.0]]},
        "entity2": {"type": "polygon", "coordinates": [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]},
        "spatial_relation": "Crosses"
    }"#;

    #[test]
    fn import_labelled_record() {
        let record: ExtRelationRecord = serde_json::from_str(RECORD).unwrap();
        assert_eq!(record.spatial_relation, Some(SpatialRelation::Crosses));
        assert_eq!(record.output, None);

        let (a, b) = import_record(&record).unwrap();
        let Geometry::Polygon(square) = &b else {
            panic!("expected a polygon, got {b:?}")
        };
        assert_eq!(square.n_vertices(), 4);
        assert_eq!(classify(&a, &b).unwrap(), SpatialRelation::Crosses);
    }

    #[test]
    fn exported_ring_is_closed() {
        let record: ExtRelationRecord = serde_json::from_str(RECORD).unwrap();
        let polygon = import_geometry(&record.entity2).unwrap();
        assert_eq!(export_geometry(&polygon), record.entity2);
    }

    #[test]
    fn unclosed_ring_is_accepted() {
        let ext = ExtGeometry::Polygon(vec![(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        let Geometry::Polygon(triangle) = import_geometry(&ext).unwrap() else {
            panic!("expected a polygon")
        };
        assert_eq!(triangle.n_vertices(), 3);
    }

    #[test_case(r#"{"type": "line", "coordinates": [[1.0, 1.0], [1.0, 1.0]]}"#; "zero length line")]
    #[test_case(r#"{"type": "polygon", "coordinates": [[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]}"#; "two vertex ring")]
    fn degenerate_input_is_rejected(json: &str) {
        let ext: ExtGeometry = serde_json::from_str(json).unwrap();
        assert!(import_geometry(&ext).is_err());
    }

    #[test]
    fn record_serialization_skips_missing_fields() {
        let record = export_record(
            &Geometry::Point((1.0, 2.0).into()),
            &Geometry::Point((1.0, 2.0).into()),
            None,
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"entity1":{"type":"point","coordinates":[1.0,2.0]},"entity2":{"type":"point","coordinates":[1.0,2.0]}}"#
        );
    }

    #[test_case("Step 1: the line meets the edge.\nTherefore, relation = 'Touches'", Some(SpatialRelation::Touches); "single quoted")]
    #[test_case("The answer is \"Within\".\n", Some(SpatialRelation::Within); "double quoted")]
    #[test_case("relation = 'Crosses'\nchecked with 'math'", Some(SpatialRelation::Crosses); "skips non labels")]
    #[test_case("Final: 'Overlaps'\n1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n11", Some(SpatialRelation::Overlaps); "quoted outside the last lines")]
    #[test_case("so the two shapes are Disjoint", Some(SpatialRelation::Disjoint); "bare keyword")]
    #[test_case("no idea", None; "nothing")]
    fn relation_extraction(text: &str, expected: Option<SpatialRelation>) {
        assert_eq!(extract_relation(text), expected);
    }
}
