#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use relate_cli::eval::{Evaluation, evaluate};
    use relate_cli::io;
    use spatial_relate::Relator;
    use spatial_relate::geometry::geo_enums::SpatialRelation;
    use spatial_relate::util::{PolygonMode, RelateConfig};

    #[test_case("../assets/line_polygon.json", 4; "json array")]
    #[test_case("../assets/mixed.jsonl", 5; "json lines")]
    fn read_records(path: &str, n_records: usize) {
        let records = io::read_records(Path::new(path)).unwrap();
        assert_eq!(records.len(), n_records);
    }

    #[test]
    fn labelled_dataset_is_reproduced() {
        let records = io::read_records(Path::new("../assets/line_polygon.json")).unwrap();
        let Evaluation { summary, results } = evaluate(&Relator::default(), &records, false);

        assert_eq!(summary.n_records, 4);
        assert_eq!(summary.n_failed, 0);
        assert_eq!(summary.n_agreeing, 4);
        assert_eq!(summary.accuracy, Some(1.0));
        assert!(summary.confusions.is_empty());
        assert!(results.iter().all(|r| r.trace.is_none()));
    }

    #[test]
    fn mixed_records() {
        let records = io::read_records(Path::new("../assets/mixed.jsonl")).unwrap();
        let Evaluation { summary, results } = evaluate(&Relator::default(), &records, true);

        assert_eq!(summary.n_records, 5);
        assert_eq!(summary.n_failed, 1);
        assert_eq!(summary.n_labelled, 3);
        assert_eq!(summary.n_agreeing, 2);
        assert!(approx_eq!(f64, summary.accuracy.unwrap(), 2.0 / 3.0));
        assert_eq!(summary.confusions["Touches -> Crosses"], 1);
        assert_eq!(summary.distribution[&SpatialRelation::Equals], 1);

        //label recovered from the narrated output
        assert_eq!(results[1].expected, Some(SpatialRelation::Contains));
        assert_eq!(results[1].predicted, Some(SpatialRelation::Contains));
        //zero-length line
        assert!(results[3].error.is_some());
        assert_eq!(results[3].agrees(), None);
        //unlabelled
        assert_eq!(results[4].expected, None);
        assert!(results.iter().filter(|r| r.error.is_none()).all(|r| r.trace.is_some()));
    }

    #[test]
    fn config_round_trip() {
        let config = RelateConfig {
            polygon_mode: PolygonMode::EdgeIntersection,
            on_segment_tolerance: 0.05,
            ..RelateConfig::default()
        };
        let path = std::env::temp_dir().join("relate_cli_config_round_trip.json");
        io::write_json(&config, &path).unwrap();
        let read = io::read_config(&path).unwrap();
        assert_eq!(read.polygon_mode, config.polygon_mode);
        assert_eq!(read.coordinate_decimals, config.coordinate_decimals);
        assert!(approx_eq!(f64, read.on_segment_tolerance, 0.05, ulps = 2));
        assert!(approx_eq!(f64, read.side_tolerance, config.side_tolerance, ulps = 2));
    }

    #[test]
    fn partial_config_uses_defaults() {
        let path = std::env::temp_dir().join("relate_cli_partial_config.json");
        std::fs::write(&path, r#"{"polygon_mode": "edge_intersection"}"#).unwrap();
        let config = io::read_config(&path).unwrap();
        assert_eq!(config.polygon_mode, PolygonMode::EdgeIntersection);
        assert_eq!(config.coordinate_decimals, RelateConfig::default().coordinate_decimals);
    }

    #[test]
    fn evaluation_serializes() {
        let records = io::read_records(Path::new("../assets/mixed.jsonl")).unwrap();
        let evaluation = evaluate(&Relator::default(), &records, false);
        let json = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(json["summary"]["distribution"]["Within"], 1);
        assert_eq!(json["results"][0]["predicted"], "Within");
    }
}
