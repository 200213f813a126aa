use std::collections::BTreeMap;

use anyhow::Result;
use itertools::Itertools;
use log::warn;
use rayon::prelude::*;
use serde::Serialize;
use spatial_relate::Relator;
use spatial_relate::geometry::geo_enums::SpatialRelation;
use spatial_relate::io::answer::extract_relation;
use spatial_relate::io::ext_repr::ExtRelationRecord;
use spatial_relate::io::import::import_record;
use spatial_relate::trace::Trace;

/// Outcome for a single record
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordResult {
    pub index: usize,
    /// The record's label, or the relation concluded in its narrated output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<SpatialRelation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted: Option<SpatialRelation>,
    /// Why the record could not be classified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<String>>,
}

impl RecordResult {
    pub fn agrees(&self) -> Option<bool> {
        match (self.expected, self.predicted) {
            (Some(e), Some(p)) => Some(e == p),
            _ => None,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct Summary {
    pub n_records: usize,
    /// Records that could not be imported
    pub n_failed: usize,
    /// Classified records with an expected relation
    pub n_labelled: usize,
    pub n_agreeing: usize,
    /// `n_agreeing / n_labelled`, absent without labelled records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    /// Predicted relations
    pub distribution: BTreeMap<SpatialRelation, usize>,
    /// Disagreements, keyed `"<expected> -> <predicted>"`
    pub confusions: BTreeMap<String, usize>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub summary: Summary,
    pub results: Vec<RecordResult>,
}

/// Classifies every record (in parallel) and compares the outcome with its label
pub fn evaluate(relator: &Relator, records: &[ExtRelationRecord], with_trace: bool) -> Evaluation {
    let results = records
        .par_iter()
        .enumerate()
        .map(|(index, record)| {
            let expected = record
                .spatial_relation
                .or_else(|| record.output.as_deref().and_then(extract_relation));
            match classify_record(relator, record, with_trace) {
                Ok((predicted, trace)) => RecordResult {
                    index,
                    expected,
                    predicted: Some(predicted),
                    error: None,
                    trace: trace.map(|t| t.lines()),
                },
                Err(e) => {
                    warn!("[EVAL] record {index} skipped: {e:#}");
                    RecordResult {
                        index,
                        expected,
                        predicted: None,
                        error: Some(format!("{e:#}")),
                        trace: None,
                    }
                }
            }
        })
        .collect::<Vec<_>>();

    Evaluation {
        summary: summarize(&results),
        results,
    }
}

fn classify_record(
    relator: &Relator,
    record: &ExtRelationRecord,
    with_trace: bool,
) -> Result<(SpatialRelation, Option<Trace>)> {
    let (a, b) = import_record(record)?;
    match with_trace {
        true => {
            let (relation, trace) = relator.classify_traced(&a, &b)?;
            Ok((relation, Some(trace)))
        }
        false => Ok((relator.classify(&a, &b)?, None)),
    }
}

pub fn summarize(results: &[RecordResult]) -> Summary {
    let n_labelled = results.iter().filter(|r| r.agrees().is_some()).count();
    let n_agreeing = results.iter().filter(|r| r.agrees() == Some(true)).count();

    Summary {
        n_records: results.len(),
        n_failed: results.iter().filter(|r| r.error.is_some()).count(),
        n_labelled,
        n_agreeing,
        accuracy: (n_labelled > 0).then(|| n_agreeing as f64 / n_labelled as f64),
        distribution: results
            .iter()
            .filter_map(|r| r.predicted)
            .counts()
            .into_iter()
            .collect(),
        confusions: results
            .iter()
            .filter(|r| r.agrees() == Some(false))
            .filter_map(|r| Some(format!("{} -> {}", r.expected?, r.predicted?)))
            .counts()
            .into_iter()
            .collect(),
    }
}
