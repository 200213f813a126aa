use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::geometry::geo_enums::SpatialRelation;

static SINGLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'([A-Za-z]+)'").unwrap());
static DOUBLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([A-Za-z]+)""#).unwrap());

/// Keywords in the order they are looked for when no quoted label is found
const KEYWORDS: [SpatialRelation; 7] = [
    SpatialRelation::Within,
    SpatialRelation::Disjoint,
    SpatialRelation::Equals,
    SpatialRelation::Contains,
    SpatialRelation::Overlaps,
    SpatialRelation::Crosses,
    SpatialRelation::Touches,
];

/// Recovers the concluded relation from a narrated answer, e.g. `... relation = 'Touches'`.
///
/// In order of preference:
/// 1. the last quoted label on one of the last 10 non-empty lines, searched bottom-up (single quotes before double quotes)
/// 2. the last single-quoted word in the whole text, then the last double-quoted one, if it is a label
/// 3. a bare label on one of the last 5 lines, searched bottom-up
pub fn extract_relation(text: &str) -> Option<SpatialRelation> {
    let lines = text.trim().lines().collect::<Vec<_>>();

    for line in lines.iter().rev().take(10).map(|l| l.trim()) {
        if line.is_empty() {
            continue;
        }
        for re in [&SINGLE_QUOTED, &DOUBLE_QUOTED] {
            if let Some(relation) = last_quoted(re, line).and_then(parse_label) {
                return Some(relation);
            }
        }
    }

    for re in [&SINGLE_QUOTED, &DOUBLE_QUOTED] {
        if let Some(relation) = last_quoted(re, text).and_then(parse_label) {
            return Some(relation);
        }
    }

    lines
        .iter()
        .rev()
        .take(5)
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .find_map(|line| KEYWORDS.into_iter().find(|k| line.contains(k.as_str())))
}

fn last_quoted<'t>(re: &Regex, haystack: &'t str) -> Option<&'t str> {
    re.captures_iter(haystack)
        .last()
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn parse_label(label: &str) -> Option<SpatialRelation> {
    SpatialRelation::from_str(label).ok()
}
