// ScoreCrab - GPL-3.0-or-later
// This file is part of ScoreCrab.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// ScoreCrab is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// ScoreCrab is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with ScoreCrab.  If not, see <https://www.gnu.org/licenses/>.

use crate::parser::Record;

/// Keep the `count` lowest-scoring records, ascending by score.
///
/// The sort is stable, so equal scores keep their input order. A `count` of
/// zero or below selects nothing, and a `count` past the end selects all.
#[must_use]
pub fn select_lowest(mut records: Vec<Record>, count: i64) -> Vec<Record> {
    let Ok(keep) = usize::try_from(count) else {
        tracing::debug!("Non-positive count {count}, selecting nothing");
        return Vec::new();
    };

    records.sort_by(|a, b| a.score.total_cmp(&b.score));
    records.truncate(keep);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(scores: &[(&str, f64)]) -> Vec<Record> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &(id, score))| Record::new(id, score, i + 1))
            .collect()
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.identifier.as_str()).collect()
    }

    #[test]
    fn test_select_lowest() {
        let input = records(&[("c", 1.0), ("a", 0.0), ("b", 0.5)]);
        let selected = select_lowest(input, 2);
        assert_eq!(ids(&selected), ["a", "b"]);
    }

    #[test]
    fn test_count_past_end_keeps_all() {
        let input = records(&[("c", 1.0), ("a", 0.0), ("b", 0.5)]);
        let selected = select_lowest(input, 10);
        assert_eq!(ids(&selected), ["a", "b", "c"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = records(&[
            ("x", 0.5),
            ("first", 0.0),
            ("y", 0.5),
            ("second", 0.0),
            ("z", 0.5),
        ]);
        let selected = select_lowest(input, 4);
        assert_eq!(ids(&selected), ["first", "second", "x", "y"]);
    }

    #[test]
    fn test_non_positive_count_selects_nothing() {
        let input = records(&[("a", 0.0), ("b", 1.0)]);
        assert!(select_lowest(input.clone(), 0).is_empty());
        assert!(select_lowest(input, -3).is_empty());
    }

    #[test]
    fn test_output_is_non_decreasing() {
        let input = records(&[
            ("a", 0.9),
            ("b", 0.1),
            ("c", 0.4),
            ("d", 0.0),
            ("e", 1.0),
            ("f", 0.4),
        ]);
        let selected = select_lowest(input, 6);
        assert!(selected.windows(2).all(|w| w[0].score <= w[1].score));
    }
}
